//! How full the smoothie cup on the screen is drawn, and in which colours.
use orders::SmoothieSize;

/// Two colours the liquid fades between, from the top of the cup down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gradient {
    top: &'static str,
    bottom: &'static str,
}

/// Fill directive handed to a screen: either the neutral empty cup or a
/// size's fill level with its gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CupFill {
    height_percent: u8,
    gradient: Option<Gradient>,
}

impl CupFill {
    /// The neutral cup shown before an order and after a reset
    pub const fn empty() -> CupFill {
        CupFill {
            height_percent: 0,
            gradient: None,
        }
    }

    pub fn for_size(size: SmoothieSize) -> CupFill {
        let (height_percent, top, bottom) = match size {
            SmoothieSize::Small => (50, "#ffd5e8", "#ff9ec4"),
            SmoothieSize::Medium => (65, "#ffe0b2", "#ffb74d"),
            SmoothieSize::Large => (80, "#c5e1a5", "#8bc34a"),
        };
        CupFill {
            height_percent,
            gradient: Some(Gradient { top, bottom }),
        }
    }

    pub fn height_percent(&self) -> u8 {
        self.height_percent
    }

    pub fn is_empty(&self) -> bool {
        self.height_percent == 0
    }

    /// Fill level as a CSS height, e.g. `"65%"`
    pub fn css_height(&self) -> String {
        format!("{}%", self.height_percent)
    }

    /// Gradient as a CSS background; `None` leaves the background untouched.
    pub fn css_background(&self) -> Option<String> {
        self.gradient
            .map(|g| format!("linear-gradient(180deg, {}, {})", g.top, g.bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SmoothieSize::Small, "50%", "linear-gradient(180deg, #ffd5e8, #ff9ec4)")]
    #[case(SmoothieSize::Medium, "65%", "linear-gradient(180deg, #ffe0b2, #ffb74d)")]
    #[case(SmoothieSize::Large, "80%", "linear-gradient(180deg, #c5e1a5, #8bc34a)")]
    fn test_fill_per_size(
        #[case] size: SmoothieSize,
        #[case] height: &str,
        #[case] background: &str,
    ) {
        let fill = CupFill::for_size(size);
        assert_eq!(fill.css_height(), height);
        assert_eq!(fill.css_background().as_deref(), Some(background));
        assert!(!fill.is_empty());
    }

    #[test]
    fn test_empty_cup_has_no_background() {
        let fill = CupFill::empty();
        assert_eq!(fill.css_height(), "0%");
        assert_eq!(fill.css_background(), None);
        assert!(fill.is_empty());
    }
}
