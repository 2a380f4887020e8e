//! Cup sizes a smoothie can be ordered in

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::price::Price;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SmoothieSize {
    Small,
    Medium,
    Large,
}

impl SmoothieSize {
    /// Returns all the possible values of SmoothieSize
    pub fn values() -> Vec<SmoothieSize> {
        vec![SmoothieSize::Small, SmoothieSize::Medium, SmoothieSize::Large]
    }

    /// Looks up a size by the label the order form submits. Matching is
    /// exact: `"Small"` or `" small"` are not known sizes.
    pub fn from_label(label: &str) -> Option<SmoothieSize> {
        match label {
            "small" => Some(SmoothieSize::Small),
            "medium" => Some(SmoothieSize::Medium),
            "large" => Some(SmoothieSize::Large),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SmoothieSize::Small => "small",
            SmoothieSize::Medium => "medium",
            SmoothieSize::Large => "large",
        }
    }

    /// Price of the cup before fruits, extras and sweetener are added
    pub fn base_price(&self) -> Price {
        match self {
            SmoothieSize::Small => Price::from_cents(400),
            SmoothieSize::Medium => Price::from_cents(500),
            SmoothieSize::Large => Price::from_cents(600),
        }
    }
}

impl fmt::Display for SmoothieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
