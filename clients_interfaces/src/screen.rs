//! Represents the customer-facing screen of the smoothie machine
//!
//! The screen only renders: an [`OrderForm`] reads a selection, validates
//! it, prices it and tells the screen what to show.

use orders::{price_order, OrderError, OrderSelection, PricedOrder};
use tracing::{debug, info, warn};

use crate::cup_fill::CupFill;
use crate::summary::{self, INCOMPLETE_ORDER_PROMPT, RESET_PLACEHOLDER};

/// Rendering collaborator of the order form.
#[cfg_attr(test, mockall::automock)]
pub trait Screen {
    /// Replaces the summary text.
    fn show_summary(&mut self, text: &str);

    /// Redraws the cup with the given fill.
    fn fill_cup(&mut self, fill: &CupFill);
}

/// The order form: takes selections from the customer and drives a screen
/// with the result.
pub struct OrderForm<S: Screen> {
    screen: S,
}

impl<S: Screen> OrderForm<S> {
    /// Creates the form and draws the neutral empty cup on the screen.
    pub fn new(mut screen: S) -> OrderForm<S> {
        screen.fill_cup(&CupFill::empty());
        OrderForm { screen }
    }

    /// Submits a selection.
    ///
    /// An incomplete selection shows the prompt and leaves the cup as it
    /// was; the error says which fields were missing. A complete one shows
    /// the summary and fills the cup for its size.
    pub fn submit(&mut self, selection: &OrderSelection) -> Result<PricedOrder, OrderError> {
        let priced = match price_order(selection) {
            Ok(priced) => priced,
            Err(e) => {
                warn!(error = %e, "smoothie selection rejected");
                self.screen.show_summary(INCOMPLETE_ORDER_PROMPT);
                return Err(e);
            }
        };
        debug!(price = %priced.price(), description = priced.description(), "smoothie priced");

        self.screen.show_summary(&summary::compose(selection, &priced));
        if let Some(size) = selection.size() {
            self.screen.fill_cup(&CupFill::for_size(size));
            info!(%size, total = %priced.price(), "smoothie ordered");
        }
        Ok(priced)
    }

    /// Clears the form: placeholder text and an empty cup.
    pub fn reset(&mut self) {
        debug!("order form reset");
        self.screen.show_summary(RESET_PLACEHOLDER);
        self.screen.fill_cup(&CupFill::empty());
    }

    pub fn into_screen(self) -> S {
        self.screen
    }
}
