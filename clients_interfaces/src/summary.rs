//! Texts shown to the customer in the order summary.
use orders::{OrderSelection, PricedOrder};

/// Shown instead of a price when the selection is incomplete.
pub const INCOMPLETE_ORDER_PROMPT: &str =
    "Please choose a size, a base, and at least one fruit to order your smoothie.";

/// Shown before the first order and after a reset.
pub const RESET_PLACEHOLDER: &str =
    "Fill in the form and click \"Order smoothie\" to see your custom blend and price.";

/// Builds the thank-you text for an accepted order: greeting, description,
/// total and, if any, the customer's special instructions.
pub fn compose(selection: &OrderSelection, priced: &PricedOrder) -> String {
    let mut text = match non_blank(selection.customer_name()) {
        Some(name) => format!("Thanks, {name}! "),
        None => "Thanks for your order! ".to_owned(),
    };
    text.push_str(priced.description());
    text.push_str(&format!(" Your total is ${}.", priced.price()));

    if let Some(notes) = non_blank(selection.notes()) {
        text.push_str(&format!(" Special instructions: \"{notes}\"."));
    }
    text
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
