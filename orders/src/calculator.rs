//! Pricing and description of a smoothie selection.
//!
//! Every function here is pure: the same selection always yields the same
//! price and the same sentence.

use crate::error::{OrderError, RequiredField};
use crate::order::OrderSelection;
use crate::price::Price;
use crate::priced_order::PricedOrder;

/// Sweetener label meaning the customer explicitly asked for none.
pub const NO_SWEETENER: &str = "none";

const FRUIT_PRICE: Price = Price::from_cents(75);
const EXTRA_PRICE: Price = Price::from_cents(80);
const SWEETENER_SURCHARGE: Price = Price::from_cents(30);

/// Total price of the selection.
///
/// Never fails: an unknown or unset size adds nothing, and every fruit and
/// extra entry is charged, repeated labels included.
pub fn compute_price(selection: &OrderSelection) -> Price {
    let size = selection
        .size()
        .map(|size| size.base_price())
        .unwrap_or(Price::ZERO);
    let sweetener = if adds_sweetener(selection) {
        SWEETENER_SURCHARGE
    } else {
        Price::ZERO
    };

    size + FRUIT_PRICE.times(selection.fruits().len())
        + EXTRA_PRICE.times(selection.extras().len())
        + sweetener
}

// An empty label counts as omitted.
fn adds_sweetener(selection: &OrderSelection) -> bool {
    matches!(selection.sweetener(), Some(label) if !label.is_empty() && label != NO_SWEETENER)
}

/// One sentence describing the smoothie, e.g.
/// `"Small smoothie with oat milk, featuring banana; no extras; and no added sweetener."`
///
/// Missing fields leave their slot in the sentence empty.
pub fn describe(selection: &OrderSelection) -> String {
    let size = capitalize(selection.size_label());
    let fruits = selection.fruits().join(", ");
    let extras = if selection.extras().is_empty() {
        "no extras".to_owned()
    } else {
        selection.extras().join(", ")
    };
    let sweetener = match selection.sweetener() {
        Some(NO_SWEETENER) => "no added sweetener",
        Some(label) => label,
        None => "",
    };

    format!(
        "{size} smoothie with {}, featuring {fruits}; {extras}; and {sweetener}.",
        selection.base()
    )
}

/// Whether the selection has a known size, a base and at least one fruit.
pub fn validate(selection: &OrderSelection) -> bool {
    missing_fields(selection).is_empty()
}

/// Required fields the selection lacks, in form order.
pub fn missing_fields(selection: &OrderSelection) -> Vec<RequiredField> {
    let mut missing = Vec::new();
    if selection.size().is_none() {
        missing.push(RequiredField::Size);
    }
    if selection.base().is_empty() {
        missing.push(RequiredField::Base);
    }
    if selection.fruits().is_empty() {
        missing.push(RequiredField::Fruit);
    }
    missing
}

/// Validates the selection, then prices and describes it.
pub fn price_order(selection: &OrderSelection) -> Result<PricedOrder, OrderError> {
    let missing = missing_fields(selection);
    if !missing.is_empty() {
        return Err(OrderError::IncompleteSelection { missing });
    }
    Ok(PricedOrder::new(compute_price(selection), describe(selection)))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
