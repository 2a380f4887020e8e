//! Pricing and description of full smoothie orders.

use orders::{
    compute_price, describe, price_order, validate, OrderSelection, Price, NO_SWEETENER,
};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::small_banana(
    OrderSelection::new()
        .with_size("small")
        .with_base("oat milk")
        .with_fruit("banana")
        .with_sweetener(NO_SWEETENER),
    475
)]
#[case::medium_honey(
    OrderSelection::new()
        .with_size("medium")
        .with_base("water")
        .with_fruits(["mango", "kiwi"])
        .with_extra("chia")
        .with_sweetener("honey"),
    760
)]
#[case::large_two_extras(
    OrderSelection::new()
        .with_size("large")
        .with_base("yogurt")
        .with_fruit("apple")
        .with_extras(["protein", "oats"])
        .with_sweetener(NO_SWEETENER),
    835
)]
fn menu_prices(#[case] selection: OrderSelection, #[case] cents: u64) {
    assert!(validate(&selection));
    assert_eq!(compute_price(&selection), Price::from_cents(cents));
}

#[test]
fn medium_honey_renders_as_seven_sixty() {
    let selection = OrderSelection::new()
        .with_size("medium")
        .with_base("water")
        .with_fruits(["mango", "kiwi"])
        .with_extra("chia")
        .with_sweetener("honey");
    let priced = price_order(&selection).unwrap();
    assert_eq!(priced.price().to_string(), "7.60");
    assert_eq!(priced.price().as_f64(), 7.6);
}

#[rstest]
#[case::no_size(OrderSelection::new().with_base("water").with_fruit("kiwi"))]
#[case::unknown_size(OrderSelection::new().with_size("huge").with_base("water").with_fruit("kiwi"))]
#[case::no_base(OrderSelection::new().with_size("small").with_fruit("kiwi"))]
#[case::no_fruit(OrderSelection::new().with_size("small").with_base("water").with_extra("chia"))]
fn incomplete_selections_are_not_priced(#[case] selection: OrderSelection) {
    assert!(!validate(&selection));
    assert!(price_order(&selection).is_err());
}

fn label() -> impl Strategy<Value = String> {
    "[a-z ]{0,12}"
}

fn selection() -> impl Strategy<Value = OrderSelection> {
    (
        prop_oneof![
            Just(String::new()),
            Just("small".to_owned()),
            Just("medium".to_owned()),
            Just("large".to_owned()),
            label(),
        ],
        label(),
        prop::collection::vec(label(), 0..6),
        prop::collection::vec(label(), 0..6),
        prop::option::of(prop_oneof![Just(NO_SWEETENER.to_owned()), label()]),
    )
        .prop_map(|(size, base, fruits, extras, sweetener)| {
            let selection = OrderSelection::new()
                .with_size(size)
                .with_base(base)
                .with_fruits(fruits)
                .with_extras(extras);
            match sweetener {
                Some(sweetener) => selection.with_sweetener(sweetener),
                None => selection,
            }
        })
}

proptest! {
    #[test]
    fn prop_price_and_description_are_idempotent(selection in selection()) {
        prop_assert_eq!(compute_price(&selection), compute_price(&selection));
        prop_assert_eq!(describe(&selection), describe(&selection));
    }

    #[test]
    fn prop_price_has_two_decimals(selection in selection()) {
        let rendered = compute_price(&selection).to_string();
        let (_, decimals) = rendered.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 2);
    }

    #[test]
    fn prop_price_order_only_accepts_valid_selections(selection in selection()) {
        prop_assert_eq!(price_order(&selection).is_ok(), validate(&selection));
    }

    #[test]
    fn prop_empty_extras_render_as_no_extras(selection in selection()) {
        let description = describe(&selection);
        if selection.extras().is_empty() {
            prop_assert!(description.contains("; no extras; "));
        }
        prop_assert!(description.ends_with('.'));
    }

    #[test]
    fn prop_each_fruit_adds_seventy_five_cents(selection in selection(), fruit in label()) {
        let more = selection.clone().with_fruit(fruit);
        prop_assert_eq!(compute_price(&more).cents(), compute_price(&selection).cents() + 75);
    }
}
