//! Choices offered by the order form
//!
//! The calculator accepts any label; these lists are what the form offers
//! and what sample orders are drawn from.

pub const BASES: &[&str] = &["oat milk", "almond milk", "water", "yogurt", "coconut water"];

pub const FRUITS: &[&str] = &[
    "banana",
    "strawberry",
    "mango",
    "kiwi",
    "apple",
    "blueberry",
    "pineapple",
];

pub const EXTRAS: &[&str] = &["chia", "protein", "oats", "spinach", "flax"];

/// The first entry is the "no sweetener" sentinel.
pub const SWEETENERS: &[&str] = &[crate::calculator::NO_SWEETENER, "honey", "agave", "maple syrup"];
