//! Smoothie orders: the selection a customer makes and how it is priced
//! and described.
pub mod calculator;
pub mod error;
pub mod menu;
pub mod order;
pub mod price;
pub mod priced_order;
pub mod smoothie_size;

pub use calculator::{compute_price, describe, price_order, validate, NO_SWEETENER};
pub use error::{OrderError, RequiredField};
pub use order::OrderSelection;
pub use price::Price;
pub use priced_order::PricedOrder;
pub use smoothie_size::SmoothieSize;
