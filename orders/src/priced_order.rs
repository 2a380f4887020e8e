//! Represents a smoothie order that passed validation and was priced

use crate::price::Price;

/// Contains the total price of the smoothie and the sentence describing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedOrder {
    price: Price,
    description: String,
}

impl PricedOrder {
    /// Creates a new priced order
    /// # Arguments
    /// * `price` - The total price of the smoothie
    /// * `description` - The human-readable description of the smoothie
    /// # Returns
    /// * A PricedOrder
    pub fn new(price: Price, description: String) -> PricedOrder {
        PricedOrder { price, description }
    }

    /// To obtain the total price of this order
    pub fn price(&self) -> Price {
        self.price
    }

    /// To obtain the description of this order
    pub fn description(&self) -> &str {
        &self.description
    }
}
