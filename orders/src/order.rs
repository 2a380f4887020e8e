//! Represents the choices a customer made on the smoothie order form
use serde::{Deserialize, Deserializer, Serialize};

use crate::smoothie_size::SmoothieSize;

/// A single smoothie selection as read from the form.
///
/// Fields are kept as the raw labels the form submitted: a size the menu
/// does not know, an empty base or an empty fruit list are all
/// representable, and [`crate::calculator::validate`] decides whether the
/// selection can be ordered.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderSelection {
    #[serde(deserialize_with = "null_as_default")]
    size: String,
    #[serde(deserialize_with = "null_as_default")]
    base: String,
    #[serde(deserialize_with = "null_as_default")]
    fruits: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    extras: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sweetener: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

// An explicit `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl OrderSelection {
    /// Creates an empty selection: no size, no base, nothing added
    pub fn new() -> OrderSelection {
        OrderSelection::default()
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_fruit(mut self, fruit: impl Into<String>) -> Self {
        self.fruits.push(fruit.into());
        self
    }

    /// Appends fruits in the given order. Repeated labels are kept.
    pub fn with_fruits<I, T>(mut self, fruits: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.fruits.extend(fruits.into_iter().map(Into::into));
        self
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extras.push(extra.into());
        self
    }

    pub fn with_extras<I, T>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.extras.extend(extras.into_iter().map(Into::into));
        self
    }

    /// Sets the sweetener label; pass [`crate::calculator::NO_SWEETENER`]
    /// for an explicit "no sweetener".
    pub fn with_sweetener(mut self, sweetener: impl Into<String>) -> Self {
        self.sweetener = Some(sweetener.into());
        self
    }

    pub fn with_customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = Some(customer_name.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// To obtain the size label exactly as submitted, empty when unset
    pub fn size_label(&self) -> &str {
        &self.size
    }

    /// To obtain the size if it is one the menu knows
    pub fn size(&self) -> Option<SmoothieSize> {
        SmoothieSize::from_label(&self.size)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn fruits(&self) -> &[String] {
        &self.fruits
    }

    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    pub fn sweetener(&self) -> Option<&str> {
        self.sweetener.as_deref()
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
