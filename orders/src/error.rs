//! Error types for smoothie orders.

use std::fmt;

use thiserror::Error;

/// A field the order form requires before a smoothie can be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Size,
    Base,
    Fruit,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Size => f.write_str("size"),
            RequiredField::Base => f.write_str("base"),
            RequiredField::Fruit => f.write_str("at least one fruit"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("incomplete selection, missing {}", join_fields(.missing))]
    IncompleteSelection { missing: Vec<RequiredField> },
}

impl OrderError {
    /// The required fields the selection lacked
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            OrderError::IncompleteSelection { missing } => missing,
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
