//! Instance loading errors.

use std::fmt;

/// Error raised while reading or validating an instance.
///
/// Every malformed instance is rejected here, before any solver runs.
#[derive(Debug)]
pub enum InstanceLoadError {
    /// The instance file could not be read.
    Io(std::io::Error),
    /// The input ended while `expected` was still to be read.
    UnexpectedEof {
        /// Description of the missing value.
        expected: String,
    },
    /// A token could not be parsed as `expected`.
    InvalidToken {
        /// Description of the value being read.
        expected: String,
        /// The offending token.
        token: String,
    },
    /// The element pool is empty.
    NoElements,
    /// Capacity is negative or non-finite.
    InvalidCapacity(f64),
    /// An element weight is negative or non-finite.
    InvalidWeight {
        /// Element ID.
        element: usize,
        /// Offending weight.
        weight: f64,
    },
    /// An item profit is negative or non-finite.
    InvalidProfit {
        /// Item ID.
        item: usize,
        /// Offending profit.
        profit: f64,
    },
    /// A union references an element outside the pool.
    ElementOutOfRange {
        /// Item ID.
        item: usize,
        /// Referenced element ID.
        element: usize,
        /// Pool size.
        num_elements: usize,
    },
    /// An incidence entry is neither 0 nor 1.
    InvalidIncidence {
        /// Item ID (row).
        item: usize,
        /// Element ID (column).
        element: usize,
        /// Offending value.
        value: u8,
    },
    /// Two sizes that must agree do not.
    DimensionMismatch {
        /// What was counted.
        what: &'static str,
        /// Expected count.
        expected: usize,
        /// Actual count.
        found: usize,
    },
}

impl fmt::Display for InstanceLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read instance: {e}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input while reading {expected}")
            }
            Self::InvalidToken { expected, token } => {
                write!(f, "invalid {expected}: {token:?}")
            }
            Self::NoElements => write!(f, "instance has no elements"),
            Self::InvalidCapacity(c) => write!(f, "invalid capacity {c}"),
            Self::InvalidWeight { element, weight } => {
                write!(f, "element {element} has invalid weight {weight}")
            }
            Self::InvalidProfit { item, profit } => {
                write!(f, "item {item} has invalid profit {profit}")
            }
            Self::ElementOutOfRange {
                item,
                element,
                num_elements,
            } => write!(
                f,
                "item {item} requires element {element}, but only {num_elements} elements exist"
            ),
            Self::InvalidIncidence {
                item,
                element,
                value,
            } => write!(
                f,
                "incidence entry ({item}, {element}) must be 0 or 1, got {value}"
            ),
            Self::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(f, "expected {expected} {what}, found {found}"),
        }
    }
}

impl std::error::Error for InstanceLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InstanceLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
