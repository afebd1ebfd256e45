//! Error types for the dynamic array and its cursor.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// Removing a value that is not present is not an error: the persistent
/// `remove` returns an unchanged copy instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Indexed read or write outside `[0, len)`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Logical length of the array at the time of the access.
        len: usize,
    },
    /// A cursor has produced every element, or was requested over an
    /// absent array.
    Exhausted,
    /// An [`ArrayConfig`](crate::ArrayConfig) failed validation.
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: String,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Exhausted => write!(f, "cursor exhausted"),
            Self::InvalidConfig { reason } => write!(f, "invalid array config: {reason}"),
        }
    }
}

impl Error for ArrayError {}
