//! Crate-wide error classification.

use serde::{Deserialize, Serialize};

/// Coarse classification shared by every command error.
///
/// Each error is locally recoverable: the rejected command leaves state
/// untouched and the caller may retry with corrected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The command referenced an entity that does not exist.
    NotFound,
    /// A required field was missing, empty, or malformed.
    InvalidInput,
}
