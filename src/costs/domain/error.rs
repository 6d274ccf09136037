//! Error types for cost ledger commands.

use super::{CostEntryId, Money};
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned by cost ledger commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CostLedgerError {
    /// The entry description is empty after trimming.
    #[error("cost entry description must not be empty")]
    EmptyDescription,

    /// Entry amounts must be above zero.
    #[error("cost entry amount must be positive, got {0}")]
    NonPositiveAmount(Money),

    /// A baseline figure is below zero.
    #[error("{field} must not be negative, got {amount}")]
    NegativeBaseline {
        /// Name of the offending baseline figure.
        field: &'static str,
        /// Rejected amount.
        amount: Money,
    },

    /// The ledger holds no entry with this identifier.
    #[error("cost entry not found: {0}")]
    EntryNotFound(CostEntryId),
}

impl CostLedgerError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EntryNotFound(_) => ErrorKind::NotFound,
            Self::EmptyDescription | Self::NonPositiveAmount(_) | Self::NegativeBaseline { .. } => {
                ErrorKind::InvalidInput
            }
        }
    }
}

/// Error returned when a monetary amount cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid amount: {0:?}")]
pub struct ParseMoneyError(pub String);

/// Error returned when a cost category name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown cost category: {0}")]
pub struct ParseCostCategoryError(pub String);
