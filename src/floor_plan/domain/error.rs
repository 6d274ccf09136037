//! Error types for floor plan commands.

use super::PointId;
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned by floor plan commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FloorPlanError {
    /// The plan holds no point with this identifier.
    #[error("point not found: {0}")]
    PointNotFound(PointId),

    /// The checklist has no item at the given position.
    #[error("point {point_id} has {len} checklist items, no item at {index}")]
    ChecklistIndexOutOfRange {
        /// Point whose checklist was addressed.
        point_id: PointId,
        /// Requested item position.
        index: usize,
        /// Number of checklist items.
        len: usize,
    },
}

impl FloorPlanError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PointNotFound(_) => ErrorKind::NotFound,
            Self::ChecklistIndexOutOfRange { .. } => ErrorKind::InvalidInput,
        }
    }
}
