//! Errors surfaced by project commands.

use crate::{
    costs::domain::CostLedgerError, error::ErrorKind, floor_plan::domain::FloorPlanError,
    kanban::services::KanbanServiceError,
};
use thiserror::Error;

/// Any command failure, by bounded context.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// A board command failed.
    #[error(transparent)]
    Kanban(#[from] KanbanServiceError),
    /// A floor plan command failed.
    #[error(transparent)]
    FloorPlan(#[from] FloorPlanError),
    /// A cost ledger command failed.
    #[error(transparent)]
    Costs(#[from] CostLedgerError),
}

impl ProjectError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Kanban(err) => err.kind(),
            Self::FloorPlan(err) => err.kind(),
            Self::Costs(err) => err.kind(),
        }
    }
}

/// Result type for project commands.
pub type ProjectResult<T> = Result<T, ProjectError>;
