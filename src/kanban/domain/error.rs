//! Error types for kanban validation, parsing, and board mutations.

use super::{ColumnId, TaskId};
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned while validating task fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KanbanDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured limit.
    #[error("task title has {actual} characters, limit is {max}")]
    TitleTooLong {
        /// Configured maximum.
        max: usize,
        /// Length of the rejected title.
        actual: usize,
    },

    /// No assignee was given.
    #[error("task assignee must not be empty")]
    EmptyAssignee,

    /// No due date was given.
    #[error("task due date must not be empty")]
    MissingDueDate,

    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
}

impl KanbanDomainError {
    /// Classifies the error; field validation always reports invalid input.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Errors returned by board mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The board holds no task with this identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task exists but is not listed in the named source column.
    #[error("task {task_id} is not in column {column}")]
    TaskNotInColumn {
        /// Task that was to be moved.
        task_id: TaskId,
        /// Column the caller expected it in.
        column: ColumnId,
    },
}

impl BoardError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskNotFound(_) | Self::TaskNotInColumn { .. } => ErrorKind::NotFound,
        }
    }
}

/// A breach of the board's single-ownership invariants.
///
/// Board mutations never produce these; [`super::Board::verify`] reports
/// them for boards assembled by other means.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The id appears more than once across the column lists.
    #[error("task {0} is listed more than once")]
    DuplicateMembership(TaskId),

    /// The task is not listed in any column.
    #[error("task {0} is not listed in any column")]
    Unlisted(TaskId),

    /// A column lists an id with no task record.
    #[error("column {column} lists unknown task {task_id}")]
    DanglingId {
        /// Column holding the id.
        column: ColumnId,
        /// Unknown identifier.
        task_id: TaskId,
    },

    /// The task's recorded column differs from the list holding it.
    #[error("task {task_id} records column {recorded} but is listed in {listed}")]
    ColumnMismatch {
        /// Task identifier.
        task_id: TaskId,
        /// Column stored on the task.
        recorded: ColumnId,
        /// Column whose list contains the id.
        listed: ColumnId,
    },
}

/// Error returned while parsing column identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnIdError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
