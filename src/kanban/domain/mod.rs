//! Domain model for the kanban board.
//!
//! The [`Board`] aggregate owns both the ordered column membership lists and
//! the task lookup table, so the single-ownership invariant is enforced in
//! one place.

mod board;
mod column;
mod drag;
mod error;
mod ids;
mod task;

pub use board::{Board, ColumnView, MoveOutcome, MoveRequest};
pub use column::{Column, ColumnId, ColumnTitles};
pub use drag::{DragSession, DragState};
pub use error::{
    BoardError, InvariantViolation, KanbanDomainError, ParseColumnIdError, ParsePriorityError,
};
pub use ids::TaskId;
pub use task::{Task, TaskFields, TaskPriority};
