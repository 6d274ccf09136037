//! Drag-and-drop interaction as an explicit state machine.
//!
//! A drag is a three-phase protocol: grab, hover, then drop or cancel. The
//! session never touches the board; a successful drop yields a
//! [`MoveRequest`] for the caller to apply.

use super::{ColumnId, MoveRequest, TaskId};
use serde::{Deserialize, Serialize};

/// Tracking data for an in-flight drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragState {
    /// Task being dragged.
    pub task_id: TaskId,
    /// Column the drag started in.
    pub source_column: ColumnId,
    /// Position the drag started at.
    pub source_index: usize,
    /// Column currently under the pointer, if any.
    pub hover: Option<ColumnId>,
}

/// Drag interaction state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragSession {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging(DragState),
}

impl DragSession {
    /// Starts dragging a task, replacing any drag already in progress.
    pub fn grab(&mut self, task_id: TaskId, source_column: ColumnId, source_index: usize) {
        *self = Self::Dragging(DragState {
            task_id,
            source_column,
            source_index,
            hover: None,
        });
    }

    /// Records the column under the pointer. Ignored while idle.
    pub const fn hover(&mut self, column: ColumnId) {
        if let Self::Dragging(state) = self {
            state.hover = Some(column);
        }
    }

    /// Records that the pointer left every column. Ignored while idle.
    pub const fn leave(&mut self) {
        if let Self::Dragging(state) = self {
            state.hover = None;
        }
    }

    /// Ends the drag over a column and returns the move to apply.
    ///
    /// Returns `None` when no drag was in progress, or when the pointer is
    /// over no column, in which case the drop cancels the drag.
    pub fn drop_on(&mut self, dest_column: ColumnId, dest_index: usize) -> Option<MoveRequest> {
        match std::mem::take(self) {
            Self::Idle | Self::Dragging(DragState { hover: None, .. }) => None,
            Self::Dragging(state) => Some(MoveRequest::new(
                state.task_id,
                state.source_column,
                dest_column,
                state.source_index,
                dest_index,
            )),
        }
    }

    /// Abandons the drag without producing a move.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn dragged_task(&self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging(state) => Some(state.task_id),
        }
    }

    /// Returns the column under the pointer, if any.
    #[must_use]
    pub const fn hovered_column(&self) -> Option<ColumnId> {
        match self {
            Self::Idle => None,
            Self::Dragging(state) => state.hover,
        }
    }
}
