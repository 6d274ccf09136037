//! Service layer for board commands and assignee-resolved views.
//!
//! The service does not own the board. Each command receives the board by
//! `&mut` from the state container that owns it.

use crate::{
    config::BoardConfig,
    error::ErrorKind,
    kanban::domain::{
        Board, BoardError, ColumnId, DragSession, KanbanDomainError, MoveOutcome, MoveRequest,
        Task, TaskFields, TaskId, TaskPriority,
    },
    team::{
        domain::{MemberId, TeamMember},
        ports::TeamDirectory,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating or editing a task.
///
/// Field values arrive as entered; the service validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetailsRequest {
    title: String,
    assignee_id: String,
    priority: TaskPriority,
    due_date: String,
}

impl TaskDetailsRequest {
    /// Creates a request with medium priority.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        assignee_id: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            assignee_id: assignee_id.into(),
            priority: TaskPriority::default(),
            due_date: due_date.into(),
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Service-level errors for board commands.
#[derive(Debug, Error)]
pub enum KanbanServiceError {
    /// Field validation failed.
    #[error(transparent)]
    Domain(#[from] KanbanDomainError),
    /// The board rejected the mutation.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The assignee is not on the team roster.
    #[error("unknown assignee: {0}")]
    UnknownAssignee(MemberId),
}

impl KanbanServiceError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::Board(err) => err.kind(),
            Self::UnknownAssignee(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Result type for kanban service operations.
pub type KanbanServiceResult<T> = Result<T, KanbanServiceError>;

/// A task with its assignee resolved through the team directory.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TaskCard<'a> {
    /// Task record.
    pub task: &'a Task,
    /// Assignee, or `None` when the roster no longer lists them.
    pub assignee: Option<TeamMember>,
}

/// One column of assignee-resolved task cards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ColumnCards<'a> {
    /// Column identifier.
    pub id: ColumnId,
    /// Column display title.
    pub title: &'a str,
    /// Cards in column order.
    pub cards: Vec<TaskCard<'a>>,
}

/// Kanban command orchestration service.
#[derive(Clone)]
pub struct KanbanService<D, C>
where
    D: TeamDirectory,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    clock: Arc<C>,
    config: BoardConfig,
}

impl<D, C> KanbanService<D, C>
where
    D: TeamDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new kanban service.
    #[must_use]
    pub const fn new(directory: Arc<D>, clock: Arc<C>, config: BoardConfig) -> Self {
        Self {
            directory,
            clock,
            config,
        }
    }

    /// Returns the crew roster in directory order.
    #[must_use]
    pub fn team_members(&self) -> Vec<TeamMember> {
        self.directory.members()
    }

    /// Creates an empty board with the configured column titles.
    #[must_use]
    pub fn new_board(&self) -> Board {
        Board::new(&self.config.titles)
    }

    /// Creates a task at the end of the first column.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Domain`] for blank or malformed fields
    /// and [`KanbanServiceError::UnknownAssignee`] when the assignee is not
    /// on the roster. The board is untouched on error.
    pub fn add_task(
        &self,
        board: &mut Board,
        request: TaskDetailsRequest,
    ) -> KanbanServiceResult<Task> {
        let fields = self.validate(request).inspect_err(|err| {
            warn!(error = %err, "rejected new task");
        })?;
        let task = board.add_task(fields, &*self.clock);
        info!(task_id = %task.id(), column = %task.column(), "task added");
        Ok(task)
    }

    /// Replaces a task's editable fields.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Board`] when the task does not exist,
    /// checked before the fields, and [`KanbanServiceError::Domain`] or
    /// [`KanbanServiceError::UnknownAssignee`] for invalid fields.
    pub fn edit_task(
        &self,
        board: &mut Board,
        task_id: TaskId,
        request: TaskDetailsRequest,
    ) -> KanbanServiceResult<Task> {
        if board.task(task_id).is_none() {
            let err = KanbanServiceError::Board(BoardError::TaskNotFound(task_id));
            warn!(task_id = %task_id, error = %err, "rejected task edit");
            return Err(err);
        }
        let fields = self.validate(request).inspect_err(|err| {
            warn!(task_id = %task_id, error = %err, "rejected task edit");
        })?;
        let task = board.edit_task(task_id, fields, &*self.clock)?;
        info!(task_id = %task_id, "task edited");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Board`] when the task does not exist.
    pub fn delete_task(&self, board: &mut Board, task_id: TaskId) -> KanbanServiceResult<Task> {
        let task = board.delete_task(task_id).inspect_err(|err| {
            warn!(task_id = %task_id, error = %err, "rejected task deletion");
        })?;
        info!(task_id = %task_id, column = %task.column(), "task deleted");
        Ok(task)
    }

    /// Moves a task within or between columns.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Board`] when the task does not exist or
    /// is not listed in the request's source column.
    pub fn move_task(
        &self,
        board: &mut Board,
        request: MoveRequest,
    ) -> KanbanServiceResult<MoveOutcome> {
        let outcome = board.move_task(request, &*self.clock).inspect_err(|err| {
            warn!(task_id = %request.task_id, error = %err, "rejected task move");
        })?;
        match outcome {
            MoveOutcome::Unchanged { column, index } => {
                debug!(task_id = %request.task_id, %column, index, "task move was a no-op");
            }
            MoveOutcome::Moved {
                from_index,
                column,
                index,
            } => {
                if from_index != request.source_index {
                    debug!(
                        task_id = %request.task_id,
                        requested = request.source_index,
                        actual = from_index,
                        "source index was stale; used scanned position"
                    );
                }
                info!(
                    task_id = %request.task_id,
                    from = %request.source_column,
                    to = %column,
                    index,
                    "task moved"
                );
            }
        }
        Ok(outcome)
    }

    /// Completes a drag by dropping onto a column position.
    ///
    /// Returns `Ok(None)` when no drag was in progress or the pointer is over
    /// no column. The session is idle afterwards whether or not the move
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanServiceError::Board`] when the dragged task no longer
    /// sits in the column the drag started from.
    pub fn drop_dragged(
        &self,
        board: &mut Board,
        session: &mut DragSession,
        dest_column: ColumnId,
        dest_index: usize,
    ) -> KanbanServiceResult<Option<MoveOutcome>> {
        if let (Some(task_id), None) = (session.dragged_task(), session.hovered_column()) {
            debug!(task_id = %task_id, "drop outside every column cancelled the drag");
        }
        session
            .drop_on(dest_column, dest_index)
            .map(|request| self.move_task(board, request))
            .transpose()
    }

    /// Resolves every column into task cards with assignee details.
    #[must_use]
    pub fn column_cards<'a>(&self, board: &'a Board) -> Vec<ColumnCards<'a>> {
        board
            .column_views()
            .into_iter()
            .map(|view| ColumnCards {
                id: view.id,
                title: view.title,
                cards: view
                    .tasks
                    .into_iter()
                    .map(|task| TaskCard {
                        task,
                        assignee: self.directory.find_by_id(task.assignee_id()),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Returns unfinished tasks whose due date is before today's UTC date,
    /// in board order.
    #[must_use]
    pub fn overdue_tasks<'a>(&self, board: &'a Board) -> Vec<&'a Task> {
        let today = self.clock.utc().date_naive();
        board
            .column_views()
            .into_iter()
            .flat_map(|view| view.tasks)
            .filter(|task| task.is_overdue(today))
            .collect()
    }

    fn validate(&self, request: TaskDetailsRequest) -> KanbanServiceResult<TaskFields> {
        let TaskDetailsRequest {
            title,
            assignee_id,
            priority,
            due_date,
        } = request;
        let assignee =
            MemberId::new(assignee_id).map_err(|_| KanbanDomainError::EmptyAssignee)?;
        let parsed_due_date = TaskFields::parse_due_date(&due_date)?;
        let fields = TaskFields::new(title, assignee, priority, parsed_due_date)?;
        fields.ensure_title_within(self.config.max_title_length)?;
        if self.directory.find_by_id(fields.assignee_id()).is_none() {
            return Err(KanbanServiceError::UnknownAssignee(
                fields.assignee_id().clone(),
            ));
        }
        Ok(fields)
    }
}
