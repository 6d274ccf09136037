//! Board aggregate root, move operation, and derived column views.

use super::{
    BoardError, Column, ColumnId, ColumnTitles, InvariantViolation, Task, TaskFields, TaskId,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Relocation of one task to a column position.
///
/// `source_index` is advisory: the board locates the task in
/// `source_column` itself, so stale coordinates cannot corrupt the lists.
/// It only decides the same-column no-op, where equal source and
/// destination indices mean "leave it where it is".
/// `dest_index` is relative to the destination list with the task already
/// removed, and indices past the end append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Task to move.
    pub task_id: TaskId,
    /// Column the caller believes holds the task.
    pub source_column: ColumnId,
    /// Column to move the task into.
    pub dest_column: ColumnId,
    /// Position the caller believes the task is at.
    pub source_index: usize,
    /// Requested position in the destination column.
    pub dest_index: usize,
}

impl MoveRequest {
    /// Creates a move request.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        source_column: ColumnId,
        dest_column: ColumnId,
        source_index: usize,
        dest_index: usize,
    ) -> Self {
        Self {
            task_id,
            source_column,
            dest_column,
            source_index,
            dest_index,
        }
    }
}

/// Result of applying a [`MoveRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The task was already at the requested position.
    Unchanged {
        /// Column holding the task.
        column: ColumnId,
        /// Position of the task.
        index: usize,
    },
    /// The task was relocated.
    Moved {
        /// Position the task was found at before the move.
        from_index: usize,
        /// Column now holding the task.
        column: ColumnId,
        /// Position the task landed at.
        index: usize,
    },
}

/// Display projection of one column with its tasks resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView<'a> {
    /// Column identifier.
    pub id: ColumnId,
    /// Column display title.
    pub title: &'a str,
    /// Tasks in column order.
    pub tasks: Vec<&'a Task>,
}

/// Kanban board aggregate root.
///
/// Owns the three ordered column lists and the task lookup table. Every
/// mutation checks its preconditions before touching either, so a rejected
/// command leaves the board unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    todo: Column,
    in_progress: Column,
    done: Column,
    tasks: HashMap<TaskId, Task>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&ColumnTitles::default())
    }
}

impl Board {
    /// Creates an empty board with the given column titles.
    #[must_use]
    pub fn new(titles: &ColumnTitles) -> Self {
        Self {
            todo: Column::new(ColumnId::Todo, titles.title_for(ColumnId::Todo)),
            in_progress: Column::new(
                ColumnId::InProgress,
                titles.title_for(ColumnId::InProgress),
            ),
            done: Column::new(ColumnId::Done, titles.title_for(ColumnId::Done)),
            tasks: HashMap::new(),
        }
    }

    /// Returns a column by identifier.
    #[must_use]
    pub const fn column(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Done => &self.done,
        }
    }

    const fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Returns every column in board order.
    #[must_use]
    pub const fn columns(&self) -> [&Column; 3] {
        [&self.todo, &self.in_progress, &self.done]
    }

    /// Returns a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Returns every task, in no particular order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Creates a task at the end of the initial column.
    pub fn add_task(&mut self, fields: TaskFields, clock: &impl Clock) -> Task {
        let task = Task::new(fields, clock);
        self.column_mut(task.column()).push(task.id());
        self.tasks.insert(task.id(), task.clone());
        task
    }

    /// Replaces a task's editable fields, keeping its column and position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] if the board holds no such task.
    pub fn edit_task(
        &mut self,
        id: TaskId,
        fields: TaskFields,
        clock: &impl Clock,
    ) -> Result<Task, BoardError> {
        let task = self.tasks.get_mut(&id).ok_or(BoardError::TaskNotFound(id))?;
        task.apply_fields(fields, clock);
        Ok(task.clone())
    }

    /// Removes a task from the task set and from the column listing it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] if the board holds no such task.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task, BoardError> {
        let task = self.tasks.remove(&id).ok_or(BoardError::TaskNotFound(id))?;
        for column in ColumnId::ALL {
            self.column_mut(column).remove(id);
        }
        Ok(task)
    }

    /// Relocates a task within or between columns.
    ///
    /// The task's current index is located by scanning the source column.
    /// A same-column request whose source and destination indices are equal
    /// is a no-op, whatever the scanned position.
    /// Within one column the task is spliced out and then inserted at
    /// `dest_index` of the shortened list; across columns it is inserted at
    /// `dest_index` of the untouched destination list and its column is
    /// updated.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] if the board holds no such task
    /// and [`BoardError::TaskNotInColumn`] if the source column does not
    /// list it.
    pub fn move_task(
        &mut self,
        request: MoveRequest,
        clock: &impl Clock,
    ) -> Result<MoveOutcome, BoardError> {
        let MoveRequest {
            task_id,
            source_column,
            dest_column,
            source_index,
            dest_index,
        } = request;
        if !self.tasks.contains_key(&task_id) {
            return Err(BoardError::TaskNotFound(task_id));
        }
        let from_index = self
            .column(source_column)
            .position(task_id)
            .ok_or(BoardError::TaskNotInColumn {
                task_id,
                column: source_column,
            })?;

        let same_column = source_column == dest_column;
        let target_len = if same_column {
            self.column(dest_column).len().saturating_sub(1)
        } else {
            self.column(dest_column).len()
        };
        if same_column && (source_index == dest_index || dest_index.min(target_len) == from_index)
        {
            return Ok(MoveOutcome::Unchanged {
                column: source_column,
                index: from_index,
            });
        }

        self.column_mut(source_column).remove(task_id);
        let index = self
            .column_mut(dest_column)
            .insert_clamped(dest_index, task_id);

        if !same_column {
            if let Some(task) = self.tasks.get_mut(&task_id) {
                task.relocate(dest_column, clock);
            }
        }

        Ok(MoveOutcome::Moved {
            from_index,
            column: dest_column,
            index,
        })
    }

    /// Resolves every column's ids into task records for display.
    ///
    /// Ids without a task record are skipped rather than reported.
    #[must_use]
    pub fn column_views(&self) -> Vec<ColumnView<'_>> {
        self.columns()
            .into_iter()
            .map(|column| ColumnView {
                id: column.id(),
                title: column.title(),
                tasks: column
                    .task_ids()
                    .iter()
                    .filter_map(|id| self.tasks.get(id))
                    .collect(),
            })
            .collect()
    }

    /// Checks the single-ownership and column-consistency invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::with_capacity(self.tasks.len());
        for column in self.columns() {
            for &task_id in column.task_ids() {
                if !seen.insert(task_id) {
                    return Err(InvariantViolation::DuplicateMembership(task_id));
                }
                let task = self.tasks.get(&task_id).ok_or(InvariantViolation::DanglingId {
                    column: column.id(),
                    task_id,
                })?;
                if task.column() != column.id() {
                    return Err(InvariantViolation::ColumnMismatch {
                        task_id,
                        recorded: task.column(),
                        listed: column.id(),
                    });
                }
            }
        }
        match self.tasks.keys().find(|id| !seen.contains(*id)) {
            Some(&task_id) => Err(InvariantViolation::Unlisted(task_id)),
            None => Ok(()),
        }
    }

    /// Lists an id without a task record, for exercising defensive paths.
    #[cfg(test)]
    pub(crate) fn list_unknown_id(&mut self, column: ColumnId, task_id: TaskId) {
        self.column_mut(column).push(task_id);
    }
}
