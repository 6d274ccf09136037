//! Board columns and their ordered task membership lists.

use super::{ParseColumnIdError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow stage a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    /// Work not yet started.
    Todo,
    /// Work under way.
    InProgress,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// Every column in board order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Column new tasks are created into.
    #[must_use]
    pub const fn initial() -> Self {
        Self::Todo
    }

    /// Returns the canonical identifier string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Returns the built-in display title.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnIdError(value.to_owned())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display titles for the three fixed columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnTitles {
    /// Title of the [`ColumnId::Todo`] column.
    pub todo: String,
    /// Title of the [`ColumnId::InProgress`] column.
    pub in_progress: String,
    /// Title of the [`ColumnId::Done`] column.
    pub done: String,
}

impl ColumnTitles {
    /// Returns the title configured for a column.
    #[must_use]
    pub fn title_for(&self, column: ColumnId) -> &str {
        match column {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Done => &self.done,
        }
    }
}

impl Default for ColumnTitles {
    fn default() -> Self {
        Self {
            todo: ColumnId::Todo.default_title().to_owned(),
            in_progress: ColumnId::InProgress.default_title().to_owned(),
            done: ColumnId::Done.default_title().to_owned(),
        }
    }
}

/// A named, ordered bucket of task identifiers.
///
/// Order is the visual position within the column. The list is only
/// mutated through the owning [`super::Board`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    task_ids: Vec<TaskId>,
}

impl Column {
    pub(super) fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ordered task identifiers.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns the number of listed tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` when the column lists no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Returns the position of a task in this column.
    #[must_use]
    pub fn position(&self, task_id: TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| *id == task_id)
    }

    /// Returns `true` when the column lists the task.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.task_ids.contains(&task_id)
    }

    pub(super) fn push(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    pub(super) fn remove(&mut self, task_id: TaskId) -> Option<usize> {
        let index = self.position(task_id)?;
        self.task_ids.remove(index);
        Some(index)
    }

    /// Inserts at `index`, appending when the index is past the end.
    ///
    /// Returns the index the id landed at.
    pub(super) fn insert_clamped(&mut self, index: usize, task_id: TaskId) -> usize {
        let landed = index.min(self.task_ids.len());
        self.task_ids.insert(landed, task_id);
        landed
    }
}
