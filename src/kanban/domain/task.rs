//! Board task records and their editable fields.

use super::{ColumnId, KanbanDomainError, ParsePriorityError, TaskId};
use crate::team::domain::MemberId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Due date wire format.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Task urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Blocks other work.
    High,
}

impl TaskPriority {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated editable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    title: String,
    assignee_id: MemberId,
    priority: TaskPriority,
    due_date: NaiveDate,
}

impl TaskFields {
    /// Creates validated task fields.
    ///
    /// The title is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanDomainError::EmptyTitle`] if the title is blank.
    pub fn new(
        title: impl Into<String>,
        assignee_id: MemberId,
        priority: TaskPriority,
        due_date: NaiveDate,
    ) -> Result<Self, KanbanDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(KanbanDomainError::EmptyTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            assignee_id,
            priority,
            due_date,
        })
    }

    /// Parses a `YYYY-MM-DD` due date.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanDomainError::MissingDueDate`] for a blank value and
    /// [`KanbanDomainError::InvalidDueDate`] for anything that is not a
    /// calendar date.
    pub fn parse_due_date(value: &str) -> Result<NaiveDate, KanbanDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(KanbanDomainError::MissingDueDate);
        }
        NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
            .map_err(|_| KanbanDomainError::InvalidDueDate(value.to_owned()))
    }

    /// Checks the title against a length limit counted in characters.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanDomainError::TitleTooLong`] when the title is longer
    /// than `max`.
    pub fn ensure_title_within(&self, max: usize) -> Result<(), KanbanDomainError> {
        let actual = self.title.chars().count();
        if actual > max {
            return Err(KanbanDomainError::TitleTooLong { max, actual });
        }
        Ok(())
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee_id(&self) -> &MemberId {
        &self.assignee_id
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// A unit of crew work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    assignee_id: MemberId,
    priority: TaskPriority,
    due_date: NaiveDate,
    column: ColumnId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task in the initial column.
    pub(super) fn new(fields: TaskFields, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let TaskFields {
            title,
            assignee_id,
            priority,
            due_date,
        } = fields;
        Self {
            id: TaskId::new(),
            title,
            assignee_id,
            priority,
            due_date,
            column: ColumnId::initial(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee_id(&self) -> &MemberId {
        &self.assignee_id
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the column whose list holds this task.
    #[must_use]
    pub const fn column(&self) -> ColumnId {
        self.column
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the due date has passed and the task is not done.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.column != ColumnId::Done && self.due_date < today
    }

    pub(super) fn apply_fields(&mut self, fields: TaskFields, clock: &impl Clock) {
        let TaskFields {
            title,
            assignee_id,
            priority,
            due_date,
        } = fields;
        self.title = title;
        self.assignee_id = assignee_id;
        self.priority = priority;
        self.due_date = due_date;
        self.touch(clock);
    }

    pub(super) fn relocate(&mut self, column: ColumnId, clock: &impl Clock) {
        self.column = column;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
