//! Shared builders for kanban tests.

use crate::kanban::domain::{Board, ColumnId, MoveRequest, TaskFields, TaskId, TaskPriority};
use crate::team::domain::MemberId;
use chrono::NaiveDate;
use eyre::eyre;
use mockable::DefaultClock;

/// Builds valid task fields with the given title.
pub fn fields(title: &str) -> eyre::Result<TaskFields> {
    let due_date = NaiveDate::from_ymd_opt(2024, 6, 1).ok_or_else(|| eyre!("valid date"))?;
    Ok(TaskFields::new(
        title,
        MemberId::new("1")?,
        TaskPriority::Medium,
        due_date,
    )?)
}

/// Adds tasks with the given titles to `column`, in order.
pub fn fill_column(board: &mut Board, column: ColumnId, titles: &[&str]) -> eyre::Result<Vec<TaskId>> {
    let clock = DefaultClock;
    let mut ids = Vec::with_capacity(titles.len());
    for title in titles {
        let task = board.add_task(fields(title)?, &clock);
        if column != ColumnId::Todo {
            let index = board.column(ColumnId::Todo).len().saturating_sub(1);
            let dest_index = board.column(column).len();
            board.move_task(
                MoveRequest::new(task.id(), ColumnId::Todo, column, index, dest_index),
                &clock,
            )?;
        }
        ids.push(task.id());
    }
    Ok(ids)
}

/// Returns the titles listed in a column, in order.
pub fn titles_in(board: &Board, column: ColumnId) -> Vec<String> {
    board
        .column(column)
        .task_ids()
        .iter()
        .filter_map(|id| board.task(*id))
        .map(|task| task.title().to_owned())
        .collect()
}
