//! Application services for kanban board commands.

mod board;

pub use board::{
    ColumnCards, KanbanService, KanbanServiceError, KanbanServiceResult, TaskCard,
    TaskDetailsRequest,
};
