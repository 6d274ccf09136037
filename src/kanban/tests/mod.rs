//! Unit tests for the kanban board.

mod support;
