//! Kanban task board for the installation crew.
//!
//! The board keeps every task in exactly one of three fixed, ordered columns.
//! Tasks are created into the first column, reordered within a column or
//! transferred between columns by the move operation, edited in place, and
//! deleted. Interactive drags are modelled as an explicit state machine that
//! yields a move request on drop.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
