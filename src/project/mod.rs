//! Project state container.
//!
//! [`ProjectState`] is the single owned value behind a dashboard. [`Project`]
//! owns it together with the kanban service and configuration, and exposes
//! every command the rendering layer may issue.

mod commands;
mod error;
mod state;

pub use commands::Project;
pub use error::{ProjectError, ProjectResult};
pub use state::ProjectState;

#[cfg(test)]
mod tests;
