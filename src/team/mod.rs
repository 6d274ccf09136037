//! Team directory for the installation crew.
//!
//! The directory is a read-only collaborator: the kanban board consults it to
//! validate and display task assignees but never mutates it.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
