//! Obrafy: construction-project tracking core.
//!
//! This crate holds the in-memory state behind a construction-project
//! dashboard: a kanban board for the installation crew, a floor plan of
//! installation points, a cost ledger with budget tracking, and a phase
//! timeline derived from point progress.
//!
//! # Architecture
//!
//! Obrafy follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Command orchestration over explicitly passed state
//!
//! # Modules
//!
//! - [`kanban`]: Task board, ordered columns, and task moves
//! - [`team`]: Read-only team directory
//! - [`floor_plan`]: Installation points and checklists
//! - [`costs`]: Cost ledger and budget summary
//! - [`timeline`]: Project phases and derived phase progress
//! - [`project`]: Top-level state container composing the above

pub mod config;
pub mod costs;
pub mod error;
pub mod floor_plan;
pub mod kanban;
pub mod keyed;
pub mod project;
pub mod team;
pub mod timeline;
