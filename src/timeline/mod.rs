//! Project phases and their progress.
//!
//! Phase progress is never stored: it is derived from the statuses of the
//! floor plan points each phase covers.

mod phase;
mod progress;

pub use phase::ProjectPhase;
pub use progress::{PhaseProgress, PhaseStatus, StatusCounts, phase_progress};

#[cfg(test)]
mod tests;
