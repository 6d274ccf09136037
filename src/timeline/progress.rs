//! Derived phase progress.

use super::ProjectPhase;
use crate::floor_plan::domain::{PointStatus, ProjectPoint};
use serde::Serialize;

/// Number of points in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Points not started.
    pub pending: usize,
    /// Points under way.
    pub in_progress: usize,
    /// Points finished.
    pub completed: usize,
    /// Points flagged for attention.
    pub alert: usize,
}

impl StatusCounts {
    /// Tallies the statuses of `points`.
    pub fn tally<'a>(points: impl IntoIterator<Item = &'a ProjectPoint>) -> Self {
        points.into_iter().fold(Self::default(), |mut counts, point| {
            let slot = match point.status() {
                PointStatus::Pending => &mut counts.pending,
                PointStatus::InProgress => &mut counts.in_progress,
                PointStatus::Completed => &mut counts.completed,
                PointStatus::Alert => &mut counts.alert,
            };
            *slot = slot.saturating_add(1);
            counts
        })
    }

    /// Returns the number of points counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending
            .saturating_add(self.in_progress)
            .saturating_add(self.completed)
            .saturating_add(self.alert)
    }

    /// Returns completed points as a percentage of the total, or `0.0` when
    /// nothing was counted.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "point counts are far below f64's exact integer range"
    )]
    pub fn percent_completed(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.completed as f64 * 100.0 / total as f64
    }
}

/// Coarse state of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    /// No covered point has started.
    Pending,
    /// Work has started on at least one covered point.
    InProgress,
    /// Every covered point is completed.
    Completed,
}

impl PhaseStatus {
    /// Derives the phase status from its point counts.
    ///
    /// A phase with no points stays pending. Alerted points count neither
    /// as started nor as done.
    #[must_use]
    pub const fn from_counts(counts: &StatusCounts) -> Self {
        let total = counts.total();
        if total > 0 && counts.completed == total {
            Self::Completed
        } else if counts.in_progress > 0 || counts.completed > 0 {
            Self::InProgress
        } else {
            Self::Pending
        }
    }
}

/// Progress of one phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseProgress {
    /// Phase name.
    pub name: String,
    /// Number of covered points.
    pub total: usize,
    /// Covered points per status.
    pub counts: StatusCounts,
    /// Completed share of covered points, `0.0..=100.0`.
    pub percent_complete: f64,
    /// Derived phase state.
    pub status: PhaseStatus,
}

impl ProjectPhase {
    /// Computes this phase's progress over the given points.
    #[must_use]
    pub fn progress(&self, points: &[ProjectPoint]) -> PhaseProgress {
        let counts = StatusCounts::tally(self.relevant_points(points));
        PhaseProgress {
            name: self.name().to_owned(),
            total: counts.total(),
            counts,
            percent_complete: counts.percent_completed(),
            status: PhaseStatus::from_counts(&counts),
        }
    }
}

/// Computes progress for every phase, in phase order.
#[must_use]
pub fn phase_progress(phases: &[ProjectPhase], points: &[ProjectPoint]) -> Vec<PhaseProgress> {
    phases.iter().map(|phase| phase.progress(points)).collect()
}
