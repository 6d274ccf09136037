//! The owned dashboard state.

use crate::{
    costs::domain::CostLedger,
    floor_plan::domain::{FloorPlan, TypeFilter},
    kanban::domain::{Board, DragSession},
    timeline::ProjectPhase,
};
use serde::Serialize;

/// Everything a dashboard displays, in one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectState {
    pub(super) board: Board,
    pub(super) floor_plan: FloorPlan,
    pub(super) point_filter: TypeFilter,
    pub(super) ledger: CostLedger,
    pub(super) phases: Vec<ProjectPhase>,
    pub(super) drag: DragSession,
}

impl ProjectState {
    /// Creates an empty project around a board, with the default phases.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            floor_plan: FloorPlan::new(),
            point_filter: TypeFilter::all(),
            ledger: CostLedger::new(),
            phases: ProjectPhase::defaults(),
            drag: DragSession::Idle,
        }
    }

    /// Returns the kanban board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the floor plan.
    #[must_use]
    pub const fn floor_plan(&self) -> &FloorPlan {
        &self.floor_plan
    }

    /// Returns which point types the floor plan shows.
    #[must_use]
    pub const fn point_filter(&self) -> &TypeFilter {
        &self.point_filter
    }

    /// Returns the cost ledger.
    #[must_use]
    pub const fn ledger(&self) -> &CostLedger {
        &self.ledger
    }

    /// Returns the project phases.
    #[must_use]
    pub fn phases(&self) -> &[ProjectPhase] {
        &self.phases
    }

    /// Returns the drag interaction state.
    #[must_use]
    pub const fn drag(&self) -> &DragSession {
        &self.drag
    }
}
