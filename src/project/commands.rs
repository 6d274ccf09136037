//! Command surface over the project state.

use super::{ProjectResult, ProjectState};
use crate::{
    config::{ConfigError, DashboardConfig},
    costs::domain::{
        Baseline, BudgetSummary, CostCategory, CostEntry, CostEntryId, Money, TrendPoint,
    },
    floor_plan::domain::{
        Coords, PointDetails, PointGroup, PointId, PointStatus, PointType, ProjectPoint,
    },
    kanban::{
        domain::{ColumnId, MoveOutcome, MoveRequest, Task, TaskId},
        services::{ColumnCards, KanbanService, TaskDetailsRequest},
    },
    team::{domain::TeamMember, ports::TeamDirectory},
    timeline::{PhaseProgress, ProjectPhase, phase_progress},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::{collections::BTreeMap, sync::Arc};
use tracing::{debug, info, warn};

/// A construction project: its state plus the services that mutate it.
pub struct Project<D, C>
where
    D: TeamDirectory,
    C: Clock + Send + Sync,
{
    state: ProjectState,
    kanban: KanbanService<D, C>,
    config: DashboardConfig,
}

impl<D, C> Project<D, C>
where
    D: TeamDirectory,
    C: Clock + Send + Sync,
{
    /// Creates an empty project.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(
        directory: Arc<D>,
        clock: Arc<C>,
        config: DashboardConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let kanban = KanbanService::new(directory, clock, config.board.clone());
        let state = ProjectState::new(kanban.new_board());
        info!(phases = state.phases.len(), "project created");
        Ok(Self {
            state,
            kanban,
            config,
        })
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &ProjectState {
        &self.state
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Returns the crew roster.
    #[must_use]
    pub fn team_members(&self) -> Vec<TeamMember> {
        self.kanban.team_members()
    }

    // Kanban board

    /// Creates a task at the end of the first column.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::Kanban`](super::ProjectError::Kanban) for
    /// invalid fields or an unknown assignee.
    pub fn add_task(&mut self, request: TaskDetailsRequest) -> ProjectResult<Task> {
        Ok(self.kanban.add_task(&mut self.state.board, request)?)
    }

    /// Replaces a task's editable fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::Kanban`](super::ProjectError::Kanban) for
    /// invalid fields or a missing task.
    pub fn edit_task(
        &mut self,
        task_id: TaskId,
        request: TaskDetailsRequest,
    ) -> ProjectResult<Task> {
        Ok(self.kanban.edit_task(&mut self.state.board, task_id, request)?)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::Kanban`](super::ProjectError::Kanban) for a
    /// missing task.
    pub fn delete_task(&mut self, task_id: TaskId) -> ProjectResult<Task> {
        Ok(self.kanban.delete_task(&mut self.state.board, task_id)?)
    }

    /// Moves a task within or between columns.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::Kanban`](super::ProjectError::Kanban) when the
    /// task is missing or not in the source column.
    pub fn move_task(&mut self, request: MoveRequest) -> ProjectResult<MoveOutcome> {
        Ok(self.kanban.move_task(&mut self.state.board, request)?)
    }

    /// Starts dragging the task at `index` in `column`.
    ///
    /// Returns `false` and leaves the session untouched when no task sits
    /// there.
    pub fn grab_task(&mut self, column: ColumnId, index: usize) -> bool {
        let Some(task_id) = self.state.board.column(column).task_ids().get(index).copied() else {
            debug!(%column, index, "grab on empty slot ignored");
            return false;
        };
        self.state.drag.grab(task_id, column, index);
        debug!(task_id = %task_id, %column, index, "drag started");
        true
    }

    /// Highlights the column under the pointer.
    pub const fn hover_column(&mut self, column: ColumnId) {
        self.state.drag.hover(column);
    }

    /// Clears the column highlight.
    pub const fn leave_columns(&mut self) {
        self.state.drag.leave();
    }

    /// Drops the dragged task at a column position.
    ///
    /// Returns `Ok(None)` when nothing was being dragged or no column is
    /// hovered.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::Kanban`](super::ProjectError::Kanban) when the
    /// dragged task has left its source column since the grab.
    pub fn drop_task(
        &mut self,
        dest_column: ColumnId,
        dest_index: usize,
    ) -> ProjectResult<Option<MoveOutcome>> {
        Ok(self.kanban.drop_dragged(
            &mut self.state.board,
            &mut self.state.drag,
            dest_column,
            dest_index,
        )?)
    }

    /// Abandons the current drag.
    pub fn cancel_drag(&mut self) {
        if let Some(task_id) = self.state.drag.dragged_task() {
            debug!(task_id = %task_id, "drag cancelled");
        }
        self.state.drag.cancel();
    }

    /// Returns every column with assignee-resolved cards.
    #[must_use]
    pub fn column_cards(&self) -> Vec<ColumnCards<'_>> {
        self.kanban.column_cards(&self.state.board)
    }

    /// Returns unfinished tasks past their due date.
    #[must_use]
    pub fn overdue_tasks(&self) -> Vec<&Task> {
        self.kanban.overdue_tasks(&self.state.board)
    }

    // Floor plan

    /// Places a new point from its type's template.
    pub fn add_point(&mut self, point_type: PointType, coords: Coords) -> ProjectPoint {
        let point = self.state.floor_plan.add_point(point_type, coords);
        info!(point_id = %point.id(), %point_type, "point added");
        point
    }

    /// Removes a point.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::FloorPlan`](super::ProjectError::FloorPlan)
    /// for a missing point.
    pub fn delete_point(&mut self, point_id: PointId) -> ProjectResult<ProjectPoint> {
        let point = self
            .state
            .floor_plan
            .delete_point(point_id)
            .inspect_err(|err| warn!(point_id = %point_id, error = %err, "rejected point deletion"))?;
        info!(point_id = %point_id, "point deleted");
        Ok(point)
    }

    /// Repositions a point.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::FloorPlan`](super::ProjectError::FloorPlan)
    /// for a missing point.
    pub fn move_point(&mut self, point_id: PointId, coords: Coords) -> ProjectResult<()> {
        self.state
            .floor_plan
            .move_point(point_id, coords)
            .inspect_err(|err| warn!(point_id = %point_id, error = %err, "rejected point move"))?;
        info!(point_id = %point_id, x = coords.x(), y = coords.y(), "point moved");
        Ok(())
    }

    /// Replaces a point's notes and photos.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::FloorPlan`](super::ProjectError::FloorPlan)
    /// for a missing point.
    pub fn update_point_details(
        &mut self,
        point_id: PointId,
        details: PointDetails,
    ) -> ProjectResult<()> {
        self.state
            .floor_plan
            .update_details(point_id, details)
            .inspect_err(|err| warn!(point_id = %point_id, error = %err, "rejected details update"))?;
        info!(point_id = %point_id, "point details updated");
        Ok(())
    }

    /// Overrides a point's status.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::FloorPlan`](super::ProjectError::FloorPlan)
    /// for a missing point.
    pub fn set_point_status(&mut self, point_id: PointId, status: PointStatus) -> ProjectResult<()> {
        self.state
            .floor_plan
            .set_status(point_id, status)
            .inspect_err(|err| warn!(point_id = %point_id, error = %err, "rejected status change"))?;
        info!(point_id = %point_id, ?status, "point status set");
        Ok(())
    }

    /// Flips a checklist item and returns the point's new status.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::FloorPlan`](super::ProjectError::FloorPlan)
    /// for a missing point or checklist item.
    pub fn toggle_checklist_item(
        &mut self,
        point_id: PointId,
        index: usize,
    ) -> ProjectResult<PointStatus> {
        let status = self
            .state
            .floor_plan
            .toggle_checklist_item(point_id, index)
            .inspect_err(|err| warn!(point_id = %point_id, error = %err, "rejected checklist toggle"))?;
        info!(point_id = %point_id, index, ?status, "checklist item toggled");
        Ok(status)
    }

    /// Shows or hides a group of point types on the plan.
    pub fn toggle_point_group(&mut self, group: PointGroup) -> bool {
        let active = self.state.point_filter.toggle_group(group);
        debug!(?group, active, "point group toggled");
        active
    }

    /// Shows every point type.
    pub fn show_all_points(&mut self) {
        self.state.point_filter.show_all();
    }

    /// Hides every point type.
    pub fn hide_all_points(&mut self) {
        self.state.point_filter.hide_all();
    }

    /// Returns the points the current filter shows.
    #[must_use]
    pub fn visible_points(&self) -> Vec<&ProjectPoint> {
        self.state.floor_plan.visible_points(&self.state.point_filter)
    }

    /// Returns material quantities summed across the plan.
    #[must_use]
    pub fn material_totals(&self) -> BTreeMap<String, u32> {
        self.state.floor_plan.material_totals()
    }

    // Costs

    /// Replaces the budget baseline.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::Costs`](super::ProjectError::Costs) for a
    /// negative figure.
    pub fn set_baseline(&mut self, baseline: Baseline) -> ProjectResult<()> {
        self.state
            .ledger
            .set_baseline(baseline)
            .inspect_err(|err| warn!(error = %err, "rejected baseline"))?;
        info!(
            budget = %baseline.budget,
            materials = %baseline.materials,
            labor = %baseline.labor,
            "baseline updated"
        );
        Ok(())
    }

    /// Records an expense.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::Costs`](super::ProjectError::Costs) for a
    /// blank description or a non-positive amount.
    pub fn add_cost_entry(
        &mut self,
        date: NaiveDate,
        description: &str,
        amount: Money,
        category: CostCategory,
    ) -> ProjectResult<CostEntry> {
        let entry = self
            .state
            .ledger
            .add_entry(date, description, amount, category)
            .inspect_err(|err| warn!(error = %err, "rejected cost entry"))?;
        info!(entry_id = %entry.id(), %amount, %category, "cost entry added");
        Ok(entry)
    }

    /// Removes an expense.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::Costs`](super::ProjectError::Costs) for a
    /// missing entry.
    pub fn delete_cost_entry(&mut self, entry_id: CostEntryId) -> ProjectResult<CostEntry> {
        let entry = self
            .state
            .ledger
            .delete_entry(entry_id)
            .inspect_err(|err| warn!(entry_id = %entry_id, error = %err, "rejected cost entry deletion"))?;
        info!(entry_id = %entry_id, "cost entry deleted");
        Ok(entry)
    }

    /// Returns the budget position under the configured thresholds.
    #[must_use]
    pub fn budget_summary(&self) -> BudgetSummary {
        self.state.ledger.summary(self.config.budget)
    }

    /// Returns cumulative spend per entry in date order.
    #[must_use]
    pub fn cost_trend(&self) -> Vec<TrendPoint> {
        self.state.ledger.cost_trend()
    }

    // Timeline

    /// Replaces the phase list.
    pub fn set_phases(&mut self, phases: Vec<ProjectPhase>) {
        info!(phases = phases.len(), "phases replaced");
        self.state.phases = phases;
    }

    /// Returns progress for every phase over the current floor plan.
    #[must_use]
    pub fn phase_progress(&self) -> Vec<PhaseProgress> {
        phase_progress(&self.state.phases, self.state.floor_plan.points())
    }
}
