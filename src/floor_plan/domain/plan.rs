//! The floor plan aggregate.

use super::{
    Coords, FloorPlanError, PointDetails, PointId, PointStatus, PointType, ProjectPoint, TypeFilter,
};
use crate::keyed::{find_by_key, find_by_key_mut, remove_by_key};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ordered collection of installation points.
///
/// Points keep insertion order, which is also their drawing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FloorPlan {
    points: Vec<ProjectPoint>,
}

impl FloorPlan {
    /// Creates an empty plan.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns every point in insertion order.
    #[must_use]
    pub fn points(&self) -> &[ProjectPoint] {
        &self.points
    }

    /// Returns the point with the given identifier.
    #[must_use]
    pub fn point(&self, id: PointId) -> Option<&ProjectPoint> {
        find_by_key(&self.points, id)
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the plan has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Places a new point built from its type's template.
    pub fn add_point(&mut self, point_type: PointType, coords: Coords) -> ProjectPoint {
        let point = ProjectPoint::from_template(point_type, coords);
        self.points.push(point.clone());
        point
    }

    /// Removes a point.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::PointNotFound`] if no point has this id.
    pub fn delete_point(&mut self, id: PointId) -> Result<ProjectPoint, FloorPlanError> {
        remove_by_key(&mut self.points, id).ok_or(FloorPlanError::PointNotFound(id))
    }

    /// Repositions a point.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::PointNotFound`] if no point has this id.
    pub fn move_point(&mut self, id: PointId, coords: Coords) -> Result<(), FloorPlanError> {
        self.point_mut(id)?.set_coords(coords);
        Ok(())
    }

    /// Replaces a point's notes and photos.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::PointNotFound`] if no point has this id.
    pub fn update_details(
        &mut self,
        id: PointId,
        details: PointDetails,
    ) -> Result<(), FloorPlanError> {
        self.point_mut(id)?.set_details(details);
        Ok(())
    }

    /// Overrides a point's status, typically to raise an alert.
    ///
    /// The next checklist toggle re-derives the status from the checklist.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::PointNotFound`] if no point has this id.
    pub fn set_status(&mut self, id: PointId, status: PointStatus) -> Result<(), FloorPlanError> {
        self.point_mut(id)?.set_status(status);
        Ok(())
    }

    /// Flips one checklist item and returns the re-derived status.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::PointNotFound`] if no point has this id and
    /// [`FloorPlanError::ChecklistIndexOutOfRange`] if the checklist is
    /// shorter than `index + 1`.
    pub fn toggle_checklist_item(
        &mut self,
        id: PointId,
        index: usize,
    ) -> Result<PointStatus, FloorPlanError> {
        let point = self.point_mut(id)?;
        let len = point.checklist().len();
        point
            .toggle_checklist_item(index)
            .ok_or(FloorPlanError::ChecklistIndexOutOfRange {
                point_id: id,
                index,
                len,
            })
    }

    /// Returns the points whose type is in `types`, in plan order.
    #[must_use]
    pub fn points_of_types(&self, types: &[PointType]) -> Vec<&ProjectPoint> {
        self.points
            .iter()
            .filter(|point| types.contains(&point.point_type()))
            .collect()
    }

    /// Returns the points the filter shows, in plan order.
    #[must_use]
    pub fn visible_points(&self, filter: &TypeFilter) -> Vec<&ProjectPoint> {
        self.points
            .iter()
            .filter(|point| filter.shows(point.point_type()))
            .collect()
    }

    /// Sums material quantities across every point, keyed by material id.
    #[must_use]
    pub fn material_totals(&self) -> BTreeMap<String, u32> {
        let mut totals = BTreeMap::new();
        for usage in self.points.iter().flat_map(ProjectPoint::materials) {
            let total: &mut u32 = totals.entry(usage.material_id.clone()).or_default();
            *total = total.saturating_add(usage.quantity);
        }
        totals
    }

    fn point_mut(&mut self, id: PointId) -> Result<&mut ProjectPoint, FloorPlanError> {
        find_by_key_mut(&mut self.points, id).ok_or(FloorPlanError::PointNotFound(id))
    }
}
