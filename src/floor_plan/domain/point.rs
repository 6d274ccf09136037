//! Installation points and their checklists.

use crate::keyed::Keyed;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a floor plan point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(Uuid);

impl PointId {
    /// Creates a new random point identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PointId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of installation at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointType {
    /// Structured-cabling data outlet.
    Network,
    /// Telephone outlet.
    Phone,
    /// VGA or HDMI video outlet.
    VgaHdmi,
    /// Fixed CCTV camera.
    Cctv,
    /// 360-degree CCTV camera.
    Cctv360,
    /// Equipment rack.
    Rack,
}

impl PointType {
    /// Every point type.
    pub const ALL: [Self; 6] = [
        Self::Network,
        Self::Phone,
        Self::VgaHdmi,
        Self::Cctv,
        Self::Cctv360,
        Self::Rack,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Network => "Network",
            Self::Phone => "Phone",
            Self::VgaHdmi => "VGA/HDMI",
            Self::Cctv => "CCTV",
            Self::Cctv360 => "CCTV 360",
            Self::Rack => "Rack",
        }
    }
}

impl fmt::Display for PointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress of work at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointStatus {
    /// No checklist item done.
    Pending,
    /// Some checklist items done.
    InProgress,
    /// Every checklist item done.
    Completed,
    /// Flagged by the crew for attention.
    Alert,
}

impl PointStatus {
    /// Derives a status from checklist completion.
    ///
    /// All items done gives `Completed` (including an empty checklist), some
    /// done gives `InProgress`, none done gives `Pending`.
    #[must_use]
    pub fn from_checklist(checklist: &[ChecklistItem]) -> Self {
        if checklist.iter().all(|item| item.done) {
            Self::Completed
        } else if checklist.iter().any(|item| item.done) {
            Self::InProgress
        } else {
            Self::Pending
        }
    }
}

/// One step of the installation checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Step name.
    pub name: String,
    /// Whether the step is done.
    pub done: bool,
}

impl ChecklistItem {
    /// Creates a checklist item.
    #[must_use]
    pub fn new(name: impl Into<String>, done: bool) -> Self {
        Self {
            name: name.into(),
            done,
        }
    }
}

/// Quantity of a catalogue material consumed at a point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialUsage {
    /// Catalogue identifier (for example `utp` or `rj45`).
    pub material_id: String,
    /// Units consumed.
    pub quantity: u32,
}

impl MaterialUsage {
    /// Creates a material usage line.
    #[must_use]
    pub fn new(material_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            material_id: material_id.into(),
            quantity,
        }
    }
}

/// Position on the plan as percentages of its width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    x: f64,
    y: f64,
}

impl Coords {
    /// Creates coordinates clamped into `0..=100`.
    ///
    /// A `NaN` component is placed at the origin edge.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// Returns the horizontal percentage.
    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    /// Returns the vertical percentage.
    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Free-form notes and photo references attached to a point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDetails {
    /// Crew notes.
    pub notes: String,
    /// Photo references (typically URLs).
    pub photos: Vec<String>,
}

/// An installation point on the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPoint {
    id: PointId,
    name: String,
    room: String,
    point_type: PointType,
    status: PointStatus,
    coords: Coords,
    checklist: Vec<ChecklistItem>,
    materials: Vec<MaterialUsage>,
    details: PointDetails,
}

impl ProjectPoint {
    pub(super) fn from_template(point_type: PointType, coords: Coords) -> Self {
        let template = super::PointTemplate::for_type(point_type);
        Self {
            id: PointId::new(),
            name: template.name,
            room: template.room,
            point_type,
            status: PointStatus::Pending,
            coords,
            checklist: template.checklist,
            materials: template.materials,
            details: PointDetails::default(),
        }
    }

    /// Returns the point identifier.
    #[must_use]
    pub const fn id(&self) -> PointId {
        self.id
    }

    /// Returns the point name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room the point is in.
    #[must_use]
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Returns the installation type.
    #[must_use]
    pub const fn point_type(&self) -> PointType {
        self.point_type
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> PointStatus {
        self.status
    }

    /// Returns the plan position.
    #[must_use]
    pub const fn coords(&self) -> Coords {
        self.coords
    }

    /// Returns the checklist.
    #[must_use]
    pub fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    /// Returns the material list.
    #[must_use]
    pub fn materials(&self) -> &[MaterialUsage] {
        &self.materials
    }

    /// Returns notes and photos.
    #[must_use]
    pub const fn details(&self) -> &PointDetails {
        &self.details
    }

    pub(super) const fn set_coords(&mut self, coords: Coords) {
        self.coords = coords;
    }

    pub(super) const fn set_status(&mut self, status: PointStatus) {
        self.status = status;
    }

    pub(super) fn set_details(&mut self, details: PointDetails) {
        self.details = details;
    }

    /// Flips one checklist item and re-derives the status.
    ///
    /// Returns `None` when no item sits at `index`.
    pub(super) fn toggle_checklist_item(&mut self, index: usize) -> Option<PointStatus> {
        let item = self.checklist.get_mut(index)?;
        item.done = !item.done;
        self.status = PointStatus::from_checklist(&self.checklist);
        Some(self.status)
    }
}

impl Keyed for ProjectPoint {
    type Key = PointId;

    fn key(&self) -> PointId {
        self.id
    }
}
