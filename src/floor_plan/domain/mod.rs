//! Domain model for floor plan points.

mod error;
mod filter;
mod plan;
mod point;
mod template;

pub use error::FloorPlanError;
pub use filter::{PointGroup, TypeFilter};
pub use plan::FloorPlan;
pub use point::{
    ChecklistItem, Coords, MaterialUsage, PointDetails, PointId, PointStatus, PointType,
    ProjectPoint,
};
pub use template::PointTemplate;
