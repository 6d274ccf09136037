//! Default name, checklist, and materials for new points by type.

use super::{ChecklistItem, MaterialUsage, PointType};

const UNASSIGNED_ROOM: &str = "Unassigned";

const NETWORK_STEPS: [&str; 4] = ["Cable pulling", "Termination", "Faceplate mounting", "Connectivity test"];
const PHONE_STEPS: [&str; 4] = ["Cable pulling", "Termination", "Faceplate mounting", "Line test"];
const CCTV_STEPS: [&str; 4] = ["Cable pulling", "Camera mounting", "Termination", "Configuration"];
const VIDEO_STEPS: [&str; 4] = ["Cable pulling", "Termination", "Faceplate mounting", "Signal test"];

/// Starting values for a newly placed point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointTemplate {
    /// Default point name.
    pub name: String,
    /// Default room.
    pub room: String,
    /// Installation checklist.
    pub checklist: Vec<ChecklistItem>,
    /// Expected material consumption.
    pub materials: Vec<MaterialUsage>,
}

impl PointTemplate {
    /// Returns the template for a point type.
    #[must_use]
    pub fn for_type(point_type: PointType) -> Self {
        let (checklist, materials) = match point_type {
            PointType::Network => (pending(&NETWORK_STEPS), outlet_materials()),
            PointType::Phone => (pending(&PHONE_STEPS), outlet_materials()),
            PointType::Cctv => (
                pending(&CCTV_STEPS),
                vec![MaterialUsage::new("utp", 1), MaterialUsage::new("camera-dome", 1)],
            ),
            PointType::Cctv360 => (
                pending(&CCTV_STEPS),
                vec![MaterialUsage::new("utp", 1), MaterialUsage::new("camera-360", 1)],
            ),
            PointType::VgaHdmi => (
                pending(&VIDEO_STEPS),
                vec![MaterialUsage::new("hdmi-cable", 1)],
            ),
            PointType::Rack => (
                vec![
                    ChecklistItem::new("Frame assembly", true),
                    ChecklistItem::new("Patch panel installation", false),
                    ChecklistItem::new("Switch installation", false),
                    ChecklistItem::new("Cable management", false),
                ],
                vec![MaterialUsage::new("switch-24", 1)],
            ),
        };
        let name = match point_type {
            PointType::Rack => "New rack".to_owned(),
            other => format!("New {other} point"),
        };
        Self {
            name,
            room: UNASSIGNED_ROOM.to_owned(),
            checklist,
            materials,
        }
    }
}

fn pending(steps: &[&str]) -> Vec<ChecklistItem> {
    steps.iter().map(|step| ChecklistItem::new(*step, false)).collect()
}

fn outlet_materials() -> Vec<MaterialUsage> {
    vec![
        MaterialUsage::new("utp", 1),
        MaterialUsage::new("keystone", 1),
        MaterialUsage::new("rj45", 1),
    ]
}
