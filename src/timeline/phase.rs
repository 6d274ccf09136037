//! Phase definitions.

use crate::floor_plan::domain::{PointType, ProjectPoint};
use serde::{Deserialize, Serialize};

/// A named project stage covering some point types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPhase {
    name: String,
    relevant_types: Vec<PointType>,
}

impl ProjectPhase {
    /// Creates a phase. An empty `relevant_types` covers every point.
    #[must_use]
    pub fn new(name: impl Into<String>, relevant_types: Vec<PointType>) -> Self {
        Self {
            name: name.into(),
            relevant_types,
        }
    }

    /// The five standard phases of a structured-cabling installation.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Phase 1: Cable pulling",
                vec![
                    PointType::Network,
                    PointType::Phone,
                    PointType::VgaHdmi,
                    PointType::Cctv,
                    PointType::Cctv360,
                ],
            ),
            Self::new("Phase 2: Rack and patch panel assembly", vec![PointType::Rack]),
            Self::new(
                "Phase 3: Camera and access point installation",
                vec![PointType::Cctv, PointType::Cctv360],
            ),
            Self::new(
                "Phase 4: Termination and faceplate mounting",
                vec![PointType::Network, PointType::Phone, PointType::VgaHdmi],
            ),
            Self::new("Phase 5: Configuration and final tests", Vec::new()),
        ]
    }

    /// Returns the phase name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the covered point types; empty means all.
    #[must_use]
    pub fn relevant_types(&self) -> &[PointType] {
        &self.relevant_types
    }

    /// Returns `true` if the phase covers points of this type.
    #[must_use]
    pub fn covers(&self, point_type: PointType) -> bool {
        self.relevant_types.is_empty() || self.relevant_types.contains(&point_type)
    }

    /// Returns the points this phase covers, in plan order.
    pub fn relevant_points<'a>(
        &'a self,
        points: &'a [ProjectPoint],
    ) -> impl Iterator<Item = &'a ProjectPoint> + 'a {
        points.iter().filter(|point| self.covers(point.point_type()))
    }
}
