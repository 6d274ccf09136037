//! Grouped visibility filter over point types.

use super::PointType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Point types that are shown and hidden together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointGroup {
    /// Network, phone and video outlets.
    Cabling,
    /// Fixed and 360-degree cameras.
    Cctv,
    /// Equipment racks.
    Rack,
}

impl PointGroup {
    /// Every group, in toolbar order.
    pub const ALL: [Self; 3] = [Self::Cabling, Self::Cctv, Self::Rack];

    /// Returns the point types in this group.
    #[must_use]
    pub const fn types(self) -> &'static [PointType] {
        match self {
            Self::Cabling => &[PointType::Network, PointType::Phone, PointType::VgaHdmi],
            Self::Cctv => &[PointType::Cctv, PointType::Cctv360],
            Self::Rack => &[PointType::Rack],
        }
    }
}

/// Set of point types currently shown on the plan.
///
/// Starts with every type visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFilter {
    active: BTreeSet<PointType>,
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl TypeFilter {
    /// A filter showing every type.
    #[must_use]
    pub fn all() -> Self {
        Self {
            active: PointType::ALL.into_iter().collect(),
        }
    }

    /// A filter hiding every type.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            active: BTreeSet::new(),
        }
    }

    /// Shows every type.
    pub fn show_all(&mut self) {
        *self = Self::all();
    }

    /// Hides every type.
    pub fn hide_all(&mut self) {
        self.active.clear();
    }

    /// Hides the group when all of its types are shown, otherwise shows
    /// all of them. Returns whether the group is active afterwards.
    pub fn toggle_group(&mut self, group: PointGroup) -> bool {
        if self.is_group_active(group) {
            for point_type in group.types() {
                self.active.remove(point_type);
            }
            false
        } else {
            self.active.extend(group.types().iter().copied());
            true
        }
    }

    /// Returns `true` when every type in the group is shown.
    #[must_use]
    pub fn is_group_active(&self, group: PointGroup) -> bool {
        group.types().iter().all(|point_type| self.active.contains(point_type))
    }

    /// Returns `true` when points of this type are shown.
    #[must_use]
    pub fn shows(&self, point_type: PointType) -> bool {
        self.active.contains(&point_type)
    }

    /// Returns the shown types in declaration order.
    #[must_use]
    pub fn active_types(&self) -> Vec<PointType> {
        self.active.iter().copied().collect()
    }
}
