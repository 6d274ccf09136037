//! Read-only team directory port.

use crate::team::domain::{MemberId, TeamMember};

/// Lookup contract for the crew roster.
pub trait TeamDirectory: Send + Sync {
    /// Finds a member by identifier.
    ///
    /// Returns `None` when the identifier is not on the roster.
    fn find_by_id(&self, id: &MemberId) -> Option<TeamMember>;

    /// Returns every member in roster order.
    fn members(&self) -> Vec<TeamMember>;
}
