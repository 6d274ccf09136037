//! Domain model for team members.

mod member;

pub use member::{MemberId, TeamDomainError, TeamMember};
