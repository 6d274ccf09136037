//! In-memory team directory.

use crate::team::{
    domain::{MemberId, TeamDomainError, TeamMember},
    ports::TeamDirectory,
};

const DEFAULT_CREW: [(&str, &str, &str); 4] = [
    ("1", "João Silva", "https://i.pravatar.cc/150?u=joao"),
    ("2", "Maria Oliveira", "https://i.pravatar.cc/150?u=maria"),
    ("3", "Carlos Pereira", "https://i.pravatar.cc/150?u=carlos"),
    ("4", "Ana Costa", "https://i.pravatar.cc/150?u=ana"),
];

/// Fixed roster held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamDirectory {
    members: Vec<TeamMember>,
}

impl InMemoryTeamDirectory {
    /// Creates a directory from an explicit roster.
    #[must_use]
    pub const fn new(members: Vec<TeamMember>) -> Self {
        Self { members }
    }

    /// Creates a directory seeded with the default four-person crew.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDomainError`] if a seeded record fails validation.
    pub fn with_default_crew() -> Result<Self, TeamDomainError> {
        let members = DEFAULT_CREW
            .iter()
            .map(|&(id, name, avatar)| TeamMember::new(MemberId::new(id)?, name, avatar))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(members))
    }
}

impl TeamDirectory for InMemoryTeamDirectory {
    fn find_by_id(&self, id: &MemberId) -> Option<TeamMember> {
        self.members.iter().find(|member| member.id() == id).cloned()
    }

    fn members(&self) -> Vec<TeamMember> {
        self.members.clone()
    }
}
