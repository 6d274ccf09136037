//! Team member records and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors returned while constructing team member values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamDomainError {
    /// The member identifier is empty after trimming.
    #[error("team member identifier must not be empty")]
    EmptyMemberId,

    /// The member name is empty after trimming.
    #[error("team member name must not be empty")]
    EmptyMemberName,
}

/// Identifier of a team member in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Creates a validated member identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDomainError::EmptyMemberId`] if the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TeamDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TeamDomainError::EmptyMemberId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A crew member tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: MemberId,
    name: String,
    avatar: String,
}

impl TeamMember {
    /// Creates a team member.
    ///
    /// # Errors
    ///
    /// Returns [`TeamDomainError::EmptyMemberName`] if the name is blank.
    pub fn new(
        id: MemberId,
        name: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Result<Self, TeamDomainError> {
        let raw_name = name.into();
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(TeamDomainError::EmptyMemberName);
        }
        Ok(Self {
            id,
            name: trimmed.to_owned(),
            avatar: avatar.into(),
        })
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> &MemberId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar reference (typically an image URL).
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}
