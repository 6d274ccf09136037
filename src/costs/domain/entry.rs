//! Dated cost entries.

use super::{Money, ParseCostCategoryError};
use crate::keyed::Keyed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a cost entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostEntryId(Uuid);

impl CostEntryId {
    /// Creates a new random entry identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CostEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CostEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spending category outside the materials and labour baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    /// Vehicle and travel costs.
    Transportation,
    /// Tool purchases and rentals.
    Tools,
    /// Permits and licences.
    Permits,
    /// Anything else.
    #[default]
    Other,
}

impl CostCategory {
    /// Every category.
    pub const ALL: [Self; 4] = [Self::Transportation, Self::Tools, Self::Permits, Self::Other];

    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transportation => "transportation",
            Self::Tools => "tools",
            Self::Permits => "permits",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for CostCategory {
    type Error = ParseCostCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalised = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalised)
            .ok_or_else(|| ParseCostCategoryError(value.to_owned()))
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dated expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEntry {
    id: CostEntryId,
    date: NaiveDate,
    description: String,
    amount: Money,
    category: CostCategory,
}

impl CostEntry {
    pub(super) fn new(
        date: NaiveDate,
        description: String,
        amount: Money,
        category: CostCategory,
    ) -> Self {
        Self {
            id: CostEntryId::new(),
            date,
            description,
            amount,
            category,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> CostEntryId {
        self.id
    }

    /// Returns the date the cost was incurred.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> CostCategory {
        self.category
    }
}

impl Keyed for CostEntry {
    type Key = CostEntryId;

    fn key(&self) -> CostEntryId {
        self.id
    }
}
