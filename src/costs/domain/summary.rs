//! Derived budget figures.

use super::Money;
use crate::config::BudgetThresholds;
use chrono::NaiveDate;
use serde::Serialize;

/// Alert level for budget consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    /// At or below the warning threshold.
    OnTrack,
    /// Above the warning threshold.
    Warning,
    /// Above the critical threshold.
    Critical,
}

impl BudgetLevel {
    /// Classifies a usage percentage.
    #[must_use]
    pub fn classify(percent_used: f64, thresholds: BudgetThresholds) -> Self {
        if percent_used > thresholds.critical_percent {
            Self::Critical
        } else if percent_used > thresholds.warning_percent {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }
}

/// Budget position of the whole project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetSummary {
    /// Planned budget.
    pub budget: Money,
    /// Sum of every cost entry.
    pub entries_total: Money,
    /// Materials plus labour plus entries.
    pub total_cost: Money,
    /// Budget minus total cost; negative when over budget.
    pub remaining: Money,
    /// Total cost as a percentage of the budget, or `0.0` without a budget.
    pub percent_used: f64,
    /// Alert level derived from `percent_used`.
    pub level: BudgetLevel,
}

/// Cumulative spend after one cost entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Entry date.
    pub date: NaiveDate,
    /// Baseline plus every entry up to and including this one.
    pub cumulative: Money,
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "percentages are display figures; cent totals stay exact"
)]
pub(super) fn percent_of(part: Money, whole: Money) -> f64 {
    if whole.cents() == 0 {
        return 0.0;
    }
    part.cents() as f64 * 100.0 / whole.cents() as f64
}
