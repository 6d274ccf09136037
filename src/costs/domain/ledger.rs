//! The cost ledger aggregate.

use super::{
    BudgetLevel, BudgetSummary, CostCategory, CostEntry, CostEntryId, CostLedgerError, Money,
    TrendPoint, summary::percent_of,
};
use crate::{config::BudgetThresholds, keyed::{find_by_key, remove_by_key}};
use chrono::NaiveDate;
use serde::Serialize;

/// Planned budget together with the fixed materials and labour costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Baseline {
    /// Planned budget.
    pub budget: Money,
    /// Materials cost.
    pub materials: Money,
    /// Labour cost.
    pub labor: Money,
}

impl Baseline {
    fn validate(self) -> Result<Self, CostLedgerError> {
        for (field, amount) in [
            ("budget", self.budget),
            ("materials", self.materials),
            ("labor", self.labor),
        ] {
            if amount.is_negative() {
                return Err(CostLedgerError::NegativeBaseline { field, amount });
            }
        }
        Ok(self)
    }

    fn fixed_costs(self) -> Money {
        self.materials.saturating_add(self.labor)
    }
}

/// Budget baseline plus dated cost entries in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CostLedger {
    baseline: Baseline,
    entries: Vec<CostEntry>,
}

impl CostLedger {
    /// Creates an empty ledger with a zero baseline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            baseline: Baseline {
                budget: Money::ZERO,
                materials: Money::ZERO,
                labor: Money::ZERO,
            },
            entries: Vec::new(),
        }
    }

    /// Returns the baseline.
    #[must_use]
    pub const fn baseline(&self) -> Baseline {
        self.baseline
    }

    /// Returns every entry in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CostEntry] {
        &self.entries
    }

    /// Returns the entry with the given identifier.
    #[must_use]
    pub fn entry(&self, id: CostEntryId) -> Option<&CostEntry> {
        find_by_key(&self.entries, id)
    }

    /// Replaces the budget, materials, and labour figures.
    ///
    /// # Errors
    ///
    /// Returns [`CostLedgerError::NegativeBaseline`] if any figure is below
    /// zero; the previous baseline is kept.
    pub fn set_baseline(&mut self, baseline: Baseline) -> Result<(), CostLedgerError> {
        self.baseline = baseline.validate()?;
        Ok(())
    }

    /// Records a new expense.
    ///
    /// # Errors
    ///
    /// Returns [`CostLedgerError::EmptyDescription`] for a blank description
    /// and [`CostLedgerError::NonPositiveAmount`] unless `amount` is above
    /// zero.
    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        description: &str,
        amount: Money,
        category: CostCategory,
    ) -> Result<CostEntry, CostLedgerError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(CostLedgerError::EmptyDescription);
        }
        if !amount.is_positive() {
            return Err(CostLedgerError::NonPositiveAmount(amount));
        }
        let entry = CostEntry::new(date, description.to_owned(), amount, category);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Removes an expense.
    ///
    /// # Errors
    ///
    /// Returns [`CostLedgerError::EntryNotFound`] if no entry has this id.
    pub fn delete_entry(&mut self, id: CostEntryId) -> Result<CostEntry, CostLedgerError> {
        remove_by_key(&mut self.entries, id).ok_or(CostLedgerError::EntryNotFound(id))
    }

    /// Sums every entry.
    #[must_use]
    pub fn entries_total(&self) -> Money {
        self.entries.iter().map(CostEntry::amount).sum()
    }

    /// Computes the budget position against the given thresholds.
    #[must_use]
    pub fn summary(&self, thresholds: BudgetThresholds) -> BudgetSummary {
        let entries_total = self.entries_total();
        let total_cost = self.baseline.fixed_costs().saturating_add(entries_total);
        let percent_used = percent_of(total_cost, self.baseline.budget);
        BudgetSummary {
            budget: self.baseline.budget,
            entries_total,
            total_cost,
            remaining: self.baseline.budget.saturating_sub(total_cost),
            percent_used,
            level: BudgetLevel::classify(percent_used, thresholds),
        }
    }

    /// Returns cumulative spend per entry in date order.
    ///
    /// Accumulation starts from materials plus labour. Entries sharing a
    /// date keep their insertion order.
    #[must_use]
    pub fn cost_trend(&self) -> Vec<TrendPoint> {
        let mut dated: Vec<&CostEntry> = self.entries.iter().collect();
        dated.sort_by_key(|entry| entry.date());
        dated
            .into_iter()
            .scan(self.baseline.fixed_costs(), |cumulative, entry| {
                *cumulative = cumulative.saturating_add(entry.amount());
                Some(TrendPoint {
                    date: entry.date(),
                    cumulative: *cumulative,
                })
            })
            .collect()
    }
}
