//! Domain model for project costs.

mod entry;
mod error;
mod ledger;
mod money;
mod summary;

pub use entry::{CostCategory, CostEntry, CostEntryId};
pub use error::{CostLedgerError, ParseCostCategoryError, ParseMoneyError};
pub use ledger::{Baseline, CostLedger};
pub use money::Money;
pub use summary::{BudgetLevel, BudgetSummary, TrendPoint};
