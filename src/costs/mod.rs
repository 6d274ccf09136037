//! Cost ledger and budget tracking.
//!
//! The ledger holds a budget baseline (budget, materials, labour) plus dated
//! cost entries. Amounts are integer cents so totals never drift.

pub mod domain;

#[cfg(test)]
mod tests;
