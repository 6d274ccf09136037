//! Unit tests for the cost ledger.

mod money_tests;
