//! Unit tests for phase progress.

mod progress_tests;
