//! Unit tests for the project container.
