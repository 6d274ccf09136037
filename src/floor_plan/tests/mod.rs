//! Unit tests for the floor plan.
