//! Adapter implementations for the team directory port.

pub mod memory;
