//! Port contracts for team lookup.

pub mod directory;

pub use directory::TeamDirectory;
