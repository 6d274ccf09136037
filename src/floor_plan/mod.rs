//! Floor plan of installation points.
//!
//! Points are placed on the plan by percentage coordinates, created from a
//! per-type template, and tracked through a checklist whose completion
//! drives the point status.

pub mod domain;

#[cfg(test)]
mod tests;
