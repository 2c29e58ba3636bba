//! Test helpers shared by unit tests across the crate.

#[cfg(test)]
pub mod fixtures;
