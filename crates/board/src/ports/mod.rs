//! Board port definitions.

pub mod outbound;
