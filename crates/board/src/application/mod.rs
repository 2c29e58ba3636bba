//! Application layer - Use cases and orchestration

pub mod api;
pub mod paths;
pub mod services;

pub use api::Api;
