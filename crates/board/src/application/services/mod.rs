//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations.

pub mod activity_board_service;
pub mod activity_service;

pub use activity_board_service::{
    ActivityBoardService, LoadOutcome, RemovalOutcome, SignupOutcome,
};
pub use activity_service::ActivityService;
