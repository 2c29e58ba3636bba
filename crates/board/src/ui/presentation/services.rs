//! Service providers for the presentation layer
//!
//! Components use `use_context` to reach application services without
//! depending on infrastructure implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{ActivityBoardService, ActivityService};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub board: Arc<ActivityBoardService>,
}

impl Services {
    /// Create all services over the given REST API
    pub fn new(api: Api) -> Self {
        Self {
            board: Arc::new(ActivityBoardService::new(ActivityService::new(api))),
        }
    }
}

/// Hook to access the ActivityBoardService from context
pub fn use_activity_board_service() -> Arc<ActivityBoardService> {
    let services = use_context::<Services>();
    services.board.clone()
}
