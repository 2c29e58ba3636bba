//! Activity Service - the activities HTTP contract
//!
//! Thin typed calls over `Api`. Decisions about what the user sees live in
//! `ActivityBoardService`.

use mergington_domain::{ActivityCatalog, SignupReceipt, SignupRequest};

use crate::application::api::Api;
use crate::application::paths::{signup_path, unregister_path, ACTIVITIES_PATH};
use crate::ports::outbound::ApiError;

#[derive(Clone)]
pub struct ActivityService {
    api: Api,
}

impl ActivityService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Fetch the full activity collection
    pub async fn list_activities(&self) -> Result<ActivityCatalog, ApiError> {
        self.api.get(ACTIVITIES_PATH).await
    }

    /// Register `request.email` for `request.activity`
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<SignupReceipt, ApiError> {
        self.api
            .post_empty_with_response(&signup_path(&request.activity, &request.email))
            .await
    }

    /// Remove `email` from `activity`.
    ///
    /// The success body only has to be valid JSON; its content is ignored.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .api
            .delete_with_response(&unregister_path(activity, email))
            .await?;
        Ok(())
    }
}
