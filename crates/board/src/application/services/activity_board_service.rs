//! Activity Board Service - the board's use cases
//!
//! Each operation performs its request, branches on the result and returns
//! an outcome describing what the view must do next: which status message
//! to show, whether to reset the form, whether to reload the list. The
//! presentation layer applies outcomes in that order.
//!
//! Transport failures are logged here; nothing is raised to the caller.

use mergington_domain::{ActivityCatalog, ListState, SignupRequest, StatusMessage};
use mergington_domain::view::confirm_removal_prompt;

use crate::application::services::ActivityService;
use crate::ports::outbound::{ApiError, DecisionProvider};

/// Result of loading the activity collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(ActivityCatalog),
    Failed,
}

impl LoadOutcome {
    pub fn into_list_state(self) -> ListState {
        match self {
            LoadOutcome::Loaded(catalog) => ListState::Loaded(catalog),
            LoadOutcome::Failed => ListState::Failed,
        }
    }
}

/// What the view does after a signup attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    pub status: StatusMessage,
    pub reset_form: bool,
    pub reload: bool,
}

/// What the view does after a removal attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The user declined the confirmation; nothing was sent
    Declined,
    Finished { status: StatusMessage, reload: bool },
}

#[derive(Clone)]
pub struct ActivityBoardService {
    activities: ActivityService,
}

impl ActivityBoardService {
    pub fn new(activities: ActivityService) -> Self {
        Self { activities }
    }

    /// Fetch the activity collection. Failures of any kind collapse to
    /// `LoadOutcome::Failed`; there is no retry.
    pub async fn load(&self) -> LoadOutcome {
        match self.activities.list_activities().await {
            Ok(catalog) => {
                if catalog.is_empty() {
                    tracing::warn!("Server returned no activities");
                }
                let participants: usize = catalog
                    .iter()
                    .map(|(_, activity)| activity.participant_count())
                    .sum();
                tracing::debug!(count = catalog.len(), participants, "Loaded activities");
                LoadOutcome::Loaded(catalog)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching activities");
                LoadOutcome::Failed
            }
        }
    }

    /// Sign a participant up.
    ///
    /// The list is reloaded whenever the server answered, accepted or not.
    /// A request that never got a usable answer leaves the list alone.
    pub async fn submit_signup(&self, request: &SignupRequest) -> SignupOutcome {
        match self.activities.sign_up(request).await {
            Ok(receipt) => SignupOutcome {
                status: StatusMessage::signup_succeeded(receipt.message),
                reset_form: true,
                reload: true,
            },
            Err(ApiError::Http { status, detail }) => {
                tracing::debug!(status, activity = %request.activity, "Signup rejected");
                SignupOutcome {
                    status: StatusMessage::signup_rejected(detail),
                    reset_form: false,
                    reload: true,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, activity = %request.activity, "Error signing up");
                SignupOutcome {
                    status: StatusMessage::signup_failed(),
                    reset_form: false,
                    reload: false,
                }
            }
        }
    }

    /// Remove `email` from `activity` once the user confirms.
    ///
    /// Only a successful removal reloads the list.
    pub async fn remove_participant<D: DecisionProvider>(
        &self,
        activity: &str,
        email: &str,
        decisions: &D,
    ) -> RemovalOutcome {
        if !decisions.confirm(confirm_removal_prompt(activity, email)).await {
            tracing::debug!(%activity, %email, "Removal declined");
            return RemovalOutcome::Declined;
        }

        match self.activities.unregister(activity, email).await {
            Ok(()) => RemovalOutcome::Finished {
                status: StatusMessage::participant_removed(email, activity),
                reload: true,
            },
            Err(ApiError::Http { status, detail }) => {
                tracing::debug!(status, %activity, "Removal rejected");
                RemovalOutcome::Finished {
                    status: StatusMessage::removal_rejected(detail),
                    reload: false,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, %activity, "Error removing participant");
                RemovalOutcome::Finished {
                    status: StatusMessage::removal_failed(),
                    reload: false,
                }
            }
        }
    }
}
