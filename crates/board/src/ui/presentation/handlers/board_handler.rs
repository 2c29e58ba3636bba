//! Board handlers
//!
//! Outcomes are applied in a fixed order: status message, form reset,
//! list reload.
//!
//! Hide timers and removals are root-owned tasks: they must outlive the
//! participant row a removal unmounts.

use std::sync::Arc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use mergington_domain::StatusMessage;

use crate::application::services::{ActivityBoardService, RemovalOutcome};
use crate::ui::presentation::state::BoardState;
use crate::ui::Platform;

/// Fetch the collection and replace the list area with the result
pub async fn load_activities(board: Arc<ActivityBoardService>, mut state: BoardState) {
    let outcome = board.load().await;
    state.set_list(outcome.into_list_state());
}

/// Show `message` and schedule its hide timer
pub fn show_status(mut state: BoardState, platform: Platform, message: StatusMessage) {
    let hide_after_ms = message.hide_after_ms();
    let ticket = state.show_status(message);

    spawn_forever(async move {
        platform.sleep_ms(hide_after_ms).await;
        state.expire_status(ticket);
    });
}

pub async fn submit_signup(
    board: Arc<ActivityBoardService>,
    mut state: BoardState,
    platform: Platform,
) {
    let submission = state.form.read().submission();
    let request = match submission {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Signup form incomplete");
            return;
        }
    };

    let outcome = board.submit_signup(&request).await;

    show_status(state, platform, outcome.status);
    if outcome.reset_form {
        state.reset_form();
    }
    if outcome.reload {
        load_activities(board, state).await;
    }
}

/// Run a removal from a participant row
pub fn start_removal(
    board: Arc<ActivityBoardService>,
    state: BoardState,
    platform: Platform,
    activity: String,
    email: String,
) {
    spawn_forever(remove_participant(board, state, platform, activity, email));
}

pub async fn remove_participant(
    board: Arc<ActivityBoardService>,
    state: BoardState,
    platform: Platform,
    activity: String,
    email: String,
) {
    let decisions = state.decisions();

    match board.remove_participant(&activity, &email, &decisions).await {
        RemovalOutcome::Declined => {}
        RemovalOutcome::Finished { status, reload } => {
            show_status(state, platform, status);
            if reload {
                load_activities(board, state).await;
            }
        }
    }
}
