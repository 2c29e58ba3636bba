//! Board state management
//!
//! Holds the latest list state, the status slot, the signup form and any
//! open confirmation. Every field is overwritten, never merged: the last
//! write wins.

use dioxus::prelude::*;
use mergington_domain::{ListState, SignupForm, StatusMessage, StatusSlot, StatusTicket};

use super::decision_state::{DialogDecisionProvider, PendingDecision};

#[derive(Clone, Copy)]
pub struct BoardState {
    /// Activities list area
    pub list: Signal<ListState>,
    /// The single live status message
    pub status: Signal<StatusSlot>,
    pub form: Signal<SignupForm>,
    /// Open removal confirmation, if any
    pub pending_decision: Signal<Option<PendingDecision>>,
}

impl BoardState {
    /// Create a new BoardState; the list starts out loading
    pub fn new() -> Self {
        Self {
            list: Signal::new(ListState::Loading),
            status: Signal::new(StatusSlot::new()),
            form: Signal::new(SignupForm::new()),
            pending_decision: Signal::new(None),
        }
    }

    /// Replace the list with a freshly loaded (or failed) state
    pub fn set_list(&mut self, list: ListState) {
        self.list.set(list);
    }

    pub fn show_status(&mut self, message: StatusMessage) -> StatusTicket {
        self.status.write().show(message)
    }

    /// Hide the status message if `ticket` is still the live one
    pub fn expire_status(&mut self, ticket: StatusTicket) {
        if !self.status.write().expire(ticket) {
            tracing::trace!(%ticket, "Stale status timer ignored");
        }
    }

    pub fn set_email(&mut self, email: String) {
        self.form.write().set_email(email);
    }

    pub fn select_activity(&mut self, activity: String) {
        self.form.write().select_activity(activity);
    }

    pub fn reset_form(&mut self) {
        self.form.write().reset();
    }

    pub fn decisions(&self) -> DialogDecisionProvider {
        DialogDecisionProvider::new(self.pending_decision)
    }

    /// Answer the open confirmation, if there is one
    pub fn answer_decision(&mut self, accepted: bool) {
        if let Some(decision) = self.pending_decision.write().take() {
            decision.answer(accepted);
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the BoardState from context
pub fn use_board_state() -> BoardState {
    use_context::<BoardState>()
}
