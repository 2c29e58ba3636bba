//! In-app confirmation dialog state
//!
//! A question is parked in a signal together with the sender half of a
//! oneshot channel. The dialog component answers it; the task that asked
//! awaits the receiver, so nothing blocks while the dialog is open.

use std::{future::Future, pin::Pin};

use dioxus::prelude::*;
use futures_channel::oneshot;

use crate::ports::outbound::DecisionProvider;

/// A question waiting for the user
pub struct PendingDecision {
    pub prompt: String,
    responder: oneshot::Sender<bool>,
}

impl PendingDecision {
    pub fn new(prompt: String) -> (Self, oneshot::Receiver<bool>) {
        let (responder, answer) = oneshot::channel();
        (Self { prompt, responder }, answer)
    }

    /// Deliver the answer; a vanished asker is ignored
    pub fn answer(self, accepted: bool) {
        let _ = self.responder.send(accepted);
    }
}

/// `DecisionProvider` backed by the board's confirmation dialog
#[derive(Clone, Copy)]
pub struct DialogDecisionProvider {
    pending: Signal<Option<PendingDecision>>,
}

impl DialogDecisionProvider {
    pub fn new(pending: Signal<Option<PendingDecision>>) -> Self {
        Self { pending }
    }
}

impl DecisionProvider for DialogDecisionProvider {
    fn confirm(&self, prompt: String) -> Pin<Box<dyn Future<Output = bool> + 'static>> {
        let (decision, answer) = PendingDecision::new(prompt);
        let mut pending = self.pending;
        // An unanswered earlier question is dropped here and resolves as declined.
        pending.set(Some(decision));
        Box::pin(async move { answer.await.unwrap_or(false) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_answer_reaches_asker() {
        let (decision, answer) = PendingDecision::new("Remove?".to_string());
        decision.answer(true);
        assert_eq!(answer.await, Ok(true));
    }

    #[tokio::test]
    async fn test_dropped_question_reads_as_declined() {
        let (decision, answer) = PendingDecision::new("Remove?".to_string());
        drop(decision);
        assert!(!answer.await.unwrap_or(false));
    }
}
