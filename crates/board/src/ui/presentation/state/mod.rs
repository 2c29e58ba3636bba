//! Reactive state for the board, shared through Dioxus context

mod board_state;
mod decision_state;

pub use board_state::{use_board_state, BoardState};
pub use decision_state::{DialogDecisionProvider, PendingDecision};
