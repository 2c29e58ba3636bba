//! Event handlers that run board operations and apply their outcomes

mod board_handler;

pub use board_handler::{
    load_activities, remove_participant, show_status, start_removal, submit_signup,
};
