//! Value objects for the activity board

mod signup_form;
mod status;

pub use signup_form::{SignupForm, SignupRequest};
pub use status::{StatusKind, StatusMessage, StatusSlot, StatusTicket};
