//! Wire shapes of the activities API bodies

mod api_bodies;

pub use api_bodies::{ErrorBody, SignupReceipt};
