//! Mergington domain layer.
//!
//! Pure types shared by every client target: the activity snapshot returned
//! by the server, the transient status message model, the signup form and
//! the projection that turns a snapshot into what the board renders.

pub mod entities;
pub mod error;
pub mod types;
pub mod value_objects;
pub mod view;

pub use entities::{Activity, ActivityCatalog};
pub use error::DomainError;
pub use types::{ErrorBody, SignupReceipt};
pub use value_objects::{
    SignupForm, SignupRequest, StatusKind, StatusMessage, StatusSlot, StatusTicket,
};
pub use view::{ActivityCard, BoardView, ListState, ParticipantList, ParticipantRow};
