//! Transient status messages
//!
//! At most one message is visible at a time. Each shown message gets a
//! fresh [`StatusTicket`]; the hide timer scheduled for it carries that
//! ticket, so a timer that outlives its message cannot hide a newer one.

use std::fmt;

/// Hide delay for a successful removal
pub const REMOVAL_SUCCESS_HIDE_MS: u64 = 3_000;

/// Hide delay for every other message
pub const DEFAULT_HIDE_MS: u64 = 5_000;

const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const REMOVAL_REJECTED_FALLBACK: &str = "Failed to remove participant";
const REMOVAL_FAILED: &str = "Failed to remove participant. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// CSS class applied to the message element
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// A user-facing notification of an operation's outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    kind: StatusKind,
    hide_after_ms: u64,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, kind: StatusKind, hide_after_ms: u64) -> Self {
        Self {
            text: text.into(),
            kind,
            hide_after_ms,
        }
    }

    /// Server confirmed a signup; `message` is the server's text
    pub fn signup_succeeded(message: impl Into<String>) -> Self {
        Self::new(message, StatusKind::Success, DEFAULT_HIDE_MS)
    }

    /// Server rejected a signup, with its `detail` if one was sent
    pub fn signup_rejected(detail: Option<String>) -> Self {
        Self::new(
            non_blank(detail).unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_string()),
            StatusKind::Error,
            DEFAULT_HIDE_MS,
        )
    }

    /// Signup request never produced a usable response
    pub fn signup_failed() -> Self {
        Self::new(SIGNUP_FAILED, StatusKind::Error, DEFAULT_HIDE_MS)
    }

    pub fn participant_removed(email: &str, activity: &str) -> Self {
        Self::new(
            format!("{email} has been removed from {activity}"),
            StatusKind::Success,
            REMOVAL_SUCCESS_HIDE_MS,
        )
    }

    /// Server rejected a removal, with its `detail` if one was sent
    pub fn removal_rejected(detail: Option<String>) -> Self {
        Self::new(
            non_blank(detail).unwrap_or_else(|| REMOVAL_REJECTED_FALLBACK.to_string()),
            StatusKind::Error,
            DEFAULT_HIDE_MS,
        )
    }

    /// Removal request never produced a usable response
    pub fn removal_failed() -> Self {
        Self::new(REMOVAL_FAILED, StatusKind::Error, DEFAULT_HIDE_MS)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn hide_after_ms(&self) -> u64 {
        self.hide_after_ms
    }
}

// An empty detail string is treated like a missing one.
fn non_blank(detail: Option<String>) -> Option<String> {
    detail.filter(|d| !d.is_empty())
}

/// Identifies which shown message a hide timer belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusTicket(u64);

impl fmt::Display for StatusTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The single live status message slot.
///
/// States: Hidden (no message) and Visible. `show` always moves to Visible
/// and replaces whatever was there; `expire` moves back to Hidden only when
/// called with the ticket of the message currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSlot {
    current: Option<StatusMessage>,
    ticket: StatusTicket,
}

impl StatusSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, superseding any visible message
    pub fn show(&mut self, message: StatusMessage) -> StatusTicket {
        self.ticket = StatusTicket(self.ticket.0 + 1);
        self.current = Some(message);
        self.ticket
    }

    /// Hide the message shown under `ticket`.
    ///
    /// Returns `false` when the ticket is stale or the slot is already hidden.
    pub fn expire(&mut self, ticket: StatusTicket) -> bool {
        if ticket != self.ticket || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn visible(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}
