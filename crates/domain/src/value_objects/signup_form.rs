//! Signup form fields
//!
//! Values are sent verbatim. The only check is that both fields are filled
//! in; email format is left to the server.

use crate::error::DomainError;

/// A signup ready to be sent to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

/// Current contents of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    email: String,
    activity: String,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The selected activity name, empty when nothing is selected
    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn select_activity(&mut self, activity: impl Into<String>) {
        self.activity = activity.into();
    }

    /// Build the request for the current field values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either field is blank.
    pub fn submission(&self) -> Result<SignupRequest, DomainError> {
        if self.email.trim().is_empty() {
            return Err(DomainError::validation("Email is required"));
        }
        if self.activity.trim().is_empty() {
            return Err(DomainError::validation("An activity must be selected"));
        }
        Ok(SignupRequest {
            activity: self.activity.clone(),
            email: self.email.clone(),
        })
    }

    /// Clear both fields back to their initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        let mut form = SignupForm::new();
        form.set_email("emma@mergington.edu");
        form.select_activity("Programming Class");
        form
    }

    #[test]
    fn test_submission_passes_values_verbatim() {
        let mut form = filled();
        form.set_email("Emma+Clubs@Mergington.edu");

        assert_eq!(
            form.submission(),
            Ok(SignupRequest {
                activity: "Programming Class".to_string(),
                email: "Emma+Clubs@Mergington.edu".to_string(),
            })
        );
    }

    #[test]
    fn test_submission_requires_both_fields() {
        let mut no_email = filled();
        no_email.set_email("   ");
        assert!(no_email.submission().is_err());

        let mut no_activity = filled();
        no_activity.select_activity("");
        assert!(no_activity.submission().is_err());
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = filled();
        form.reset();

        assert_eq!(form.email(), "");
        assert_eq!(form.activity(), "");
    }
}
