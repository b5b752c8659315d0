//! Contact form draft and validation.
//!
//! There is no backend for messages: submission waits
//! [`SIMULATED_SUBMIT_MS`] and then reports success.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

/// Artificial latency of the simulated submission.
pub const SIMULATED_SUBMIT_MS: u32 = 1_000;

/// Why a contact form cannot be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
}

/// Field values of the contact form. Phone is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Check required fields, returning a trimmed copy ready to send.
    pub fn validate(&self) -> Result<Self, ContactFormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactFormError::MissingMessage);
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: self.phone.trim().to_owned(),
            message: message.to_owned(),
        })
    }
}

/// Minimal `local@domain.tld` shape check, as browsers apply to `type="email"`.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Contact form plus submission progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub submitting: bool,
    pub error: Option<ContactFormError>,
}

impl ContactState {
    /// Validate and mark the form as submitting.
    ///
    /// Returns the payload to send, or `None` when a submission is already in
    /// flight or validation failed (the error is kept in `self.error`).
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.submitting {
            return None;
        }
        match self.form.validate() {
            Ok(payload) => {
                self.error = None;
                self.submitting = true;
                Some(payload)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// Clear the form after the simulated send completes.
    pub fn finish_submit(&mut self) {
        self.form = ContactForm::default();
        self.submitting = false;
    }
}
