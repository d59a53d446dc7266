//! Contact form: validation, dispatch payload, and submission status.
//!
//! The HTTP call itself belongs to the caller; this module decides
//! whether a request may be sent and what it contains, and tracks the
//! outcome.
//!
//! ```text
//!  Idle ──submit(valid)──▶ Sending ──ok──▶ Success ──after 3s──▶ Idle
//!   ▲                         │
//!   └──── submit(valid) ◀── Error ◀──failure──┘
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SubmitError;

/// EmailJS REST endpoint.
pub const EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Delay before a success banner reverts to the idle form.
pub const STATUS_RESET_MS: u32 = 3_000;

/// Only Gmail addresses are accepted.
static GMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@gmail\.com$").expect("Gmail pattern is valid")
});

pub fn is_valid_gmail(email: &str) -> bool {
    GMAIL_ADDRESS.is_match(email)
}

// =============================================================================
// Form
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    fn required_message(&self) -> String {
        format!("{} is required", self.label())
    }
}

/// Validation messages keyed by field.
pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Check every field; all failures are reported at once.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors: FieldErrors = Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .map(|field| (field, field.required_message()))
            .collect();

        if !self.email.trim().is_empty() && !is_valid_gmail(&self.email) {
            errors.insert(Field::Email, "Please enter a valid Gmail address".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

// =============================================================================
// Dispatch payload
// =============================================================================

/// Routing identifiers for the email service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
}

/// Body POSTed to the email service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    pub fn new(config: &DispatchConfig, form: &ContactForm) -> Self {
        ContactRequest {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.user_id.clone(),
            template_params: TemplateParams {
                from_name: form.name.clone(),
                from_email: form.email.clone(),
                subject: form.subject.clone(),
                message: form.message.clone(),
            },
        }
    }
}

// =============================================================================
// Submission status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }

    /// Banner text, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
            SubmissionStatus::Success => Some("Message sent successfully!"),
            SubmissionStatus::Error => Some("Failed to send message. Please try again."),
        }
    }
}

/// Everything the contact section renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}

impl ContactFormState {
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validate and, if the form is clean, move to `Sending`.
    ///
    /// Returns the request to send, or `None` when validation failed or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self, config: &DispatchConfig) -> Option<ContactRequest> {
        if self.status.is_sending() {
            return None;
        }

        match self.form.validate() {
            Err(errors) => {
                self.errors = errors;
                None
            }
            Ok(()) => {
                self.errors.clear();
                self.status = SubmissionStatus::Sending;
                Some(ContactRequest::new(config, &self.form))
            }
        }
    }

    /// Record the outcome of the request returned by [`Self::begin_submit`].
    ///
    /// Success clears the form; failure keeps it for another attempt.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.form.clear();
            }
            Err(err) => {
                log::warn!("Contact submission failed: {}", err);
                self.status = SubmissionStatus::Error;
            }
        }
    }

    /// Revert a success banner to the idle form.
    pub fn reset_status(&mut self) {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Whether the submit button is enabled.
    ///
    /// Blank-but-not-empty fields still enable it, so that validation can
    /// explain what is wrong.
    pub fn can_submit(&self) -> bool {
        !self.status.is_sending() && Field::ALL.iter().all(|f| !self.form.get(*f).is_empty())
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch() -> DispatchConfig {
        DispatchConfig {
            endpoint: EMAIL_ENDPOINT.to_string(),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            user_id: "user_test".to_string(),
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada.l+site@gmail.com".into(),
            subject: "Collaboration".into(),
            message: "Let's build a gearbox.".into(),
        }
    }

    #[test]
    fn test_gmail_pattern() {
        assert!(is_valid_gmail("someone@gmail.com"));
        assert!(is_valid_gmail("first.last_99%x@gmail.com"));
        assert!(!is_valid_gmail("someone@outlook.com"));
        assert!(!is_valid_gmail("someone@gmail.com.evil"));
        assert!(!is_valid_gmail("@gmail.com"));
        assert!(!is_valid_gmail(" someone@gmail.com"));
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_all_blank_fields_reported() {
        let form = ContactForm {
            name: "  ".into(),
            ..ContactForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Name], "Name is required");
        assert_eq!(errors[&Field::Email], "Email is required");
    }

    #[test]
    fn test_non_gmail_rejected() {
        let form = ContactForm {
            email: "ada@example.com".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Email], "Please enter a valid Gmail address");
    }

    #[test]
    fn test_empty_message_blocks_request() {
        let mut state = ContactFormState::default();
        state.form = ContactForm {
            message: String::new(),
            ..valid_form()
        };

        assert_eq!(state.begin_submit(&dispatch()), None);
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.error_for(Field::Message), Some("Message is required"));
        assert_eq!(state.error_for(Field::Name), None);
    }

    #[test]
    fn test_valid_submit_builds_request() {
        let mut state = ContactFormState {
            form: valid_form(),
            ..ContactFormState::default()
        };
        state.errors.insert(Field::Name, "stale".into());

        let request = state.begin_submit(&dispatch()).unwrap();
        assert_eq!(state.status, SubmissionStatus::Sending);
        assert!(state.errors.is_empty());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["service_id"], "service_test");
        assert_eq!(json["template_id"], "template_test");
        assert_eq!(json["user_id"], "user_test");
        assert_eq!(json["template_params"]["from_name"], "Ada");
        assert_eq!(json["template_params"]["from_email"], "ada.l+site@gmail.com");
        assert_eq!(json["template_params"]["subject"], "Collaboration");
    }

    #[test]
    fn test_submit_button_enablement() {
        let mut state = ContactFormState::default();
        assert!(!state.can_submit());

        state.form = valid_form();
        assert!(state.can_submit());

        state.update_field(Field::Subject, " ");
        assert!(state.can_submit());

        state.update_field(Field::Subject, "Hi");
        state.begin_submit(&dispatch());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_no_second_request_while_sending() {
        let mut state = ContactFormState {
            form: valid_form(),
            ..ContactFormState::default()
        };
        assert!(state.begin_submit(&dispatch()).is_some());
        assert!(state.begin_submit(&dispatch()).is_none());
    }

    #[test]
    fn test_success_clears_form_then_resets() {
        let mut state = ContactFormState {
            form: valid_form(),
            ..ContactFormState::default()
        };
        state.begin_submit(&dispatch());
        state.finish(Ok(()));

        assert_eq!(state.status, SubmissionStatus::Success);
        assert_eq!(state.form, ContactForm::default());
        assert!(state.status.banner().is_some());

        state.reset_status();
        assert_eq!(state.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_failure_keeps_form_for_retry() {
        let mut state = ContactFormState {
            form: valid_form(),
            ..ContactFormState::default()
        };
        state.begin_submit(&dispatch());
        state.finish(Err(SubmitError::Status(400)));

        assert_eq!(state.status, SubmissionStatus::Error);
        assert_eq!(state.form, valid_form());

        // A pending reset timer must not hide the error.
        state.reset_status();
        assert_eq!(state.status, SubmissionStatus::Error);

        assert!(state.begin_submit(&dispatch()).is_some());
    }
}
