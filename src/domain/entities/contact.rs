use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::{
    BOT_DISCARDED_MESSAGE, EMAIL_INVALID_MESSAGE, MESSAGE_TOO_SHORT_MESSAGE, MIN_MESSAGE_UNITS,
    RATE_LIMITED_MESSAGE, SEND_FAILED_MESSAGE, SENT_MESSAGE,
};

/// Local part of word characters and `'+-.` not ending in a dot, then one
/// or more dotted labels and an alphabetic TLD of at least two letters.
static EMAIL_SHAPE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$").ok()
});

// ───── Request Models ───────────────────────────────────────────────

/// A single contact-form post. Missing fields arrive as empty strings so
/// that validation, not deserialization, decides what the visitor sees.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ContactSubmission {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        email(message = "Valid email is required"),
        custom(function = "validate_email_shape")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_message_length"))]
    pub message: String,

    /// Honeypot, hidden from humans.
    #[serde(default)]
    pub website: String,
}

/// Stricter than the derive's `email` rule: a leading dot, doubled dots
/// and a domain without a dotted TLD are all refused.
fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    let shaped = EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(email));
    if email.starts_with('.') || email.contains("..") || !shaped {
        let mut err = ValidationError::new("email_shape");
        err.message = Some(EMAIL_INVALID_MESSAGE.into());
        return Err(err);
    }
    Ok(())
}

/// Length is counted in UTF-16 code units, as the browser form counts it.
fn validate_message_length(message: &str) -> Result<(), ValidationError> {
    if message.encode_utf16().count() < MIN_MESSAGE_UNITS {
        let mut err = ValidationError::new("message_length");
        err.message = Some(MESSAGE_TOO_SHORT_MESSAGE.into());
        return Err(err);
    }
    Ok(())
}

/// Rule priority when more than one field is wrong.
const FIELD_PRIORITY: [&str; 3] = ["name", "email", "message"];

impl ContactSubmission {
    pub fn is_bot(&self) -> bool {
        !self.website.is_empty()
    }

    /// Message of the first rule this submission breaks, in the order
    /// name, email, message. `None` when the submission is valid.
    pub fn first_violation(&self) -> Option<String> {
        let errors = self.validate().err()?;
        let by_field = errors.field_errors();

        FIELD_PRIORITY.iter().find_map(|field| {
            by_field
                .get(*field)
                .and_then(|errs| errs.first())
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string())
                })
        })
    }
}

// ───── Outcome Models ───────────────────────────────────────────────

/// Terminal states of one pass through the submission pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    BotDiscarded,
    RateLimited,
    ValidationFailed(String),
    SendFailed,
    Sent,
}

impl SubmissionOutcome {
    pub fn result(&self) -> SubmissionResult {
        match self {
            SubmissionOutcome::BotDiscarded => SubmissionResult::ok(BOT_DISCARDED_MESSAGE),
            SubmissionOutcome::RateLimited => SubmissionResult::failed(RATE_LIMITED_MESSAGE),
            SubmissionOutcome::ValidationFailed(msg) => SubmissionResult::failed(msg.as_str()),
            SubmissionOutcome::SendFailed => SubmissionResult::failed(SEND_FAILED_MESSAGE),
            SubmissionOutcome::Sent => SubmissionResult::ok(SENT_MESSAGE),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionOutcome::BotDiscarded => "bot_discarded",
            SubmissionOutcome::RateLimited => "rate_limited",
            SubmissionOutcome::ValidationFailed(_) => "validation_failed",
            SubmissionOutcome::SendFailed => "send_failed",
            SubmissionOutcome::Sent => "sent",
        }
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        SubmissionResult { success: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        SubmissionResult { success: false, message: message.into() }
    }
}

// ───── Outbound Mail ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl OutgoingMail {
    pub fn compose(submission: &ContactSubmission, from: &str, to: &str) -> Self {
        let ContactSubmission { name, email, message, .. } = submission;

        let html_message = message
            .split('\n')
            .map(ammonia::clean_text)
            .collect::<Vec<_>>()
            .join("<br>");

        let html_body = format!(
            "<h2>New Contact Form Submission</h2>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <h3>Message:</h3>\n\
             <p>{}</p>\n",
            ammonia::clean_text(name),
            ammonia::clean_text(email),
            html_message,
        );

        OutgoingMail {
            from: from.to_string(),
            to: to.to_string(),
            reply_to: email.clone(),
            subject: format!("Contact Form: Message from {}", name),
            text_body: format!("Name: {}\nEmail: {}\n\nMessage:\n{}", name, email, message),
            html_body,
        }
    }
}
