use std::time::Duration;

use crate::entities::contact::{ContactSubmission, SubmissionResult};

/// How long the status banner stays up before dismissing itself.
pub const BANNER_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Showing { result: SubmissionResult, until_ms: u64 },
}

/// Client-side state of the contact form between keystrokes, submit, and
/// the banner that reports the server's answer.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: ContactSubmission,
    status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm { fields: ContactSubmission::default(), status: FormStatus::Idle }
    }
}

impl ContactForm {
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status == FormStatus::Sending { "Sending..." } else { "Send Message" }
    }

    /// Hands the current fields out for sending. `None` while a previous
    /// submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if !self.can_submit() {
            return None;
        }
        self.status = FormStatus::Sending;
        Some(self.fields.clone())
    }

    pub fn finish_submit(&mut self, result: SubmissionResult, now_ms: u64) {
        if result.success {
            self.fields = ContactSubmission::default();
        }
        self.status = FormStatus::Showing {
            result,
            until_ms: now_ms.saturating_add(BANNER_DURATION.as_millis() as u64),
        };
    }

    pub fn dismiss(&mut self) {
        if matches!(self.status, FormStatus::Showing { .. }) {
            self.status = FormStatus::Idle;
        }
    }

    pub fn tick(&mut self, now_ms: u64) {
        if let FormStatus::Showing { until_ms, .. } = self.status {
            if now_ms >= until_ms {
                self.status = FormStatus::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.fields.name = "Ada".into();
        form.fields.email = "ada@example.com".into();
        form.fields.message = "I'd like to commission a piece.".into();
        form
    }

    #[test]
    fn submit_is_disabled_while_sending() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert_eq!(form.submit_label(), "Sending...");
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn success_clears_fields_and_banner_expires() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(SubmissionResult::ok("Your message has been sent successfully!"), 1_000);

        assert_eq!(form.fields.name, "");
        assert!(form.can_submit());

        form.tick(3_999);
        assert!(matches!(form.status(), FormStatus::Showing { .. }));
        form.tick(4_000);
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn banner_deadline_saturates() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(SubmissionResult::ok("Your message has been sent successfully!"), u64::MAX - 1);

        assert!(matches!(form.status(), FormStatus::Showing { until_ms: u64::MAX, .. }));
        form.tick(u64::MAX);
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn failure_keeps_fields_for_correction() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(SubmissionResult::failed("Valid email is required"), 0);

        assert_eq!(form.fields.name, "Ada");
        assert!(form.can_submit());
        form.dismiss();
        assert_eq!(form.status(), &FormStatus::Idle);
    }
}
