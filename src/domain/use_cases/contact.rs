use std::time::Duration;

use crate::{
    entities::contact::{ContactSubmission, OutgoingMail, SubmissionOutcome},
    errors::MailError,
    services::{mailer::Mailer, submission_limiter::SubmissionLimiter},
};

pub struct ContactHandler<M, L>
where
    M: Mailer,
    L: SubmissionLimiter,
{
    pub mailer: M,
    pub limiter: L,
    pub from: String,
    pub to: String,
    pub send_timeout: Duration,
}

impl<M, L> ContactHandler<M, L>
where
    M: Mailer,
    L: SubmissionLimiter,
{
    pub fn new(mailer: M, limiter: L, from: String, to: String, send_timeout: Duration) -> Self {
        ContactHandler { mailer, limiter, from, to, send_timeout }
    }

    /// Runs one submission through honeypot, cooldown, validation and
    /// delivery. Every path ends in a terminal outcome; nothing is retried.
    pub async fn submit(&self, submission: ContactSubmission, now_ms: u64) -> SubmissionOutcome {
        if submission.is_bot() {
            tracing::info!("Discarding contact submission with populated honeypot");
            return SubmissionOutcome::BotDiscarded;
        }

        if self.limiter.is_limited(&submission.email, now_ms) {
            tracing::info!(email = %submission.email, "Contact submission inside cooldown window");
            return SubmissionOutcome::RateLimited;
        }

        if let Some(message) = submission.first_violation() {
            tracing::debug!(reason = %message, "Contact submission failed validation");
            return SubmissionOutcome::ValidationFailed(message);
        }

        let mail = OutgoingMail::compose(&submission, &self.from, &self.to);

        match self.deliver(&mail).await {
            Ok(()) => {
                self.limiter.record(&submission.email, now_ms);
                tracing::info!(email = %submission.email, "Contact message delivered");
                SubmissionOutcome::Sent
            }
            Err(e) => {
                tracing::error!("Error sending email: {}", e);
                SubmissionOutcome::SendFailed
            }
        }
    }

    async fn deliver(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        match tokio::time::timeout(self.send_timeout, self.mailer.send(mail)).await {
            Ok(result) => result,
            Err(_) => Err(MailError::Timeout(self.send_timeout.as_secs())),
        }
    }
}
