/// Per-address cooldown between accepted contact submissions.
///
/// Checking never records: a submission only counts once it has actually
/// been delivered.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionLimiter: Send + Sync {
    fn is_limited(&self, email: &str, now_ms: u64) -> bool;
    fn record(&self, email: &str, now_ms: u64);
}
