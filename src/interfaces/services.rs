pub mod clipboard;
pub mod mailer;
pub mod submission_limiter;
