use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const BOT_DISCARDED_MESSAGE: &str = "Form submitted successfully";
pub const RATE_LIMITED_MESSAGE: &str = "Please wait a minute before submitting again";
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";
pub const EMAIL_INVALID_MESSAGE: &str = "Valid email is required";
pub const MESSAGE_TOO_SHORT_MESSAGE: &str = "Message must be at least 10 characters";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send your message. Please try again later.";
pub const SENT_MESSAGE: &str = "Your message has been sent successfully!";

pub const MIN_MESSAGE_UNITS: usize = 10;

pub const DONATION_HANDLE: &str = "@CoGaineum-Art";
pub const DONATION_LINK: &str = "https://venmo.com/";
