pub mod contact;
pub mod donate;
pub mod extractors;
pub mod form_status;
pub mod hero;
pub mod portfolio;
pub mod scroll;
