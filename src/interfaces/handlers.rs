pub mod contact;
pub mod donate;
pub mod home;
pub mod page;
pub mod portfolio;
pub mod system;
