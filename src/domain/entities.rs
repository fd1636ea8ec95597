pub mod contact;
pub mod donation;
pub mod page;
pub mod portfolio;
