pub mod account;
pub mod admin;
pub mod blog;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod reviews;
pub mod uploads;
