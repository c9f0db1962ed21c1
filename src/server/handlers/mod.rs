pub mod admin;
pub mod diner;
pub mod owners;
