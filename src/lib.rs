pub mod api;
pub mod clock;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod server;
pub mod simulation;
pub mod store;
