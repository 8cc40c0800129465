//! The `taskdesk` library crate.
//!
//! Contains the core business logic, domain models, authentication
//! mechanisms, repository traits and adapters, routing configuration, and
//! error handling for the TaskDesk application. The binary (`main.rs`) uses
//! it to construct and run the server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;
pub mod validation;

pub use crate::error::AppError;
pub use crate::state::AppState;
