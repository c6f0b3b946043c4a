//! Shared types, errors, and configuration for Sitebook.
//!
//! This crate provides common types used across all other crates:
//! - Server-assigned identifier generation
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, IdConfig, ServerConfig, StorageSettings};
pub use error::AppError;
pub use types::{IdGenerator, IdStrategy};
