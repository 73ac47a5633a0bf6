//! Shared errors and configuration for FinBot.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AdvisorConfig, AppConfig, ServerConfig};
pub use error::AppError;
