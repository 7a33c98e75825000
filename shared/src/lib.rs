//! Shared configuration and logging setup for the token workspace
//!
//! This crate provides:
//! - Configuration types (environment, token, logging)
//! - `tracing` subscriber initialisation

pub mod config;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, TokenConfig};
