//! Shared types, errors, and configuration for VentureHub.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision
//! - Typed IDs for snapshot entities
//! - The display theme
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DashboardConfig, ServerConfig};
pub use error::{AppError, AppResult};
