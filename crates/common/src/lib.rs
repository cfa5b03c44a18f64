//! Shared utilities, configuration, and error handling for CookBot
//!
//! This crate provides common functionality used across the CookBot server:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Custom axum extractors
//! - Clock abstraction for deterministic timestamps

pub mod clock;
pub mod config;
pub mod error;
pub mod extractors;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use extractors::AppJson;
