//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (ports non-zero, names non-empty)
//! - Check the log level is one tracing understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AdapterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AdapterConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("request.server_name must not be empty")]
    EmptyServerName,

    #[error("request.server_port must be greater than zero")]
    ZeroServerPort,

    #[error("request.scheme must not be empty")]
    EmptyScheme,

    #[error("request.path must start with '/', got {0:?}")]
    RelativePath(String),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &AdapterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let request = &config.request;

    if request.server_name.trim().is_empty() {
        errors.push(ValidationError::EmptyServerName);
    }
    if request.server_port == 0 {
        errors.push(ValidationError::ZeroServerPort);
    }
    if request.scheme.trim().is_empty() {
        errors.push(ValidationError::EmptyScheme);
    }
    if !request.path.starts_with('/') {
        errors.push(ValidationError::RelativePath(request.path.clone()));
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
