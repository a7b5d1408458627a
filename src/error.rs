//! Error types for the Scope Builder MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when interacting with the JobNimbus API.
#[derive(Error, Debug)]
pub enum JobNimbusApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// No API key was configured for the client
    #[error("JobNimbus API key not configured")]
    MissingCredential,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the service layer to tool handlers.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Bad or empty input from the caller
    #[error("Validation error: {0}")]
    Validation(String),

    /// The server is missing configuration required for the operation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An external call failed
    #[error("Upstream error: {0}")]
    Upstream(#[from] JobNimbusApiError),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

/// Convenience type alias for Results with JobNimbusApiError
pub type ApiResult<T> = Result<T, JobNimbusApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
