//! Error types for the Enom API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! Errors raised while talking to the reseller API live in
//! [`crate::clients::EnomError`].
//!
//! # Example
//!
//! ```rust
//! use enom_api::{AccountId, ConfigError};
//!
//! let result = AccountId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccountId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account login id cannot be empty.
    #[error("Account id cannot be empty. Please provide your Enom reseller login id.")]
    EmptyAccountId,

    /// Account password cannot be empty.
    #[error("Account password cannot be empty. Please provide your Enom reseller password.")]
    EmptyAccountPassword,

    /// Reseller URL is invalid.
    #[error("Invalid reseller URL '{url}'. Please provide an http(s) URL with a host (e.g., 'https://reseller.enom.com').")]
    InvalidResellerUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_account_id_error_message() {
        let error = ConfigError::EmptyAccountId;
        let message = error.to_string();
        assert!(message.contains("Account id cannot be empty"));
        assert!(message.contains("reseller login id"));
    }

    #[test]
    fn test_invalid_reseller_url_error_message() {
        let error = ConfigError::InvalidResellerUrl {
            url: "ftp://nowhere".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nowhere"));
        assert!(message.contains("https://reseller.enom.com"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "account_id" };
        let message = error.to_string();
        assert!(message.contains("account_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccountPassword;
        let _: &dyn std::error::Error = &error;
    }
}
