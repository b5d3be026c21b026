//! Error types for Enom API calls.
//!
//! Every call through [`HttpClient`](crate::clients::HttpClient) either
//! succeeds with a parsed response or fails with exactly one [`EnomError`]:
//!
//! - [`EnomError::Validation`]: bad input caught locally, no request was sent
//! - [`EnomError::Transport`]: the HTTP round trip itself failed
//! - [`EnomError::Parse`]: the body was not the XML document we expected
//! - [`EnomError::Api`]: the reseller interface reported one or more errors
//!
//! # Example
//!
//! ```rust,ignore
//! use enom_api::clients::EnomError;
//! use enom_api::commands::DomainName;
//!
//! let domain = DomainName::parse("example.com")?;
//! match client.registration().check(&domain) {
//!     Ok(response) => println!("RRPCode {:?}", response.text_at("RRPCode")),
//!     Err(EnomError::Api { message, .. }) => println!("Enom said: {message}"),
//!     Err(EnomError::Validation(e)) => println!("Not sent: {e}"),
//!     Err(EnomError::Transport(e)) => println!("Network trouble: {e}"),
//!     Err(EnomError::Parse { message, raw_body }) => {
//!         println!("Unreadable response ({message}): {raw_body}");
//!     }
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Input rejected before any request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The command name was empty.
    #[error("Command name cannot be empty.")]
    EmptyCommand,

    /// The payload tried to set a parameter the client injects itself.
    #[error("Parameter '{name}' is reserved and set by the client.")]
    ReservedParameter {
        /// The offending parameter name, as supplied.
        name: String,
    },

    /// A domain name could not be split into second-level and top-level parts.
    #[error("Invalid domain name '{domain}'. Expected a name like 'example.com'.")]
    InvalidDomain {
        /// The domain that was provided.
        domain: String,
    },

    /// A list of domains was given where a single domain is required.
    #[error("Multiple domain name checks are not allowed: '{domain}'.")]
    MultipleDomains {
        /// The input that looked like a list.
        domain: String,
    },

    /// A TLD was empty after stripping leading dots.
    #[error("TLD cannot be empty.")]
    EmptyTld,

    /// A list argument that must contain at least one entry was empty.
    #[error("The {field} list cannot be empty.")]
    EmptyList {
        /// The name of the list argument.
        field: &'static str,
    },

    /// A name suggestion search term was empty.
    #[error("Search term cannot be empty.")]
    EmptySearchTerm,
}

/// Failure of the HTTP round trip itself.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or protocol failure reported by reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {after:?}.")]
    Timeout {
        /// The timeout that elapsed.
        after: Duration,
    },

    /// Low-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server answered with a non-2xx status.
    #[error("Unexpected HTTP status {code}.")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The raw response body.
        body: String,
    },
}

/// Unified error type for Enom API calls.
#[derive(Debug, Error)]
pub enum EnomError {
    /// Input was rejected locally; nothing left the machine.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP round trip failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be parsed, or lacked an expected element.
    #[error("Could not parse Enom response: {message}")]
    Parse {
        /// What went wrong.
        message: String,
        /// The body exactly as received.
        raw_body: String,
    },

    /// The reseller interface reported a failure (`ErrCount > 0`).
    #[error("{message}")]
    Api {
        /// Text of the first reported error (`errors/Err1`).
        message: String,
        /// Every reported error, `Err1` first.
        errors: Vec<String>,
    },
}

impl EnomError {
    /// Returns `true` if the error was raised before any request was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the response body retained for diagnostics, if any.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Parse { raw_body, .. } => Some(raw_body),
            Self::Transport(TransportError::Status { body, .. }) => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_vendor_message() {
        let error = EnomError::Api {
            message: "Invalid domain".to_string(),
            errors: vec!["Invalid domain".to_string()],
        };
        assert_eq!(error.to_string(), "Invalid domain");
        assert!(!error.is_local());
    }

    #[test]
    fn test_validation_error_is_local() {
        let error: EnomError = ValidationError::EmptyTld.into();
        assert!(error.is_local());
        assert_eq!(error.to_string(), "TLD cannot be empty.");
    }

    #[test]
    fn test_parse_error_keeps_raw_body() {
        let error = EnomError::Parse {
            message: "document has no root element".to_string(),
            raw_body: "not xml".to_string(),
        };
        assert_eq!(error.raw_body(), Some("not xml"));
        assert!(error.to_string().contains("no root element"));
    }

    #[test]
    fn test_status_error_keeps_raw_body() {
        let error: EnomError = TransportError::Status {
            code: 503,
            body: "maintenance".to_string(),
        }
        .into();
        assert_eq!(error.raw_body(), Some("maintenance"));
        assert_eq!(error.to_string(), "Unexpected HTTP status 503.");
    }

    #[test]
    fn test_reserved_parameter_message() {
        let error = ValidationError::ReservedParameter {
            name: "UID".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Parameter 'UID' is reserved and set by the client."
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &ValidationError::EmptyCommand;
        let _: &dyn std::error::Error = &TransportError::Timeout {
            after: Duration::from_secs(1),
        };
        let _: &dyn std::error::Error = &EnomError::from(ValidationError::EmptySearchTerm);
    }
}
