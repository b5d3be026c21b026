//! HTTP client types for Enom reseller API communication.
//!
//! This module provides the request pipeline every command goes through:
//! parameters are collected into a [`CommandRequest`], the client injects
//! the credentials and sends one blocking GET to `/interface.asp`, and the
//! XML reply comes back as an [`EnomResponse`] or an [`EnomError`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The blocking client for API communication
//! - [`CommandExecutor`]: The trait command groups are written against
//! - [`CommandRequest`]: The parameters of one command
//! - [`EnomResponse`]: A parsed response from the API
//! - [`Transport`]: The seam performing the actual GET, with
//!   [`ReqwestTransport`] as the default implementation
//! - [`EnomError`]: The unified error type
//!
//! # Example
//!
//! ```rust,ignore
//! use enom_api::clients::{CommandRequest, HttpClient};
//!
//! let client = HttpClient::new(config)?;
//!
//! let request = CommandRequest::builder()
//!     .param("sld", "example")
//!     .param("tld", "com")
//!     .build()?;
//!
//! let response = client.execute("Check", request)?;
//! println!("{:?}", response.text_at("RRPText"));
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call makes exactly one HTTP round trip, and failures
//! are returned to the caller as they happen.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{EnomError, TransportError, ValidationError};
pub use http_client::{CommandExecutor, HttpClient, INTERFACE_PATH, SDK_VERSION};
pub use http_request::{
    CommandRequest, CommandRequestBuilder, ParamValue, RESERVED_PARAMETERS, RESPONSE_TYPE,
};
pub use http_response::{EnomResponse, UNKNOWN_API_ERROR};
pub use transport::{RawResponse, ReqwestTransport, Transport};
