//! # Enom API Rust SDK
//!
//! A Rust SDK for the Enom reseller API, providing type-safe configuration,
//! a single blocking request pipeline and typed command groups.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`EnomConfig`] and [`EnomConfigBuilder`]
//! - Validated newtypes for reseller credentials and the reseller URL
//! - A blocking [`HttpClient`] that injects credentials, sends one GET per
//!   command and parses the XML reply
//! - Detection of API-level errors reported through `ErrCount`
//! - Command groups for account, registration, TLD, pricing and trademark
//!   commands via [`commands`]
//!
//! ## Quick Start
//!
//! ```rust
//! use enom_api::{AccountId, AccountPassword, EnomConfig, ResellerUrl};
//!
//! let config = EnomConfig::builder()
//!     .account_id(AccountId::new("resellid").unwrap())
//!     .account_password(AccountPassword::new("resellpw").unwrap())
//!     .reseller_url(ResellerUrl::test())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.reseller_url().as_ref(), "https://resellertest.enom.com");
//! ```
//!
//! ## Running Commands
//!
//! ```rust,ignore
//! use enom_api::{DomainName, EnomError, HttpClient};
//!
//! let client = HttpClient::new(config)?;
//!
//! let domain = DomainName::parse("example.com")?;
//! match client.registration().check(&domain) {
//!     Ok(response) => println!("RRPCode: {:?}", response.text_at("RRPCode")),
//!     Err(EnomError::Api { message, .. }) => eprintln!("Enom said: {message}"),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```
//!
//! Commands without a typed wrapper go through [`HttpClient::execute`]
//! directly with a [`CommandRequest`].
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes and domain names validate on construction
//! - **One round trip per call**: no retries, no caching, no shared state
//! - **Thread-safe**: all types are `Send + Sync`

pub mod clients;
pub mod commands;
pub mod config;
pub mod error;
pub mod xml;

// Re-export public types at crate root for convenience
pub use config::{AccountId, AccountPassword, EnomConfig, EnomConfigBuilder, ResellerUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    CommandExecutor, CommandRequest, CommandRequestBuilder, EnomError, EnomResponse, HttpClient,
    ParamValue, RawResponse, ReqwestTransport, Transport, TransportError, ValidationError,
};

// Re-export command types
pub use commands::{
    Account, BatchCheck, DomainName, NameSuggestionQuery, OrderListQuery, Pricing,
    PurchaseRequest, Registration, Tld, TldCatalog, Trademark,
};

pub use xml::{XmlElement, XmlError};
