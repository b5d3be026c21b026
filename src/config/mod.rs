//! Configuration types for the Enom API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with the Enom reseller interface.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`EnomConfig`]: The main configuration struct holding all SDK settings
//! - [`EnomConfigBuilder`]: A builder for constructing [`EnomConfig`] instances
//! - [`AccountId`]: A validated reseller login id
//! - [`AccountPassword`]: A validated reseller password with masked debug output
//! - [`ResellerUrl`]: A validated reseller endpoint URL
//!
//! # Example
//!
//! ```rust
//! use enom_api::{EnomConfig, AccountId, AccountPassword, ResellerUrl};
//!
//! let config = EnomConfig::builder()
//!     .account_id(AccountId::new("resellid").unwrap())
//!     .account_password(AccountPassword::new("resellpw").unwrap())
//!     .reseller_url(ResellerUrl::test())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccountId, AccountPassword, ResellerUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Enom API SDK.
///
/// Holds the reseller endpoint and account credentials. A configuration is
/// immutable once built; create a new one to talk to a different account.
///
/// # Thread Safety
///
/// `EnomConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use enom_api::{EnomConfig, AccountId, AccountPassword};
/// use std::time::Duration;
///
/// let config = EnomConfig::builder()
///     .account_id(AccountId::new("resellid").unwrap())
///     .account_password(AccountPassword::new("resellpw").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.reseller_url().as_ref(), "https://reseller.enom.com");
/// ```
#[derive(Clone, Debug)]
pub struct EnomConfig {
    reseller_url: ResellerUrl,
    account_id: AccountId,
    account_password: AccountPassword,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl EnomConfig {
    /// Creates a new builder for constructing an `EnomConfig`.
    #[must_use]
    pub fn builder() -> EnomConfigBuilder {
        EnomConfigBuilder::new()
    }

    /// Returns the reseller endpoint.
    #[must_use]
    pub const fn reseller_url(&self) -> &ResellerUrl {
        &self.reseller_url
    }

    /// Returns the account login id.
    #[must_use]
    pub const fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Returns the account password.
    #[must_use]
    pub const fn account_password(&self) -> &AccountPassword {
        &self.account_password
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the default request timeout, if configured.
    ///
    /// Without one, the transport's own default applies.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify EnomConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EnomConfig>();
};

/// Builder for constructing [`EnomConfig`] instances.
///
/// Required fields are `account_id` and `account_password`.
///
/// # Defaults
///
/// - `reseller_url`: [`ResellerUrl::live`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None`
#[derive(Debug, Default)]
pub struct EnomConfigBuilder {
    reseller_url: Option<ResellerUrl>,
    account_id: Option<AccountId>,
    account_password: Option<AccountPassword>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl EnomConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reseller endpoint.
    #[must_use]
    pub fn reseller_url(mut self, url: ResellerUrl) -> Self {
        self.reseller_url = Some(url);
        self
    }

    /// Sets the account login id (required).
    #[must_use]
    pub fn account_id(mut self, id: AccountId) -> Self {
        self.account_id = Some(id);
        self
    }

    /// Sets the account password (required).
    #[must_use]
    pub fn account_password(mut self, password: AccountPassword) -> Self {
        self.account_password = Some(password);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the default timeout applied to every request.
    ///
    /// Individual requests may override it with
    /// [`CommandRequest::timeout`](crate::clients::CommandRequest::timeout).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`EnomConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account_id` or
    /// `account_password` are not set.
    pub fn build(self) -> Result<EnomConfig, ConfigError> {
        let account_id = self.account_id.ok_or(ConfigError::MissingRequiredField {
            field: "account_id",
        })?;
        let account_password = self
            .account_password
            .ok_or(ConfigError::MissingRequiredField {
                field: "account_password",
            })?;

        Ok(EnomConfig {
            reseller_url: self.reseller_url.unwrap_or_default(),
            account_id,
            account_password,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
