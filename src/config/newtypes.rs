//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Enom account login id (the `uid` request parameter).
///
/// # Example
///
/// ```rust
/// use enom_api::AccountId;
///
/// let id = AccountId::new("resellid").unwrap();
/// assert_eq!(id.as_ref(), "resellid");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new validated account id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccountId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyAccountId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Enom account password (the `pw` request parameter).
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `AccountPassword(*****)`.
///
/// # Example
///
/// ```rust
/// use enom_api::AccountPassword;
///
/// let pw = AccountPassword::new("resellpw").unwrap();
/// assert_eq!(format!("{:?}", pw), "AccountPassword(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccountPassword(String);

impl AccountPassword {
    /// Creates a new validated account password.
    ///
    /// Unlike [`AccountId`], the value is not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccountPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyAccountPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for AccountPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccountPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccountPassword(*****)")
    }
}

/// A validated reseller endpoint URL.
///
/// The URL must use the `http` or `https` scheme and name a host. Trailing
/// slashes are removed so the request path can be appended directly.
///
/// # Example
///
/// ```rust
/// use enom_api::ResellerUrl;
///
/// let url = ResellerUrl::new("https://resellertest.enom.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://resellertest.enom.com");
/// assert_eq!(url.host_name(), "resellertest.enom.com");
/// assert_eq!(ResellerUrl::live().as_ref(), "https://reseller.enom.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResellerUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl ResellerUrl {
    /// Production reseller endpoint.
    pub const LIVE: &'static str = "https://reseller.enom.com";
    /// Reseller test environment endpoint.
    pub const TEST: &'static str = "https://resellertest.enom.com";

    /// Creates a new validated reseller URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidResellerUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidResellerUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        // A query or fragment would swallow the request path.
        if url[host_start..].contains(['?', '#']) || host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// The production endpoint, `https://reseller.enom.com`.
    #[must_use]
    pub fn live() -> Self {
        Self::from_static(Self::LIVE)
    }

    /// The test endpoint, `https://resellertest.enom.com`.
    #[must_use]
    pub fn test() -> Self {
        Self::from_static(Self::TEST)
    }

    fn from_static(url: &'static str) -> Self {
        let host_start = url.find("://").map_or(0, |i| i + 3);
        Self {
            url: url.to_string(),
            host_start,
            host_end: url.len(),
        }
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ResellerUrl {
    fn default() -> Self {
        Self::live()
    }
}

impl AsRef<str> for ResellerUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ResellerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for ResellerUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for ResellerUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
