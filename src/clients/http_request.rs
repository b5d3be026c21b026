//! Request payload types for the Enom API SDK.
//!
//! This module provides the [`CommandRequest`] type and its builder for
//! assembling the parameters of a single reseller command.

use std::fmt;
use std::time::Duration;

use url::form_urlencoded;

use crate::clients::errors::ValidationError;

/// Parameter names the client injects into every request.
pub const RESERVED_PARAMETERS: [&str; 4] = ["command", "uid", "pw", "responsetype"];

/// Response format requested from the reseller interface.
pub const RESPONSE_TYPE: &str = "XML";

/// A scalar request parameter value.
///
/// Booleans are encoded as `1` / `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// Free text.
    Text(String),
    /// An integer.
    Int(i64),
    /// A flag.
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for ParamValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

/// The command-specific parameters of one reseller API call.
///
/// Parameters keep their insertion order and are stored with the name as
/// provided. The reserved names `command`, `uid`, `pw` and `responsetype`
/// are added by the client and may not appear here.
///
/// # Example
///
/// ```rust
/// use enom_api::clients::CommandRequest;
///
/// let request = CommandRequest::builder()
///     .param("sld", "example")
///     .param("tld", "com")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     request.query_string("Check", "resellid", "resellpw"),
///     "sld=example&tld=com&command=Check&uid=resellid&pw=resellpw&responsetype=XML"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandRequest {
    /// Parameters in insertion order.
    pub params: Vec<(String, ParamValue)>,
    /// Timeout for this call, overriding the configured default.
    pub timeout: Option<Duration>,
}

impl CommandRequest {
    /// Creates a new builder for constructing a `CommandRequest`.
    #[must_use]
    pub fn builder() -> CommandRequestBuilder {
        CommandRequestBuilder::default()
    }

    /// Returns the value of a parameter, matched exactly.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ReservedParameter`] if a parameter name
    /// matches one of [`RESERVED_PARAMETERS`], ignoring case.
    pub fn verify(&self) -> Result<(), ValidationError> {
        let reserved = self.params.iter().find(|(key, _)| {
            RESERVED_PARAMETERS
                .iter()
                .any(|r| key.eq_ignore_ascii_case(r))
        });

        match reserved {
            Some((key, _)) => Err(ValidationError::ReservedParameter { name: key.clone() }),
            None => Ok(()),
        }
    }

    /// Serializes the parameters plus the injected credentials into an
    /// `application/x-www-form-urlencoded` query string.
    #[must_use]
    pub fn query_string(&self, command: &str, uid: &str, pw: &str) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            serializer.append_pair(key, &value.to_string());
        }
        serializer
            .append_pair("command", command)
            .append_pair("uid", uid)
            .append_pair("pw", pw)
            .append_pair("responsetype", RESPONSE_TYPE);
        serializer.finish()
    }
}

/// Builder for constructing [`CommandRequest`] instances.
#[derive(Debug, Default)]
pub struct CommandRequestBuilder {
    params: Vec<(String, ParamValue)>,
    timeout: Option<Duration>,
}

impl CommandRequestBuilder {
    /// Sets a parameter. Setting an existing name replaces its value in place.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    /// Sets a parameter only when `value` is `Some`.
    #[must_use]
    pub fn param_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Sets a comma-joined list parameter, skipping it when the list is empty.
    #[must_use]
    pub fn list_param<S: AsRef<str>>(self, name: impl Into<String>, values: &[S]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        self.param(name, joined)
    }

    /// Sets the timeout for this call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`CommandRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the request fails validation.
    pub fn build(self) -> Result<CommandRequest, ValidationError> {
        let request = CommandRequest {
            params: self.params,
            timeout: self.timeout,
        };
        request.verify()?;
        Ok(request)
    }
}
