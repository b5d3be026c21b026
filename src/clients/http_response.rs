//! HTTP response types for the Enom API SDK.
//!
//! This module provides the [`EnomResponse`] type: everything known about one
//! completed reseller API call, including the parsed XML document.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use url::form_urlencoded;

use crate::clients::errors::EnomError;
use crate::xml::XmlElement;

/// Message used when `ErrCount` is positive but no `Err1` is present.
pub const UNKNOWN_API_ERROR: &str = "Unknown Enom API error";

/// A successful response from the reseller interface.
///
/// Each call produces its own `EnomResponse`; nothing is shared between
/// calls.
///
/// `Debug` output masks the account password in both URLs.
#[derive(Clone)]
pub struct EnomResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The body exactly as received.
    pub raw_body: String,
    /// The parsed document root.
    pub document: XmlElement,
    /// The URL that was requested, credentials included.
    pub request_url: String,
    /// The final URL after any redirects.
    pub effective_url: String,
    /// Wall-clock duration of the HTTP round trip.
    pub elapsed: Duration,
}

impl fmt::Debug for EnomResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnomResponse")
            .field("code", &self.code)
            .field("headers", &self.headers)
            .field("raw_body", &self.raw_body)
            .field("document", &self.document)
            .field("request_url", &redact_password(&self.request_url))
            .field("effective_url", &redact_password(&self.effective_url))
            .field("elapsed", &self.elapsed)
            .finish()
    }
}

impl EnomResponse {
    /// Returns the element at `path` below the document root.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&XmlElement> {
        self.document.get(path)
    }

    /// Returns the text of the element at `path` below the document root.
    #[must_use]
    pub fn text_at(&self, path: &str) -> Option<&str> {
        self.document.text_at(path)
    }

    /// The command echoed back by the interface (`Command`), if present.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.text_at("Command")
    }

    /// Whether the interface marked the response complete (`Done`).
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.text_at("Done")
            .is_some_and(|done| done.eq_ignore_ascii_case("true"))
    }

    /// The request URL with the account password masked, for logging.
    #[must_use]
    pub fn redacted_request_url(&self) -> String {
        redact_password(&self.request_url)
    }

    /// Consumes the response and returns a clone of the named child of the
    /// document root.
    ///
    /// # Errors
    ///
    /// Returns [`EnomError::Parse`] if the element is absent. The raw body
    /// is kept on the error.
    pub fn into_child(self, name: &str) -> Result<XmlElement, EnomError> {
        match self.document.child(name) {
            Some(element) => Ok(element.clone()),
            None => Err(EnomError::Parse {
                message: format!("missing <{name}> element"),
                raw_body: self.raw_body,
            }),
        }
    }
}

/// Reads `ErrCount` from the document root.
///
/// A missing element counts as zero. So does an unreadable one, with a
/// warning.
pub(crate) fn read_err_count(document: &XmlElement) -> u32 {
    let Some(element) = document.child("ErrCount") else {
        return 0;
    };
    element.text().trim().parse().unwrap_or_else(|_| {
        tracing::warn!(
            "Unreadable ErrCount '{}' in Enom response, treating it as 0",
            element.text()
        );
        0
    })
}

/// Collects the text of every `errors/ErrN` element, ordered by `N`.
pub(crate) fn read_errors(document: &XmlElement) -> Vec<String> {
    let Some(errors) = document.child("errors") else {
        return Vec::new();
    };

    let mut numbered: Vec<(u32, &str)> = errors
        .elements()
        .iter()
        .filter_map(|element| {
            let index = element.name().strip_prefix("Err")?.parse().ok()?;
            Some((index, element.text()))
        })
        .collect();
    numbered.sort_by_key(|(index, _)| *index);
    numbered.into_iter().map(|(_, text)| text.to_string()).collect()
}

/// Replaces the value of the `pw` query parameter with `*****`.
pub(crate) fn redact_password(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form_urlencoded::parse(query.as_bytes()).map(|(key, value)| {
            if key == "pw" {
                (key, "*****".into())
            } else {
                (key, value)
            }
        }))
        .finish();
    format!("{base}?{query}")
}
