//! Domain related command groups and the name types they share.

mod registration;
mod tld;

pub use registration::{BatchCheck, NameSuggestionQuery, PurchaseRequest, Registration};
pub use tld::TldCatalog;

use std::fmt;

use crate::clients::ValidationError;

/// A domain name split into its second-level and top-level parts.
///
/// The split happens at the first dot, so multi-label TLDs stay intact.
///
/// # Example
///
/// ```rust
/// use enom_api::commands::DomainName;
///
/// let domain = DomainName::parse("example.co.uk").unwrap();
/// assert_eq!(domain.sld(), "example");
/// assert_eq!(domain.tld(), "co.uk");
///
/// assert!(DomainName::parse("example").is_err());
/// assert!(DomainName::parse("a.com,b.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainName {
    sld: String,
    tld: String,
}

impl DomainName {
    /// Parses a full domain name such as `example.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MultipleDomains`] if the input contains a
    /// comma or whitespace, and [`ValidationError::InvalidDomain`] if it has
    /// no dot or an empty label.
    pub fn parse(domain: &str) -> Result<Self, ValidationError> {
        let trimmed = domain.trim();
        if trimmed.contains(',') || trimmed.contains(char::is_whitespace) {
            return Err(ValidationError::MultipleDomains {
                domain: domain.to_string(),
            });
        }

        let invalid = || ValidationError::InvalidDomain {
            domain: domain.to_string(),
        };
        let (sld, tld) = trimmed.split_once('.').ok_or_else(invalid)?;
        if sld.is_empty() || tld.split('.').any(str::is_empty) {
            return Err(invalid());
        }

        Ok(Self {
            sld: sld.to_string(),
            tld: tld.to_string(),
        })
    }

    /// The second-level part, e.g. `example`.
    #[must_use]
    pub fn sld(&self) -> &str {
        &self.sld
    }

    /// The top-level part, e.g. `com` or `co.uk`.
    #[must_use]
    pub fn tld(&self) -> &str {
        &self.tld
    }
}

/// Validates a bare second-level name such as `example`, returning it
/// trimmed.
pub(crate) fn parse_sld(sld: &str) -> Result<&str, ValidationError> {
    let trimmed = sld.trim();
    if trimmed.contains(',') || trimmed.contains(char::is_whitespace) {
        return Err(ValidationError::MultipleDomains {
            domain: sld.to_string(),
        });
    }
    if trimmed.is_empty() || trimmed.contains('.') {
        return Err(ValidationError::InvalidDomain {
            domain: sld.to_string(),
        });
    }
    Ok(trimmed)
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.sld, self.tld)
    }
}

/// A top-level domain with any leading dots removed.
///
/// ```rust
/// use enom_api::commands::Tld;
///
/// assert_eq!(Tld::parse(" .co.uk").unwrap().as_ref(), "co.uk");
/// assert!(Tld::parse("..").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tld(String);

impl Tld {
    /// Normalizes a TLD, stripping leading spaces and dots.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTld`] if nothing is left.
    pub fn parse(tld: &str) -> Result<Self, ValidationError> {
        let tld = tld.trim_start_matches([' ', '.']).trim_end();
        if tld.is_empty() {
            return Err(ValidationError::EmptyTld);
        }
        Ok(Self(tld.to_string()))
    }
}

impl AsRef<str> for Tld {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_domain() {
        let domain = DomainName::parse("example.com").unwrap();
        assert_eq!(domain.sld(), "example");
        assert_eq!(domain.tld(), "com");
        assert_eq!(domain.to_string(), "example.com");
    }

    #[test]
    fn test_split_keeps_multi_label_tld() {
        let domain = DomainName::parse("  example.co.uk ").unwrap();
        assert_eq!(domain.sld(), "example");
        assert_eq!(domain.tld(), "co.uk");
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert!(matches!(
            DomainName::parse("example"),
            Err(ValidationError::InvalidDomain { domain }) if domain == "example"
        ));
    }

    #[test]
    fn test_rejects_empty_labels() {
        for input in ["", ".com", "example.", "example..com", "example.com."] {
            assert!(
                matches!(DomainName::parse(input), Err(ValidationError::InvalidDomain { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_lists() {
        for input in ["a.com,b.com", "a.com b.com", "a.com\tb.net"] {
            assert!(
                matches!(DomainName::parse(input), Err(ValidationError::MultipleDomains { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_sld_rules() {
        assert_eq!(parse_sld(" example "), Ok("example"));
        assert!(matches!(parse_sld(""), Err(ValidationError::InvalidDomain { .. })));
        assert!(matches!(parse_sld("example.com"), Err(ValidationError::InvalidDomain { .. })));
        assert!(matches!(parse_sld("a,b"), Err(ValidationError::MultipleDomains { .. })));
        assert!(matches!(parse_sld("a b"), Err(ValidationError::MultipleDomains { .. })));
    }

    #[test]
    fn test_tld_strips_leading_dots_and_spaces() {
        assert_eq!(Tld::parse(".de").unwrap().as_ref(), "de");
        assert_eq!(Tld::parse(" . .co.uk").unwrap().as_ref(), "co.uk");
        assert_eq!(Tld::parse("com").unwrap().as_ref(), "com");
    }

    #[test]
    fn test_tld_rejects_empty() {
        assert_eq!(Tld::parse(""), Err(ValidationError::EmptyTld));
        assert_eq!(Tld::parse(" . ."), Err(ValidationError::EmptyTld));
    }
}
