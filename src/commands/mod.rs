//! Typed wrappers around individual reseller commands.
//!
//! Each group borrows anything implementing [`CommandExecutor`] and turns
//! method calls into [`CommandRequest`]s. The groups hold no state of their
//! own, so they are cheap to create per call:
//!
//! ```rust,ignore
//! use enom_api::commands::DomainName;
//!
//! let domain = DomainName::parse("example.com")?;
//! let response = client.registration().check(&domain)?;
//! println!("{:?}", response.text_at("RRPCode"));
//! ```
//!
//! [`CommandExecutor`]: crate::clients::CommandExecutor
//! [`CommandRequest`]: crate::clients::CommandRequest

mod account;
mod domain;
mod pricing;
mod trademark;

#[cfg(test)]
pub(crate) mod test_support;

pub use account::{Account, OrderListQuery};
pub use domain::{
    BatchCheck, DomainName, NameSuggestionQuery, PurchaseRequest, Registration, Tld, TldCatalog,
};
pub use pricing::Pricing;
pub use trademark::Trademark;
