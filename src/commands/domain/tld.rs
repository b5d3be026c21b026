//! TLD catalog commands.

use crate::clients::{CommandExecutor, CommandRequest, EnomError};
use crate::xml::XmlElement;

/// The reseller's TLD catalog.
pub struct TldCatalog<'a, E: ?Sized> {
    executor: &'a E,
}

impl<'a, E: CommandExecutor + ?Sized> TldCatalog<'a, E> {
    /// Creates the group over `executor`.
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Returns the `tldlist` element of `GetTLDList`.
    ///
    /// # Errors
    ///
    /// Returns [`EnomError::Parse`] if the element is missing, otherwise
    /// any [`EnomError`] from the pipeline.
    pub fn get_tld_list(&self) -> Result<XmlElement, EnomError> {
        self.executor
            .execute("GetTLDList", CommandRequest::default())?
            .into_child("tldlist")
    }
}
