//! Trademark Clearinghouse (TMCH) commands.

use crate::clients::{CommandExecutor, CommandRequest, EnomError, EnomResponse};
use crate::commands::DomainName;

/// Trademark claim lookups for a domain.
pub struct Trademark<'a, E: ?Sized> {
    executor: &'a E,
}

impl<'a, E: CommandExecutor + ?Sized> Trademark<'a, E> {
    /// Creates the group over `executor`.
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Runs `TM_Check` to see whether the name has trademark claims.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn check(&self, domain: &DomainName) -> Result<EnomResponse, EnomError> {
        self.executor.execute("TM_Check", domain_request(domain)?)
    }

    /// Runs `TM_GetNotice` to fetch the claim notice for the name.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn get_notice(&self, domain: &DomainName) -> Result<EnomResponse, EnomError> {
        self.executor.execute("TM_GetNotice", domain_request(domain)?)
    }
}

fn domain_request(domain: &DomainName) -> Result<CommandRequest, EnomError> {
    Ok(CommandRequest::builder()
        .param("sld", domain.sld())
        .param("tld", domain.tld())
        .build()?)
}
