//! Pricing engine commands.

use crate::clients::{CommandExecutor, CommandRequest, EnomError, EnomResponse};
use crate::commands::Tld;

/// Reseller and retail price lookups.
///
/// `product_type` is the interface's numeric product code, e.g. `10` for a
/// domain registration.
pub struct Pricing<'a, E: ?Sized> {
    executor: &'a E,
}

impl<'a, E: CommandExecutor + ?Sized> Pricing<'a, E> {
    /// Creates the group over `executor`.
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Runs `PE_GetProductPrice` for the reseller's cost.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn get_product_price(
        &self,
        product_type: u32,
        tld: &Tld,
    ) -> Result<EnomResponse, EnomError> {
        let request = CommandRequest::builder()
            .param("ProductType", product_type)
            .param("tld", tld.as_ref())
            .build()?;
        self.executor.execute("PE_GetProductPrice", request)
    }

    /// Runs `PE_GetRetailPrice` for the price charged to customers.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn get_retail_price(
        &self,
        product_type: u32,
        tld: &Tld,
        years: u32,
    ) -> Result<EnomResponse, EnomError> {
        let request = CommandRequest::builder()
            .param("ProductType", product_type)
            .param("tld", tld.as_ref())
            .param("Years", years)
            .build()?;
        self.executor.execute("PE_GetRetailPrice", request)
    }
}
