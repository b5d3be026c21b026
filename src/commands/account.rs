//! Reseller account commands.

use chrono::NaiveDate;

use crate::clients::{CommandExecutor, CommandRequest, EnomError, EnomResponse};

/// Date format the interface expects for order list bounds.
const ORDER_DATE_FORMAT: &str = "%m/%d/%Y";

/// Filters for [`Account::get_order_list`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderListQuery {
    /// 1-based index of the first order to return.
    pub start: u32,
    /// Earliest order date, inclusive.
    pub begin: Option<NaiveDate>,
    /// Latest order date, inclusive.
    pub end: Option<NaiveDate>,
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            start: 1,
            begin: None,
            end: None,
        }
    }
}

/// Commands about the reseller account itself.
pub struct Account<'a, E: ?Sized> {
    executor: &'a E,
}

impl<'a, E: CommandExecutor + ?Sized> Account<'a, E> {
    /// Creates the group over `executor`.
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Runs `GetAccountInfo`.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn get_account_info(&self) -> Result<EnomResponse, EnomError> {
        self.executor
            .execute("GetAccountInfo", CommandRequest::default())
    }

    /// Runs `GetServiceContact`.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn get_service_contact(&self) -> Result<EnomResponse, EnomError> {
        self.executor
            .execute("GetServiceContact", CommandRequest::default())
    }

    /// Runs `GetOrderList`, with dates sent as `MM/DD/YYYY`.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn get_order_list(&self, query: &OrderListQuery) -> Result<EnomResponse, EnomError> {
        let format = |date: NaiveDate| date.format(ORDER_DATE_FORMAT).to_string();
        let request = CommandRequest::builder()
            .param("start", query.start)
            .param_opt("begindate", query.begin.map(format))
            .param_opt("enddate", query.end.map(format))
            .build()?;
        self.executor.execute("GetOrderList", request)
    }

    /// Runs `GetBalance`.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn get_balance(&self) -> Result<EnomResponse, EnomError> {
        self.executor.execute("GetBalance", CommandRequest::default())
    }

    /// Runs `GetConfirmationSettings` and returns the whole response.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn get_confirmation_settings(&self) -> Result<EnomResponse, EnomError> {
        self.executor
            .execute("GetConfirmationSettings", CommandRequest::default())
    }

    /// Runs `GetAllDomains`.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn get_all_domains(&self) -> Result<EnomResponse, EnomError> {
        self.executor
            .execute("GetAllDomains", CommandRequest::default())
    }
}
