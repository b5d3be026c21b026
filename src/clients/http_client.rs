//! HTTP client for Enom reseller API communication.
//!
//! This module provides the [`HttpClient`] type, the single request path every
//! command goes through, and the [`CommandExecutor`] trait that command groups
//! depend on.

use std::time::Instant;

use crate::clients::errors::{EnomError, TransportError, ValidationError};
use crate::clients::http_request::CommandRequest;
use crate::clients::http_response::{
    read_err_count, read_errors, redact_password, EnomResponse, UNKNOWN_API_ERROR,
};
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::commands::{Account, Pricing, Registration, TldCatalog, Trademark};
use crate::config::EnomConfig;
use crate::xml::XmlElement;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request path of the reseller interface, relative to the reseller URL.
pub const INTERFACE_PATH: &str = "/interface.asp";

/// Anything that can run a named reseller command.
///
/// Command groups such as [`Account`] are written against this trait, so
/// they can be driven by [`HttpClient`] or by a test double.
pub trait CommandExecutor {
    /// Runs `command` with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EnomError`] on validation, transport, parse or API failure.
    fn execute(&self, command: &str, request: CommandRequest) -> Result<EnomResponse, EnomError>;
}

/// Blocking client for the Enom reseller interface.
///
/// The client handles:
/// - URL construction from the configured reseller URL
/// - Injection of `command`, `uid`, `pw` and `responsetype=XML`
/// - A fixed User-Agent header
/// - XML parsing and `ErrCount` error detection
///
/// It holds only immutable configuration. Each call returns a self-contained
/// [`EnomResponse`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` whenever its transport is.
///
/// # Example
///
/// ```rust,no_run
/// use enom_api::{AccountId, AccountPassword, EnomConfig, HttpClient, ResellerUrl};
///
/// let config = EnomConfig::builder()
///     .account_id(AccountId::new("resellid").unwrap())
///     .account_password(AccountPassword::new("resellpw").unwrap())
///     .reseller_url(ResellerUrl::test())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(config)?;
/// let balance = client.account().get_balance()?;
/// println!("{:?}", balance.text_at("AvailableBalance"));
/// # Ok::<(), enom_api::EnomError>(())
/// ```
#[derive(Debug)]
pub struct HttpClient<T: Transport = ReqwestTransport> {
    /// The transport performing the actual GET.
    transport: T,
    /// Endpoint and credentials.
    config: EnomConfig,
    /// User-Agent sent with every request.
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient<ReqwestTransport> {
    /// Creates a client backed by [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`EnomError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: EnomConfig) -> Result<Self, EnomError> {
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }
}

impl<T: Transport> HttpClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: EnomConfig, transport: T) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Enom API Rust v{SDK_VERSION}");

        Self {
            transport,
            config,
            user_agent,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &EnomConfig {
        &self.config
    }

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the full request URL for `command`.
    #[must_use]
    pub fn build_url(&self, command: &str, request: &CommandRequest) -> String {
        let query = request.query_string(
            command,
            self.config.account_id().as_ref(),
            self.config.account_password().as_ref(),
        );
        format!("{}{INTERFACE_PATH}?{query}", self.config.reseller_url())
    }

    /// Sends one command to the reseller interface.
    ///
    /// Exactly one HTTP round trip is made unless validation fails first.
    /// There are no retries.
    ///
    /// # Errors
    ///
    /// Returns [`EnomError`] if:
    /// - `command` is empty or `request` sets a reserved parameter (`Validation`)
    /// - The GET fails (`Transport`)
    /// - `ErrCount` is greater than zero (`Api`), whatever the HTTP status
    /// - Otherwise the status is not 2xx (`Transport`)
    /// - The body is not a well-formed XML document (`Parse`)
    pub fn execute(&self, command: &str, request: CommandRequest) -> Result<EnomResponse, EnomError> {
        let command = command.trim();
        if command.is_empty() {
            return Err(ValidationError::EmptyCommand.into());
        }
        request.verify()?;

        let request_url = self.build_url(command, &request);
        let timeout = request.timeout.or_else(|| self.config.timeout());

        tracing::debug!(
            "Sending Enom {} request to {}",
            command,
            redact_password(&request_url)
        );

        let started = Instant::now();
        let raw = self.transport.get(&request_url, &self.user_agent, timeout)?;
        let elapsed = started.elapsed();

        tracing::debug!(
            "Enom {} request completed with status {} in {:?}",
            command,
            raw.status,
            elapsed
        );

        // An error document wins over the status code it was served with.
        let parsed = XmlElement::parse(&raw.body);
        if let Some(error) = parsed.as_ref().ok().and_then(|doc| api_error(command, doc)) {
            return Err(error);
        }

        if !raw.is_success() {
            return Err(TransportError::Status {
                code: raw.status,
                body: raw.body,
            }
            .into());
        }

        let document = match parsed {
            Ok(document) => document,
            Err(e) => {
                return Err(EnomError::Parse {
                    message: e.message,
                    raw_body: raw.body,
                })
            }
        };

        Ok(EnomResponse {
            code: raw.status,
            headers: raw.headers,
            raw_body: raw.body,
            document,
            request_url,
            effective_url: raw.effective_url,
            elapsed,
        })
    }

    /// Account related commands.
    #[must_use]
    pub fn account(&self) -> Account<'_, Self> {
        Account::new(self)
    }

    /// Domain registration commands.
    #[must_use]
    pub fn registration(&self) -> Registration<'_, Self> {
        Registration::new(self)
    }

    /// TLD catalog commands.
    #[must_use]
    pub fn tlds(&self) -> TldCatalog<'_, Self> {
        TldCatalog::new(self)
    }

    /// Pricing commands.
    #[must_use]
    pub fn pricing(&self) -> Pricing<'_, Self> {
        Pricing::new(self)
    }

    /// Trademark Clearinghouse commands.
    #[must_use]
    pub fn trademark(&self) -> Trademark<'_, Self> {
        Trademark::new(self)
    }
}

/// Builds the `Api` error for a document reporting `ErrCount > 0`.
fn api_error(command: &str, document: &XmlElement) -> Option<EnomError> {
    let err_count = read_err_count(document);
    if err_count == 0 {
        return None;
    }
    let message = document
        .text_at("errors/Err1")
        .map_or_else(|| UNKNOWN_API_ERROR.to_string(), str::to_string);
    tracing::warn!(
        "Enom {} command reported {} error(s): {}",
        command,
        err_count,
        message
    );
    Some(EnomError::Api {
        message,
        errors: read_errors(document),
    })
}

impl<T: Transport> CommandExecutor for HttpClient<T> {
    fn execute(&self, command: &str, request: CommandRequest) -> Result<EnomResponse, EnomError> {
        Self::execute(self, command, request)
    }
}
