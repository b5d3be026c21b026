//! Domain availability, suggestion and registration commands.

use super::{parse_sld, DomainName, Tld};
use crate::clients::{
    CommandExecutor, CommandRequest, EnomError, EnomResponse, ValidationError,
};
use crate::xml::XmlElement;

/// The two shapes a multi-domain `Check` can take.
///
/// The interface refuses a request carrying both a domain list and a TLD
/// list, so the choice is made here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchCheck {
    /// Full domain names, sent as `DomainList`.
    Domains(Vec<DomainName>),
    /// One second-level name checked against several TLDs, sent as `SLD`
    /// and `TLDList`.
    TldsForSld {
        /// The second-level name, e.g. `example`.
        sld: String,
        /// The TLDs to try it with.
        tlds: Vec<Tld>,
    },
}

/// Parameters for [`Registration::get_name_suggestions`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameSuggestionQuery {
    /// The term suggestions are generated from.
    pub search_term: String,
    /// Upper bound on the number of suggestions.
    pub max_results: u32,
    /// Spin algorithm selector.
    pub spin_type: u32,
    /// TLDs to include in addition to the defaults.
    pub include_tlds: Vec<String>,
    /// Restrict suggestions to these TLDs.
    pub only_tlds: Vec<String>,
    /// TLDs to leave out.
    pub exclude_tlds: Vec<String>,
    /// Allow adult names.
    pub adult: bool,
    /// Allow premium names.
    pub premium: bool,
}

impl NameSuggestionQuery {
    /// Creates a query with the interface defaults: 50 results, spin type
    /// 0, premium names on and adult names off.
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            max_results: 50,
            spin_type: 0,
            include_tlds: Vec::new(),
            only_tlds: Vec::new(),
            exclude_tlds: Vec::new(),
            adult: false,
            premium: true,
        }
    }
}

/// A real-time domain purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseRequest {
    /// The domain to register.
    pub domain: DomainName,
    /// Registration period in years.
    pub years: u32,
    /// Renew automatically at expiry.
    pub auto_renew: bool,
    /// Custom name servers. When empty the registrar defaults are used.
    pub nameservers: Vec<String>,
    /// Leave the domain unlocked at the registrar.
    pub unlock: bool,
    /// Optional domain password.
    pub password: Option<String>,
}

impl PurchaseRequest {
    /// A one year, locked, non-renewing purchase on default name servers.
    #[must_use]
    pub fn new(domain: DomainName) -> Self {
        Self {
            domain,
            years: 1,
            auto_renew: false,
            nameservers: Vec::new(),
            unlock: false,
            password: None,
        }
    }
}

fn bool_flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Domain registration commands.
pub struct Registration<'a, E: ?Sized> {
    executor: &'a E,
}

impl<'a, E: CommandExecutor + ?Sized> Registration<'a, E> {
    /// Creates the group over `executor`.
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Checks whether a single domain is available.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn check(&self, domain: &DomainName) -> Result<EnomResponse, EnomError> {
        let request = CommandRequest::builder()
            .param("sld", domain.sld())
            .param("tld", domain.tld())
            .build()?;
        self.executor.execute("Check", request)
    }

    /// Checks several domains in one `Check` call.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyList`] without calling the interface
    /// if the list is empty, or `InvalidDomain`/`MultipleDomains` for a bad
    /// `sld`. Otherwise any [`EnomError`] from the pipeline.
    pub fn batch_check(&self, check: &BatchCheck) -> Result<EnomResponse, EnomError> {
        let builder = match check {
            BatchCheck::Domains(domains) => {
                if domains.is_empty() {
                    return Err(ValidationError::EmptyList { field: "DomainList" }.into());
                }
                let names: Vec<String> = domains.iter().map(ToString::to_string).collect();
                CommandRequest::builder().list_param("DomainList", &names)
            }
            BatchCheck::TldsForSld { sld, tlds } => {
                let sld = parse_sld(sld)?;
                if tlds.is_empty() {
                    return Err(ValidationError::EmptyList { field: "TLDList" }.into());
                }
                CommandRequest::builder()
                    .param("SLD", sld)
                    .list_param("TLDList", tlds)
            }
        };
        self.executor.execute("Check", builder.build()?)
    }

    /// Generates name variations from a search term.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySearchTerm`] without calling the
    /// interface if the term is blank, otherwise any [`EnomError`] from the
    /// pipeline.
    pub fn get_name_suggestions(
        &self,
        query: &NameSuggestionQuery,
    ) -> Result<EnomResponse, EnomError> {
        let term = query.search_term.trim();
        if term.is_empty() {
            return Err(ValidationError::EmptySearchTerm.into());
        }

        let request = CommandRequest::builder()
            .param("SearchTerm", term)
            .param("Adult", bool_flag(query.adult))
            .param("Premium", bool_flag(query.premium))
            .param("MaxResults", query.max_results)
            .param("SpinType", query.spin_type)
            .list_param("TldList", &query.include_tlds)
            .list_param("OnlyTldList", &query.only_tlds)
            .list_param("ExcludeTldList", &query.exclude_tlds)
            .build()?;
        self.executor.execute("GetNameSuggestions", request)
    }

    /// Returns the `ConfirmationSettings` element of the order email
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns [`EnomError::Parse`] if the element is missing, otherwise
    /// any [`EnomError`] from the pipeline.
    pub fn get_confirmation_settings(&self) -> Result<XmlElement, EnomError> {
        self.executor
            .execute("GetConfirmationSettings", CommandRequest::default())?
            .into_child("ConfirmationSettings")
    }

    /// Returns the `Attributes` element listing the extended attributes a
    /// country code TLD requires.
    ///
    /// # Errors
    ///
    /// Returns [`EnomError::Parse`] if the element is missing, otherwise
    /// any [`EnomError`] from the pipeline.
    pub fn get_ext_attributes(&self, tld: &Tld) -> Result<XmlElement, EnomError> {
        let request = CommandRequest::builder().param("tld", tld.as_ref()).build()?;
        self.executor
            .execute("GetExtAttributes", request)?
            .into_child("Attributes")
    }

    /// Registers a domain in real time.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn purchase(&self, purchase: &PurchaseRequest) -> Result<EnomResponse, EnomError> {
        let mut builder = CommandRequest::builder()
            .param("sld", purchase.domain.sld())
            .param("tld", purchase.domain.tld());

        if purchase.nameservers.is_empty() {
            builder = builder.param("usedns", "default");
        } else {
            for (index, server) in purchase.nameservers.iter().enumerate() {
                builder = builder.param(format!("ns{}", index + 1), server.as_str());
            }
        }

        let password = purchase
            .password
            .as_deref()
            .filter(|password| !password.is_empty());
        let request = builder
            .param("unlockregistrar", purchase.unlock)
            .param("renewname", purchase.auto_renew)
            .param_opt("domainpassword", password)
            .param("numyears", purchase.years)
            .build()?;
        self.executor.execute("Purchase", request)
    }

    /// Lists the IDN language codes supported for a TLD.
    ///
    /// # Errors
    ///
    /// Returns any [`EnomError`] from the pipeline.
    pub fn get_idn_codes(&self, tld: &Tld) -> Result<EnomResponse, EnomError> {
        let request = CommandRequest::builder().param("tld", tld.as_ref()).build()?;
        self.executor.execute("GetIDNCodes", request)
    }
}
