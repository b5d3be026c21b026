//! Integration tests for the command groups.
//!
//! Each test runs a command through a real [`HttpClient`] and checks the
//! exact query string that reaches the transport.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;
use enom_api::{
    AccountId, AccountPassword, BatchCheck, DomainName, EnomConfig, EnomError, HttpClient,
    NameSuggestionQuery, OrderListQuery, PurchaseRequest, RawResponse, Tld, Transport,
    TransportError, ValidationError,
};

const CREDENTIALS: &str = "uid=resellid&pw=resellpw&responsetype=XML";

struct CannedTransport {
    body: String,
    urls: Mutex<Vec<String>>,
}

impl CannedTransport {
    fn new(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: body.to_string(),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn ok() -> Arc<Self> {
        Self::new("<interface-response><ErrCount>0</ErrCount><Done>true</Done></interface-response>")
    }

    /// The query string of the only request made.
    fn only_query(&self) -> String {
        let urls = self.urls.lock().unwrap();
        assert_eq!(urls.len(), 1, "expected exactly one request");
        urls[0]
            .split_once('?')
            .map(|(_, query)| query.to_string())
            .unwrap()
    }

    fn request_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }
}

impl Transport for CannedTransport {
    fn get(
        &self,
        url: &str,
        _user_agent: &str,
        _timeout: Option<Duration>,
    ) -> Result<RawResponse, TransportError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(RawResponse::new(200, self.body.clone()))
    }
}

fn create_client(transport: &Arc<CannedTransport>) -> HttpClient<Arc<CannedTransport>> {
    let config = EnomConfig::builder()
        .account_id(AccountId::new("resellid").unwrap())
        .account_password(AccountPassword::new("resellpw").unwrap())
        .build()
        .unwrap();
    HttpClient::with_transport(config, Arc::clone(transport))
}

// ============================================================================
// Account
// ============================================================================

#[test]
fn test_get_balance() {
    let transport = CannedTransport::new(
        "<interface-response><AvailableBalance>1,234.56</AvailableBalance><ErrCount>0</ErrCount></interface-response>",
    );
    let client = create_client(&transport);

    let response = client.account().get_balance().unwrap();

    assert_eq!(response.text_at("AvailableBalance"), Some("1,234.56"));
    assert_eq!(
        transport.only_query(),
        format!("command=GetBalance&{CREDENTIALS}")
    );
}

#[test]
fn test_get_order_list_with_dates() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);
    let query = OrderListQuery {
        begin: NaiveDate::from_ymd_opt(2024, 3, 1),
        end: NaiveDate::from_ymd_opt(2024, 3, 31),
        ..OrderListQuery::default()
    };

    client.account().get_order_list(&query).unwrap();

    assert_eq!(
        transport.only_query(),
        format!("start=1&begindate=03%2F01%2F2024&enddate=03%2F31%2F2024&command=GetOrderList&{CREDENTIALS}")
    );
}

#[test]
fn test_account_commands_use_their_names() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);
    let account = client.account();

    account.get_account_info().unwrap();
    account.get_service_contact().unwrap();
    account.get_confirmation_settings().unwrap();
    account.get_all_domains().unwrap();

    let urls = transport.urls.lock().unwrap();
    let commands: Vec<&str> = urls
        .iter()
        .filter_map(|url| url.split("command=").nth(1))
        .filter_map(|rest| rest.split('&').next())
        .collect();
    assert_eq!(
        commands,
        vec![
            "GetAccountInfo",
            "GetServiceContact",
            "GetConfirmationSettings",
            "GetAllDomains"
        ]
    );
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_check_multi_label_tld() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);

    client
        .registration()
        .check(&DomainName::parse("example.co.uk").unwrap())
        .unwrap();

    assert_eq!(
        transport.only_query(),
        format!("sld=example&tld=co.uk&command=Check&{CREDENTIALS}")
    );
}

#[test]
fn test_check_reports_api_error() {
    let transport = CannedTransport::new(
        "<interface-response><ErrCount>1</ErrCount><errors><Err1>Invalid domain</Err1></errors></interface-response>",
    );
    let client = create_client(&transport);

    let err = client
        .registration()
        .check(&DomainName::parse("bad-.com").unwrap())
        .unwrap_err();

    assert!(matches!(err, EnomError::Api { ref message, .. } if message == "Invalid domain"));
}

#[test]
fn test_batch_check_domain_list() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);
    let domains = ["a.com", "b.net"]
        .iter()
        .map(|d| DomainName::parse(d).unwrap())
        .collect();

    client
        .registration()
        .batch_check(&BatchCheck::Domains(domains))
        .unwrap();

    assert_eq!(
        transport.only_query(),
        format!("DomainList=a.com%2Cb.net&command=Check&{CREDENTIALS}")
    );
}

#[test]
fn test_batch_check_empty_list_sends_nothing() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);

    let err = client
        .registration()
        .batch_check(&BatchCheck::TldsForSld {
            sld: "example".to_string(),
            tlds: Vec::new(),
        })
        .unwrap_err();

    assert!(matches!(
        err,
        EnomError::Validation(ValidationError::EmptyList { field: "TLDList" })
    ));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_name_suggestions() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);
    let mut query = NameSuggestionQuery::new("hot coffee");
    query.only_tlds = vec!["com".to_string(), "net".to_string()];

    client.registration().get_name_suggestions(&query).unwrap();

    assert_eq!(
        transport.only_query(),
        format!(
            "SearchTerm=hot+coffee&Adult=False&Premium=True&MaxResults=50&SpinType=0&OnlyTldList=com%2Cnet&command=GetNameSuggestions&{CREDENTIALS}"
        )
    );
}

#[test]
fn test_ext_attributes_returns_attributes_element() {
    let transport = CannedTransport::new(
        "<interface-response><Attributes><Attribute><ID>1</ID><Name>uk_legal_type</Name></Attribute></Attributes><ErrCount>0</ErrCount></interface-response>",
    );
    let client = create_client(&transport);

    let attributes = client
        .registration()
        .get_ext_attributes(&Tld::parse(".co.uk").unwrap())
        .unwrap();

    assert_eq!(attributes.name(), "Attributes");
    assert_eq!(attributes.children("Attribute").count(), 1);
    assert_eq!(
        transport.only_query(),
        format!("tld=co.uk&command=GetExtAttributes&{CREDENTIALS}")
    );
}

#[test]
fn test_confirmation_settings_missing_element_is_parse_error() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);

    let err = client
        .registration()
        .get_confirmation_settings()
        .unwrap_err();

    assert!(matches!(
        err,
        EnomError::Parse { ref message, .. } if message == "missing <ConfirmationSettings> element"
    ));
    assert!(err.raw_body().is_some());
}

#[test]
fn test_purchase() {
    let transport = CannedTransport::new(
        "<interface-response><OrderID>157776</OrderID><RRPCode>200</RRPCode><ErrCount>0</ErrCount></interface-response>",
    );
    let client = create_client(&transport);
    let purchase = PurchaseRequest {
        years: 2,
        nameservers: vec!["dns1.name-services.com".to_string()],
        ..PurchaseRequest::new(DomainName::parse("example.com").unwrap())
    };

    let response = client.registration().purchase(&purchase).unwrap();

    assert_eq!(response.text_at("OrderID"), Some("157776"));
    assert_eq!(
        transport.only_query(),
        format!(
            "sld=example&tld=com&ns1=dns1.name-services.com&unlockregistrar=0&renewname=0&numyears=2&command=Purchase&{CREDENTIALS}"
        )
    );
}

#[test]
fn test_idn_codes() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);

    client
        .registration()
        .get_idn_codes(&Tld::parse("com").unwrap())
        .unwrap();

    assert_eq!(
        transport.only_query(),
        format!("tld=com&command=GetIDNCodes&{CREDENTIALS}")
    );
}

// ============================================================================
// TLDs, pricing and trademarks
// ============================================================================

#[test]
fn test_tld_list() {
    let transport = CannedTransport::new(
        "<interface-response><tldlist><tld><tld>com</tld></tld><tld><tld>io</tld></tld></tldlist><ErrCount>0</ErrCount></interface-response>",
    );
    let client = create_client(&transport);

    let list = client.tlds().get_tld_list().unwrap();

    assert_eq!(list.children("tld").count(), 2);
    assert_eq!(
        transport.only_query(),
        format!("command=GetTLDList&{CREDENTIALS}")
    );
}

#[test]
fn test_retail_price() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);

    client
        .pricing()
        .get_retail_price(10, &Tld::parse("com").unwrap(), 1)
        .unwrap();

    assert_eq!(
        transport.only_query(),
        format!("ProductType=10&tld=com&Years=1&command=PE_GetRetailPrice&{CREDENTIALS}")
    );
}

#[test]
fn test_product_price() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);

    client
        .pricing()
        .get_product_price(10, &Tld::parse("net").unwrap())
        .unwrap();

    assert_eq!(
        transport.only_query(),
        format!("ProductType=10&tld=net&command=PE_GetProductPrice&{CREDENTIALS}")
    );
}

#[test]
fn test_trademark_notice() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);

    client
        .trademark()
        .get_notice(&DomainName::parse("brand.shop").unwrap())
        .unwrap();

    assert_eq!(
        transport.only_query(),
        format!("sld=brand&tld=shop&command=TM_GetNotice&{CREDENTIALS}")
    );
}

#[test]
fn test_trademark_check() {
    let transport = CannedTransport::ok();
    let client = create_client(&transport);

    client
        .trademark()
        .check(&DomainName::parse("brand.shop").unwrap())
        .unwrap();

    assert_eq!(
        transport.only_query(),
        format!("sld=brand&tld=shop&command=TM_Check&{CREDENTIALS}")
    );
}
