//! Test double for exercising command groups without a transport.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::clients::{CommandExecutor, CommandRequest, EnomError, EnomResponse, ParamValue};
use crate::xml::XmlElement;

/// Records every command and answers with a fixed document.
pub struct RecordingExecutor {
    body: String,
    pub calls: RefCell<Vec<(String, CommandRequest)>>,
}

impl RecordingExecutor {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn ok() -> Self {
        Self::new("<interface-response><ErrCount>0</ErrCount><Done>true</Done></interface-response>")
    }

    /// The single recorded call. Panics unless exactly one was made.
    pub fn only_call(&self) -> (String, CommandRequest) {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one call");
        calls[0].clone()
    }

    pub fn is_untouched(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, command: &str, request: CommandRequest) -> Result<EnomResponse, EnomError> {
        self.calls.borrow_mut().push((command.to_string(), request));
        Ok(EnomResponse {
            code: 200,
            headers: HashMap::new(),
            raw_body: self.body.clone(),
            document: XmlElement::parse(&self.body).expect("test body must be XML"),
            request_url: String::new(),
            effective_url: String::new(),
            elapsed: Duration::ZERO,
        })
    }
}

/// Renders a request's parameters as `(name, value)` string pairs.
pub fn pairs(request: &CommandRequest) -> Vec<(String, String)> {
    request
        .params
        .iter()
        .map(|(name, value): &(String, ParamValue)| (name.clone(), value.to_string()))
        .collect()
}

/// Shorthand for building expected pairs.
pub fn expected(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
