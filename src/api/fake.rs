//! Canned-response HTTP client for unit tests

use std::cell::RefCell;
use std::collections::HashMap;

use super::http::HttpClient;
use crate::error::{WidgetError, WidgetResult};

#[derive(Debug, Clone)]
enum Canned {
    Json(serde_json::Value),
    Status(u16),
}

/// Serves registered URLs; any other URL fails like a refused connection
#[derive(Debug, Default)]
pub struct FakeHttpClient {
    responses: RefCell<HashMap<String, Canned>>,
    requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, body: serde_json::Value) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Canned::Json(body));
    }

    pub fn fail(&self, url: &str, status: u16) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Canned::Status(status));
    }

    /// URLs requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn headers_for(&self, url: &str) -> Vec<(String, String)> {
        self.requests
            .borrow()
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, headers)| headers.clone())
            .unwrap_or_default()
    }
}

impl HttpClient for FakeHttpClient {
    fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> WidgetResult<serde_json::Value> {
        self.requests.borrow_mut().push((
            url.to_string(),
            headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ));

        match self.responses.borrow().get(url).cloned() {
            Some(Canned::Json(body)) => Ok(body),
            Some(Canned::Status(status)) => Err(WidgetError::Status {
                url: url.to_string(),
                status,
            }),
            None => Err(WidgetError::Http {
                url: url.to_string(),
                message: "connection refused".into(),
            }),
        }
    }
}
