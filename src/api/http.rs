//! HTTP transport
//!
//! The services only need "GET this URL and give me JSON". Keeping that
//! behind a trait lets tests swap in canned responses.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{WidgetError, WidgetResult};

/// Minimal JSON-over-HTTP capability
pub trait HttpClient {
    /// GET `url` with `headers` and decode the body as JSON
    ///
    /// Transport failures, non-2xx statuses and non-JSON bodies are all
    /// errors.
    fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> WidgetResult<serde_json::Value>;
}

/// Blocking reqwest client with a per-request timeout
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    http: Client,
}

impl ReqwestHttpClient {
    /// Build a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> WidgetResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("actual-widget/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WidgetError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> WidgetResult<serde_json::Value> {
        let mut request = self.http.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().map_err(|e| WidgetError::Http {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().map_err(|e| WidgetError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
