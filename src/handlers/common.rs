use std::sync::Arc;

use crate::domain::{CheckResponse, StatusCode, TestPhase};
use crate::ports::{HttpClientPort, ReportPort};

/// Shared context for the per-version API handlers: the proxy base address
/// plus the injected HTTP client and report sink. Read-only once built.
#[derive(Clone)]
pub struct CommonHandler {
    proxy_url: String,
    http_client: Arc<dyn HttpClientPort>,
    report: Arc<dyn ReportPort>,
}

impl CommonHandler {
    pub fn new(proxy_url: &str, http_client: Arc<dyn HttpClientPort>, report: Arc<dyn ReportPort>) -> Self {
        Self {
            // Normalize so that endpoint() concatenation never doubles a slash.
            proxy_url: proxy_url.trim_end_matches('/').to_string(),
            http_client,
            report,
        }
    }

    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    /// Endpoint address for a proxy API path, e.g. "/node/heartbeatstatus".
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.proxy_url, path)
    }

    pub fn http_client(&self) -> &dyn HttpClientPort {
        self.http_client.as_ref()
    }

    pub fn report(&self) -> &dyn ReportPort {
        self.report.as_ref()
    }

    /// The basic phase every endpoint check runs: the response status code
    /// equals the expected one.
    pub fn run_basic_phase_ok(&self, response: &CheckResponse, expected: StatusCode) -> TestPhase {
        TestPhase::status_check(expected, response.status)
    }
}
