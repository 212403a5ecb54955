use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;

use crate::domain::{CheckResponse, ProbeError, Result};
use crate::ports::HttpClientPort;

/// HTTP client implementation backed by a single shared reqwest client.
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<CheckResponse> {
        debug!("GET {}", url);

        let url = url
            .parse::<reqwest::Url>()
            .map_err(|e| ProbeError::InvalidUrl(format!("{}: {}", url, e)))?;

        // A non-2xx status is not an error here; status assertions are the
        // caller's phases. Only transport failures map to Err.
        let http_response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::RequestFailed(format!("{}", e)))?;

        let status = http_response.status();

        let headers: HashMap<String, String> = http_response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect();

        let body = http_response
            .bytes()
            .await
            .map_err(|e| ProbeError::ReadBodyFailed(format!("{}", e)))?
            .to_vec();

        Ok(CheckResponse::new(status).with_headers(headers).with_body(body))
    }
}
