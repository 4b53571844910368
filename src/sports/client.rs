use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::provider::UpstreamRequest;

pub const UNREADABLE_BODY: &str = "Unable to read upstream response body";

/// What came back from a single upstream call.
#[derive(Debug)]
pub enum UpstreamResponse {
    /// 2xx with a JSON body
    Success(serde_json::Value),
    /// Completed, but with a non-2xx status
    Failed {
        status: u16,
        status_text: String,
        body: String,
    },
}

/// Thin wrapper around a shared `reqwest::Client` with a hard timeout.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(UpstreamClient { http })
    }

    /// Issue one GET. Transport errors, timeouts and malformed JSON are
    /// returned as `Err`; a non-2xx status is not an error here.
    pub async fn fetch(&self, req: &UpstreamRequest) -> Result<UpstreamResponse> {
        debug!("Fetching upstream {}", req.url);

        let mut builder = self.http.get(&req.url);
        for (name, value) in &req.headers {
            builder = builder.header(*name, value);
        }
        let resp = builder.send().await.context("Upstream request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
            warn!("Upstream returned {} for {}", status, req.url);
            return Ok(UpstreamResponse::Failed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let payload: serde_json::Value = resp
            .json()
            .await
            .context("Failed to parse upstream response")?;
        Ok(UpstreamResponse::Success(payload))
    }
}
