//! HTTP delivery of the assembled report document.

use crate::config::ReporterConfig;
use crate::domain::errors::TransportError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

/// Build the client shared by all report cycles. The timeouts here are the
/// only bound on how long one cycle can take.
pub fn build_client() -> Client {
    Client::builder()
        .pool_max_idle_per_host(1)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// POST one document to `http://{host}:{port}/report/metrics?h={source}` and
/// read back the status code. The status is logged, never branched on; no
/// response body is expected.
pub async fn send(
    client: &Client,
    document: &Map<String, Value>,
    config: &ReporterConfig,
) -> Result<StatusCode, TransportError> {
    let url = format!("http://{}:{}/report/metrics", config.host, config.port);
    let body = serde_json::to_string(document)?;

    let response = client
        .post(&url)
        .query(&[("h", config.source_host.as_str())])
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|source| TransportError::Request {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    debug!("Metrics collector response: {}", status.as_u16());
    Ok(status)
}
