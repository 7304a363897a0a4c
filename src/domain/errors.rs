use thiserror::Error;

/// Faults raised while shipping one report document to the collector.
///
/// These never propagate out of a report cycle: the reporter logs them at
/// warning level and lets the next cycle retry naturally.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to serialize report document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to deliver report to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
