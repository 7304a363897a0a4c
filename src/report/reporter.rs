//! Push-based report cycles.

use crate::config::ReporterConfig;
use crate::domain::registry::{RegistrySnapshot, SnapshotSource};
use crate::report::assemble::assemble;
use crate::report::transport;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Push-based JSON metrics reporter.
///
/// Each cycle pulls a fresh registry snapshot, assembles one JSON document
/// and POSTs it to the collector. Delivery is at-most-once per cycle: faults
/// are logged and swallowed, never raised to the caller, so a bad cycle
/// cannot take the process down or poison the next cycle.
pub struct JsonReporter {
    config: ReporterConfig,
    client: Client,
}

impl JsonReporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self {
            client: transport::build_client(),
            config,
        }
    }

    /// Run one report cycle to completion. Never returns an error; a future
    /// cycle retries naturally.
    pub async fn report_once(&self, snapshot: &RegistrySnapshot) {
        debug!(
            "Reporting {} metrics as host {}...",
            snapshot.len(),
            self.config.source_host
        );

        let document = assemble(snapshot, &self.config);

        match transport::send(&self.client, &document, &self.config).await {
            Ok(status) => debug!(
                "Reported {} metrics ({})",
                document.len(),
                status.as_u16()
            ),
            Err(e) => warn!("Error sending metrics: {:#}", e),
        }
    }

    /// Report on a fixed interval until the driving task is dropped. Cycles
    /// never overlap: the next sleep starts only after the previous cycle
    /// has returned.
    pub async fn run(self, source: Arc<dyn SnapshotSource>, interval: Duration) {
        info!(
            "JsonReporter: pushing to http://{}:{}/report/metrics every {:?}",
            self.config.host, self.config.port, interval
        );

        loop {
            tokio::time::sleep(interval).await;
            let snapshot = source.snapshot();
            self.report_once(&snapshot).await;
        }
    }
}
