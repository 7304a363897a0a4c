//! Reporter configuration.
//!
//! Plain immutable value: required fields are validated once at
//! construction and nothing is mutated afterwards. The source-host label is
//! resolved from the environment exactly once, here, so report cycles never
//! touch the process environment.

use crate::domain::instrument::Instrument;
use crate::domain::units::{DurationUnit, RateUnit};
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether an instrument is included in a report.
pub type InstrumentFilter = Arc<dyn Fn(&str, &Instrument) -> bool + Send + Sync>;

/// Immutable configuration for one reporter.
#[derive(Clone)]
pub struct ReporterConfig {
    /// Collector host documents are POSTed to.
    pub host: String,
    /// Collector port.
    pub port: u16,
    /// Label identifying this machine to the collector (the `h` query param).
    pub source_host: String,
    pub rate_unit: RateUnit,
    pub duration_unit: DurationUnit,
    pub filter: InstrumentFilter,
}

impl ReporterConfig {
    /// Build a config with defaults: per-second rates, millisecond
    /// durations, accept-all filter, source host from `METRICS_SOURCE_FQDN`
    /// (falling back to `"localhost"`).
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        let host = host.into();
        if host.trim().is_empty() {
            anyhow::bail!("No metrics hostname specified");
        }
        if port == 0 {
            anyhow::bail!("No metrics port specified");
        }

        Ok(Self {
            host,
            port,
            source_host: source_host_from_env(),
            rate_unit: RateUnit::default(),
            duration_unit: DurationUnit::default(),
            filter: Arc::new(|_, _| true),
        })
    }

    /// Load the collector endpoint (and optional unit overrides) from the
    /// environment.
    pub fn from_env() -> Result<Self> {
        let host = env::var("METRICS_RELAY_HOST").context("METRICS_RELAY_HOST is not set")?;
        let port = env::var("METRICS_RELAY_PORT")
            .context("METRICS_RELAY_PORT is not set")?
            .parse::<u16>()
            .context("METRICS_RELAY_PORT must be a port number")?;

        let mut config = Self::new(host, port)?;
        if let Ok(unit) = env::var("METRICS_RELAY_RATE_UNIT") {
            config.rate_unit = unit.parse()?;
        }
        if let Ok(unit) = env::var("METRICS_RELAY_DURATION_UNIT") {
            config.duration_unit = unit.parse()?;
        }
        Ok(config)
    }

    pub fn with_source_host(mut self, source_host: impl Into<String>) -> Self {
        self.source_host = source_host.into();
        self
    }

    pub fn with_rate_unit(mut self, unit: RateUnit) -> Self {
        self.rate_unit = unit;
        self
    }

    pub fn with_duration_unit(mut self, unit: DurationUnit) -> Self {
        self.duration_unit = unit;
        self
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, &Instrument) -> bool + Send + Sync + 'static,
    {
        self.filter = Arc::new(filter);
        self
    }
}

impl fmt::Debug for ReporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("source_host", &self.source_host)
            .field("rate_unit", &self.rate_unit)
            .field("duration_unit", &self.duration_unit)
            .finish_non_exhaustive()
    }
}

fn source_host_from_env() -> String {
    env::var("METRICS_SOURCE_FQDN").unwrap_or_else(|_| "localhost".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ReporterConfig::new("collector.internal", 2878).unwrap();
        assert_eq!(config.host, "collector.internal");
        assert_eq!(config.port, 2878);
        assert!(!config.source_host.is_empty());
        assert_eq!(config.rate_unit, RateUnit::Seconds);
        assert_eq!(config.duration_unit, DurationUnit::Milliseconds);
        assert!((config.filter)("anything", &Instrument::Counter { count: 0 }));
    }

    #[test]
    fn test_required_fields_are_validated() {
        assert!(ReporterConfig::new("", 2878).is_err());
        assert!(ReporterConfig::new("   ", 2878).is_err());
        assert!(ReporterConfig::new("collector.internal", 0).is_err());
    }

    #[test]
    fn test_value_setters() {
        let config = ReporterConfig::new("collector.internal", 2878)
            .unwrap()
            .with_source_host("app-01.example.org")
            .with_rate_unit(RateUnit::Minutes)
            .with_duration_unit(DurationUnit::Seconds)
            .with_filter(|name, _| name.starts_with("api."));

        assert_eq!(config.source_host, "app-01.example.org");
        assert_eq!(config.rate_unit, RateUnit::Minutes);
        assert_eq!(config.duration_unit, DurationUnit::Seconds);
        assert!((config.filter)("api.requests", &Instrument::Counter { count: 0 }));
        assert!(!(config.filter)("db.requests", &Instrument::Counter { count: 0 }));
    }
}
