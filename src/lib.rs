//! Push-based JSON metrics reporting.
//!
//! Periodically drains a registry snapshot (gauges, counters, histograms,
//! meters, timers), translates each instrument into a stable JSON shape and
//! POSTs the resulting document to a remote collector.
//!
//! **Security**: This crate only SENDS data, it never accepts requests.

pub mod config;
pub mod domain;
pub mod report;

pub use config::{InstrumentFilter, ReporterConfig};
pub use domain::instrument::{Distribution, Gauge, Instrument, InstrumentKind};
pub use domain::registry::{RegistrySnapshot, SnapshotSource};
pub use domain::units::{DurationUnit, RateUnit};
pub use report::reporter::JsonReporter;
