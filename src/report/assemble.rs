//! Report document assembly.

use crate::config::ReporterConfig;
use crate::domain::instrument::InstrumentKind;
use crate::domain::registry::RegistrySnapshot;
use crate::report::sanitize::sanitize;
use crate::report::translate::translate;
use serde_json::{Map, Value};

/// Fixed emission order of instrument kinds in the document.
const KIND_ORDER: [InstrumentKind; 5] = [
    InstrumentKind::Gauge,
    InstrumentKind::Counter,
    InstrumentKind::Histogram,
    InstrumentKind::Meter,
    InstrumentKind::Timer,
];

/// Build one report document: every instrument that passes the configured
/// filter, keyed by sanitized name, gauges first, then counters, histograms,
/// meters and timers, in ascending name order within each kind.
///
/// The only per-instrument recovery point is the gauge read guard inside
/// translation; anything else that fails here is handled by the cycle-level
/// boundary in the reporter.
pub fn assemble(snapshot: &RegistrySnapshot, config: &ReporterConfig) -> Map<String, Value> {
    let mut document = Map::new();

    for kind in KIND_ORDER {
        for (name, instrument) in snapshot.iter() {
            if instrument.kind() != kind {
                continue;
            }
            if !(config.filter)(name, instrument) {
                continue;
            }
            if let Some(value) = translate(name, instrument, config.rate_unit, config.duration_unit)
            {
                document.insert(sanitize(name), value);
            }
        }
    }

    document
}
