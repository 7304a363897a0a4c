//! Per-kind translation of instrument state into wire JSON values.
//!
//! Translators are pure apart from the gauge read callback. Unit conversion
//! happens here, exactly once per raw value.

use crate::domain::instrument::{Distribution, Gauge, Instrument};
use crate::domain::units::{DurationUnit, RateUnit, convert_duration, convert_rate};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Substituted for a gauge whose read callback failed.
const GAUGE_READ_ERROR: &str = "error reading gauge";

/// Wire shape shared by meters and timer rates. Only the count is emitted,
/// and it goes through the rate conversion: with the default per-second unit
/// the factor is 1 and the raw count passes through unchanged. Downstream
/// consumers depend on this field as-is, so it is not a true rate.
#[derive(Serialize)]
struct MeterBody {
    count: f64,
}

#[derive(Serialize)]
struct HistogramBody<'a> {
    count: u64,
    #[serde(flatten)]
    values: &'a Distribution,
}

#[derive(Serialize)]
struct TimerBody {
    rate: MeterBody,
    duration: Distribution,
}

/// Translate one instrument into the JSON value attached under its
/// sanitized name. `None` means the field is deliberately omitted (a gauge
/// that produced a non-numeric value).
pub fn translate(
    name: &str,
    instrument: &Instrument,
    rate_unit: RateUnit,
    duration_unit: DurationUnit,
) -> Option<Value> {
    match instrument {
        Instrument::Gauge(gauge) => translate_gauge(name, gauge),
        Instrument::Counter { count } => Some(Value::from(*count)),
        Instrument::Histogram { count, values } => Some(to_value(HistogramBody {
            count: *count,
            values,
        })),
        Instrument::Meter { count } => Some(to_value(meter_body(*count, rate_unit))),
        Instrument::Timer { count, durations } => Some(to_value(TimerBody {
            rate: meter_body(*count, rate_unit),
            duration: convert_distribution(durations, duration_unit),
        })),
    }
}

/// Numeric gauge values are emitted raw (no unit conversion). Non-numeric
/// values are skipped. A failed read is recovered locally: the failure is
/// logged and a sentinel string takes the value's place, so one bad gauge
/// never aborts the cycle.
fn translate_gauge(name: &str, gauge: &Gauge) -> Option<Value> {
    match gauge.read() {
        Ok(value) if value.is_number() => Some(value),
        Ok(_) => None,
        Err(e) => {
            warn!("Error reading gauge {}: {:#}", name, e);
            Some(Value::String(GAUGE_READ_ERROR.to_string()))
        }
    }
}

fn meter_body(count: i64, unit: RateUnit) -> MeterBody {
    MeterBody {
        count: convert_rate(count as f64, unit),
    }
}

fn convert_distribution(raw: &Distribution, unit: DurationUnit) -> Distribution {
    Distribution {
        max: convert_duration(raw.max, unit),
        mean: convert_duration(raw.mean, unit),
        min: convert_duration(raw.min, unit),
        stddev: convert_duration(raw.stddev, unit),
        median: convert_duration(raw.median, unit),
        p75: convert_duration(raw.p75, unit),
        p95: convert_duration(raw.p95, unit),
        p98: convert_duration(raw.p98, unit),
        p99: convert_duration(raw.p99, unit),
        p999: convert_duration(raw.p999, unit),
    }
}

// The wire bodies contain only string keys and numbers, so serialization
// cannot fail (non-finite floats become null).
fn to_value<T: Serialize>(body: T) -> Value {
    serde_json::to_value(body).unwrap_or_default()
}
