//! Instrument kinds held in a registry snapshot.
//!
//! The set of kinds is closed, so translation dispatches on an exhaustive
//! match rather than a trait object per kind.

use serde::Serialize;
use serde_json::Value;

type GaugeFn = Box<dyn Fn() -> anyhow::Result<Value> + Send + Sync>;

/// A gauge produces one arbitrary value (numeric or otherwise) on demand.
/// Evaluation may fail; the reporter recovers locally.
pub struct Gauge {
    read: GaugeFn,
}

impl Gauge {
    pub fn new<F>(read: F) -> Self
    where
        F: Fn() -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self {
            read: Box::new(read),
        }
    }

    /// Gauge that reports the same value every cycle.
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move || Ok(value.clone()))
    }

    pub fn read(&self) -> anyhow::Result<Value> {
        (self.read)()
    }
}

/// Statistical summary of a histogram or timer's recorded values.
/// Field order is the wire emission order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Distribution {
    pub max: f64,
    pub mean: f64,
    pub min: f64,
    pub stddev: f64,
    pub median: f64,
    pub p75: f64,
    pub p95: f64,
    pub p98: f64,
    pub p99: f64,
    pub p999: f64,
}

/// A named metrics source pulled from the registry. Instruments are owned by
/// the registry collaborator; the reporter only reads them.
pub enum Instrument {
    Gauge(Gauge),
    Counter { count: i64 },
    Histogram { count: u64, values: Distribution },
    /// Rate-bearing, but only the count reaches the wire.
    Meter { count: i64 },
    /// Duration statistics are raw nanoseconds.
    Timer { count: i64, durations: Distribution },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    Gauge,
    Counter,
    Histogram,
    Meter,
    Timer,
}

impl Instrument {
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Instrument::Gauge(_) => InstrumentKind::Gauge,
            Instrument::Counter { .. } => InstrumentKind::Counter,
            Instrument::Histogram { .. } => InstrumentKind::Histogram,
            Instrument::Meter { .. } => InstrumentKind::Meter,
            Instrument::Timer { .. } => InstrumentKind::Timer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constant_gauge_reads_same_value() {
        let gauge = Gauge::constant(42);
        assert_eq!(gauge.read().unwrap(), json!(42));
        assert_eq!(gauge.read().unwrap(), json!(42));
    }

    #[test]
    fn test_gauge_closure_can_fail() {
        let gauge = Gauge::new(|| anyhow::bail!("sensor offline"));
        assert!(gauge.read().is_err());
    }

    #[test]
    fn test_kind_dispatch() {
        let timer = Instrument::Timer {
            count: 0,
            durations: Distribution {
                max: 0.0,
                mean: 0.0,
                min: 0.0,
                stddev: 0.0,
                median: 0.0,
                p75: 0.0,
                p95: 0.0,
                p98: 0.0,
                p99: 0.0,
                p999: 0.0,
            },
        };
        assert_eq!(timer.kind(), InstrumentKind::Timer);
        assert_eq!(Instrument::Counter { count: 1 }.kind(), InstrumentKind::Counter);
    }
}
