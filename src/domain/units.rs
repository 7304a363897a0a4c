//! Rate and duration units for wire-value conversion.
//!
//! Raw rates are per-second and raw durations are nanoseconds; each is
//! rescaled exactly once, at translation time.

use std::str::FromStr;

/// Unit rate values are rescaled to before emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateUnit {
    #[default]
    Seconds,
    Minutes,
    Hours,
}

impl RateUnit {
    fn seconds_per_unit(self) -> f64 {
        match self {
            RateUnit::Seconds => 1.0,
            RateUnit::Minutes => 60.0,
            RateUnit::Hours => 3_600.0,
        }
    }
}

impl FromStr for RateUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seconds" => Ok(RateUnit::Seconds),
            "minutes" => Ok(RateUnit::Minutes),
            "hours" => Ok(RateUnit::Hours),
            _ => anyhow::bail!(
                "Invalid rate unit: {}. Must be 'seconds', 'minutes' or 'hours'",
                s
            ),
        }
    }
}

/// Unit duration values are rescaled to before emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationUnit {
    Nanoseconds,
    Microseconds,
    #[default]
    Milliseconds,
    Seconds,
}

impl DurationUnit {
    fn nanos_per_unit(self) -> f64 {
        match self {
            DurationUnit::Nanoseconds => 1.0,
            DurationUnit::Microseconds => 1_000.0,
            DurationUnit::Milliseconds => 1_000_000.0,
            DurationUnit::Seconds => 1_000_000_000.0,
        }
    }
}

impl FromStr for DurationUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nanoseconds" => Ok(DurationUnit::Nanoseconds),
            "microseconds" => Ok(DurationUnit::Microseconds),
            "milliseconds" => Ok(DurationUnit::Milliseconds),
            "seconds" => Ok(DurationUnit::Seconds),
            _ => anyhow::bail!(
                "Invalid duration unit: {}. Must be 'nanoseconds', 'microseconds', 'milliseconds' or 'seconds'",
                s
            ),
        }
    }
}

/// Rescale a per-second rate to the configured rate unit.
pub fn convert_rate(per_second: f64, unit: RateUnit) -> f64 {
    per_second * unit.seconds_per_unit()
}

/// Rescale a raw nanosecond duration to the configured duration unit.
pub fn convert_duration(nanos: f64, unit: DurationUnit) -> f64 {
    nanos / unit.nanos_per_unit()
}
