//! Registry snapshot handed to the reporter each cycle.

use crate::domain::instrument::Instrument;
use std::collections::BTreeMap;

/// A point-in-time view of every instrument in the registry, keyed by raw
/// metric name. Iteration is in ascending name order, which is the order the
/// wire format requires within each instrument kind.
///
/// A snapshot is built fresh for each report cycle and discarded after
/// transmission; nothing persists between cycles.
#[derive(Default)]
pub struct RegistrySnapshot {
    instruments: BTreeMap<String, Instrument>,
}

impl RegistrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, instrument: Instrument) {
        self.instruments.insert(name.into(), instrument);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Instrument)> {
        self.instruments.iter().map(|(name, inst)| (name.as_str(), inst))
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

/// Supplies a fresh registry snapshot for each report cycle.
///
/// Implemented by whoever owns the live registry; the reporter pulls through
/// this seam and never mutates instruments or coordinates with concurrent
/// registry writers.
pub trait SnapshotSource: Send + Sync {
    fn snapshot(&self) -> RegistrySnapshot;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_name_ordered() {
        let mut snapshot = RegistrySnapshot::new();
        snapshot.register("zeta", Instrument::Counter { count: 1 });
        snapshot.register("alpha", Instrument::Counter { count: 2 });
        snapshot.register("mid", Instrument::Counter { count: 3 });

        let names: Vec<&str> = snapshot.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_reregistering_replaces() {
        let mut snapshot = RegistrySnapshot::new();
        snapshot.register("reqs", Instrument::Counter { count: 1 });
        snapshot.register("reqs", Instrument::Counter { count: 9 });
        assert_eq!(snapshot.len(), 1);
    }
}
