//! Last-known-value cache for tracked parameters and the scenario catalog.

use std::collections::HashMap;

use crate::param::ParamName;
use crate::scenario::ScenarioEntry;
use crate::snapshot::SyncSnapshot;

/// In-memory mapping from parameter name to last-known value, plus the latest
/// scenario catalog snapshot.
///
/// The cache is exclusively owned by the sync engine, which guarantees a
/// single logical writer at any instant; no interior locking is needed. Each
/// field is updated only by a successful read or write, so a failure for one
/// field leaves that field's prior value untouched while others update
/// normally within the same cycle.
///
/// A name absent from the cache means "not yet synchronized", not "empty".
#[derive(Debug, Default)]
pub struct ParameterCache {
    values: HashMap<ParamName, String>,
    scenarios: Vec<ScenarioEntry>,
}

impl ParameterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: ParamName) -> Option<&str> {
        self.values.get(&name).map(String::as_str)
    }

    /// Single-assignment update, called both by optimistic writes and by
    /// reconciliation reads.
    pub fn set(&mut self, name: ParamName, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn scenarios(&self) -> &[ScenarioEntry] {
        &self.scenarios
    }

    pub fn set_scenarios(&mut self, entries: Vec<ScenarioEntry>) {
        self.scenarios = entries;
    }

    /// Produce the read-only snapshot handed to the UI projection.
    pub fn snapshot(&self, client_config_enabled: bool) -> SyncSnapshot {
        SyncSnapshot {
            params: self.values.clone(),
            scenarios: self.scenarios.clone(),
            client_config_enabled,
        }
    }
}
