use std::collections::HashMap;

use crate::param::ParamName;
use crate::scenario::ScenarioEntry;

/// Atomic result of one reconciliation cycle.
///
/// Constructed fresh each cycle from the cache and handed to the UI
/// projection by value; the projection never receives a mutable handle into
/// engine-owned state.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncSnapshot {
    /// Tracked parameter values. A missing name means "not yet synchronized".
    pub params: HashMap<ParamName, String>,

    /// Scenario catalog in display order.
    pub scenarios: Vec<ScenarioEntry>,

    /// Derived from the Mode parameter: whether client-only configuration
    /// fields are enabled.
    pub client_config_enabled: bool,
}

impl SyncSnapshot {
    pub fn get(&self, name: ParamName) -> Option<&str> {
        self.params.get(&name).map(String::as_str)
    }
}
