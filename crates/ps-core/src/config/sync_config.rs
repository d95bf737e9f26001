use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sync engine configuration.
///
/// The tracked parameter set is fixed ([`crate::param::ParamName::ALL`]) and
/// not runtime-configurable; only the polling cadence is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Polling cadence for the reconciliation cycle, in seconds.
    #[serde(rename = "intervalSeconds")]
    pub interval_seconds: u64,
}

impl SyncConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { interval_seconds: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cadence_is_five_seconds() {
        let config = SyncConfig::default();
        assert_eq!(config.interval(), Duration::from_secs(5));
    }

    #[test]
    fn recognizes_interval_seconds_option() {
        let config: SyncConfig = serde_json::from_str(r#"{"intervalSeconds": 2}"#).unwrap();
        assert_eq!(config.interval_seconds, 2);
    }
}
