use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a tracked device parameter.
///
/// The tracked set is fixed: the engine reconciles exactly these names every
/// cycle. Values are opaque strings at this boundary; semantic interpretation
/// (integer, enum, free text) belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamName {
    /// Device unit address (integer-valued).
    Address,
    /// Application mode, see [`crate::param::Mode`].
    Mode,
    /// TCP port the device listens on or connects to.
    Port,
    /// Selected analytics scenario id.
    Scenario,
    /// Peer server host, only meaningful in client mode.
    Server,
}

impl ParamName {
    /// All tracked parameters, in reconciliation order.
    pub const ALL: [ParamName; 5] = [
        ParamName::Address,
        ParamName::Mode,
        ParamName::Port,
        ParamName::Scenario,
        ParamName::Server,
    ];

    /// Remote name suffix. The application group prefix is owned by the
    /// transport adapter, never by callers of the port.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamName::Address => "ModbusAddress",
            ParamName::Mode => "Mode",
            ParamName::Port => "Port",
            ParamName::Scenario => "Scenario",
            ParamName::Server => "Server",
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_name_once() {
        let mut seen = std::collections::HashSet::new();
        for name in ParamName::ALL {
            assert!(seen.insert(name), "{name} listed twice");
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn remote_suffixes() {
        assert_eq!(ParamName::Address.as_str(), "ModbusAddress");
        assert_eq!(ParamName::Mode.as_str(), "Mode");
        assert_eq!(ParamName::Server.to_string(), "Server");
    }
}
