use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application mode parameter.
///
/// Exactly two defined variants, represented by small integers on the wire.
/// Any other value is an invalid/unknown state surfaced as
/// [`UnknownModeValue`], never silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Server,
    Client,
}

/// Recognized-but-invalid mode value. Not a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown application mode: {0:?}")]
pub struct UnknownModeValue(pub String);

impl Mode {
    /// Whether the client-only dependent fields should be enabled.
    pub fn is_client(self) -> bool {
        self == Mode::Client
    }

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Server => "0",
            Mode::Client => "1",
        }
    }
}

impl FromStr for Mode {
    type Err = UnknownModeValue;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "0" => Ok(Mode::Server),
            "1" => Ok(Mode::Client),
            other => Err(UnknownModeValue(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defined_variants() {
        assert_eq!("0".parse::<Mode>().unwrap(), Mode::Server);
        assert_eq!("1".parse::<Mode>().unwrap(), Mode::Client);
        assert_eq!(" 1 ".parse::<Mode>().unwrap(), Mode::Client);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = "7".parse::<Mode>().unwrap_err();
        assert_eq!(err, UnknownModeValue("7".to_string()));

        assert!("".parse::<Mode>().is_err());
        assert!("client".parse::<Mode>().is_err());
    }

    #[test]
    fn client_flag() {
        assert!(Mode::Client.is_client());
        assert!(!Mode::Server.is_client());
    }

    #[test]
    fn wire_round_trip() {
        assert_eq!(Mode::Server.as_str().parse::<Mode>().unwrap(), Mode::Server);
        assert_eq!(Mode::Client.as_str().parse::<Mode>().unwrap(), Mode::Client);
    }
}
