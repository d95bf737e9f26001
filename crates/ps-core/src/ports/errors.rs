use thiserror::Error;

/// Failure reading one parameter from the authoritative remote store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteReadError {
    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {0}")]
    Status(u16),

    /// Well-formed response reporting that the parameter does not exist.
    /// Distinguished from a malformed response so callers can tell the two
    /// apart; the engine handles both by keeping the prior cached value.
    #[error("parameter not found")]
    NotFound,

    /// Response body not matching the expected `key=value` shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Failure writing one parameter to the authoritative remote store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteWriteError {
    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Failure fetching the scenario catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogFetchError {
    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {0}")]
    Status(u16),

    /// Structurally well-formed response missing the `data.scenarios` field.
    /// The port never defaults this to an empty catalog; recovery is an
    /// explicit decision by the caller.
    #[error("response is missing data.scenarios")]
    MissingScenarios,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("transport error: {0}")]
    Transport(String),
}
