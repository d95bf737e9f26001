use async_trait::async_trait;

use crate::param::ParamName;
use crate::ports::errors::{RemoteReadError, RemoteWriteError};

/// Remote parameter port - abstracts the authoritative device parameter store.
///
/// One read and one write per named parameter. The port owns transport
/// encoding (namespacing, value escaping); callers pass raw values. No
/// retries here: retry-by-next-cycle is the engine's policy.
#[async_trait]
pub trait RemoteParameterPort: Send + Sync {
    /// Read the current remote value of one parameter.
    async fn read_parameter(&self, name: ParamName) -> Result<String, RemoteReadError>;

    /// Write a new value for one parameter.
    async fn write_parameter(&self, name: ParamName, value: &str) -> Result<(), RemoteWriteError>;
}
