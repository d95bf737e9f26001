use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use ps_core::param::ParamName;
use ps_core::ports::{RemoteParameterPort, RemoteReadError, RemoteWriteError};

/// Device parameter endpoint configuration.
#[derive(Debug, Clone)]
pub struct DeviceEndpoint {
    /// Base URL of the device, e.g. `http://192.168.0.90`.
    pub base_url: String,
    /// Application parameter group owned by this adapter; tracked names are
    /// namespaced under it on the wire.
    pub group: String,
    pub timeout: Duration,
}

impl DeviceEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            group: "Modbusacap".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// `param.cgi` implementation of [`RemoteParameterPort`].
///
/// Read: `GET {base}/axis-cgi/param.cgi?action=list&group={group}.{name}`,
/// response a plain `key=value` text line. Write:
/// `GET {base}/axis-cgi/param.cgi?action=update&{group}.{name}={value}`,
/// response merely a success status. Value escaping is owned here, through
/// the query serializer.
pub struct HttpParameterPort {
    client: reqwest::Client,
    base_url: String,
    group: String,
}

impl HttpParameterPort {
    pub fn new(config: DeviceEndpoint) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            group: config.group,
        })
    }

    fn param_url(&self) -> String {
        format!("{}/axis-cgi/param.cgi", self.base_url)
    }

    fn qualified(&self, name: ParamName) -> String {
        format!("{}.{}", self.group, name.as_str())
    }
}

#[async_trait]
impl RemoteParameterPort for HttpParameterPort {
    async fn read_parameter(&self, name: ParamName) -> Result<String, RemoteReadError> {
        let response = self
            .client
            .get(self.param_url())
            .query(&[("action", "list"), ("group", self.qualified(name).as_str())])
            .send()
            .await
            .map_err(read_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteReadError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(read_err)?;
        let line = body.trim();

        // param.cgi reports an unknown parameter as a comment line, not as an
        // error status.
        if line.starts_with("# Error") {
            warn!("parameter {} not found on device: {}", name, line);
            return Err(RemoteReadError::NotFound);
        }

        // Value is the substring after the first `=`.
        let value = line
            .split_once('=')
            .map(|(_, value)| value.trim().to_string())
            .ok_or_else(|| RemoteReadError::Malformed(line.to_string()))?;

        debug!("got {}: {}", name, value);
        Ok(value)
    }

    async fn write_parameter(&self, name: ParamName, value: &str) -> Result<(), RemoteWriteError> {
        let response = self
            .client
            .get(self.param_url())
            .query(&[("action", "update"), (self.qualified(name).as_str(), value)])
            .send()
            .await
            .map_err(write_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteWriteError::Status(status.as_u16()));
        }

        info!("set {} to {}", name, value);
        Ok(())
    }
}

fn read_err(error: reqwest::Error) -> RemoteReadError {
    if error.is_timeout() {
        RemoteReadError::Timeout
    } else if let Some(status) = error.status() {
        RemoteReadError::Status(status.as_u16())
    } else {
        RemoteReadError::Transport(error.to_string())
    }
}

fn write_err(error: reqwest::Error) -> RemoteWriteError {
    if error.is_timeout() {
        RemoteWriteError::Timeout
    } else if let Some(status) = error.status() {
        RemoteWriteError::Status(status.as_u16())
    } else {
        RemoteWriteError::Transport(error.to_string())
    }
}
