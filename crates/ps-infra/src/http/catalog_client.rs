use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use ps_core::ports::{CatalogFetchError, ScenarioCatalogPort};
use ps_core::scenario::ScenarioEntry;
use serde::{Deserialize, Serialize};

const API_VERSION: &str = "1.2";
const GET_CONFIGURATION: &str = "getConfiguration";

/// Analytics service endpoint configuration.
#[derive(Debug, Clone)]
pub struct AnalyticsEndpoint {
    /// Base URL of the device hosting the analytics service.
    pub base_url: String,
    pub timeout: Duration,
}

impl AnalyticsEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Serialize)]
struct CatalogRequest {
    #[serde(rename = "apiVersion")]
    api_version: &'static str,
    method: &'static str,
}

#[derive(Deserialize)]
struct CatalogResponse {
    data: Option<CatalogData>,
}

#[derive(Deserialize)]
struct CatalogData {
    scenarios: Option<Vec<ScenarioEntry>>,
}

/// `control.cgi` implementation of [`ScenarioCatalogPort`].
///
/// One structured POST `{apiVersion, method}`; the catalog lives in the
/// `data.scenarios` field of the JSON response. A response without that field
/// is reported as [`CatalogFetchError::MissingScenarios`], never silently
/// treated as an empty catalog.
pub struct HttpCatalogPort {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogPort {
    pub fn new(config: AnalyticsEndpoint) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: format!(
                "{}/local/objectanalytics/control.cgi",
                config.base_url.trim_end_matches('/')
            ),
        })
    }
}

#[async_trait]
impl ScenarioCatalogPort for HttpCatalogPort {
    async fn fetch_catalog(&self) -> Result<Vec<ScenarioEntry>, CatalogFetchError> {
        let response = self
            .client
            .post(&self.url)
            .json(&CatalogRequest {
                api_version: API_VERSION,
                method: GET_CONFIGURATION,
            })
            .send()
            .await
            .map_err(fetch_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogFetchError::Status(status.as_u16()));
        }

        let body: CatalogResponse = response.json().await.map_err(fetch_err)?;
        let scenarios = body
            .data
            .and_then(|data| data.scenarios)
            .ok_or(CatalogFetchError::MissingScenarios)?;

        debug!("got {} scenarios", scenarios.len());
        Ok(scenarios)
    }
}

fn fetch_err(error: reqwest::Error) -> CatalogFetchError {
    if error.is_timeout() {
        CatalogFetchError::Timeout
    } else if error.is_decode() {
        CatalogFetchError::Malformed(error.to_string())
    } else if let Some(status) = error.status() {
        CatalogFetchError::Status(status.as_u16())
    } else {
        CatalogFetchError::Transport(error.to_string())
    }
}
