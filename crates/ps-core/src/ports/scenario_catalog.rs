use async_trait::async_trait;

use crate::ports::errors::CatalogFetchError;
use crate::scenario::ScenarioEntry;

/// Scenario catalog port - abstracts the analytics service owning the
/// scenario definitions.
#[async_trait]
pub trait ScenarioCatalogPort: Send + Sync {
    /// Fetch the full scenario catalog in display order.
    async fn fetch_catalog(&self) -> Result<Vec<ScenarioEntry>, CatalogFetchError>;
}
