use anyhow::Result;
use async_trait::async_trait;

use crate::fault::SyncFault;
use crate::snapshot::SyncSnapshot;

/// UI projection port - the presentation layer consuming engine output.
///
/// The projection only ever receives read-only snapshots and notifications;
/// projection failures are logged by the engine and never abort a cycle.
#[async_trait]
pub trait UiProjectionPort: Send + Sync {
    /// A new reconciliation snapshot is available.
    async fn apply_snapshot(&self, snapshot: SyncSnapshot) -> Result<()>;

    /// Immediate visibility update for client-only fields, issued from the
    /// requested mode of an edit before the write confirms.
    async fn set_client_config_enabled(&self, enabled: bool) -> Result<()>;

    /// Operator-visible failure notification.
    async fn alert(&self, fault: SyncFault) -> Result<()>;
}
