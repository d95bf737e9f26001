//! Parameter synchronization engine.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, error, info, warn};
use tokio::time::sleep;

use ps_core::fault::SyncFault;
use ps_core::param::{Mode, ParamName, UnknownModeValue};
use ps_core::ports::{
    CatalogFetchError, RemoteParameterPort, ScenarioCatalogPort, UiProjectionPort,
};
use ps_core::{ParameterCache, SyncConfig};

/// Orchestrates periodic reconciliation and user-triggered writes.
///
/// The engine exclusively owns the [`ParameterCache`]; the UI projection only
/// ever sees read-only snapshots. Cycles never overlap: the next cycle is
/// scheduled only after the current one fully settles, so the cache needs no
/// locking. Within a cycle, all parameter reads and the catalog fetch are
/// issued together and settled together, so one slow or failing read never
/// blocks the others.
pub struct SyncEngine<R, C, U>
where
    R: RemoteParameterPort,
    C: ScenarioCatalogPort,
    U: UiProjectionPort,
{
    cache: ParameterCache,
    remote: Arc<R>,
    catalog: Arc<C>,
    ui: Arc<U>,
    interval: Duration,
}

impl<R, C, U> SyncEngine<R, C, U>
where
    R: RemoteParameterPort,
    C: ScenarioCatalogPort,
    U: UiProjectionPort,
{
    pub fn new(config: &SyncConfig, remote: Arc<R>, catalog: Arc<C>, ui: Arc<U>) -> Self {
        Self {
            cache: ParameterCache::new(),
            remote,
            catalog,
            ui,
            interval: config.interval(),
        }
    }

    pub fn cache(&self) -> &ParameterCache {
        &self.cache
    }

    /// Polling loop: await cycle completion, then sleep, then repeat.
    ///
    /// Polling never stops because a cycle had partial failures; the only
    /// termination condition is dropping the task running this future.
    pub async fn run(&mut self) {
        loop {
            self.reconcile().await;
            debug!("next reconciliation in {:?}", self.interval);
            sleep(self.interval).await;
        }
    }

    /// One full reconciliation cycle.
    ///
    /// Fan-out: one read per tracked parameter plus the catalog fetch, issued
    /// concurrently. Fan-in: the cycle proceeds only after all have settled.
    /// Successful outcomes update the cache; failed ones leave the prior
    /// value untouched and raise an operator-visible alert.
    pub async fn reconcile(&mut self) {
        let reads = join_all(
            ParamName::ALL
                .iter()
                .map(|&name| self.remote.read_parameter(name)),
        );
        let (reads, catalog) = tokio::join!(reads, self.catalog.fetch_catalog());

        for (name, outcome) in ParamName::ALL.into_iter().zip(reads) {
            match outcome {
                Ok(value) => self.cache.set(name, value),
                Err(err) => {
                    self.raise(SyncFault::ReadFailed {
                        name,
                        reason: err.to_string(),
                    })
                    .await;
                }
            }
        }

        match catalog {
            Ok(entries) => self.cache.set_scenarios(entries),
            // Documented recovery policy: a well-formed response without
            // data.scenarios means the catalog is empty.
            Err(CatalogFetchError::MissingScenarios) => {
                warn!("catalog response missing data.scenarios, treating as empty");
                self.cache.set_scenarios(Vec::new());
            }
            Err(err) => {
                self.raise(SyncFault::CatalogFailed {
                    reason: err.to_string(),
                })
                .await;
            }
        }

        let enabled = self.client_config_enabled().await;
        if let Err(err) = self.ui.apply_snapshot(self.cache.snapshot(enabled)).await {
            warn!("ui projection rejected snapshot: {err:#}");
        }
    }

    /// User-triggered edit of one parameter: optimistic write-through.
    ///
    /// On success the cache reflects the edit immediately, without waiting
    /// for the next cycle. On failure the cache is left untouched; the next
    /// cycle re-establishes the true remote value, which may visibly revert
    /// the optimistic display.
    pub async fn submit_edit(&mut self, name: ParamName, value: &str) {
        match self.remote.write_parameter(name, value).await {
            Ok(()) => {
                info!("set {name} to {value}");
                self.cache.set(name, value);
            }
            Err(err) => {
                self.raise(SyncFault::WriteFailed {
                    name,
                    reason: err.to_string(),
                })
                .await;
            }
        }
    }

    /// User-triggered mode change.
    ///
    /// Dependent-field visibility follows the *requested* mode immediately,
    /// before the write confirms; if the write later fails, the next cycle
    /// corrects it rather than a synchronous rollback. An unrecognized value
    /// is alerted and falls back to disabled visibility, but the write is
    /// still attempted and reconciliation settles the outcome.
    pub async fn submit_mode(&mut self, raw: &str) {
        match raw.parse::<Mode>() {
            Ok(mode) => self.set_visibility(mode.is_client()).await,
            Err(UnknownModeValue(value)) => {
                self.raise(SyncFault::UnknownMode { raw: value }).await;
                self.set_visibility(false).await;
            }
        }

        self.submit_edit(ParamName::Mode, raw).await;
    }

    /// Derive the client-only field visibility from the cached mode.
    ///
    /// Absent mode means "not yet synchronized" and an unrecognized value is
    /// alerted; both fall back to disabled, and neither aborts the cycle.
    async fn client_config_enabled(&self) -> bool {
        let Some(raw) = self.cache.get(ParamName::Mode) else {
            return false;
        };

        match raw.parse::<Mode>() {
            Ok(mode) => mode.is_client(),
            Err(UnknownModeValue(value)) => {
                self.raise(SyncFault::UnknownMode { raw: value }).await;
                false
            }
        }
    }

    async fn set_visibility(&self, enabled: bool) {
        if let Err(err) = self.ui.set_client_config_enabled(enabled).await {
            warn!("ui projection rejected visibility update: {err:#}");
        }
    }

    async fn raise(&self, fault: SyncFault) {
        error!("{fault}");
        if let Err(err) = self.ui.alert(fault).await {
            warn!("failed to deliver alert: {err:#}");
        }
    }
}
