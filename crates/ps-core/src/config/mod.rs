//! Engine configuration model.
mod sync_config;

pub use sync_config::SyncConfig;
