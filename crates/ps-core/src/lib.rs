//! # ps-core
//!
//! Core domain models and business logic for ParamSync.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod cache;
pub mod config;
pub mod fault;
pub mod param;
pub mod ports;
pub mod scenario;
pub mod snapshot;

// Re-export commonly used types at the crate root
pub use cache::ParameterCache;
pub use config::SyncConfig;
pub use fault::SyncFault;
pub use param::{Mode, ParamName, UnknownModeValue};
pub use scenario::ScenarioEntry;
pub use snapshot::SyncSnapshot;
