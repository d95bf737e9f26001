//! # ps-app
//!
//! Application layer for ParamSync: drives the recurring reconciliation
//! cycle against the device and propagates user edits back through the ports
//! defined in `ps-core`.

pub mod engine;

pub use engine::SyncEngine;
