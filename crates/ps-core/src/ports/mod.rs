//! Port interfaces for the application layer.
//!
//! Ports define the contract between the sync engine and infrastructure
//! implementations, keeping the core business logic independent of the
//! concrete device transport and of any presentation layer.

pub mod errors;
mod remote_parameter;
mod scenario_catalog;
mod ui_projection;

pub use errors::{CatalogFetchError, RemoteReadError, RemoteWriteError};
pub use remote_parameter::RemoteParameterPort;
pub use scenario_catalog::ScenarioCatalogPort;
pub use ui_projection::UiProjectionPort;
