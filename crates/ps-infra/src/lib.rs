//! # ps-infra
//!
//! Infrastructure adapters for ParamSync: concrete HTTP implementations of
//! the ports defined in `ps-core`.

pub mod http;

pub use http::{AnalyticsEndpoint, DeviceEndpoint, HttpCatalogPort, HttpParameterPort};
