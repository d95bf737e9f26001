//! HTTP adapters for the device parameter store and the analytics service.
mod catalog_client;
mod param_client;

pub use catalog_client::{AnalyticsEndpoint, HttpCatalogPort};
pub use param_client::{DeviceEndpoint, HttpParameterPort};
