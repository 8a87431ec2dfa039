pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpGateway;
pub use app::{build_router, profile::RouteProfile, router, serve};
pub use config::{ServiceConfig, UpstreamTable};
pub use crate::core::{convert, service::MeasurementService, validate_units};
pub use domain::model::{Category, ConversionResult, Reading, Unit};
pub use utils::error::{Result, ServiceError};
