pub mod toml_config;
pub mod upstream;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::ServiceConfig;
pub use upstream::{UpstreamEndpoint, UpstreamTable};
