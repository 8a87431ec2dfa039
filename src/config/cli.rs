use crate::app::profile::RouteProfile;
use crate::config::toml_config::ServiceConfig;
use crate::config::upstream::UpstreamTable;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "weather-units")]
#[command(about = "Serves upstream weather readings converted to the requested unit")]
pub struct CliConfig {
    #[arg(long, short, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Socket address to listen on, e.g. 127.0.0.1:5000")]
    pub bind: Option<String>,

    #[arg(long, value_enum, help = "Route layout to expose")]
    pub profile: Option<RouteProfile>,

    #[arg(
        long,
        help = "Serve every category from <base>/temp, <base>/pressure and <base>/pollutant"
    )]
    pub upstream_base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the file configuration (or defaults) and applies command-line overrides on top.
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(profile) = self.profile {
            config.server.profile = profile;
        }
        if let Some(base_url) = &self.upstream_base_url {
            let timeout_seconds = config.upstream.timeout_seconds;
            config.upstream = UpstreamTable {
                timeout_seconds,
                ..UpstreamTable::with_base_url(base_url)
            };
        }

        Ok(config)
    }
}
