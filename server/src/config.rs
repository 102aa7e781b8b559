use anyhow::Context;
use guardian_core::config::SuggesterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

/// Daemon configuration: the listen address plus the pipeline settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub http_addr: Option<SocketAddr>,
    /// Settings handed to the suggestion pipeline.
    #[serde(default)]
    pub suggester: SuggesterConfig,
}

impl AppConfig {
    /// Loads the daemon config from a file if it exists, otherwise returns
    /// the default config
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}

/// Address used when neither the config file nor the CLI names one.
pub fn default_http_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}
