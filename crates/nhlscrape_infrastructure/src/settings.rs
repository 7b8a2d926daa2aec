use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Http {
    pub user_agent: String,

    // No timeout when absent: a hung request blocks until the peer gives up.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: String,
    pub logger: Logger,
    pub http: Http,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        };

        let builder = Config::builder()
            .set_default("environment", config)?
            .set_default("logger.level", "info")?
            .set_default("http.user_agent", concat!("nhlscrape/", env!("CARGO_PKG_VERSION")))?
            .add_source(File::with_name(&format!("config/{config}")).required(false))
            .add_source(
                Environment::with_prefix("NHLSCRAPE")
                    .prefix_separator("__")
                    .separator("__"),
            );

        builder
            .build()?
            // Deserialize (and thus freeze) the entire configuration.
            .try_deserialize()
    }
}

impl Http {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
