use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::error::Result;

/// Optional config file looked up in the working directory
pub const CONFIG_FILE: &str = "csv-gateway.toml";
pub const ENV_PREFIX: &str = "CSV_GATEWAY_";

pub const SUMMARY_FILE: &str = "api_endpoints_with_summary.csv";
pub const DAILY_SUMMARY_FILE: &str = "api_endpoints_daily_summary.csv";

/// Fixed listen address; not configurable.
pub const BIND_HOST: &str = "0.0.0.0";
pub const PORT: u16 = 8005;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Directory holding both CSV files
    pub data_dir: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log_filter: "info".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Defaults, then `csv-gateway.toml`, then `CSV_GATEWAY_*` env vars.
    pub fn load() -> Result<Self> {
        Self::figment().extract().map_err(Into::into)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(GatewayConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn summary_path(&self) -> PathBuf {
        self.data_dir.join(SUMMARY_FILE)
    }

    pub fn daily_summary_path(&self) -> PathBuf {
        self.data_dir.join(DAILY_SUMMARY_FILE)
    }
}
