use crate::api::DEFAULT_TIMEOUT;
use crate::core::endpoint::{build_time_default, normalize_base_url};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL, e.g. `http://192.168.1.6:5000`
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Amount pre-filled in a scan session
    #[serde(default = "default_amount")]
    pub default_amount: String,
    /// Ring the terminal bell on every accepted scan
    #[serde(default = "default_bell")]
    pub bell: bool,
    /// Give up on a backend request after this many seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_server_url() -> String {
    build_time_default().to_string()
}
fn default_amount() -> String {
    "1".to_string()
}
fn default_bell() -> bool {
    true
}
fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            default_amount: default_amount(),
            bell: default_bell(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            env::var_os("APPDATA").map(PathBuf::from)
        } else {
            env::var_os("HOME").map(PathBuf::from)
        };

        let base = base
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("invscan")
        } else {
            base.join(".invscan")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("invscan.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), server_url = %cfg.server_url, "configuration loaded");
        Ok(cfg)
    }

    /// Write the configuration file, creating the directory if needed
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        tracing::debug!(path = %Self::config_file().display(), "configuration saved");
        Ok(())
    }

    /// Initialize the configuration file.
    /// An existing file is kept as-is; in test mode nothing is written.
    pub fn init_all(server_url: Option<&str>, is_test: bool) -> AppResult<Self> {
        let mut config = Self::load()?;

        if let Some(url) = server_url {
            config.server_url =
                normalize_base_url(url).ok_or_else(|| AppError::InvalidServerUrl(url.to_string()))?;
        }

        if is_test {
            return Ok(config);
        }

        if Self::config_file().exists() && server_url.is_none() {
            return Ok(config);
        }

        config.save()?;
        Ok(config)
    }
}
