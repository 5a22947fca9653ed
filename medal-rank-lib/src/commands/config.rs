use crate::Result;
use crate::medals::{DEFAULT_LIMIT, RetryPolicy};
use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "medals.toml";

/// Upper bound on `retries`, to keep a broken source from stalling the tool.
const MAX_RETRIES: u32 = 10;

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// URL of the medal data
    #[serde(default = "default_source")]
    pub source: String,

    /// Metric to rank by; unrecognized values fall back to gold
    #[serde(default)]
    pub sort: Option<String>,

    /// Number of rows to show
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Retries after a failed fetch
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Pause between retries
    #[serde(default, with = "humantime_serde")]
    pub retry_delay: Duration,

    /// Timeout for a single request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

fn default_source() -> String {
    "http://localhost:3000/medals.json".to_string()
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

const fn default_retries() -> u32 {
    crate::medals::DEFAULT_MAX_RETRIES
}

const fn default_request_timeout() -> Duration {
    crate::medals::DEFAULT_REQUEST_TIMEOUT
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicitly named file must exist. Without one, `medals.toml` in `base_dir` is used
    /// when present, otherwise the defaults apply.
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).with_context(|| format!("reading medal-rank configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // No config file found, use defaults
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).with_context(|| format!("reading medal-rank configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).with_context(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate().with_context(|| format!("validating configuration file '{final_path}'"))?;

        log::debug!("Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).with_context(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.retries,
            delay: self.retry_delay,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.source).with_context(|| format!("source '{}' is not a valid URL", self.source))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("source must be an http or https URL, got '{}'", self.source);
        }

        if self.retries > MAX_RETRIES {
            bail!("retries must be at most {MAX_RETRIES}, got {}", self.retries);
        }

        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than zero");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
