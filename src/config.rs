use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "camstats.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
    pub polling: PollingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Camera payloads are fetched from `{base_url}/{camera_id}`.
    pub base_url: String,
    /// Per-request timeout; a camera that exceeds it is skipped.
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://domain.com/camera".into(),
            timeout_secs: 10,
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub cameras: Vec<i64>,
    /// Use random payloads instead of the HTTP endpoint.
    pub simulate: bool,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub cameras: Option<Vec<i64>>,
    pub simulate: bool,
}

impl AppConfig {
    /// Reads `CONFIG_FILE`, or `camstats.toml` when present; defaults otherwise.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_path(DEFAULT_CONFIG_PATH)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line values and re-validates. The merged camera list must be non-empty.
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> anyhow::Result<Self> {
        if let Some(base_url) = overrides.base_url {
            self.endpoint.base_url = base_url;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.endpoint.timeout_secs = timeout_secs;
        }
        if let Some(cameras) = overrides.cameras {
            self.polling.cameras = cameras;
        }
        self.polling.simulate |= overrides.simulate;

        self.validate()?;
        anyhow::ensure!(
            !self.polling.cameras.is_empty(),
            "polling.cameras must list at least one camera id (or pass --cameras)"
        );
        Ok(self)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let base_url = &self.endpoint.base_url;
        anyhow::ensure!(
            !base_url.is_empty(),
            "endpoint.base_url must be non-empty"
        );
        anyhow::ensure!(
            base_url.starts_with("http://") || base_url.starts_with("https://"),
            "endpoint.base_url must start with http:// or https://, got {}",
            base_url
        );
        anyhow::ensure!(
            self.endpoint.timeout_secs > 0,
            "endpoint.timeout_secs must be > 0, got {}",
            self.endpoint.timeout_secs
        );
        Ok(())
    }
}
