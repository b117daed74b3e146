// Command-line interface (clap derive)

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(name = "camstats")]
#[command(about = "Poll camera endpoints and report which cameras hold the most image data")]
#[command(version)]
pub struct Cli {
    /// Comma separated list of camera IDs to poll, e.g. 1,2,3
    // Fully qualified so clap does not treat the flag as repeatable.
    #[arg(long, value_name = "INT_CSV", value_parser = parse_camera_list)]
    pub cameras: Option<::std::vec::Vec<i64>>,

    /// Timeout in seconds for each camera request
    #[arg(long, value_name = "T")]
    pub timeout: Option<u64>,

    /// Base URL of the camera endpoint; cameras are read from <BASE_URL>/<ID>
    #[arg(long)]
    pub base_url: Option<String>,

    /// Use simulated camera payloads instead of HTTP requests
    #[arg(long)]
    pub simulate: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML config file (defaults to $CONFIG_FILE, then ./camstats.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            cameras: self.cameras.clone(),
            simulate: self.simulate,
        }
    }
}

/// Parses "1,2,3" into camera ids. Empty input or any non-integer element is rejected.
pub fn parse_camera_list(s: &str) -> Result<Vec<i64>, String> {
    if s.trim().is_empty() {
        return Err(format!("{s:?} is not an integer csv list"));
    }
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| format!("{s:?} is not an integer csv list"))
        })
        .collect()
}
