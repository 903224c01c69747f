use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory (relative to the working directory) images are saved into.
pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";

/// Connect timeout and longest tolerated transfer stall, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_USER_AGENT: &str =
    "UbuntuImageFetcher/1.0 (+https://github.com/your-username/Ubuntu_Requests)";

/// Optional configuration read from `~/.config/imgfetch/config.toml`.
/// Every field may be omitted; missing fields take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Where saved images (and the files seeding the duplicate index) live.
    pub output_dir: PathBuf,
    /// Connect timeout and longest stretch a transfer may go without receiving
    /// data, in seconds. A slow but steady download is never cut off.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Location of the user config file, if one exists. Never creates anything.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load the user config if present, otherwise the defaults.
pub fn load_or_default() -> Result<FetcherConfig> {
    match config_path()? {
        Some(path) => {
            let cfg = load_from(&path)?;
            tracing::info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        None => Ok(FetcherConfig::default()),
    }
}

/// Load configuration from an explicit TOML file.
pub fn load_from(path: &Path) -> Result<FetcherConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetcherConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
