use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Complete configuration for tagsync.
///
/// Everything lives under the `[repository]` table; CLI flags override any
/// value loaded here.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
}

/// Which repository to track and where the local checkout lives.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RepositoryConfig {
    /// Remote URL to resolve tags from and clone
    pub url: Option<String>,

    /// Local working-copy directory
    pub path: Option<PathBuf>,

    /// Remote name used for fetches in an existing checkout
    #[serde(default = "default_remote")]
    pub remote: String,
}

fn default_remote() -> String {
    "origin".to_string()
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            url: None,
            path: None,
            remote: default_remote(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagsync.toml` in current directory
/// 3. `.tagsync.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./tagsync.toml").exists() {
        fs::read_to_string("./tagsync.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".tagsync.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
