#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{CleanerError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const CONFIG_FILE_NAME: &str = "freshrss-cleaner.yaml";

/// Template written by `create-config`.
pub const DEFAULT_CONFIG: &str = r#"# FreshRSS cleaner configuration.
# Values may reference environment variables with env("VAR_NAME").
url: "https://<your-freshrss-instance>/api/greader.php"
username: "env("FRESHRSS_USERNAME")"
password: "env("FRESHRSS_PASSWORD")"
feeds:
  - id: "feed/1"
    days: 7
"#;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"env\("([^"]+)"\)"#).unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub feeds: Vec<FeedConfig>,
}

/// A feed entry with a missing key falls back to an empty id or 0 days; an
/// empty id is rejected per feed when the cleaner runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub id: String,
    pub days: u32,
}

impl RootConfig {
    /// Parses a YAML document after resolving `env("VAR")` placeholders.
    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        serde_yaml::from_str(&processed_content).map_err(|e| CleanerError::ParseError {
            path: origin.to_string(),
            source: e,
        })
    }
}

/// Replaces every `env("VAR_NAME")` with the value of `VAR_NAME`, or an
/// empty string when the variable is not set.
pub fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(content, |caps: &Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}

/// Loads the configuration file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<RootConfig> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(CleanerError::config("config path cannot be empty"));
    }

    let content = fs::read_to_string(path).map_err(|e| CleanerError::IoError {
        message: format!("failed to read config file {}", path.display()),
        source: e,
    })?;

    let config = RootConfig::from_yaml_str(&content, &path.display().to_string())?;
    tracing::debug!(
        "Loaded config from {} with {} feed(s)",
        path.display(),
        config.feeds.len()
    );

    Ok(config)
}

/// `<user config dir>/freshrss-cleaner.yaml`, or the bare file name when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir().unwrap_or_default().join(CONFIG_FILE_NAME)
}

/// Writes [`DEFAULT_CONFIG`] to `path` unless a file is already there.
pub fn create_default_config_file<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.exists() {
        tracing::debug!("Config file already exists at {}", path.display());
        return Ok(path.to_path_buf());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CleanerError::IoError {
            message: format!("failed to create config directory {}", parent.display()),
            source: e,
        })?;
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| CleanerError::IoError {
        message: format!("failed to create default config file {}", path.display()),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            CleanerError::IoError {
                message: format!("failed to restrict permissions on {}", path.display()),
                source: e,
            }
        })?;
    }

    Ok(path.to_path_buf())
}
