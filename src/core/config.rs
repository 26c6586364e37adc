//! Configuration module for namegrind
//!
//! Holds user defaults for output settings.
//! Configuration is stored in `~/.config/namegrind/config.toml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::hash::HashMode;

/// Environment variable overriding the configured hash mode
pub const HASH_ENV_VAR: &str = "NAMEGRIND_HASH";

const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output-specific settings
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Hash applied to every entry: "none", "md5" or "sha1"
    pub hash: String,

    /// Suppress the summary line after writing
    pub quiet: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            hash: HashMode::None.to_string(),
            quiet: false,
        }
    }
}

impl Config {
    /// Load configuration from `path`
    /// Falls back to defaults if the file is missing or unparsable
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content).unwrap_or_else(|e| {
            log::warn!(
                "Failed to parse {}: {}. Using defaults.",
                path.display(),
                e
            );
            Config::default()
        });
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = Self::generate_config_with_comments(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Generate TOML content with helpful comments
    fn generate_config_with_comments(config: &Config) -> Result<String> {
        let toml_content = toml::to_string_pretty(config)?;

        let header = r#"# namegrind configuration
#
# Defaults applied when the matching command-line flag is not given.
#
# [output]
#   hash  = "none" | "md5" | "sha1"   (NAMEGRIND_HASH overrides this)
#   quiet = true                      suppresses the summary line

"#;

        Ok(format!("{}{}", header, toml_content))
    }

    /// Resolve the effective hash mode
    /// Priority: argument > environment variable > config file
    pub fn resolve_hash(&self, arg_hash: Option<&str>) -> Result<HashMode> {
        let env_hash = std::env::var(HASH_ENV_VAR).ok();
        self.resolve_hash_with_env(arg_hash, env_hash.as_deref())
    }

    fn resolve_hash_with_env(&self, arg_hash: Option<&str>, env_hash: Option<&str>) -> Result<HashMode> {
        let name = arg_hash.or(env_hash).unwrap_or(self.output.hash.as_str());
        Ok(name.parse::<HashMode>()?)
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let base_dirs = directories::BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("Unable to determine user directories"))?;

        Ok(base_dirs.config_dir().join("namegrind").join(CONFIG_FILE))
    }
}
