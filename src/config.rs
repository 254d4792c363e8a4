use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::patch::{DEFAULT_TARGET, PatchSpec};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default file to patch when the CLI does not name one.
    pub target: Option<PathBuf>,
    /// Override for the built-in fragment pattern.
    pub pattern: Option<String>,
    /// Override for the built-in replacement text.
    pub replacement: Option<String>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("mdpatch"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Config path has no parent directory"))?;

        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&path, &content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// The file to patch: configured target, or `APP_BLUEPRINT.md` relative
    /// to the current working directory.
    pub fn target_path(&self) -> PathBuf {
        self.target
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
    }

    /// Build the patch spec, falling back to the built-in pattern and
    /// replacement for unset fields.
    pub fn patch_spec(&self) -> PatchSpec {
        let defaults = PatchSpec::default();
        PatchSpec {
            pattern: self.pattern.clone().unwrap_or(defaults.pattern),
            replacement: self.replacement.clone().unwrap_or(defaults.replacement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{DEFAULT_PATTERN, DEFAULT_REPLACEMENT};

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::default();
        assert_eq!(config.target_path(), PathBuf::from("APP_BLUEPRINT.md"));

        let spec = config.patch_spec();
        assert_eq!(spec.pattern, DEFAULT_PATTERN);
        assert_eq!(spec.replacement, DEFAULT_REPLACEMENT);
    }

    #[test]
    fn test_overrides_win() {
        let config = Config {
            target: Some(PathBuf::from("notes/SPEC.md")),
            pattern: Some("foo".to_string()),
            replacement: Some("bar".to_string()),
        };
        assert_eq!(config.target_path(), PathBuf::from("notes/SPEC.md"));

        let spec = config.patch_spec();
        assert_eq!(spec.pattern, "foo");
        assert_eq!(spec.replacement, "bar");
    }
}
