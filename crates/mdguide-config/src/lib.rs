use mdguide_engine::{RuleId, ValidationOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "mdguide.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid glob pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Glob patterns, relative to an input directory, selecting guides.
    pub include: Vec<String>,
    /// Glob patterns, relative to an input directory, removing guides.
    pub exclude: Vec<String>,
    /// Where `build` writes HTML. Shell variables and `~` are expanded.
    pub out_dir: Option<PathBuf>,
    pub parallel: bool,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Rule ids to switch off, e.g. `code-language`.
    pub disabled: Vec<RuleId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include: vec!["**/*.md".to_string()],
            exclude: vec![],
            out_dir: None,
            parallel: true,
            rules: RulesConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.out_dir = config
            .out_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        log::debug!("loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    /// Finds the effective config.
    ///
    /// An explicit path must exist. Otherwise `./mdguide.toml` wins over the
    /// user config, and defaults apply when neither exists.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path)?
                .ok_or_else(|| ConfigError::NotFound(path.to_path_buf()));
        }
        for candidate in [cwd.join(LOCAL_CONFIG_FILE), Self::config_path()] {
            if let Some(config) = Self::load_from_path(&candidate)? {
                return Ok(config);
            }
        }
        log::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mdguide");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions::with_disabled(self.rules.disabled.iter().copied())
    }

    /// Expands `include` under `root`, drops `exclude` matches, and returns
    /// the files sorted and deduplicated.
    pub fn resolve_inputs(&self, root: &Path) -> Result<Vec<PathBuf>, ConfigError> {
        let excludes = self
            .exclude
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>, _>>()?;

        // Brackets or stars in the directory name itself must match literally.
        let base = PathBuf::from(glob::Pattern::escape(&root.to_string_lossy()));

        let mut files = Vec::new();
        for pattern in &self.include {
            let full = base.join(pattern);
            let full = full.to_string_lossy();
            let entries = glob::glob(&full).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() => {
                        let rel = path.strip_prefix(root).unwrap_or(&path);
                        if !excludes.iter().any(|ex| ex.matches_path(rel)) {
                            files.push(path);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => log::warn!("skipping unreadable path: {e}"),
                }
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

fn compile(pattern: &str) -> Result<glob::Pattern, ConfigError> {
    glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
