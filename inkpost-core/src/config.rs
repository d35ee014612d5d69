//! Configuration parsing and management.

use crate::excerpt::ExcerptOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "inkpost.yml";

/// Smallest `max_length` that leaves room for text before the ellipsis.
pub const MIN_MAX_LENGTH: usize = 4;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration struct matching the inkpost.yml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub excerpt: ExcerptOptions,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    /// Regexes matched against paths relative to the posts directory
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public root URL, e.g. "https://blog.example.com"
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_posts_dir")]
    pub posts: PathBuf,
}

fn default_posts_dir() -> PathBuf {
    PathBuf::from("posts")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            posts: default_posts_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = if contents.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(contents)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::from_file`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        tracing::debug!("No config at {:?}, using defaults", path);
        Ok(Self {
            config_path: Some(path.to_path_buf()),
            ..Self::default()
        })
    }

    /// Reject excerpt settings the pipeline cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let excerpt = &self.excerpt;
        if excerpt.max_length < MIN_MAX_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "excerpt.max_length must be at least {MIN_MAX_LENGTH}, got {}",
                excerpt.max_length
            )));
        }
        if excerpt.max_paragraphs == 0 {
            return Err(ConfigError::Invalid(
                "excerpt.max_paragraphs must be at least 1".to_string(),
            ));
        }
        if excerpt.placeholder.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "excerpt.placeholder must not be blank".to_string(),
            ));
        }
        if excerpt.short_paragraph_threshold == 0 {
            return Err(ConfigError::Invalid(
                "excerpt.short_paragraph_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the posts directory, resolved relative to config file
    pub fn posts_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.posts)
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }
}
