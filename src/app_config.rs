use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Override for the Podcasts group container location
    #[serde(default)]
    pub library_container: Option<PathBuf>,

    /// Export behavior
    #[serde(default)]
    pub export: ExportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_container: None,
            export: ExportConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration after loading and CLI overrides.
    pub fn validate(&self) -> Result<()> {
        if let Some(container) = &self.library_container {
            if !container.is_dir() {
                return Err(anyhow!(
                    "Configured library container is not a directory: {:?}",
                    container
                ));
            }
        }

        if self.export.max_title_chars == 0 {
            return Err(anyhow!("max_title_chars must be greater than zero"));
        }
        if self.export.max_author_chars == 0 {
            return Err(anyhow!("max_author_chars must be greater than zero"));
        }

        Ok(())
    }
}

/// Export behavior configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportConfig {
    /// Copy media files alongside the converted transcripts
    #[serde(default = "default_copy_media")]
    pub copy_media: bool,

    /// Keep a copy of the raw transcript document beside its conversions
    #[serde(default = "default_keep_transcript_source")]
    pub keep_transcript_source: bool,

    /// Maximum episode-title characters used in destination file names
    #[serde(default = "default_max_title_chars")]
    pub max_title_chars: usize,

    /// Maximum author characters used in destination file names
    #[serde(default = "default_max_author_chars")]
    pub max_author_chars: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            copy_media: default_copy_media(),
            keep_transcript_source: default_keep_transcript_source(),
            max_title_chars: default_max_title_chars(),
            max_author_chars: default_max_author_chars(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_copy_media() -> bool {
    true
}

fn default_keep_transcript_source() -> bool {
    true
}

fn default_max_title_chars() -> usize {
    140
}

fn default_max_author_chars() -> usize {
    100
}
