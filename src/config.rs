use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::generator::{ContentType, GeneratorRequest, UnitType};

pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write settings to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persisted generator settings. Missing fields take their defaults, so an
/// old or hand-edited file merges over [`Settings::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_count")]
    pub count: i64,
    #[serde(default)]
    pub unit: UnitType,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub include_html: bool,
}

fn default_count() -> i64 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: default_count(),
            unit: UnitType::default(),
            content_type: ContentType::default(),
            include_html: false,
        }
    }
}

impl Settings {
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no saved settings, using defaults");
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(write_err)?;

        let mut file = NamedTempFile::new_in(parent).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.as_file().sync_all().map_err(write_err)?;
        file.persist(path).map_err(|persist| write_err(persist.error))?;

        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    pub fn settings_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("loremgen")
            .join("settings.toml")
    }

    /// Clamp `count` into the range the front end accepts.
    pub fn normalize(&mut self) {
        self.count = self.count.clamp(MIN_COUNT, MAX_COUNT);
    }

    pub fn request(&self) -> GeneratorRequest {
        GeneratorRequest::new(
            self.count.max(0) as usize,
            self.unit,
            self.content_type,
            self.include_html,
        )
    }
}
