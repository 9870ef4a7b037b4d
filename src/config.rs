use std::{
    env, io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use glyphpack::DEFAULT_MAX_GRID;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static CONFIG_FILENAME: &str = "lettergrid.toml";

const MAX_CELL_SIZE: u32 = 512;
const MAX_MARGIN: u32 = 4096;

/// Configuration for lettergrid, contained in a lettergrid.toml file.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// The largest width or height, in cells, that the packer may try.
    #[serde(default = "default_max_grid")]
    pub max_grid: u32,

    /// Settings for exported images.
    #[serde(default)]
    pub render: RenderConfig,

    /// The path that this config came from, if it was read from disk.
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// The width and height of a single grid cell, in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Blank space around the edge of the image, in pixels.
    #[serde(default = "default_margin")]
    pub margin: u32,

    /// Changes which color each letter is drawn in.
    #[serde(default)]
    pub palette_seed: u64,
}

impl Config {
    /// Finds the config to use for this run.
    ///
    /// An explicitly given path must exist. Without one, the current
    /// directory is searched and a missing file falls back to the defaults.
    pub fn locate(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::read_from_folder_or_file(path);
        }

        let current_dir = env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?;

        match Self::read_from_folder(&current_dir) {
            Ok(config) => Ok(config),
            Err(err) if err.is_not_found() => {
                log::trace!("No {} found, using defaults", CONFIG_FILENAME);
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    pub fn read_from_folder_or_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let meta = fs::metadata(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        if meta.is_file() {
            Self::read_from_file(path)
        } else {
            Self::read_from_folder(path)
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, ConfigError> {
        let folder_path = folder_path.as_ref();
        let file_path = &folder_path.join(CONFIG_FILENAME);

        Self::read_from_file(file_path)
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        let mut config: Self = toml::from_slice(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        config.file_path = Some(path.to_owned());
        config.validate()?;

        log::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::Invalid {
            path: self.file_path.clone().unwrap_or_default(),
            message: message.to_owned(),
        };

        if self.max_grid == 0 {
            return Err(invalid("max-grid must be at least 1"));
        }

        if self.render.cell_size < 2 {
            return Err(invalid("render.cell-size must be at least 2"));
        }

        if self.render.cell_size > MAX_CELL_SIZE {
            return Err(invalid("render.cell-size must be at most 512"));
        }

        if self.render.margin > MAX_MARGIN {
            return Err(invalid("render.margin must be at most 4096"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_grid: default_max_grid(),
            render: RenderConfig::default(),
            file_path: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            margin: default_margin(),
            palette_seed: 0,
        }
    }
}

fn default_max_grid() -> u32 {
    DEFAULT_MAX_GRID
}

fn default_cell_size() -> u32 {
    24
}

fn default_margin() -> u32 {
    16
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} in {}", source, path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{} in {}", source, path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{} in {}", message, path.display())]
    Invalid { path: PathBuf, message: String },
}

impl ConfigError {
    /// Tells whether this ConfigError originated because of a path not
    /// existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
