use crate::consts;
use crate::engine::{BoundaryMode, GridSize};
use crate::options::Options;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Settings for single games started with `run`
    #[serde(default)]
    pub options: Options,

    /// Settings for the autopilot sessions watched with `spectate`
    #[serde(default)]
    pub spectate: SpectateConfig,
}

impl Config {
    /// Return the default configuration file path
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                log::debug!(
                    "No configuration file at {}; using defaults",
                    path.display()
                );
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct SpectateConfig {
    pub grid_size: GridSize,

    /// How many ticks to advance every session by
    pub ticks: u64,

    /// The players whose autopilot games are shown
    pub players: Vec<PlayerConfig>,
}

impl Default for SpectateConfig {
    fn default() -> SpectateConfig {
        SpectateConfig {
            grid_size: GridSize::new(consts::SPECTATOR_GRID_SIZE).unwrap_or_default(),
            ticks: consts::DEFAULT_SPECTATE_TICKS,
            players: vec![
                PlayerConfig::new("LivePlayer1", BoundaryMode::Walls),
                PlayerConfig::new("LivePlayer2", BoundaryMode::Wrap),
                PlayerConfig::new("LivePlayer3", BoundaryMode::Walls),
            ],
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub mode: BoundaryMode,
}

impl PlayerConfig {
    pub fn new<S: Into<String>>(name: S, mode: BoundaryMode) -> PlayerConfig {
        PlayerConfig {
            name: name.into(),
            mode,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
