// League configuration (league.toml).
//
// Lookup order relative to the base directory:
//   config/league.toml    local overrides
//   defaults/league.toml  the shipped league
// With neither present the built-in 12-team, 14-round league is used.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::draft::state::{DraftSettings, SettingsError};

const LEAGUE_FILE: &str = "league.toml";
const SEARCH_DIRS: [&str; 2] = ["config", "defaults"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{path}: {source}")]
    Invalid {
        path: PathBuf,
        source: SettingsError,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub league: LeagueConfig,
    #[serde(default)]
    pub data: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    pub num_teams: usize,
    pub rounds: u32,
    #[serde(default = "default_user_team_name")]
    pub user_team_name: String,
}

/// Where player data comes from. With no `players` path the built-in sample
/// pool is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataPaths {
    pub players: Option<String>,
}

fn default_user_team_name() -> String {
    DraftSettings::default().user_team_name
}

impl Default for Config {
    fn default() -> Self {
        let settings = DraftSettings::default();
        Config {
            league: LeagueConfig {
                name: "Mock Draft".to_string(),
                num_teams: settings.num_teams,
                rounds: settings.rounds,
                user_team_name: settings.user_team_name,
            },
            data: DataPaths::default(),
        }
    }
}

impl Config {
    /// Draft shape for constructing a `DraftEngine`.
    pub fn draft_settings(&self) -> DraftSettings {
        DraftSettings {
            num_teams: self.league.num_teams,
            rounds: self.league.rounds,
            user_team_name: self.league.user_team_name.clone(),
        }
    }
}

/// Parse league TOML and check that it describes a playable draft. `path` is
/// only used for error messages.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config
        .draft_settings()
        .validate()
        .map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(config)
}

/// The league file that `load_config_from` would read, if any.
pub fn find_league_file(base_dir: &Path) -> Option<PathBuf> {
    SEARCH_DIRS
        .iter()
        .map(|dir| base_dir.join(dir).join(LEAGUE_FILE))
        .find(|path| path.exists())
}

/// Load the league relative to `base_dir`, falling back to the built-in
/// league when no file is present. A file that exists but fails to read,
/// parse or validate is an error, not a fallback.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let Some(path) = find_league_file(base_dir) else {
        info!(
            "No {} under {}; using the built-in league",
            LEAGUE_FILE,
            base_dir.display()
        );
        return Ok(Config::default());
    };

    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&text, &path)?;
    info!("League loaded from {}", path.display());
    Ok(config)
}

/// `load_config_from` the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|source| ConfigError::Read {
        path: PathBuf::from("."),
        source,
    })?;
    load_config_from(&cwd)
}
