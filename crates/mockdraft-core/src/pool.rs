// Player pool loading.
//
// Reads a projections CSV with the columns `id,name,position,team,projected_ppr,adp`.
// Extra columns are ignored. The draft engine treats the result as an
// already-trusted list, so this loader only skips rows it cannot represent.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::player::{sample_players, Player, Position};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawPlayer {
    id: String,
    name: String,
    #[serde(alias = "pos")]
    position: String,
    #[serde(default)]
    team: String,
    #[serde(alias = "ppr", alias = "projectedPPR")]
    projected_ppr: f64,
    #[serde(alias = "ADP")]
    adp: f64,
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Parse players from any CSV reader. Malformed rows are logged and skipped.
pub fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayer>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
                continue;
            }
        };
        let Some(position) = Position::from_str_pos(&raw.position) else {
            warn!("skipping player '{}': unknown position '{}'", raw.name, raw.position);
            continue;
        };
        if !raw.projected_ppr.is_finite() || !raw.adp.is_finite() {
            warn!("skipping player '{}': non-finite projection or ADP", raw.name);
            continue;
        }
        players.push(Player {
            id: raw.id,
            name: raw.name,
            position,
            team: raw.team,
            projected_ppr: raw.projected_ppr,
            adp: raw.adp,
        });
    }
    Ok(players)
}

/// Load players from a CSV file on disk.
pub fn load_players_csv(path: &Path) -> Result<Vec<Player>, PoolError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| PoolError::Io {
        path: display.clone(),
        source: e,
    })?;
    load_players_from_reader(file).map_err(|e| PoolError::Csv {
        path: display,
        source: e,
    })
}

/// Resolve the starting pool: the configured CSV if one is set, otherwise the
/// built-in sample players.
pub fn load_pool(players_path: Option<&str>) -> Result<Vec<Player>, PoolError> {
    match players_path {
        Some(path) => {
            let players = load_players_csv(Path::new(path))?;
            info!("Loaded {} players from {}", players.len(), path);
            Ok(players)
        }
        None => {
            let players = sample_players();
            info!("No player file configured; using {} sample players", players.len());
            Ok(players)
        }
    }
}
