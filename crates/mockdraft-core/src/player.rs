// Player model: positions, projected values, and the built-in sample pool.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Football positions a player can be drafted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "K")]
    Kicker,
    #[serde(rename = "DEF")]
    Defense,
}

impl Position {
    /// All positions in display order.
    pub const ALL: [Position; 6] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
        Position::Kicker,
        Position::Defense,
    ];

    /// Parse a position string into a Position enum.
    ///
    /// Case-insensitive. Team defense is accepted as "DEF", "DST" or "D/ST".
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            "K" | "PK" => Some(Position::Kicker),
            "DEF" | "DST" | "D/ST" => Some(Position::Defense),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Kicker => "K",
            Position::Defense => "DEF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_str())
    }
}

/// A draftable player. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier within a player pool.
    pub id: String,
    pub name: String,
    pub position: Position,
    /// NFL team abbreviation (e.g. "CIN").
    pub team: String,
    /// Projected season points under PPR scoring.
    pub projected_ppr: f64,
    /// Average draft position.
    pub adp: f64,
}

impl Player {
    pub fn new(
        id: &str,
        name: &str,
        position: Position,
        team: &str,
        projected_ppr: f64,
        adp: f64,
    ) -> Self {
        Player {
            id: id.to_string(),
            name: name.to_string(),
            position,
            team: team.to_string(),
            projected_ppr,
            adp,
        }
    }
}

/// The small built-in pool used when no player file is configured.
pub fn sample_players() -> Vec<Player> {
    vec![
        Player::new("1", "J. Chase", Position::WideReceiver, "CIN", 352.96, 1.6),
        Player::new("2", "B. Robinson", Position::RunningBack, "ATL", 334.84, 3.2),
        Player::new("3", "J. Jefferson", Position::WideReceiver, "MIN", 322.02, 4.2),
        Player::new("4", "S. Barkley", Position::RunningBack, "PHI", 324.38, 3.5),
        Player::new("5", "J. Gibbs", Position::RunningBack, "DET", 317.64, 5.4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_pos_standard_positions() {
        assert_eq!(Position::from_str_pos("QB"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos("RB"), Some(Position::RunningBack));
        assert_eq!(Position::from_str_pos("WR"), Some(Position::WideReceiver));
        assert_eq!(Position::from_str_pos("TE"), Some(Position::TightEnd));
        assert_eq!(Position::from_str_pos("K"), Some(Position::Kicker));
        assert_eq!(Position::from_str_pos("DEF"), Some(Position::Defense));
    }

    #[test]
    fn from_str_pos_defense_aliases() {
        assert_eq!(Position::from_str_pos("DST"), Some(Position::Defense));
        assert_eq!(Position::from_str_pos("D/ST"), Some(Position::Defense));
    }

    #[test]
    fn from_str_pos_case_insensitive() {
        assert_eq!(Position::from_str_pos("qb"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos(" Wr "), Some(Position::WideReceiver));
    }

    #[test]
    fn from_str_pos_invalid() {
        assert_eq!(Position::from_str_pos("SS"), None);
        assert_eq!(Position::from_str_pos(""), None);
    }

    #[test]
    fn display_str_roundtrip() {
        for pos in Position::ALL {
            let s = pos.display_str();
            assert_eq!(Position::from_str_pos(s), Some(pos), "Roundtrip failed for {}", s);
        }
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("[{:<4}]", Position::RunningBack), "[RB  ]");
        assert_eq!(format!("[{:>4}]", Position::Defense), "[ DEF]");
        assert_eq!(Position::Kicker.to_string(), "K");
    }

    #[test]
    fn position_serializes_as_abbreviation() {
        #[derive(Serialize, Deserialize)]
        struct Row {
            pos: Position,
        }
        let text = toml::to_string(&Row { pos: Position::Defense }).unwrap();
        assert_eq!(text.trim(), "pos = \"DEF\"");

        let parsed: Row = toml::from_str("pos = \"WR\"").unwrap();
        assert_eq!(parsed.pos, Position::WideReceiver);
    }

    #[test]
    fn sample_players_have_unique_ids() {
        let players = sample_players();
        assert_eq!(players.len(), 5);
        let mut ids: Vec<&str> = players.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn sample_players_top_projection_is_chase() {
        let players = sample_players();
        let best = players
            .iter()
            .max_by(|a, b| a.projected_ppr.total_cmp(&b.projected_ppr))
            .unwrap();
        assert_eq!(best.name, "J. Chase");
        assert!((best.projected_ppr - 352.96).abs() < f64::EPSILON);
    }
}
