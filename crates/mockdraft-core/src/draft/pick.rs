// Individual pick representation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// A single completed draft selection. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    /// Round the pick was made in (1-indexed).
    pub round: u32,
    /// Position of the pick within its round (1-indexed).
    pub pick: u32,
    /// Index of the team that made the pick.
    pub team_idx: usize,
    /// The selected player, shared with the team's roster.
    pub player: Arc<Player>,
}

impl DraftPick {
    /// Overall pick number across the whole draft (1-indexed).
    pub fn overall(&self, num_teams: usize) -> usize {
        (self.round as usize - 1) * num_teams + self.pick as usize
    }
}

impl fmt::Display for DraftPick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02} {} ({}, {})",
            self.round, self.pick, self.player.name, self.player.position, self.player.team
        )
    }
}
