// Draft state: available pool, team rosters, pick log, and turn position.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::order::snake_order;
use super::pick::DraftPick;
use crate::player::{Player, Position};

/// Index of the human-controlled team. Every other team is automated.
pub const HUMAN_TEAM_IDX: usize = 0;

/// Default number of teams in a league.
pub const DEFAULT_NUM_TEAMS: usize = 12;

/// Default number of rounds in a draft.
pub const DEFAULT_ROUNDS: u32 = 14;

/// Shape of a draft: how many teams, how many rounds, and what the human's
/// team is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSettings {
    pub num_teams: usize,
    pub rounds: u32,
    pub user_team_name: String,
}

impl Default for DraftSettings {
    fn default() -> Self {
        DraftSettings {
            num_teams: DEFAULT_NUM_TEAMS,
            rounds: DEFAULT_ROUNDS,
            user_team_name: "You".to_string(),
        }
    }
}

/// A `DraftSettings` value that cannot describe a playable draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid draft setting `{field}`: {message}")]
pub struct SettingsError {
    pub field: &'static str,
    pub message: &'static str,
}

impl DraftSettings {
    /// Reject shapes with no turns to take: zero teams, zero rounds, or an
    /// unnamed human team.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.num_teams == 0 {
            return Err(SettingsError {
                field: "num_teams",
                message: "must be at least 1",
            });
        }
        if self.rounds == 0 {
            return Err(SettingsError {
                field: "rounds",
                message: "must be at least 1",
            });
        }
        if self.user_team_name.trim().is_empty() {
            return Err(SettingsError {
                field: "user_team_name",
                message: "must not be empty",
            });
        }
        Ok(())
    }

    /// Display name for the team at `idx`.
    pub fn team_name(&self, idx: usize) -> String {
        if idx == HUMAN_TEAM_IDX {
            self.user_team_name.clone()
        } else {
            format!("AI Team {}", idx + 1)
        }
    }

    /// Total number of picks in a full draft.
    pub fn total_picks(&self) -> usize {
        self.num_teams * self.rounds as usize
    }
}

/// A team and the players it has drafted, in pick order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub picks: Vec<Arc<Player>>,
}

impl Team {
    pub fn new(name: String) -> Self {
        Team {
            name,
            picks: Vec::new(),
        }
    }

    /// Sum of projected points across the roster.
    pub fn projected_total(&self) -> f64 {
        self.picks.iter().map(|p| p.projected_ppr).sum()
    }

    /// Number of rostered players at the given position.
    pub fn position_count(&self, pos: Position) -> usize {
        self.picks.iter().filter(|p| p.position == pos).count()
    }
}

/// Where the draft currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    /// `round` is 1-indexed, `pick` is the 0-indexed slot in the round's order.
    Active { round: u32, pick: usize },
    Complete,
}

/// The complete state of the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftState {
    /// Players not yet drafted, in their original order.
    pub available: Vec<Arc<Player>>,
    /// All teams, indexed by team index.
    pub teams: Vec<Team>,
    /// Every pick made so far, in order.
    pub picks: Vec<DraftPick>,
    /// Current round (1-indexed).
    pub current_round: u32,
    /// Index into `draft_order` of the team on the clock.
    pub current_pick: usize,
    /// Team indices in pick order for the current round.
    pub draft_order: Vec<usize>,
    /// Set once the final pick of the final round is made.
    pub is_complete: bool,
    /// Number of teams in the draft.
    pub num_teams: usize,
    /// Number of rounds in the draft.
    pub rounds: u32,
}

impl DraftState {
    /// Fresh state at round 1, pick 0 with every player available.
    pub fn new(players: &[Player], settings: &DraftSettings) -> Self {
        let teams = (0..settings.num_teams)
            .map(|idx| Team::new(settings.team_name(idx)))
            .collect();

        DraftState {
            available: players.iter().cloned().map(Arc::new).collect(),
            teams,
            picks: Vec::new(),
            current_round: 1,
            current_pick: 0,
            draft_order: snake_order(1, settings.num_teams),
            is_complete: false,
            num_teams: settings.num_teams,
            rounds: settings.rounds,
        }
    }

    pub fn num_teams(&self) -> usize {
        self.num_teams
    }

    pub fn phase(&self) -> DraftPhase {
        if self.is_complete {
            DraftPhase::Complete
        } else {
            DraftPhase::Active {
                round: self.current_round,
                pick: self.current_pick,
            }
        }
    }

    /// Index of the team on the clock, or `None` once the draft is over.
    pub fn current_team_idx(&self) -> Option<usize> {
        if self.is_complete {
            return None;
        }
        self.draft_order.get(self.current_pick).copied()
    }

    /// Whether the human-controlled team is on the clock.
    pub fn is_human_turn(&self) -> bool {
        self.current_team_idx() == Some(HUMAN_TEAM_IDX)
    }

    /// Overall number (1-indexed) of the pick about to be made.
    pub fn overall_pick(&self) -> Option<usize> {
        if self.is_complete {
            return None;
        }
        Some(self.picks.len() + 1)
    }

    pub fn total_picks(&self) -> usize {
        self.num_teams() * self.rounds as usize
    }

    pub fn picks_remaining(&self) -> usize {
        self.total_picks().saturating_sub(self.picks.len())
    }

    pub fn team(&self, idx: usize) -> Option<&Team> {
        self.teams.get(idx)
    }

    /// The human team's roster.
    pub fn my_team(&self) -> Option<&Team> {
        self.teams.get(HUMAN_TEAM_IDX)
    }

    /// Look up an undrafted player by id.
    pub fn available_player(&self, player_id: &str) -> Option<&Arc<Player>> {
        self.available.iter().find(|p| p.id == player_id)
    }

    /// The player the automated heuristic would take next.
    pub fn best_available(&self) -> Option<&Arc<Player>> {
        self.available.iter().min_by(|a, b| draft_rank(a, b))
    }

    /// The `n` best available players, best first.
    pub fn top_available(&self, n: usize) -> Vec<&Arc<Player>> {
        let mut ranked: Vec<&Arc<Player>> = self.available.iter().collect();
        ranked.sort_by(|a, b| draft_rank(a, b));
        ranked.truncate(n);
        ranked
    }

    /// The `n` best available players at one position, best first.
    pub fn top_available_at(&self, pos: Position, n: usize) -> Vec<&Arc<Player>> {
        let mut ranked: Vec<&Arc<Player>> =
            self.available.iter().filter(|p| p.position == pos).collect();
        ranked.sort_by(|a, b| draft_rank(a, b));
        ranked.truncate(n);
        ranked
    }
}

/// Ordering used by the automated drafter: `Less` means `a` should be taken
/// before `b`.
///
/// Highest projected points wins; ties go to the lower ADP, then to the
/// lexicographically smaller id.
pub fn draft_rank(a: &Player, b: &Player) -> Ordering {
    b.projected_ppr
        .total_cmp(&a.projected_ppr)
        .then_with(|| a.adp.total_cmp(&b.adp))
        .then_with(|| a.id.cmp(&b.id))
}
