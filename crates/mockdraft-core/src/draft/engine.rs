// Draft engine: owns the draft state and applies picks, automated picks and
// resets to it.

use tracing::{debug, info, warn};

use super::order::snake_order;
use super::pick::DraftPick;
use super::state::{DraftSettings, DraftState, SettingsError, HUMAN_TEAM_IDX};
use crate::player::Player;

/// Why a pick was rejected. The draft state is unchanged whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("the draft is already complete")]
    DraftComplete,

    #[error("player `{player_id}` is not in the available pool")]
    PlayerNotAvailable { player_id: String },

    #[error("team {team_idx} is human-controlled and must pick manually")]
    OutOfTurn { team_idx: usize },

    #[error("no players left in the pool")]
    PoolEmpty,

    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),
}

/// Snake draft state machine.
///
/// Holds the original player list and settings so the draft can be reset.
/// All mutation goes through `&mut self`, so callers sharing an engine across
/// threads must wrap it in a lock themselves.
#[derive(Debug, Clone)]
pub struct DraftEngine {
    settings: DraftSettings,
    players: Vec<Player>,
    state: DraftState,
}

impl DraftEngine {
    /// Start a new draft over `players`.
    ///
    /// The list is taken as-is: ids are assumed unique. Settings with no teams
    /// or no rounds are rejected.
    pub fn new(players: Vec<Player>, settings: DraftSettings) -> Result<Self, DraftError> {
        settings.validate()?;
        let needed = settings.total_picks();
        if players.len() < needed {
            warn!(
                "Player pool has {} players but a full draft needs {}; the draft will stall when the pool runs out",
                players.len(),
                needed
            );
        }
        let state = DraftState::new(&players, &settings);
        info!(
            "Draft initialized: {} teams, {} rounds, {} players",
            settings.num_teams,
            settings.rounds,
            players.len()
        );
        Ok(DraftEngine {
            settings,
            players,
            state,
        })
    }

    pub fn settings(&self) -> &DraftSettings {
        &self.settings
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// An owned copy of the current state. Later engine operations never
    /// touch it.
    pub fn snapshot(&self) -> DraftState {
        self.state.clone()
    }

    /// Draft `player_id` for the team on the clock.
    pub fn draft_player(&mut self, player_id: &str) -> Result<DraftPick, DraftError> {
        let team_idx = self
            .state
            .current_team_idx()
            .ok_or(DraftError::DraftComplete)?;
        let pool_idx = self
            .state
            .available
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| DraftError::PlayerNotAvailable {
                player_id: player_id.to_string(),
            })?;

        let player = self.state.available.remove(pool_idx);
        self.state.teams[team_idx].picks.push(player.clone());

        let pick = DraftPick {
            round: self.state.current_round,
            pick: self.state.current_pick as u32 + 1,
            team_idx,
            player,
        };
        self.state.picks.push(pick.clone());
        info!(
            "Pick {}: {} selects {} ({})",
            pick.overall(self.settings.num_teams),
            self.state.teams[team_idx].name,
            pick.player.name,
            pick.player.position
        );

        self.advance_turn();
        Ok(pick)
    }

    /// Let the automated team on the clock take the best available player.
    pub fn next_ai_pick(&mut self) -> Result<DraftPick, DraftError> {
        let team_idx = self
            .state
            .current_team_idx()
            .ok_or(DraftError::DraftComplete)?;
        if team_idx == HUMAN_TEAM_IDX {
            return Err(DraftError::OutOfTurn { team_idx });
        }
        let player_id = self
            .state
            .best_available()
            .map(|p| p.id.clone())
            .ok_or(DraftError::PoolEmpty)?;
        self.draft_player(&player_id)
    }

    /// Run automated picks until the human is on the clock, the draft ends,
    /// or the pool runs dry. Returns the picks made.
    pub fn run_ai_until_human_turn(&mut self) -> Vec<DraftPick> {
        let mut made = Vec::new();
        loop {
            match self.next_ai_pick() {
                Ok(pick) => made.push(pick),
                Err(DraftError::PoolEmpty) => {
                    warn!("Player pool exhausted before the draft finished");
                    break;
                }
                Err(_) => break,
            }
        }
        made
    }

    /// Throw away all progress and start over with the original pool.
    pub fn reset(&mut self) {
        self.state = DraftState::new(&self.players, &self.settings);
        info!("Draft reset");
    }

    fn advance_turn(&mut self) {
        let state = &mut self.state;
        state.current_pick += 1;
        if state.current_pick < state.num_teams {
            return;
        }

        state.current_pick = 0;
        state.current_round += 1;
        if state.current_round > state.rounds {
            state.is_complete = true;
            info!("Draft complete after {} picks", state.picks.len());
        } else {
            state.draft_order = snake_order(state.current_round, state.num_teams);
            debug!(
                "Round {} begins, order {:?}",
                state.current_round, state.draft_order
            );
        }
    }
}
