// Plain-text views of the draft state for the console.

use mockdraft_core::draft::pick::DraftPick;
use mockdraft_core::draft::state::{DraftPhase, DraftState, Team};
use mockdraft_core::player::Position;

/// One-line summary of where the draft stands.
pub fn format_status(state: &DraftState) -> String {
    match state.phase() {
        DraftPhase::Complete => format!("Draft complete: {} picks made.", state.picks.len()),
        DraftPhase::Active { round, pick } => {
            let team_name = state
                .current_team_idx()
                .and_then(|idx| state.team(idx))
                .map(|t| t.name.as_str())
                .unwrap_or("?");
            let overall = state.overall_pick().unwrap_or(0);
            let marker = if state.is_human_turn() { " (your pick)" } else { "" };
            format!(
                "Round {}/{}, pick {} (overall {} of {}): {} on the clock{}",
                round,
                state.rounds,
                pick + 1,
                overall,
                state.total_picks(),
                team_name,
                marker
            )
        }
    }
}

/// Table of the best available players.
pub fn format_board(state: &DraftState, position: Option<Position>, limit: usize) -> String {
    let players = match position {
        Some(pos) => state.top_available_at(pos, limit),
        None => state.top_available(limit),
    };
    if players.is_empty() {
        return "  No players available.".to_string();
    }

    let header = format!(
        "{:>5}  {:<22} {:<4} {:<4} {:>8} {:>6}",
        "ID", "Player", "Pos", "Team", "Proj", "ADP"
    );
    let rows = players.iter().map(|p| {
        format!(
            "{:>5}  {:<22} {:<4} {:<4} {:>8.2} {:>6.1}",
            p.id, p.name, p.position, p.team, p.projected_ppr, p.adp
        )
    });
    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// A team's roster in pick order with a position breakdown.
pub fn format_roster(team: &Team) -> String {
    let header = format!("{} ({} players)", team.name, team.picks.len());
    if team.picks.is_empty() {
        return format!("{header}\n  No picks yet.");
    }

    let mut lines = vec![header];
    lines.extend(team.picks.iter().enumerate().map(|(i, p)| {
        format!(
            "  {:>2}. {:<22} {:<4} {:<4} {:>8.2}",
            i + 1,
            p.name,
            p.position,
            p.team,
            p.projected_ppr
        )
    }));
    let counts: Vec<String> = Position::ALL
        .iter()
        .map(|&pos| (pos, team.position_count(pos)))
        .filter(|(_, n)| *n > 0)
        .map(|(pos, n)| format!("{pos} {n}"))
        .collect();
    lines.push(format!(
        "  Projected total: {:.2} | {}",
        team.projected_total(),
        counts.join(", ")
    ));
    lines.join("\n")
}

/// The most recent `limit` picks, newest last.
pub fn format_log(state: &DraftState, limit: usize) -> String {
    if state.picks.is_empty() {
        return "  No picks yet.".to_string();
    }
    let skip = state.picks.len().saturating_sub(limit);
    state.picks[skip..]
        .iter()
        .map(|pick| format_pick(state, pick))
        .collect::<Vec<_>>()
        .join("\n")
}

/// "  #13  2.01 AI Team 12: B. Robinson (RB, ATL)"
pub fn format_pick(state: &DraftState, pick: &DraftPick) -> String {
    let team_name = state
        .team(pick.team_idx)
        .map(|t| t.name.as_str())
        .unwrap_or("?");
    format!(
        "  #{:<4} {}.{:02} {}: {} ({}, {})",
        pick.overall(state.num_teams()),
        pick.round,
        pick.pick,
        team_name,
        pick.player.name,
        pick.player.position,
        pick.player.team
    )
}
