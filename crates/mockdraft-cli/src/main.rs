// Mock draft console entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load the player pool
// 4. Build the draft engine
// 5. Read commands from stdin until quit or EOF

mod input;
mod render;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use mockdraft_core::config;
use mockdraft_core::draft::engine::{DraftEngine, DraftError};
use mockdraft_core::draft::state::HUMAN_TEAM_IDX;
use mockdraft_core::pool;
use tracing::{info, warn};

use input::{parse_command, ParseError, UserCommand, HELP_TEXT};

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Mock draft starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: league={}, {} teams, {} rounds",
        config.league.name, config.league.num_teams, config.league.rounds
    );

    let players =
        pool::load_pool(config.data.players.as_deref()).context("failed to load player pool")?;

    let mut engine = DraftEngine::new(players, config.draft_settings())
        .context("invalid draft settings")?;

    println!("{}", config.league.name);
    println!("{}", HELP_TEXT);
    println!();
    println!("{}", render::format_status(engine.state()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if command == UserCommand::Quit {
            break;
        }
        let output = execute(&mut engine, command)?;
        println!("{output}");
    }

    info!("Mock draft shut down cleanly");
    Ok(())
}

/// Apply one command to the engine and return what to print.
fn execute(engine: &mut DraftEngine, command: UserCommand) -> anyhow::Result<String> {
    let output = match command {
        UserCommand::Pick(id) => match engine.draft_player(&id) {
            Ok(pick) => {
                let mut lines = vec![render::format_pick(engine.state(), &pick)];
                // Hand the clock back to the human straight away.
                for ai_pick in engine.run_ai_until_human_turn() {
                    lines.push(render::format_pick(engine.state(), &ai_pick));
                }
                lines.push(render::format_status(engine.state()));
                lines.join("\n")
            }
            Err(e) => describe_rejection(&e),
        },
        UserCommand::Next => match engine.next_ai_pick() {
            Ok(pick) => format!(
                "{}\n{}",
                render::format_pick(engine.state(), &pick),
                render::format_status(engine.state())
            ),
            Err(e) => describe_rejection(&e),
        },
        UserCommand::Auto => {
            let made = engine.run_ai_until_human_turn();
            let mut lines: Vec<String> = made
                .iter()
                .map(|pick| render::format_pick(engine.state(), pick))
                .collect();
            lines.push(render::format_status(engine.state()));
            lines.join("\n")
        }
        UserCommand::Board { position, limit } => {
            render::format_board(engine.state(), position, limit)
        }
        UserCommand::Roster(team_number) => {
            let state = engine.state();
            let idx = match team_number {
                None => Some(HUMAN_TEAM_IDX),
                Some(n) => n.checked_sub(1),
            };
            match idx.and_then(|idx| state.team(idx)) {
                Some(team) => render::format_roster(team),
                None => format!(
                    "No team {}; teams are numbered 1 to {}.",
                    team_number.unwrap_or(HUMAN_TEAM_IDX + 1),
                    state.num_teams()
                ),
            }
        }
        UserCommand::Log(limit) => render::format_log(engine.state(), limit),
        UserCommand::Status => render::format_status(engine.state()),
        UserCommand::State => serde_json::to_string_pretty(engine.state())
            .context("failed to serialize draft state")?,
        UserCommand::Reset => {
            engine.reset();
            format!("Draft reset.\n{}", render::format_status(engine.state()))
        }
        UserCommand::Help => HELP_TEXT.to_string(),
        UserCommand::Quit => String::new(),
    };
    Ok(output)
}

fn describe_rejection(err: &DraftError) -> String {
    warn!("Pick rejected: {}", err);
    match err {
        DraftError::OutOfTurn { .. } => {
            "You are on the clock; use `pick <id>` to make your selection.".to_string()
        }
        other => format!("Pick rejected: {other}"),
    }
}

/// Initialize tracing to log to a file (not the terminal, which is used for
/// the draft console).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("mockdraft.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mockdraft=info,mockdraft_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockdraft_core::draft::state::DraftSettings;
    use mockdraft_core::player::sample_players;

    fn engine() -> DraftEngine {
        DraftEngine::new(sample_players(), DraftSettings::default()).unwrap()
    }

    #[test]
    fn pick_runs_ai_until_human_is_back() {
        let mut engine = DraftEngine::new(
            sample_players(),
            DraftSettings {
                num_teams: 2,
                rounds: 2,
                user_team_name: "You".into(),
            },
        )
        .unwrap();
        let out = execute(&mut engine, UserCommand::Pick("5".into())).unwrap();
        // Team 2 picks at the end of round 1 and the start of round 2.
        assert_eq!(engine.state().picks.len(), 3);
        assert!(engine.state().is_human_turn());
        assert!(out.contains("J. Gibbs"));
        assert!(out.contains("(your pick)"));
    }

    #[test]
    fn rejected_pick_reports_reason() {
        let mut engine = engine();
        let out = execute(&mut engine, UserCommand::Pick("999".into())).unwrap();
        assert!(out.contains("not in the available pool"));
        assert!(engine.state().picks.is_empty());
    }

    #[test]
    fn next_on_human_turn_explains() {
        let mut engine = engine();
        let out = execute(&mut engine, UserCommand::Next).unwrap();
        assert!(out.contains("You are on the clock"));
    }

    #[test]
    fn roster_out_of_range() {
        let mut engine = engine();
        let out = execute(&mut engine, UserCommand::Roster(Some(13))).unwrap();
        assert_eq!(out, "No team 13; teams are numbered 1 to 12.");
    }

    #[test]
    fn roster_defaults_to_human_team() {
        let mut engine = engine();
        let out = execute(&mut engine, UserCommand::Roster(None)).unwrap();
        assert_eq!(out, "You (0 players)\n  No picks yet.");
        let out = execute(&mut engine, UserCommand::Roster(Some(0))).unwrap();
        assert_eq!(out, "No team 0; teams are numbered 1 to 12.");
    }

    #[test]
    fn state_is_valid_json() {
        let mut engine = engine();
        execute(&mut engine, UserCommand::Pick("1".into())).unwrap();
        let out = execute(&mut engine, UserCommand::State).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["current_round"], 1);
        assert_eq!(value["picks"][0]["player"]["name"], "J. Chase");
        assert_eq!(value["picks"][0]["player"]["position"], "WR");
    }

    #[test]
    fn reset_clears_progress() {
        let mut engine = engine();
        execute(&mut engine, UserCommand::Pick("1".into())).unwrap();
        let out = execute(&mut engine, UserCommand::Reset).unwrap();
        assert!(out.starts_with("Draft reset."));
        assert!(engine.state().picks.is_empty());
        assert_eq!(engine.state().available.len(), 5);
    }
}
