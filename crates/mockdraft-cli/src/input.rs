// Command-line input parsing.
//
// Translates one line of user input into a UserCommand for the main loop.

use mockdraft_core::player::Position;
use thiserror::Error;

/// Default number of rows shown by `board`.
pub const DEFAULT_BOARD_ROWS: usize = 15;

/// Default number of picks shown by `log`.
pub const DEFAULT_LOG_ROWS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Draft the player with this id for the team on the clock.
    Pick(String),
    /// Make a single automated pick.
    Next,
    /// Run automated picks until the human is on the clock.
    Auto,
    /// Show the best available players, optionally at one position.
    Board {
        position: Option<Position>,
        limit: usize,
    },
    /// Show a roster. `None` means the human's team; otherwise a 1-based team number.
    Roster(Option<usize>),
    /// Show the most recent picks.
    Log(usize),
    Status,
    /// Dump the full state as JSON.
    State,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("`{0}` is not a positive number")]
    InvalidNumber(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  pick <id>          draft a player for the team on the clock
  next               make one automated pick
  auto               let the AI pick until you are on the clock
  board [POS] [n]    best available players (e.g. `board rb 10`)
  roster [team#]     show your roster, or team number team#
  log [n]            last n picks
  status             round, pick and who is on the clock
  state              full draft state as JSON
  reset              start the draft over
  help               this message
  quit               exit";

/// Parse one line of input.
pub fn parse_command(line: &str) -> Result<UserCommand, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Empty);
    };
    let args: Vec<&str> = words.collect();

    match head.to_lowercase().as_str() {
        "pick" | "p" | "draft" => match args.first() {
            Some(id) => Ok(UserCommand::Pick(id.to_string())),
            None => Err(ParseError::MissingArgument {
                command: "pick",
                what: "a player id",
            }),
        },
        "next" | "n" => Ok(UserCommand::Next),
        "auto" | "a" => Ok(UserCommand::Auto),
        "board" | "b" | "available" => parse_board(&args),
        "roster" | "r" => match args.first() {
            Some(raw) => Ok(UserCommand::Roster(Some(parse_positive(raw)?))),
            None => Ok(UserCommand::Roster(None)),
        },
        "log" | "l" => match args.first() {
            Some(raw) => Ok(UserCommand::Log(parse_positive(raw)?)),
            None => Ok(UserCommand::Log(DEFAULT_LOG_ROWS)),
        },
        "status" | "s" => Ok(UserCommand::Status),
        "state" | "json" => Ok(UserCommand::State),
        "reset" => Ok(UserCommand::Reset),
        "help" | "h" | "?" => Ok(UserCommand::Help),
        "quit" | "q" | "exit" => Ok(UserCommand::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// `board`, `board 20`, `board wr`, `board wr 20` (either order).
fn parse_board(args: &[&str]) -> Result<UserCommand, ParseError> {
    let mut position = None;
    let mut limit = DEFAULT_BOARD_ROWS;
    for arg in args {
        if let Some(pos) = Position::from_str_pos(arg) {
            position = Some(pos);
        } else {
            limit = parse_positive(arg)?;
        }
    }
    Ok(UserCommand::Board { position, limit })
}

fn parse_positive(raw: &str) -> Result<usize, ParseError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidNumber(raw.to_string())),
    }
}
