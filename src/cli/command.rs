//! Interactive command parsing.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// A line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Exit,
    /// Download every thread on a board.
    Board(String),
    /// Download a single thread.
    Thread { board: String, thread_id: u64 },
    /// Blank input.
    Empty,
    /// Anything else.
    Invalid(String),
}

fn board_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\w+)$").expect("valid board pattern"))
}

fn thread_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\w+)/(\d+)$").expect("valid thread pattern"))
}

impl Command {
    /// Classify a line of input.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return Command::Empty;
        }

        if line == "exit" {
            return Command::Exit;
        }

        if board_pattern().is_match(line) {
            return Command::Board(line.to_string());
        }

        if let Some(captures) = thread_pattern().captures(line) {
            if let Ok(thread_id) = captures[2].parse() {
                return Command::Thread {
                    board: captures[1].to_string(),
                    thread_id,
                };
            }
        }

        Command::Invalid(line.to_string())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Exit => write!(f, "exit"),
            Command::Board(board) => write!(f, "{}", board),
            Command::Thread { board, thread_id } => write!(f, "{}/{}", board, thread_id),
            Command::Empty => Ok(()),
            Command::Invalid(line) => write!(f, "{}", line),
        }
    }
}
