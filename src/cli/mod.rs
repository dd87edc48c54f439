//! Command-line interface.
//!
//! - Argument parsing
//! - Interactive command parsing and dispatch
//! - The prompt loop

pub mod args;
pub mod command;
pub mod repl;
pub mod session;

pub use args::Args;
pub use command::Command;
pub use repl::{present, run_batch, run_interactive};
pub use session::{CommandOutcome, Session};
