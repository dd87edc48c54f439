//! Interactive prompt and batch runner.

use std::io::Write;

use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use crate::cli::command::Command;
use crate::cli::session::{CommandOutcome, Session};
use crate::error::Result;
use crate::output::{
    print_error, print_error_chain, print_info, print_job_stats, print_success, print_warning,
};

/// Print the outcome of one command. Returns `false` once the session should end.
pub fn present(outcome: &CommandOutcome) -> bool {
    match outcome {
        CommandOutcome::Completed { label, stats } => {
            print_job_stats(label, stats);
            print_success("Done");
        }
        CommandOutcome::Failed { label, error } => {
            print_error(&format!("Job {} aborted", label));
            print_error_chain(error);
            if error.is_discovery() {
                print_info("The site did not return the expected board or thread data");
            }
        }
        CommandOutcome::Rejected(line) => {
            print_warning(&format!(
                "Unrecognised input '{}': expected 'board', 'board/thread' or 'exit'",
                line
            ));
        }
        CommandOutcome::Skipped => {}
        CommandOutcome::Exit => return false,
    }
    true
}

/// Read commands from stdin until `exit` or end of input.
///
/// Ctrl-C abandons the running job and returns to the prompt.
pub async fn run_interactive(session: &mut Session) -> Result<()> {
    let mut lines = BufReader::new(stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                println!();
                print_info("Type 'exit' to exit");
                continue;
            }
        };

        let Some(line) = line else {
            println!();
            return Ok(());
        };

        let command = Command::parse(&line);
        tokio::select! {
            outcome = session.execute(command) => {
                if !present(&outcome) {
                    return Ok(());
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                print_warning("Interrupted, current job abandoned");
                print_info("Type 'exit' to exit");
                session.mark_interrupted();
            }
        }
    }
}

/// Run each target as a command, in order.
pub async fn run_batch(session: &mut Session, targets: &[String]) {
    for target in targets {
        let outcome = session.execute(Command::parse(target)).await;
        if !present(&outcome) {
            break;
        }
    }
}
