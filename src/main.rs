//! # Taskpad - interactive task tracker
//!
//! A line-oriented task tracker for the terminal. Type commands at the
//! prompt, and the task list is saved to a plain-text file after every
//! change, so it is still there next session.
//!
//! ## Commands
//!
//! ```text
//! todo <description>                  add a plain task
//! deadline <description> /by <when>   add a task with a due date
//! event <description> /at <when>      add a task with a time window
//! list                                show all tasks
//! mark <n> / unmark <n>               set task n done / not done
//! delete <n>                          remove task n
//! bye                                 exit
//! ```
//!
//! ## Storage
//!
//! Tasks live in `data/tasks.txt` (override the directory with
//! `--data-dir`), one pipe-delimited record per line. The file is
//! rewritten in full after every mutating command; a missing file just
//! means an empty list. Diagnostics go to stderr via `tracing`
//! (`RUST_LOG` controls verbosity), keeping stdout clean for responses.

use std::io::{self, BufRead};

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod command;
pub mod session;
pub mod storage;
pub mod task;
pub mod ui;

use cli::Cli;
use session::{Reply, Session};
use storage::Storage;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    ui::send(ui::WELCOME);

    let mut session = Session::new(Storage::new(&cli.data_dir));

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("could not read input: {e}");
                break;
            }
        };
        match session.respond(&line) {
            Reply::Message(text) => ui::send(&text),
            Reply::Farewell(text) => {
                ui::send(&text);
                break;
            }
        }
    }
}
