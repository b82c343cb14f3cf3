use std::path::PathBuf;

use clap::Parser;

/// Interactive, file-backed task tracker.
/// Commands are read from stdin; storage defaults to ./data/tasks.txt.
#[derive(Parser)]
#[command(name = "taskpad", version, about = "Interactive command-line task tracker")]
pub struct Cli {
    /// Directory holding the task file.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}
