//! Flat-file persistence for the task list.
//!
//! The whole list is rewritten on every save, one pipe-delimited record
//! per line. Load degrades instead of failing: a missing file is an empty
//! list, and records that don't parse are skipped so files written by a
//! newer version still load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::task::Task;

/// File name inside the data directory.
const TASK_FILE: &str = "tasks.txt";

/// Handle to the storage file. Holds paths only; the file itself is
/// opened per load/save call and released immediately after.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
    file: PathBuf,
}

impl Storage {
    pub fn new(data_dir: &Path) -> Storage {
        Storage {
            dir: data_dir.to_path_buf(),
            file: data_dir.join(TASK_FILE),
        }
    }

    /// Path of the storage file, mainly for diagnostics.
    pub fn file_path(&self) -> &Path {
        &self.file
    }

    /// Read the task list back from disk. A missing file means a fresh
    /// start; any other read problem is logged and also yields an empty
    /// list rather than aborting startup.
    pub fn load(&self) -> Vec<Task> {
        let contents = match fs::read_to_string(&self.file) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no saved tasks at {}, starting empty", self.file.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("could not read {}: {e}", self.file.display());
                return Vec::new();
            }
        };
        let mut tasks = Vec::new();
        for line in contents.lines() {
            if line.is_empty() {
                continue;
            }
            match Task::from_record(line) {
                Some(task) => tasks.push(task),
                None => debug!("skipping unrecognized record: {line}"),
            }
        }
        tasks
    }

    /// Rewrite the whole file from the in-memory list, creating the data
    /// directory on first use.
    pub fn save(&self, tasks: &[Task]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut data = String::new();
        for task in tasks {
            data.push_str(&task.to_record());
            data.push('\n');
        }
        fs::write(&self.file, data)
    }
}
