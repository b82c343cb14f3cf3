//! Task data structure and its textual representations.
//!
//! This module defines the `Task` record with its kind tag, plus the two
//! text forms a task has: the display rendering shown to the user and the
//! pipe-delimited record written to the storage file.

use std::fmt;

/// Variant tag for a task, stored explicitly on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline,
    Event,
}

impl TaskKind {
    /// Lower-case tag used as the first field of a persisted record.
    pub fn tag(self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Deadline => "deadline",
            TaskKind::Event => "event",
        }
    }

    /// Parse a persisted tag. Unknown tags yield `None` so files with
    /// newer record types can be skipped on load.
    pub fn parse(s: &str) -> Option<TaskKind> {
        match s {
            "todo" => Some(TaskKind::Todo),
            "deadline" => Some(TaskKind::Deadline),
            "event" => Some(TaskKind::Event),
            _ => None,
        }
    }

    /// Single-letter marker used in the display rendering.
    fn letter(self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline => 'D',
            TaskKind::Event => 'E',
        }
    }
}

/// One to-do entry: a description, a completion flag, and a free-text
/// remark (the due date of a deadline or the time window of an event,
/// empty for a plain todo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub kind: TaskKind,
    pub description: String,
    pub remark: String,
    pub done: bool,
}

impl Task {
    /// Create a plain todo.
    pub fn todo(description: impl Into<String>) -> Task {
        Task {
            kind: TaskKind::Todo,
            description: description.into(),
            remark: String::new(),
            done: false,
        }
    }

    /// Create a deadline task due `by`.
    pub fn deadline(description: impl Into<String>, by: impl Into<String>) -> Task {
        Task {
            kind: TaskKind::Deadline,
            description: description.into(),
            remark: by.into(),
            done: false,
        }
    }

    /// Create an event task happening `at`.
    pub fn event(description: impl Into<String>, at: impl Into<String>) -> Task {
        Task {
            kind: TaskKind::Event,
            description: description.into(),
            remark: at.into(),
            done: false,
        }
    }

    /// Mark the task done. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark the task not done. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Encode as one line of the storage format:
    /// `<tag> | <d|nd> | <description>` with ` | <remark>` appended only
    /// when the remark is non-empty.
    pub fn to_record(&self) -> String {
        let status = if self.done { "d" } else { "nd" };
        let mut record = format!("{} | {} | {}", self.kind.tag(), status, self.description);
        if !self.remark.is_empty() {
            record.push_str(" | ");
            record.push_str(&self.remark);
        }
        record
    }

    /// Decode one line of the storage format. Returns `None` for lines
    /// with an unknown tag or fewer than three fields; a missing fourth
    /// field becomes an empty remark.
    pub fn from_record(line: &str) -> Option<Task> {
        let fields: Vec<&str> = line.split(" | ").collect();
        if fields.len() < 3 {
            return None;
        }
        let kind = TaskKind::parse(fields[0])?;
        let mut task = Task {
            kind,
            description: fields[2].to_string(),
            remark: fields.get(3).copied().unwrap_or("").to_string(),
            done: false,
        };
        if fields[1] == "d" {
            task.mark_done();
        }
        Some(task)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.letter(), check, self.description)?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline => write!(f, " (by: {})", self.remark),
            TaskKind::Event => write!(f, " (at: {})", self.remark),
        }
    }
}
