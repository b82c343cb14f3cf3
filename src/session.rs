//! The interpreter: one session owns the task list and its storage.
//!
//! `respond` takes one raw input line and produces one reply. All input
//! errors are converted to response text here, so the caller's read loop
//! never has to handle a failure. Every mutating command rewrites the
//! storage file before the reply is returned; a failed save is logged and
//! the in-memory list stays authoritative.

use tracing::warn;

use crate::command::{Command, CommandError};
use crate::storage::Storage;
use crate::task::Task;

/// Response to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and keep reading.
    Message(String),
    /// Show the text and end the loop.
    Farewell(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(s) | Reply::Farewell(s) => s,
        }
    }
}

/// One interactive session over a task list.
#[derive(Debug)]
pub struct Session {
    tasks: Vec<Task>,
    storage: Storage,
}

impl Session {
    /// Open a session, loading whatever the storage file holds.
    pub fn new(storage: Storage) -> Session {
        let tasks = storage.load();
        Session { tasks, storage }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Process one line of input and produce the reply for it.
    pub fn respond(&mut self, line: &str) -> Reply {
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(reply) => reply,
            Err(e) => Reply::Message(e.to_string()),
        }
    }

    fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        match command {
            Command::Bye => Ok(Reply::Farewell(
                "Bye. Hope to see you again soon!".to_string(),
            )),
            Command::List => Ok(Reply::Message(self.render_list())),
            Command::Todo { description } => Ok(Reply::Message(self.add(Task::todo(description)))),
            Command::Deadline { description, by } => {
                Ok(Reply::Message(self.add(Task::deadline(description, by))))
            }
            Command::Event { description, at } => {
                Ok(Reply::Message(self.add(Task::event(description, at))))
            }
            Command::Mark { index } => {
                let i = self.resolve(index)?;
                self.tasks[i].mark_done();
                self.persist();
                Ok(Reply::Message(format!(
                    "Nice! I've marked this task as done:\n  {}",
                    self.tasks[i]
                )))
            }
            Command::Unmark { index } => {
                let i = self.resolve(index)?;
                self.tasks[i].mark_undone();
                self.persist();
                Ok(Reply::Message(format!(
                    "OK! I've marked this task as not done yet:\n  {}",
                    self.tasks[i]
                )))
            }
            Command::Delete { index } => {
                let i = self.resolve(index)?;
                let removed = self.tasks.remove(i);
                self.persist();
                Ok(Reply::Message(format!(
                    "Noted. I've removed this task:\n  {removed}\n{}",
                    self.count_line()
                )))
            }
        }
    }

    fn add(&mut self, task: Task) -> String {
        let rendered = task.to_string();
        self.tasks.push(task);
        self.persist();
        format!(
            "Got it. I've added this task:\n  {rendered}\n{}",
            self.count_line()
        )
    }

    /// `Now you have N task[s] in the list.`, counted after the mutation.
    fn count_line(&self) -> String {
        let n = self.tasks.len();
        let noun = if n == 1 { "task" } else { "tasks" };
        format!("Now you have {n} {noun} in the list.")
    }

    /// Map a user-entered 1-based index to a list position.
    fn resolve(&self, index: i64) -> Result<usize, CommandError> {
        if index >= 1 && index as usize <= self.tasks.len() {
            Ok(index as usize - 1)
        } else {
            Err(CommandError::IndexOutOfRange)
        }
    }

    fn render_list(&self) -> String {
        if self.tasks.is_empty() {
            return "No items stored".to_string();
        }
        let mut out = String::from("Here are the tasks in your list:");
        for (i, task) in self.tasks.iter().enumerate() {
            out.push_str(&format!("\n{}.{}", i + 1, task));
        }
        out
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.tasks) {
            warn!(
                "could not save tasks to {}: {e}",
                self.storage.file_path().display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_in(dir: &std::path::Path) -> Session {
        Session::new(Storage::new(dir))
    }

    #[test]
    fn test_todo_appends_and_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());

        let reply = session.respond("todo buy milk");
        assert!(reply.text().contains("Got it. I've added this task:"));
        assert!(reply.text().contains("[T][ ] buy milk"));
        assert!(reply.text().contains("Now you have 1 task in the list."));
        assert_eq!(session.tasks().len(), 1);

        let reply = session.respond("todo call mum");
        assert!(reply.text().contains("Now you have 2 tasks in the list."));
        assert_eq!(session.tasks().len(), 2);
    }

    #[test]
    fn test_deadline_stored_record_and_listing() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());
        session.respond("deadline submit report /by 2024-01-01");

        let contents = std::fs::read_to_string(dir.path().join("tasks.txt")).unwrap();
        assert_eq!(contents, "deadline | nd | submit report | 2024-01-01\n");

        let reply = session.respond("list");
        assert!(reply
            .text()
            .contains("1.[D][ ] submit report (by: 2024-01-01)"));
    }

    #[test]
    fn test_event_marked_done_renders_check() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());
        session.respond("event team sync /at 2024-01-01 1400");
        session.respond("mark 1");

        let reply = session.respond("list");
        assert!(reply
            .text()
            .contains("1.[E][X] team sync (at: 2024-01-01 1400)"));
    }

    #[test]
    fn test_mark_touches_exactly_one_task() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());
        session.respond("todo a");
        session.respond("todo b");
        session.respond("todo c");

        session.respond("mark 2");
        let done: Vec<bool> = session.tasks().iter().map(|t| t.done).collect();
        assert_eq!(done, vec![false, true, false]);

        // Repeating is a no-op, and unmark restores the default.
        session.respond("mark 2");
        assert!(session.tasks()[1].done);
        session.respond("unmark 2");
        session.respond("unmark 2");
        let done: Vec<bool> = session.tasks().iter().map(|t| t.done).collect();
        assert_eq!(done, vec![false, false, false]);
    }

    #[test]
    fn test_delete_shifts_following_indices() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());
        session.respond("todo a");
        session.respond("todo b");
        session.respond("todo c");

        let reply = session.respond("delete 2");
        assert!(reply.text().contains("Noted. I've removed this task:"));
        assert!(reply.text().contains("[T][ ] b"));
        assert!(reply.text().contains("Now you have 2 tasks in the list."));

        let descriptions: Vec<&str> = session
            .tasks()
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["a", "c"]);

        session.respond("mark 2");
        assert!(session.tasks()[1].done);
        assert_eq!(session.tasks()[1].description, "c");
    }

    #[test]
    fn test_index_boundaries_leave_list_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());
        session.respond("todo a");
        let before = session.tasks().to_vec();

        for line in ["mark 0", "mark 2", "mark -1", "delete 0", "unmark 99"] {
            let reply = session.respond(line);
            assert_eq!(reply.text(), "Please enter an integer within range.");
            assert_eq!(session.tasks(), before.as_slice());
        }

        let reply = session.respond("mark abc");
        assert_eq!(reply.text(), "Please enter an integer id after \"mark\"");
        assert_eq!(session.tasks(), before.as_slice());
    }

    #[test]
    fn test_list_empty_and_populated() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());
        assert_eq!(session.respond("list").text(), "No items stored");

        session.respond("todo a");
        session.respond("todo b");
        assert_eq!(
            session.respond("list").text(),
            "Here are the tasks in your list:\n1.[T][ ] a\n2.[T][ ] b"
        );
    }

    #[test]
    fn test_bye_is_a_farewell() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());
        assert_eq!(
            session.respond("bye"),
            Reply::Farewell("Bye. Hope to see you again soon!".to_string())
        );
    }

    #[test]
    fn test_errors_do_not_mutate() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());
        session.respond("todo a");

        session.respond("todo");
        session.respond("deadline x");
        session.respond("deadline /by friday");
        session.respond("event y");
        session.respond("event /at noon");
        session.respond("nonsense");
        assert_eq!(session.tasks().len(), 1);
    }

    #[test]
    fn test_round_trip_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut session = session_in(dir.path());
            session.respond("todo buy milk");
            session.respond("deadline submit report /by 2024-01-01");
            session.respond("event team sync /at 2024-01-01 1400");
            session.respond("mark 3");
        }
        let earlier = {
            let mut session = session_in(dir.path());
            session.respond("todo late addition");
            session.tasks().to_vec()
        };

        let reloaded = session_in(dir.path());
        assert_eq!(reloaded.tasks(), earlier.as_slice());
        assert_eq!(reloaded.tasks().len(), 4);
        assert!(reloaded.tasks()[2].done);
    }

    #[test]
    fn test_save_failure_keeps_session_alive() {
        // Storage dir path points at an existing file, so create_dir_all
        // fails on every save.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut session = Session::new(Storage::new(&blocker));
        let reply = session.respond("todo buy milk");
        assert!(reply.text().contains("Now you have 1 task in the list."));
        assert_eq!(session.tasks().len(), 1);

        let reply = session.respond("list");
        assert!(reply.text().contains("1.[T][ ] buy milk"));
    }
}
