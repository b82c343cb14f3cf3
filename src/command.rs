//! Input-line parsing for the interactive command loop.
//!
//! One line of user input becomes one `Command` value or one
//! `CommandError`. All user-facing failure messages live on the error
//! enum, so the session can turn any failure into a response with
//! `to_string()` and keep the loop running.

use thiserror::Error;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Bye,
    /// Render every task with its 1-based index.
    List,
    /// Append a plain task.
    Todo { description: String },
    /// Append a task with a due remark.
    Deadline { description: String, by: String },
    /// Append a task with a time-window remark.
    Event { description: String, at: String },
    /// Set task `index` (1-based) done.
    Mark { index: i64 },
    /// Set task `index` (1-based) not done.
    Unmark { index: i64 },
    /// Remove task `index` (1-based).
    Delete { index: i64 },
}

/// Everything that can go wrong with one line of input. Each variant's
/// display string is the exact response shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Error. The description of a {0} cannot be empty.")]
    EmptyDescription(&'static str),
    #[error("Error. The description and due date of a deadline\nshould be separated by a \"/by\".")]
    MissingBySeparator,
    #[error("Error. The description and time of an event\nshould be separated by a \"/at\".")]
    MissingAtSeparator,
    #[error("Error. Please enter an argument after \"{0}\".")]
    MissingIndex(&'static str),
    #[error("Please enter an integer id after \"{0}\"")]
    IndexNotAnInteger(&'static str),
    #[error("Please enter an integer within range.")]
    IndexOutOfRange,
    #[error("Error. Sorry, but I don't know what that means.")]
    Unrecognized,
}

impl Command {
    /// Parse one raw input line.
    ///
    /// `bye` and `list` must match the whole line; every other command is
    /// dispatched on the first space-separated token. `deadline` and
    /// `event` strip their keyword from the raw line (not from the token
    /// split) before cutting at the first separator occurrence, so a
    /// description containing the literal `/by` or `/at` truncates there.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        if line == "bye" {
            return Ok(Command::Bye);
        }
        if line == "list" {
            return Ok(Command::List);
        }
        let mut tokens = line.split(' ');
        match tokens.next().unwrap_or("") {
            "todo" => {
                let description = line["todo".len()..].trim();
                if description.is_empty() {
                    Err(CommandError::EmptyDescription("todo"))
                } else {
                    Ok(Command::Todo {
                        description: description.to_string(),
                    })
                }
            }
            "deadline" => {
                let (description, by) = split_remark(line, "deadline", "/by")?;
                Ok(Command::Deadline { description, by })
            }
            "event" => {
                let (description, at) = split_remark(line, "event", "/at")?;
                Ok(Command::Event { description, at })
            }
            "mark" => Ok(Command::Mark {
                index: parse_index("mark", tokens.next())?,
            }),
            "unmark" => Ok(Command::Unmark {
                index: parse_index("unmark", tokens.next())?,
            }),
            "delete" => Ok(Command::Delete {
                index: parse_index("delete", tokens.next())?,
            }),
            _ => Err(CommandError::Unrecognized),
        }
    }
}

/// Cut the keyword-stripped, trimmed line at the first occurrence of the
/// separator. No separator, or a separator with nothing after it, is the
/// same missing-separator error; both sides are trimmed afterwards, and a
/// description that trims to nothing is rejected.
fn split_remark(
    line: &str,
    keyword: &'static str,
    separator: &'static str,
) -> Result<(String, String), CommandError> {
    let rest = line[keyword.len()..].trim();
    match rest.split_once(separator) {
        Some((description, remark)) if !remark.is_empty() => {
            let description = description.trim();
            if description.is_empty() {
                return Err(CommandError::EmptyDescription(keyword));
            }
            Ok((description.to_string(), remark.trim().to_string()))
        }
        _ => Err(if separator == "/by" {
            CommandError::MissingBySeparator
        } else {
            CommandError::MissingAtSeparator
        }),
    }
}

/// Parse the index argument of `mark`/`unmark`/`delete`. A missing token
/// and a non-integer token are distinct errors; range checking happens
/// later, against the live list.
fn parse_index(keyword: &'static str, token: Option<&str>) -> Result<i64, CommandError> {
    let token = token.ok_or(CommandError::MissingIndex(keyword))?;
    token
        .parse::<i64>()
        .map_err(|_| CommandError::IndexNotAnInteger(keyword))
}
