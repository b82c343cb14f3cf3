//! Bordered response blocks and canned session texts.
//!
//! Every response is framed the same way: a full-width separator, the
//! message body with each line indented by one tab, a closing separator,
//! and a blank line. Stdout carries only these blocks; diagnostics go to
//! the tracing layer on stderr.

const BORDER: &str = "_________________________________________________";

/// Greeting shown before the first command is read.
pub const WELCOME: &str = "Hello! I'm Taskpad\n\
                           What can I do for you?\n\
                           (Please enter any datetime inputs in\n\
                           \"yyyy-mm-dd hhhh\" format)";

/// Frame a (possibly multi-line) message as one response block.
pub fn bordered(message: &str) -> String {
    let mut out = format!("\t{BORDER}\n");
    for line in message.lines() {
        out.push('\t');
        out.push_str(line);
        out.push('\n');
    }
    out.push('\t');
    out.push_str(BORDER);
    out.push_str("\n\n");
    out
}

/// Print one response block to stdout.
pub fn send(message: &str) {
    print!("{}", bordered(message));
}
