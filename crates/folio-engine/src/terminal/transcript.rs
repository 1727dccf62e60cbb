use serde::{Deserialize, Serialize};

/// Prefix of every echoed input line.
pub const ECHO_MARKER: &str = "> ";

pub const BANNER: [&str; 3] = [
    "> System initialized...",
    "> Welcome to the AI interface",
    "> Type \"help\" for available commands",
];

pub const CLEARED_LINE: &str = "> Terminal cleared";

pub const UNRECOGNIZED_LINE: &str = "Command not recognized. Type \"help\" for available commands.";

/// Ordered display lines of the terminal widget.
///
/// Lines are only ever appended, except for [`Transcript::replace_with`] which
/// swaps the whole history for a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Transcript {
    /// Fresh transcript holding the startup banner.
    pub fn seeded() -> Self {
        Self {
            lines: BANNER.iter().map(|line| line.to_string()).collect(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_echo(&mut self, raw: &str) {
        self.lines.push(format!("{}{}", ECHO_MARKER, raw));
    }

    pub fn replace_with(&mut self, line: impl Into<String>) {
        self.lines = vec![line.into()];
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
