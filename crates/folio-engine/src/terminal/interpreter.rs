use super::navigator::{Effect, Navigator};
use super::table::{CommandAction, CommandTable};
use super::transcript::{CLEARED_LINE, Transcript, UNRECOGNIZED_LINE};
use serde::Serialize;

/// How one submitted line was classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Help,
    Printed,
    Navigated { effect: Effect },
    Cleared,
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub input: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Submission {
    pub fn effect(&self) -> Option<&Effect> {
        match &self.outcome {
            Outcome::Navigated { effect } => Some(effect),
            _ => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.outcome != Outcome::Unrecognized
    }
}

/// State of the terminal widget: transcript plus the line being typed.
///
/// Lives as long as the widget is open. Every submission resets the pending
/// input, and at most one navigation request reaches the navigator per call.
pub struct Interpreter<N: Navigator> {
    table: CommandTable,
    navigator: N,
    transcript: Transcript,
    pending: String,
}

impl<N: Navigator> Interpreter<N> {
    pub fn new(table: CommandTable, navigator: N) -> Self {
        Self {
            table,
            navigator,
            transcript: Transcript::seeded(),
            pending: String::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    pub fn push_char(&mut self, c: char) {
        self.pending.push(c);
    }

    pub fn backspace(&mut self) {
        self.pending.pop();
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Back to the banner with an empty input line.
    pub fn reset(&mut self) {
        self.transcript = Transcript::seeded();
        self.pending.clear();
    }

    /// Submit whatever is in the input line.
    pub fn submit_pending(&mut self) -> Submission {
        let raw = std::mem::take(&mut self.pending);
        self.submit(&raw)
    }

    pub fn submit(&mut self, raw: &str) -> Submission {
        self.transcript.push_echo(raw);

        let name = raw.to_lowercase();
        let outcome = match self.table.get(&name) {
            Some(CommandAction::Help) => {
                self.transcript.push(self.table.help_line());
                Outcome::Help
            }
            Some(CommandAction::Print { line }) => {
                self.transcript.push(line.clone());
                Outcome::Printed
            }
            Some(CommandAction::Scroll { section }) => {
                let effect = Effect::ScrollToSection(section.clone());
                effect.deliver(&mut self.navigator);
                Outcome::Navigated { effect }
            }
            Some(CommandAction::Navigate { path }) => {
                let effect = Effect::NavigateToPage(path.clone());
                effect.deliver(&mut self.navigator);
                Outcome::Navigated { effect }
            }
            Some(CommandAction::Clear) => {
                // The echo above is discarded along with everything else.
                self.transcript.replace_with(CLEARED_LINE);
                self.pending.clear();
                tracing::debug!(input = raw, "terminal cleared");
                return Submission {
                    input: raw.to_string(),
                    outcome: Outcome::Cleared,
                };
            }
            None => {
                self.transcript.push(UNRECOGNIZED_LINE);
                Outcome::Unrecognized
            }
        };

        self.pending.clear();
        tracing::debug!(input = raw, ?outcome, "terminal command");

        Submission {
            input: raw.to_string(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{Preset, RecordingNavigator};
    use folio_types::Portfolio;

    fn interpreter(preset: Preset) -> Interpreter<RecordingNavigator> {
        let table = CommandTable::preset(preset, &Portfolio::default());
        Interpreter::new(table, RecordingNavigator::new())
    }

    #[test]
    fn test_about_scrolls_and_echoes() {
        let mut term = interpreter(Preset::Navigate);
        term.set_pending("about");

        let submission = term.submit_pending();

        assert_eq!(term.transcript().len(), 4);
        assert_eq!(term.transcript().last(), Some("> about"));
        assert_eq!(
            submission.effect(),
            Some(&Effect::ScrollToSection("about".to_string()))
        );
        assert_eq!(term.navigator().effects().len(), 1);
        assert_eq!(term.pending(), "");
    }

    #[test]
    fn test_clear_discards_echo() {
        let mut term = interpreter(Preset::Navigate);
        term.submit("help");
        term.submit("zzz");

        let submission = term.submit("clear");

        assert_eq!(submission.outcome, Outcome::Cleared);
        assert_eq!(term.transcript().lines(), &["> Terminal cleared".to_string()]);
    }

    #[test]
    fn test_clear_resets_pending() {
        let mut term = interpreter(Preset::Navigate);
        term.set_pending("CLEAR");
        term.submit_pending();
        assert_eq!(term.pending(), "");
        assert_eq!(term.transcript().len(), 1);
    }

    #[test]
    fn test_case_insensitive_match() {
        let outputs: Vec<Vec<String>> = ["help", "HELP", "Help"]
            .iter()
            .map(|cmd| {
                let mut term = interpreter(Preset::Navigate);
                term.submit(cmd);
                term.transcript().lines()[4..].to_vec()
            })
            .collect();

        assert_eq!(outputs[0], outputs[1]);
        assert_eq!(outputs[1], outputs[2]);
        assert_eq!(
            outputs[0],
            vec!["Available commands: about, projects, skills, contact, clear".to_string()]
        );
    }

    #[test]
    fn test_no_trimming() {
        let mut term = interpreter(Preset::Navigate);
        let submission = term.submit(" help");
        assert_eq!(submission.outcome, Outcome::Unrecognized);
        assert_eq!(term.transcript().last(), Some(UNRECOGNIZED_LINE));
    }

    #[test]
    fn test_empty_and_garbage_share_fallback() {
        let mut term = interpreter(Preset::Navigate);
        term.submit("");
        let after_empty = term.transcript().last().map(str::to_string);
        term.submit("zzz");
        assert_eq!(after_empty.as_deref(), term.transcript().last());
        assert_eq!(term.transcript().lines()[3], "> ");
    }

    #[test]
    fn test_projects_twice_not_deduplicated() {
        let mut term = interpreter(Preset::Navigate);
        term.submit("projects");
        term.submit("projects");

        assert_eq!(term.transcript().len(), 5);
        assert_eq!(
            term.navigator().effects(),
            &[
                Effect::NavigateToPage("/projects".to_string()),
                Effect::NavigateToPage("/projects".to_string()),
            ]
        );
    }

    #[test]
    fn test_summary_projects_prints_line() {
        let mut term = interpreter(Preset::Summary);
        let submission = term.submit("projects");
        assert_eq!(submission.outcome, Outcome::Printed);
        assert_eq!(term.transcript().len(), 5);
        assert!(term.navigator().effects().is_empty());
    }

    #[test]
    fn test_reset_restores_banner() {
        let mut term = interpreter(Preset::Navigate);
        term.submit("clear");
        term.push_char('h');
        term.reset();
        assert_eq!(term.transcript(), &Transcript::seeded());
        assert_eq!(term.pending(), "");
    }

    #[test]
    fn test_backspace_edits_pending() {
        let mut term = interpreter(Preset::Navigate);
        for c in "helpx".chars() {
            term.push_char(c);
        }
        term.backspace();
        assert_eq!(term.pending(), "help");
        term.backspace();
        term.backspace();
        term.backspace();
        term.backspace();
        term.backspace();
        assert_eq!(term.pending(), "");
    }
}
