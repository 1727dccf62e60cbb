//! The on-page terminal widget.
//!
//! A line of text goes in, the transcript grows (or is cleared), and at most
//! one navigation request is handed to the injected [`Navigator`].

mod interpreter;
mod navigator;
mod table;
mod transcript;

pub use interpreter::{Interpreter, Outcome, Submission};
pub use navigator::{Effect, Navigator, NoopNavigator, RecordingNavigator};
pub use table::{CommandAction, CommandTable, Preset};
pub use transcript::{BANNER, CLEARED_LINE, ECHO_MARKER, Transcript, UNRECOGNIZED_LINE};

/// Run a script of commands against a fresh interpreter, recording effects.
pub fn replay<'a, I>(table: CommandTable, script: I) -> (Transcript, Vec<Submission>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut interpreter = Interpreter::new(table, RecordingNavigator::new());
    let submissions = script
        .into_iter()
        .map(|line| interpreter.submit(line))
        .collect();
    (interpreter.transcript().clone(), submissions)
}
