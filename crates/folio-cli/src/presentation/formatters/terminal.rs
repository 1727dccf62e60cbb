use folio_engine::{CommandAction, CommandTable, Effect, Outcome, Submission, Transcript};
use owo_colors::OwoColorize;

pub fn format_transcript(transcript: &Transcript, enable_color: bool) -> String {
    transcript
        .iter()
        .map(|line| {
            if enable_color && line.starts_with('>') {
                line.cyan().to_string()
            } else if enable_color {
                line.green().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn describe_effect(effect: &Effect) -> String {
    match effect {
        Effect::ScrollToSection(id) => format!("scroll to section '{}'", id),
        Effect::NavigateToPage(path) => format!("navigate to page '{}'", path),
    }
}

pub fn describe_action(action: &CommandAction) -> String {
    match action {
        CommandAction::Help => "list available commands".to_string(),
        CommandAction::Clear => "clear the terminal".to_string(),
        CommandAction::Scroll { section } => format!("scroll to section '{}'", section),
        CommandAction::Navigate { path } => format!("navigate to page '{}'", path),
        CommandAction::Print { line } => format!("print \"{}\"", line),
    }
}

/// One line per submission that asked for navigation.
pub fn format_effects(submissions: &[Submission]) -> Vec<String> {
    submissions
        .iter()
        .filter_map(|s| match &s.outcome {
            Outcome::Navigated { effect } => {
                Some(format!("{} -> {}", s.input, describe_effect(effect)))
            }
            _ => None,
        })
        .collect()
}

pub fn format_command_table(table: &CommandTable, enable_color: bool) -> String {
    let width = table.names().map(str::len).max().unwrap_or(0);
    table
        .entries()
        .iter()
        .map(|(name, action)| {
            let padded = format!("{:<width$}", name, width = width);
            let name = if enable_color {
                padded.cyan().bold().to_string()
            } else {
                padded
            };
            format!("{}  {}", name, describe_action(action))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
