use folio_types::{Page, Portfolio, Section};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a recognized command does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CommandAction {
    /// Print the list of available commands
    Help,
    /// Replace the transcript with the cleared banner
    Clear,
    Scroll { section: String },
    Navigate { path: String },
    Print { line: String },
}

/// Built-in command tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Sections are scrolled to and `projects` opens the projects page.
    #[default]
    Navigate,
    /// `projects`, `skills` and `contact` answer inline.
    Summary,
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Navigate => write!(f, "navigate"),
            Preset::Summary => write!(f, "summary"),
        }
    }
}

/// Ordered mapping from lower-case command name to action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandTable {
    entries: Vec<(String, CommandAction)>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preset(preset: Preset, portfolio: &Portfolio) -> Self {
        // The home page scrolls to `about`, which is not one of its anchors.
        let about = match preset {
            Preset::Navigate => "about",
            Preset::Summary => Section::AboutMe.id(),
        };
        let table = Self::new().with("help", CommandAction::Help).with(
            "about",
            CommandAction::Scroll {
                section: about.to_string(),
            },
        );

        let table = match preset {
            Preset::Navigate => table
                .with(
                    "projects",
                    CommandAction::Navigate {
                        path: Page::Projects.path().to_string(),
                    },
                )
                .with(
                    "skills",
                    CommandAction::Scroll {
                        section: Section::Skills.id().to_string(),
                    },
                )
                .with(
                    "contact",
                    CommandAction::Scroll {
                        section: Section::Contact.id().to_string(),
                    },
                ),
            Preset::Summary => table
                .with(
                    "projects",
                    CommandAction::Print {
                        line: format!("Projects: {}", portfolio.project_titles().join(", ")),
                    },
                )
                .with(
                    "skills",
                    CommandAction::Print {
                        line: format!("Skills: {}", portfolio.skill_categories().join(", ")),
                    },
                )
                .with(
                    "contact",
                    CommandAction::Print {
                        line: format!(
                            "{}. {}",
                            portfolio.profile.status_headline, portfolio.profile.status_text
                        ),
                    },
                ),
        };

        table.with("clear", CommandAction::Clear)
    }

    /// Adds or replaces a command. Names are stored lower-cased so lookups
    /// against lower-cased input can match.
    pub fn with(mut self, name: &str, action: CommandAction) -> Self {
        self.insert(name, action);
        self
    }

    pub fn insert(&mut self, name: &str, action: CommandAction) {
        let name = name.to_lowercase();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = action,
            None => self.entries.push((name, action)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<CommandAction> {
        let name = name.to_lowercase();
        let idx = self.entries.iter().position(|(n, _)| *n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Exact lookup; the caller lower-cases the input.
    pub fn get(&self, name: &str) -> Option<&CommandAction> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, action)| action)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn entries(&self) -> &[(String, CommandAction)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn help_line(&self) -> String {
        let names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, action)| *action != CommandAction::Help)
            .map(|(n, _)| n.as_str())
            .collect();
        format!("Available commands: {}", names.join(", "))
    }
}
