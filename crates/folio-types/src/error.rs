use std::fmt;

/// Result type for folio-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while validating portfolio content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A skill level outside 0..=100
    SkillLevel { name: String, level: u8 },

    /// Two projects share the same title
    DuplicateProject(String),

    /// Unknown section id
    UnknownSection(String),

    /// Unknown page path
    UnknownPage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SkillLevel { name, level } => {
                write!(f, "Skill '{}' has level {} (expected 0-100)", name, level)
            }
            Error::DuplicateProject(title) => write!(f, "Duplicate project title: {}", title),
            Error::UnknownSection(id) => write!(f, "Unknown section: {}", id),
            Error::UnknownPage(path) => write!(f, "Unknown page: {}", path),
        }
    }
}

impl std::error::Error for Error {}
