use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named anchor on the home page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Home,
    Projects,
    Skills,
    AboutMe,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::AboutMe,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::AboutMe => "about-me",
            Section::Contact => "contact",
        }
    }

    /// Heading shown above the section body.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::Projects => "PROJECT ARCHIVE",
            Section::Skills => "AI CAPABILITIES",
            Section::AboutMe => "ABOUT ME",
            Section::Contact => "ESTABLISH CONNECTION",
        }
    }

    /// Lookup by anchor id. Returns `None` for ids that are not on the page.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Section::from_id(s).ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

/// One of the two routable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Projects,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Projects => "/projects",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        match path.trim_end_matches('/') {
            "" => Some(Page::Home),
            "/projects" => Some(Page::Projects),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Page::from_path(s).ok_or_else(|| Error::UnknownPage(s.to_string()))
    }
}
