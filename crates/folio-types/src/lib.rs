pub mod content;
pub mod error;
pub mod section;

pub use content::{Portfolio, Profile, Project, ProjectDetails, Skill, SocialLink};
pub use error::{Error, Result};
pub use section::{Page, Section};
