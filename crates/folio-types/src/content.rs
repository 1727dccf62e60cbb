use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything the portfolio displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Hero heading, one entry per line.
    pub display_name: Vec<String>,
    pub full_name: String,
    pub tagline: String,
    pub hometown: String,
    pub university: String,
    pub degree: String,
    pub cgpa: f64,
    pub year: String,
    pub github_author: String,
    pub footer: String,
    pub status_headline: String,
    pub status_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: String,
    /// Accent name, e.g. "cyan" or "green".
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub code_url: Option<String>,
    #[serde(default)]
    pub details: ProjectDetails,
}

fn default_accent() -> String {
    "cyan".to_string()
}

/// Static block shown when a card is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub status: String,
    pub version: String,
    pub last_update: String,
}

impl Default for ProjectDetails {
    fn default() -> Self {
        Self {
            status: "Active".to_string(),
            version: "2.1.0".to_string(),
            last_update: "2024.01.15".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl Project {
    /// A `#` placeholder link counts as no link.
    pub fn demo_link(&self) -> Option<&str> {
        real_link(self.demo_url.as_deref())
    }

    pub fn code_link(&self) -> Option<&str> {
        real_link(self.code_url.as_deref())
    }
}

fn real_link(url: Option<&str>) -> Option<&str> {
    url.filter(|u| !u.is_empty() && *u != "#")
}

impl Portfolio {
    pub fn validate(&self) -> Result<()> {
        for skill in &self.skills {
            if skill.level > 100 {
                return Err(Error::SkillLevel {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.title.as_str()) {
                return Err(Error::DuplicateProject(project.title.clone()));
            }
        }

        Ok(())
    }

    pub fn project_titles(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.title.as_str()).collect()
    }

    /// Distinct skill categories in first-seen order.
    pub fn skill_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for skill in &self.skills {
            if !categories.contains(&skill.category.as_str()) {
                categories.push(skill.category.as_str());
            }
        }
        categories
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile {
                display_name: vec!["SHAIKH".to_string(), "WARSI".to_string()],
                full_name: "Shaikh Mohammad Warsi".to_string(),
                tagline: "Back End DEV • AI Specialist • Crypto Analyst".to_string(),
                hometown: "Indore".to_string(),
                university: "VIT Bhopal".to_string(),
                degree: "B.Tech degree in Computer Science with a specialization in Artificial Intelligence and Machine Learning".to_string(),
                cgpa: 8.2,
                year: "second".to_string(),
                github_author: "ShaikhWarsi".to_string(),
                footer: "© Vit 2028 • Btech in CSE with specialization in AI/ML".to_string(),
                status_headline: "Status: Online".to_string(),
                status_text: "AI interface active. Ready to collaborate on your next project."
                    .to_string(),
            },
            projects: builtin_projects(),
            skills: vec![
                skill("Python", 95, "Programming"),
                skill("Crypto Analysis", 85, "Finance"),
                skill("Batch Programming", 90, "Scripting"),
                skill("AI/ML", 80, "Technology"),
                skill("Data Analysis", 75, "Analytics"),
            ],
            socials: vec![
                social("GitHub", "https://github.com/ShaikhWarsi"),
                social(
                    "LinkedIn",
                    "https://www.linkedin.com/in/shaikh-mohammad-warsi-141532271/",
                ),
                social("Email", "mailto:yollotemp@gmail.com"),
                social("Instagram", "https://www.instagram.com/shaikh_warsi7/"),
            ],
        }
    }
}

fn builtin_projects() -> Vec<Project> {
    vec![
        project(
            "AxinTweak",
            "A Windows performance-boosting tool written in batch scripting to optimize system performance and enhance user experience.",
            "Batch Programming",
            "cyan",
            "https://github.com/ShaikhWarsi/AxinTweak",
            "https://github.com/ShaikhWarsi/AxinTweak",
        ),
        project(
            "AI Assist",
            "A comprehensive personal AI assistant that can write content, code in any language, open applications, search files, and send emails.",
            "Python, NLP",
            "green",
            "https://github.com/ShaikhWarsi/JarvisAI",
            "https://github.com/ShaikhWarsi/JarvisAI",
        ),
        project(
            "Codevert",
            "An AI code conversion tool that can transform code between programming languages (e.g., Python to C++, JavaScript to TypeScript).",
            "Python, AI/ML",
            "yellow",
            "https://codevert.vercel.app",
            "https://github.com/ShaikhWarsi/CodeVert/tree/main",
        ),
        project(
            "Dietmaxx",
            "An app for finding the best diet based on your day-to-day life.",
            "React Native, AI",
            "green",
            "https://dietmaxx.vercel.app",
            "#",
        ),
        project(
            "CROPIX",
            "An AI-driven program with 6 ML models to help farmers increase their productivity and efficiency.",
            "Python, AI/ML, FastAPI, Next.js",
            "green",
            "https://cropixbitlyfe.vercel.app",
            "https://github.com/ShaikhWarsi/CROPIX",
        ),
        project(
            "HumanEval",
            "An advanced cognitive assessment platform featuring neural-based testing protocols and comprehensive brain performance analytics, designed to test and improve various cognitive skills through interactive games and challenges.",
            "Web Development, Cognitive Science, UI/UX",
            "blue",
            "https://humaneval.vercel.app/",
            "https://github.com/ShaikhWarsi/HumanEval",
        ),
    ]
}

fn project(
    title: &str,
    description: &str,
    tech: &str,
    accent: &str,
    demo: &str,
    code: &str,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        tech: tech.to_string(),
        accent: accent.to_string(),
        demo_url: Some(demo.to_string()),
        code_url: Some(code.to_string()),
        details: ProjectDetails::default(),
    }
}

fn skill(name: &str, level: u8, category: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category: category.to_string(),
    }
}

fn social(label: &str, href: &str) -> SocialLink {
    SocialLink {
        label: label.to_string(),
        href: href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_is_valid() {
        let portfolio = Portfolio::default();
        assert!(portfolio.validate().is_ok());
        assert_eq!(portfolio.projects.len(), 6);
        assert_eq!(portfolio.skills.len(), 5);
    }

    #[test]
    fn test_placeholder_link_is_none() {
        let portfolio = Portfolio::default();
        let dietmaxx = portfolio
            .projects
            .iter()
            .find(|p| p.title == "Dietmaxx")
            .unwrap();
        assert_eq!(dietmaxx.code_link(), None);
        assert_eq!(dietmaxx.demo_link(), Some("https://dietmaxx.vercel.app"));
    }

    #[test]
    fn test_skill_level_out_of_range() {
        let mut portfolio = Portfolio::default();
        portfolio.skills[0].level = 120;
        assert_eq!(
            portfolio.validate(),
            Err(Error::SkillLevel {
                name: "Python".to_string(),
                level: 120
            })
        );
    }

    #[test]
    fn test_duplicate_project_title() {
        let mut portfolio = Portfolio::default();
        let dup = portfolio.projects[0].clone();
        portfolio.projects.push(dup);
        assert_eq!(
            portfolio.validate(),
            Err(Error::DuplicateProject("AxinTweak".to_string()))
        );
    }

    #[test]
    fn test_skill_categories_keep_order() {
        let portfolio = Portfolio::default();
        assert_eq!(
            portfolio.skill_categories(),
            vec!["Programming", "Finance", "Scripting", "Technology", "Analytics"]
        );
    }

    #[test]
    fn test_project_defaults_from_toml() {
        let project: Project = toml::from_str(
            r#"
            title = "Folio"
            description = "This site"
            tech = "Rust"
            "#,
        )
        .unwrap();
        assert_eq!(project.accent, "cyan");
        assert_eq!(project.demo_link(), None);
        assert_eq!(project.details.status, "Active");
    }
}
