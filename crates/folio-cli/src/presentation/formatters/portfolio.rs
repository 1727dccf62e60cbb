use folio_types::{Portfolio, Profile, Project, Skill};
use owo_colors::OwoColorize;

/// About-me paragraph, one sentence per line. The two numbers are passed in
/// pre-formatted so the interactive view can animate them.
pub fn about_sentences(profile: &Profile, cgpa: &str, commits: &str) -> Vec<String> {
    vec![
        format!("My name is {}.", profile.full_name),
        format!(
            "Hailing from {}, I bring a strong foundation in software development.",
            profile.hometown
        ),
        format!("I currently maintain a CGPA of {}.", cgpa),
        format!(
            "I am currently pursuing my {} year of studies.",
            profile.year
        ),
        format!(
            "I am currently pursuing a {} at {}.",
            profile.degree, profile.university
        ),
        format!(
            "My commitment to development is reflected in over {}+ commits on GitHub.",
            commits
        ),
    ]
}

pub fn create_level_bar(level: u8, width: usize, enable_color: bool) -> String {
    let filled_width = (level.min(100) as usize * width) / 100;
    let empty_width = width.saturating_sub(filled_width);
    let bar = format!("[{}{}]", "=".repeat(filled_width), ".".repeat(empty_width));

    if enable_color {
        bar.cyan().to_string()
    } else {
        bar
    }
}

pub fn format_profile(profile: &Profile, enable_color: bool) -> String {
    let name = profile.display_name.join(" ");
    let name = if enable_color {
        name.cyan().bold().to_string()
    } else {
        name
    };
    format!("{}\n{}", name, profile.tagline)
}

pub fn format_projects(projects: &[&Project], enable_color: bool) -> String {
    projects
        .iter()
        .map(|project| format_project(project, enable_color))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_project(project: &Project, enable_color: bool) -> String {
    let title = if enable_color {
        project.title.cyan().bold().to_string()
    } else {
        project.title.clone()
    };
    let tech = if enable_color {
        project.tech.dimmed().to_string()
    } else {
        project.tech.clone()
    };

    let mut lines = vec![
        format!("{} [{}]", title, tech),
        format!("  {}", project.description),
    ];
    if let Some(url) = project.demo_link() {
        lines.push(format!("  demo: {}", url));
    }
    if let Some(url) = project.code_link() {
        lines.push(format!("  code: {}", url));
    }
    lines.join("\n")
}

pub fn format_skills(skills: &[Skill], enable_color: bool) -> String {
    let width = skills.iter().map(|s| s.name.len()).max().unwrap_or(0);
    skills
        .iter()
        .map(|skill| {
            format!(
                "{:<width$}  {} {:>3}%  {}",
                skill.name,
                create_level_bar(skill.level, 20, enable_color),
                skill.level,
                skill.category,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_about(profile: &Profile, commits: Option<u64>) -> String {
    let cgpa = format!("{:.1}", profile.cgpa);
    let commits = commits.unwrap_or(0).to_string();
    about_sentences(profile, &cgpa, &commits).join("\n")
}

pub fn format_contact(portfolio: &Portfolio, enable_color: bool) -> String {
    let width = portfolio
        .socials
        .iter()
        .map(|s| s.label.len())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = portfolio
        .socials
        .iter()
        .map(|s| format!("{:<width$}  {}", s.label, s.href, width = width))
        .collect();

    lines.push(String::new());
    let headline = &portfolio.profile.status_headline;
    if enable_color {
        lines.push(headline.yellow().bold().to_string());
    } else {
        lines.push(headline.clone());
    }
    lines.push(portfolio.profile.status_text.clone());
    lines.join("\n")
}
