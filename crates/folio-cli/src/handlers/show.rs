use crate::context::ExecutionContext;
use crate::presentation::formatters::{
    about_sentences, format_about, format_contact, format_profile, format_projects,
    format_skills,
};
use crate::types::{OutputFormat, ShowTarget};
use anyhow::Result;
use folio_engine::visible_indices;
use folio_types::{Page, Project, SocialLink};
use is_terminal::IsTerminal;
use serde::Serialize;

#[derive(Serialize)]
struct AboutView {
    sentences: Vec<String>,
    cgpa: f64,
}

#[derive(Serialize)]
struct ContactView<'a> {
    socials: &'a [SocialLink],
    status_headline: &'a str,
    status_text: &'a str,
}

pub fn handle(
    ctx: &ExecutionContext,
    target: ShowTarget,
    all: bool,
    format: OutputFormat,
) -> Result<()> {
    let config = ctx.config()?;
    let portfolio = ctx.portfolio()?;
    let enable_color = std::io::stdout().is_terminal();

    // `--all` lists the projects page; otherwise the home page gallery.
    let page = if all { Page::Projects } else { Page::Home };
    let projects: Vec<&Project> = visible_indices(&portfolio.projects, page, &config.gallery.hidden)
        .into_iter()
        .filter_map(|i| portfolio.projects.get(i))
        .collect();

    tracing::debug!(%target, projects = projects.len(), "showing section");

    let output = match (target, format) {
        (ShowTarget::Profile, OutputFormat::Json) => {
            serde_json::to_string_pretty(&portfolio.profile)?
        }
        (ShowTarget::Profile, OutputFormat::Plain) => {
            format_profile(&portfolio.profile, enable_color)
        }
        (ShowTarget::Projects, OutputFormat::Json) => serde_json::to_string_pretty(&projects)?,
        (ShowTarget::Projects, OutputFormat::Plain) => format_projects(&projects, enable_color),
        (ShowTarget::Skills, OutputFormat::Json) => {
            serde_json::to_string_pretty(&portfolio.skills)?
        }
        (ShowTarget::Skills, OutputFormat::Plain) => {
            format_skills(&portfolio.skills, enable_color)
        }
        (ShowTarget::About, OutputFormat::Json) => {
            let profile = &portfolio.profile;
            let cgpa = format!("{:.1}", profile.cgpa);
            serde_json::to_string_pretty(&AboutView {
                sentences: about_sentences(profile, &cgpa, "0"),
                cgpa: profile.cgpa,
            })?
        }
        (ShowTarget::About, OutputFormat::Plain) => format_about(&portfolio.profile, None),
        (ShowTarget::Contact, OutputFormat::Json) => serde_json::to_string_pretty(&ContactView {
            socials: &portfolio.socials,
            status_headline: &portfolio.profile.status_headline,
            status_text: &portfolio.profile.status_text,
        })?,
        (ShowTarget::Contact, OutputFormat::Plain) => format_contact(portfolio, enable_color),
    };

    println!("{}", output);
    Ok(())
}
