use super::app::AppState;
use crate::presentation::formatters::{about_sentences, create_level_bar, wrap_text};
use folio_types::{Page, Project, Section};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::time::Instant;

const INDENT: &str = "    ";

/// The scrollable page body, laid out for one terminal width.
pub(crate) struct Document {
    pub lines: Vec<Line<'static>>,
    /// Row of each section heading, in page order. Empty off the home page.
    pub tops: Vec<(Section, u16)>,
}

impl Document {
    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

struct Builder {
    lines: Vec<Line<'static>>,
    tops: Vec<(Section, u16)>,
    width: usize,
}

impl Builder {
    fn new(width: u16) -> Self {
        Self {
            lines: Vec::new(),
            tops: Vec::new(),
            width: (width as usize).max(20),
        }
    }

    fn mark(&mut self, section: Section) {
        self.tops.push((section, self.lines.len() as u16));
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, text: &str) {
        self.push(Line::from(Span::styled(
            format!("// {}", text),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        self.blank();
    }

    fn wrapped(&mut self, text: &str, indent: &str, style: Style) {
        let width = self.width.saturating_sub(indent.len());
        for chunk in wrap_text(text, width) {
            self.push(Line::from(Span::styled(format!("{}{}", indent, chunk), style)));
        }
    }

    fn finish(self) -> Document {
        Document {
            lines: self.lines,
            tops: self.tops,
        }
    }
}

pub(crate) fn accent_color(accent: &str) -> Color {
    match accent {
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "purple" | "magenta" => Color::Magenta,
        "red" => Color::Red,
        "orange" => Color::LightRed,
        _ => Color::Cyan,
    }
}

fn category_color(category: &str) -> Color {
    match category {
        "Programming" => Color::Cyan,
        "Finance" => Color::Magenta,
        "Scripting" => Color::Green,
        "Technology" => Color::Yellow,
        _ => Color::LightRed,
    }
}

pub(crate) fn build(state: &AppState, width: u16, now: Instant) -> Document {
    let mut b = Builder::new(width);
    match state.page {
        Page::Home => build_home(&mut b, state, now),
        Page::Projects => build_projects_page(&mut b, state),
    }
    b.blank();
    b.wrapped(
        &state.portfolio.profile.footer,
        "",
        Style::default().fg(Color::DarkGray),
    );
    b.finish()
}

fn build_home(b: &mut Builder, state: &AppState, now: Instant) {
    let profile = &state.portfolio.profile;

    b.mark(Section::Home);
    b.blank();
    for word in &profile.display_name {
        b.push(Line::from(Span::styled(
            word.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }
    b.blank();
    b.wrapped(&profile.tagline, "", Style::default().fg(Color::Gray));
    b.blank();
    b.push(Line::from(vec![
        Span::styled("[p]", Style::default().fg(Color::Yellow)),
        Span::raw(" View Projects   "),
        Span::styled("[c]", Style::default().fg(Color::Yellow)),
        Span::raw(" Contact Me"),
    ]));
    b.blank();

    b.mark(Section::Projects);
    b.heading(Section::Projects.heading());
    push_cards(b, state);
    b.push(Line::from(Span::styled(
        "[a] VIEW MORE PROJECTS",
        Style::default().fg(Color::Yellow),
    )));
    b.blank();

    b.mark(Section::Skills);
    b.heading(Section::Skills.heading());
    let name_width = state
        .portfolio
        .skills
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);
    let bar_width = b.width.saturating_sub(name_width + 12).clamp(10, 30);
    for skill in &state.portfolio.skills {
        let color = category_color(&skill.category);
        b.push(Line::from(vec![
            Span::raw(format!("{:<width$}  ", skill.name, width = name_width)),
            Span::styled(
                create_level_bar(skill.level, bar_width, false),
                Style::default().fg(color),
            ),
            Span::raw(format!(" {:>3}%", skill.level)),
        ]));
    }
    b.blank();

    b.mark(Section::AboutMe);
    b.heading(Section::AboutMe.heading());
    let cgpa = state.cgpa.display(now);
    let commits = state.commits.display(now);
    for sentence in about_sentences(profile, &cgpa, &commits) {
        b.wrapped(&sentence, "", Style::default());
    }
    b.blank();

    b.mark(Section::Contact);
    b.heading(Section::Contact.heading());
    let label_width = state
        .portfolio
        .socials
        .iter()
        .map(|s| s.label.len())
        .max()
        .unwrap_or(0);
    for social in &state.portfolio.socials {
        b.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}  ", social.label, width = label_width),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(social.href.clone(), Style::default().fg(Color::Blue)),
        ]));
    }
    b.blank();
    b.push(Line::from(Span::styled(
        profile.status_headline.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    b.wrapped(&profile.status_text, "", Style::default());
}

fn build_projects_page(b: &mut Builder, state: &AppState) {
    b.blank();
    b.heading("ALL PROJECTS");
    push_cards(b, state);
    b.push(Line::from(Span::styled(
        "[b] GO BACK",
        Style::default().fg(Color::Yellow),
    )));
}

fn push_cards(b: &mut Builder, state: &AppState) {
    let selected = state.gallery.selected();
    for (card, &index) in state.gallery.cards().iter().enumerate() {
        let Some(project) = state.portfolio.projects.get(index) else {
            continue;
        };
        push_card(
            b,
            project,
            selected == Some(card),
            state.gallery.is_expanded(card),
            state.gallery.toggle_label(card),
        );
    }
}

fn push_card(b: &mut Builder, project: &Project, selected: bool, expanded: bool, label: &str) {
    let accent = accent_color(&project.accent);
    let marker = if selected { "> " } else { "  " };
    let mut title = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    if selected {
        title = title.add_modifier(Modifier::REVERSED);
    }

    b.push(Line::from(vec![
        Span::styled(marker, Style::default().fg(accent)),
        Span::styled(project.title.clone(), title),
        Span::styled(
            format!("  {}", project.tech),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    b.wrapped(&project.description, INDENT, Style::default());

    if expanded {
        b.push(Line::from(Span::styled(
            format!("{}Project Details", INDENT),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )));
        let details = &project.details;
        for (key, value) in [
            ("Status", &details.status),
            ("Version", &details.version),
            ("Last Update", &details.last_update),
        ] {
            b.push(Line::from(format!("{}{}: {}", INDENT, key, value)));
        }
        if let Some(url) = project.demo_link() {
            b.push(Line::from(vec![
                Span::raw(format!("{}Launch Demo: ", INDENT)),
                Span::styled(url.to_string(), Style::default().fg(Color::Blue)),
            ]));
        }
        if let Some(url) = project.code_link() {
            b.push(Line::from(vec![
                Span::raw(format!("{}View Code: ", INDENT)),
                Span::styled(url.to_string(), Style::default().fg(Color::Blue)),
            ]));
        }
    }

    let hint = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    b.push(Line::from(Span::styled(
        format!("{}[Enter] {}", INDENT, label),
        hint,
    )));
    b.blank();
}
