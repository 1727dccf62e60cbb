use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;
use folio_types::{Page, Section};

const LOGO: &str = "AI DEV";

pub(crate) struct NavBarComponent;

impl Component for NavBarComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let mut spans = Vec::new();

        if state.show_logo() {
            spans.push(Span::styled(
                LOGO,
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(" ".repeat(LOGO.len())));
        }
        spans.push(Span::raw("  "));

        match state.page {
            Page::Home => {
                let active = state.active_section();
                for (i, section) in Section::ALL.iter().enumerate() {
                    let label = format!("[{}] {}", i + 1, section.id().to_uppercase());
                    let style = if active == Some(*section) {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    spans.push(Span::styled(label, style));
                    spans.push(Span::raw(" "));
                }
            }
            Page::Projects => {
                spans.push(Span::styled(
                    "PROJECTS",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        }

        let terminal_style = if state.terminal.is_some() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("[t] terminal", terminal_style));

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
