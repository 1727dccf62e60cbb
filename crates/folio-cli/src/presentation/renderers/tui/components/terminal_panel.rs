use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

const PANEL_WIDTH: u16 = 56;
const PANEL_HEIGHT: u16 = 14;

/// Top-right popup over the page body.
pub(crate) fn panel_area(area: Rect) -> Rect {
    let width = PANEL_WIDTH.min(area.width);
    let height = PANEL_HEIGHT.min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

pub(crate) struct TerminalPanelComponent;

impl Component for TerminalPanelComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let Some(terminal) = state.terminal.as_ref() else {
            return;
        };

        let popup = panel_area(area);
        let block = Block::default()
            .title(" terminal ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(popup);

        // Keep the newest lines and the prompt on screen.
        let rows = inner.height.saturating_sub(1) as usize;
        let transcript = terminal.transcript().lines();
        let skip = transcript.len().saturating_sub(rows);

        let mut lines: Vec<Line> = transcript[skip..]
            .iter()
            .map(|line| Line::styled(line.as_str(), Style::default().fg(Color::Green)))
            .collect();
        lines.push(Line::from(vec![
            Span::styled(
                "> ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(terminal.pending()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]));

        f.render_widget(Clear, popup);
        f.render_widget(Paragraph::new(Text::from(lines)).block(block), popup);
    }
}
