use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Text,
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct PageComponent;

impl Component for PageComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let doc = state.layout(Instant::now());
        let body = Paragraph::new(Text::from(doc.lines))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((state.scroll, 0));
        f.render_widget(body, area);
    }
}
