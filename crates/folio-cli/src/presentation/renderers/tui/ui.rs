use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::app::AppState;
use super::components::{Component, NavBarComponent, PageComponent, TerminalPanelComponent};
use folio_types::Page;

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    // The body block spends one row on its top border.
    state.width = main_chunks[1].width;
    state.viewport_height = main_chunks[1].height.saturating_sub(1);

    NavBarComponent.render(f, main_chunks[0], state);
    PageComponent.render(f, main_chunks[1], state);
    TerminalPanelComponent.render(f, main_chunks[1], state);

    render_footer(f, main_chunks[2], state);
}

fn footer_hint(state: &AppState) -> &'static str {
    if state.terminal.is_some() {
        "type a command  [Enter] run  [Esc] close terminal"
    } else if state.page == Page::Projects {
        "[j/k] scroll  [h/l] select  [Enter] details  [b] back  [t] terminal  [q] quit"
    } else {
        "[j/k] scroll  [1-5] jump  [h/l] select  [Enter] details  [t] terminal  [q] quit"
    }
}

fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let footer = Paragraph::new(Line::from(footer_hint(state)))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, area);
}
