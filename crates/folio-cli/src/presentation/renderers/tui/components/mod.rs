use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod nav_bar;
pub(crate) mod page;
pub(crate) mod terminal_panel;

pub(crate) use nav_bar::NavBarComponent;
pub(crate) use page::PageComponent;
pub(crate) use terminal_panel::TerminalPanelComponent;
