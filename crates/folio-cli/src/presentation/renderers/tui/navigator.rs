use super::tui_event::TuiEvent;
use folio_engine::{Effect, Navigator};
use std::sync::mpsc::Sender;

/// Forwards navigation requests to the render loop, which applies them after
/// the current key has been handled.
pub struct ChannelNavigator {
    tx: Sender<TuiEvent>,
}

impl ChannelNavigator {
    pub fn new(tx: Sender<TuiEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, effect: Effect) {
        if self.tx.send(TuiEvent::Navigate(effect)).is_err() {
            tracing::debug!("render loop gone, dropping navigation request");
        }
    }
}

impl Navigator for ChannelNavigator {
    fn scroll_to_section(&mut self, section_id: &str) {
        self.send(Effect::ScrollToSection(section_id.to_string()));
    }

    fn navigate_to_page(&mut self, path: &str) {
        self.send(Effect::NavigateToPage(path.to_string()));
    }
}
