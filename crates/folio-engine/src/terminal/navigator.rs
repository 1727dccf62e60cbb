use serde::{Deserialize, Serialize};

/// Navigation capability handed to the interpreter.
///
/// `scroll_to_section` must be a no-op when the section is not on the current
/// view; `navigate_to_page` is a full page transition.
pub trait Navigator {
    fn scroll_to_section(&mut self, section_id: &str);
    fn navigate_to_page(&mut self, path: &str);
}

/// A requested navigation, as delivered to a [`Navigator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Effect {
    ScrollToSection(String),
    NavigateToPage(String),
}

impl Effect {
    pub fn deliver<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        match self {
            Effect::ScrollToSection(id) => navigator.scroll_to_section(id),
            Effect::NavigateToPage(path) => navigator.navigate_to_page(path),
        }
    }
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn scroll_to_section(&mut self, section_id: &str) {
        (**self).scroll_to_section(section_id)
    }

    fn navigate_to_page(&mut self, path: &str) {
        (**self).navigate_to_page(path)
    }
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn scroll_to_section(&mut self, section_id: &str) {
        (**self).scroll_to_section(section_id)
    }

    fn navigate_to_page(&mut self, path: &str) {
        (**self).navigate_to_page(path)
    }
}

/// Discards every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn scroll_to_section(&mut self, _section_id: &str) {}
    fn navigate_to_page(&mut self, _path: &str) {}
}

/// Keeps every request in order. Used by script replay and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingNavigator {
    effects: Vec<Effect>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }
}

impl Navigator for RecordingNavigator {
    fn scroll_to_section(&mut self, section_id: &str) {
        self.effects.push(Effect::ScrollToSection(section_id.to_string()));
    }

    fn navigate_to_page(&mut self, path: &str) {
        self.effects.push(Effect::NavigateToPage(path.to_string()));
    }
}
