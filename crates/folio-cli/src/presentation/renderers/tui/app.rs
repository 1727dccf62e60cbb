use super::document::{self, Document};
use super::navigator::ChannelNavigator;
use super::tui_event::TuiEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_engine::{CommandTable, Counter, Effect, Gallery, Interpreter, ScrollSpy, logo_visible};
use folio_types::{Page, Portfolio, Section};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

/// Rows of look-ahead when deciding which section is active.
const SPY_OFFSET: u16 = 4;
/// The brand mark hides once the page is scrolled this far.
const LOGO_THRESHOLD: u16 = 3;

pub(crate) struct AppState {
    pub portfolio: Portfolio,
    pub hidden: Vec<String>,
    pub table: CommandTable,
    pub page: Page,
    pub gallery: Gallery,
    pub scroll: u16,
    pub width: u16,
    pub viewport_height: u16,
    pub cgpa: Counter,
    pub commits: Counter,
    pub terminal: Option<Interpreter<ChannelNavigator>>,
    pub should_quit: bool,
    spy: ScrollSpy,
    nav_tx: Sender<TuiEvent>,
}

impl AppState {
    pub fn new(
        portfolio: Portfolio,
        hidden: Vec<String>,
        table: CommandTable,
        page: Page,
        nav_tx: Sender<TuiEvent>,
    ) -> Self {
        let gallery = Gallery::new(&portfolio.projects, page, &hidden);
        let cgpa = Counter::new(0.0, portfolio.profile.cgpa, Duration::from_millis(800)).fixed(1);
        let commits = Counter::new(0.0, 0.0, Duration::from_secs(1));

        Self {
            portfolio,
            hidden,
            table,
            page,
            gallery,
            scroll: 0,
            width: 80,
            viewport_height: 24,
            cgpa,
            commits,
            terminal: None,
            should_quit: false,
            spy: ScrollSpy::new(SPY_OFFSET),
            nav_tx,
        }
    }

    pub fn layout(&self, now: Instant) -> Document {
        document::build(self, self.width, now)
    }

    pub fn active_section(&self) -> Option<Section> {
        if self.page != Page::Home {
            return None;
        }
        let doc = self.layout(Instant::now());
        self.spy.active(&doc.tops, self.scroll)
    }

    pub fn show_logo(&self) -> bool {
        logo_visible(self.scroll, LOGO_THRESHOLD)
    }

    /// The last line may be scrolled to the top, so every section can be.
    fn max_scroll(&self, doc: &Document) -> u16 {
        doc.height().saturating_sub(1)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let doc = self.layout(Instant::now());
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll(&doc) as i32);
        self.scroll = target as u16;
    }

    /// No-op when the section is not on the current page.
    pub fn scroll_to_section(&mut self, section_id: &str) {
        let doc = self.layout(Instant::now());
        let Some(section) = Section::from_id(section_id) else {
            tracing::debug!(section_id, "unknown section, ignoring scroll");
            return;
        };
        match doc.tops.iter().find(|(s, _)| *s == section) {
            Some((_, top)) => self.scroll = (*top).min(self.max_scroll(&doc)),
            None => tracing::debug!(section_id, page = %self.page, "section not on page"),
        }
    }

    pub fn navigate_to_page(&mut self, path: &str) {
        let Some(page) = Page::from_path(path) else {
            tracing::warn!(path, "unknown page, ignoring navigation");
            return;
        };
        tracing::info!(%page, "navigating");
        self.page = page;
        self.gallery = Gallery::new(&self.portfolio.projects, page, &self.hidden);
        self.scroll = 0;
        // A page transition unmounts the terminal widget.
        self.terminal = None;
    }

    pub fn apply_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::ScrollToSection(id) => self.scroll_to_section(id),
            Effect::NavigateToPage(path) => self.navigate_to_page(path),
        }
    }

    pub fn set_commit_count(&mut self, count: u64, now: Instant) {
        self.commits.retarget(count as f64, now);
    }

    pub fn toggle_terminal(&mut self) {
        if self.terminal.take().is_none() {
            let navigator = ChannelNavigator::new(self.nav_tx.clone());
            self.terminal = Some(Interpreter::new(self.table.clone(), navigator));
        }
    }

    /// Start the about-me counters the first time the panel is on screen.
    pub fn on_tick(&mut self, now: Instant) {
        if self.cgpa.is_started() && self.commits.is_started() {
            return;
        }
        let doc = self.layout(now);
        let Some((_, top)) = doc.tops.iter().find(|(s, _)| *s == Section::AboutMe) else {
            return;
        };
        let bottom = self.scroll.saturating_add(self.viewport_height);
        if *top >= self.scroll && *top < bottom {
            self.cgpa.start(now);
            self.commits.start(now);
        }
    }

    fn handle_terminal_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.terminal = None;
            return;
        }
        let Some(terminal) = self.terminal.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                terminal.submit_pending();
            }
            KeyCode::Backspace => terminal.backspace(),
            KeyCode::Char(c) => terminal.push_char(c),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.terminal.is_some() {
            self.handle_terminal_key(key);
            return;
        }

        let page_rows = self.viewport_height.saturating_sub(2).max(1) as i32;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') => self.toggle_terminal(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page_rows),
            KeyCode::PageUp => self.scroll_by(-page_rows),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            KeyCode::Right | KeyCode::Char('l') => self.gallery.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.gallery.select_previous(),
            KeyCode::Enter => self.gallery.toggle_selected(),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.scroll_to_section(Section::ALL[idx].id());
            }
            KeyCode::Char('p') => self.scroll_to_section(Section::Projects.id()),
            KeyCode::Char('c') => self.scroll_to_section(Section::Contact.id()),
            KeyCode::Char('a') if self.page == Page::Home => {
                self.navigate_to_page(Page::Projects.path())
            }
            KeyCode::Char('b') | KeyCode::Backspace if self.page == Page::Projects => {
                self.navigate_to_page(Page::Home.path())
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::Preset;
    use std::sync::mpsc::{self, Receiver};

    fn app() -> (AppState, Receiver<TuiEvent>) {
        let (tx, rx) = mpsc::channel();
        let portfolio = Portfolio::default();
        let table = CommandTable::preset(Preset::Navigate, &portfolio);
        let mut state = AppState::new(portfolio, Vec::new(), table, Page::Home, tx);
        state.width = 100;
        state.viewport_height = 20;
        (state, rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(state: &mut AppState, line: &str) {
        for c in line.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
        state.handle_key(key(KeyCode::Enter));
    }

    fn drain(state: &mut AppState, rx: &Receiver<TuiEvent>) {
        while let Ok(event) = rx.try_recv() {
            if let TuiEvent::Navigate(effect) = event {
                state.apply_effect(&effect);
            }
        }
    }

    fn top_of(state: &AppState, section: Section) -> u16 {
        let doc = state.layout(Instant::now());
        doc.tops
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, top)| *top)
            .unwrap()
    }

    #[test]
    fn test_terminal_skills_scrolls_page() {
        let (mut state, rx) = app();
        state.handle_key(key(KeyCode::Char('t')));
        type_line(&mut state, "skills");
        drain(&mut state, &rx);

        assert_eq!(state.scroll, top_of(&state, Section::Skills));
        let terminal = state.terminal.as_ref().unwrap();
        assert_eq!(terminal.transcript().len(), 4);
        assert_eq!(terminal.pending(), "");
    }

    #[test]
    fn test_terminal_about_leaves_scroll_alone() {
        let (mut state, rx) = app();
        state.scroll = 2;
        state.handle_key(key(KeyCode::Char('t')));
        type_line(&mut state, "about");
        drain(&mut state, &rx);

        assert_eq!(state.scroll, 2);
        assert_eq!(state.terminal.as_ref().unwrap().transcript().len(), 4);
    }

    #[test]
    fn test_terminal_projects_changes_page_and_closes() {
        let (mut state, rx) = app();
        state.handle_key(key(KeyCode::Char('t')));
        type_line(&mut state, "Projects");
        drain(&mut state, &rx);

        assert_eq!(state.page, Page::Projects);
        assert!(state.terminal.is_none());
        assert_eq!(state.gallery.len(), 6);
    }

    #[test]
    fn test_keys_go_to_terminal_while_open() {
        let (mut state, _rx) = app();
        state.handle_key(key(KeyCode::Char('t')));
        state.handle_key(key(KeyCode::Char('q')));
        assert!(!state.should_quit);
        assert_eq!(state.terminal.as_ref().unwrap().pending(), "q");

        state.handle_key(key(KeyCode::Esc));
        assert!(state.terminal.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_reopened_terminal_starts_fresh() {
        let (mut state, _rx) = app();
        state.handle_key(key(KeyCode::Char('t')));
        type_line(&mut state, "clear");
        state.handle_key(key(KeyCode::Esc));
        state.handle_key(key(KeyCode::Char('t')));
        assert_eq!(state.terminal.as_ref().unwrap().transcript().len(), 3);
    }

    #[test]
    fn test_scroll_to_missing_section_is_noop() {
        let (mut state, _rx) = app();
        state.scroll = 2;
        state.scroll_to_section("about");
        assert_eq!(state.scroll, 2);

        state.navigate_to_page("/projects");
        state.scroll_to_section("skills");
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_unknown_page_is_ignored() {
        let (mut state, _rx) = app();
        state.navigate_to_page("/blog");
        assert_eq!(state.page, Page::Home);
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let (mut state, _rx) = app();
        state.handle_key(key(KeyCode::Char('4')));
        assert_eq!(state.scroll, top_of(&state, Section::AboutMe));
        assert_eq!(state.active_section(), Some(Section::AboutMe));
        assert!(!state.show_logo());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let (mut state, _rx) = app();
        state.scroll_by(-5);
        assert_eq!(state.scroll, 0);
        state.scroll_by(10_000);
        let doc = state.layout(Instant::now());
        assert_eq!(state.scroll, doc.height() - 1);
    }

    #[test]
    fn test_counters_start_when_about_visible() {
        let (mut state, _rx) = app();
        let now = Instant::now();
        state.on_tick(now);
        assert!(!state.cgpa.is_started());

        state.scroll_to_section("about-me");
        state.on_tick(now);
        assert!(state.cgpa.is_started());
        assert!(state.commits.is_started());
    }

    #[test]
    fn test_commit_count_retargets() {
        let (mut state, _rx) = app();
        state.set_commit_count(420, Instant::now());
        assert_eq!(state.commits.target(), 420.0);
    }

    #[test]
    fn test_view_more_projects_and_back() {
        let (mut state, _rx) = app();
        state.handle_key(key(KeyCode::Char('a')));
        assert_eq!(state.page, Page::Projects);
        state.handle_key(key(KeyCode::Char('b')));
        assert_eq!(state.page, Page::Home);
    }
}
