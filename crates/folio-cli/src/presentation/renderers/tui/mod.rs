mod app;
mod components;
mod document;
mod navigator;
mod tui_event;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_engine::CommandTable;
use folio_types::{Page, Portfolio};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use app::AppState;
pub use tui_event::TuiEvent;

/// What the interactive view shows.
pub struct ViewOptions {
    pub portfolio: Portfolio,
    pub hidden: Vec<String>,
    pub table: CommandTable,
    pub page: Page,
}

pub struct TuiRenderer {
    tx: Sender<TuiEvent>,
    rx: Receiver<TuiEvent>,
}

impl TuiRenderer {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// For producers outside the render loop, such as the commit count fetch.
    pub fn sender(&self) -> Sender<TuiEvent> {
        self.tx.clone()
    }

    pub fn run(self, options: ViewOptions) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut app_state = AppState::new(
            options.portfolio,
            options.hidden,
            options.table,
            options.page,
            self.tx.clone(),
        );

        // Short enough for the counters to animate smoothly.
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        while !app_state.should_quit {
            terminal.draw(|f| {
                ui::draw(f, &mut app_state);
            })?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                app_state.handle_key(key);
            }

            while let Ok(tui_event) = self.rx.try_recv() {
                match tui_event {
                    TuiEvent::Navigate(effect) => app_state.apply_effect(&effect),
                    TuiEvent::CommitCount(count) => {
                        tracing::info!(count, "commit count received");
                        app_state.set_commit_count(count, Instant::now());
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                app_state.on_tick(Instant::now());
                last_tick = Instant::now();
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
