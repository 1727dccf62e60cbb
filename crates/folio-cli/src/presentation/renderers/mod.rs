pub mod tui;

pub use tui::{TuiEvent, TuiRenderer, ViewOptions};
