// Engine - view logic that sits between content (types) and the CLI
// presentation layer. Nothing in here touches a terminal or the network.

pub mod counter;
pub mod gallery;
pub mod scroll_spy;
pub mod terminal;

pub use counter::Counter;
pub use gallery::{Gallery, visible_indices};
pub use scroll_spy::{ScrollSpy, logo_visible};
pub use terminal::{
    CommandAction, CommandTable, Effect, Interpreter, Navigator, NoopNavigator, Outcome, Preset,
    RecordingNavigator, Submission, Transcript,
};
