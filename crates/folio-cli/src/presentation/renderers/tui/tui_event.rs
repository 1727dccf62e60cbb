use folio_engine::Effect;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Navigation requested by the terminal widget
    Navigate(Effect),
    /// Result of the one-shot commit count lookup
    CommitCount(u64),
}
