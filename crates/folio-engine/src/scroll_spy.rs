use folio_types::Section;

/// Tracks which section the viewport is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSpy {
    offset: u16,
}

impl ScrollSpy {
    pub fn new(offset: u16) -> Self {
        Self { offset }
    }

    /// The last section whose top is at or above `scroll + offset`.
    ///
    /// `tops` must be in page order.
    pub fn active(&self, tops: &[(Section, u16)], scroll: u16) -> Option<Section> {
        let probe = scroll.saturating_add(self.offset);
        tops.iter()
            .take_while(|(_, top)| *top <= probe)
            .last()
            .map(|(section, _)| *section)
    }
}

/// The brand mark is only shown near the top of the page.
pub fn logo_visible(scroll: u16, threshold: u16) -> bool {
    scroll < threshold
}
