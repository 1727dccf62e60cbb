use folio_types::{Page, Project};

/// Indices of the projects shown on `page`.
///
/// The home page hides the titles listed in `hidden`; the projects page shows
/// everything.
pub fn visible_indices(projects: &[Project], page: Page, hidden: &[String]) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| page == Page::Projects || !hidden.iter().any(|h| *h == p.title))
        .map(|(i, _)| i)
        .collect()
}

/// Card grid over a slice of projects: selection cursor and expanded flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    cards: Vec<usize>,
    expanded: Vec<bool>,
    selected: usize,
}

impl Gallery {
    pub fn new(projects: &[Project], page: Page, hidden: &[String]) -> Self {
        let cards = visible_indices(projects, page, hidden);
        let expanded = vec![false; cards.len()];
        Self {
            cards,
            expanded,
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Project indices in display order.
    pub fn cards(&self) -> &[usize] {
        &self.cards
    }

    pub fn selected(&self) -> Option<usize> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn toggle_selected(&mut self) {
        if let Some(flag) = self.expanded.get_mut(self.selected) {
            *flag = !*flag;
        }
    }

    pub fn is_expanded(&self, card: usize) -> bool {
        self.expanded.get(card).copied().unwrap_or(false)
    }

    pub fn toggle_label(&self, card: usize) -> &'static str {
        if self.is_expanded(card) { "Less" } else { "More" }
    }
}
