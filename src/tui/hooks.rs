//! Stable names for rendered regions
//!
//! Each frame records where every hook was drawn. Mouse handling resolves clicks
//! through these regions, and tests use them to find widgets on screen.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    SearchInput,
    SuggestionsList,
    SuggestionItem,
    NoSuggestionsMessage,
}

impl Hook {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hook::SearchInput => "search-input",
            Hook::SuggestionsList => "suggestions-list",
            Hook::SuggestionItem => "suggestion-item",
            Hook::NoSuggestionsMessage => "no-suggestions-message",
        }
    }
}

/// Screen regions of the last drawn frame
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub input: Rect,
    pub list: Option<Rect>,
    /// One entry per drawn suggestion row, with the person's slug
    pub items: Vec<(Rect, String)>,
    pub alert: Option<Rect>,
}

impl HitAreas {
    /// Slug of the suggestion row under `pos`
    pub fn item_at(&self, pos: Position) -> Option<&str> {
        self.items
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, slug)| slug.as_str())
    }

    /// Innermost hook under `pos`
    pub fn hook_at(&self, pos: Position) -> Option<Hook> {
        if self.item_at(pos).is_some() {
            Some(Hook::SuggestionItem)
        } else if self.list.is_some_and(|r| r.contains(pos)) {
            Some(Hook::SuggestionsList)
        } else if self.alert.is_some_and(|r| r.contains(pos)) {
            Some(Hook::NoSuggestionsMessage)
        } else if self.input.contains(pos) {
            Some(Hook::SearchInput)
        } else {
            None
        }
    }

    /// Every region drawn for `hook`
    pub fn regions(&self, hook: Hook) -> Vec<Rect> {
        match hook {
            Hook::SearchInput => vec![self.input],
            Hook::SuggestionsList => self.list.into_iter().collect(),
            Hook::SuggestionItem => self.items.iter().map(|(r, _)| *r).collect(),
            Hook::NoSuggestionsMessage => self.alert.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_wins_over_enclosing_list() {
        let areas = HitAreas {
            input: Rect::new(0, 0, 20, 3),
            list: Some(Rect::new(0, 3, 20, 4)),
            items: vec![(Rect::new(1, 4, 18, 1), "anna".into())],
            alert: None,
        };

        assert_eq!(areas.hook_at(Position::new(2, 4)), Some(Hook::SuggestionItem));
        assert_eq!(areas.item_at(Position::new(2, 4)), Some("anna"));
        assert_eq!(areas.hook_at(Position::new(0, 3)), Some(Hook::SuggestionsList));
        assert_eq!(areas.hook_at(Position::new(5, 1)), Some(Hook::SearchInput));
        assert_eq!(areas.hook_at(Position::new(5, 10)), None);
        assert!(areas.regions(Hook::NoSuggestionsMessage).is_empty());
    }
}
