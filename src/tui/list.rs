/// Keyboard highlight and scroll position of the suggestion list
#[derive(Debug, Clone)]
pub struct SuggestionCursor {
    pub highlighted: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for SuggestionCursor {
    fn default() -> Self {
        Self {
            highlighted: None,
            scroll_offset: 0,
            visible_rows: 8,
        }
    }
}

impl SuggestionCursor {
    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.highlighted {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.highlighted = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.highlighted {
            Some(0) | None => 0,
            Some(i) => (i - 1).min(total - 1),
        };
        self.highlighted = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.highlighted = Some(0);
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.highlighted = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    /// Highlighted index, if it still points inside a list of `total` rows
    pub fn highlighted_in(&self, total: usize) -> Option<usize> {
        self.highlighted.filter(|&i| i < total)
    }

    pub fn reset(&mut self) {
        self.highlighted = None;
        self.scroll_offset = 0;
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_starts_at_top_and_stops_at_bottom() {
        let mut c = SuggestionCursor::default();
        c.select_next(2);
        assert_eq!(c.highlighted, Some(0));
        c.select_next(2);
        c.select_next(2);
        assert_eq!(c.highlighted, Some(1));
    }

    #[test]
    fn scrolls_to_keep_highlight_visible() {
        let mut c = SuggestionCursor {
            visible_rows: 3,
            ..Default::default()
        };
        for _ in 0..5 {
            c.select_next(10);
        }
        assert_eq!(c.highlighted, Some(4));
        assert_eq!(c.scroll_offset, 2);

        c.select_first(10);
        assert_eq!(c.scroll_offset, 0);
    }

    #[test]
    fn empty_list_never_highlights() {
        let mut c = SuggestionCursor::default();
        c.select_next(0);
        c.select_last(0);
        assert_eq!(c.highlighted, None);
        assert_eq!(c.highlighted_in(0), None);
    }
}
