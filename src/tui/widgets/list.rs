use crossterm::event::KeyCode;

/// Selection and scroll position of a list widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    selected: Option<usize>,
    scroll_offset: usize,
    scroll_off: usize, // Rows from edge before scrolling (like vim scrolloff)
    wrap_around: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    /// Create a new ListState with no selection
    pub fn new() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            scroll_off: 1,
            wrap_around: true,
        }
    }

    /// Create a new ListState with first item selected
    pub fn with_selection() -> Self {
        Self {
            selected: Some(0),
            ..Self::new()
        }
    }

    pub fn with_wrap_around(mut self, wrap_around: bool) -> Self {
        self.wrap_around = wrap_around;
        self
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// Handle navigation key, returns true if handled
    pub fn handle_key(&mut self, key: KeyCode, item_count: usize, visible_height: usize) -> bool {
        if item_count == 0 {
            return false;
        }

        match key {
            KeyCode::Up => self.move_up(item_count),
            KeyCode::Down => self.move_down(item_count),
            KeyCode::PageUp => {
                let sel = self.selected.unwrap_or(0);
                self.selected = Some(sel.saturating_sub(visible_height.max(1)));
            }
            KeyCode::PageDown => {
                let sel = self.selected.unwrap_or(0);
                self.selected = Some((sel + visible_height.max(1)).min(item_count - 1));
            }
            KeyCode::Home => self.selected = Some(0),
            KeyCode::End => self.selected = Some(item_count - 1),
            _ => return false,
        }

        self.update_scroll(visible_height, item_count);
        true
    }

    fn move_up(&mut self, item_count: usize) {
        self.selected = match self.selected {
            Some(0) if self.wrap_around => Some(item_count - 1),
            Some(sel) => Some(sel.saturating_sub(1)),
            None => Some(0),
        };
    }

    fn move_down(&mut self, item_count: usize) {
        self.selected = match self.selected {
            Some(sel) if sel + 1 < item_count => Some(sel + 1),
            Some(_) if self.wrap_around => Some(0),
            Some(sel) => Some(sel),
            None => Some(0),
        };
    }

    /// Keep the selection visible with `scroll_off` rows of context
    pub fn update_scroll(&mut self, visible_height: usize, item_count: usize) {
        let Some(sel) = self.selected else {
            return;
        };
        if visible_height == 0 {
            return;
        }

        let margin = self.scroll_off.min(visible_height.saturating_sub(1) / 2);
        let min_scroll = (sel + margin + 1).saturating_sub(visible_height);
        let max_scroll = sel.saturating_sub(margin);

        self.scroll_offset = self.scroll_offset.clamp(min_scroll, max_scroll.max(min_scroll));
        self.scroll_offset = self
            .scroll_offset
            .min(item_count.saturating_sub(visible_height));
    }
}
