use crate::tui::element::FocusId;
use crate::tui::Element;
use crossterm::event::KeyCode;

/// Builder for list elements
pub struct ListBuilder<Msg> {
    pub(crate) id: FocusId,
    pub(crate) items: Vec<Element<Msg>>,
    pub(crate) selected: Option<usize>,
    pub(crate) scroll_offset: usize,
    pub(crate) on_select: Option<fn(usize) -> Msg>,
    pub(crate) on_activate: Option<fn(usize) -> Msg>,
    pub(crate) on_navigate: Option<fn(KeyCode) -> Msg>,
}

impl<Msg> ListBuilder<Msg> {
    /// Called with the item index when an item is clicked
    pub fn on_select(mut self, f: fn(usize) -> Msg) -> Self {
        self.on_select = Some(f);
        self
    }

    /// Called with the selected index when Enter is pressed
    pub fn on_activate(mut self, f: fn(usize) -> Msg) -> Self {
        self.on_activate = Some(f);
        self
    }

    /// Called with navigation keys (Up, Down, PageUp, PageDown, Home, End)
    pub fn on_navigate(mut self, f: fn(KeyCode) -> Msg) -> Self {
        self.on_navigate = Some(f);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::List {
            id: self.id,
            items: self.items,
            selected: self.selected,
            scroll_offset: self.scroll_offset,
            on_select: self.on_select,
            on_activate: self.on_activate,
            on_navigate: self.on_navigate,
        }
    }
}
