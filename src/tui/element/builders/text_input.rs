use crate::tui::element::FocusId;
use crate::tui::Element;
use crossterm::event::KeyCode;

/// Builder for single-line text inputs
pub struct TextInputBuilder<Msg> {
    pub(crate) id: FocusId,
    pub(crate) value: String,
    pub(crate) cursor_pos: usize,
    pub(crate) scroll_offset: usize,
    pub(crate) placeholder: Option<String>,
    pub(crate) on_change: Option<fn(KeyCode) -> Msg>,
    pub(crate) on_submit: Option<Msg>,
}

impl<Msg> TextInputBuilder<Msg> {
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Receives every key except Enter, Esc and Tab; feed it to `TextInputState::handle_key`
    pub fn on_change(mut self, f: fn(KeyCode) -> Msg) -> Self {
        self.on_change = Some(f);
        self
    }

    pub fn on_submit(mut self, msg: Msg) -> Self {
        self.on_submit = Some(msg);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::TextInput {
            id: self.id,
            value: self.value,
            cursor_pos: self.cursor_pos,
            scroll_offset: self.scroll_offset,
            placeholder: self.placeholder,
            on_change: self.on_change,
            on_submit: self.on_submit,
        }
    }
}
