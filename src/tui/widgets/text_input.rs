use crossterm::event::KeyCode;

/// Cursor and horizontal scroll of a single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    cursor_pos: usize,    // Character index (0 = before first char)
    scroll_offset: usize, // For horizontal scrolling when text > width
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_cursor_to_end(&mut self, text: &str) {
        self.cursor_pos = text.chars().count();
    }

    /// Apply a key to `current_value`.
    /// Returns Some(new_value) if text changed, None if only the cursor moved
    pub fn handle_key(
        &mut self,
        key: KeyCode,
        current_value: &str,
        max_length: Option<usize>,
    ) -> Option<String> {
        let mut chars: Vec<char> = current_value.chars().collect();
        self.cursor_pos = self.cursor_pos.min(chars.len());

        match key {
            KeyCode::Char(c) => {
                if max_length.is_some_and(|max| chars.len() >= max) {
                    return None;
                }
                chars.insert(self.cursor_pos, c);
                self.cursor_pos += 1;
                Some(chars.into_iter().collect())
            }
            KeyCode::Backspace if self.cursor_pos > 0 => {
                chars.remove(self.cursor_pos - 1);
                self.cursor_pos -= 1;
                Some(chars.into_iter().collect())
            }
            KeyCode::Delete if self.cursor_pos < chars.len() => {
                chars.remove(self.cursor_pos);
                Some(chars.into_iter().collect())
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_pos = (self.cursor_pos + 1).min(chars.len());
                None
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                None
            }
            KeyCode::End => {
                self.cursor_pos = chars.len();
                None
            }
            _ => None,
        }
    }

    /// Update scroll offset to keep cursor visible
    pub fn update_scroll(&mut self, visible_width: usize, text: &str) {
        if visible_width == 0 {
            return;
        }
        let char_count = text.chars().count();

        if self.cursor_pos < self.scroll_offset {
            self.scroll_offset = self.cursor_pos;
        } else if self.cursor_pos >= self.scroll_offset + visible_width {
            self.scroll_offset = self.cursor_pos + 1 - visible_width;
        }

        // The cursor may sit one past the last char
        let max_offset = (char_count + 1).saturating_sub(visible_width);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(state: &mut TextInputState, value: &mut String, s: &str) {
        for c in s.chars() {
            if let Some(v) = state.handle_key(KeyCode::Char(c), value, None) {
                *value = v;
            }
        }
    }

    #[test]
    fn test_typing_and_editing() {
        let mut state = TextInputState::new();
        let mut value = String::new();
        type_str(&mut state, &mut value, "alex");
        assert_eq!(value, "alex");
        assert_eq!(state.cursor_pos(), 4);

        state.handle_key(KeyCode::Home, &value, None);
        value = state.handle_key(KeyCode::Delete, &value, None).unwrap();
        assert_eq!(value, "lex");

        state.handle_key(KeyCode::End, &value, None);
        value = state.handle_key(KeyCode::Backspace, &value, None).unwrap();
        assert_eq!(value, "le");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut state = TextInputState::new();
        assert_eq!(state.handle_key(KeyCode::Backspace, "abc", None), None);
    }

    #[test]
    fn test_max_length() {
        let mut state = TextInputState::new();
        state.set_cursor_to_end("123456");
        assert_eq!(state.handle_key(KeyCode::Char('7'), "123456", Some(6)), None);
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let mut state = TextInputState::new();
        let text = "abcdefghij";
        state.set_cursor_to_end(text);
        state.update_scroll(4, text);
        assert_eq!(state.scroll_offset(), 7);

        state.handle_key(KeyCode::Home, text, None);
        state.update_scroll(4, text);
        assert_eq!(state.scroll_offset(), 0);
    }
}
