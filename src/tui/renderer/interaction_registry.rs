use ratatui::layout::{Position, Rect};

/// Click targets registered during the last render, in paint order
pub struct InteractionRegistry<Msg> {
    click_handlers: Vec<(Rect, Msg)>,
}

impl<Msg: Clone> Default for InteractionRegistry<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Msg: Clone> InteractionRegistry<Msg> {
    pub fn new() -> Self {
        Self {
            click_handlers: Vec::new(),
        }
    }

    pub fn register_click(&mut self, rect: Rect, msg: Msg) {
        self.click_handlers.push((rect, msg));
    }

    pub fn find_click(&self, x: u16, y: u16) -> Option<Msg> {
        // Search in reverse order so topmost layers are checked first
        self.click_handlers
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(Position { x, y }))
            .map(|(_, msg)| msg.clone())
    }

    pub fn len(&self) -> usize {
        self.click_handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.click_handlers.is_empty()
    }

    pub fn clear(&mut self) {
        self.click_handlers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_click_wins() {
        let mut registry = InteractionRegistry::new();
        registry.register_click(Rect::new(0, 0, 10, 10), "below");
        registry.register_click(Rect::new(2, 2, 3, 3), "above");

        assert_eq!(registry.find_click(3, 3), Some("above"));
        assert_eq!(registry.find_click(0, 0), Some("below"));
        assert_eq!(registry.find_click(10, 10), None);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let registry: InteractionRegistry<u8> = InteractionRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.find_click(0, 0), None);
    }
}
