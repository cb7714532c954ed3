use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};

/// Information about a focusable element
pub struct FocusableInfo<Msg> {
    pub id: FocusId,
    pub rect: Rect,
    pub on_key: Box<dyn Fn(KeyCode) -> DispatchTarget<Msg>>,
    pub inside_panel: bool, // Panels draw the focus border instead of the widget
}

/// Focusable elements registered during the last render, in tab order.
///
/// Stacks with a dimmed layer clear the registry before painting the top
/// layer, so only the topmost interactive layer is ever reachable.
pub struct FocusRegistry<Msg> {
    focusables: Vec<FocusableInfo<Msg>>,
}

impl<Msg> Default for FocusRegistry<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Msg> FocusRegistry<Msg> {
    pub fn new() -> Self {
        Self {
            focusables: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.focusables.clear();
    }

    pub fn register_focusable(&mut self, info: FocusableInfo<Msg>) {
        if self.contains(&info.id) {
            log::warn!("Duplicate FocusId {:?}, last registration wins", info.id);
            self.focusables.retain(|f| f.id != info.id);
        }
        self.focusables.push(info);
    }

    pub fn find(&self, id: &FocusId) -> Option<&FocusableInfo<Msg>> {
        self.focusables.iter().find(|f| &f.id == id)
    }

    pub fn contains(&self, id: &FocusId) -> bool {
        self.find(id).is_some()
    }

    pub fn ids(&self) -> Vec<FocusId> {
        self.focusables.iter().map(|f| f.id.clone()).collect()
    }

    pub fn first(&self) -> Option<FocusId> {
        self.focusables.first().map(|f| f.id.clone())
    }

    pub fn find_at_position(&self, x: u16, y: u16) -> Option<FocusId> {
        self.focusables
            .iter()
            .rev()
            .find(|f| f.rect.contains(Position { x, y }))
            .map(|f| f.id.clone())
    }

    /// The element after `current`, wrapping; the first one when nothing is focused
    pub fn next_focus(&self, current: Option<&FocusId>) -> Option<FocusId> {
        let len = self.focusables.len();
        if len == 0 {
            return None;
        }
        let index = match current.and_then(|id| self.position(id)) {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        Some(self.focusables[index].id.clone())
    }

    /// The element before `current`, wrapping; the last one when nothing is focused
    pub fn prev_focus(&self, current: Option<&FocusId>) -> Option<FocusId> {
        let len = self.focusables.len();
        if len == 0 {
            return None;
        }
        let index = match current.and_then(|id| self.position(id)) {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        Some(self.focusables[index].id.clone())
    }

    /// Run the focused element's key handler
    pub fn dispatch_key(&self, focused_id: &FocusId, key: KeyCode) -> DispatchTarget<Msg> {
        match self.find(focused_id) {
            Some(focusable) => (focusable.on_key)(key),
            None => DispatchTarget::PassThrough,
        }
    }

    fn position(&self, id: &FocusId) -> Option<usize> {
        self.focusables.iter().position(|f| &f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: &'static str, x: u16) -> FocusableInfo<&'static str> {
        FocusableInfo {
            id: FocusId(id),
            rect: Rect::new(x, 0, 5, 1),
            on_key: Box::new(move |key| match key {
                KeyCode::Enter => DispatchTarget::AppMsg(id),
                _ => DispatchTarget::PassThrough,
            }),
            inside_panel: false,
        }
    }

    fn registry() -> FocusRegistry<&'static str> {
        let mut registry = FocusRegistry::new();
        registry.register_focusable(info("a", 0));
        registry.register_focusable(info("b", 5));
        registry.register_focusable(info("c", 10));
        registry
    }

    #[test]
    fn test_cycle_wraps() {
        let registry = registry();
        assert_eq!(registry.next_focus(None), Some(FocusId("a")));
        assert_eq!(registry.next_focus(Some(&FocusId("c"))), Some(FocusId("a")));
        assert_eq!(registry.prev_focus(None), Some(FocusId("c")));
        assert_eq!(registry.prev_focus(Some(&FocusId("a"))), Some(FocusId("c")));
        assert_eq!(registry.next_focus(Some(&FocusId("gone"))), Some(FocusId("a")));
    }

    #[test]
    fn test_empty_registry() {
        let registry: FocusRegistry<&str> = FocusRegistry::new();
        assert_eq!(registry.next_focus(None), None);
        assert_eq!(registry.prev_focus(None), None);
    }

    #[test]
    fn test_find_at_position_and_dispatch() {
        let registry = registry();
        assert_eq!(registry.find_at_position(6, 0), Some(FocusId("b")));
        assert_eq!(registry.find_at_position(6, 3), None);

        assert!(matches!(
            registry.dispatch_key(&FocusId("b"), KeyCode::Enter),
            DispatchTarget::AppMsg("b")
        ));
        assert!(matches!(
            registry.dispatch_key(&FocusId("b"), KeyCode::Left),
            DispatchTarget::PassThrough
        ));
    }

    #[test]
    fn test_duplicate_id_replaces() {
        let mut registry = registry();
        registry.register_focusable(info("a", 20));
        assert_eq!(registry.ids(), vec![FocusId("b"), FocusId("c"), FocusId("a")]);
    }
}
