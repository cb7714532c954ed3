use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::nav::{NavigationController, ScreenId};
use crate::tui::element::{ColumnBuilder, RowBuilder};
use crate::tui::{Element, LayoutConstraint, ListState, Theme};

const PANEL_WIDTH: u16 = 36;

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayMsg {
    Toggle,
    Close,
    Previous,
    Next,
    Jump(ScreenId),
    ListNavigate(KeyCode),
    Activate(usize),
}

/// Floating jump menu over the current screen.
///
/// Owns only its open flag and list selection; every navigation goes
/// through the controller it is handed.
#[derive(Debug, Clone, Default)]
pub struct FloatingNavOverlay {
    open: bool,
    list_state: ListState,
}

impl FloatingNavOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self, controller: &NavigationController) {
        self.open = !self.open;
        if self.open {
            self.sync_selection(controller);
        }
        log::debug!("Navigation overlay {}", if self.open { "opened" } else { "closed" });
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Highlighted row of the jump list
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn sync_selection(&mut self, controller: &NavigationController) {
        let registry = controller.registry();
        self.list_state.select(registry.jump_index_of(controller.current()));
        self.list_state.update_scroll(registry.jump_len(), registry.jump_len());
    }

    pub fn update(&mut self, msg: OverlayMsg, controller: &mut NavigationController) {
        match msg {
            OverlayMsg::Toggle => self.toggle(controller),
            OverlayMsg::Close => self.close(),
            OverlayMsg::Previous => {
                if controller.step_previous() {
                    self.sync_selection(controller);
                }
            }
            OverlayMsg::Next => {
                if controller.step_next() {
                    self.sync_selection(controller);
                }
            }
            OverlayMsg::Jump(id) => {
                controller.navigate(id);
                self.close();
            }
            OverlayMsg::ListNavigate(key) => {
                let len = controller.registry().jump_len();
                self.list_state.handle_key(key, len, len);
            }
            OverlayMsg::Activate(index) => {
                let target = controller.registry().jump_list().nth(index).map(|entry| entry.id);
                match target {
                    Some(id) => self.update(OverlayMsg::Jump(id), controller),
                    None => log::warn!("Overlay activated missing jump entry {}", index),
                }
            }
        }
    }

    /// Keys while open; returns true when the overlay consumed the key
    pub fn handle_key(&mut self, key_event: KeyEvent, controller: &mut NavigationController) -> bool {
        if !self.open || controller.current() == ScreenId::Intro {
            return false;
        }
        if key_event.kind != KeyEventKind::Press {
            return true;
        }

        let msg = match key_event.code {
            KeyCode::Char('[') | KeyCode::Left => Some(OverlayMsg::Previous),
            KeyCode::Char(']') | KeyCode::Right => Some(OverlayMsg::Next),
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home | KeyCode::End => {
                Some(OverlayMsg::ListNavigate(key_event.code))
            }
            KeyCode::Enter => self.list_state.selected().map(OverlayMsg::Activate),
            KeyCode::Esc => Some(OverlayMsg::Close),
            _ => None,
        };

        if let Some(msg) = msg {
            self.update(msg, controller);
        }
        true
    }

    fn toggle_button(&self) -> Element<OverlayMsg> {
        let label = if self.open { "✕ Close" } else { "☰ Navigate" };
        Element::button("nav-toggle", label)
            .on_press(OverlayMsg::Toggle)
            .build()
    }

    /// The overlay's element tree, or `None` while the introduction is showing
    pub fn view(&self, controller: &NavigationController, theme: &Theme) -> Option<Element<OverlayMsg>> {
        if controller.current() == ScreenId::Intro {
            return None;
        }
        if !self.open {
            return Some(self.toggle_button());
        }

        let registry = controller.registry();
        let current = controller.current();
        let jump_len = registry.jump_len();
        // Position counts over the whole registry, the jump list omits intro
        let position = controller
            .current_index()
            .map(|i| format!("{} of {}", i + 1, registry.len()))
            .unwrap_or_else(|| format!("- of {}", registry.len()));

        let stepper = RowBuilder::new()
            .add(
                Element::button("nav-prev", "◀ Prev")
                    .on_press_opt(controller.previous().map(|_| OverlayMsg::Previous))
                    .build(),
                LayoutConstraint::Fill(1),
            )
            .add(
                Element::button("nav-next", "Next ▶")
                    .on_press_opt(controller.next().map(|_| OverlayMsg::Next))
                    .build(),
                LayoutConstraint::Fill(1),
            )
            .build();

        let dots: Vec<Span<'static>> = registry
            .entries()
            .iter()
            .map(|entry| {
                if entry.id == current {
                    Span::styled("● ", Style::default().fg(theme.accent_primary))
                } else {
                    Span::styled("○ ", Style::default().fg(theme.border_secondary))
                }
            })
            .collect();

        let items = registry
            .jump_list()
            .map(|entry| {
                if entry.id == current {
                    Element::styled(
                        entry.title,
                        Style::default()
                            .fg(theme.accent_primary)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Element::styled(entry.title, Style::default().fg(theme.text_secondary))
                }
            })
            .collect();

        let list = Element::list("nav-list", items, &self.list_state)
            .on_select(OverlayMsg::Activate)
            .on_activate(OverlayMsg::Activate)
            .on_navigate(OverlayMsg::ListNavigate)
            .build();

        let body = ColumnBuilder::new()
            .add(
                Element::styled(controller.current_title(), theme.heading_style()),
                LayoutConstraint::Length(1),
            )
            .add(
                Element::styled(position, theme.muted_style()),
                LayoutConstraint::Length(1),
            )
            .add(stepper, LayoutConstraint::Length(3))
            .add(
                Element::styled_text(Line::from(dots)).build(),
                LayoutConstraint::Length(1),
            )
            .add(list, LayoutConstraint::Length(jump_len as u16))
            .build();

        let panel = Element::panel(body)
            .title("Navigation")
            .width(PANEL_WIDTH)
            .height(jump_len as u16 + 8)
            .border_style(Style::default().fg(theme.accent_tertiary))
            .build();

        let toggle_row = RowBuilder::new()
            .add(Element::None, LayoutConstraint::Fill(1))
            .add(self.toggle_button(), LayoutConstraint::Length(11))
            .build();

        Some(
            ColumnBuilder::new()
                .add(panel, LayoutConstraint::Length(jump_len as u16 + 8))
                .add(toggle_row, LayoutConstraint::Length(3))
                .build(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn dot_count(view: &Element<OverlayMsg>) -> usize {
        view.texts()
            .iter()
            .map(|text| text.matches('●').count() + text.matches('○').count())
            .sum()
    }

    fn at(id: ScreenId) -> NavigationController {
        NavigationController::starting_at(id)
    }

    fn opened(controller: &NavigationController) -> FloatingNavOverlay {
        let mut overlay = FloatingNavOverlay::new();
        overlay.toggle(controller);
        overlay
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_hidden_on_intro_even_when_open() {
        let controller = at(ScreenId::Intro);
        let overlay = opened(&controller);
        assert!(overlay.is_open());
        assert!(overlay.view(&controller, &Theme::default()).is_none());
    }

    #[test]
    fn test_closed_view_is_toggle_only() {
        let controller = at(ScreenId::Dashboard);
        let view = FloatingNavOverlay::new()
            .view(&controller, &Theme::default())
            .unwrap();
        assert_eq!(view.press_msg("nav-toggle"), Some(&OverlayMsg::Toggle));
        assert!(view.find("nav-list").is_none());
    }

    #[test]
    fn test_open_view_on_login() {
        let controller = at(ScreenId::Login);
        let view = opened(&controller).view(&controller, &Theme::default()).unwrap();

        assert!(view.contains_text("Login"));
        assert!(view.contains_text("2 of 10"));
        assert_eq!(dot_count(&view), 10);
        assert_eq!(view.press_msg("nav-prev"), None);
        assert_eq!(view.press_msg("nav-next"), Some(&OverlayMsg::Next));
        assert!(!view.contains_text("Introduction"));
    }

    #[test]
    fn test_next_disabled_on_admin() {
        let controller = at(ScreenId::Admin);
        let view = opened(&controller).view(&controller, &Theme::default()).unwrap();
        assert!(view.contains_text("10 of 10"));
        assert_eq!(view.press_msg("nav-next"), None);
        assert_eq!(view.press_msg("nav-prev"), Some(&OverlayMsg::Previous));
    }

    #[test]
    fn test_jump_navigates_and_closes() {
        let mut controller = at(ScreenId::Dashboard);
        let mut overlay = opened(&controller);
        overlay.update(OverlayMsg::Jump(ScreenId::Growth), &mut controller);
        assert_eq!(controller.current(), ScreenId::Growth);
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_stepping_keeps_overlay_open() {
        let mut controller = at(ScreenId::Dashboard);
        let mut overlay = opened(&controller);
        overlay.update(OverlayMsg::Next, &mut controller);
        assert_eq!(controller.current(), ScreenId::RoleExplainer);
        assert!(overlay.is_open());
        assert_eq!(overlay.selected(), Some(2));

        overlay.update(OverlayMsg::Previous, &mut controller);
        overlay.update(OverlayMsg::Previous, &mut controller);
        assert_eq!(controller.current(), ScreenId::Login);
        overlay.update(OverlayMsg::Previous, &mut controller);
        assert_eq!(controller.current(), ScreenId::Login);
    }

    #[test]
    fn test_keyboard_list_activation() {
        let mut controller = at(ScreenId::Login);
        let mut overlay = opened(&controller);
        assert_eq!(overlay.selected(), Some(0));

        assert!(overlay.handle_key(key(KeyCode::Down), &mut controller));
        assert!(overlay.handle_key(key(KeyCode::Down), &mut controller));
        assert!(overlay.handle_key(key(KeyCode::Enter), &mut controller));
        assert_eq!(controller.current(), ScreenId::RoleExplainer);
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_bracket_keys_and_esc() {
        let mut controller = at(ScreenId::Tracker);
        let mut overlay = opened(&controller);
        overlay.handle_key(key(KeyCode::Char(']')), &mut controller);
        assert_eq!(controller.current(), ScreenId::Compare);
        overlay.handle_key(key(KeyCode::Char('[')), &mut controller);
        assert_eq!(controller.current(), ScreenId::Tracker);

        assert!(overlay.handle_key(key(KeyCode::Char('z')), &mut controller));
        overlay.handle_key(key(KeyCode::Esc), &mut controller);
        assert!(!overlay.is_open());
        assert!(!overlay.handle_key(key(KeyCode::Char('z')), &mut controller));
    }

    #[test]
    fn test_activate_out_of_range_is_ignored() {
        let mut controller = at(ScreenId::Login);
        let mut overlay = opened(&controller);
        overlay.update(OverlayMsg::Activate(42), &mut controller);
        assert_eq!(controller.current(), ScreenId::Login);
        assert!(overlay.is_open());
    }
}
