use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::nav::{NavigationController, ScreenId};
use crate::tui::element::{ColumnBuilder, FocusId, RowBuilder};
use crate::tui::runtime::Effect;
use crate::tui::{
    AppRuntime, Element, FloatingNavOverlay, FocusRegistry, InteractionRegistry, KeyBinding, Layer,
    LayoutConstraint, ModalState, OverlayMsg, Renderer, RuntimeConfig, ScreenRenderer, Theme,
};

const APP_NAME: &str = "Smart Job Aggregator";
const HELP_WIDTH: u16 = 64;
/// Gap between the floating overlay and the screen edge
const OVERLAY_MARGIN: u16 = 1;

/// Clicks on the shell's own modals
#[derive(Debug, Clone, PartialEq)]
enum ModalMsg {
    ConfirmQuit,
    CancelQuit,
    CloseHelp,
}

/// Application root: owns navigation and the mounted screen.
///
/// Input is offered to the quit prompt, the help modal, the global key
/// bindings, the floating overlay and finally the screen, in that order.
pub struct Shell {
    controller: NavigationController,
    screen: Box<dyn AppRuntime>,

    overlay: FloatingNavOverlay,
    overlay_registry: InteractionRegistry<OverlayMsg>,
    overlay_focus: FocusRegistry<OverlayMsg>,
    /// Where the overlay was last drawn
    overlay_area: Option<Rect>,

    help: ModalState<()>,
    help_scroll: usize,
    quit_prompt: ModalState<()>,
    modal_registry: InteractionRegistry<ModalMsg>,
    modal_focus: FocusRegistry<ModalMsg>,

    config: RuntimeConfig,
}

impl Shell {
    pub fn new(config: RuntimeConfig, start: ScreenId) -> Self {
        let controller = NavigationController::starting_at(start);
        let screen = ScreenRenderer::mount(controller.state());
        log::info!("Shell started on {}", controller.current_title());

        Self {
            controller,
            screen,
            overlay: FloatingNavOverlay::new(),
            overlay_registry: InteractionRegistry::new(),
            overlay_focus: FocusRegistry::new(),
            overlay_area: None,
            help: ModalState::Closed,
            help_scroll: 0,
            quit_prompt: ModalState::Closed,
            modal_registry: InteractionRegistry::new(),
            modal_focus: FocusRegistry::new(),
            config,
        }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn overlay(&self) -> &FloatingNavOverlay {
        &self.overlay
    }

    pub fn screen_id(&self) -> ScreenId {
        self.screen.screen_id()
    }

    pub fn is_help_open(&self) -> bool {
        self.help.is_open()
    }

    pub fn is_quit_prompt_open(&self) -> bool {
        self.quit_prompt.is_open()
    }

    pub fn frame_interval(&self) -> std::time::Duration {
        self.config.frame
    }

    /// Apply what the screen asked for, then remount if the screen changed
    fn sync(&mut self) {
        for effect in self.screen.take_effects() {
            match effect {
                Effect::Navigate(target) => self.controller.navigate(target),
                Effect::Login(session) => self.controller.login(session),
            }
        }

        if self.controller.current() != self.screen.screen_id() {
            self.screen = ScreenRenderer::mount(self.controller.state());
            if self.controller.current() == ScreenId::Intro {
                self.overlay.close();
            }
        }
    }

    /// Returns `Ok(false)` once the user has confirmed quitting
    pub fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(true);
        }

        if self.quit_prompt.is_open() {
            return Ok(match key_event.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => false,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.quit_prompt.close();
                    true
                }
                _ => true,
            });
        }

        if self.help.is_open() {
            match key_event.code {
                KeyCode::Esc => self.help.close(),
                _ if self.config.keybinds.help.matches(&key_event) => self.help.close(),
                KeyCode::Up => self.help_scroll = self.help_scroll.saturating_sub(1),
                KeyCode::Down => self.help_scroll = self.help_scroll.saturating_add(1),
                KeyCode::PageUp => self.help_scroll = self.help_scroll.saturating_sub(10),
                KeyCode::PageDown => self.help_scroll = self.help_scroll.saturating_add(10),
                _ => {}
            }
            return Ok(true);
        }

        let keybinds = &self.config.keybinds;
        if keybinds.quit.matches(&key_event) {
            self.quit_prompt.open_empty();
            return Ok(true);
        }
        if keybinds.help.matches(&key_event) {
            self.help.open_empty();
            self.help_scroll = 0;
            return Ok(true);
        }
        if keybinds.overlay.matches(&key_event) {
            if self.controller.current() != ScreenId::Intro {
                self.overlay.toggle(&self.controller);
            }
            return Ok(true);
        }

        if self.overlay.handle_key(key_event, &mut self.controller) {
            self.sync();
            return Ok(true);
        }

        let keep_running = self.screen.handle_key(key_event)?;
        self.sync();
        Ok(keep_running)
    }

    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<bool> {
        if !self.config.mouse {
            return Ok(true);
        }
        let (x, y) = (mouse_event.column, mouse_event.row);
        let left_click = matches!(mouse_event.kind, MouseEventKind::Down(MouseButton::Left));

        if self.quit_prompt.is_open() || self.help.is_open() {
            match mouse_event.kind {
                MouseEventKind::ScrollUp if self.help.is_open() => {
                    self.help_scroll = self.help_scroll.saturating_sub(1)
                }
                MouseEventKind::ScrollDown if self.help.is_open() => {
                    self.help_scroll = self.help_scroll.saturating_add(1)
                }
                _ if left_click => match self.modal_registry.find_click(x, y) {
                    Some(ModalMsg::ConfirmQuit) => return Ok(false),
                    Some(ModalMsg::CancelQuit) => self.quit_prompt.close(),
                    Some(ModalMsg::CloseHelp) => self.help.close(),
                    None => {}
                },
                _ => {}
            }
            return Ok(true);
        }

        let over_overlay = self
            .overlay_area
            .is_some_and(|area| area.contains(ratatui::layout::Position { x, y }));

        if over_overlay {
            let msg = match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => self.overlay_registry.find_click(x, y),
                MouseEventKind::ScrollUp => Some(OverlayMsg::ListNavigate(KeyCode::Up)),
                MouseEventKind::ScrollDown => Some(OverlayMsg::ListNavigate(KeyCode::Down)),
                _ => None,
            };
            if let Some(msg) = msg {
                self.overlay.update(msg, &mut self.controller);
                self.sync();
            }
            return Ok(true);
        }

        if left_click && self.overlay.is_open() {
            self.overlay.close();
            return Ok(true);
        }

        let keep_running = self.screen.handle_mouse(mouse_event)?;
        self.sync();
        Ok(keep_running)
    }

    /// Fire due screen timers; false when a timer asked to quit
    pub fn tick(&mut self) -> Result<bool> {
        let keep_running = self.screen.poll_timers()?;
        self.sync();
        Ok(keep_running)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let theme = self.config.theme.clone();
        let full = frame.area();
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(full);

        self.render_header(frame, header_area, &theme);
        self.screen.render_to_area(frame, body_area, &theme);
        self.render_overlay(frame, body_area, &theme);
        self.render_footer(frame, footer_area, &theme);

        self.modal_registry.clear();
        self.modal_focus.clear();
        if self.help.is_open() {
            let help = self.help_view(&theme);
            self.render_modal(frame, help, full, &theme);
        }
        if self.quit_prompt.is_open() {
            let prompt = quit_prompt_view(&theme);
            self.render_modal(frame, prompt, full, &theme);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = vec![
            Span::styled(format!(" {} ", APP_NAME), theme.heading_style()),
            Span::styled("│ ", theme.muted_style()),
            Span::styled(
                self.screen.title(),
                Style::default()
                    .fg(theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(status) = self.screen.status(theme) {
            spans.push(Span::styled(" │ ", theme.muted_style()));
            spans.extend(status.spans);
        }

        let badge = match self.controller.session() {
            Some(session) => format!("👤 {} ({}) ", session.name, session.role),
            None => "👤 guest ".to_string(),
        };
        let badge_width = Line::from(badge.as_str()).width() as u16;

        let header: Element<()> = RowBuilder::new()
            .add(Element::styled_text(Line::from(spans)).build(), LayoutConstraint::Fill(1))
            .add(
                Element::styled(badge, Style::default().fg(theme.accent_secondary)),
                LayoutConstraint::Length(badge_width),
            )
            .spacing(0)
            .build();

        render_static(frame, theme, &header, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let keybinds = &self.config.keybinds;
        let mut hints = vec![(keybinds.help.to_string(), "Help"), (keybinds.quit.to_string(), "Quit")];
        if self.controller.current() != ScreenId::Intro {
            hints.insert(0, (keybinds.overlay.to_string(), "Navigate"));
        }
        hints.push(("Tab".to_string(), "Focus"));

        let spans: Vec<Span<'static>> = hints
            .into_iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {} ", key), Style::default().fg(theme.accent_muted)),
                    Span::styled(format!("{}  ", label), theme.muted_style()),
                ]
            })
            .collect();

        let footer: Element<()> = Element::styled_text(Line::from(spans)).build();
        render_static(frame, theme, &footer, area);
    }

    fn render_overlay(&mut self, frame: &mut Frame, body: Rect, theme: &Theme) {
        self.overlay_registry.clear();
        self.overlay_focus.clear();
        self.overlay_area = None;

        let Some(view) = self.overlay.view(&self.controller, theme) else {
            return;
        };

        let bounds = Rect {
            width: body.width.saturating_sub(OVERLAY_MARGIN),
            height: body.height.saturating_sub(OVERLAY_MARGIN),
            ..body
        };
        let (width, height) = Renderer::estimate_element_size(&view, bounds);
        let area = Rect {
            x: bounds.x + bounds.width.saturating_sub(width),
            y: bounds.y + bounds.height.saturating_sub(height),
            width,
            height,
        };

        let list_id = FocusId::new("nav-list");
        let focused = self.overlay.is_open().then_some(&list_id);
        Renderer::render(
            frame,
            theme,
            &mut self.overlay_registry,
            &mut self.overlay_focus,
            focused,
            &view,
            area,
        );
        self.overlay_area = Some(area);
    }

    fn render_modal(&mut self, frame: &mut Frame, modal: Element<ModalMsg>, area: Rect, theme: &Theme) {
        let stack = Element::stack(vec![Layer::new(modal).center().dim(true)]);
        Renderer::render(
            frame,
            theme,
            &mut self.modal_registry,
            &mut self.modal_focus,
            None,
            &stack,
            area,
        );
    }

    fn help_view(&self, theme: &Theme) -> Element<ModalMsg> {
        let keybinds = &self.config.keybinds;
        let mut global: Vec<(String, String)> = vec![
            (keybinds.help.to_string(), "Toggle this help".to_string()),
            (keybinds.quit.to_string(), "Quit".to_string()),
            ("Tab / BackTab".to_string(), "Move focus".to_string()),
            ("Enter".to_string(), "Press focused button".to_string()),
            ("Esc".to_string(), "Leave focused element".to_string()),
        ];
        if self.controller.current() != ScreenId::Intro {
            global.insert(0, (keybinds.overlay.to_string(), "Toggle navigation".to_string()));
        }
        let overlay: Vec<(String, String)> = vec![
            ("[ / Left".to_string(), "Previous screen".to_string()),
            ("] / Right".to_string(), "Next screen".to_string()),
            ("Up / Down".to_string(), "Choose screen".to_string()),
            ("Enter".to_string(), "Jump to screen".to_string()),
        ];
        let screen: Vec<(String, String)> = self
            .screen
            .key_bindings()
            .into_iter()
            .map(|(key, description): (KeyBinding, String)| (key.to_string(), description))
            .collect();

        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut section = |title: String, bindings: Vec<(String, String)>, key_style: Style| {
            if bindings.is_empty() {
                return;
            }
            lines.push(Line::from(Span::styled(format!("▼ {}", title), theme.heading_style())));
            for (key, description) in bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<15}", key), key_style),
                    Span::styled(description, Style::default().fg(theme.text_primary)),
                ]));
            }
            lines.push(Line::from(""));
        };
        section("Global".to_string(), global, Style::default().fg(theme.accent_tertiary));
        section("Navigation".to_string(), overlay, Style::default().fg(theme.accent_primary));
        section(self.screen.title().to_string(), screen, Style::default().fg(theme.accent_success));

        let visible: Vec<Element<ModalMsg>> = lines
            .into_iter()
            .skip(self.help_scroll)
            .map(|line| Element::styled_text(line).build())
            .collect();
        let body_height = visible.len() as u16;

        let mut body = ColumnBuilder::new();
        for line in visible {
            body = body.add(line, LayoutConstraint::Length(1));
        }
        body = body
            .add(
                Element::styled("[Esc to close | ↑↓ to scroll]", theme.muted_style()),
                LayoutConstraint::Length(1),
            )
            .add(
                Element::button("help-close", "Close")
                    .on_press(ModalMsg::CloseHelp)
                    .build(),
                LayoutConstraint::Length(3),
            );

        Element::panel(body.build())
            .title("Help")
            .width(HELP_WIDTH)
            .height(body_height + 6)
            .border_style(Style::default().fg(theme.accent_tertiary))
            .build()
    }
}

fn quit_prompt_view(theme: &Theme) -> Element<ModalMsg> {
    let buttons = RowBuilder::new()
        .add(
            Element::button("quit-yes", "Quit (y)")
                .on_press(ModalMsg::ConfirmQuit)
                .build(),
            LayoutConstraint::Fill(1),
        )
        .add(
            Element::button("quit-no", "Stay (n)")
                .on_press(ModalMsg::CancelQuit)
                .build(),
            LayoutConstraint::Fill(1),
        )
        .build();

    let body = ColumnBuilder::new()
        .add(
            Element::styled(format!("Quit {}?", APP_NAME), theme.heading_style()),
            LayoutConstraint::Length(1),
        )
        .add(
            Element::styled("Your demo progress is not saved.", theme.muted_style()),
            LayoutConstraint::Length(1),
        )
        .add(buttons, LayoutConstraint::Length(3))
        .build();

    Element::panel(body)
        .title("Quit")
        .width(40)
        .height(7)
        .border_style(theme.warning_style())
        .build()
}

/// Render chrome that has no interactive parts
fn render_static(frame: &mut Frame, theme: &Theme, element: &Element<()>, area: Rect) {
    let mut registry = InteractionRegistry::new();
    let mut focus = FocusRegistry::new();
    Renderer::render(frame, theme, &mut registry, &mut focus, None, element, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn shell_at(start: ScreenId) -> Shell {
        Shell::new(RuntimeConfig::default(), start)
    }

    fn render(shell: &mut Shell) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| shell.render(frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_intro_start_remounts_login() {
        let mut shell = shell_at(ScreenId::Intro);
        assert!(shell.handle_key(key(KeyCode::Enter)).unwrap());
        assert_eq!(shell.screen_id(), ScreenId::Login);
        assert_eq!(shell.controller().current(), ScreenId::Login);
    }

    #[test]
    fn test_overlay_key_ignored_on_intro() {
        let mut shell = shell_at(ScreenId::Intro);
        shell.handle_key(ctrl('n')).unwrap();
        assert!(!shell.overlay().is_open());
    }

    #[test]
    fn test_overlay_jump_remounts_screen() {
        let mut shell = shell_at(ScreenId::Dashboard);
        shell.handle_key(ctrl('n')).unwrap();
        assert!(shell.overlay().is_open());

        shell.handle_key(key(KeyCode::Char(']'))).unwrap();
        assert_eq!(shell.screen_id(), ScreenId::RoleExplainer);
        assert!(shell.overlay().is_open());

        shell.handle_key(key(KeyCode::End)).unwrap();
        shell.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(shell.screen_id(), ScreenId::Admin);
        assert!(!shell.overlay().is_open());
    }

    #[test]
    fn test_quit_needs_confirmation() {
        let mut shell = shell_at(ScreenId::Login);
        assert!(shell.handle_key(ctrl('q')).unwrap());
        assert!(shell.is_quit_prompt_open());

        assert!(shell.handle_key(key(KeyCode::Esc)).unwrap());
        assert!(!shell.is_quit_prompt_open());

        shell.handle_key(ctrl('q')).unwrap();
        assert!(!shell.handle_key(key(KeyCode::Char('y'))).unwrap());
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut shell = shell_at(ScreenId::Intro);
        shell.handle_key(key(KeyCode::F(1))).unwrap();
        assert!(shell.is_help_open());

        shell.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(shell.screen_id(), ScreenId::Intro);

        shell.handle_key(key(KeyCode::F(1))).unwrap();
        assert!(!shell.is_help_open());
    }

    #[test]
    fn test_render_shows_header_and_toggle() {
        let mut shell = shell_at(ScreenId::Dashboard);
        let screen = render(&mut shell);
        assert!(screen.contains("Smart Job Aggregator"));
        assert!(screen.contains("guest"));
        assert!(screen.contains("☰ Navigate"));
    }

    #[test]
    fn test_render_intro_has_no_overlay() {
        let mut shell = shell_at(ScreenId::Intro);
        let screen = render(&mut shell);
        assert!(!screen.contains("Navigate"));
    }

    #[test]
    fn test_click_outside_open_overlay_closes_it() {
        let mut shell = shell_at(ScreenId::Dashboard);
        shell.handle_key(ctrl('n')).unwrap();
        render(&mut shell);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 5,
            modifiers: KeyModifiers::empty(),
        };
        shell.handle_mouse(click).unwrap();
        assert!(!shell.overlay().is_open());
        assert_eq!(shell.screen_id(), ScreenId::Dashboard);
    }
}
