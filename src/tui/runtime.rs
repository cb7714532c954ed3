use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Frame, layout::Rect, text::Line};
use std::time::{Duration, Instant};

use crate::nav::{ScreenId, Session};
use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, InteractionRegistry, Renderer};
use crate::tui::{App, Command, KeyBinding, Subscription, Theme};

/// Requests a screen makes of the navigation controller
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Navigate(ScreenId),
    Login(Session),
}

/// Type-erased runtime so the shell can hold whichever screen is mounted.
///
/// Handlers return `Ok(false)` when the screen asked to quit.
pub trait AppRuntime {
    fn screen_id(&self) -> ScreenId;
    fn title(&self) -> &'static str;
    fn status(&self, theme: &Theme) -> Option<Line<'static>>;
    fn key_bindings(&self) -> Vec<(KeyBinding, String)>;
    fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool>;
    fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<bool>;
    fn render_to_area(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
    fn poll_timers(&mut self) -> Result<bool>;
    fn take_effects(&mut self) -> Vec<Effect>;
    fn focused_id(&self) -> Option<&FocusId>;
}

/// Drives one `App`: routes input, runs `update`, executes commands
pub struct Runtime<A: App> {
    state: A::State,

    registry: InteractionRegistry<A::Msg>,
    focus_registry: FocusRegistry<A::Msg>,
    focused_id: Option<FocusId>,

    /// Keyboard subscriptions with their help text
    key_subscriptions: Vec<(KeyBinding, String, A::Msg)>,

    /// Timer subscriptions: (interval, last_tick, msg)
    timers: Vec<(Duration, Instant, A::Msg)>,

    /// Navigation requests not yet collected by the shell
    effects: Vec<Effect>,

    /// Set after Esc unfocuses, so the next render doesn't refocus
    explicitly_unfocused: bool,
}

impl<A: App> Runtime<A> {
    pub fn new() -> Self {
        Self::with_params(A::InitParams::default())
    }

    pub fn with_params(params: A::InitParams) -> Self {
        let (state, init_command) = A::init(params);

        let mut runtime = Self {
            state,
            registry: InteractionRegistry::new(),
            focus_registry: FocusRegistry::new(),
            focused_id: None,
            key_subscriptions: Vec::new(),
            timers: Vec::new(),
            effects: Vec::new(),
            explicitly_unfocused: false,
        };

        runtime.update_subscriptions();
        if !runtime.execute_command(init_command) {
            log::warn!("{} asked to quit during init, ignoring", A::ID);
        }

        runtime
    }

    pub fn state(&self) -> &A::State {
        &self.state
    }

    pub fn focused_id(&self) -> Option<&FocusId> {
        self.focused_id.as_ref()
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Run a message through `update` as if a widget had produced it
    pub fn dispatch(&mut self, msg: A::Msg) -> bool {
        let command = A::update(&mut self.state, msg);
        let keep_running = self.execute_command(command);
        self.update_subscriptions();
        keep_running
    }

    pub fn focus_next(&mut self) {
        if let Some(id) = self.focus_registry.next_focus(self.focused_id.as_ref()) {
            self.execute_command(Command::set_focus(id));
        }
    }

    pub fn focus_previous(&mut self) {
        if let Some(id) = self.focus_registry.prev_focus(self.focused_id.as_ref()) {
            self.execute_command(Command::set_focus(id));
        }
    }

    /// Fire every timer whose interval has elapsed since its last tick
    pub fn poll_timers(&mut self) -> bool {
        let now = Instant::now();
        let mut messages = Vec::new();

        for (interval, last_tick, msg) in &mut self.timers {
            if now.duration_since(*last_tick) >= *interval {
                messages.push(msg.clone());
                *last_tick = now;
            }
        }

        let mut keep_running = true;
        for msg in messages {
            let command = A::update(&mut self.state, msg);
            keep_running &= self.execute_command(command);
        }
        self.update_subscriptions();
        keep_running
    }

    fn update_subscriptions(&mut self) {
        let previous_timers = std::mem::take(&mut self.timers);
        self.key_subscriptions.clear();

        for sub in A::subscriptions(&self.state) {
            match sub {
                Subscription::Keyboard {
                    key,
                    msg,
                    description,
                } => self.key_subscriptions.push((key, description, msg)),
                Subscription::Timer { interval, msg } => {
                    // A timer that survives a refresh keeps its phase
                    let last_tick = previous_timers
                        .get(self.timers.len())
                        .filter(|(prev_interval, _, _)| *prev_interval == interval)
                        .map(|(_, tick, _)| *tick)
                        .unwrap_or_else(Instant::now);
                    self.timers.push((interval, last_tick, msg));
                }
            }
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return true;
        }

        match key_event.code {
            KeyCode::Tab => {
                self.focus_next();
                return true;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return true;
            }
            _ => {}
        }

        if let Some(focused_id) = self.focused_id.clone() {
            match self.focus_registry.dispatch_key(&focused_id, key_event.code) {
                DispatchTarget::AppMsg(msg) => return self.dispatch(msg),
                DispatchTarget::PassThrough if key_event.code == KeyCode::Esc => {
                    log::debug!("{}: Esc unfocused {:?}", A::ID, focused_id);
                    self.focused_id = None;
                    self.explicitly_unfocused = true;
                    return true;
                }
                DispatchTarget::PassThrough => {}
            }
        }

        let matched = self
            .key_subscriptions
            .iter()
            .find(|(binding, _, _)| binding.matches(&key_event))
            .map(|(_, _, msg)| msg.clone());

        match matched {
            Some(msg) => self.dispatch(msg),
            None => true,
        }
    }

    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) -> bool {
        let (x, y) = (mouse_event.column, mouse_event.row);

        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.focus_registry.find_at_position(x, y) {
                    Some(clicked_id) => {
                        self.execute_command(Command::set_focus(clicked_id));
                    }
                    None => {
                        self.execute_command(Command::clear_focus());
                    }
                }

                match self.registry.find_click(x, y) {
                    Some(msg) => self.dispatch(msg),
                    None => true,
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let key = if mouse_event.kind == MouseEventKind::ScrollUp {
                    KeyCode::Up
                } else {
                    KeyCode::Down
                };
                let target = self
                    .focus_registry
                    .find_at_position(x, y)
                    .map(|id| self.focus_registry.dispatch_key(&id, key));
                match target {
                    Some(DispatchTarget::AppMsg(msg)) => self.dispatch(msg),
                    _ => true,
                }
            }
            _ => true,
        }
    }

    /// Returns false when the command asked to quit
    fn execute_command(&mut self, command: Command<A::Msg>) -> bool {
        match command {
            Command::None => true,
            Command::Batch(commands) => {
                let mut keep_running = true;
                for command in commands {
                    keep_running &= self.execute_command(command);
                }
                keep_running
            }
            Command::Dispatch(msg) => {
                let command = A::update(&mut self.state, msg);
                self.execute_command(command)
            }
            Command::NavigateTo(screen) => {
                self.effects.push(Effect::Navigate(screen));
                true
            }
            Command::Login(session) => {
                self.effects.push(Effect::Login(session));
                true
            }
            Command::SetFocus(id) => {
                self.focused_id = Some(id);
                self.explicitly_unfocused = false;
                true
            }
            Command::ClearFocus => {
                self.focused_id = None;
                self.explicitly_unfocused = true;
                true
            }
            Command::Quit => false,
        }
    }

    pub fn render_to_area(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.registry.clear();
        self.focus_registry.clear();

        let view = A::view(&self.state, theme);
        Renderer::render(
            frame,
            theme,
            &mut self.registry,
            &mut self.focus_registry,
            self.focused_id.as_ref(),
            &view,
            area,
        );

        // Drop focus on elements that are gone
        if let Some(focused_id) = &self.focused_id {
            if !self.focus_registry.contains(focused_id) {
                log::debug!("{}: focused {:?} no longer rendered", A::ID, focused_id);
                self.focused_id = None;
            }
        }

        if self.focused_id.is_none() && !self.explicitly_unfocused {
            self.focused_id = self.focus_registry.first();
        }
    }
}

impl<A: App> Default for Runtime<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: App> AppRuntime for Runtime<A> {
    fn screen_id(&self) -> ScreenId {
        A::ID
    }

    fn title(&self) -> &'static str {
        A::title()
    }

    fn status(&self, theme: &Theme) -> Option<Line<'static>> {
        A::status(&self.state, theme)
    }

    fn key_bindings(&self) -> Vec<(KeyBinding, String)> {
        self.key_subscriptions
            .iter()
            .map(|(binding, description, _)| (*binding, description.clone()))
            .collect()
    }

    fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        Ok(Runtime::handle_key(self, key_event))
    }

    fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<bool> {
        Ok(Runtime::handle_mouse(self, mouse_event))
    }

    fn render_to_area(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        Runtime::render_to_area(self, frame, area, theme)
    }

    fn poll_timers(&mut self) -> Result<bool> {
        Ok(Runtime::poll_timers(self))
    }

    fn take_effects(&mut self) -> Vec<Effect> {
        Runtime::take_effects(self)
    }

    fn focused_id(&self) -> Option<&FocusId> {
        Runtime::focused_id(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::Element;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    struct Counter;

    #[derive(Clone, Debug)]
    enum Msg {
        Increment,
        IncrementTwice,
        Leave,
        Quit,
        Tick,
    }

    #[derive(Default)]
    struct State {
        count: u32,
        ticks: u32,
    }

    impl App for Counter {
        const ID: ScreenId = ScreenId::Dashboard;
        type State = State;
        type Msg = Msg;
        type InitParams = ();

        fn init(_params: ()) -> (State, Command<Msg>) {
            (State::default(), Command::None)
        }

        fn update(state: &mut State, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Increment => {
                    state.count += 1;
                    Command::None
                }
                Msg::IncrementTwice => Command::batch(vec![
                    Command::dispatch(Msg::Increment),
                    Command::dispatch(Msg::Increment),
                ]),
                Msg::Leave => Command::batch(vec![
                    Command::login(Session::student("Alex Johnson", "alex@example.com")),
                    Command::navigate_to(ScreenId::Tracker),
                ]),
                Msg::Quit => Command::quit(),
                Msg::Tick => {
                    state.ticks += 1;
                    Command::None
                }
            }
        }

        fn view(state: &State, _theme: &Theme) -> Element<Msg> {
            Element::column(vec![
                Element::text(format!("Count: {}", state.count)),
                Element::button("inc", "Increment").on_press(Msg::Increment).build(),
                Element::button("leave", "Leave").on_press(Msg::Leave).build(),
            ])
            .build()
        }

        fn subscriptions(_state: &State) -> Vec<Subscription<Msg>> {
            vec![
                Subscription::keyboard(KeyCode::Char('x'), "Quit", Msg::Quit),
                Subscription::timer(Duration::ZERO, Msg::Tick),
            ]
        }

        fn title() -> &'static str {
            "Counter"
        }
    }

    fn render(runtime: &mut Runtime<Counter>) {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                runtime.render_to_area(frame, area, &Theme::default());
            })
            .unwrap();
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_first_focusable_is_focused_after_render() {
        let mut runtime = Runtime::<Counter>::new();
        assert_eq!(runtime.focused_id(), None);
        render(&mut runtime);
        assert_eq!(runtime.focused_id(), Some(&FocusId("inc")));
    }

    #[test]
    fn test_enter_presses_focused_button() {
        let mut runtime = Runtime::<Counter>::new();
        render(&mut runtime);
        assert!(runtime.handle_key(key(KeyCode::Enter)));
        assert_eq!(runtime.state().count, 1);
    }

    #[test]
    fn test_dispatch_feeds_messages_back_into_update() {
        let mut runtime = Runtime::<Counter>::new();
        assert!(runtime.dispatch(Msg::IncrementTwice));
        assert_eq!(runtime.state().count, 2);
        assert!(runtime.take_effects().is_empty());
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut runtime = Runtime::<Counter>::new();
        render(&mut runtime);
        runtime.handle_key(key(KeyCode::Tab));
        assert_eq!(runtime.focused_id(), Some(&FocusId("leave")));
        runtime.handle_key(key(KeyCode::Tab));
        assert_eq!(runtime.focused_id(), Some(&FocusId("inc")));
    }

    #[test]
    fn test_esc_unfocuses_and_stays_unfocused() {
        let mut runtime = Runtime::<Counter>::new();
        render(&mut runtime);
        runtime.handle_key(key(KeyCode::Esc));
        assert_eq!(runtime.focused_id(), None);
        render(&mut runtime);
        assert_eq!(runtime.focused_id(), None);
    }

    #[test]
    fn test_commands_become_effects() {
        let mut runtime = Runtime::<Counter>::new();
        assert!(runtime.dispatch(Msg::Leave));
        assert_eq!(
            runtime.take_effects(),
            vec![
                Effect::Login(Session::student("Alex Johnson", "alex@example.com")),
                Effect::Navigate(ScreenId::Tracker),
            ]
        );
        assert!(runtime.take_effects().is_empty());
    }

    #[test]
    fn test_subscription_quits() {
        let mut runtime = Runtime::<Counter>::new();
        assert!(!runtime.handle_key(key(KeyCode::Char('x'))));
        assert!(runtime.handle_key(key(KeyCode::Char('z'))));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut runtime = Runtime::<Counter>::new();
        let mut event = key(KeyCode::Char('x'));
        event.kind = KeyEventKind::Release;
        assert!(runtime.handle_key(event));
    }

    #[test]
    fn test_timer_fires() {
        let mut runtime = Runtime::<Counter>::new();
        assert!(runtime.poll_timers());
        assert_eq!(runtime.state().ticks, 1);
    }

    #[test]
    fn test_click_presses_button() {
        let mut runtime = Runtime::<Counter>::new();
        render(&mut runtime);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 2,
            modifiers: KeyModifiers::empty(),
        };
        assert!(runtime.handle_mouse(click));
        assert_eq!(runtime.state().count, 1);
        assert_eq!(runtime.focused_id(), Some(&FocusId("inc")));
    }

    #[test]
    fn test_key_bindings_listed() {
        let runtime = Runtime::<Counter>::new();
        let bindings = AppRuntime::key_bindings(&runtime);
        assert_eq!(bindings, vec![(KeyBinding::new(KeyCode::Char('x')), "Quit".to_string())]);
    }
}
