use super::registry::{ScreenId, ScreenRegistry};
use super::session::Session;

/// Where the user is and who they are.
///
/// Only [`NavigationController`] mutates this; screens and the overlay get
/// read access at most.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current: ScreenId,
    pub session: Option<Session>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::at(ScreenId::Intro)
    }
}

impl NavigationState {
    pub fn at(current: ScreenId) -> Self {
        Self { current, session: None }
    }
}

/// Owns the navigation state and derives next/previous from registry order
#[derive(Debug, Clone)]
pub struct NavigationController {
    registry: ScreenRegistry,
    state: NavigationState,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self::starting_at(ScreenId::Intro)
    }

    pub fn starting_at(start: ScreenId) -> Self {
        Self {
            registry: ScreenRegistry::new(),
            state: NavigationState::at(start),
        }
    }

    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current(&self) -> ScreenId {
        self.state.current
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session.as_ref()
    }

    pub fn current_title(&self) -> &'static str {
        self.registry.title(self.state.current).unwrap_or("Unknown")
    }

    /// Switch screens. Any id is accepted.
    pub fn navigate(&mut self, target: ScreenId) {
        if self.state.current != target {
            log::debug!("Navigating {} -> {}", self.state.current, target);
        }
        self.state.current = target;
    }

    /// Record the session. Navigation afterwards is up to the caller.
    pub fn login(&mut self, session: Session) {
        log::info!("Logged in as {} ({})", session.name, session.role);
        self.state.session = Some(session);
    }

    /// Position of the current screen in registry order
    pub fn current_index(&self) -> Option<usize> {
        self.registry.index_of(self.state.current)
    }

    pub fn next(&self) -> Option<ScreenId> {
        let index = self.current_index()?;
        self.registry.get(index + 1).map(|entry| entry.id)
    }

    /// Registry-order predecessor, skipping anything not in the jump list.
    ///
    /// The introduction is never a stepping target, so both `intro` and
    /// `login` have no previous screen.
    pub fn previous(&self) -> Option<ScreenId> {
        let index = self.current_index()?;
        let prev = self.registry.get(index.checked_sub(1)?)?;
        prev.jumpable.then_some(prev.id)
    }

    pub fn step_next(&mut self) -> bool {
        match self.next() {
            Some(id) => {
                self.navigate(id);
                true
            }
            None => false,
        }
    }

    pub fn step_previous(&mut self) -> bool {
        match self.previous() {
            Some(id) => {
                self.navigate(id);
                true
            }
            None => false,
        }
    }
}
