use crate::nav::{ScreenId, Session};
use crate::tui::element::FocusId;

/// What a focused widget wants done with a key press
pub enum DispatchTarget<Msg> {
    /// Deliver this message to the screen's update function
    AppMsg(Msg),

    /// Not handled here; fall through to keyboard subscriptions
    PassThrough,
}

/// Commands represent side effects that screens want to perform.
/// They are returned from update() and executed by the runtime.
pub enum Command<Msg> {
    /// Do nothing
    None,

    /// Execute multiple commands in order
    Batch(Vec<Command<Msg>>),

    /// Feed a message straight back into update
    Dispatch(Msg),

    /// Ask the navigation controller to switch screens
    NavigateTo(ScreenId),

    /// Hand a session to the navigation controller
    Login(Session),

    /// Set focus to a specific element
    SetFocus(FocusId),

    /// Clear focus from all elements
    ClearFocus,

    /// Quit the application
    Quit,
}

impl<Msg> Command<Msg> {
    pub fn navigate_to(screen: ScreenId) -> Self {
        Command::NavigateTo(screen)
    }

    pub fn login(session: Session) -> Self {
        Command::Login(session)
    }

    pub fn batch(commands: Vec<Command<Msg>>) -> Self {
        Command::Batch(commands)
    }

    pub fn dispatch(msg: Msg) -> Self {
        Command::Dispatch(msg)
    }

    pub fn set_focus(id: FocusId) -> Self {
        Command::SetFocus(id)
    }

    pub fn clear_focus() -> Self {
        Command::ClearFocus
    }

    pub fn quit() -> Self {
        Command::Quit
    }
}

impl<Msg> Default for Command<Msg> {
    fn default() -> Self {
        Command::None
    }
}
