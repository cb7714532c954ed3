use crate::nav::ScreenId;
use crate::tui::{Command, Element, Subscription, Theme};
use ratatui::text::Line;

/// The main trait that every screen implements.
///
/// This follows the Elm architecture:
/// - State: data owned by the screen while it is mounted
/// - Msg: events/actions that can happen
/// - update: handles messages and returns commands
/// - view: renders the current state
/// - subscriptions: declares what inputs the screen wants to receive
pub trait App: Sized + 'static {
    /// Which screen this app renders
    const ID: ScreenId;

    type State;

    type Msg: Clone + Send + 'static;

    /// The slice of navigation state the screen needs at mount time
    type InitParams: Default;

    fn init(params: Self::InitParams) -> (Self::State, Command<Self::Msg>);

    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    fn view(state: &Self::State, theme: &Theme) -> Element<Self::Msg>;

    fn subscriptions(_state: &Self::State) -> Vec<Subscription<Self::Msg>> {
        Vec::new()
    }

    fn title() -> &'static str;

    /// Optional status text for the footer, styled based on state
    fn status(_state: &Self::State, _theme: &Theme) -> Option<Line<'static>> {
        None
    }
}
