use crate::tui::element::FocusId;
use crate::tui::Element;
use ratatui::style::Style;

/// Builder for buttons
pub struct ButtonBuilder<Msg> {
    pub(crate) id: FocusId,
    pub(crate) label: String,
    pub(crate) on_press: Option<Msg>,
    pub(crate) style: Option<Style>,
}

impl<Msg> ButtonBuilder<Msg> {
    pub fn on_press(mut self, msg: Msg) -> Self {
        self.on_press = Some(msg);
        self
    }

    /// Leave the button disabled when `msg` is `None`
    pub fn on_press_opt(mut self, msg: Option<Msg>) -> Self {
        self.on_press = msg;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Button {
            id: self.id,
            label: self.label,
            on_press: self.on_press,
            style: self.style,
        }
    }
}
