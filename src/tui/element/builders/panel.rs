use crate::tui::Element;
use ratatui::style::Style;

/// Builder for bordered panels
pub struct PanelBuilder<Msg> {
    pub(crate) child: Box<Element<Msg>>,
    pub(crate) title: Option<String>,
    pub(crate) width: Option<u16>,
    pub(crate) height: Option<u16>,
    pub(crate) border_style: Option<Style>,
}

impl<Msg> PanelBuilder<Msg> {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fixed width, used when the panel is positioned as a layer
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = Some(style);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Panel {
            child: self.child,
            title: self.title,
            width: self.width,
            height: self.height,
            border_style: self.border_style,
        }
    }
}
