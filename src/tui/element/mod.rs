use ratatui::style::Style;
use ratatui::text::Line;

mod builders;
pub use builders::*;

/// Stable identifier for focusable UI elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(pub &'static str);

impl FocusId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }
}

impl From<&'static str> for FocusId {
    fn from(s: &'static str) -> Self {
        FocusId(s)
    }
}

/// Alignment options for positioned layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
    TopLeft,
    BottomRight,
}

/// A layer in a stack of UI elements
#[derive(Clone)]
pub struct Layer<Msg> {
    pub element: Element<Msg>,
    pub alignment: Alignment,
    /// Dim everything below and swallow its clicks
    pub dim_below: bool,
}

impl<Msg> Layer<Msg> {
    pub fn new(element: Element<Msg>) -> Self {
        Self {
            element,
            alignment: Alignment::TopLeft,
            dim_below: false,
        }
    }

    pub fn center(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn dim(mut self, should_dim: bool) -> Self {
        self.dim_below = should_dim;
        self
    }
}

/// Layout constraints for sizing elements within containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutConstraint {
    /// Fixed size (exact number of lines/columns)
    Length(u16),
    /// Minimum size (at least this many lines/columns)
    Min(u16),
    /// Proportional fill (weight for distributing remaining space)
    Fill(u16),
}

/// Declarative UI elements that compose to form the view
#[derive(Clone)]
pub enum Element<Msg> {
    /// Empty element that renders nothing
    None,

    Text { content: String, style: Option<Style> },

    /// Styled text with multiple spans
    StyledText {
        line: Line<'static>,
        background: Option<Style>,
    },

    /// Interactive button; without `on_press` it renders dimmed and is skipped by focus
    Button {
        id: FocusId,
        label: String,
        on_press: Option<Msg>,
        style: Option<Style>,
    },

    /// Vertical layout container
    Column {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    /// Horizontal layout container
    Row {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    /// Container with padding
    Container {
        child: Box<Element<Msg>>,
        padding: u16,
    },

    /// Panel with border
    Panel {
        child: Box<Element<Msg>>,
        title: Option<String>,
        width: Option<u16>,
        height: Option<u16>,
        border_style: Option<Style>,
    },

    /// Stack of layered elements (for modals, overlays)
    Stack { layers: Vec<Layer<Msg>> },

    /// Scrollable list of single-line items
    List {
        id: FocusId,
        items: Vec<Element<Msg>>,
        selected: Option<usize>,
        scroll_offset: usize,
        on_select: Option<fn(usize) -> Msg>,
        on_activate: Option<fn(usize) -> Msg>,
        on_navigate: Option<fn(crossterm::event::KeyCode) -> Msg>,
    },

    /// Single-line text input
    TextInput {
        id: FocusId,
        value: String,
        cursor_pos: usize,
        scroll_offset: usize,
        placeholder: Option<String>,
        on_change: Option<fn(crossterm::event::KeyCode) -> Msg>,
        on_submit: Option<Msg>,
    },

    /// Progress bar showing completion (non-interactive)
    ProgressBar {
        current: usize,
        total: usize,
        label: Option<String>,
        show_percentage: bool,
        width: Option<u16>,
        style: Option<Style>,
    },
}

impl<Msg> Element<Msg> {
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
            style: None,
        }
    }

    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Element::Text {
            content: content.into(),
            style: Some(style),
        }
    }

    /// Create a styled text element with optional background fill
    pub fn styled_text(line: Line<'static>) -> StyledTextBuilder<Msg> {
        StyledTextBuilder {
            line,
            background: None,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn progress_bar(current: usize, total: usize) -> ProgressBarBuilder<Msg> {
        ProgressBarBuilder {
            current,
            total,
            label: None,
            show_percentage: true,
            width: None,
            style: None,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn button(id: impl Into<FocusId>, label: impl Into<String>) -> ButtonBuilder<Msg> {
        ButtonBuilder {
            id: id.into(),
            label: label.into(),
            on_press: None,
            style: None,
        }
    }

    /// Create a column layout with default constraints per child
    pub fn column(children: Vec<Element<Msg>>) -> ColumnBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();

        ColumnBuilder { items, spacing: 0 }
    }

    /// Create a row layout with default constraints per child
    pub fn row(children: Vec<Element<Msg>>) -> RowBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();

        RowBuilder { items, spacing: 1 }
    }

    pub fn container(child: Element<Msg>) -> ContainerBuilder<Msg> {
        ContainerBuilder {
            child: Box::new(child),
            padding: 1,
        }
    }

    pub fn panel(child: Element<Msg>) -> PanelBuilder<Msg> {
        PanelBuilder {
            child: Box::new(child),
            title: None,
            width: None,
            height: None,
            border_style: None,
        }
    }

    pub fn stack(layers: Vec<Layer<Msg>>) -> Self {
        Element::Stack { layers }
    }

    pub fn list(
        id: impl Into<FocusId>,
        items: Vec<Element<Msg>>,
        state: &crate::tui::widgets::ListState,
    ) -> ListBuilder<Msg> {
        ListBuilder {
            id: id.into(),
            items,
            selected: state.selected(),
            scroll_offset: state.scroll_offset(),
            on_select: None,
            on_activate: None,
            on_navigate: None,
        }
    }

    pub fn text_input(
        id: impl Into<FocusId>,
        value: &str,
        state: &crate::tui::widgets::TextInputState,
    ) -> TextInputBuilder<Msg> {
        TextInputBuilder {
            id: id.into(),
            value: value.to_string(),
            cursor_pos: state.cursor_pos(),
            scroll_offset: state.scroll_offset(),
            placeholder: None,
            on_change: None,
            on_submit: None,
        }
    }

    /// Get the default layout constraint for this element type
    pub fn default_constraint(&self) -> LayoutConstraint {
        match self {
            Element::None => LayoutConstraint::Length(0),
            Element::Text { .. } => LayoutConstraint::Length(1),
            Element::StyledText { .. } => LayoutConstraint::Length(1),
            Element::Button { .. } => LayoutConstraint::Length(3),
            Element::Column { .. } => LayoutConstraint::Fill(1),
            Element::Row { .. } => LayoutConstraint::Fill(1),
            Element::Container { .. } => LayoutConstraint::Fill(1),
            Element::Panel { child, height, .. } => {
                if let Some(h) = height {
                    LayoutConstraint::Length(*h)
                } else {
                    // Child plus top and bottom border
                    match child.default_constraint() {
                        LayoutConstraint::Length(n) => LayoutConstraint::Length(n + 2),
                        LayoutConstraint::Min(n) => LayoutConstraint::Min(n + 2),
                        LayoutConstraint::Fill(w) => LayoutConstraint::Fill(w),
                    }
                }
            }
            Element::Stack { .. } => LayoutConstraint::Fill(1),
            Element::List { .. } => LayoutConstraint::Fill(1),
            Element::TextInput { .. } => LayoutConstraint::Length(1),
            Element::ProgressBar { .. } => LayoutConstraint::Length(1),
        }
    }

    /// Depth-first search for the element registered under `id`
    pub fn find(&self, id: &str) -> Option<&Element<Msg>> {
        match self {
            Element::Button { id: own, .. }
            | Element::List { id: own, .. }
            | Element::TextInput { id: own, .. }
                if own.0 == id =>
            {
                Some(self)
            }
            Element::Column { items, .. } | Element::Row { items, .. } => {
                items.iter().find_map(|(_, child)| child.find(id))
            }
            Element::Container { child, .. } | Element::Panel { child, .. } => child.find(id),
            Element::Stack { layers } => layers.iter().find_map(|layer| layer.element.find(id)),
            Element::List { items, .. } => items.iter().find_map(|item| item.find(id)),
            _ => None,
        }
    }

    /// All human-readable text in the tree, in layout order
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts(&self, out: &mut Vec<String>) {
        match self {
            Element::None => {}
            Element::Text { content, .. } => out.push(content.clone()),
            Element::StyledText { line, .. } => out.push(line.to_string()),
            Element::Button { label, .. } => out.push(label.clone()),
            Element::Column { items, .. } | Element::Row { items, .. } => {
                items.iter().for_each(|(_, child)| child.collect_texts(out));
            }
            Element::Container { child, .. } => child.collect_texts(out),
            Element::Panel { child, title, .. } => {
                if let Some(title) = title {
                    out.push(title.clone());
                }
                child.collect_texts(out);
            }
            Element::Stack { layers } => {
                layers.iter().for_each(|layer| layer.element.collect_texts(out));
            }
            Element::List { items, .. } => items.iter().for_each(|item| item.collect_texts(out)),
            Element::TextInput { value, placeholder, .. } => {
                if value.is_empty() {
                    out.extend(placeholder.iter().cloned());
                } else {
                    out.push(value.clone());
                }
            }
            Element::ProgressBar { label, .. } => out.extend(label.iter().cloned()),
        }
    }

    /// Whether the tree contains `needle` in any text
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| text.contains(needle))
    }

    /// The press message of a button, `None` for missing or disabled buttons
    pub fn press_msg(&self, id: &str) -> Option<&Msg> {
        match self.find(id)? {
            Element::Button { on_press, .. } => on_press.as_ref(),
            _ => None,
        }
    }
}

impl<Msg> Default for Element<Msg> {
    fn default() -> Self {
        Element::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Msg {
        Go,
    }

    fn sample() -> Element<Msg> {
        Element::panel(
            Element::column(vec![
                Element::text("Hello"),
                Element::button("go", "Go").on_press(Msg::Go).build(),
                Element::button("stay", "Stay").build(),
            ])
            .build(),
        )
        .title("Greeting")
        .build()
    }

    #[test]
    fn test_texts_in_layout_order() {
        assert_eq!(sample().texts(), vec!["Greeting", "Hello", "Go", "Stay"]);
        assert!(sample().contains_text("ell"));
    }

    #[test]
    fn test_find_and_press_msg() {
        let element = sample();
        assert!(element.find("go").is_some());
        assert!(element.find("missing").is_none());
        assert_eq!(element.press_msg("go"), Some(&Msg::Go));
        assert_eq!(element.press_msg("stay"), None);
    }

    #[test]
    fn test_panel_constraint_adds_borders() {
        let panel: Element<Msg> = Element::panel(Element::text("x")).build();
        assert_eq!(panel.default_constraint(), LayoutConstraint::Length(3));

        let sized: Element<Msg> = Element::panel(Element::text("x")).height(7).build();
        assert_eq!(sized.default_constraint(), LayoutConstraint::Length(7));
    }
}
