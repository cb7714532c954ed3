use crate::tui::element::FocusId;
use crate::tui::{Element, LayoutConstraint, Theme};
use ratatui::{Frame, layout::Rect};

mod focus_registry;
mod interaction_registry;
mod widgets;

pub use focus_registry::{FocusRegistry, FocusableInfo};
pub use interaction_registry::InteractionRegistry;

use widgets::*;

/// Everything a widget renderer needs besides the frame and its area
pub struct RenderContext<'a, Msg> {
    pub theme: &'a Theme,
    pub registry: &'a mut InteractionRegistry<Msg>,
    pub focus_registry: &'a mut FocusRegistry<Msg>,
    pub focused_id: Option<&'a FocusId>,
}

impl<Msg> RenderContext<'_, Msg> {
    pub fn is_focused(&self, id: &FocusId) -> bool {
        self.focused_id == Some(id)
    }
}

/// Renders elements to the terminal
pub struct Renderer;

impl Renderer {
    /// Paint `element` into `area`, registering click targets and focusables
    pub fn render<Msg: Clone + 'static>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        focus_registry: &mut FocusRegistry<Msg>,
        focused_id: Option<&FocusId>,
        element: &Element<Msg>,
        area: Rect,
    ) {
        let mut ctx = RenderContext {
            theme,
            registry,
            focus_registry,
            focused_id,
        };
        render_element(frame, &mut ctx, element, area, false);
    }

    /// Size an element would like inside `container`, used to place floating layers
    pub fn estimate_element_size<Msg>(element: &Element<Msg>, container: Rect) -> (u16, u16) {
        match element {
            Element::None => (0, 0),
            Element::Text { content, .. } => (text_width(content), 1),
            Element::StyledText { line, .. } => (line.width() as u16, 1),
            Element::Button { label, .. } => (text_width(label) + 4, 3),
            Element::Panel {
                child,
                width,
                height,
                ..
            } => {
                let (content_w, content_h) =
                    calculate_content_size(child, container.width.min(100), container.height);
                let w = width.unwrap_or(content_w + 2);
                let h = height.unwrap_or(content_h + 2);
                (w.min(container.width), h.min(container.height))
            }
            Element::Column { .. } | Element::Row { .. } | Element::Container { .. } => {
                calculate_content_size(element, container.width, container.height)
            }
            Element::TextInput { .. } | Element::ProgressBar { .. } => (container.width, 1),
            Element::Stack { .. } | Element::List { .. } => (container.width, container.height),
        }
    }
}

fn text_width(s: &str) -> u16 {
    s.chars().count().min(u16::MAX as usize) as u16
}

/// Paint one element; widget renderers recurse through this
pub(crate) fn render_element<Msg: Clone + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    element: &Element<Msg>,
    area: Rect,
    inside_panel: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    if primitives::is_primitive(element) {
        primitives::render_primitive(frame, ctx.theme, element, area);
        return;
    }

    match element {
        Element::Button {
            id,
            label,
            on_press,
            style,
        } => render_button(frame, ctx, id, label, on_press, style, area, inside_panel),

        Element::Column { items, spacing } => {
            render_column(frame, ctx, items, *spacing, area, inside_panel)
        }

        Element::Row { items, spacing } => render_row(frame, ctx, items, *spacing, area, inside_panel),

        Element::Container { child, padding } => {
            render_container(frame, ctx, child, *padding, area, inside_panel)
        }

        Element::Panel {
            child,
            title,
            border_style,
            ..
        } => render_panel(frame, ctx, child, title, border_style, area),

        Element::List {
            id,
            items,
            selected,
            scroll_offset,
            on_select,
            on_activate,
            on_navigate,
        } => render_list(
            frame,
            ctx,
            ListProps {
                id,
                items,
                selected: *selected,
                scroll_offset: *scroll_offset,
                on_select: *on_select,
                on_activate: *on_activate,
                on_navigate: *on_navigate,
            },
            area,
            inside_panel,
        ),

        Element::TextInput {
            id,
            value,
            cursor_pos,
            scroll_offset,
            placeholder,
            on_change,
            on_submit,
        } => render_text_input(
            frame,
            ctx,
            TextInputProps {
                id,
                value,
                cursor_pos: *cursor_pos,
                scroll_offset: *scroll_offset,
                placeholder,
                on_change: *on_change,
                on_submit,
            },
            area,
            inside_panel,
        ),

        Element::ProgressBar { .. } => render_progress_bar(frame, ctx.theme, element, area),

        Element::Stack { layers } => render_stack(frame, ctx, layers, area, inside_panel),

        Element::None | Element::Text { .. } | Element::StyledText { .. } => {}
    }
}

/// Minimum content size needed for an element (recursive)
fn calculate_content_size<Msg>(element: &Element<Msg>, max_width: u16, max_height: u16) -> (u16, u16) {
    match element {
        Element::None => (0, 0),
        Element::Text { content, .. } => (text_width(content).min(max_width), 1),
        Element::StyledText { line, .. } => ((line.width() as u16).min(max_width), 1),
        Element::Button { label, .. } => ((text_width(label) + 4).min(max_width), 3),
        Element::Column { items, spacing } => {
            let mut total_height = 0u16;
            let mut max_item_width = 0u16;

            for (constraint, child) in items {
                let (child_w, child_h) = calculate_content_size(child, max_width, max_height);
                max_item_width = max_item_width.max(child_w);

                total_height += match constraint {
                    LayoutConstraint::Length(h) => *h,
                    LayoutConstraint::Min(h) => (*h).max(child_h),
                    LayoutConstraint::Fill(_) => child_h,
                };
            }

            if items.len() > 1 {
                total_height += (items.len() as u16 - 1) * spacing;
            }

            (max_item_width.min(max_width), total_height.min(max_height))
        }
        Element::Row { items, spacing } => {
            let mut total_width = 0u16;
            let mut max_item_height = 0u16;

            for (constraint, child) in items {
                let (child_w, child_h) = calculate_content_size(child, max_width, max_height);
                max_item_height = max_item_height.max(child_h);

                total_width += match constraint {
                    LayoutConstraint::Length(w) => *w,
                    LayoutConstraint::Min(w) => (*w).max(child_w),
                    LayoutConstraint::Fill(_) => child_w,
                };
            }

            if items.len() > 1 {
                total_width += (items.len() as u16 - 1) * spacing;
            }

            (total_width.min(max_width), max_item_height.min(max_height))
        }
        Element::Container { child, padding } => {
            let (child_w, child_h) = calculate_content_size(
                child,
                max_width.saturating_sub(padding * 2),
                max_height.saturating_sub(padding * 2),
            );
            (
                (child_w + padding * 2).min(max_width),
                (child_h + padding * 2).min(max_height),
            )
        }
        Element::Panel {
            child,
            width,
            height,
            ..
        } => {
            let (child_w, child_h) = calculate_content_size(
                child,
                max_width.saturating_sub(2),
                max_height.saturating_sub(2),
            );
            (
                width.unwrap_or(child_w + 2).min(max_width),
                height.unwrap_or(child_h + 2).min(max_height),
            )
        }
        Element::List { items, .. } => {
            let width = items
                .iter()
                .map(|item| calculate_content_size(item, max_width, 1).0)
                .max()
                .unwrap_or(0);
            // Two columns for the selection marker
            ((width + 2).min(max_width), (items.len() as u16).min(max_height))
        }
        Element::TextInput { .. } => (max_width.min(40), 1),
        Element::ProgressBar { width, .. } => (width.unwrap_or(30).min(max_width), 1),
        Element::Stack { layers } => layers.iter().fold((0, 0), |(w, h), layer| {
            let (lw, lh) = calculate_content_size(&layer.element, max_width, max_height);
            (w.max(lw), h.max(lh))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::Layer;
    use ratatui::{Terminal, backend::TestBackend};

    #[derive(Clone, Debug, PartialEq)]
    enum Msg {
        Press,
        Pick(usize),
    }

    fn render(element: &Element<Msg>, focused: Option<&FocusId>) -> (InteractionRegistry<Msg>, FocusRegistry<Msg>, String) {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let theme = Theme::default();
        let mut registry = InteractionRegistry::new();
        let mut focus_registry = FocusRegistry::new();
        terminal
            .draw(|frame| {
                let area = frame.area();
                Renderer::render(frame, &theme, &mut registry, &mut focus_registry, focused, element, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let text = buffer
            .content()
            .chunks(40)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        (registry, focus_registry, text)
    }

    #[test]
    fn test_button_registers_click_and_focus() {
        let element = Element::column(vec![
            Element::text("Heading"),
            Element::button("ok", "OK").on_press(Msg::Press).build(),
        ])
        .build();

        let (registry, focus_registry, text) = render(&element, None);
        assert!(text.contains("Heading"));
        assert!(text.contains("OK"));
        assert_eq!(focus_registry.ids(), vec![FocusId("ok")]);
        assert_eq!(registry.find_click(2, 2), Some(Msg::Press));
    }

    #[test]
    fn test_disabled_button_is_not_focusable() {
        let element: Element<Msg> = Element::button("off", "Off").build();
        let (registry, focus_registry, text) = render(&element, None);
        assert!(text.contains("Off"));
        assert!(focus_registry.ids().is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_list_registers_item_clicks() {
        let state = crate::tui::ListState::with_selection();
        let element = Element::list(
            "items",
            vec![Element::text("one"), Element::text("two")],
            &state,
        )
        .on_activate(Msg::Pick)
        .build();

        let (registry, focus_registry, text) = render(&element, None);
        assert!(text.contains("one"));
        assert_eq!(registry.find_click(3, 1), Some(Msg::Pick(1)));
        assert!(focus_registry.contains(&FocusId("items")));
    }

    #[test]
    fn test_dimmed_layer_hides_lower_focusables() {
        let element = Element::stack(vec![
            Layer::new(Element::button("under", "Under").on_press(Msg::Press).build()),
            Layer::new(
                Element::panel(Element::button("over", "Over").on_press(Msg::Pick(0)).build())
                    .width(20)
                    .height(5)
                    .build(),
            )
            .center()
            .dim(true),
        ]);

        let (registry, focus_registry, text) = render(&element, None);
        assert!(text.contains("Over"));
        assert_eq!(focus_registry.ids(), vec![FocusId("over")]);
        assert_eq!(registry.find_click(1, 1), None);
    }

    #[test]
    fn test_estimate_panel_size() {
        let panel: Element<Msg> = Element::panel(Element::text("twelve chars")).build();
        assert_eq!(
            Renderer::estimate_element_size(&panel, Rect::new(0, 0, 80, 24)),
            (14, 3)
        );

        let fixed: Element<Msg> = Element::panel(Element::text("x")).width(30).height(8).build();
        assert_eq!(
            Renderer::estimate_element_size(&fixed, Rect::new(0, 0, 20, 24)),
            (20, 8)
        );
    }
}
