use crate::tui::element::FocusId;
use crate::tui::renderer::{RenderContext, render_element};
use crate::tui::Element;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear},
};

/// Whether a focused list or text input lives under `element`, excluding nested panels
fn contains_focused_input<Msg>(element: &Element<Msg>, focused_id: &FocusId) -> bool {
    match element {
        Element::TextInput { id, .. } | Element::List { id, .. } => id == focused_id,
        Element::Column { items, .. } | Element::Row { items, .. } => items
            .iter()
            .any(|(_, child)| contains_focused_input(child, focused_id)),
        Element::Container { child, .. } => contains_focused_input(child, focused_id),
        _ => false,
    }
}

pub fn render_panel<Msg: Clone + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    child: &Element<Msg>,
    title: &Option<String>,
    border_style: &Option<Style>,
    area: Rect,
) {
    let theme = ctx.theme;
    let focused_inside = ctx
        .focused_id
        .is_some_and(|id| contains_focused_input(child, id));

    let border = if focused_inside {
        Style::default().fg(theme.accent_primary)
    } else {
        border_style.unwrap_or(Style::default().fg(theme.border_primary))
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(theme.bg_base));
    if let Some(title_text) = title {
        block = block.title(format!(" {} ", title_text));
    }

    let inner_area = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    render_element(frame, ctx, child, inner_area, true);
}
