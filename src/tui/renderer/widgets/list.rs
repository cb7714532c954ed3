use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusableInfo, RenderContext, render_element};
use crate::tui::Element;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

/// Borrowed fields of an `Element::List`
pub struct ListProps<'a, Msg> {
    pub id: &'a FocusId,
    pub items: &'a [Element<Msg>],
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub on_select: Option<fn(usize) -> Msg>,
    pub on_activate: Option<fn(usize) -> Msg>,
    pub on_navigate: Option<fn(KeyCode) -> Msg>,
}

/// Navigation keys go to `on_navigate`, Enter activates the selection
fn list_on_key<Msg: 'static>(
    selected: Option<usize>,
    on_navigate: Option<fn(KeyCode) -> Msg>,
    on_activate: Option<fn(usize) -> Msg>,
) -> Box<dyn Fn(KeyCode) -> DispatchTarget<Msg>> {
    Box::new(move |key| match key {
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Home
        | KeyCode::End => match on_navigate {
            Some(f) => DispatchTarget::AppMsg(f(key)),
            None => DispatchTarget::PassThrough,
        },
        KeyCode::Enter => match (selected, on_activate) {
            (Some(idx), Some(activate)) => DispatchTarget::AppMsg(activate(idx)),
            _ => DispatchTarget::PassThrough,
        },
        _ => DispatchTarget::PassThrough,
    })
}

pub fn render_list<Msg: Clone + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    props: ListProps<'_, Msg>,
    area: Rect,
    inside_panel: bool,
) {
    let theme = ctx.theme;

    ctx.focus_registry.register_focusable(FocusableInfo {
        id: props.id.clone(),
        rect: area,
        on_key: list_on_key(props.selected, props.on_navigate, props.on_activate),
        inside_panel,
    });

    let is_focused = ctx.is_focused(props.id);
    let visible_height = area.height as usize;
    let start_idx = props.scroll_offset.min(props.items.len());
    let end_idx = (start_idx + visible_height).min(props.items.len());
    let on_click = props.on_select.or(props.on_activate);

    for (row, item_idx) in (start_idx..end_idx).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + row as u16,
            width: area.width,
            height: 1,
        };
        let is_selected = props.selected == Some(item_idx);

        let marker = if is_selected { "▶ " } else { "  " };
        let marker_style = if is_selected {
            theme.selection_style()
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(marker).style(marker_style), row_area);

        let item_area = Rect {
            x: row_area.x + 2,
            width: row_area.width.saturating_sub(2),
            ..row_area
        };
        render_element(frame, ctx, &props.items[item_idx], item_area, inside_panel);
        if is_selected {
            frame.buffer_mut().set_style(item_area, Style::default().bg(theme.bg_surface));
        }

        if let Some(f) = on_click {
            ctx.registry.register_click(row_area, f(item_idx));
        }
    }

    // Only draw a focus border outside panels; panels highlight their own border
    if is_focused && !inside_panel {
        let border = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(theme.accent_primary));
        frame.render_widget(border, area);
    }
}
