use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusableInfo, RenderContext};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Enter or Space activates
fn button_on_key<Msg: Clone + 'static>(on_press: Msg) -> Box<dyn Fn(KeyCode) -> DispatchTarget<Msg>> {
    Box::new(move |key| match key {
        KeyCode::Enter | KeyCode::Char(' ') => DispatchTarget::AppMsg(on_press.clone()),
        _ => DispatchTarget::PassThrough,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn render_button<Msg: Clone + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    id: &FocusId,
    label: &str,
    on_press: &Option<Msg>,
    style: &Option<Style>,
    area: Rect,
    inside_panel: bool,
) {
    let theme = ctx.theme;

    // Disabled buttons are painted but never focused or clicked
    if let Some(msg) = on_press {
        ctx.focus_registry.register_focusable(FocusableInfo {
            id: id.clone(),
            rect: area,
            on_key: button_on_key(msg.clone()),
            inside_panel,
        });
        ctx.registry.register_click(area, msg.clone());
    }

    let (text_style, border_style) = if on_press.is_none() {
        (
            Style::default()
                .fg(theme.border_secondary)
                .add_modifier(Modifier::DIM),
            Style::default().fg(theme.border_secondary),
        )
    } else if ctx.is_focused(id) {
        (
            style.unwrap_or(Style::default().fg(theme.text_primary)),
            Style::default().fg(theme.accent_primary),
        )
    } else {
        (
            style.unwrap_or(Style::default().fg(theme.text_primary)),
            Style::default().fg(theme.border_primary),
        )
    };

    // Too short for a border: draw the bare label
    let widget = if area.height < 3 {
        Paragraph::new(format!("[ {} ]", label))
    } else {
        Paragraph::new(label).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
    };
    frame.render_widget(widget.alignment(Alignment::Center).style(text_style), area);
}
