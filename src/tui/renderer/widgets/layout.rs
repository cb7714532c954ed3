use crate::tui::renderer::{RenderContext, render_element};
use crate::tui::{Element, LayoutConstraint};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

fn to_constraint(constraint: LayoutConstraint) -> Constraint {
    match constraint {
        LayoutConstraint::Length(n) => Constraint::Length(n),
        LayoutConstraint::Min(n) => Constraint::Min(n),
        LayoutConstraint::Fill(weight) => Constraint::Fill(weight),
    }
}

fn render_linear<Msg: Clone + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    direction: Direction,
    items: &[(LayoutConstraint, Element<Msg>)],
    spacing: u16,
    area: Rect,
    inside_panel: bool,
) {
    if items.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(direction)
        .constraints(items.iter().map(|(constraint, _)| to_constraint(*constraint)))
        .spacing(spacing)
        .split(area);

    for ((_, child), chunk) in items.iter().zip(chunks.iter()) {
        render_element(frame, ctx, child, *chunk, inside_panel);
    }
}

pub fn render_column<Msg: Clone + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    items: &[(LayoutConstraint, Element<Msg>)],
    spacing: u16,
    area: Rect,
    inside_panel: bool,
) {
    render_linear(frame, ctx, Direction::Vertical, items, spacing, area, inside_panel);
}

pub fn render_row<Msg: Clone + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    items: &[(LayoutConstraint, Element<Msg>)],
    spacing: u16,
    area: Rect,
    inside_panel: bool,
) {
    render_linear(frame, ctx, Direction::Horizontal, items, spacing, area, inside_panel);
}

pub fn render_container<Msg: Clone + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    child: &Element<Msg>,
    padding: u16,
    area: Rect,
    inside_panel: bool,
) {
    let padded_area = Rect {
        x: area.x + padding.min(area.width / 2),
        y: area.y + padding.min(area.height / 2),
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    };
    render_element(frame, ctx, child, padded_area, inside_panel);
}
