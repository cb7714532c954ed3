use crate::tui::renderer::{RenderContext, Renderer, render_element};
use crate::tui::{Alignment, Element, Layer, Theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Clear},
};

pub fn render_dim_overlay(frame: &mut Frame, theme: &Theme, area: Rect) {
    frame.render_widget(Clear, area);
    let dim_block = Block::default().style(
        Style::default()
            .bg(theme.bg_surface)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(dim_block, area);
}

/// Where a layer of the given alignment lands inside `container`
pub fn calculate_layer_position<Msg>(element: &Element<Msg>, alignment: Alignment, container: Rect) -> Rect {
    let (width, height) = Renderer::estimate_element_size(element, container);

    let (x, y) = match alignment {
        Alignment::TopLeft => (container.x, container.y),
        Alignment::Center => (
            container.x + container.width.saturating_sub(width) / 2,
            container.y + container.height.saturating_sub(height) / 2,
        ),
        Alignment::BottomRight => (
            container.x + container.width.saturating_sub(width),
            container.y + container.height.saturating_sub(height),
        ),
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn render_stack<Msg: Clone + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    layers: &[Layer<Msg>],
    area: Rect,
    inside_panel: bool,
) {
    for layer in layers {
        if layer.dim_below {
            // Nothing underneath stays interactive
            ctx.registry.clear();
            ctx.focus_registry.clear();
            render_dim_overlay(frame, ctx.theme, area);
        }

        let layer_area = match layer.alignment {
            Alignment::TopLeft if !layer.dim_below => area,
            alignment => calculate_layer_position(&layer.element, alignment, area),
        };
        render_element(frame, ctx, &layer.element, layer_area, inside_panel);
    }
}
