use crate::tui::command::DispatchTarget;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusableInfo, RenderContext};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
};

/// Borrowed fields of an `Element::TextInput`
pub struct TextInputProps<'a, Msg> {
    pub id: &'a FocusId,
    pub value: &'a str,
    pub cursor_pos: usize,
    pub scroll_offset: usize,
    pub placeholder: &'a Option<String>,
    pub on_change: Option<fn(KeyCode) -> Msg>,
    pub on_submit: &'a Option<Msg>,
}

/// Enter submits, Esc and Tab fall through, everything else edits
fn text_input_on_key<Msg: Clone + 'static>(
    on_change: Option<fn(KeyCode) -> Msg>,
    on_submit: Option<Msg>,
) -> Box<dyn Fn(KeyCode) -> DispatchTarget<Msg>> {
    Box::new(move |key| match key {
        KeyCode::Enter => match &on_submit {
            Some(msg) => DispatchTarget::AppMsg(msg.clone()),
            None => DispatchTarget::PassThrough,
        },
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => DispatchTarget::PassThrough,
        _ => match on_change {
            Some(f) => DispatchTarget::AppMsg(f(key)),
            None => DispatchTarget::PassThrough,
        },
    })
}

pub fn render_text_input<Msg: Clone + 'static>(
    frame: &mut Frame,
    ctx: &mut RenderContext<'_, Msg>,
    props: TextInputProps<'_, Msg>,
    area: Rect,
    inside_panel: bool,
) {
    let theme = ctx.theme;

    ctx.focus_registry.register_focusable(FocusableInfo {
        id: props.id.clone(),
        rect: area,
        on_key: text_input_on_key(props.on_change, props.on_submit.clone()),
        inside_panel,
    });

    let is_focused = ctx.is_focused(props.id);

    // One column of left padding
    let visible_width = area.width.saturating_sub(2) as usize;
    let chars: Vec<char> = props.value.chars().collect();
    let start_idx = props.scroll_offset.min(chars.len());
    let end_idx = (start_idx + visible_width).min(chars.len());
    let mut visible: Vec<char> = chars[start_idx..end_idx].to_vec();

    let (display_text, text_style) = if props.value.is_empty() && !is_focused {
        (
            format!(" {}", props.placeholder.as_deref().unwrap_or("")),
            Style::default()
                .fg(theme.text_tertiary)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        let cursor_in_visible = props.cursor_pos.saturating_sub(start_idx);
        if is_focused && cursor_in_visible <= visible.len() {
            visible.insert(cursor_in_visible, '│');
        }
        (
            format!(" {}", visible.into_iter().collect::<String>()),
            Style::default().fg(theme.text_primary),
        )
    };

    let background = if is_focused {
        theme.bg_elevated
    } else {
        theme.bg_surface
    };
    frame.render_widget(
        Paragraph::new(display_text).style(text_style.bg(background)),
        area,
    );
}
