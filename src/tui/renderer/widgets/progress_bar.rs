use crate::tui::{Element, Theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Percentage of `current` over `total`, 0 for an empty total
pub fn percentage(current: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        (current.min(total) * 100) / total
    }
}

pub fn render_progress_bar<Msg>(frame: &mut Frame, theme: &Theme, element: &Element<Msg>, area: Rect) {
    let Element::ProgressBar {
        current,
        total,
        label,
        show_percentage,
        width,
        style,
    } = element
    else {
        return;
    };

    let status_text = if *show_percentage {
        format!(" {}%", percentage(*current, *total))
    } else {
        String::new()
    };

    let label_width = label.as_ref().map(|l| l.chars().count() + 1).unwrap_or(0);
    let padding = label_width + status_text.chars().count();

    let mut spans = Vec::new();
    if let Some(label_text) = label {
        spans.push(Span::styled(
            format!("{} ", label_text),
            Style::default().fg(theme.text_secondary),
        ));
    }

    if (area.width as usize) > padding {
        let available = area.width as usize - padding;
        let bar_width = width.map(|w| (w as usize).min(available)).unwrap_or(available);
        let filled = if *total > 0 {
            (current.min(total) * bar_width) / total
        } else {
            0
        };

        spans.push(Span::styled(
            "█".repeat(filled),
            style.unwrap_or(Style::default().fg(theme.accent_success)),
        ));
        spans.push(Span::styled(
            "░".repeat(bar_width - filled),
            Style::default().fg(theme.border_secondary),
        ));
    }

    if !status_text.is_empty() {
        spans.push(Span::styled(status_text, Style::default().fg(theme.text_primary)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(45, 100), 45);
        assert_eq!(percentage(3, 4), 75);
        assert_eq!(percentage(150, 100), 100);
    }
}
