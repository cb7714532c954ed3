//! The ten screens of the demo flow, plus small layout helpers they share.

pub mod admin;
pub mod compare;
pub mod dashboard;
pub mod growth;
pub mod intro;
pub mod login;
pub mod peer_resume;
pub mod role_explainer;
pub mod skill_gap;
pub mod tracker;

pub use admin::AdminApp;
pub use compare::CompareApp;
pub use dashboard::DashboardApp;
pub use growth::GrowthApp;
pub use intro::IntroApp;
pub use login::LoginApp;
pub use peer_resume::PeerResumeApp;
pub use role_explainer::RoleExplainerApp;
pub use skill_gap::SkillGapApp;
pub use tracker::TrackerApp;

use crate::tui::element::{ColumnBuilder, RowBuilder};
use crate::tui::{Element, LayoutConstraint, Theme};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Title and subtitle at the top of a screen (two lines)
pub(crate) fn header<Msg>(title: impl Into<String>, subtitle: impl Into<String>, theme: &Theme) -> Element<Msg> {
    ColumnBuilder::new()
        .add(Element::styled(title, theme.heading_style()), LayoutConstraint::Length(1))
        .add(Element::styled(subtitle, theme.muted_style()), LayoutConstraint::Length(1))
        .build()
}

/// Bordered card sized to its one-line children
pub(crate) fn card<Msg>(title: impl Into<String>, lines: Vec<Element<Msg>>) -> Element<Msg> {
    let height = lines.len() as u16 + 2;
    let mut body = ColumnBuilder::new();
    for line in lines {
        body = body.add(line, LayoutConstraint::Length(1));
    }
    Element::panel(body.build()).title(title).height(height).build()
}

/// Equal-width cards side by side; the row is as tall as the tallest card
pub(crate) fn card_row<Msg>(cards: Vec<Element<Msg>>) -> Element<Msg> {
    let mut row = RowBuilder::new();
    for card in cards {
        row = row.add(card, LayoutConstraint::Fill(1));
    }
    row.build()
}

/// Height of the tallest card in a row
pub(crate) fn row_height<Msg>(cards: &[Element<Msg>]) -> u16 {
    cards
        .iter()
        .map(|card| match card.default_constraint() {
            LayoutConstraint::Length(n) | LayoutConstraint::Min(n) => n,
            LayoutConstraint::Fill(_) => 3,
        })
        .max()
        .unwrap_or(0)
}

/// `label value` on one line, label muted
pub(crate) fn field<Msg>(label: &str, value: impl Into<String>, theme: &Theme) -> Element<Msg> {
    Element::styled_text(Line::from(vec![
        Span::styled(format!("{} ", label), theme.muted_style()),
        Span::styled(value.into(), Style::default().fg(theme.text_primary)),
    ]))
    .build()
}

/// Inline tags like `[React] [SQL]`
pub(crate) fn tags<Msg>(items: &[&str], style: Style) -> Element<Msg> {
    let spans: Vec<Span<'static>> = items
        .iter()
        .flat_map(|item| [Span::styled(format!("[{}]", item), style), Span::raw(" ")])
        .collect();
    Element::styled_text(Line::from(spans)).build()
}

/// Single-row selector shown as `‹ value ›`, cycling on press
pub(crate) fn cycle_button<Msg>(id: &'static str, label: &str, value: &str, msg: Msg) -> Element<Msg> {
    Element::button(id, format!("{}: ‹ {} ›", label, value))
        .on_press(msg)
        .build()
}

/// Stack items vertically using each item's own height
pub(crate) fn stacked<Msg>(items: Vec<(u16, Element<Msg>)>) -> Element<Msg> {
    let mut column = ColumnBuilder::new().spacing(1);
    for (height, item) in items {
        column = column.add(item, LayoutConstraint::Length(height));
    }
    column.build()
}

/// 2847 -> "2,847"
pub(crate) fn with_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `2024-01-15` as `Jan 15, 2024`; unparseable input is shown as is
pub(crate) fn display_date(iso: &str) -> String {
    match chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(err) => {
            log::warn!("Unparseable date '{}': {}", iso, err);
            iso.to_string()
        }
    }
}
