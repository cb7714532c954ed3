use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{card, card_row, display_date, header, row_height, stacked};
use crate::nav::ScreenId;
use crate::tui::element::{ColumnBuilder, RowBuilder};
use crate::tui::{App, Command, Element, LayoutConstraint, ListState, Theme};

pub struct GrowthApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Motivated,
    Happy,
    Neutral,
    Anxious,
    Proud,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Motivated, Mood::Happy, Mood::Neutral, Mood::Anxious, Mood::Proud];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Motivated => "Motivated",
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Anxious => "Anxious",
            Mood::Proud => "Proud",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Mood::Motivated => "★",
            Mood::Happy => "☺",
            Mood::Neutral => "◌",
            Mood::Anxious => "☹",
            Mood::Proud => "↗",
        }
    }

    fn button_id(self) -> &'static str {
        match self {
            Mood::Motivated => "mood-motivated",
            Mood::Happy => "mood-happy",
            Mood::Neutral => "mood-neutral",
            Mood::Anxious => "mood-anxious",
            Mood::Proud => "mood-proud",
        }
    }

    fn color(self, theme: &Theme) -> Color {
        match self {
            Mood::Motivated | Mood::Happy => theme.accent_success,
            Mood::Neutral => theme.accent_warning,
            Mood::Anxious => theme.accent_error,
            Mood::Proud => theme.accent_primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventKind {
    Application,
    Interview,
    Achievement,
    Offer,
    Mood,
}

impl EventKind {
    fn icon(self) -> &'static str {
        match self {
            EventKind::Application => "◎",
            EventKind::Interview => "★",
            EventKind::Achievement => "↗",
            EventKind::Offer => "✓",
            EventKind::Mood => "☺",
        }
    }

    fn color(self, theme: &Theme) -> Color {
        match self {
            EventKind::Application => theme.accent_primary,
            EventKind::Interview => theme.accent_warning,
            EventKind::Achievement => theme.accent_tertiary,
            EventKind::Offer => theme.accent_success,
            EventKind::Mood => theme.text_tertiary,
        }
    }
}

struct TimelineEvent {
    date: &'static str,
    kind: EventKind,
    title: &'static str,
    mood: Mood,
    description: &'static str,
}

const TIMELINE: [TimelineEvent; 6] = [
    TimelineEvent {
        date: "2024-01-15",
        kind: EventKind::Application,
        title: "Applied to Tech Innovate Inc.",
        mood: Mood::Motivated,
        description: "Frontend Developer position",
    },
    TimelineEvent {
        date: "2024-01-18",
        kind: EventKind::Mood,
        title: "Feeling confident",
        mood: Mood::Happy,
        description: "Good progress on portfolio project",
    },
    TimelineEvent {
        date: "2024-01-20",
        kind: EventKind::Interview,
        title: "First round interview",
        mood: Mood::Anxious,
        description: "MegaCorp technical interview",
    },
    TimelineEvent {
        date: "2024-01-22",
        kind: EventKind::Achievement,
        title: "Completed React certification",
        mood: Mood::Proud,
        description: "Advanced React certification from Coursera",
    },
    TimelineEvent {
        date: "2024-01-25",
        kind: EventKind::Application,
        title: "Applied to StartupXYZ",
        mood: Mood::Motivated,
        description: "Remote React Developer role",
    },
    TimelineEvent {
        date: "2024-01-28",
        kind: EventKind::Offer,
        title: "Job offer received!",
        mood: Mood::Proud,
        description: "Junior Developer at GrowthCo - $85,000",
    },
];

pub struct WeekStats {
    pub week: &'static str,
    pub applications: u8,
    pub interviews: u8,
    pub mood_trend: &'static str,
    pub avg_mood: f32,
    pub achievements: u8,
}

pub const WEEKS: [WeekStats; 4] = [
    WeekStats { week: "Week 1", applications: 5, interviews: 1, mood_trend: "positive", avg_mood: 4.2, achievements: 2 },
    WeekStats { week: "Week 2", applications: 8, interviews: 3, mood_trend: "mixed", avg_mood: 3.8, achievements: 1 },
    WeekStats { week: "Week 3", applications: 6, interviews: 2, mood_trend: "positive", avg_mood: 4.5, achievements: 3 },
    WeekStats { week: "Week 4", applications: 4, interviews: 4, mood_trend: "positive", avg_mood: 4.1, achievements: 1 },
];

const OVERALL: [(&str, &str); 4] = [
    ("23", "Total Applications"),
    ("10", "Interviews Completed"),
    ("7", "Achievements Unlocked"),
    ("4.2", "Average Mood Score"),
];

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    SetMood(Mood),
    WeekNavigate(KeyCode),
    SelectWeek(usize),
    DownloadReport,
    ViewAdmin,
}

pub struct State {
    pub mood: Option<Mood>,
    pub weeks: ListState,
}

impl State {
    pub fn selected_week(&self) -> &'static WeekStats {
        &WEEKS[self.weeks.selected().unwrap_or(0).min(WEEKS.len() - 1)]
    }
}

/// Days between the first and last timeline entries
pub fn journey_days() -> Option<i64> {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    let first = parse(TIMELINE.first()?.date)?;
    let last = parse(TIMELINE.last()?.date)?;
    Some((last - first).num_days())
}

fn mood_selector(state: &State, theme: &Theme) -> Element<Msg> {
    let mut row = RowBuilder::new();
    for mood in Mood::ALL {
        let mut style = Style::default().fg(mood.color(theme));
        if state.mood == Some(mood) {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        row = row.add(
            Element::button(mood.button_id(), format!("{} {}", mood.icon(), mood.label()))
                .on_press(Msg::SetMood(mood))
                .style(style)
                .build(),
            LayoutConstraint::Fill(1),
        );
    }
    let caption = match state.mood {
        Some(mood) => format!("Logged today's mood: {}", mood.label()),
        None => "How are you feeling today?".to_string(),
    };
    ColumnBuilder::new()
        .add(Element::styled(caption, theme.heading_style()), LayoutConstraint::Length(1))
        .add(row.build(), LayoutConstraint::Length(3))
        .build()
}

fn timeline(theme: &Theme) -> Element<Msg> {
    let lines = TIMELINE
        .iter()
        .flat_map(|event| {
            [
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{} ", event.kind.icon()), Style::default().fg(event.kind.color(theme))),
                    Span::styled(
                        format!("{} ", event.title),
                        Style::default()
                            .fg(theme.text_primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(event.mood.icon(), Style::default().fg(event.mood.color(theme))),
                ]))
                .build(),
                Element::styled_text(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{} · ", event.description), theme.muted_style()),
                    Span::styled(display_date(event.date), Style::default().fg(theme.text_tertiary)),
                ]))
                .build(),
            ]
        })
        .collect();

    let title = match journey_days() {
        Some(days) => format!("Career Journey Timeline ({} days)", days),
        None => "Career Journey Timeline".to_string(),
    };
    card(title, lines)
}

fn weekly_summary(state: &State, theme: &Theme) -> Element<Msg> {
    let items = WEEKS
        .iter()
        .map(|week| {
            Element::styled_text(Line::from(vec![
                Span::styled(format!("{:<8}", week.week), Style::default().fg(theme.text_primary)),
                Span::styled(week.mood_trend, theme.muted_style()),
            ]))
            .build()
        })
        .collect();

    let week = state.selected_week();
    let stat = |value: String, label: &str, style: Style| {
        Element::styled_text(Line::from(vec![
            Span::styled(format!("{:>5} ", value), style),
            Span::styled(label.to_string(), theme.muted_style()),
        ]))
        .build()
    };

    let body = ColumnBuilder::new()
        .add(
            Element::list("week-list", items, &state.weeks)
                .on_select(Msg::SelectWeek)
                .on_navigate(Msg::WeekNavigate)
                .build(),
            LayoutConstraint::Length(WEEKS.len() as u16),
        )
        .add(Element::None, LayoutConstraint::Length(1))
        .add(Element::styled(week.week, theme.heading_style()), LayoutConstraint::Length(1))
        .add(
            stat(week.applications.to_string(), "Applications", Style::default().fg(theme.accent_primary)),
            LayoutConstraint::Length(1),
        )
        .add(
            stat(week.interviews.to_string(), "Interviews", theme.warning_style()),
            LayoutConstraint::Length(1),
        )
        .add(
            stat(week.achievements.to_string(), "Achievements", theme.success_style()),
            LayoutConstraint::Length(1),
        )
        .add(
            stat(format!("{:.1}/5", week.avg_mood), "Avg Mood", Style::default().fg(theme.accent_tertiary)),
            LayoutConstraint::Length(1),
        )
        .build();

    Element::panel(body).title("↗ Weekly Summary").height(WEEKS.len() as u16 + 8).build()
}

impl App for GrowthApp {
    const ID: ScreenId = ScreenId::Growth;
    type State = State;
    type Msg = Msg;
    type InitParams = ();

    fn init(_params: ()) -> (State, Command<Msg>) {
        let state = State {
            mood: None,
            weeks: ListState::with_selection(),
        };
        (state, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::SetMood(mood) => {
                log::debug!("Mood logged: {}", mood.label());
                state.mood = Some(mood);
            }
            Msg::WeekNavigate(key) => {
                state.weeks.handle_key(key, WEEKS.len(), WEEKS.len());
            }
            Msg::SelectWeek(index) => {
                if index < WEEKS.len() {
                    state.weeks.select(Some(index));
                }
            }
            Msg::DownloadReport => log::info!("PDF report download is not available in the demo"),
            Msg::ViewAdmin => return Command::navigate_to(ScreenId::Admin),
        }
        Command::None
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let timeline = timeline(theme);
        let summary = weekly_summary(state, theme);
        let middle_height = row_height(&[timeline.clone(), summary.clone()]);
        let middle = RowBuilder::new()
            .add(timeline, LayoutConstraint::Fill(2))
            .add(summary, LayoutConstraint::Fill(1))
            .build();

        let overall: Vec<Element<Msg>> = OVERALL
            .iter()
            .map(|(value, label)| card(*label, vec![Element::styled(*value, theme.heading_style())]))
            .collect();
        let overall_height = row_height(&overall);

        let actions = RowBuilder::new()
            .add(
                Element::button("download", "⤓ Download PDF Report")
                    .on_press(Msg::DownloadReport)
                    .build(),
                LayoutConstraint::Fill(1),
            )
            .add(
                Element::button("admin", "View Admin Dashboard")
                    .on_press(Msg::ViewAdmin)
                    .build(),
                LayoutConstraint::Fill(1),
            )
            .spacing(2)
            .build();

        Element::container(stacked(vec![
            (
                2,
                header(
                    "Personal Growth Tracker",
                    "Track your career journey, mood, and achievements over time",
                    theme,
                ),
            ),
            (4, mood_selector(state, theme)),
            (middle_height, middle),
            (overall_height, card_row(overall)),
            (3, actions),
        ]))
        .build()
    }

    fn title() -> &'static str {
        "Growth Tracker"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        let mood = state.mood?;
        Some(Line::from(Span::styled(
            format!("Mood: {}", mood.label()),
            Style::default().fg(mood.color(theme)),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journey_length() {
        assert_eq!(journey_days(), Some(13));
    }

    #[test]
    fn test_set_mood() {
        let (mut state, _) = GrowthApp::init(());
        assert!(GrowthApp::status(&state, &Theme::default()).is_none());

        let view = GrowthApp::view(&state, &Theme::default());
        let msg = view.press_msg("mood-anxious").cloned().unwrap();
        GrowthApp::update(&mut state, msg);
        assert_eq!(state.mood, Some(Mood::Anxious));
        assert!(GrowthApp::view(&state, &Theme::default()).contains_text("Logged today's mood: Anxious"));
    }

    #[test]
    fn test_week_selection() {
        let (mut state, _) = GrowthApp::init(());
        assert_eq!(state.selected_week().week, "Week 1");

        GrowthApp::update(&mut state, Msg::WeekNavigate(KeyCode::Down));
        assert_eq!(state.selected_week().applications, 8);

        GrowthApp::update(&mut state, Msg::SelectWeek(3));
        assert_eq!(state.selected_week().week, "Week 4");

        GrowthApp::update(&mut state, Msg::WeekNavigate(KeyCode::Down));
        assert_eq!(state.selected_week().week, "Week 1");

        GrowthApp::update(&mut state, Msg::SelectWeek(10));
        assert_eq!(state.selected_week().week, "Week 1");
    }

    #[test]
    fn test_timeline_dates() {
        let (state, _) = GrowthApp::init(());
        let view = GrowthApp::view(&state, &Theme::default());
        assert!(view.contains_text("Jan 28, 2024"));
        assert!(view.contains_text("Career Journey Timeline (13 days)"));
    }

    #[test]
    fn test_view_admin() {
        let (mut state, _) = GrowthApp::init(());
        assert!(matches!(
            GrowthApp::update(&mut state, Msg::ViewAdmin),
            Command::NavigateTo(ScreenId::Admin)
        ));
    }
}
