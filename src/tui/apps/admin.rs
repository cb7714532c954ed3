use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{card, card_row, display_date, row_height, stacked, with_thousands};
use crate::nav::{Role, ScreenId};
use crate::tui::element::{ColumnBuilder, RowBuilder};
use crate::tui::{App, Command, Element, LayoutConstraint, Subscription, Theme};

pub struct AdminApp;

const TOTAL_USERS: u32 = 12847;
const ACTIVE_USERS: u32 = 8943;
const TOTAL_JOBS: u32 = 3421;
const AVG_SUCCESS_RATE: f32 = 14.2;

/// Success rate above which a role is highlighted
const STRONG_SUCCESS: f32 = 15.0;

/// (role, applications, success %)
const TOP_ROLES: [(&str, u32, f32); 5] = [
    ("Frontend Developer", 2843, 16.8),
    ("Full Stack Developer", 2156, 15.2),
    ("Data Analyst", 1987, 12.4),
    ("Backend Developer", 1654, 18.1),
    ("Mobile Developer", 1234, 11.7),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

impl Trend {
    fn arrow(self) -> &'static str {
        match self {
            Trend::Increasing => "↗",
            Trend::Stable => "→",
            Trend::Decreasing => "↘",
        }
    }

    /// A growing gap is bad news
    fn style(self, theme: &Theme) -> Style {
        match self {
            Trend::Increasing => theme.error_style(),
            Trend::Stable => theme.muted_style(),
            Trend::Decreasing => theme.success_style(),
        }
    }
}

const SKILL_GAPS: [(&str, u8, Trend); 5] = [
    ("TypeScript", 67, Trend::Increasing),
    ("Cloud Computing", 54, Trend::Stable),
    ("Docker/Kubernetes", 48, Trend::Increasing),
    ("Machine Learning", 71, Trend::Increasing),
    ("Testing/QA", 42, Trend::Decreasing),
];

/// (name, email, joined, active)
const RECENT_USERS: [(&str, &str, &str, bool); 4] = [
    ("Alex Johnson", "alex.j@uni.edu", "2024-01-20", true),
    ("Sarah Chen", "sarah.c@college.edu", "2024-01-19", true),
    ("Mike Rodriguez", "mike.r@school.edu", "2024-01-18", false),
    ("Emily Davis", "emily.d@uni.edu", "2024-01-17", true),
];

const ADMIN_ACTIONS: [(&str, &str, &str, &str); 3] = [
    (
        "view-users",
        "Manage Users",
        "View and manage user accounts",
        "View Users",
    ),
    (
        "manage-jobs",
        "Job Categories",
        "Manage roles and skill requirements",
        "Manage Jobs",
    ),
    (
        "upload-content",
        "Role Explainers",
        "Upload role explainer videos",
        "Upload Content",
    ),
];

#[derive(Debug, Clone, Default)]
pub struct AdminParams {
    /// Role of whoever is logged in, if anyone
    pub role: Option<Role>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    AdminAction(&'static str),
    Restart,
}

pub struct State {
    role: Option<Role>,
}

impl State {
    /// Access badge text; no authorization is enforced
    pub fn badge(&self) -> String {
        match self.role {
            Some(Role::Admin) => "Admin Access".to_string(),
            Some(role) => format!("Viewing as {}", role),
            None => "Viewing as guest".to_string(),
        }
    }
}

/// Share of registered users active this month, as a percentage
pub fn engagement_percent() -> f64 {
    f64::from(ACTIVE_USERS) / f64::from(TOTAL_USERS) * 100.0
}

/// "Alex Johnson" -> "AJ"
fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|part| part.chars().next()).collect()
}

fn metrics(theme: &Theme) -> Vec<Element<Msg>> {
    let metric = |label: &str, value: String, note: String, style: Style| {
        card(
            label,
            vec![Element::styled(value, theme.heading_style()), Element::styled(note, style)],
        )
    };
    vec![
        metric(
            "👥 Total Users",
            with_thousands(TOTAL_USERS),
            "+12% from last month".to_string(),
            theme.success_style(),
        ),
        metric(
            "✓ Active Users",
            with_thousands(ACTIVE_USERS),
            format!("{:.1}% engagement", engagement_percent()),
            theme.info_style(),
        ),
        metric(
            "💼 Total Jobs",
            with_thousands(TOTAL_JOBS),
            "+8% from last week".to_string(),
            theme.success_style(),
        ),
        metric(
            "↗ Success Rate",
            format!("{:.1}%", AVG_SUCCESS_RATE),
            "+2.1% improvement".to_string(),
            theme.success_style(),
        ),
    ]
}

fn top_roles(theme: &Theme) -> Element<Msg> {
    let lines = TOP_ROLES
        .iter()
        .enumerate()
        .flat_map(|(i, &(role, applications, success))| {
            let success_style = if success > STRONG_SUCCESS {
                theme.success_style()
            } else {
                theme.warning_style()
            };
            [
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(theme.accent_primary)),
                    Span::styled(
                        format!("{} ", role),
                        Style::default()
                            .fg(theme.text_primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("{:.1}% success", success), success_style),
                ]))
                .build(),
                Element::styled(format!("   {} applications", with_thousands(applications)), theme.muted_style()),
            ]
        })
        .collect();
    card("◎ Most Applied Roles", lines)
}

fn skill_gaps(theme: &Theme) -> Element<Msg> {
    let lines = SKILL_GAPS
        .iter()
        .flat_map(|&(skill, gap, trend)| {
            [
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{:<20}", skill), Style::default().fg(theme.text_primary)),
                    Span::styled(format!("{} ", trend.arrow()), trend.style(theme)),
                    Span::styled(format!("{}%", gap), theme.heading_style()),
                ]))
                .build(),
                Element::progress_bar(gap as usize, 100)
                    .show_percentage(false)
                    .style(Style::default().fg(theme.accent_primary))
                    .build(),
            ]
        })
        .collect();
    card("↗ Top Skill Gaps", lines)
}

fn recent_users(theme: &Theme) -> Element<Msg> {
    let lines = RECENT_USERS
        .iter()
        .flat_map(|&(name, email, joined, active)| {
            let (status, status_style) = if active {
                ("active", theme.success_style())
            } else {
                ("inactive", theme.muted_style())
            };
            [
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("({}) ", initials(name)), Style::default().fg(theme.accent_secondary)),
                    Span::styled(format!("{} ", name), Style::default().fg(theme.text_primary)),
                    Span::styled(format!("[{}]", status), status_style),
                ]))
                .build(),
                Element::styled(format!("     {} · {}", email, display_date(joined)), theme.muted_style()),
            ]
        })
        .collect();
    card("👥 Recent Users", lines)
}

fn admin_actions(theme: &Theme) -> Vec<Element<Msg>> {
    ADMIN_ACTIONS
        .iter()
        .map(|&(id, title, blurb, label)| {
            let body = ColumnBuilder::new()
                .add(Element::styled(blurb, theme.muted_style()), LayoutConstraint::Length(1))
                .add(
                    Element::button(id, label).on_press(Msg::AdminAction(id)).build(),
                    LayoutConstraint::Length(3),
                )
                .build();
            Element::panel(body).title(title).height(6).build()
        })
        .collect()
}

impl App for AdminApp {
    const ID: ScreenId = ScreenId::Admin;
    type State = State;
    type Msg = Msg;
    type InitParams = AdminParams;

    fn init(params: AdminParams) -> (State, Command<Msg>) {
        if params.role != Some(Role::Admin) {
            log::debug!("Admin dashboard opened without admin session");
        }
        (State { role: params.role }, Command::None)
    }

    fn update(_state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::AdminAction(action) => {
                log::info!("Admin action '{}' is not available in the demo", action);
                Command::None
            }
            Msg::Restart => Command::navigate_to(ScreenId::Intro),
        }
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let badge_style = if state.role == Some(Role::Admin) {
            Style::default()
                .fg(theme.bg_base)
                .bg(theme.accent_tertiary)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.muted_style()
        };
        let title = RowBuilder::new()
            .add(
                Element::column(vec![
                    Element::styled("Admin Dashboard", theme.heading_style()),
                    Element::styled("Manage platform analytics and user insights", theme.muted_style()),
                ])
                .build(),
                LayoutConstraint::Fill(1),
            )
            .add(
                Element::styled(format!(" ⚙ {} ", state.badge()), badge_style),
                LayoutConstraint::Length(22),
            )
            .build();

        let metrics = metrics(theme);
        let metrics_height = row_height(&metrics);

        let insights = vec![top_roles(theme), skill_gaps(theme), recent_users(theme)];
        let insights_height = row_height(&insights);

        let actions = admin_actions(theme);
        let actions_height = row_height(&actions);

        let finale = ColumnBuilder::new()
            .add(
                Element::styled("Smart Job Aggregator Demo Complete! 🎉", theme.heading_style()),
                LayoutConstraint::Length(1),
            )
            .add(
                Element::text("You've experienced all the key features of our student career platform."),
                LayoutConstraint::Length(1),
            )
            .add(
                Element::styled(
                    "From job discovery to resume analysis, application tracking to peer comparisons.",
                    theme.muted_style(),
                ),
                LayoutConstraint::Length(1),
            )
            .add(
                Element::button("restart", "Start Demo Again")
                    .on_press(Msg::Restart)
                    .build(),
                LayoutConstraint::Length(3),
            )
            .build();

        Element::container(stacked(vec![
            (2, title),
            (metrics_height, card_row(metrics)),
            (insights_height, card_row(insights)),
            (actions_height, card_row(actions)),
            (6, finale),
        ]))
        .build()
    }

    fn subscriptions(_state: &State) -> Vec<Subscription<Msg>> {
        vec![Subscription::keyboard(KeyCode::Char('r'), "Start demo again", Msg::Restart)]
    }

    fn title() -> &'static str {
        "Admin Dashboard"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        Some(Line::from(Span::styled(state.badge(), theme.muted_style())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_from_literals() {
        assert_eq!(format!("{:.1}", engagement_percent()), "69.6");
    }

    #[test]
    fn test_badge_falls_back_to_guest() {
        let (admin, _) = AdminApp::init(AdminParams { role: Some(Role::Admin) });
        assert_eq!(admin.badge(), "Admin Access");

        let (student, _) = AdminApp::init(AdminParams { role: Some(Role::Student) });
        assert_eq!(student.badge(), "Viewing as student");

        let (guest, _) = AdminApp::init(AdminParams::default());
        assert_eq!(guest.badge(), "Viewing as guest");
    }

    #[test]
    fn test_view_renders_for_any_session() {
        let (state, _) = AdminApp::init(AdminParams::default());
        let view = AdminApp::view(&state, &Theme::default());
        assert!(view.contains_text("12,847"));
        assert!(view.contains_text("69.6% engagement"));
        assert!(view.contains_text("(MR) Mike Rodriguez"));
        assert!(view.contains_text("Jan 17, 2024"));
    }

    #[test]
    fn test_admin_actions_only_log() {
        let (mut state, _) = AdminApp::init(AdminParams::default());
        let view = AdminApp::view(&state, &Theme::default());
        let msg = view.press_msg("manage-jobs").cloned().unwrap();
        assert!(matches!(AdminApp::update(&mut state, msg), Command::None));
    }

    #[test]
    fn test_restart_goes_to_intro() {
        let (mut state, _) = AdminApp::init(AdminParams::default());
        let view = AdminApp::view(&state, &Theme::default());
        let msg = view.press_msg("restart").cloned().unwrap();
        assert!(matches!(
            AdminApp::update(&mut state, msg),
            Command::NavigateTo(ScreenId::Intro)
        ));
    }
}
