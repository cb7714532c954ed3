use crossterm::event::KeyCode;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{card, card_row, field, header, row_height, stacked, tags};
use crate::nav::ScreenId;
use crate::tui::element::ColumnBuilder;
use crate::tui::{App, Command, Element, LayoutConstraint, TextInputState, Theme};

pub struct DashboardApp;

/// A job posting shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub skills: [&'static str; 3],
    pub salary: &'static str,
    pub match_score: u8,
    pub posted: &'static str,
}

impl Job {
    fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.company,
            self.location,
            self.skills.join(" ")
        )
    }
}

pub const JOBS: [Job; 3] = [
    Job {
        title: "Frontend Developer",
        company: "Tech Innovate Inc.",
        location: "San Francisco, CA",
        skills: ["React", "TypeScript", "Tailwind CSS"],
        salary: "$80k - $120k",
        match_score: 92,
        posted: "2 days ago",
    },
    Job {
        title: "Data Analyst",
        company: "Analytics Pro",
        location: "Remote",
        skills: ["Python", "SQL", "Tableau"],
        salary: "$70k - $95k",
        match_score: 87,
        posted: "1 day ago",
    },
    Job {
        title: "UX Designer",
        company: "Design Studio",
        location: "New York, NY",
        skills: ["Figma", "User Research", "Prototyping"],
        salary: "$75k - $110k",
        match_score: 78,
        posted: "3 days ago",
    },
];

const JOB_BUTTONS: [&str; 3] = ["job-0", "job-1", "job-2"];

const STATS: [(&str, &str); 4] = [
    ("24", "Jobs Applied"),
    ("8", "Interviews"),
    ("3", "Offers"),
    ("89%", "Match Score"),
];

#[derive(Debug, Clone, Default)]
pub struct DashboardParams {
    /// Full name from the session, if anyone logged in
    pub user_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    SearchChanged(KeyCode),
    ViewRole(usize),
}

pub struct State {
    user_name: Option<String>,
    pub query: String,
    query_input: TextInputState,
}

impl State {
    pub fn greeting(&self) -> String {
        format!(
            "Welcome back, {}! 👋",
            self.user_name.as_deref().unwrap_or("Alex")
        )
    }

    /// Indices into [`JOBS`] matching the query, best match first
    pub fn visible_jobs(&self) -> Vec<usize> {
        let query = self.query.trim();
        if query.is_empty() {
            return (0..JOBS.len()).collect();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let mut scored: Vec<(i64, usize)> = JOBS
            .iter()
            .enumerate()
            .filter_map(|(i, job)| matcher.fuzzy_match(&job.haystack(), query).map(|score| (score, i)))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, i)| i).collect()
    }
}

fn job_card(index: usize, job: &Job, theme: &Theme) -> Element<Msg> {
    let title = Line::from(vec![
        Span::styled(
            job.title,
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("{}% match", job.match_score), theme.score_style(job.match_score)),
    ]);

    let body = ColumnBuilder::new()
        .add(Element::styled_text(title).build(), LayoutConstraint::Length(1))
        .add(field("🏢", job.company, theme), LayoutConstraint::Length(1))
        .add(field("📍", job.location, theme), LayoutConstraint::Length(1))
        .add(
            tags(&job.skills, Style::default().fg(theme.accent_secondary)),
            LayoutConstraint::Length(1),
        )
        .add(
            Element::styled(job.salary, Style::default().fg(theme.accent_primary)),
            LayoutConstraint::Length(1),
        )
        .add(
            Element::styled(format!("Posted {}", job.posted), theme.muted_style()),
            LayoutConstraint::Length(1),
        )
        .add(
            Element::button(JOB_BUTTONS[index], "More About This Role")
                .on_press(Msg::ViewRole(index))
                .build(),
            LayoutConstraint::Length(3),
        )
        .build();

    Element::panel(body).height(11).build()
}

impl App for DashboardApp {
    const ID: ScreenId = ScreenId::Dashboard;
    type State = State;
    type Msg = Msg;
    type InitParams = DashboardParams;

    fn init(params: DashboardParams) -> (State, Command<Msg>) {
        let state = State {
            user_name: params.user_name,
            query: String::new(),
            query_input: TextInputState::new(),
        };
        (state, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::SearchChanged(key) => {
                if let Some(value) = state.query_input.handle_key(key, &state.query, None) {
                    state.query = value;
                }
                Command::None
            }
            Msg::ViewRole(index) => {
                log::debug!("Opening role explainer for {}", JOBS[index % JOBS.len()].title);
                Command::navigate_to(ScreenId::RoleExplainer)
            }
        }
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let visible = state.visible_jobs();

        let search = card(
            "Search",
            vec![
                Element::text_input("search", &state.query, &state.query_input)
                    .placeholder("Search for jobs, companies, or skills...")
                    .on_change(Msg::SearchChanged)
                    .build(),
                Element::styled(
                    format!("{} of {} jobs", visible.len(), JOBS.len()),
                    theme.muted_style(),
                ),
            ],
        );

        let stats: Vec<Element<Msg>> = STATS
            .iter()
            .map(|(value, label)| {
                card(
                    *label,
                    vec![Element::styled(*value, theme.heading_style())],
                )
            })
            .collect();
        let stats_height = row_height(&stats);

        let jobs = if visible.is_empty() {
            Element::styled("No jobs match your search", theme.warning_style())
        } else {
            card_row(
                visible
                    .iter()
                    .map(|&i| job_card(i, &JOBS[i], theme))
                    .collect(),
            )
        };

        Element::container(stacked(vec![
            (
                2,
                header(state.greeting(), "Ready to find your next opportunity?", theme),
            ),
            (4, search),
            (stats_height, card_row(stats)),
            (11, jobs),
        ]))
        .build()
    }

    fn title() -> &'static str {
        "Dashboard"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        if state.query.is_empty() {
            return None;
        }
        Some(Line::from(Span::styled(
            format!("Filter: {}", state.query),
            theme.info_style(),
        )))
    }
}
