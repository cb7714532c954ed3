use std::time::Duration;

use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{card, card_row, header, row_height, stacked};
use crate::nav::ScreenId;
use crate::tui::element::RowBuilder;
use crate::tui::{App, Command, Element, LayoutConstraint, Subscription, Theme};

pub struct SkillGapApp;

pub const JOB_OPTIONS: [&str; 4] = [
    "Frontend Developer",
    "Full Stack Developer",
    "React Developer",
    "UI/UX Developer",
];

const JOB_BUTTONS: [&str; 4] = ["target-0", "target-1", "target-2", "target-3"];

const OVERALL_MATCH: u8 = 87;

/// (skill, level, trending)
const SKILLS_YOU_HAVE: [(&str, u8, bool); 5] = [
    ("JavaScript", 90, true),
    ("React", 85, true),
    ("CSS", 80, false),
    ("HTML", 95, false),
    ("Git", 75, false),
];

/// (skill, importance, courses)
const MISSING_SKILLS: [(&str, Importance, u8); 4] = [
    ("TypeScript", Importance::High, 3),
    ("Testing (Jest)", Importance::Medium, 5),
    ("GraphQL", Importance::Medium, 4),
    ("Docker", Importance::Low, 7),
];

/// (skill, growth, courses)
const TRENDING_SKILLS: [(&str, &str, u8); 3] = [
    ("Next.js", "+45%", 8),
    ("Tailwind CSS", "+38%", 6),
    ("Vercel", "+52%", 4),
];

/// Progress added per analysis tick
const STEP_PERCENT: u8 = 5;
const TICK: Duration = Duration::from_millis(80);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    fn label(self) -> &'static str {
        match self {
            Importance::High => "High",
            Importance::Medium => "Medium",
            Importance::Low => "Low",
        }
    }

    fn style(self, theme: &Theme) -> Style {
        match self {
            Importance::High => theme.error_style(),
            Importance::Medium => theme.warning_style(),
            Importance::Low => theme.muted_style(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Choose,
    Analyzing { progress: u8 },
    Results,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    SelectJob(usize),
    ChooseFile,
    Analyze,
    Tick,
    Reset,
    TrackApplications,
}

pub struct State {
    pub phase: Phase,
    pub selected_job: usize,
}

impl State {
    pub fn target(&self) -> &'static str {
        JOB_OPTIONS[self.selected_job % JOB_OPTIONS.len()]
    }
}

fn choose_view(state: &State, theme: &Theme) -> Element<Msg> {
    let target_button = |i: usize| {
        let selected = i == state.selected_job;
        let label = if selected {
            format!("● {}", JOB_OPTIONS[i])
        } else {
            JOB_OPTIONS[i].to_string()
        };
        let mut button = Element::button(JOB_BUTTONS[i], label).on_press(Msg::SelectJob(i));
        if selected {
            button = button.style(theme.selection_style());
        }
        button.build()
    };
    let target_row = |a: usize, b: usize| {
        RowBuilder::new()
            .add(target_button(a), LayoutConstraint::Fill(1))
            .add(target_button(b), LayoutConstraint::Fill(1))
            .build()
    };

    let upload = card(
        "Resume",
        vec![
            Element::styled("Drop your resume here or click to upload", theme.muted_style()),
            Element::button("choose-file", "Choose File")
                .on_press(Msg::ChooseFile)
                .build(),
        ],
    );

    stacked(vec![
        (
            1,
            Element::styled(
                "Upload your resume to get personalized skill insights",
                theme.muted_style(),
            ),
        ),
        (5, upload),
        (1, Element::styled("Target Job Role", theme.heading_style())),
        (3, target_row(0, 1)),
        (3, target_row(2, 3)),
        (
            3,
            Element::button("analyze", "Analyze Skills")
                .on_press(Msg::Analyze)
                .build(),
        ),
    ])
}

fn analyzing_view(state: &State, progress: u8, theme: &Theme) -> Element<Msg> {
    card(
        "Analyzing",
        vec![
            Element::styled(
                format!("Matching your resume against {}...", state.target()),
                theme.info_style(),
            ),
            Element::progress_bar(progress as usize, 100)
                .style(Style::default().fg(theme.accent_primary))
                .build(),
        ],
    )
}

fn results_view(state: &State, theme: &Theme) -> Element<Msg> {
    let overall = card(
        "Overall Match Score",
        vec![
            Element::styled(format!("{}%", OVERALL_MATCH), theme.heading_style()),
            Element::progress_bar(OVERALL_MATCH as usize, 100)
                .show_percentage(false)
                .style(theme.score_style(OVERALL_MATCH))
                .build(),
            Element::styled(
                format!("You're a strong candidate for {}", state.target()),
                theme.muted_style(),
            ),
        ],
    );

    let have = SKILLS_YOU_HAVE
        .iter()
        .flat_map(|&(skill, level, trending)| {
            let mut spans = vec![Span::styled(
                format!("{:<12}", skill),
                Style::default()
                    .fg(theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            )];
            if trending {
                spans.push(Span::styled("↗ Trending ", Style::default().fg(theme.accent_primary)));
            }
            spans.push(Span::styled(format!("{}%", level), theme.muted_style()));
            [
                Element::styled_text(Line::from(spans)).build(),
                Element::progress_bar(level as usize, 100)
                    .show_percentage(false)
                    .style(theme.success_style())
                    .build(),
            ]
        })
        .collect();

    let missing = MISSING_SKILLS
        .iter()
        .flat_map(|&(skill, importance, courses)| {
            [
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{} ", skill), Style::default().fg(theme.text_primary)),
                    Span::styled(format!("[{}]", importance.label()), importance.style(theme)),
                ]))
                .build(),
                Element::styled(format!("📖 {} courses available", courses), theme.muted_style()),
            ]
        })
        .collect();

    let trending = TRENDING_SKILLS
        .iter()
        .flat_map(|&(skill, growth, courses)| {
            [
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{} ", skill), Style::default().fg(theme.text_primary)),
                    Span::styled(growth, Style::default().fg(theme.accent_primary)),
                ]))
                .build(),
                Element::styled(format!("📖 {} courses available", courses), theme.muted_style()),
            ]
        })
        .collect();

    let columns = vec![
        card("✓ Skills You Have", have),
        card("◎ Missing Skills", missing),
        card("↗ Trending Skills", trending),
    ];
    let columns_height = row_height(&columns);

    let actions = RowBuilder::new()
        .add(
            Element::button("reset", "Analyze Another Role")
                .on_press(Msg::Reset)
                .build(),
            LayoutConstraint::Fill(1),
        )
        .add(
            Element::button("track", "Track Applications")
                .on_press(Msg::TrackApplications)
                .build(),
            LayoutConstraint::Fill(1),
        )
        .spacing(2)
        .build();

    stacked(vec![
        (5, overall),
        (columns_height, card_row(columns)),
        (3, actions),
    ])
}

impl App for SkillGapApp {
    const ID: ScreenId = ScreenId::SkillGap;
    type State = State;
    type Msg = Msg;
    type InitParams = ();

    fn init(_params: ()) -> (State, Command<Msg>) {
        let state = State {
            phase: Phase::Choose,
            selected_job: 0,
        };
        (state, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::SelectJob(index) => {
                if index < JOB_OPTIONS.len() {
                    state.selected_job = index;
                }
            }
            Msg::ChooseFile => {
                log::info!("Resume upload is not available in the demo; using sample resume");
            }
            Msg::Analyze => {
                log::debug!("Analyzing skills for {}", state.target());
                state.phase = Phase::Analyzing { progress: 0 };
            }
            Msg::Tick => {
                if let Phase::Analyzing { progress } = state.phase {
                    let next = progress.saturating_add(STEP_PERCENT);
                    state.phase = if next >= 100 {
                        Phase::Results
                    } else {
                        Phase::Analyzing { progress: next }
                    };
                }
            }
            Msg::Reset => {
                state.phase = Phase::Choose;
            }
            Msg::TrackApplications => return Command::navigate_to(ScreenId::Tracker),
        }
        Command::None
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let body = match state.phase {
            Phase::Choose => choose_view(state, theme),
            Phase::Analyzing { progress } => analyzing_view(state, progress, theme),
            Phase::Results => results_view(state, theme),
        };
        let height = match state.phase {
            Phase::Choose => 21,
            Phase::Analyzing { .. } => 4,
            Phase::Results => 22,
        };

        Element::container(stacked(vec![
            (
                2,
                header(
                    "Skill Gap Analyzer",
                    "Discover what skills you need to land your dream job",
                    theme,
                ),
            ),
            (height, body),
        ]))
        .build()
    }

    fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
        match state.phase {
            Phase::Choose => vec![Subscription::keyboard(KeyCode::Char('a'), "Analyze skills", Msg::Analyze)],
            Phase::Analyzing { .. } => vec![Subscription::timer(TICK, Msg::Tick)],
            Phase::Results => vec![
                Subscription::keyboard(KeyCode::Char('r'), "Analyze another role", Msg::Reset),
                Subscription::keyboard(KeyCode::Char('t'), "Track applications", Msg::TrackApplications),
            ],
        }
    }

    fn title() -> &'static str {
        "Skill Gap Analyzer"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        Some(Line::from(vec![
            Span::styled("Target: ", theme.muted_style()),
            Span::styled(state.target(), theme.info_style()),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzing() -> State {
        let (mut state, _) = SkillGapApp::init(());
        SkillGapApp::update(&mut state, Msg::Analyze);
        state
    }

    #[test]
    fn test_select_target() {
        let (mut state, _) = SkillGapApp::init(());
        assert_eq!(state.target(), "Frontend Developer");
        SkillGapApp::update(&mut state, Msg::SelectJob(2));
        assert_eq!(state.target(), "React Developer");
        SkillGapApp::update(&mut state, Msg::SelectJob(99));
        assert_eq!(state.target(), "React Developer");
    }

    #[test]
    fn test_analysis_runs_on_timer() {
        let mut state = analyzing();
        assert_eq!(state.phase, Phase::Analyzing { progress: 0 });
        assert!(matches!(
            SkillGapApp::subscriptions(&state).as_slice(),
            [Subscription::Timer { .. }]
        ));

        for _ in 0..19 {
            SkillGapApp::update(&mut state, Msg::Tick);
        }
        assert_eq!(state.phase, Phase::Analyzing { progress: 95 });

        SkillGapApp::update(&mut state, Msg::Tick);
        assert_eq!(state.phase, Phase::Results);
        assert!(SkillGapApp::subscriptions(&state)
            .iter()
            .all(|sub| matches!(sub, Subscription::Keyboard { .. })));
    }

    #[test]
    fn test_tick_outside_analysis_is_ignored() {
        let (mut state, _) = SkillGapApp::init(());
        SkillGapApp::update(&mut state, Msg::Tick);
        assert_eq!(state.phase, Phase::Choose);
    }

    #[test]
    fn test_results_and_reset() {
        let mut state = analyzing();
        state.phase = Phase::Results;
        SkillGapApp::update(&mut state, Msg::SelectJob(1));

        let view = SkillGapApp::view(&state, &Theme::default());
        assert!(view.contains_text("You're a strong candidate for Full Stack Developer"));
        assert!(view.contains_text("Testing (Jest)"));
        assert!(view.contains_text("+52%"));

        SkillGapApp::update(&mut state, Msg::Reset);
        assert_eq!(state.phase, Phase::Choose);
        assert_eq!(state.target(), "Full Stack Developer");
    }

    #[test]
    fn test_track_applications() {
        let mut state = analyzing();
        state.phase = Phase::Results;
        let view = SkillGapApp::view(&state, &Theme::default());
        let msg = view.press_msg("track").cloned().unwrap();
        assert!(matches!(
            SkillGapApp::update(&mut state, msg),
            Command::NavigateTo(ScreenId::Tracker)
        ));
    }
}
