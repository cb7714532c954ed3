use crossterm::event::KeyCode;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::{card, card_row, row_height, stacked, tags};
use crate::nav::ScreenId;
use crate::tui::element::RowBuilder;
use crate::tui::{App, Command, Element, Layer, LayoutConstraint, ModalState, Subscription, Theme};

pub struct RoleExplainerApp;

const ROLE: &str = "Frontend Developer";
const COMPANY: &str = "Tech Innovate Inc.";

const SUMMARY: [&str; 2] = [
    "Frontend Developers create user-facing web applications using modern JavaScript frameworks.",
    "They bridge the gap between design and technology, ensuring excellent user experiences.",
];

const KEY_SKILLS: [&str; 6] = [
    "JavaScript/TypeScript",
    "React/Vue/Angular",
    "CSS/Tailwind",
    "Version Control (Git)",
    "Responsive Design",
    "API Integration",
];

const WHO_IT_SUITS: [&str; 5] = [
    "Creative problem solvers",
    "Detail-oriented individuals",
    "Tech enthusiasts",
    "Visual learners",
    "Collaborative team players",
];

/// (role, level, salary)
const CAREER_PATH: [(&str, &str, &str); 4] = [
    ("Junior Frontend Developer", "Entry", "$60k-80k"),
    ("Frontend Developer", "Mid", "$80k-120k"),
    ("Senior Frontend Developer", "Senior", "$120k-160k"),
    ("Frontend Tech Lead", "Lead", "$150k-200k"),
];

const SIMILAR_ROLES: [(&str, u8); 4] = [
    ("Full Stack Developer", 85),
    ("React Developer", 92),
    ("UI/UX Developer", 78),
    ("JavaScript Developer", 88),
];

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    CloseDetails,
    OpenDetails,
    PlayVideo,
    AnalyzeSkills,
}

pub struct State {
    pub details: ModalState<()>,
    pub video_playing: bool,
}

fn details_view(state: &State, theme: &Theme) -> Element<Msg> {
    let video = if state.video_playing {
        Element::styled(
            "▶ Playing: \"A Day in the Life of a Frontend Developer\"",
            theme.info_style(),
        )
    } else {
        Element::button("video", "▶ Watch 1-min Explainer Video")
            .on_press(Msg::PlayVideo)
            .build()
    };

    let skills_and_fit = vec![
        card(
            "Key Skills Required",
            KEY_SKILLS
                .chunks(2)
                .map(|pair| tags(pair, Style::default().fg(theme.accent_secondary)))
                .collect(),
        ),
        card(
            "Who This Role Suits",
            WHO_IT_SUITS
                .iter()
                .map(|trait_| Element::styled(format!("✓ {}", trait_), theme.success_style()))
                .collect(),
        ),
    ];
    let fit_height = row_height(&skills_and_fit);

    let career = card(
        "Career Progression Path",
        CAREER_PATH
            .iter()
            .enumerate()
            .map(|(i, (role, level, salary))| {
                let marker_style = if i == 0 { theme.heading_style() } else { theme.muted_style() };
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{} ", i + 1), marker_style),
                    Span::styled(format!("{:<28}", role), Style::default().fg(theme.text_primary)),
                    Span::styled(format!("{:<8}", level), theme.muted_style()),
                    Span::styled(*salary, Style::default().fg(theme.accent_primary)),
                ]))
                .build()
            })
            .collect(),
    );

    let similar_spans: Vec<Span<'static>> = SIMILAR_ROLES
        .iter()
        .flat_map(|(title, score)| {
            [
                Span::styled(format!("{} ", title), Style::default().fg(theme.text_primary)),
                Span::styled(format!("{}% match   ", score), theme.score_style(*score)),
            ]
        })
        .collect();
    let similar = card(
        "Similar Roles You Might Like",
        vec![Element::styled_text(Line::from(similar_spans)).build()],
    );

    let actions = RowBuilder::new()
        .add(
            Element::button("explore", "Explore Similar Roles")
                .on_press(Msg::CloseDetails)
                .build(),
            LayoutConstraint::Fill(1),
        )
        .add(
            Element::button("analyze", "Analyze My Skills for This Role")
                .on_press(Msg::AnalyzeSkills)
                .build(),
            LayoutConstraint::Fill(1),
        )
        .spacing(2)
        .build();

    let body = stacked(vec![
        (
            4,
            card(
                "Role Overview",
                SUMMARY.iter().map(|line| Element::text(*line)).collect(),
            ),
        ),
        (3, video),
        (fit_height, card_row(skills_and_fit)),
        (6, career),
        (3, similar),
        (3, actions),
    ]);

    Element::panel(body)
        .title(format!("{} at {}", ROLE, COMPANY))
        .width(100)
        .height(36)
        .border_style(Style::default().fg(theme.accent_tertiary))
        .build()
}

impl App for RoleExplainerApp {
    const ID: ScreenId = ScreenId::RoleExplainer;
    type State = State;
    type Msg = Msg;
    type InitParams = ();

    fn init(_params: ()) -> (State, Command<Msg>) {
        let state = State {
            details: ModalState::Open(()),
            video_playing: false,
        };
        (state, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::CloseDetails => state.details.close(),
            Msg::OpenDetails => state.details.open_empty(),
            Msg::PlayVideo => state.video_playing = true,
            Msg::AnalyzeSkills => return Command::navigate_to(ScreenId::SkillGap),
        }
        Command::None
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let background = Element::container(stacked(vec![
            (1, Element::styled("Role Explorer", theme.heading_style())),
            (
                1,
                Element::styled(
                    "Explore detailed information about different career paths",
                    theme.muted_style(),
                ),
            ),
            (
                3,
                Element::button("reopen", "Reopen Role Details")
                    .on_press(Msg::OpenDetails)
                    .build(),
            ),
        ]))
        .build();

        if state.details.is_open() {
            Element::stack(vec![
                Layer::new(background),
                Layer::new(details_view(state, theme)).center().dim(true),
            ])
        } else {
            background
        }
    }

    fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
        if state.details.is_open() {
            vec![Subscription::keyboard(KeyCode::Esc, "Close role details", Msg::CloseDetails)]
        } else {
            vec![Subscription::keyboard(KeyCode::Char('o'), "Open role details", Msg::OpenDetails)]
        }
    }

    fn title() -> &'static str {
        "Role Explainer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_open_by_default() {
        let (state, _) = RoleExplainerApp::init(());
        let view = RoleExplainerApp::view(&state, &Theme::default());
        assert!(view.contains_text("Frontend Developer at Tech Innovate Inc."));
        assert!(view.contains_text("React Developer "));
    }

    #[test]
    fn test_close_and_reopen() {
        let (mut state, _) = RoleExplainerApp::init(());
        RoleExplainerApp::update(&mut state, Msg::CloseDetails);
        let view = RoleExplainerApp::view(&state, &Theme::default());
        assert!(!view.contains_text("Career Progression Path"));
        assert_eq!(view.press_msg("reopen"), Some(&Msg::OpenDetails));

        RoleExplainerApp::update(&mut state, Msg::OpenDetails);
        assert!(state.details.is_open());
    }

    #[test]
    fn test_video_toggle() {
        let (mut state, _) = RoleExplainerApp::init(());
        RoleExplainerApp::update(&mut state, Msg::PlayVideo);
        let view = RoleExplainerApp::view(&state, &Theme::default());
        assert!(view.find("video").is_none());
        assert!(view.contains_text("A Day in the Life"));
    }

    #[test]
    fn test_analyze_goes_to_skill_gap() {
        let (mut state, _) = RoleExplainerApp::init(());
        assert!(matches!(
            RoleExplainerApp::update(&mut state, Msg::AnalyzeSkills),
            Command::NavigateTo(ScreenId::SkillGap)
        ));
    }
}
