use crossterm::event::KeyCode;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::{card, card_row, cycle_button, header, row_height, stacked, with_thousands};
use crate::nav::ScreenId;
use crate::tui::element::RowBuilder;
use crate::tui::{App, Command, Element, LayoutConstraint, Subscription, Theme};

pub struct PeerResumeApp;

pub const FILTERS: [&str; 3] = ["Same College", "Same Region", "All Peers"];
pub const DOMAINS: [&str; 4] = ["Computer Science", "Engineering", "Business", "Design"];

const OVERALL_RANK: u8 = 73;
const TOTAL_PEERS: u32 = 2847;

/// (category, score out of 100, percentile)
const STRENGTHS: [(&str, u8, u8); 5] = [
    ("Technical Skills", 89, 85),
    ("Project Experience", 82, 78),
    ("Education", 91, 92),
    ("Work Experience", 65, 55),
    ("Certifications", 78, 70),
];

/// (keyword, % of peers using it, high importance)
const MISSING_KEYWORDS: [(&str, u8, bool); 4] = [
    ("Machine Learning", 67, true),
    ("Docker", 45, false),
    ("Agile/Scrum", 78, true),
    ("Cloud Computing", 56, false),
];

const SUGGESTED_TITLES: [(&str, u8); 4] = [
    ("Full Stack Developer", 89),
    ("Software Engineer", 87),
    ("Frontend Developer", 92),
    ("React Developer", 85),
];

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    CycleFilter,
    CycleDomain,
    ChooseFile,
    Compare,
    DownloadReport,
    Reset,
    ViewGrowth,
}

pub struct State {
    pub filter: usize,
    pub domain: usize,
    pub show_results: bool,
}

/// English ordinal suffix for a percentile
fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn upload_view(state: &State, theme: &Theme) -> Element<Msg> {
    let selectors = RowBuilder::new()
        .add(
            cycle_button("filter", "Filter by", FILTERS[state.filter], Msg::CycleFilter),
            LayoutConstraint::Fill(1),
        )
        .add(
            cycle_button("domain", "Domain", DOMAINS[state.domain], Msg::CycleDomain),
            LayoutConstraint::Fill(1),
        )
        .spacing(2)
        .build();

    stacked(vec![
        (
            4,
            card(
                "Peer Resume Comparison",
                vec![
                    Element::text("Compare your resume with peers from your college and domain"),
                    Element::styled(
                        "Upload your resume to compare with anonymized peer data",
                        theme.muted_style(),
                    ),
                ],
            ),
        ),
        (
            3,
            Element::button("choose-file", "Choose Resume File")
                .on_press(Msg::ChooseFile)
                .build(),
        ),
        (3, selectors),
        (
            3,
            Element::button("compare", "Compare with Peers")
                .on_press(Msg::Compare)
                .build(),
        ),
    ])
}

fn results_view(state: &State, theme: &Theme) -> Element<Msg> {
    let ranking = card(
        &format!("{} · {}", FILTERS[state.filter], DOMAINS[state.domain]),
        vec![
            Element::styled_text(Line::from(vec![
                Span::styled(ordinal(OVERALL_RANK), theme.heading_style()),
                Span::styled(" Percentile Rank   ", theme.muted_style()),
                Span::styled(with_thousands(TOTAL_PEERS), theme.heading_style()),
                Span::styled(" Total Peers", theme.muted_style()),
            ]))
            .build(),
            Element::styled(
                format!("Better than {}% of peers", 100 - OVERALL_RANK),
                theme.success_style(),
            ),
        ],
    );

    let breakdown = STRENGTHS
        .iter()
        .flat_map(|&(category, score, percentile)| {
            [
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{:<20}", category), Style::default().fg(theme.text_primary)),
                    Span::styled(format!("{}/100  ", score), theme.heading_style()),
                    Span::styled(format!("{} percentile", ordinal(percentile)), theme.muted_style()),
                ]))
                .build(),
                Element::progress_bar(score as usize, 100)
                    .show_percentage(false)
                    .style(theme.score_style(score))
                    .build(),
            ]
        })
        .collect();

    let keywords = MISSING_KEYWORDS
        .iter()
        .flat_map(|&(keyword, frequency, high)| {
            let (label, style) = if high {
                ("High", theme.error_style())
            } else {
                ("Medium", theme.warning_style())
            };
            [
                Element::styled_text(Line::from(vec![
                    Span::styled(format!("{} ", keyword), Style::default().fg(theme.text_primary)),
                    Span::styled(format!("[{}]", label), style),
                ]))
                .build(),
                Element::styled(format!("👥 Used by {}% of peers", frequency), theme.muted_style()),
            ]
        })
        .collect();

    let details = vec![card("🏆 Skills Breakdown", breakdown), card("◎ Missing Keywords", keywords)];
    let details_height = row_height(&details);

    let titles: Vec<Element<Msg>> = SUGGESTED_TITLES
        .iter()
        .map(|&(title, confidence)| {
            card(
                title,
                vec![Element::styled_text(Line::from(vec![
                    Span::styled(format!("{}% ", confidence), theme.score_style(confidence)),
                    Span::styled("Match confidence", theme.muted_style()),
                ]))
                .build()],
            )
        })
        .collect();
    let titles_height = row_height(&titles);

    let actions = RowBuilder::new()
        .add(
            Element::button("download", "⤓ Download Report")
                .on_press(Msg::DownloadReport)
                .build(),
            LayoutConstraint::Fill(1),
        )
        .add(
            Element::button("reset", "Compare Another Resume")
                .on_press(Msg::Reset)
                .build(),
            LayoutConstraint::Fill(1),
        )
        .add(
            Element::button("growth", "View Growth Tracker")
                .on_press(Msg::ViewGrowth)
                .build(),
            LayoutConstraint::Fill(1),
        )
        .spacing(2)
        .build();

    stacked(vec![
        (4, ranking),
        (details_height, card_row(details)),
        (1, Element::styled("↗ Suggested Job Titles", theme.heading_style())),
        (titles_height, card_row(titles)),
        (3, actions),
    ])
}

impl App for PeerResumeApp {
    const ID: ScreenId = ScreenId::PeerResume;
    type State = State;
    type Msg = Msg;
    type InitParams = ();

    fn init(_params: ()) -> (State, Command<Msg>) {
        let state = State {
            filter: 0,
            domain: 0,
            show_results: false,
        };
        (state, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::CycleFilter => state.filter = (state.filter + 1) % FILTERS.len(),
            Msg::CycleDomain => state.domain = (state.domain + 1) % DOMAINS.len(),
            Msg::ChooseFile => log::info!("Resume upload is not available in the demo; using sample resume"),
            Msg::Compare => {
                log::debug!(
                    "Comparing against peers: filter={}, domain={}",
                    FILTERS[state.filter],
                    DOMAINS[state.domain]
                );
                state.show_results = true;
            }
            Msg::DownloadReport => log::info!("Report download is not available in the demo"),
            Msg::Reset => {
                state.show_results = false;
            }
            Msg::ViewGrowth => return Command::navigate_to(ScreenId::Growth),
        }
        Command::None
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let (height, body) = if state.show_results {
            (30, results_view(state, theme))
        } else {
            (16, upload_view(state, theme))
        };

        Element::container(stacked(vec![
            (
                2,
                header(
                    "Peer Resume Comparison",
                    "See how your resume stacks up against peers in your field",
                    theme,
                ),
            ),
            (height, body),
        ]))
        .build()
    }

    fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
        if state.show_results {
            vec![Subscription::keyboard(KeyCode::Char('r'), "Compare another resume", Msg::Reset)]
        } else {
            vec![
                Subscription::keyboard(KeyCode::Char('f'), "Cycle filter", Msg::CycleFilter),
                Subscription::keyboard(KeyCode::Char('d'), "Cycle domain", Msg::CycleDomain),
            ]
        }
    }

    fn title() -> &'static str {
        "Peer Resume Comparison"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(73), "73rd");
        assert_eq!(ordinal(92), "92nd");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(85), "85th");
    }

    #[test]
    fn test_selectors_cycle() {
        let (mut state, _) = PeerResumeApp::init(());
        PeerResumeApp::update(&mut state, Msg::CycleDomain);
        PeerResumeApp::update(&mut state, Msg::CycleFilter);
        PeerResumeApp::update(&mut state, Msg::CycleFilter);
        PeerResumeApp::update(&mut state, Msg::CycleFilter);
        assert_eq!(FILTERS[state.filter], "Same College");
        assert_eq!(DOMAINS[state.domain], "Engineering");
    }

    #[test]
    fn test_compare_shows_results_then_resets() {
        let (mut state, _) = PeerResumeApp::init(());
        PeerResumeApp::update(&mut state, Msg::Compare);
        let view = PeerResumeApp::view(&state, &Theme::default());
        assert!(view.contains_text("Better than 27% of peers"));
        assert!(view.contains_text("Agile/Scrum"));
        assert!(view.contains_text("Same College · Computer Science"));

        PeerResumeApp::update(&mut state, Msg::Reset);
        let view = PeerResumeApp::view(&state, &Theme::default());
        assert!(view.find("compare").is_some());
        assert!(!view.contains_text("Missing Keywords"));
    }

    #[test]
    fn test_view_growth() {
        let (mut state, _) = PeerResumeApp::init(());
        PeerResumeApp::update(&mut state, Msg::Compare);
        let view = PeerResumeApp::view(&state, &Theme::default());
        let msg = view.press_msg("growth").cloned().unwrap();
        assert!(matches!(
            PeerResumeApp::update(&mut state, msg),
            Command::NavigateTo(ScreenId::Growth)
        ));
    }
}
