use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{card, card_row, cycle_button, field, header, row_height, stacked, tags};
use crate::nav::ScreenId;
use crate::tui::element::RowBuilder;
use crate::tui::{App, Command, Element, LayoutConstraint, Subscription, Theme};

pub struct CompareApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Growth {
    High,
    Medium,
}

impl Growth {
    fn label(self) -> &'static str {
        match self {
            Growth::High => "High",
            Growth::Medium => "Medium",
        }
    }

    fn style(self, theme: &Theme) -> Style {
        match self {
            Growth::High => theme.success_style(),
            Growth::Medium => theme.warning_style(),
        }
    }
}

/// A job offer available for side-by-side comparison
#[derive(Debug, Clone, Copy)]
pub struct Offer {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    skills: &'static [&'static str],
    benefits: &'static [&'static str],
    pub match_score: u8,
    work_life_balance: f32,
    company_rating: f32,
    growth: Growth,
}

impl Offer {
    fn label(&self) -> String {
        format!("{} at {}", self.title, self.company)
    }
}

pub const OFFERS: [Offer; 3] = [
    Offer {
        title: "Frontend Developer",
        company: "Tech Innovate Inc.",
        location: "San Francisco, CA",
        salary: "$95,000",
        skills: &["React", "TypeScript", "Tailwind CSS", "GraphQL"],
        benefits: &["Health Insurance", "Remote Work", "Stock Options", "401k"],
        match_score: 92,
        work_life_balance: 4.2,
        company_rating: 4.5,
        growth: Growth::High,
    },
    Offer {
        title: "Full Stack Developer",
        company: "MegaCorp",
        location: "New York, NY",
        salary: "$105,000",
        skills: &["React", "Node.js", "Python", "AWS", "MongoDB"],
        benefits: &["Health Insurance", "Dental", "Gym Membership", "Flexible Hours"],
        match_score: 87,
        work_life_balance: 3.8,
        company_rating: 4.1,
        growth: Growth::Medium,
    },
    Offer {
        title: "React Developer",
        company: "StartupXYZ",
        location: "Remote",
        salary: "$85,000",
        skills: &["React", "Next.js", "TypeScript", "Firebase"],
        benefits: &["Health Insurance", "Remote Work", "Learning Budget", "Flexible PTO"],
        match_score: 94,
        work_life_balance: 4.0,
        company_rating: 4.3,
        growth: Growth::High,
    },
];

/// Benefits listed before collapsing into "+N more"
const SHOWN_BENEFITS: usize = 3;

const CRITERIA_WIDTH: usize = 20;
const VALUE_WIDTH: usize = 24;

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    CycleFirst,
    CycleSecond,
    ExportPdf,
    ComparePeers,
}

pub struct State {
    pub first: usize,
    pub second: usize,
}

impl State {
    pub fn offers(&self) -> (&'static Offer, &'static Offer) {
        (&OFFERS[self.first % OFFERS.len()], &OFFERS[self.second % OFFERS.len()])
    }
}

fn offer_card(offer: &Offer, theme: &Theme) -> Element<Msg> {
    let mut lines = vec![
        Element::styled_text(Line::from(vec![
            Span::styled(
                format!("{} ", offer.title),
                Style::default()
                    .fg(theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{}% match", offer.match_score), theme.score_style(offer.match_score)),
        ]))
        .build(),
        field("🏢", offer.company, theme),
        field("📍", offer.location, theme),
        Element::styled(format!("$ {}", offer.salary.trim_start_matches('$')), Style::default().fg(theme.accent_primary)),
        Element::styled("Required Skills", theme.heading_style()),
        tags(offer.skills, Style::default().fg(theme.accent_secondary)),
        Element::styled("Benefits", theme.heading_style()),
    ];
    lines.extend(
        offer
            .benefits
            .iter()
            .take(SHOWN_BENEFITS)
            .map(|benefit| Element::styled(format!("✓ {}", benefit), theme.success_style())),
    );
    if offer.benefits.len() > SHOWN_BENEFITS {
        lines.push(Element::styled(
            format!("+{} more benefits", offer.benefits.len() - SHOWN_BENEFITS),
            theme.muted_style(),
        ));
    }
    lines.push(
        Element::styled_text(Line::from(vec![
            Span::styled("Work-Life ", theme.muted_style()),
            Span::styled(format!("★ {:.1}/5   ", offer.work_life_balance), theme.warning_style()),
            Span::styled("Rating ", theme.muted_style()),
            Span::styled(format!("★ {:.1}/5", offer.company_rating), theme.warning_style()),
        ]))
        .build(),
    );
    lines.push(
        Element::styled_text(Line::from(vec![
            Span::styled("Growth Potential ", theme.muted_style()),
            Span::styled(offer.growth.label(), offer.growth.style(theme)),
        ]))
        .build(),
    );
    card(offer.company, lines)
}

fn comparison_row(criteria: &str, left: Span<'static>, right: Span<'static>, theme: &Theme) -> Element<Msg> {
    let pad = |span: Span<'static>| {
        let content = format!("{:<width$}", span.content, width = VALUE_WIDTH);
        Span::styled(content, span.style)
    };
    Element::styled_text(Line::from(vec![
        Span::styled(format!("{:<width$}", criteria, width = CRITERIA_WIDTH), theme.muted_style()),
        pad(left),
        pad(right),
    ]))
    .build()
}

fn comparison_table(first: &Offer, second: &Offer, theme: &Theme) -> Element<Msg> {
    let plain = |s: String| Span::styled(s, Style::default().fg(theme.text_primary));
    let rows = vec![
        comparison_row(
            "Criteria",
            Span::styled(first.company, theme.heading_style()),
            Span::styled(second.company, theme.heading_style()),
            theme,
        ),
        comparison_row("Salary", plain(first.salary.into()), plain(second.salary.into()), theme),
        comparison_row(
            "Resume Match",
            Span::styled(format!("{}%", first.match_score), theme.score_style(first.match_score)),
            Span::styled(format!("{}%", second.match_score), theme.score_style(second.match_score)),
            theme,
        ),
        comparison_row("Location", plain(first.location.into()), plain(second.location.into()), theme),
        comparison_row(
            "Work-Life Balance",
            plain(format!("{:.1}/5", first.work_life_balance)),
            plain(format!("{:.1}/5", second.work_life_balance)),
            theme,
        ),
        comparison_row(
            "Company Rating",
            plain(format!("{:.1}/5", first.company_rating)),
            plain(format!("{:.1}/5", second.company_rating)),
            theme,
        ),
        comparison_row(
            "Growth Potential",
            Span::styled(first.growth.label(), first.growth.style(theme)),
            Span::styled(second.growth.label(), second.growth.style(theme)),
            theme,
        ),
    ];
    card("Detailed Comparison", rows)
}

impl App for CompareApp {
    const ID: ScreenId = ScreenId::Compare;
    type State = State;
    type Msg = Msg;
    type InitParams = ();

    fn init(_params: ()) -> (State, Command<Msg>) {
        (State { first: 0, second: 1 }, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::CycleFirst => state.first = (state.first + 1) % OFFERS.len(),
            Msg::CycleSecond => state.second = (state.second + 1) % OFFERS.len(),
            Msg::ExportPdf => {
                let (first, second) = state.offers();
                log::info!("PDF export of {} vs {} is not available in the demo", first.company, second.company);
            }
            Msg::ComparePeers => return Command::navigate_to(ScreenId::PeerResume),
        }
        Command::None
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let (first, second) = state.offers();

        let selectors = RowBuilder::new()
            .add(
                cycle_button("first-job", "First Job", &first.label(), Msg::CycleFirst),
                LayoutConstraint::Fill(1),
            )
            .add(
                cycle_button("second-job", "Second Job", &second.label(), Msg::CycleSecond),
                LayoutConstraint::Fill(1),
            )
            .spacing(2)
            .build();

        let cards = vec![offer_card(first, theme), offer_card(second, theme)];
        let cards_height = row_height(&cards);

        let actions = RowBuilder::new()
            .add(
                Element::button("export", "⤓ Export as PDF")
                    .on_press(Msg::ExportPdf)
                    .build(),
                LayoutConstraint::Fill(1),
            )
            .add(
                Element::button("peers", "Compare with Peer Resumes →")
                    .on_press(Msg::ComparePeers)
                    .build(),
                LayoutConstraint::Fill(1),
            )
            .spacing(2)
            .build();

        Element::container(stacked(vec![
            (
                2,
                header(
                    "Job Comparison Tool",
                    "Compare job offers side-by-side to make informed decisions",
                    theme,
                ),
            ),
            (3, selectors),
            (cards_height, card_row(cards)),
            (9, comparison_table(first, second, theme)),
            (3, actions),
        ]))
        .build()
    }

    fn subscriptions(_state: &State) -> Vec<Subscription<Msg>> {
        vec![
            Subscription::keyboard(KeyCode::Char('1'), "Next first job", Msg::CycleFirst),
            Subscription::keyboard(KeyCode::Char('2'), "Next second job", Msg::CycleSecond),
        ]
    }

    fn title() -> &'static str {
        "Job Compare"
    }
}
