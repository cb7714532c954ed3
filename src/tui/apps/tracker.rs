use std::fmt;

use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{card, card_row, display_date, field, header, row_height, stacked};
use crate::nav::ScreenId;
use crate::tui::element::{ColumnBuilder, RowBuilder};
use crate::tui::{App, Command, Element, LayoutConstraint, Subscription, Theme};

pub struct TrackerApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Applied, Status::Interview, Status::Offer, Status::Rejected];

    fn title(self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interview => "Interview",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
        }
    }

    fn style(self, theme: &Theme) -> Style {
        match self {
            Status::Applied => theme.info_style(),
            Status::Interview => theme.warning_style(),
            Status::Offer => theme.success_style(),
            Status::Rejected => theme.error_style(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_ascii_lowercase())
    }
}

/// A tracked application card on the board
#[derive(Debug, Clone, Copy)]
pub struct Application {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub applied: &'static str,
    pub salary: Option<&'static str>,
    pub status: Status,
    /// Buttons offered on the card: (button id, target status)
    actions: &'static [(&'static str, Status)],
}

pub const APPLICATIONS: [Application; 5] = [
    Application {
        id: 1,
        title: "Frontend Developer",
        company: "Tech Innovate Inc.",
        location: "San Francisco, CA",
        applied: "2024-01-15",
        salary: None,
        status: Status::Applied,
        actions: &[("app-1-interview", Status::Interview)],
    },
    Application {
        id: 2,
        title: "React Developer",
        company: "StartupXYZ",
        location: "Remote",
        applied: "2024-01-18",
        salary: None,
        status: Status::Applied,
        actions: &[("app-2-interview", Status::Interview)],
    },
    Application {
        id: 3,
        title: "Full Stack Developer",
        company: "MegaCorp",
        location: "New York, NY",
        applied: "2024-01-10",
        salary: None,
        status: Status::Interview,
        actions: &[("app-3-offer", Status::Offer), ("app-3-rejected", Status::Rejected)],
    },
    Application {
        id: 4,
        title: "Junior Developer",
        company: "GrowthCo",
        location: "Austin, TX",
        applied: "2024-01-08",
        salary: Some("$85,000"),
        status: Status::Offer,
        actions: &[],
    },
    Application {
        id: 5,
        title: "Software Engineer",
        company: "BigTech",
        location: "Seattle, WA",
        applied: "2024-01-05",
        salary: None,
        status: Status::Rejected,
        actions: &[],
    },
];

const STATS: [(&str, &str); 4] = [
    ("24", "Total Applications"),
    ("8", "In Progress"),
    ("3", "Offers Received"),
    ("12.5%", "Success Rate"),
];

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    DismissReminder,
    SendFollowUp,
    UpdateStatus { id: u32, status: Status },
    AddApplication,
    CompareOffers,
}

pub struct State {
    pub show_reminder: bool,
}

pub fn in_column(status: Status) -> impl Iterator<Item = &'static Application> {
    APPLICATIONS.iter().filter(move |app| app.status == status)
}

fn application_card(app: &Application, theme: &Theme) -> (u16, Element<Msg>) {
    let mut body = ColumnBuilder::new()
        .add(
            Element::styled_text(Line::from(vec![
                Span::styled(
                    format!("{} ", app.title),
                    Style::default()
                        .fg(theme.text_primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("[{}]", app.status), app.status.style(theme)),
            ]))
            .build(),
            LayoutConstraint::Length(1),
        )
        .add(field("🏢", app.company, theme), LayoutConstraint::Length(1))
        .add(field("📍", app.location, theme), LayoutConstraint::Length(1))
        .add(
            field("📅", format!("Applied: {}", display_date(app.applied)), theme),
            LayoutConstraint::Length(1),
        );
    let mut height = 4;

    if let Some(salary) = app.salary {
        body = body.add(
            Element::styled(salary, Style::default().fg(theme.accent_primary)),
            LayoutConstraint::Length(1),
        );
        height += 1;
    }

    if !app.actions.is_empty() {
        let mut buttons = RowBuilder::new();
        for &(id, status) in app.actions {
            buttons = buttons.add(
                Element::button(id, format!("→ {}", status.title()))
                    .on_press(Msg::UpdateStatus { id: app.id, status })
                    .build(),
                LayoutConstraint::Fill(1),
            );
        }
        body = body.add(buttons.build(), LayoutConstraint::Length(3));
        height += 3;
    }

    let height = height + 2;
    (height, Element::panel(body.build()).height(height).build())
}

fn kanban_column(status: Status, theme: &Theme) -> Element<Msg> {
    let cards: Vec<(u16, Element<Msg>)> = in_column(status).map(|app| application_card(app, theme)).collect();
    let height: u16 = cards.iter().map(|(h, _)| *h).sum::<u16>() + 2;

    let mut body = ColumnBuilder::new();
    for (h, card) in cards {
        body = body.add(card, LayoutConstraint::Length(h));
    }

    Element::panel(body.build())
        .title(format!("{} ({})", status.title(), in_column(status).count()))
        .height(height)
        .border_style(status.style(theme))
        .build()
}

impl App for TrackerApp {
    const ID: ScreenId = ScreenId::Tracker;
    type State = State;
    type Msg = Msg;
    type InitParams = ();

    fn init(_params: ()) -> (State, Command<Msg>) {
        (State { show_reminder: true }, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::DismissReminder => {
                state.show_reminder = false;
            }
            Msg::SendFollowUp => log::info!("Follow-up email to Tech Innovate Inc. queued (demo only)"),
            Msg::UpdateStatus { id, status } => {
                log::info!("Updated application {} to status: {}", id, status);
            }
            Msg::AddApplication => log::info!("Adding applications is not available in the demo"),
            Msg::CompareOffers => return Command::navigate_to(ScreenId::Compare),
        }
        Command::None
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let mut sections = vec![(
            2,
            header(
                "Application Tracker",
                "Track your job applications and follow up at the right time",
                theme,
            ),
        )];

        if state.show_reminder {
            let reminder = RowBuilder::new()
                .add(
                    Element::column(vec![
                        Element::styled("🔔 Follow-up Reminder", theme.warning_style()),
                        Element::text("It's been 5 days since you applied to Tech Innovate Inc."),
                        Element::styled("Consider sending a follow-up email.", theme.muted_style()),
                    ])
                    .build(),
                    LayoutConstraint::Fill(1),
                )
                .add(
                    Element::button("follow-up", "Send Follow-up")
                        .on_press(Msg::SendFollowUp)
                        .build(),
                    LayoutConstraint::Length(18),
                )
                .add(
                    Element::button("dismiss", "✕")
                        .on_press(Msg::DismissReminder)
                        .build(),
                    LayoutConstraint::Length(5),
                )
                .build();
            sections.push((
                5,
                Element::panel(reminder)
                    .height(5)
                    .border_style(theme.warning_style())
                    .build(),
            ));
        }

        let columns: Vec<Element<Msg>> = Status::ALL.iter().map(|&s| kanban_column(s, theme)).collect();
        sections.push((row_height(&columns), card_row(columns)));

        let stats: Vec<Element<Msg>> = STATS
            .iter()
            .map(|(value, label)| card(*label, vec![Element::styled(*value, theme.heading_style())]))
            .collect();
        sections.push((row_height(&stats), card_row(stats)));

        sections.push((
            3,
            RowBuilder::new()
                .add(
                    Element::button("add", "Add New Application")
                        .on_press(Msg::AddApplication)
                        .build(),
                    LayoutConstraint::Fill(1),
                )
                .add(
                    Element::button("compare", "Compare Job Offers")
                        .on_press(Msg::CompareOffers)
                        .build(),
                    LayoutConstraint::Fill(1),
                )
                .spacing(2)
                .build(),
        ));

        Element::container(stacked(sections)).build()
    }

    fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
        let mut subs = vec![Subscription::keyboard(
            KeyCode::Char('c'),
            "Compare job offers",
            Msg::CompareOffers,
        )];
        if state.show_reminder {
            subs.push(Subscription::keyboard(KeyCode::Char('d'), "Dismiss reminder", Msg::DismissReminder));
        }
        subs
    }

    fn title() -> &'static str {
        "Application Tracker"
    }
}
