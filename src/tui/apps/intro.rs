use crossterm::event::KeyCode;
use ratatui::style::Style;

use super::{card, card_row, row_height, stacked};
use crate::nav::ScreenId;
use crate::tui::{App, Command, Element, Subscription, Theme};

pub struct IntroApp;

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    Start,
    Quit,
}

const FEATURES: [(&str, &str); 3] = [
    ("🎯 Smart Job Discovery", "AI-powered job matching with skill analysis"),
    ("📊 Resume Analytics", "Deep insights and peer comparisons"),
    ("🚀 Career Tracking", "Complete application and growth management"),
];

impl App for IntroApp {
    const ID: ScreenId = ScreenId::Intro;
    type State = ();
    type Msg = Msg;
    type InitParams = ();

    fn init(_params: ()) -> ((), Command<Msg>) {
        ((), Command::None)
    }

    fn update(_state: &mut (), msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Start => Command::navigate_to(ScreenId::Login),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(_state: &(), theme: &Theme) -> Element<Msg> {
        let cards: Vec<Element<Msg>> = FEATURES
            .iter()
            .map(|(title, blurb)| {
                card(
                    *title,
                    vec![Element::styled(*blurb, Style::default().fg(theme.text_secondary))],
                )
            })
            .collect();
        let cards_height = row_height(&cards);

        let body = stacked(vec![
            (1, Element::styled("Smart Job Aggregator", theme.heading_style())),
            (
                2,
                Element::column(vec![
                    Element::text("The ultimate platform for students to discover jobs, analyze resumes,"),
                    Element::text("compare offers, track applications, and manage their career journey."),
                ])
                .build(),
            ),
            (cards_height, card_row(cards)),
            (
                3,
                Element::button("start", "Start Demo Experience")
                    .on_press(Msg::Start)
                    .build(),
            ),
        ]);

        Element::container(body).build()
    }

    fn subscriptions(_state: &()) -> Vec<Subscription<Msg>> {
        vec![
            Subscription::keyboard(KeyCode::Enter, "Start demo", Msg::Start),
            Subscription::keyboard(KeyCode::Char('q'), "Quit", Msg::Quit),
        ]
    }

    fn title() -> &'static str {
        "Introduction"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_goes_to_login() {
        let view = IntroApp::view(&(), &Theme::default());
        assert!(view.contains_text("Smart Job Aggregator"));
        assert!(view.contains_text("Resume Analytics"));

        let msg = view.press_msg("start").cloned().unwrap();
        assert!(matches!(
            IntroApp::update(&mut (), msg),
            Command::NavigateTo(ScreenId::Login)
        ));
    }

    #[test]
    fn test_q_quits() {
        assert!(matches!(IntroApp::update(&mut (), Msg::Quit), Command::Quit));
    }
}
