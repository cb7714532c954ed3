use crossterm::event::KeyCode;
use ratatui::style::Style;

use super::{header, stacked};
use crate::nav::{ScreenId, Session};
use crate::tui::element::FocusId;
use crate::tui::{App, Command, Element, TextInputState, Theme};

pub struct LoginApp;

const DEMO_NAME: &str = "Alex Johnson";
const DEMO_EMAIL: &str = "alex.johnson@university.edu";
const OTP_LEN: usize = 6;

/// Where the user is within the sign-in card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Choose,
    Otp,
    ResumeUpload,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    GoogleLogin,
    EmailChanged(KeyCode),
    SendOtp,
    OtpChanged(KeyCode),
    VerifyOtp,
    ChoosePdf,
    LinkedInChanged(KeyCode),
    ContinueToDashboard,
    AdminLogin,
}

#[derive(Default)]
pub struct State {
    pub step: Step,
    pub email: String,
    email_input: TextInputState,
    pub otp: String,
    otp_input: TextInputState,
    pub linkedin: String,
    linkedin_input: TextInputState,
    pub hint: Option<String>,
}

fn edit(input: &mut TextInputState, value: &mut String, key: KeyCode, max_length: Option<usize>) {
    if let Some(new_value) = input.handle_key(key, value, max_length) {
        *value = new_value;
    }
}

impl App for LoginApp {
    const ID: ScreenId = ScreenId::Login;
    type State = State;
    type Msg = Msg;
    type InitParams = ();

    fn init(_params: ()) -> (State, Command<Msg>) {
        (State::default(), Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::GoogleLogin => {
                state.step = Step::ResumeUpload;
                Command::login(Session::student(DEMO_NAME, DEMO_EMAIL))
            }
            Msg::EmailChanged(key) => {
                edit(&mut state.email_input, &mut state.email, key, None);
                state.hint = None;
                Command::None
            }
            Msg::SendOtp => {
                if state.email.trim().is_empty() {
                    state.hint = Some("Enter your email first".to_string());
                    return Command::None;
                }
                log::info!("Pretending to send an OTP to {}", state.email);
                state.step = Step::Otp;
                state.hint = None;
                Command::set_focus(FocusId("otp"))
            }
            Msg::OtpChanged(key) => {
                if matches!(key, KeyCode::Char(c) if !c.is_ascii_digit()) {
                    return Command::None;
                }
                edit(&mut state.otp_input, &mut state.otp, key, Some(OTP_LEN));
                Command::None
            }
            Msg::VerifyOtp => {
                state.step = Step::ResumeUpload;
                Command::login(Session::student(DEMO_NAME, state.email.trim()))
            }
            Msg::ChoosePdf => {
                log::info!("Resume upload requested; uploads are not handled in the demo");
                state.hint = Some("Resume upload is simulated in this demo".to_string());
                Command::None
            }
            Msg::LinkedInChanged(key) => {
                edit(&mut state.linkedin_input, &mut state.linkedin, key, None);
                Command::None
            }
            Msg::ContinueToDashboard => Command::navigate_to(ScreenId::Dashboard),
            Msg::AdminLogin => Command::batch(vec![
                Command::login(Session::admin("Admin User", "admin@smartjob.com")),
                Command::navigate_to(ScreenId::Admin),
            ]),
        }
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let step = match state.step {
            Step::Choose => stacked(vec![
                (
                    3,
                    Element::button("google", "🌐 Continue with Google")
                        .on_press(Msg::GoogleLogin)
                        .build(),
                ),
                (1, Element::styled("──────── OR ────────", theme.muted_style())),
                (1, Element::text("Email")),
                (
                    1,
                    Element::text_input("email", &state.email, &state.email_input)
                        .placeholder("Enter your email")
                        .on_change(Msg::EmailChanged)
                        .on_submit(Msg::SendOtp)
                        .build(),
                ),
                (
                    3,
                    Element::button("send-otp", "✉ Send OTP")
                        .on_press(Msg::SendOtp)
                        .build(),
                ),
                (
                    3,
                    Element::button("admin-login", "Admin demo login")
                        .on_press(Msg::AdminLogin)
                        .style(Style::default().fg(theme.accent_tertiary))
                        .build(),
                ),
            ]),
            Step::Otp => stacked(vec![
                (1, Element::text(format!("Enter OTP sent to {}", state.email))),
                (
                    1,
                    Element::text_input("otp", &state.otp, &state.otp_input)
                        .placeholder("6-digit OTP")
                        .on_change(Msg::OtpChanged)
                        .on_submit(Msg::VerifyOtp)
                        .build(),
                ),
                (
                    3,
                    Element::button("verify", "Verify & Continue")
                        .on_press(Msg::VerifyOtp)
                        .build(),
                ),
            ]),
            Step::ResumeUpload => stacked(vec![
                (1, Element::styled("Upload Your Resume", theme.heading_style())),
                (
                    1,
                    Element::styled(
                        "Upload your resume to get personalized job recommendations",
                        theme.muted_style(),
                    ),
                ),
                (
                    3,
                    Element::button("choose-pdf", "📄 Choose PDF File")
                        .on_press(Msg::ChoosePdf)
                        .build(),
                ),
                (
                    1,
                    Element::text_input("linkedin", &state.linkedin, &state.linkedin_input)
                        .placeholder("Paste your LinkedIn profile URL")
                        .on_change(Msg::LinkedInChanged)
                        .build(),
                ),
                (
                    3,
                    Element::button("continue", "Continue to Dashboard")
                        .on_press(Msg::ContinueToDashboard)
                        .build(),
                ),
            ]),
        };

        let hint = match &state.hint {
            Some(text) => Element::styled(text.clone(), theme.warning_style()),
            None => Element::None,
        };

        let card = stacked(vec![
            (
                2,
                header(
                    "Welcome to Smart Job Aggregator",
                    "Sign in to start your career journey",
                    theme,
                ),
            ),
            (17, step),
            (1, hint),
        ]);

        Element::container(Element::panel(card).title("Sign in").width(64).build()).build()
    }

    fn title() -> &'static str {
        "Login"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_email(state: &mut State, email: &str) {
        for c in email.chars() {
            LoginApp::update(state, Msg::EmailChanged(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_google_login_enters_resume_step_and_only_logs_in() {
        let (mut state, _) = LoginApp::init(());
        let command = LoginApp::update(&mut state, Msg::GoogleLogin);

        match command {
            Command::Login(session) => {
                assert_eq!(session, Session::student(DEMO_NAME, DEMO_EMAIL));
            }
            _ => panic!("expected a plain login command"),
        }
        assert_eq!(state.step, Step::ResumeUpload);
        assert!(LoginApp::view(&state, &Theme::default()).contains_text("Upload Your Resume"));
    }

    #[test]
    fn test_send_otp_requires_email() {
        let (mut state, _) = LoginApp::init(());
        LoginApp::update(&mut state, Msg::SendOtp);
        assert_eq!(state.step, Step::Choose);
        assert!(state.hint.is_some());

        type_email(&mut state, "sam@college.edu");
        assert!(state.hint.is_none());
        LoginApp::update(&mut state, Msg::SendOtp);
        assert_eq!(state.step, Step::Otp);
        assert!(LoginApp::view(&state, &Theme::default()).contains_text("Enter OTP sent to sam@college.edu"));
    }

    #[test]
    fn test_verify_logs_in_with_entered_email() {
        let (mut state, _) = LoginApp::init(());
        type_email(&mut state, "sam@college.edu");
        LoginApp::update(&mut state, Msg::SendOtp);

        match LoginApp::update(&mut state, Msg::VerifyOtp) {
            Command::Login(session) => assert_eq!(session.email, "sam@college.edu"),
            _ => panic!("expected login"),
        }
        assert_eq!(state.step, Step::ResumeUpload);
    }

    #[test]
    fn test_otp_accepts_six_digits_only() {
        let (mut state, _) = LoginApp::init(());
        for c in "12a34567".chars() {
            LoginApp::update(&mut state, Msg::OtpChanged(KeyCode::Char(c)));
        }
        assert_eq!(state.otp, "123456");
    }

    #[test]
    fn test_admin_login_skips_resume_step() {
        let (mut state, _) = LoginApp::init(());
        let command = LoginApp::update(&mut state, Msg::AdminLogin);

        match command {
            Command::Batch(commands) => {
                assert!(matches!(&commands[0], Command::Login(s) if s.is_admin()));
                assert!(matches!(&commands[1], Command::NavigateTo(ScreenId::Admin)));
            }
            _ => panic!("expected login then navigate"),
        }
        assert_eq!(state.step, Step::Choose);
    }

    #[test]
    fn test_continue_goes_to_dashboard() {
        let (mut state, _) = LoginApp::init(());
        LoginApp::update(&mut state, Msg::GoogleLogin);
        let view = LoginApp::view(&state, &Theme::default());
        let msg = view.press_msg("continue").cloned().unwrap();
        assert!(matches!(
            LoginApp::update(&mut state, msg),
            Command::NavigateTo(ScreenId::Dashboard)
        ));
    }
}
