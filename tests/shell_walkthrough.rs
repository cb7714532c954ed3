//! Drives the whole TUI shell against an in-memory terminal

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use smartjob::nav::{Role, ScreenId};
use smartjob::tui::{RuntimeConfig, Shell};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn draw(terminal: &mut Terminal<TestBackend>, shell: &mut Shell) -> String {
    terminal.draw(|frame| shell.render(frame)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press_after_tabs(terminal: &mut Terminal<TestBackend>, shell: &mut Shell, tabs: usize) {
    // Focus targets come from the last frame, so draw between keys
    draw(terminal, shell);
    for _ in 0..tabs {
        shell.handle_key(key(KeyCode::Tab)).unwrap();
        draw(terminal, shell);
    }
    shell.handle_key(key(KeyCode::Enter)).unwrap();
}

#[test]
fn test_intro_to_google_login_to_dashboard() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut shell = Shell::new(RuntimeConfig::default(), ScreenId::Intro);

    let screen = draw(&mut terminal, &mut shell);
    assert!(screen.contains("Start Demo Experience"));

    assert!(shell.handle_key(key(KeyCode::Enter)).unwrap());
    assert_eq!(shell.screen_id(), ScreenId::Login);

    // The Google button is the first focusable control
    press_after_tabs(&mut terminal, &mut shell, 0);

    let session = shell.controller().session().unwrap();
    assert_eq!(session.name, "Alex Johnson");
    assert_eq!(session.role, Role::Student);
    assert_eq!(shell.screen_id(), ScreenId::Login);

    let screen = draw(&mut terminal, &mut shell);
    assert!(screen.contains("Alex Johnson"));
    assert!(screen.contains("Upload Your Resume"));

    // Choose PDF, LinkedIn URL, then Continue to Dashboard
    press_after_tabs(&mut terminal, &mut shell, 2);

    assert_eq!(shell.controller().current(), ScreenId::Dashboard);
    assert_eq!(shell.screen_id(), ScreenId::Dashboard);
    let session = shell.controller().session().unwrap();
    assert_eq!(session.name, "Alex Johnson");
    assert_eq!(session.role, Role::Student);
}

#[test]
fn test_admin_demo_login_skips_resume_upload() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut shell = Shell::new(RuntimeConfig::default(), ScreenId::Login);
    let mut frames = Vec::new();

    frames.push(draw(&mut terminal, &mut shell));
    assert!(frames[0].contains("Admin demo login"));

    // Google, email, Send OTP, then Admin demo login
    for _ in 0..3 {
        shell.handle_key(key(KeyCode::Tab)).unwrap();
        frames.push(draw(&mut terminal, &mut shell));
    }
    shell.handle_key(key(KeyCode::Enter)).unwrap();
    frames.push(draw(&mut terminal, &mut shell));

    assert_eq!(shell.screen_id(), ScreenId::Admin);
    let session = shell.controller().session().unwrap();
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.name, "Admin User");
    assert!(frames.iter().all(|frame| !frame.contains("Upload Your Resume")));
    assert!(frames.last().unwrap().contains("Admin Access"));
}

#[test]
fn test_every_screen_renders_through_overlay() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut shell = Shell::new(RuntimeConfig::default(), ScreenId::Login);

    shell.handle_key(ctrl('n')).unwrap();
    assert!(shell.overlay().is_open());

    let mut visited = vec![shell.screen_id()];
    for _ in 0..8 {
        shell.handle_key(key(KeyCode::Char(']'))).unwrap();
        draw(&mut terminal, &mut shell);
        visited.push(shell.screen_id());
    }

    assert_eq!(visited, ScreenId::ALL[1..].to_vec());
    let screen = draw(&mut terminal, &mut shell);
    assert!(screen.contains("Admin Dashboard"));

    // Already at the end: stepping further is a no-op
    shell.handle_key(key(KeyCode::Char(']'))).unwrap();
    assert_eq!(shell.screen_id(), ScreenId::Admin);
}

#[test]
fn test_skill_gap_analysis_runs_on_ticks() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut shell = Shell::new(RuntimeConfig::default(), ScreenId::SkillGap);
    draw(&mut terminal, &mut shell);

    shell.handle_key(key(KeyCode::Char('a'))).unwrap();
    let screen = draw(&mut terminal, &mut shell);
    assert!(screen.contains("Analyzing"));

    // 20 steps of 5% at 80ms each
    for _ in 0..40 {
        std::thread::sleep(std::time::Duration::from_millis(85));
        assert!(shell.tick().unwrap());
        let screen = draw(&mut terminal, &mut shell);
        if screen.contains("Skills You Have") {
            return;
        }
    }
    panic!("analysis never finished");
}

#[test]
fn test_no_mouse_config_ignores_clicks() {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

    let config = RuntimeConfig {
        mouse: false,
        ..RuntimeConfig::default()
    };
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut shell = Shell::new(config, ScreenId::Intro);
    draw(&mut terminal, &mut shell);

    for row in 0..40 {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 60,
            row,
            modifiers: KeyModifiers::empty(),
        };
        assert!(shell.handle_mouse(click).unwrap());
    }
    assert_eq!(shell.screen_id(), ScreenId::Intro);
}
