use anyhow::{Context, Result};
use clap::Args;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use is_terminal::IsTerminal;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::{Duration, Instant};

use smartjob::config::Config;
use smartjob::nav::ScreenId;
use smartjob::tui::{RuntimeConfig, Shell, Theme, ThemeVariant};

#[derive(Args, Default)]
pub struct RunArgs {
    /// Screen to open first (e.g. dashboard, skillGap); unknown keys open the intro
    #[arg(long, value_name = "SCREEN")]
    pub start: Option<String>,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeVariant>,

    /// Ignore mouse input
    #[arg(long)]
    pub no_mouse: bool,
}

/// Effective settings: config file first, then command-line overrides
fn resolve_settings(args: &RunArgs, config: &Config) -> (RuntimeConfig, ScreenId) {
    let mut runtime = RuntimeConfig::from_config(config);
    if let Some(variant) = args.theme {
        runtime.theme = Theme::new(variant);
    }
    if args.no_mouse {
        runtime.mouse = false;
    }

    let start = match &args.start {
        Some(key) => ScreenId::resolve(key),
        None => config.start_screen(),
    };
    (runtime, start)
}

pub async fn run_command(args: RunArgs, config: &Config) -> Result<()> {
    if !io::stdout().is_terminal() {
        anyhow::bail!("smartjob needs an interactive terminal; try `smartjob screens` instead");
    }

    let (runtime_config, start) = resolve_settings(&args, config);
    let mouse = runtime_config.mouse;
    let mut shell = Shell::new(runtime_config, start);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = match enter_terminal(mouse) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(&mut io::stdout(), disable_raw_mode);
            return Err(e);
        }
    };

    let result = run_loop(&mut terminal, &mut shell).await;

    // Restore the terminal even when the loop failed
    restore_terminal(&mut io::stdout(), disable_raw_mode);

    if let Err(e) = &result {
        log::error!("TUI exited with error: {:#}", e);
    }
    result
}

fn enter_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    let entered = if mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(stdout, EnterAlternateScreen)
    };
    entered.context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Undo terminal setup. Every step runs even when an earlier one fails;
/// returns how many steps failed.
fn restore_terminal<W: io::Write>(out: &mut W, disable_raw: impl FnOnce() -> io::Result<()>) -> usize {
    let mut failures = 0;
    let mut step = |what: &str, result: io::Result<()>| {
        if let Err(e) = result {
            log::warn!("Failed to {}: {}", what, e);
            failures += 1;
        }
    };

    step("disable raw mode", disable_raw());
    step(
        "leave alternate screen",
        execute!(out, LeaveAlternateScreen, DisableMouseCapture),
    );
    step("show cursor", execute!(out, Show));
    failures
}

async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, shell: &mut Shell) -> Result<()> {
    let frame_time = shell.frame_interval();

    loop {
        let frame_start = Instant::now();

        // Drain pending input before drawing for minimal latency
        while event::poll(Duration::from_millis(0))? {
            let keep_running = match event::read()? {
                Event::Key(key) => shell.handle_key(key)?,
                Event::Mouse(mouse) => shell.handle_mouse(mouse)?,
                _ => true,
            };
            if !keep_running {
                log::info!("Quit requested");
                return Ok(());
            }
        }

        if !shell.tick()? {
            return Ok(());
        }

        terminal.draw(|frame| shell.render(frame))?;

        if let Some(remaining) = frame_time.checked_sub(frame_start.elapsed()) {
            tokio::time::sleep(remaining).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_restore_continues_after_raw_mode_failure() {
        let mut out = Vec::new();
        let failures = restore_terminal(&mut out, || Err(io::Error::other("not a tty")));

        assert_eq!(failures, 1);
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "alternate screen left");
        assert!(written.contains("\x1b[?25h"), "cursor shown");
    }

    #[test]
    fn test_restore_disables_raw_mode_when_output_fails() {
        let mut raw_disabled = false;
        let failures = restore_terminal(&mut BrokenPipe, || {
            raw_disabled = true;
            Ok(())
        });

        assert!(raw_disabled);
        assert_eq!(failures, 2);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            theme: ThemeVariant::Mocha,
            start_screen: Some("tracker".to_string()),
            ..Config::default()
        };
        let args = RunArgs {
            start: Some("compare".to_string()),
            theme: Some(ThemeVariant::Latte),
            no_mouse: true,
        };

        let (runtime, start) = resolve_settings(&args, &config);
        assert_eq!(start, ScreenId::Compare);
        assert_eq!(runtime.theme, Theme::new(ThemeVariant::Latte));
        assert!(!runtime.mouse);
    }

    #[test]
    fn test_config_start_screen_used_without_flag() {
        let config = Config {
            start_screen: Some("tracker".to_string()),
            ..Config::default()
        };
        let (runtime, start) = resolve_settings(&RunArgs::default(), &config);
        assert_eq!(start, ScreenId::Tracker);
        assert!(runtime.mouse);
    }

    #[test]
    fn test_unknown_start_falls_back_to_intro() {
        let args = RunArgs {
            start: Some("nowhere".to_string()),
            ..RunArgs::default()
        };
        let (_, start) = resolve_settings(&args, &Config::default());
        assert_eq!(start, ScreenId::Intro);
    }
}
