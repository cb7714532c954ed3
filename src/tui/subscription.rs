use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Represents a keyboard key with optional modifiers (Ctrl, Alt, Shift)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a key binding with no modifiers
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Create a key binding with Ctrl modifier
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Check if this key binding matches the given key event.
    ///
    /// Character keys ignore Shift and letter case, since terminals disagree
    /// on whether `?` or `Ctrl+N` arrive with the Shift bit set.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        match (self.code, event.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a.to_ascii_lowercase() == b.to_ascii_lowercase()
                    && self.modifiers.difference(KeyModifiers::SHIFT)
                        == event.modifiers.difference(KeyModifiers::SHIFT)
            }
            (a, b) => a == b && self.modifiers == event.modifiers,
        }
    }
}

impl From<KeyCode> for KeyBinding {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

/// Returned when a key binding string like `Ctrl+N` cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyBindingError {
    input: String,
    reason: &'static str,
}

impl fmt::Display for ParseKeyBindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid key binding '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseKeyBindingError {}

fn parse_key_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c.to_ascii_lowercase()));
    }

    let code = match name.to_ascii_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        other => {
            let n: u8 = other.strip_prefix('f')?.parse().ok()?;
            if !(1..=24).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
    };
    Some(code)
}

impl FromStr for KeyBinding {
    type Err = ParseKeyBindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseKeyBindingError {
            input: s.to_string(),
            reason,
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(err("empty"));
        }

        // "Ctrl++" binds the plus key itself
        let (mods, key) = if trimmed == "+" {
            ("", "+")
        } else if let Some(rest) = trimmed.strip_suffix("++") {
            (rest, "+")
        } else {
            trimmed.rsplit_once('+').unwrap_or(("", trimmed))
        };

        let mut modifiers = KeyModifiers::empty();
        for part in mods.split('+').filter(|p| !p.is_empty()) {
            modifiers |= match part.trim().to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(err("unknown modifier")),
            };
        }

        let code = parse_key_code(key.trim()).ok_or_else(|| err("unknown key"))?;
        Ok(Self { code, modifiers })
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("Alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("Shift+")?;
        }

        match self.code {
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) if !self.modifiers.is_empty() => write!(f, "{}", c.to_ascii_uppercase()),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Esc => f.write_str("Esc"),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::BackTab => f.write_str("BackTab"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::Delete => f.write_str("Delete"),
            KeyCode::Up => f.write_str("Up"),
            KeyCode::Down => f.write_str("Down"),
            KeyCode::Left => f.write_str("Left"),
            KeyCode::Right => f.write_str("Right"),
            KeyCode::Home => f.write_str("Home"),
            KeyCode::End => f.write_str("End"),
            KeyCode::PageUp => f.write_str("PageUp"),
            KeyCode::PageDown => f.write_str("PageDown"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Subscriptions represent inputs that a screen wants to receive.
/// They are registered via the subscriptions() function.
pub enum Subscription<Msg> {
    /// Subscribe to a specific keyboard key (with optional modifiers)
    Keyboard {
        key: KeyBinding,
        msg: Msg,
        description: String,
    },

    /// Subscribe to periodic timer events
    Timer { interval: Duration, msg: Msg },
}

impl<Msg> Subscription<Msg> {
    /// Helper to create a keyboard subscription (accepts KeyCode or KeyBinding)
    pub fn keyboard(key: impl Into<KeyBinding>, description: impl Into<String>, msg: Msg) -> Self {
        Subscription::Keyboard {
            key: key.into(),
            msg,
            description: description.into(),
        }
    }

    pub fn timer(interval: Duration, msg: Msg) -> Self {
        Subscription::Timer { interval, msg }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> KeyBinding {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse("F1"), KeyBinding::new(KeyCode::F(1)));
        assert_eq!(parse("Esc"), KeyBinding::new(KeyCode::Esc));
        assert_eq!(parse("pagedown"), KeyBinding::new(KeyCode::PageDown));
        assert_eq!(parse("Space"), KeyBinding::new(KeyCode::Char(' ')));
    }

    #[test]
    fn test_parse_modifiers() {
        assert_eq!(parse("Ctrl+N"), KeyBinding::ctrl(KeyCode::Char('n')));
        assert_eq!(
            parse("ctrl+alt+x"),
            KeyBinding::with_modifiers(KeyCode::Char('x'), KeyModifiers::CONTROL | KeyModifiers::ALT)
        );
        assert_eq!(
            parse("Ctrl++"),
            KeyBinding::ctrl(KeyCode::Char('+'))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<KeyBinding>().is_err());
        assert!("Hyper+N".parse::<KeyBinding>().is_err());
        assert!("Ctrl+Banana".parse::<KeyBinding>().is_err());
        assert!("F99".parse::<KeyBinding>().is_err());

        let err = "Ctrl+Banana".parse::<KeyBinding>().unwrap_err();
        assert_eq!(err.to_string(), "invalid key binding 'Ctrl+Banana': unknown key");
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["Ctrl+N", "F1", "Esc", "Ctrl+Q", "q", "Alt+Enter", "Space"] {
            assert_eq!(parse(s).to_string(), s);
        }
    }

    #[test]
    fn test_matches_ignores_shift_for_chars() {
        let binding = KeyBinding::ctrl(KeyCode::Char('n'));
        let event = KeyEvent::new(KeyCode::Char('N'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert!(binding.matches(&event));

        let plain = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::empty());
        assert!(!binding.matches(&plain));
    }

    #[test]
    fn test_matches_exact_for_named_keys() {
        let binding = KeyBinding::new(KeyCode::F(1));
        assert!(binding.matches(&KeyEvent::new(KeyCode::F(1), KeyModifiers::empty())));
        assert!(!binding.matches(&KeyEvent::new(KeyCode::F(1), KeyModifiers::SHIFT)));
    }
}
