use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for every screen in the demo flow.
///
/// The set is closed: anything that arrives as a string (CLI flags, config)
/// goes through [`ScreenId::resolve`] or [`FromStr`] before it can reach the
/// navigation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreenId {
    Intro,
    Login,
    Dashboard,
    RoleExplainer,
    SkillGap,
    Tracker,
    Compare,
    PeerResume,
    Growth,
    Admin,
}

impl ScreenId {
    /// Every screen, in registry order
    pub const ALL: [ScreenId; 10] = [
        ScreenId::Intro,
        ScreenId::Login,
        ScreenId::Dashboard,
        ScreenId::RoleExplainer,
        ScreenId::SkillGap,
        ScreenId::Tracker,
        ScreenId::Compare,
        ScreenId::PeerResume,
        ScreenId::Growth,
        ScreenId::Admin,
    ];

    /// Stable string key used on the command line and in the config file
    pub fn as_key(&self) -> &'static str {
        match self {
            ScreenId::Intro => "intro",
            ScreenId::Login => "login",
            ScreenId::Dashboard => "dashboard",
            ScreenId::RoleExplainer => "roleExplainer",
            ScreenId::SkillGap => "skillGap",
            ScreenId::Tracker => "tracker",
            ScreenId::Compare => "compare",
            ScreenId::PeerResume => "peerResume",
            ScreenId::Growth => "growth",
            ScreenId::Admin => "admin",
        }
    }

    /// Parse a screen key, falling back to the intro screen for unknown keys.
    ///
    /// Unknown keys are never an error: they are logged and the demo starts
    /// over from the introduction.
    pub fn resolve(key: &str) -> Self {
        match key.parse() {
            Ok(id) => id,
            Err(err) => {
                log::warn!("{}, falling back to '{}'", err, ScreenId::Intro);
                ScreenId::Intro
            }
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Returned when a string does not name any screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScreenIdError {
    key: String,
}

impl ParseScreenIdError {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ParseScreenIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown screen '{}'", self.key)
    }
}

impl std::error::Error for ParseScreenIdError {}

impl FromStr for ScreenId {
    type Err = ParseScreenIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        ScreenId::ALL
            .iter()
            .copied()
            .find(|id| id.as_key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseScreenIdError { key: key.to_string() })
    }
}

/// One row of the registry: a screen and the title shown for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub id: ScreenId,
    pub title: &'static str,
    /// Whether the floating navigation lists this screen
    pub jumpable: bool,
}

/// Ordered mapping from screen to display title.
///
/// Insertion order is navigation order; "next" and "previous" are derived
/// from it.
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenRegistry {
    pub fn new() -> Self {
        let entry = |id, title| RegistryEntry { id, title, jumpable: true };

        Self {
            entries: vec![
                // The introduction is a valid screen but the floating
                // navigation never offers it.
                RegistryEntry { id: ScreenId::Intro, title: "Introduction", jumpable: false },
                entry(ScreenId::Login, "Login"),
                entry(ScreenId::Dashboard, "Dashboard"),
                entry(ScreenId::RoleExplainer, "Role Explainer"),
                entry(ScreenId::SkillGap, "Skill Gap Analyzer"),
                entry(ScreenId::Tracker, "Application Tracker"),
                entry(ScreenId::Compare, "Job Compare"),
                entry(ScreenId::PeerResume, "Peer Resume Comparison"),
                entry(ScreenId::Growth, "Growth Tracker"),
                entry(ScreenId::Admin, "Admin Dashboard"),
            ],
        }
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RegistryEntry> {
        self.entries.get(index)
    }

    pub fn index_of(&self, id: ScreenId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn title(&self, id: ScreenId) -> Option<&'static str> {
        self.entries.iter().find(|entry| entry.id == id).map(|entry| entry.title)
    }

    /// Screens offered by the floating navigation, in registry order
    pub fn jump_list(&self) -> impl Iterator<Item = &RegistryEntry> + '_ {
        self.entries.iter().filter(|entry| entry.jumpable)
    }

    pub fn jump_len(&self) -> usize {
        self.jump_list().count()
    }

    /// Position of a screen within the jump list
    pub fn jump_index_of(&self, id: ScreenId) -> Option<usize> {
        self.jump_list().position(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_is_registered_once() {
        let registry = ScreenRegistry::new();
        assert_eq!(registry.len(), ScreenId::ALL.len());

        for id in ScreenId::ALL {
            let matches = registry.entries().iter().filter(|e| e.id == id).count();
            assert_eq!(matches, 1, "{} should appear exactly once", id);
        }
    }

    #[test]
    fn test_registry_order_matches_all() {
        let registry = ScreenRegistry::new();
        let ids: Vec<ScreenId> = registry.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, ScreenId::ALL.to_vec());
    }

    #[test]
    fn test_intro_is_hidden_from_jump_list() {
        let registry = ScreenRegistry::new();
        assert_eq!(registry.jump_len(), 9);
        assert_eq!(registry.jump_index_of(ScreenId::Intro), None);
        assert_eq!(registry.jump_index_of(ScreenId::Login), Some(0));
        assert_eq!(registry.jump_index_of(ScreenId::Admin), Some(8));
    }

    #[test]
    fn test_titles() {
        let registry = ScreenRegistry::new();
        assert_eq!(registry.title(ScreenId::SkillGap), Some("Skill Gap Analyzer"));
        assert_eq!(registry.title(ScreenId::PeerResume), Some("Peer Resume Comparison"));
    }

    #[test]
    fn test_key_round_trip() {
        for id in ScreenId::ALL {
            assert_eq!(id.as_key().parse::<ScreenId>(), Ok(id));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ROLEEXPLAINER".parse::<ScreenId>(), Ok(ScreenId::RoleExplainer));
        assert_eq!(" admin ".parse::<ScreenId>(), Ok(ScreenId::Admin));
    }

    #[test]
    fn test_unknown_key() {
        let err = "no-such-id".parse::<ScreenId>().unwrap_err();
        assert_eq!(err.key(), "no-such-id");
        assert_eq!(err.to_string(), "unknown screen 'no-such-id'");
    }

    #[test]
    fn test_resolve_falls_back_to_intro() {
        assert_eq!(ScreenId::resolve("no-such-id"), ScreenId::Intro);
        assert_eq!(ScreenId::resolve("tracker"), ScreenId::Tracker);
    }
}
