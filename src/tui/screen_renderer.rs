use crate::nav::{NavigationState, ScreenId};
use crate::tui::apps::admin::AdminParams;
use crate::tui::apps::dashboard::DashboardParams;
use crate::tui::apps::{
    AdminApp, CompareApp, DashboardApp, GrowthApp, IntroApp, LoginApp, PeerResumeApp,
    RoleExplainerApp, SkillGapApp, TrackerApp,
};
use crate::tui::{AppRuntime, Runtime};

/// Builds the runtime for whichever screen is current.
///
/// Screens get only the slice of navigation state they need, never the
/// whole `NavigationState`.
pub struct ScreenRenderer;

impl ScreenRenderer {
    pub fn mount(state: &NavigationState) -> Box<dyn AppRuntime> {
        log::debug!("Mounting {}", state.current);
        match state.current {
            ScreenId::Intro => Box::new(Runtime::<IntroApp>::new()),
            ScreenId::Login => Box::new(Runtime::<LoginApp>::new()),
            ScreenId::Dashboard => Box::new(Runtime::<DashboardApp>::with_params(DashboardParams {
                user_name: state.session.as_ref().map(|s| s.name.clone()),
            })),
            ScreenId::RoleExplainer => Box::new(Runtime::<RoleExplainerApp>::new()),
            ScreenId::SkillGap => Box::new(Runtime::<SkillGapApp>::new()),
            ScreenId::Tracker => Box::new(Runtime::<TrackerApp>::new()),
            ScreenId::Compare => Box::new(Runtime::<CompareApp>::new()),
            ScreenId::PeerResume => Box::new(Runtime::<PeerResumeApp>::new()),
            ScreenId::Growth => Box::new(Runtime::<GrowthApp>::new()),
            ScreenId::Admin => Box::new(Runtime::<AdminApp>::with_params(AdminParams {
                role: state.session.as_ref().map(|s| s.role),
            })),
        }
    }

    /// Mount by string key; unknown keys fall back to the introduction
    pub fn mount_key(key: &str) -> Box<dyn AppRuntime> {
        Self::mount(&NavigationState::at(ScreenId::resolve(key)))
    }
}
