//! End-to-end walks through the navigation controller

use smartjob::nav::{NavigationController, Role, ScreenId, ScreenRegistry, Session};

#[test]
fn test_demo_walkthrough_forward() {
    let mut nav = NavigationController::new();
    nav.navigate(ScreenId::Login);
    nav.login(Session::student("Alex Johnson", "alex.johnson@university.edu"));

    let mut visited = vec![nav.current()];
    while nav.step_next() {
        visited.push(nav.current());
    }

    assert_eq!(visited, ScreenId::ALL[1..].to_vec());
    assert_eq!(nav.current(), ScreenId::Admin);
    assert_eq!(nav.session().map(|s| s.role), Some(Role::Student));
}

#[test]
fn test_walk_back_stops_at_login() {
    let mut nav = NavigationController::starting_at(ScreenId::Admin);
    let mut steps = 0;
    while nav.step_previous() {
        steps += 1;
    }

    assert_eq!(nav.current(), ScreenId::Login);
    assert_eq!(steps, 8);
}

#[test]
fn test_next_then_previous_returns_home() {
    for id in ScreenId::ALL {
        let mut nav = NavigationController::starting_at(id);
        let Some(next) = nav.next() else { continue };
        let back = NavigationController::starting_at(next).previous();
        // Login has no previous, so intro is the one screen that cannot come back
        if back.is_none() {
            assert_eq!(id, ScreenId::Intro);
            continue;
        }

        assert!(nav.step_next());
        assert!(nav.step_previous());
        assert_eq!(nav.current(), id, "next then previous from {}", id);
    }
}

#[test]
fn test_previous_then_next_returns_home() {
    let mut checked = 0;
    for id in ScreenId::ALL {
        let mut nav = NavigationController::starting_at(id);
        if !nav.step_previous() {
            continue;
        }
        assert!(nav.step_next());
        assert_eq!(nav.current(), id, "previous then next from {}", id);
        checked += 1;
    }
    // Dashboard through admin
    assert_eq!(checked, 8);
}

#[test]
fn test_session_survives_navigation() {
    let mut nav = NavigationController::starting_at(ScreenId::Login);
    nav.login(Session::admin("Admin User", "admin@smartjob.com"));
    nav.navigate(ScreenId::Tracker);
    nav.navigate(ScreenId::Intro);

    let session = nav.session().unwrap();
    assert_eq!(session.name, "Admin User");
    assert_eq!(session.role, Role::Admin);
}

#[test]
fn test_second_login_replaces_session() {
    let mut nav = NavigationController::new();
    nav.login(Session::student("Alex Johnson", "alex@example.edu"));
    nav.login(Session::admin("Admin User", "admin@smartjob.com"));
    assert_eq!(nav.session().map(|s| s.role), Some(Role::Admin));
}

#[test]
fn test_screen_keys_round_trip() {
    for id in ScreenId::ALL {
        assert_eq!(id.as_key().parse::<ScreenId>().unwrap(), id);
        assert_eq!(ScreenId::resolve(&id.to_string()), id);
    }
    assert_eq!(ScreenId::resolve("SKILLGAP"), ScreenId::SkillGap);
    assert_eq!(ScreenId::resolve("careers"), ScreenId::Intro);
    assert!("careers".parse::<ScreenId>().is_err());
}

#[test]
fn test_jump_list_hides_intro_only() {
    let registry = ScreenRegistry::new();
    assert_eq!(registry.len(), 10);
    assert_eq!(registry.jump_len(), 9);
    assert_eq!(registry.jump_index_of(ScreenId::Intro), None);
    assert_eq!(registry.jump_index_of(ScreenId::Login), Some(0));
    assert_eq!(registry.jump_index_of(ScreenId::Admin), Some(8));
}
