use super::*;
use pretty_assertions::assert_eq;

#[test]
fn user_menu_toggles_and_clamps_selection() {
    let mut state = state();
    run(&mut state, UserAction::OpenUserMenu);
    assert_eq!(
        state.interaction.overlay,
        ShellOverlay::UserMenu { selected: 0 }
    );

    for _ in 0..5 {
        run(&mut state, UserAction::UserMenuMoveDown);
    }
    assert_eq!(
        state.interaction.overlay,
        ShellOverlay::UserMenu { selected: 2 }
    );

    run(&mut state, UserAction::OpenUserMenu);
    assert_eq!(state.interaction.overlay, ShellOverlay::None);
    assert!(run(&mut state, UserAction::UserMenuMoveUp).is_empty());
}

#[test]
fn user_menu_entries_navigate_to_profile_and_settings() {
    let mut state = state();
    run(&mut state, UserAction::OpenUserMenu);
    let effects = run(&mut state, UserAction::UserMenuSubmit);
    assert_eq!(state.nav.active_section, SectionId::Profile);
    assert_eq!(state.interaction.overlay, ShellOverlay::None);
    assert_eq!(
        persisted(&effects),
        vec![(PreferenceKey::ActiveSection, "profile")]
    );

    run(&mut state, UserAction::OpenUserMenu);
    run(&mut state, UserAction::UserMenuMoveDown);
    run(&mut state, UserAction::UserMenuSubmit);
    assert_eq!(state.nav.active_section, SectionId::Settings);
}

#[test]
fn logout_entry_closes_menu_and_keeps_session() {
    let mut state = state();
    run(&mut state, UserAction::Login);
    run(&mut state, UserAction::OpenUserMenu);
    run(&mut state, UserAction::UserMenuMoveDown);
    run(&mut state, UserAction::UserMenuMoveDown);
    let effects = run(&mut state, UserAction::UserMenuSubmit);
    assert_eq!(effects, vec![ShellEffect::RequestFrame]);
    assert_eq!(state.interaction.overlay, ShellOverlay::None);
    assert!(state.session.logged_in);
    assert_eq!(state.nav.active_section, SectionId::Dashboard);
}

#[test]
fn escape_unwinds_one_layer_at_a_time() {
    let mut state = mobile_state();
    go(&mut state, SectionId::Vehicles);
    run(&mut state, UserAction::ToggleMobileMenu);
    run(&mut state, UserAction::FocusSearch);
    run(&mut state, UserAction::OpenUserMenu);

    run(&mut state, UserAction::CloseOverlay);
    assert_eq!(state.interaction.overlay, ShellOverlay::None);
    assert!(state.interaction.search_focus);

    run(&mut state, UserAction::CloseOverlay);
    assert!(!state.interaction.search_focus);
    assert!(state.nav.mobile_menu_open);

    run(&mut state, UserAction::CloseOverlay);
    assert!(!state.nav.mobile_menu_open);

    assert!(run(&mut state, UserAction::CloseOverlay).is_empty());
}

#[test]
fn login_sets_and_persists_flag_once() {
    let mut state = state();
    state.session.require_login = true;
    assert!(state.session.needs_login());

    for ch in "admin".chars() {
        run(&mut state, UserAction::LoginInput(ch));
    }
    run(&mut state, UserAction::LoginNextField);
    for ch in "secreto".chars() {
        run(&mut state, UserAction::LoginInput(ch));
    }
    run(&mut state, UserAction::LoginBackspace);
    assert_eq!(state.session.login.username, "admin");
    assert_eq!(state.session.login.password, "secret");
    assert_eq!(state.session.login.masked_password(), "••••••");

    run(&mut state, UserAction::LoginToggleShowPassword);
    assert_eq!(state.session.login.masked_password(), "secret");

    let effects = run(&mut state, UserAction::Login);
    assert_eq!(persisted(&effects), vec![(PreferenceKey::LoggedIn, "true")]);
    assert!(!state.session.needs_login());
    assert!(state.session.login.password.is_empty());

    assert!(run(&mut state, UserAction::Login).is_empty());
}

#[test]
fn color_mode_cycles_and_persists() {
    let mut state = state();
    assert_eq!(state.customization.color_mode, ColorModeOption::System);

    let effects = run(&mut state, UserAction::CycleColorMode);
    assert_eq!(state.customization.color_mode, ColorModeOption::Light);
    assert_eq!(persisted(&effects), vec![(PreferenceKey::ColorMode, "light")]);

    let effects = run(&mut state, UserAction::SetColorMode(ColorModeOption::Dark));
    assert_eq!(state.customization.color_mode, ColorModeOption::Dark);
    assert_eq!(persisted(&effects), vec![(PreferenceKey::ColorMode, "dark")]);
}

#[test]
fn user_profile_is_never_mutated() {
    let mut state = state();
    let before = state.user.clone();
    for action in [
        UserAction::OpenUserMenu,
        UserAction::UserMenuSubmit,
        UserAction::Login,
        UserAction::Logout,
        UserAction::CycleColorMode,
    ] {
        run(&mut state, action);
    }
    assert_eq!(state.user, before);
    assert_eq!(state.user, user());
}
