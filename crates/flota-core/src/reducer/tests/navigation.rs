use super::*;
use pretty_assertions::assert_eq;

#[test]
fn navigate_to_every_known_token_activates_and_persists_it() {
    for section in SectionId::ALL {
        let mut state = state();
        let effects = run(
            &mut state,
            UserAction::NavigateTo(section.as_str().to_string()),
        );
        assert_eq!(state.nav.active_section, section);
        assert_eq!(
            effects,
            vec![
                ShellEffect::Persist {
                    key: PreferenceKey::ActiveSection,
                    value: section.as_str().to_string(),
                },
                ShellEffect::RequestFrame,
            ]
        );
    }
}

#[test]
fn unknown_tokens_leave_state_untouched() {
    let mut state = state();
    go(&mut state, SectionId::Mileage);
    for token in ["", "garage", "Mileage", "vehicles ", "/vehicles"] {
        let effects = run(&mut state, UserAction::NavigateTo(token.to_string()));
        assert!(effects.is_empty(), "{token:?}");
        assert_eq!(state.nav.active_section, SectionId::Mileage);
    }
}

#[test]
fn navigating_twice_matches_navigating_once() {
    let mut once = state();
    let first = run(&mut once, UserAction::NavigateTo("vehicles".to_string()));

    let mut twice = state();
    run(&mut twice, UserAction::NavigateTo("vehicles".to_string()));
    let second = run(&mut twice, UserAction::NavigateTo("vehicles".to_string()));

    assert_eq!(first, second);
    assert_eq!(once.nav, twice.nav);
    assert_eq!(
        once.interaction.sidebar_cursor,
        twice.interaction.sidebar_cursor
    );
}

#[test]
fn navigation_closes_the_mobile_drawer() {
    let mut state = mobile_state();
    run(&mut state, UserAction::ToggleMobileMenu);
    assert_eq!(state.shell_mode(), ShellMode::MobileOpen);

    run(&mut state, UserAction::NavigateTo("dashboard".to_string()));
    assert!(!state.nav.mobile_menu_open);
    assert_eq!(state.shell_mode(), ShellMode::MobileClosed);
}

#[test]
fn navigation_does_not_touch_desktop_chrome() {
    let mut state = state();
    run(&mut state, UserAction::ToggleSidebar);
    assert_eq!(state.shell_mode(), ShellMode::DesktopCollapsed);

    go(&mut state, SectionId::Consumption);
    assert_eq!(state.shell_mode(), ShellMode::DesktopCollapsed);
}

#[test]
fn navigation_moves_sidebar_cursor_to_listed_sections_only() {
    let mut state = state();
    go(&mut state, SectionId::Settings);
    assert_eq!(state.interaction.sidebar_cursor, 11);

    go(&mut state, SectionId::Profile);
    assert_eq!(state.interaction.sidebar_cursor, 11);
}

#[test]
fn resize_to_mobile_starts_closed_and_back_keeps_collapse() {
    let mut state = state();
    run(&mut state, UserAction::ToggleSidebar);

    let effects = run_runtime(
        &mut state,
        RuntimeAction::ViewportChanged(ViewportClass::Mobile),
    );
    assert_eq!(effects, vec![ShellEffect::RequestFrame]);
    assert_eq!(state.shell_mode(), ShellMode::MobileClosed);

    run(&mut state, UserAction::ToggleMobileMenu);
    assert_eq!(state.shell_mode(), ShellMode::MobileOpen);

    run_runtime(
        &mut state,
        RuntimeAction::ViewportChanged(ViewportClass::Desktop),
    );
    assert_eq!(state.shell_mode(), ShellMode::DesktopCollapsed);
    assert!(!state.nav.mobile_menu_open);
}

#[test]
fn repeated_viewport_class_is_ignored() {
    let mut state = state();
    let effects = run_runtime(
        &mut state,
        RuntimeAction::ViewportChanged(ViewportClass::Desktop),
    );
    assert!(effects.is_empty());
}

#[test]
fn leaving_a_section_resets_its_view_state_on_return() {
    let mut state = state();
    go(&mut state, SectionId::Vehicles);
    run(&mut state, UserAction::SearchInput('v'));
    assert_eq!(state.views.vehicles.query.search, "v");

    go(&mut state, SectionId::Dashboard);
    go(&mut state, SectionId::Vehicles);
    assert_eq!(state.views.vehicles.query.search, "");
}

#[test]
fn reselecting_the_active_section_keeps_view_state() {
    let mut state = state();
    go(&mut state, SectionId::Vehicles);
    run(&mut state, UserAction::SearchInput('v'));
    go(&mut state, SectionId::Vehicles);
    assert_eq!(state.views.vehicles.query.search, "v");
}

#[test]
fn quit_is_an_effect_only() {
    let mut state = state();
    let effects = run(&mut state, UserAction::Quit);
    assert_eq!(effects, vec![ShellEffect::Quit]);
    assert_eq!(state.nav.active_section, SectionId::Dashboard);
}
