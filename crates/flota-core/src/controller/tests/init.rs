use super::*;
use pretty_assertions::assert_eq;

#[test]
fn fresh_store_starts_on_dashboard_expanded() {
    let nav = controller(MemoryPreferenceStore::new());
    assert_eq!(nav.active_section(), SectionId::Dashboard);
    assert!(!nav.state().nav.sidebar_collapsed);
    assert_eq!(nav.state().shell_mode(), ShellMode::DesktopExpanded);
    assert_eq!(nav.initial_source(), InitialSectionSource::Default);
    assert_eq!(nav.state().customization.color_mode, ColorModeOption::System);
    assert!(!nav.state().session.logged_in);
}

#[test]
fn init_does_not_write_the_store() {
    let nav = NavigationController::init(
        RecordingStore::default(),
        options().with_explicit_section("settings"),
    );
    assert!(nav.store().writes.is_empty());
}

#[test]
fn explicit_section_beats_persisted_one() {
    let store = store_with(&[(PreferenceKey::ActiveSection, "vehicles")]);
    let nav = NavigationController::init(store, options().with_explicit_section("settings"));
    assert_eq!(nav.active_section(), SectionId::Settings);
    assert_eq!(nav.initial_source(), InitialSectionSource::Explicit);
}

#[test]
fn invalid_values_fall_through_each_level() {
    let store = store_with(&[(PreferenceKey::ActiveSection, "vehicles")]);
    let nav = NavigationController::init(store, options().with_explicit_section("hangar"));
    assert_eq!(nav.active_section(), SectionId::Vehicles);
    assert_eq!(nav.initial_source(), InitialSectionSource::Persisted);

    let store = store_with(&[(PreferenceKey::ActiveSection, "hangar")]);
    let nav = NavigationController::init(store, options().with_explicit_section(""));
    assert_eq!(nav.active_section(), SectionId::Dashboard);
    assert_eq!(nav.initial_source(), InitialSectionSource::Default);
}

#[test]
fn persisted_collapse_starts_desktop_collapsed() {
    let store = store_with(&[(PreferenceKey::SidebarCollapsed, "true")]);
    let nav = controller(store);
    assert_eq!(nav.state().shell_mode(), ShellMode::DesktopCollapsed);
}

#[test]
fn mobile_always_starts_closed() {
    let store = store_with(&[(PreferenceKey::SidebarCollapsed, "false")]);
    let nav = mobile_controller(store);
    assert_eq!(nav.state().shell_mode(), ShellMode::MobileClosed);
}

#[test]
fn malformed_collapse_flag_is_treated_as_absent() {
    let store = store_with(&[(PreferenceKey::SidebarCollapsed, "TRUE")]);
    let nav = controller(store);
    assert_eq!(nav.state().shell_mode(), ShellMode::DesktopExpanded);
}

#[test]
fn theme_and_login_are_seeded_from_store() {
    let store = store_with(&[
        (PreferenceKey::ColorMode, "dark"),
        (PreferenceKey::LoggedIn, "true"),
    ]);
    let nav = NavigationController::init(store, options().with_require_login(true));
    assert_eq!(nav.state().customization.color_mode, ColorModeOption::Dark);
    assert!(!nav.state().session.needs_login());
}

#[test]
fn sidebar_cursor_starts_on_initial_section() {
    let store = store_with(&[(PreferenceKey::ActiveSection, "consumption")]);
    let nav = controller(store);
    assert_eq!(nav.state().interaction.sidebar_cursor, 8);
}

#[test]
fn login_screen_ignores_persisted_session() {
    let store = store_with(&[
        (PreferenceKey::LoggedIn, "true"),
        (PreferenceKey::ActiveSection, "vehicles"),
    ]);
    let mut nav = NavigationController::init(store, options().with_login_screen());
    assert!(nav.state().session.needs_login());
    assert_eq!(nav.active_section(), SectionId::Vehicles);

    nav.login();
    assert!(!nav.state().session.needs_login());
    assert_eq!(
        nav.store().get(PreferenceKey::LoggedIn).as_deref(),
        Some("true")
    );
}

#[test]
fn default_config_opens_straight_on_the_dashboard() {
    let config = Config::default();
    let nav = NavigationController::init(
        MemoryPreferenceStore::new(),
        options().with_require_login(config.session.require_login),
    );
    assert_eq!(nav.active_section(), SectionId::Dashboard);
    assert!(!nav.state().session.needs_login());
}
