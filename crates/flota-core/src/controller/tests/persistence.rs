use super::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn navigation_survives_a_restart_with_the_same_store() {
    let nav = {
        let mut nav = controller(MemoryPreferenceStore::new());
        nav.navigate_to("vehicles");
        nav
    };
    let store = nav.dispose();

    let restarted = controller(store);
    assert_eq!(restarted.active_section(), SectionId::Vehicles);
    assert_eq!(
        restarted.initial_source(),
        InitialSectionSource::Persisted
    );
}

#[test]
fn file_backed_session_round_trip() {
    let dir = tempdir().expect("tmpdir");
    let path = dir.path().join("preferences.json");

    {
        let store = FilePreferenceStore::open(&path).expect("open");
        let mut nav = NavigationController::init(store, options());
        nav.navigate_to("maintenance");
        nav.toggle_sidebar();
        nav.set_color_mode(ColorModeOption::Dark);
        nav.dispose();
    }

    let store = FilePreferenceStore::open(&path).expect("reopen");
    let nav = NavigationController::init(store, options());
    assert_eq!(nav.active_section(), SectionId::Maintenance);
    assert_eq!(nav.state().shell_mode(), ShellMode::DesktopCollapsed);
    assert_eq!(nav.state().customization.color_mode, ColorModeOption::Dark);
}

#[test]
fn degraded_store_keeps_the_session_working() {
    let dir = tempdir().expect("tmpdir");
    let path = dir.path().join("preferences.json");
    let store = FilePreferenceStore::open(&path).expect("open");
    std::fs::create_dir(&path).expect("squat on the file path");

    let mut nav = NavigationController::init(store, options());
    nav.navigate_to("alerts");
    assert!(nav.store().is_degraded());
    assert_eq!(nav.active_section(), SectionId::Alerts);
    assert_eq!(
        nav.store().get(PreferenceKey::ActiveSection).as_deref(),
        Some("alerts")
    );

    nav.navigate_to("tickets");
    assert_eq!(
        nav.into_store().get(PreferenceKey::ActiveSection).as_deref(),
        Some("tickets")
    );
}
