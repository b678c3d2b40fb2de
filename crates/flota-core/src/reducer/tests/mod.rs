use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use super::ShellEffect;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::ShellAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::preferences::PreferenceKey;
pub(super) use crate::state::ColorModeOption;
pub(super) use crate::state::SectionId;
pub(super) use crate::state::ShellMode;
pub(super) use crate::state::ShellOverlay;
pub(super) use crate::state::ShellState;
pub(super) use crate::state::UserProfile;
pub(super) use crate::state::ViewportClass;

mod navigation;
mod overlays;

fn user() -> UserProfile {
    UserProfile {
        name: "Admin Usuario".into(),
        role: "Administrador del Sistema".into(),
        email: "admin@flotaadmin.com".into(),
        phone: "+507 6000-0000".into(),
        department: "Administración".into(),
    }
}

fn state() -> ShellState {
    ShellState::new(user())
}

fn mobile_state() -> ShellState {
    let mut state = state();
    state.viewport = ViewportClass::Mobile;
    state
}

fn run(state: &mut ShellState, action: UserAction) -> Vec<ShellEffect> {
    reduce(state, ShellAction::User(action))
}

fn run_runtime(state: &mut ShellState, action: RuntimeAction) -> Vec<ShellEffect> {
    reduce(state, ShellAction::Runtime(action))
}

fn persisted(effects: &[ShellEffect]) -> Vec<(PreferenceKey, &str)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            ShellEffect::Persist { key, value } => Some((*key, value.as_str())),
            _ => None,
        })
        .collect()
}

fn go(state: &mut ShellState, section: SectionId) {
    let effects = run(state, UserAction::SelectSection(section));
    assert_eq!(state.nav.active_section, section);
    assert_eq!(
        persisted(&effects),
        vec![(PreferenceKey::ActiveSection, section.as_str())]
    );
}
