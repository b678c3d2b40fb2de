pub(super) use super::InitOptions;
pub(super) use super::InitialSectionSource;
pub(super) use super::NavigationController;
pub(super) use crate::actions::ShellAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::config::Config;
pub(super) use crate::preferences::FilePreferenceStore;
pub(super) use crate::preferences::MemoryPreferenceStore;
pub(super) use crate::preferences::PreferenceKey;
pub(super) use crate::preferences::PreferenceStore;
pub(super) use crate::reducer::ShellEffect;
pub(super) use crate::state::ColorModeOption;
pub(super) use crate::state::SectionId;
pub(super) use crate::state::ShellMode;
pub(super) use crate::state::UserProfile;
pub(super) use crate::state::ViewportClass;

mod init;
mod persistence;

fn user() -> UserProfile {
    UserProfile {
        name: "Admin Usuario".into(),
        role: "Administrador del Sistema".into(),
        email: "admin@flotaadmin.com".into(),
        phone: "+507 6000-0000".into(),
        department: "Administración".into(),
    }
}

fn options() -> InitOptions {
    InitOptions::new(user())
}

fn controller(store: MemoryPreferenceStore) -> NavigationController<MemoryPreferenceStore> {
    NavigationController::init(store, options())
}

fn mobile_controller(store: MemoryPreferenceStore) -> NavigationController<MemoryPreferenceStore> {
    NavigationController::init(store, options().with_viewport(ViewportClass::Mobile))
}

fn store_with(entries: &[(PreferenceKey, &str)]) -> MemoryPreferenceStore {
    let mut store = MemoryPreferenceStore::new();
    for (key, value) in entries {
        store.set(*key, value);
    }
    store
}

/// Memory store that also keeps every write in order.
#[derive(Debug, Default)]
struct RecordingStore {
    inner: MemoryPreferenceStore,
    writes: Vec<(PreferenceKey, String)>,
}

impl PreferenceStore for RecordingStore {
    fn get(&self, key: PreferenceKey) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: PreferenceKey, value: &str) {
        self.writes.push((key, value.to_string()));
        self.inner.set(key, value);
    }
}
