//! The navigation controller: owns the authoritative [`ShellState`] and is the
//! only writer to the [`PreferenceStore`].
//!
//! Every change goes through [`NavigationController::dispatch`], which runs
//! the reducer and then applies its `Persist` effects, so a store write always
//! follows the in-memory update it records.

use super::actions::RuntimeAction;
use super::actions::ShellAction;
use super::actions::UserAction;
use super::preferences::PreferenceSnapshot;
use super::preferences::PreferenceStore;
use super::reducer::reduce;
use super::reducer::ShellEffect;
use super::registry::nav_index_of;
use super::state::ColorModeOption;
use super::state::NavigationState;
use super::state::SectionId;
use super::state::ShellState;
use super::state::UserProfile;
use super::state::ViewportClass;

#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Section requested by the embedding context (deep link or flag). An
    /// unknown token is skipped in favour of the persisted section.
    pub explicit_section: Option<String>,
    pub viewport: ViewportClass,
    pub user: UserProfile,
    pub require_login: bool,
    /// Open on the login screen even when a session was persisted.
    pub login_screen: bool,
}

impl InitOptions {
    pub fn new(user: UserProfile) -> Self {
        Self {
            explicit_section: None,
            viewport: ViewportClass::Desktop,
            user,
            require_login: false,
            login_screen: false,
        }
    }

    pub fn with_explicit_section(mut self, token: impl Into<String>) -> Self {
        self.explicit_section = Some(token.into());
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportClass) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_require_login(mut self, require_login: bool) -> Self {
        self.require_login = require_login;
        self
    }

    pub fn with_login_screen(mut self) -> Self {
        self.login_screen = true;
        self
    }
}

/// Where the initial section came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialSectionSource {
    Explicit,
    Persisted,
    Default,
}

#[derive(Debug)]
pub struct NavigationController<S: PreferenceStore> {
    store: S,
    state: ShellState,
    initial_source: InitialSectionSource,
}

impl<S: PreferenceStore> NavigationController<S> {
    /// Reads the store once and seeds the shell state from it. Nothing is
    /// written back until the first user-driven change.
    pub fn init(store: S, options: InitOptions) -> Self {
        let snapshot = PreferenceSnapshot::read(&store);
        let explicit = options.explicit_section.as_deref().and_then(|token| {
            let parsed = SectionId::parse(token);
            if parsed.is_none() {
                tracing::debug!(token, "ignoring unknown initial section");
            }
            parsed
        });
        let (active_section, initial_source) = match (explicit, snapshot.active_section) {
            (Some(section), _) => (section, InitialSectionSource::Explicit),
            (None, Some(section)) => (section, InitialSectionSource::Persisted),
            (None, None) => (SectionId::default(), InitialSectionSource::Default),
        };

        let mut state = ShellState::new(options.user);
        state.nav = NavigationState {
            active_section,
            sidebar_collapsed: snapshot.sidebar_collapsed,
            mobile_menu_open: false,
        };
        state.viewport = options.viewport;
        state.customization.color_mode = snapshot.color_mode;
        state.session.logged_in = snapshot.logged_in && !options.login_screen;
        state.session.require_login = options.require_login || options.login_screen;
        state.interaction.sidebar_cursor = nav_index_of(active_section).unwrap_or(0);

        tracing::info!(
            section = active_section.as_str(),
            source = ?initial_source,
            collapsed = snapshot.sidebar_collapsed,
            viewport = options.viewport.label(),
            "navigation initialised"
        );
        Self {
            store,
            state,
            initial_source,
        }
    }

    pub fn dispatch(&mut self, action: ShellAction) -> Vec<ShellEffect> {
        let effects = reduce(&mut self.state, action);
        let mut remaining = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                ShellEffect::Persist { key, value } => {
                    tracing::debug!(key = key.storage_key(), value = %value, "persist preference");
                    self.store.set(key, &value);
                }
                other => remaining.push(other),
            }
        }
        remaining
    }

    fn user(&mut self, action: UserAction) -> Vec<ShellEffect> {
        self.dispatch(ShellAction::User(action))
    }

    /// Returns whether `token` named a known section.
    pub fn navigate_to(&mut self, token: &str) -> bool {
        if SectionId::parse(token).is_none() {
            tracing::debug!(token, "ignoring navigation to unknown section");
            return false;
        }
        self.user(UserAction::NavigateTo(token.to_string()));
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.user(UserAction::ToggleSidebar);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.user(UserAction::ToggleMobileMenu);
    }

    pub fn close_mobile_menu(&mut self) {
        self.user(UserAction::CloseMobileMenu);
    }

    pub fn set_viewport(&mut self, viewport: ViewportClass) {
        self.dispatch(ShellAction::Runtime(RuntimeAction::ViewportChanged(
            viewport,
        )));
    }

    pub fn set_color_mode(&mut self, mode: ColorModeOption) {
        self.user(UserAction::SetColorMode(mode));
    }

    pub fn login(&mut self) {
        self.user(UserAction::Login);
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn active_section(&self) -> SectionId {
        self.state.nav.active_section
    }

    pub fn initial_source(&self) -> InitialSectionSource {
        self.initial_source
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Ends the controller's lifetime and hands the store back.
    pub fn dispose(self) -> S {
        tracing::debug!(section = self.state.nav.active_section.as_str(), "navigation disposed");
        self.into_store()
    }
}

#[cfg(test)]
mod tests;
