use super::actions::RuntimeAction;
use super::actions::ShellAction;
use super::actions::UserAction;
use super::actions::UserMenuCommand;
use super::actions::USER_MENU;
use super::fleet::paginate;
use super::fleet::VEHICLES;
use super::fleet::VEHICLES_PER_PAGE;
use super::preferences::encode_sidebar_collapsed;
use super::preferences::PreferenceKey;
use super::preferences::LOGGED_IN;
use super::registry::nav_index_of;
use super::registry::NAV_MENU;
use super::state::ColorModeOption;
use super::state::LoginField;
use super::state::SectionId;
use super::state::ShellOverlay;
use super::state::ShellState;
use super::state::ViewportClass;
use super::views::ListView;
use super::views::Notice;
use super::views::VehicleEditForm;
use super::views::VehicleField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    /// Write a preference. Applied by the controller after the state update.
    Persist { key: PreferenceKey, value: String },
    RequestFrame,
    Quit,
}

impl ShellEffect {
    fn persist(key: PreferenceKey, value: impl Into<String>) -> Self {
        Self::Persist {
            key,
            value: value.into(),
        }
    }
}

pub fn reduce(state: &mut ShellState, action: ShellAction) -> Vec<ShellEffect> {
    match action {
        ShellAction::User(user) => reduce_user(state, user),
        ShellAction::Runtime(runtime) => reduce_runtime(state, runtime),
    }
}

fn reduce_user(state: &mut ShellState, action: UserAction) -> Vec<ShellEffect> {
    match action {
        UserAction::NavigateTo(token) => match SectionId::parse(&token) {
            Some(section) => navigate(state, section),
            None => {
                tracing::debug!(token = %token, "ignoring navigation to unknown section");
                Vec::new()
            }
        },
        UserAction::SelectSection(section) => navigate(state, section),
        UserAction::ToggleSidebar => toggle_sidebar(state),
        UserAction::ToggleMobileMenu => toggle_mobile_menu(state),
        UserAction::CloseMobileMenu => {
            if state.nav.mobile_menu_open {
                state.nav.mobile_menu_open = false;
                return vec![ShellEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::MenuButton => match state.viewport {
            ViewportClass::Mobile => toggle_mobile_menu(state),
            ViewportClass::Desktop => toggle_sidebar(state),
        },
        UserAction::SidebarMoveUp => {
            state.interaction.sidebar_cursor = state.interaction.sidebar_cursor.saturating_sub(1);
            vec![ShellEffect::RequestFrame]
        }
        UserAction::SidebarMoveDown => {
            let last = NAV_MENU.len() - 1;
            state.interaction.sidebar_cursor = (state.interaction.sidebar_cursor + 1).min(last);
            vec![ShellEffect::RequestFrame]
        }
        UserAction::SidebarActivate => {
            let Some(entry) = NAV_MENU.get(state.interaction.sidebar_cursor) else {
                return Vec::new();
            };
            navigate(state, entry.section)
        }
        UserAction::SetColorMode(mode) => set_color_mode(state, mode),
        UserAction::CycleColorMode => {
            let next = state.customization.color_mode.next();
            set_color_mode(state, next)
        }
        UserAction::OpenUserMenu => {
            state.interaction.overlay = match state.interaction.overlay {
                ShellOverlay::UserMenu { .. } => ShellOverlay::None,
                ShellOverlay::None => ShellOverlay::UserMenu { selected: 0 },
            };
            vec![ShellEffect::RequestFrame]
        }
        UserAction::UserMenuMoveUp => {
            if let ShellOverlay::UserMenu { selected } = &mut state.interaction.overlay {
                *selected = selected.saturating_sub(1);
                return vec![ShellEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::UserMenuMoveDown => {
            if let ShellOverlay::UserMenu { selected } = &mut state.interaction.overlay {
                *selected = (*selected + 1).min(USER_MENU.len() - 1);
                return vec![ShellEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::UserMenuSubmit => {
            let ShellOverlay::UserMenu { selected } = state.interaction.overlay else {
                return Vec::new();
            };
            state.interaction.overlay = ShellOverlay::None;
            match USER_MENU.get(selected).map(|item| item.command) {
                Some(UserMenuCommand::OpenSection(section)) => navigate(state, section),
                Some(UserMenuCommand::Logout) => {
                    let mut effects = reduce_user(state, UserAction::Logout);
                    effects.push(ShellEffect::RequestFrame);
                    effects
                }
                None => vec![ShellEffect::RequestFrame],
            }
        }
        UserAction::CloseOverlay => {
            if state.interaction.overlay != ShellOverlay::None {
                state.interaction.overlay = ShellOverlay::None;
            } else if state.interaction.search_focus {
                state.interaction.search_focus = false;
            } else if state.nav.mobile_menu_open {
                state.nav.mobile_menu_open = false;
            } else if state.views.notice.is_some() {
                state.views.notice = None;
            } else {
                return Vec::new();
            }
            vec![ShellEffect::RequestFrame]
        }
        UserAction::Login => {
            if state.session.logged_in {
                return Vec::new();
            }
            state.session.logged_in = true;
            state.session.login.password.clear();
            tracing::info!(user = %state.session.login.username, "session started");
            vec![
                ShellEffect::persist(PreferenceKey::LoggedIn, LOGGED_IN),
                ShellEffect::RequestFrame,
            ]
        }
        UserAction::Logout => {
            // The menu entry exists but ending a session is not supported;
            // the persisted flag is left untouched.
            tracing::info!("logout requested; session stays active");
            Vec::new()
        }
        UserAction::LoginInput(ch) => {
            let form = &mut state.session.login;
            match form.focus {
                LoginField::Username => form.username.push(ch),
                LoginField::Password => form.password.push(ch),
            }
            vec![ShellEffect::RequestFrame]
        }
        UserAction::LoginBackspace => {
            let form = &mut state.session.login;
            match form.focus {
                LoginField::Username => form.username.pop(),
                LoginField::Password => form.password.pop(),
            };
            vec![ShellEffect::RequestFrame]
        }
        UserAction::LoginNextField => {
            let form = &mut state.session.login;
            form.focus = match form.focus {
                LoginField::Username => LoginField::Password,
                LoginField::Password => LoginField::Username,
            };
            vec![ShellEffect::RequestFrame]
        }
        UserAction::LoginToggleShowPassword => {
            state.session.login.show_password = !state.session.login.show_password;
            vec![ShellEffect::RequestFrame]
        }
        UserAction::FocusSearch => {
            if state.views.list_mut(state.nav.active_section).is_none() {
                return Vec::new();
            }
            state.interaction.search_focus = true;
            vec![ShellEffect::RequestFrame]
        }
        UserAction::BlurSearch => {
            state.interaction.search_focus = false;
            vec![ShellEffect::RequestFrame]
        }
        UserAction::SearchInput(ch) => edit_list(state, |list| {
            list.search_mut().push(ch);
            list.reset_page();
            true
        }),
        UserAction::SearchBackspace => edit_list(state, |list| {
            let changed = list.search_mut().pop().is_some();
            if changed {
                list.reset_page();
            }
            changed
        }),
        UserAction::CyclePrimaryFilter => edit_list(state, |list| {
            list.cycle_primary_filter();
            list.reset_page();
            true
        }),
        UserAction::CycleSecondaryFilter => edit_list(state, |list| {
            list.cycle_secondary_filter();
            list.reset_page();
            true
        }),
        UserAction::ToggleViewFlag => edit_list(state, |list| {
            list.toggle_flag();
            true
        }),
        UserAction::NextPage => edit_list(state, |list| list.next_page()),
        UserAction::PrevPage => edit_list(state, |list| list.prev_page()),
        UserAction::NextSettingsTab => {
            if state.nav.active_section != SectionId::Settings {
                return Vec::new();
            }
            state.views.settings.tab = state.views.settings.tab.next();
            vec![ShellEffect::RequestFrame]
        }
        UserAction::VehicleCursorUp => {
            if state.nav.active_section != SectionId::Vehicles {
                return Vec::new();
            }
            let view = &mut state.views.vehicles;
            view.cursor = view.cursor.saturating_sub(1);
            vec![ShellEffect::RequestFrame]
        }
        UserAction::VehicleCursorDown => {
            if state.nav.active_section != SectionId::Vehicles {
                return Vec::new();
            }
            let view = &mut state.views.vehicles;
            let visible = view.query.apply(VEHICLES);
            let on_page = paginate(&visible, view.page, VEHICLES_PER_PAGE).len();
            if view.cursor + 1 < on_page {
                view.cursor += 1;
            }
            vec![ShellEffect::RequestFrame]
        }
        UserAction::OpenVehicleDetails => {
            if state.nav.active_section != SectionId::Vehicles {
                return Vec::new();
            }
            navigate(state, SectionId::VehicleDetails)
        }
        UserAction::EditVehicle => {
            if state.nav.active_section != SectionId::VehicleDetails {
                return Vec::new();
            }
            navigate(state, SectionId::VehicleEdit)
        }
        UserAction::VehicleBack => match state.nav.active_section {
            SectionId::VehicleDetails => navigate(state, SectionId::Vehicles),
            SectionId::VehicleEdit => navigate(state, SectionId::VehicleDetails),
            _ => Vec::new(),
        },
        UserAction::EditFieldNext => edit_form(state, |form| {
            form.focus_next();
            true
        }),
        UserAction::EditFieldPrev => edit_form(state, |form| {
            form.focus_prev();
            true
        }),
        UserAction::EditInput(ch) => edit_form(state, |form| form.input(ch)),
        UserAction::EditBackspace => edit_form(state, |form| form.backspace()),
        UserAction::SaveVehicleEdit => {
            if state.nav.active_section != SectionId::VehicleEdit {
                return Vec::new();
            }
            let plate = state
                .views
                .vehicle_edit
                .value(VehicleField::Plate)
                .to_string();
            tracing::info!(plate = %plate, "vehicle edit saved");
            let effects = navigate(state, SectionId::VehicleDetails);
            state.views.notice = Some(Notice {
                title: "Vehículo actualizado".to_string(),
                detail: format!("Los datos del vehículo {plate} han sido guardados exitosamente."),
            });
            effects
        }
        UserAction::DismissNotice => {
            if state.views.notice.take().is_some() {
                return vec![ShellEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::Quit => vec![ShellEffect::Quit],
    }
}

fn reduce_runtime(state: &mut ShellState, action: RuntimeAction) -> Vec<ShellEffect> {
    match action {
        RuntimeAction::ViewportChanged(class) => {
            if state.viewport == class {
                return Vec::new();
            }
            state.viewport = class;
            // Crossing the breakpoint either way lands on a closed drawer;
            // the desktop collapse flag is kept as it was.
            state.nav.mobile_menu_open = false;
            tracing::debug!(viewport = class.label(), "viewport changed");
            vec![ShellEffect::RequestFrame]
        }
    }
}

/// Activates `section`, persists it and closes the mobile drawer. Running it
/// for the already-active section repeats the same steps.
fn navigate(state: &mut ShellState, section: SectionId) -> Vec<ShellEffect> {
    let previous = state.nav.active_section;
    state.nav.active_section = section;
    if state.is_mobile() {
        state.nav.mobile_menu_open = false;
    }
    if previous != section {
        state.views.reset_section(section);
        state.views.notice = None;
        state.interaction.search_focus = false;
    }
    if let Some(idx) = nav_index_of(section) {
        state.interaction.sidebar_cursor = idx;
    }
    tracing::info!(from = previous.as_str(), to = section.as_str(), "navigate");
    vec![
        ShellEffect::persist(PreferenceKey::ActiveSection, section.as_str()),
        ShellEffect::RequestFrame,
    ]
}

fn toggle_sidebar(state: &mut ShellState) -> Vec<ShellEffect> {
    if state.is_mobile() {
        return Vec::new();
    }
    state.nav.sidebar_collapsed = !state.nav.sidebar_collapsed;
    tracing::info!(collapsed = state.nav.sidebar_collapsed, "sidebar toggled");
    vec![
        ShellEffect::persist(
            PreferenceKey::SidebarCollapsed,
            encode_sidebar_collapsed(state.nav.sidebar_collapsed),
        ),
        ShellEffect::RequestFrame,
    ]
}

fn toggle_mobile_menu(state: &mut ShellState) -> Vec<ShellEffect> {
    if !state.is_mobile() {
        return Vec::new();
    }
    state.nav.mobile_menu_open = !state.nav.mobile_menu_open;
    if state.nav.mobile_menu_open {
        if let Some(idx) = nav_index_of(state.nav.active_section) {
            state.interaction.sidebar_cursor = idx;
        }
    }
    vec![ShellEffect::RequestFrame]
}

fn set_color_mode(state: &mut ShellState, mode: ColorModeOption) -> Vec<ShellEffect> {
    state.customization.color_mode = mode;
    tracing::info!(mode = mode.as_str(), "color mode set");
    vec![
        ShellEffect::persist(PreferenceKey::ColorMode, mode.as_str()),
        ShellEffect::RequestFrame,
    ]
}

fn edit_list(
    state: &mut ShellState,
    apply: impl FnOnce(&mut dyn ListView) -> bool,
) -> Vec<ShellEffect> {
    let section = state.nav.active_section;
    let Some(list) = state.views.list_mut(section) else {
        return Vec::new();
    };
    if !apply(list) {
        return Vec::new();
    }
    if section == SectionId::Vehicles {
        let view = &mut state.views.vehicles;
        let visible = view.query.apply(VEHICLES);
        let on_page = paginate(&visible, view.page, VEHICLES_PER_PAGE).len();
        view.cursor = view.cursor.min(on_page.saturating_sub(1));
    }
    vec![ShellEffect::RequestFrame]
}

fn edit_form(
    state: &mut ShellState,
    apply: impl FnOnce(&mut VehicleEditForm) -> bool,
) -> Vec<ShellEffect> {
    if state.nav.active_section != SectionId::VehicleEdit {
        return Vec::new();
    }
    if apply(&mut state.views.vehicle_edit) {
        vec![ShellEffect::RequestFrame]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests;
