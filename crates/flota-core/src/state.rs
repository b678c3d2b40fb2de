use std::fmt;
use std::sync::Arc;

use super::views::FeatureViews;

/// Every view the dashboard can show. The set is closed: anything that does
/// not parse into one of these falls back to [`SectionId::Dashboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Dashboard,
    Vehicles,
    VehicleDetails,
    VehicleEdit,
    Maintenance,
    Mileage,
    Consumption,
    Settings,
    Profile,
    Damages,
    Tickets,
    Alerts,
    Revisions,
    Analytics,
    Departments,
}

impl SectionId {
    pub const ALL: [SectionId; 15] = [
        Self::Dashboard,
        Self::Vehicles,
        Self::VehicleDetails,
        Self::VehicleEdit,
        Self::Maintenance,
        Self::Mileage,
        Self::Consumption,
        Self::Settings,
        Self::Profile,
        Self::Damages,
        Self::Tickets,
        Self::Alerts,
        Self::Revisions,
        Self::Analytics,
        Self::Departments,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Vehicles => "vehicles",
            Self::VehicleDetails => "vehicle-details",
            Self::VehicleEdit => "vehicle-edit",
            Self::Maintenance => "maintenance",
            Self::Mileage => "mileage",
            Self::Consumption => "consumption",
            Self::Settings => "settings",
            Self::Profile => "profile",
            Self::Damages => "damages",
            Self::Tickets => "tickets",
            Self::Alerts => "alerts",
            Self::Revisions => "revisions",
            Self::Analytics => "analytics",
            Self::Departments => "departments",
        }
    }

    /// Exact token match. Tokens are case-sensitive, as in the stored
    /// preference and the route table.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == token)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Vehicles => "Vehículos",
            Self::VehicleDetails => "Detalle de vehículo",
            Self::VehicleEdit => "Editar vehículo",
            Self::Maintenance => "Mantenimientos",
            Self::Mileage => "Kilometrajes",
            Self::Consumption => "Consumo",
            Self::Settings => "Configuración",
            Self::Profile => "Mi Perfil",
            Self::Damages => "Daños",
            Self::Tickets => "Tickets",
            Self::Alerts => "Alertas",
            Self::Revisions => "Revisiones",
            Self::Analytics => "Analíticas",
            Self::Departments => "Departamentos",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    #[default]
    Desktop,
    Mobile,
}

impl ViewportClass {
    pub fn label(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

/// Combined navigation/chrome state per viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMode {
    DesktopExpanded,
    DesktopCollapsed,
    MobileClosed,
    MobileOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorModeOption {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorModeOption {
    pub const ALL: [ColorModeOption; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Claro",
            Self::Dark => "Oscuro",
            Self::System => "Sistema",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
            Self::System => "◐",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    pub fn resolve(self, system_prefers_dark: bool) -> EffectiveColorMode {
        match self {
            Self::Light => EffectiveColorMode::Light,
            Self::Dark => EffectiveColorMode::Dark,
            Self::System if system_prefers_dark => EffectiveColorMode::Dark,
            Self::System => EffectiveColorMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveColorMode {
    Light,
    Dark,
}

/// Read-only identity shown in the top bar, sidebar and profile view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: Arc<str>,
    pub role: Arc<str>,
    pub email: Arc<str>,
    pub phone: Arc<str>,
    pub department: Arc<str>,
}

impl UserProfile {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn short_role(&self) -> &str {
        self.role.split_whitespace().next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub active_section: SectionId,
    pub sidebar_collapsed: bool,
    pub mobile_menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShellOverlay {
    #[default]
    None,
    UserMenu {
        selected: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub show_password: bool,
}

impl LoginForm {
    pub fn masked_password(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub logged_in: bool,
    /// When false the login screen is never shown.
    pub require_login: bool,
    pub login: LoginForm,
}

impl SessionState {
    pub fn needs_login(&self) -> bool {
        self.require_login && !self.logged_in
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShellInteraction {
    pub overlay: ShellOverlay,
    pub sidebar_cursor: usize,
    pub search_focus: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCustomization {
    pub color_mode: ColorModeOption,
}

#[derive(Debug, Clone)]
pub struct ShellState {
    pub nav: NavigationState,
    pub viewport: ViewportClass,
    pub customization: ShellCustomization,
    pub session: SessionState,
    pub interaction: ShellInteraction,
    pub views: FeatureViews,
    pub user: UserProfile,
}

impl ShellState {
    pub fn new(user: UserProfile) -> Self {
        Self {
            nav: NavigationState::default(),
            viewport: ViewportClass::Desktop,
            customization: ShellCustomization::default(),
            session: SessionState::default(),
            interaction: ShellInteraction::default(),
            views: FeatureViews::default(),
            user,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport == ViewportClass::Mobile
    }

    pub fn shell_mode(&self) -> ShellMode {
        match (self.viewport, self.nav.sidebar_collapsed, self.nav.mobile_menu_open) {
            (ViewportClass::Desktop, false, _) => ShellMode::DesktopExpanded,
            (ViewportClass::Desktop, true, _) => ShellMode::DesktopCollapsed,
            (ViewportClass::Mobile, _, false) => ShellMode::MobileClosed,
            (ViewportClass::Mobile, _, true) => ShellMode::MobileOpen,
        }
    }

    pub fn sidebar_visible(&self) -> bool {
        matches!(
            self.shell_mode(),
            ShellMode::DesktopExpanded | ShellMode::MobileOpen
        )
    }

    pub fn active_section(&self) -> SectionId {
        self.nav.active_section
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            name: "Admin Usuario".into(),
            role: "Administrador del Sistema".into(),
            email: "admin@flotaadmin.com".into(),
            phone: "+507 6000-0000".into(),
            department: "Administración".into(),
        }
    }

    #[test]
    fn every_section_token_parses_back() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::parse(section.as_str()), Some(section));
        }
    }

    #[test]
    fn unknown_and_miscased_tokens_do_not_parse() {
        assert_eq!(SectionId::parse("fleet"), None);
        assert_eq!(SectionId::parse(""), None);
        assert_eq!(SectionId::parse("Vehicles"), None);
        assert_eq!(SectionId::parse(" vehicles"), None);
    }

    #[test]
    fn color_mode_cycles_through_all_options() {
        let mut mode = ColorModeOption::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, ColorModeOption::Light);
        assert_eq!(seen, ColorModeOption::ALL.to_vec());
    }

    #[test]
    fn system_color_mode_follows_host_preference() {
        assert_eq!(
            ColorModeOption::System.resolve(true),
            EffectiveColorMode::Dark
        );
        assert_eq!(
            ColorModeOption::System.resolve(false),
            EffectiveColorMode::Light
        );
        assert_eq!(ColorModeOption::Light.resolve(true), EffectiveColorMode::Light);
    }

    #[test]
    fn shell_mode_is_derived_per_viewport() {
        let mut state = ShellState::new(user());
        assert_eq!(state.shell_mode(), ShellMode::DesktopExpanded);

        state.nav.sidebar_collapsed = true;
        assert_eq!(state.shell_mode(), ShellMode::DesktopCollapsed);
        assert!(!state.sidebar_visible());

        state.viewport = ViewportClass::Mobile;
        assert_eq!(state.shell_mode(), ShellMode::MobileClosed);

        state.nav.mobile_menu_open = true;
        assert_eq!(state.shell_mode(), ShellMode::MobileOpen);
        assert!(state.sidebar_visible());
    }

    #[test]
    fn user_profile_helpers() {
        let user = user();
        assert_eq!(user.initials(), "AU");
        assert_eq!(user.short_role(), "Administrador");
    }
}
