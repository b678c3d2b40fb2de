use super::state::ColorModeOption;
use super::state::SectionId;
use super::state::ViewportClass;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Raw token from a link or the command line; unknown tokens are ignored.
    NavigateTo(String),
    SelectSection(SectionId),
    ToggleSidebar,
    ToggleMobileMenu,
    CloseMobileMenu,
    /// The top bar's menu button: drawer on mobile, collapse on desktop.
    MenuButton,
    SidebarMoveUp,
    SidebarMoveDown,
    SidebarActivate,
    SetColorMode(ColorModeOption),
    CycleColorMode,
    OpenUserMenu,
    UserMenuMoveUp,
    UserMenuMoveDown,
    UserMenuSubmit,
    CloseOverlay,
    Login,
    Logout,
    LoginInput(char),
    LoginBackspace,
    LoginNextField,
    LoginToggleShowPassword,
    FocusSearch,
    BlurSearch,
    SearchInput(char),
    SearchBackspace,
    CyclePrimaryFilter,
    CycleSecondaryFilter,
    ToggleViewFlag,
    NextPage,
    PrevPage,
    NextSettingsTab,
    VehicleCursorUp,
    VehicleCursorDown,
    OpenVehicleDetails,
    EditVehicle,
    VehicleBack,
    EditFieldNext,
    EditFieldPrev,
    EditInput(char),
    EditBackspace,
    SaveVehicleEdit,
    DismissNotice,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeAction {
    ViewportChanged(ViewportClass),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuCommand {
    OpenSection(SectionId),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserMenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub command: UserMenuCommand,
}

pub const USER_MENU: [UserMenuItem; 3] = [
    UserMenuItem {
        label: "Mi Perfil",
        icon: "👤",
        command: UserMenuCommand::OpenSection(SectionId::Profile),
    },
    UserMenuItem {
        label: "Configuración",
        icon: "⚙️",
        command: UserMenuCommand::OpenSection(SectionId::Settings),
    },
    UserMenuItem {
        label: "Cerrar Sesión",
        icon: "🚪",
        command: UserMenuCommand::Logout,
    },
];
