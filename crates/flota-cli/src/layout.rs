//! Screen geometry for the shell, shared by rendering and mouse hit-testing.

use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;

use flota_core::config::LayoutConfig;
use flota_core::registry::NAV_MENU;
use flota_core::state::ShellMode;
use flota_core::state::ShellState;

pub const TOP_BAR_HEIGHT: u16 = 3;
const SIDEBAR_BRAND_HEIGHT: u16 = 2;
const SIDEBAR_USER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub top_bar: Rect,
    pub sidebar: Option<Rect>,
    pub content: Rect,
    /// Mobile drawer: the sidebar is drawn on top of `content`.
    pub sidebar_overlays_content: bool,
}

pub fn shell_layout(area: Rect, state: &ShellState, config: &LayoutConfig) -> ShellLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TOP_BAR_HEIGHT), Constraint::Min(0)])
        .split(area);
    let (top_bar, body) = (rows[0], rows[1]);

    match state.shell_mode() {
        ShellMode::DesktopExpanded => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(config.sidebar_width),
                    Constraint::Min(0),
                ])
                .split(body);
            ShellLayout {
                top_bar,
                sidebar: Some(cols[0]),
                content: cols[1],
                sidebar_overlays_content: false,
            }
        }
        ShellMode::DesktopCollapsed | ShellMode::MobileClosed => ShellLayout {
            top_bar,
            sidebar: None,
            content: body,
            sidebar_overlays_content: false,
        },
        ShellMode::MobileOpen => ShellLayout {
            top_bar,
            sidebar: Some(Rect {
                width: config.sidebar_width.min(body.width),
                ..body
            }),
            content: body,
            sidebar_overlays_content: true,
        },
    }
}

/// Regions inside the sidebar's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarRegions {
    pub brand: Rect,
    pub user: Rect,
    pub entries: Rect,
}

pub fn sidebar_regions(sidebar: Rect) -> SidebarRegions {
    let inner = Rect {
        x: sidebar.x.saturating_add(1),
        y: sidebar.y.saturating_add(1),
        width: sidebar.width.saturating_sub(2),
        height: sidebar.height.saturating_sub(2),
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SIDEBAR_BRAND_HEIGHT),
            Constraint::Length(SIDEBAR_USER_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);
    SidebarRegions {
        brand: rows[0],
        user: rows[1],
        entries: rows[2],
    }
}

/// The navigation entry under a click, one entry per row.
pub fn sidebar_entry_at(sidebar: Rect, column: u16, row: u16) -> Option<usize> {
    let entries = sidebar_regions(sidebar).entries;
    let inside = column >= entries.x
        && column < entries.x + entries.width
        && row >= entries.y
        && row < entries.y + entries.height;
    if !inside {
        return None;
    }
    let idx = usize::from(row - entries.y);
    (idx < NAV_MENU.len()).then_some(idx)
}

/// The menu button occupies the first cells of the top bar.
pub fn menu_button_hit(top_bar: Rect, column: u16, row: u16) -> bool {
    row >= top_bar.y && row < top_bar.y + top_bar.height && column < top_bar.x + 5
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use flota_core::state::UserProfile;
    use flota_core::state::ViewportClass;

    use super::*;

    fn state(viewport: ViewportClass, collapsed: bool, open: bool) -> ShellState {
        let mut state = ShellState::new(UserProfile {
            name: "Admin Usuario".into(),
            role: "Administrador del Sistema".into(),
            email: "admin@flotaadmin.com".into(),
            phone: "+507 6000-0000".into(),
            department: "Administración".into(),
        });
        state.viewport = viewport;
        state.nav.sidebar_collapsed = collapsed;
        state.nav.mobile_menu_open = open;
        state
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    #[test]
    fn desktop_expanded_splits_sidebar_and_content() {
        let layout = shell_layout(
            AREA,
            &state(ViewportClass::Desktop, false, false),
            &LayoutConfig::default(),
        );
        assert_eq!(layout.sidebar, Some(Rect::new(0, 3, 32, 37)));
        assert_eq!(layout.content, Rect::new(32, 3, 88, 37));
        assert!(!layout.sidebar_overlays_content);
    }

    #[test]
    fn collapsed_and_closed_have_no_sidebar() {
        for state in [
            state(ViewportClass::Desktop, true, false),
            state(ViewportClass::Mobile, false, false),
            state(ViewportClass::Mobile, true, false),
        ] {
            let layout = shell_layout(AREA, &state, &LayoutConfig::default());
            assert_eq!(layout.sidebar, None);
            assert_eq!(layout.content, Rect::new(0, 3, 120, 37));
        }
    }

    #[test]
    fn mobile_open_draws_over_content() {
        let narrow = Rect::new(0, 0, 24, 30);
        let layout = shell_layout(
            narrow,
            &state(ViewportClass::Mobile, false, true),
            &LayoutConfig::default(),
        );
        assert!(layout.sidebar_overlays_content);
        assert_eq!(layout.sidebar, Some(Rect::new(0, 3, 24, 27)));
        assert_eq!(layout.content, Rect::new(0, 3, 24, 27));
    }

    #[test]
    fn clicks_map_to_menu_rows() {
        let sidebar = Rect::new(0, 3, 32, 37);
        let entries = sidebar_regions(sidebar).entries;
        assert_eq!(entries.y, 3 + 1 + SIDEBAR_BRAND_HEIGHT + SIDEBAR_USER_HEIGHT);

        assert_eq!(sidebar_entry_at(sidebar, 2, entries.y), Some(0));
        assert_eq!(sidebar_entry_at(sidebar, 2, entries.y + 11), Some(11));
        assert_eq!(sidebar_entry_at(sidebar, 2, entries.y + 12), None);
        assert_eq!(sidebar_entry_at(sidebar, 2, entries.y - 1), None);
        assert_eq!(sidebar_entry_at(sidebar, 40, entries.y), None);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        assert_eq!(centered_rect(20, 10, AREA), Rect::new(50, 15, 20, 10));
        assert_eq!(centered_rect(200, 80, AREA), AREA);
    }
}
