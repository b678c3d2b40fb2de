use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};

use flota_core::actions::{ShellAction, UserAction, USER_MENU};
use flota_core::config::LayoutConfig;
use flota_core::controller::NavigationController;
use flota_core::preferences::PreferenceStore;
use flota_core::reducer::ShellEffect;
use flota_core::registry::NAV_MENU;
use flota_core::state::{LoginField, SectionId, ShellMode, ShellOverlay, ShellState};
use flota_core::viewport::ResizeDebouncer;

use crate::layout::{
    centered_rect, menu_button_hit, shell_layout, sidebar_entry_at, sidebar_regions,
};
use crate::theme::{palette_for, tone_color, UiPalette};
use crate::views::render_content;

/// Columns at the right edge of the top bar that open the user menu.
const USER_BADGE_WIDTH: u16 = 30;
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Rendering inputs that come from configuration rather than shell state.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    pub layout: LayoutConfig,
    pub system_prefers_dark: bool,
}

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        );
    }
}

pub fn run<S: PreferenceStore>(
    nav: &mut NavigationController<S>,
    settings: &ShellSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    let _guard = TuiGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, nav, settings).map_err(|e| e.into())
}

fn run_app<B: Backend, S: PreferenceStore>(
    terminal: &mut Terminal<B>,
    nav: &mut NavigationController<S>,
    settings: &ShellSettings,
) -> io::Result<()> {
    let size = terminal.size()?;
    let mut debouncer = ResizeDebouncer::new(
        settings.layout.mobile_breakpoint,
        Duration::from_millis(settings.layout.resize_debounce_ms),
        size.width,
    );
    if debouncer.current() != nav.state().viewport {
        nav.set_viewport(debouncer.current());
    }
    let mut needs_frame = true;

    loop {
        if let Some(class) = debouncer.poll(Instant::now()) {
            nav.set_viewport(class);
            needs_frame = true;
        }

        if needs_frame {
            terminal.draw(|f| draw(f, nav.state(), settings))?;
            needs_frame = false;
        }

        let timeout = debouncer
            .time_to_settle(Instant::now())
            .unwrap_or(IDLE_POLL);
        if !event::poll(timeout)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_action(key, nav.state()),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                mouse_action(mouse, nav.state(), area, &settings.layout)
            }
            Event::Resize(width, _) => {
                debouncer.observe(width, Instant::now());
                // Redraw at the new size right away; the shell mode follows
                // once the debounce settles.
                needs_frame = true;
                None
            }
            _ => None,
        };

        let Some(action) = action else {
            continue;
        };
        for effect in nav.dispatch(ShellAction::User(action)) {
            match effect {
                ShellEffect::RequestFrame => needs_frame = true,
                ShellEffect::Quit => return Ok(()),
                ShellEffect::Persist { .. } => {}
            }
        }
    }
}

/// Maps a key press to an action given the current focus: login form, user
/// menu, search box, mobile drawer, vehicle edit form, then global keys.
pub fn key_action(key: KeyEvent, state: &ShellState) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UserAction::Quit);
    }
    if state.session.needs_login() {
        return login_keys(key);
    }
    if let ShellOverlay::UserMenu { .. } = state.interaction.overlay {
        return user_menu_keys(key);
    }
    if state.interaction.search_focus {
        return search_keys(key);
    }
    if state.shell_mode() == ShellMode::MobileOpen {
        if let Some(action) = drawer_keys(key) {
            return Some(action);
        }
    }
    if state.nav.active_section == SectionId::VehicleEdit {
        if let Some(action) = edit_form_keys(key) {
            return Some(action);
        }
    }
    global_keys(key, state)
}

fn login_keys(key: KeyEvent) -> Option<UserAction> {
    match key.code {
        KeyCode::Enter => Some(UserAction::Login),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            Some(UserAction::LoginNextField)
        }
        KeyCode::F(2) => Some(UserAction::LoginToggleShowPassword),
        KeyCode::Backspace => Some(UserAction::LoginBackspace),
        KeyCode::Char(c) => Some(UserAction::LoginInput(c)),
        _ => None,
    }
}

fn user_menu_keys(key: KeyEvent) -> Option<UserAction> {
    match key.code {
        KeyCode::Esc => Some(UserAction::CloseOverlay),
        KeyCode::Char('u') => Some(UserAction::OpenUserMenu),
        KeyCode::Up | KeyCode::Char('k') => Some(UserAction::UserMenuMoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UserAction::UserMenuMoveDown),
        KeyCode::Enter => Some(UserAction::UserMenuSubmit),
        _ => None,
    }
}

fn search_keys(key: KeyEvent) -> Option<UserAction> {
    match key.code {
        KeyCode::Esc => Some(UserAction::CloseOverlay),
        KeyCode::Enter => Some(UserAction::BlurSearch),
        KeyCode::Backspace => Some(UserAction::SearchBackspace),
        KeyCode::Char(c) => Some(UserAction::SearchInput(c)),
        _ => None,
    }
}

fn drawer_keys(key: KeyEvent) -> Option<UserAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UserAction::SidebarMoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UserAction::SidebarMoveDown),
        KeyCode::Enter => Some(UserAction::SidebarActivate),
        KeyCode::Esc => Some(UserAction::CloseMobileMenu),
        _ => None,
    }
}

fn edit_form_keys(key: KeyEvent) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => Some(UserAction::SaveVehicleEdit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(UserAction::EditFieldNext),
        KeyCode::BackTab | KeyCode::Up => Some(UserAction::EditFieldPrev),
        KeyCode::Backspace => Some(UserAction::EditBackspace),
        KeyCode::Esc => Some(UserAction::VehicleBack),
        KeyCode::Char(c) => Some(UserAction::EditInput(c)),
        _ => None,
    }
}

fn global_keys(key: KeyEvent, state: &ShellState) -> Option<UserAction> {
    let on_vehicles = state.nav.active_section == SectionId::Vehicles;
    let sidebar = state.sidebar_visible();
    match key.code {
        KeyCode::Char('q') => Some(UserAction::Quit),
        KeyCode::Char('m') => Some(UserAction::MenuButton),
        KeyCode::Esc => Some(UserAction::CloseOverlay),
        KeyCode::Up if sidebar => Some(UserAction::SidebarMoveUp),
        KeyCode::Down if sidebar => Some(UserAction::SidebarMoveDown),
        KeyCode::Enter if sidebar => Some(UserAction::SidebarActivate),
        KeyCode::Up | KeyCode::Char('k') if on_vehicles => Some(UserAction::VehicleCursorUp),
        KeyCode::Down | KeyCode::Char('j') if on_vehicles => Some(UserAction::VehicleCursorDown),
        KeyCode::Enter | KeyCode::Char('o') if on_vehicles => Some(UserAction::OpenVehicleDetails),
        KeyCode::Char('e') => Some(UserAction::EditVehicle),
        KeyCode::Char('b') | KeyCode::Backspace => Some(UserAction::VehicleBack),
        KeyCode::Char('g') => Some(UserAction::SelectSection(SectionId::Dashboard)),
        KeyCode::Char('p') => Some(UserAction::SelectSection(SectionId::Profile)),
        KeyCode::Char('u') => Some(UserAction::OpenUserMenu),
        KeyCode::Char('t') => Some(UserAction::CycleColorMode),
        KeyCode::Char('/') => Some(UserAction::FocusSearch),
        KeyCode::Char('f') => Some(UserAction::CyclePrimaryFilter),
        KeyCode::Char('F') => Some(UserAction::CycleSecondaryFilter),
        KeyCode::Char('v') => Some(UserAction::ToggleViewFlag),
        KeyCode::Char('n') | KeyCode::Right => Some(UserAction::NextPage),
        KeyCode::Char('N') | KeyCode::Left => Some(UserAction::PrevPage),
        KeyCode::Tab => Some(UserAction::NextSettingsTab),
        _ => None,
    }
}

pub fn mouse_action(
    mouse: MouseEvent,
    state: &ShellState,
    area: Rect,
    config: &LayoutConfig,
) -> Option<UserAction> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || state.session.needs_login() {
        return None;
    }
    if state.interaction.overlay != ShellOverlay::None {
        return Some(UserAction::CloseOverlay);
    }
    let layout = shell_layout(area, state, config);
    let (column, row) = (mouse.column, mouse.row);

    if menu_button_hit(layout.top_bar, column, row) {
        return Some(UserAction::MenuButton);
    }
    let top_bar = layout.top_bar;
    if row >= top_bar.y
        && row < top_bar.y + top_bar.height
        && column >= top_bar.x + top_bar.width.saturating_sub(USER_BADGE_WIDTH)
    {
        return Some(UserAction::OpenUserMenu);
    }
    if let Some(sidebar) = layout.sidebar {
        if let Some(idx) = sidebar_entry_at(sidebar, column, row) {
            return Some(UserAction::SelectSection(NAV_MENU[idx].section));
        }
        let in_sidebar = column >= sidebar.x
            && column < sidebar.x + sidebar.width
            && row >= sidebar.y
            && row < sidebar.y + sidebar.height;
        if layout.sidebar_overlays_content && !in_sidebar && row >= layout.content.y {
            return Some(UserAction::CloseMobileMenu);
        }
    }
    None
}

pub fn draw(f: &mut Frame, state: &ShellState, settings: &ShellSettings) {
    let mode = state
        .customization
        .color_mode
        .resolve(settings.system_prefers_dark);
    let palette = palette_for(mode);
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.panel_bg).fg(palette.text)),
        area,
    );

    if state.session.needs_login() {
        render_login(f, area, state, palette);
        return;
    }

    let layout = shell_layout(area, state, &settings.layout);
    render_top_bar(f, layout.top_bar, state, palette);
    render_content(f, layout.content, state, palette);
    if let Some(sidebar) = layout.sidebar {
        if layout.sidebar_overlays_content {
            f.render_widget(Clear, sidebar);
        }
        render_sidebar(f, sidebar, state, palette);
    }
    if let ShellOverlay::UserMenu { selected } = state.interaction.overlay {
        render_user_menu(f, layout.top_bar, area, state, selected, palette);
    }
}

fn menu_glyph(mode: ShellMode) -> &'static str {
    match mode {
        ShellMode::MobileClosed | ShellMode::MobileOpen => "☰",
        ShellMode::DesktopCollapsed => "▶",
        ShellMode::DesktopExpanded => "◀",
    }
}

fn render_top_bar(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(USER_BADGE_WIDTH.saturating_sub(2)),
        ])
        .split(inner);

    let mut left = vec![Span::styled(
        format!(" {} ", menu_glyph(state.shell_mode())),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if !state.is_mobile() {
        left.push(Span::styled(
            " 🚛 FlotaAdmin",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ));
        left.push(Span::styled(" │ ", Style::default().fg(palette.border)));
    }
    left.push(Span::styled(
        state.nav.active_section.label(),
        Style::default().fg(palette.muted),
    ));
    let color_mode = state.customization.color_mode;
    left.push(Span::styled(
        format!("   {} {}", color_mode.icon(), color_mode.label()),
        Style::default().fg(palette.accent_alt),
    ));
    f.render_widget(Paragraph::new(Line::from(left)), cols[0]);

    let user = Line::from(vec![
        Span::styled(
            state.user.name.to_string(),
            Style::default().fg(palette.text),
        ),
        Span::styled(
            format!(" · {} ", state.user.short_role()),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            format!(" {} ", state.user.initials()),
            Style::default()
                .fg(palette.panel_bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(user).alignment(Alignment::Right), cols[1]);
}

fn render_sidebar(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.panel_bg));
    f.render_widget(block, area);
    let regions = sidebar_regions(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "🚛 FlotaAdmin",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Gestión de Flota",
                Style::default().fg(palette.muted),
            )),
        ]),
        regions.brand,
    );

    f.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", state.user.initials()),
                    Style::default()
                        .fg(palette.panel_bg)
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    state.user.name.to_string(),
                    Style::default().fg(palette.text),
                ),
            ]),
            Line::from(Span::styled(
                format!("     {}", state.user.short_role()),
                Style::default().fg(palette.muted),
            )),
        ]),
        regions.user,
    );

    let active = state.nav.active_section;
    let cursor = state.interaction.sidebar_cursor;
    let mut lines: Vec<Line> = NAV_MENU
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_active = entry.section == active;
            let marker = if idx == cursor { "›" } else { " " };
            let style = if is_active {
                Style::default()
                    .fg(palette.accent)
                    .bg(palette.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::styled(format!("{} {}", entry.icon, entry.label), style),
            ];
            if let Some(badge) = entry.badge {
                spans.push(Span::styled(
                    format!(" {}", badge.text),
                    Style::default().fg(tone_color(palette, badge.tone)),
                ));
            }
            Line::from(spans)
        })
        .collect();
    if let Some(entry) = NAV_MENU.get(cursor) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            entry.description,
            Style::default().fg(palette.muted),
        )));
    }
    f.render_widget(Paragraph::new(lines), regions.entries);
}

fn render_user_menu(
    f: &mut Frame,
    top_bar: Rect,
    screen: Rect,
    state: &ShellState,
    selected: usize,
    palette: UiPalette,
) {
    let width = 30.min(screen.width);
    let height = (USER_MENU.len() as u16 + 4).min(screen.height.saturating_sub(top_bar.height));
    let area = Rect {
        x: screen.x + screen.width - width,
        y: top_bar.y + top_bar.height,
        width,
        height,
    };
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.panel_bg))
        .title(Span::styled(
            format!(" {} ", state.user.name),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            state.user.email.to_string(),
            Style::default().fg(palette.muted),
        ))),
        rows[0],
    );

    let items: Vec<ListItem> = USER_MENU
        .iter()
        .map(|item| ListItem::new(format!("{} {}", item.icon, item.label)))
        .collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .bg(palette.selected_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, rows[1], &mut list_state);
}

fn render_login(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let form = &state.session.login;
    let card = centered_rect(52, 17, area);
    f.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.panel_bg));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let field = |label: &'static str, value: String, placeholder: &'static str, focused: bool| {
        let marker = if focused { "▶ " } else { "  " };
        let (text, style) = if value.is_empty() {
            (placeholder.to_string(), Style::default().fg(palette.muted))
        } else {
            (value, Style::default().fg(palette.text))
        };
        let style = if focused {
            style.bg(palette.selected_bg)
        } else {
            style
        };
        vec![
            Line::from(Span::styled(
                format!("  {label}"),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::styled(text, style),
            ]),
        ]
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "🚛 FlotaAdmin",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Sistema de Administración de Flota",
            Style::default().fg(palette.muted),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];
    lines.extend(field(
        "Usuario o Email",
        form.username.clone(),
        "Ingresa tu usuario o email",
        form.focus == LoginField::Username,
    ));
    lines.push(Line::from(""));
    lines.extend(field(
        "Contraseña",
        form.masked_password(),
        "Ingresa tu contraseña",
        form.focus == LoginField::Password,
    ));
    let visibility = if form.show_password {
        "F2 ocultar contraseña"
    } else {
        "F2 mostrar contraseña"
    };
    lines.push(Line::from(Span::styled(
        format!("  {visibility}"),
        Style::default().fg(palette.muted),
    )));
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "[ Iniciar Sesión ]",
            Style::default()
                .fg(palette.panel_bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "Tab cambiar campo · Enter ingresar · Ctrl-C salir",
            Style::default().fg(palette.muted),
        ))
        .alignment(Alignment::Center),
    );
    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use flota_core::state::{UserProfile, ViewportClass};

    use super::*;

    fn state() -> ShellState {
        ShellState::new(UserProfile {
            name: "Admin Usuario".into(),
            role: "Administrador del Sistema".into(),
            email: "admin@flotaadmin.com".into(),
            phone: "+507 6000-0000".into(),
            department: "Administración".into(),
        })
    }

    fn settings() -> ShellSettings {
        ShellSettings {
            layout: LayoutConfig::default(),
            system_prefers_dark: true,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn screen(state: &ShellState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal
            .draw(|f| draw(f, state, &settings()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn ctrl_c_quits_from_any_focus() {
        let mut state = state();
        state.session.require_login = true;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_action(ctrl_c, &state), Some(UserAction::Quit));
    }

    #[test]
    fn login_screen_captures_typing() {
        let mut state = state();
        state.session.require_login = true;
        assert_eq!(
            key_action(key(KeyCode::Char('q')), &state),
            Some(UserAction::LoginInput('q'))
        );
        assert_eq!(key_action(key(KeyCode::Enter), &state), Some(UserAction::Login));
        assert_eq!(
            key_action(key(KeyCode::F(2)), &state),
            Some(UserAction::LoginToggleShowPassword)
        );
    }

    #[test]
    fn focus_layers_take_keys_in_order() {
        let mut state = state();
        state.interaction.search_focus = true;
        assert_eq!(
            key_action(key(KeyCode::Char('q')), &state),
            Some(UserAction::SearchInput('q'))
        );

        state.interaction.overlay = ShellOverlay::UserMenu { selected: 0 };
        assert_eq!(
            key_action(key(KeyCode::Enter), &state),
            Some(UserAction::UserMenuSubmit)
        );
    }

    #[test]
    fn arrows_follow_the_sidebar_only_when_it_is_visible() {
        let mut state = state();
        state.nav.active_section = SectionId::Vehicles;
        assert_eq!(
            key_action(key(KeyCode::Down), &state),
            Some(UserAction::SidebarMoveDown)
        );

        state.nav.sidebar_collapsed = true;
        assert_eq!(
            key_action(key(KeyCode::Down), &state),
            Some(UserAction::VehicleCursorDown)
        );
        assert_eq!(
            key_action(key(KeyCode::Enter), &state),
            Some(UserAction::OpenVehicleDetails)
        );
    }

    #[test]
    fn edit_form_keeps_letters_for_input() {
        let mut state = state();
        state.nav.active_section = SectionId::VehicleEdit;
        assert_eq!(
            key_action(key(KeyCode::Char('q')), &state),
            Some(UserAction::EditInput('q'))
        );
        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(key_action(save, &state), Some(UserAction::SaveVehicleEdit));
        assert_eq!(key_action(key(KeyCode::Esc), &state), Some(UserAction::VehicleBack));
    }

    #[test]
    fn mobile_drawer_takes_navigation_keys() {
        let mut state = state();
        state.viewport = ViewportClass::Mobile;
        state.nav.mobile_menu_open = true;
        assert_eq!(
            key_action(key(KeyCode::Enter), &state),
            Some(UserAction::SidebarActivate)
        );
        assert_eq!(
            key_action(key(KeyCode::Esc), &state),
            Some(UserAction::CloseMobileMenu)
        );
    }

    #[test]
    fn clicking_a_sidebar_row_selects_its_section() {
        let state = state();
        let area = Rect::new(0, 0, 120, 40);
        let sidebar = shell_layout(area, &state, &LayoutConfig::default())
            .sidebar
            .expect("expanded sidebar");
        let entries = sidebar_regions(sidebar).entries;
        assert_eq!(
            mouse_action(click(3, entries.y + 2), &state, area, &LayoutConfig::default()),
            Some(UserAction::SelectSection(SectionId::Maintenance))
        );
        assert_eq!(
            mouse_action(click(1, 1), &state, area, &LayoutConfig::default()),
            Some(UserAction::MenuButton)
        );
        assert_eq!(
            mouse_action(click(118, 1), &state, area, &LayoutConfig::default()),
            Some(UserAction::OpenUserMenu)
        );
    }

    #[test]
    fn clicking_beside_the_mobile_drawer_closes_it() {
        let mut state = state();
        state.viewport = ViewportClass::Mobile;
        state.nav.mobile_menu_open = true;
        let area = Rect::new(0, 0, 80, 30);
        assert_eq!(
            mouse_action(click(60, 20), &state, area, &LayoutConfig::default()),
            Some(UserAction::CloseMobileMenu)
        );
    }

    #[test]
    fn expanded_desktop_draws_the_sidebar() {
        let screen = screen(&state(), 120, 40);
        assert!(screen.contains("Gestión de Flota"));
        assert!(screen.contains("Mantenimientos"));
        assert!(screen.contains("◀"));
    }

    #[test]
    fn collapsed_desktop_hides_the_sidebar() {
        let mut state = state();
        state.nav.sidebar_collapsed = true;
        let screen = screen(&state, 120, 40);
        assert!(!screen.contains("Gestión de Flota"));
        assert!(screen.contains("▶"));
    }

    #[test]
    fn mobile_hides_the_title_until_the_drawer_opens() {
        let mut state = state();
        state.viewport = ViewportClass::Mobile;
        let closed = screen(&state, 80, 30);
        assert!(closed.contains("☰"));
        assert!(!closed.contains("Gestión de Flota"));

        state.nav.mobile_menu_open = true;
        let open = screen(&state, 80, 30);
        assert!(open.contains("Gestión de Flota"));
    }

    #[test]
    fn login_gate_replaces_the_shell() {
        let mut state = state();
        state.session.require_login = true;
        let screen = screen(&state, 100, 30);
        assert!(screen.contains("Iniciar Sesión"));
        assert!(screen.contains("Ingresa tu usuario o email"));
        assert!(!screen.contains("Gestión de Flota"));
    }

    #[test]
    fn user_menu_lists_its_entries() {
        let mut state = state();
        state.interaction.overlay = ShellOverlay::UserMenu { selected: 2 };
        let screen = screen(&state, 120, 40);
        assert!(screen.contains("Mi Perfil"));
        assert!(screen.contains("Cerrar Sesión"));
    }
}
