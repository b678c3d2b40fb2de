//! Content area rendering, one function per registered view.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs, Wrap};
use ratatui::Frame;

use flota_core::fleet::{
    consumption_efficiency_tone, consumption_totals, department_breakdown, display_date,
    filter_label, maintenance_stats, mileage_efficiency_tone, mileage_stats, page_count, paginate,
    vehicle_stats, FilterChoice, SettingsTab, Tone, Vehicle, CONSUMPTION_RECORDS, FLEET_STATS,
    MAINTENANCE_PER_PAGE, MAINTENANCE_RECORDS, MILEAGE_PER_PAGE, MILEAGE_RECORDS,
    RECENT_ACTIVITY, SYSTEM_USERS, VEHICLES, VEHICLES_PER_PAGE, VEHICLE_DETAIL,
};
use flota_core::registry::{self, FeatureView, ViewKind};
use flota_core::state::ShellState;
use flota_core::views::{Notice, VehicleField, VehicleLayout};

use crate::theme::{tone_color, UiPalette};

pub fn render_content(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let descriptor = registry::resolve(state.nav.active_section);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.panel_bg).fg(palette.text))
        .title(Span::styled(
            format!(" {} {} ", descriptor.icon, descriptor.title),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
    let mut inner = block.inner(area);
    f.render_widget(block, area);

    if let Some(notice) = &state.views.notice {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);
        render_notice(f, rows[0], notice, palette);
        inner = rows[1];
    }

    match descriptor.kind {
        ViewKind::Feature(view) => match view {
            FeatureView::Dashboard => render_dashboard(f, inner, palette),
            FeatureView::Vehicles => render_vehicles(f, inner, state, palette),
            FeatureView::VehicleDetails => render_vehicle_details(f, inner, palette),
            FeatureView::VehicleEdit => render_vehicle_edit(f, inner, state, palette),
            FeatureView::Maintenance => render_maintenance(f, inner, state, palette),
            FeatureView::Mileage => render_mileage(f, inner, state, palette),
            FeatureView::Consumption => render_consumption(f, inner, state, palette),
            FeatureView::Settings => render_settings(f, inner, state, palette),
            FeatureView::Profile => render_profile(f, inner, state, palette),
        },
        ViewKind::Placeholder { headline, blurb } => {
            render_placeholder(f, inner, headline, blurb, palette)
        }
    }
}

fn render_notice(f: &mut Frame, area: Rect, notice: &Notice, palette: UiPalette) {
    let lines = vec![
        Line::from(vec![
            Span::styled("✔ ", Style::default().fg(palette.success)),
            Span::styled(
                notice.title.as_str(),
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Esc para cerrar)", Style::default().fg(palette.muted)),
        ]),
        Line::from(Span::styled(
            notice.detail.as_str(),
            Style::default().fg(palette.text),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

pub(crate) fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub(crate) fn money(value: f64) -> String {
    let cents = (value.max(0.0) * 100.0).round() as u64;
    format!("${}.{:02}", thousands(cents / 100), cents % 100)
}

fn toned(text: impl Into<String>, tone: Tone, palette: UiPalette) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(tone_color(palette, tone)))
}

fn header_row(titles: &[&'static str], palette: UiPalette) -> Row<'static> {
    Row::new(titles.iter().map(|title| Cell::from(*title))).style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )
}

fn hint_line(hints: &[(&'static str, &'static str)], palette: UiPalette) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (idx, (key, action)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(palette.muted)));
        }
        spans.push(Span::styled(*key, Style::default().fg(palette.accent)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(palette.muted),
        ));
    }
    Line::from(spans)
}

/// Search box plus the current value of each filter.
fn toolbar_line(
    search: &str,
    focused: bool,
    filters: &[(&'static str, String)],
    palette: UiPalette,
) -> Line<'static> {
    let search_style = if focused {
        Style::default()
            .fg(palette.text)
            .bg(palette.selected_bg)
    } else {
        Style::default().fg(palette.text)
    };
    let shown = if search.is_empty() && !focused {
        "(/ para buscar)".to_string()
    } else if focused {
        format!("{search}▏")
    } else {
        search.to_string()
    };
    let mut spans = vec![
        Span::styled("🔍 ", Style::default().fg(palette.muted)),
        Span::styled(shown, search_style),
    ];
    for (label, value) in filters {
        spans.push(Span::styled(
            format!("  {label}: "),
            Style::default().fg(palette.muted),
        ));
        spans.push(Span::styled(
            value.clone(),
            Style::default().fg(palette.accent_alt),
        ));
    }
    Line::from(spans)
}

fn pager_line(page: usize, pages: usize, count: usize, noun: &str, palette: UiPalette) -> Span<'static> {
    Span::styled(
        format!("Página {} de {} · {count} {noun}", page + 1, pages.max(1)),
        Style::default().fg(palette.muted),
    )
}

fn footer(
    f: &mut Frame,
    area: Rect,
    lead: Option<Span<'static>>,
    hints: &[(&'static str, &'static str)],
    palette: UiPalette,
) {
    let mut line = hint_line(hints, palette);
    if let Some(lead) = lead {
        line.spans.insert(0, Span::raw("   "));
        line.spans.insert(0, lead);
    }
    f.render_widget(Paragraph::new(line), area);
}

/// Toolbar, summary, body and footer rows used by the list views.
fn list_rows(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (rows[0], rows[1], rows[2], rows[3])
}

fn empty_state(f: &mut Frame, area: Rect, message: &'static str, palette: UiPalette) {
    f.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted)),
        area,
    );
}

fn stat_card(f: &mut Frame, area: Rect, label: &str, value: String, tone: Tone, palette: UiPalette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(tone_color(palette, tone))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(palette.muted),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_dashboard(f: &mut Frame, area: Rect, palette: UiPalette) {
    let stats = FLEET_STATS;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let cards = [
        [
            ("Total Vehículos", stats.total_vehicles.to_string(), Tone::Info),
            ("Disponibles", stats.available_vehicles.to_string(), Tone::Success),
            ("En Mantenimiento", stats.maintenance_vehicles.to_string(), Tone::Warning),
            ("Con Daños", stats.damaged_vehicles.to_string(), Tone::Danger),
        ],
        [
            ("Tickets Pendientes", stats.pending_tickets.to_string(), Tone::Warning),
            ("Alertas Críticas", stats.critical_alerts.to_string(), Tone::Danger),
            ("Kilometraje Alto", stats.high_mileage_vehicles.to_string(), Tone::Info),
            ("Revisiones Pendientes", stats.pending_revisions.to_string(), Tone::Neutral),
        ],
    ];
    for (row, cards) in rows.iter().take(2).zip(cards) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(*row);
        for (col, (label, value, tone)) in cols.iter().zip(cards) {
            stat_card(f, *col, label, value, tone, palette);
        }
    }

    let summary = Line::from(vec![
        Span::styled("Eficiencia de combustible ", Style::default().fg(palette.muted)),
        toned(format!("{:.1}%", stats.fuel_efficiency), Tone::Success, palette),
        Span::styled("   Crecimiento mensual ", Style::default().fg(palette.muted)),
        toned(format!("+{:.1}%", stats.monthly_growth), Tone::Info, palette),
    ]);
    f.render_widget(Paragraph::new(summary), rows[2]);

    let mut lines = vec![Line::from(Span::styled(
        "Actividad Reciente",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))];
    for entry in RECENT_ACTIVITY {
        lines.push(Line::from(vec![
            toned("● ", entry.tone, palette),
            Span::styled(
                entry.vehicle,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(entry.action, Style::default().fg(palette.text)),
            Span::styled(format!("  {}", entry.time), Style::default().fg(palette.muted)),
        ]));
    }
    f.render_widget(Paragraph::new(lines), rows[3]);
}

fn render_vehicles(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let view = &state.views.vehicles;
    let visible = view.query.apply(VEHICLES);
    let pages = page_count(visible.len(), VEHICLES_PER_PAGE);
    let on_page = paginate(&visible, view.page, VEHICLES_PER_PAGE);
    let stats = vehicle_stats(VEHICLES);
    let (toolbar, summary, body, foot) = list_rows(area);

    f.render_widget(
        Paragraph::new(toolbar_line(
            &view.query.search,
            state.interaction.search_focus,
            &[
                ("Estado", filter_label(view.query.status).to_string()),
                ("Vista", view.layout.label().to_string()),
            ],
            palette,
        )),
        toolbar,
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("Total {}", stats.total), Style::default().fg(palette.text)),
            Span::raw("  "),
            toned(format!("Disponibles {}", stats.available), Tone::Success, palette),
            Span::raw("  "),
            toned(format!("Mantenimiento {}", stats.maintenance), Tone::Warning, palette),
            Span::raw("  "),
            toned(format!("En Ruta {}", stats.in_route), Tone::Info, palette),
            Span::raw("  "),
            toned(format!("Dañados {}", stats.damaged), Tone::Danger, palette),
        ])),
        summary,
    );

    if on_page.is_empty() {
        empty_state(f, body, "No se encontraron vehículos", palette);
    } else {
        match view.layout {
            VehicleLayout::Table => render_vehicle_table(f, body, on_page, view.cursor, palette),
            VehicleLayout::Grid => render_vehicle_grid(f, body, on_page, view.cursor, palette),
        }
    }

    footer(
        f,
        foot,
        Some(pager_line(view.page, pages, visible.len(), "vehículos", palette)),
        &[
            ("/", "buscar"),
            ("f", "estado"),
            ("v", "vista"),
            ("←→", "página"),
            ("o", "detalle"),
        ],
        palette,
    );
}

fn render_vehicle_table(
    f: &mut Frame,
    area: Rect,
    vehicles: &[&Vehicle],
    cursor: usize,
    palette: UiPalette,
) {
    let rows = vehicles.iter().map(|vehicle| {
        Row::new(vec![
            Cell::from(vehicle.plate),
            Cell::from(format!("{} {}", vehicle.brand, vehicle.model)),
            Cell::from(vehicle.year.to_string()),
            Cell::from(vehicle.kind),
            Cell::from(toned(vehicle.status.label(), vehicle.status.tone(), palette)),
            Cell::from(format!("{} km", thousands(u64::from(vehicle.mileage)))),
            Cell::from(vehicle.driver),
            Cell::from(vehicle.location.label()),
            Cell::from(format!("{}%", vehicle.fuel_level)),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Min(14),
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Length(14),
            Constraint::Length(11),
            Constraint::Min(14),
            Constraint::Length(11),
            Constraint::Length(5),
        ],
    )
    .header(header_row(
        &[
            "Placa",
            "Vehículo",
            "Año",
            "Tipo",
            "Estado",
            "Kilometraje",
            "Conductor",
            "Ubicación",
            "Comb.",
        ],
        palette,
    ))
    .row_highlight_style(Style::default().bg(palette.selected_bg))
    .highlight_symbol("▶ ");
    let mut table_state = TableState::default().with_selected(Some(cursor));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn render_vehicle_grid(
    f: &mut Frame,
    area: Rect,
    vehicles: &[&Vehicle],
    cursor: usize,
    palette: UiPalette,
) {
    let per_row: usize = match area.width {
        0..=59 => 1,
        60..=99 => 2,
        _ => 3,
    };
    let row_count = vehicles.len().div_ceil(per_row);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(8); row_count])
        .split(area);
    for (row_idx, chunk) in vehicles.chunks(per_row).enumerate() {
        let Some(row_area) = rows.get(row_idx) else {
            break;
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, per_row as u32); per_row])
            .split(*row_area);
        for (col_idx, vehicle) in chunk.iter().enumerate() {
            let selected = row_idx * per_row + col_idx == cursor;
            render_vehicle_card(f, cols[col_idx], vehicle, selected, palette);
        }
    }
}

fn render_vehicle_card(
    f: &mut Frame,
    area: Rect,
    vehicle: &Vehicle,
    selected: bool,
    palette: UiPalette,
) {
    let border = if selected {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            format!(" {} ", vehicle.plate),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let lines = vec![
        Line::from(format!(
            "{} {} ({})",
            vehicle.brand, vehicle.model, vehicle.year
        )),
        Line::from(vec![
            Span::styled(format!("{} · ", vehicle.kind), Style::default().fg(palette.muted)),
            toned(vehicle.status.label(), vehicle.status.tone(), palette),
        ]),
        Line::from(format!(
            "{} km · {}",
            thousands(u64::from(vehicle.mileage)),
            vehicle.location.label()
        )),
        Line::from(Span::styled(vehicle.driver, Style::default().fg(palette.muted))),
        Line::from(format!("Combustible {}%", vehicle.fuel_level)),
        Line::from(Span::styled(
            format!("Últ. mant. {}", display_date(vehicle.last_maintenance)),
            Style::default().fg(palette.muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_vehicle_details(f: &mut Frame, area: Rect, palette: UiPalette) {
    let detail = VEHICLE_DETAIL;
    let vehicle = detail.vehicle;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("{} {} · {}", vehicle.brand, vehicle.model, vehicle.plate),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                toned(vehicle.status.label(), vehicle.status.tone(), palette),
            ]),
            Line::from(Span::styled(
                format!("{} · {} · {}", vehicle.kind, vehicle.year, vehicle.location.label()),
                Style::default().fg(palette.muted),
            )),
        ]),
        rows[0],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let label = |text: &'static str| Span::styled(format!("{text}: "), Style::default().fg(palette.muted));
    let info = vec![
        Line::from(vec![label("Conductor"), Span::raw(vehicle.driver)]),
        Line::from(vec![
            label("Kilometraje"),
            Span::raw(format!("{} km", thousands(u64::from(vehicle.mileage)))),
        ]),
        Line::from(vec![
            label("Combustible"),
            Span::raw(format!(
                "{}% ({} L de {} L)",
                vehicle.fuel_level,
                detail.fuel_litres(),
                detail.fuel_capacity
            )),
        ]),
        Line::from(vec![
            label("Último mantenimiento"),
            Span::raw(display_date(vehicle.last_maintenance)),
        ]),
        Line::from(vec![
            label("Próximo mantenimiento"),
            Span::raw(display_date(detail.next_maintenance)),
        ]),
        Line::from(""),
        Line::from(vec![label("Motor"), Span::raw(detail.engine)]),
        Line::from(vec![label("Transmisión"), Span::raw(detail.transmission)]),
        Line::from(vec![label("VIN"), Span::raw(detail.vin)]),
        Line::from(vec![
            label("Registro"),
            Span::raw(display_date(detail.registration_date)),
        ]),
        Line::from(vec![
            label("Seguro hasta"),
            Span::raw(display_date(detail.insurance_expiry)),
        ]),
        Line::from(vec![
            label("Revisión técnica"),
            Span::raw(display_date(detail.technical_inspection)),
        ]),
        Line::from(""),
        Line::from(vec![label("Notas"), Span::raw(detail.notes)]),
    ];
    f.render_widget(
        Paragraph::new(info)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .title(" Información "),
            ),
        cols[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(detail.documents.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(cols[1]);
    let documents = detail.documents.iter().map(|doc| {
        Line::from(vec![
            toned("● ", Tone::Success, palette),
            Span::raw(doc.name),
            Span::styled(
                format!("  {} hasta {}", doc.status, display_date(doc.expiry)),
                Style::default().fg(palette.muted),
            ),
        ])
    });
    f.render_widget(
        Paragraph::new(documents.collect::<Vec<_>>()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Documentos "),
        ),
        right[0],
    );
    let history = detail.service_history.iter().map(|entry| {
        Row::new(vec![
            Cell::from(display_date(entry.date)),
            Cell::from(entry.kind),
            Cell::from(entry.description),
            Cell::from(money(entry.cost)),
        ])
    });
    f.render_widget(
        Table::new(
            history,
            [
                Constraint::Length(10),
                Constraint::Length(24),
                Constraint::Min(16),
                Constraint::Length(10),
            ],
        )
        .header(header_row(&["Fecha", "Tipo", "Descripción", "Costo"], palette))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Historial de Servicio "),
        ),
        right[1],
    );

    footer(f, rows[2], None, &[("e", "editar"), ("b", "volver")], palette);
}

fn render_vehicle_edit(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let form = &state.views.vehicle_edit;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let mut lines = Vec::with_capacity(VehicleField::ALL.len() + 2);
    for (idx, field) in VehicleField::ALL.iter().enumerate() {
        let focused = idx == form.focus;
        let value = form.value(*field);
        let (marker, value_style) = if focused {
            (
                "▶ ",
                Style::default()
                    .fg(palette.text)
                    .bg(palette.selected_bg),
            )
        } else {
            ("  ", Style::default().fg(palette.text))
        };
        let shown = if focused {
            format!("{value}▏")
        } else {
            value.to_string()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(format!("{:<14}", field.label()), Style::default().fg(palette.muted)),
            Span::styled(shown, value_style),
        ]));
    }
    if form.dirty {
        lines.push(Line::from(""));
        lines.push(Line::from(toned("● Cambios sin guardar", Tone::Warning, palette)));
    }
    f.render_widget(Paragraph::new(lines), rows[0]);

    footer(
        f,
        rows[1],
        None,
        &[
            ("Tab/↓", "siguiente"),
            ("↑", "anterior"),
            ("Ctrl-S", "guardar"),
            ("Esc", "cancelar"),
        ],
        palette,
    );
}

fn render_maintenance(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let view = &state.views.maintenance;
    let visible = view.query.apply(MAINTENANCE_RECORDS);
    let pages = page_count(visible.len(), MAINTENANCE_PER_PAGE);
    let on_page = paginate(&visible, view.page, MAINTENANCE_PER_PAGE);
    let stats = maintenance_stats(MAINTENANCE_RECORDS);
    let (toolbar, summary, body, foot) = list_rows(area);

    let future = if view.query.future_only { "Sí" } else { "No" };
    f.render_widget(
        Paragraph::new(toolbar_line(
            &view.query.search,
            state.interaction.search_focus,
            &[
                ("Estado", filter_label(view.query.status).to_string()),
                ("Prioridad", filter_label(view.query.priority).to_string()),
                ("Solo futuros", future.to_string()),
            ],
            palette,
        )),
        toolbar,
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("Total {}", stats.total), Style::default().fg(palette.text)),
            Span::raw("  "),
            toned(format!("Completados {}", stats.completed), Tone::Success, palette),
            Span::raw("  "),
            toned(format!("Programados {}", stats.scheduled), Tone::Info, palette),
            Span::raw("  "),
            toned(format!("Vencidos {}", stats.overdue), Tone::Danger, palette),
            Span::raw("  "),
            toned(format!("Futuros {}", stats.future), Tone::Warning, palette),
        ])),
        summary,
    );

    if on_page.is_empty() {
        empty_state(f, body, "No se encontraron mantenimientos", palette);
    } else {
        let rows = on_page.iter().map(|record| {
            Row::new(vec![
                Cell::from(format!("{} {}", record.vehicle_plate, record.vehicle_brand)),
                Cell::from(record.kind),
                Cell::from(toned(record.status.label(), record.status.tone(), palette)),
                Cell::from(toned(record.priority.label(), record.priority.tone(), palette)),
                Cell::from(display_date(record.scheduled_date)),
                Cell::from(money(record.cost)),
                Cell::from(record.technician),
                Cell::from(record.workshop),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Min(14),
                Constraint::Length(11),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Min(12),
                Constraint::Min(12),
            ],
        )
        .header(header_row(
            &[
                "Vehículo",
                "Tipo",
                "Estado",
                "Prioridad",
                "Programado",
                "Costo",
                "Técnico",
                "Taller",
            ],
            palette,
        ));
        f.render_widget(table, body);
    }

    footer(
        f,
        foot,
        Some(pager_line(view.page, pages, visible.len(), "registros", palette)),
        &[
            ("/", "buscar"),
            ("f", "estado"),
            ("F", "prioridad"),
            ("v", "futuros"),
            ("←→", "página"),
        ],
        palette,
    );
}

fn render_mileage(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let view = &state.views.mileage;
    let visible = view.query.apply(MILEAGE_RECORDS);
    let pages = page_count(visible.len(), MILEAGE_PER_PAGE);
    let on_page = paginate(&visible, view.page, MILEAGE_PER_PAGE);
    let stats = mileage_stats(MILEAGE_RECORDS);
    let (toolbar, summary, body, foot) = list_rows(area);

    f.render_widget(
        Paragraph::new(toolbar_line(
            &view.query.search,
            state.interaction.search_focus,
            &[
                ("Estado", filter_label(view.query.status).to_string()),
                ("Ubicación", filter_label(view.query.location).to_string()),
            ],
            palette,
        )),
        toolbar,
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("Total {}", stats.total), Style::default().fg(palette.text)),
            Span::raw("  "),
            toned(format!("Verificados {}", stats.verified), Tone::Success, palette),
            Span::raw("  "),
            toned(format!("Pendientes {}", stats.pending), Tone::Warning, palette),
            Span::raw("  "),
            toned(format!("Marcados {}", stats.flagged), Tone::Danger, palette),
            Span::raw("  "),
            Span::styled(
                format!(
                    "{} km recorridos · {:.1} km/L promedio",
                    thousands(stats.total_km),
                    stats.avg_efficiency
                ),
                Style::default().fg(palette.muted),
            ),
        ])),
        summary,
    );

    if on_page.is_empty() {
        empty_state(f, body, "No se encontraron registros de kilometraje", palette);
    } else {
        let rows = on_page.iter().map(|record| {
            Row::new(vec![
                Cell::from(format!("{} {}", record.vehicle_plate, record.vehicle_brand)),
                Cell::from(format!("{} km", thousands(u64::from(record.current_mileage)))),
                Cell::from(format!("+{} km", thousands(u64::from(record.difference)))),
                Cell::from(display_date(record.record_date)),
                Cell::from(record.driver),
                Cell::from(record.route),
                Cell::from(toned(
                    format!("{:.1} km/L", record.efficiency),
                    mileage_efficiency_tone(record.efficiency),
                    palette,
                )),
                Cell::from(toned(record.status.label(), record.status.tone(), palette)),
                Cell::from(record.location.label()),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(11),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Min(12),
                Constraint::Min(14),
                Constraint::Length(10),
                Constraint::Length(11),
                Constraint::Length(11),
            ],
        )
        .header(header_row(
            &[
                "Vehículo",
                "Actual",
                "Recorrido",
                "Fecha",
                "Conductor",
                "Ruta",
                "Eficiencia",
                "Estado",
                "Ubicación",
            ],
            palette,
        ));
        f.render_widget(table, body);
    }

    footer(
        f,
        foot,
        Some(pager_line(view.page, pages, visible.len(), "registros", palette)),
        &[
            ("/", "buscar"),
            ("f", "estado"),
            ("F", "ubicación"),
            ("←→", "página"),
        ],
        palette,
    );
}

fn render_consumption(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let view = &state.views.consumption;
    let visible = view.query.apply(CONSUMPTION_RECORDS);
    let totals = consumption_totals(&visible);
    let (toolbar, summary, body, foot) = list_rows(area);

    f.render_widget(
        Paragraph::new(toolbar_line(
            &view.query.search,
            state.interaction.search_focus,
            &[
                ("Departamento", filter_label(view.query.department).to_string()),
                ("Estado", filter_label(view.query.status).to_string()),
            ],
            palette,
        )),
        toolbar,
    );
    f.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("{:.1} L", totals.total_fuel),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" combustible  ", Style::default().fg(palette.muted)),
                Span::styled(
                    money(totals.total_cost),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" costo  ", Style::default().fg(palette.muted)),
                Span::styled(
                    format!("{} km", thousands(totals.total_distance)),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" recorridos", Style::default().fg(palette.muted)),
            ]),
            Line::from(vec![
                toned(
                    format!("{:.1} km/L promedio", totals.avg_efficiency),
                    consumption_efficiency_tone(totals.avg_efficiency),
                    palette,
                ),
                Span::raw("  "),
                toned(format!("{} en alerta", totals.alert_vehicles), Tone::Danger, palette),
                Span::raw("  "),
                toned(
                    format!("{} con eficiencia baja", totals.low_efficiency_vehicles),
                    Tone::Warning,
                    palette,
                ),
            ]),
        ]),
        summary,
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(body);
    if visible.is_empty() {
        empty_state(f, cols[0], "No se encontraron registros de consumo", palette);
    } else {
        let rows = visible.iter().map(|record| {
            Row::new(vec![
                Cell::from(format!("{} {}", record.vehicle_plate, record.vehicle_brand)),
                Cell::from(record.driver),
                Cell::from(record.department.label()),
                Cell::from(format!("{:.1} L", record.fuel_consumed)),
                Cell::from(format!("{} km", thousands(u64::from(record.distance_traveled)))),
                Cell::from(toned(
                    format!("{:.1} km/L", record.efficiency),
                    consumption_efficiency_tone(record.efficiency),
                    palette,
                )),
                Cell::from(money(record.cost)),
                Cell::from(toned(record.status.label(), record.status.tone(), palette)),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Min(12),
                Constraint::Length(12),
                Constraint::Length(9),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(7),
            ],
        )
        .header(header_row(
            &[
                "Vehículo",
                "Conductor",
                "Depto.",
                "Comb.",
                "Distancia",
                "Eficiencia",
                "Costo",
                "Estado",
            ],
            palette,
        ));
        f.render_widget(table, cols[0]);
    }

    let mut breakdown = Vec::new();
    for (department, totals) in department_breakdown(&visible) {
        breakdown.push(Line::from(Span::styled(
            department.label(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        breakdown.push(Line::from(Span::styled(
            format!(
                "  {} veh · {:.0} L · {}",
                totals.vehicles,
                totals.total_fuel,
                money(totals.total_cost)
            ),
            Style::default().fg(palette.muted),
        )));
    }
    f.render_widget(
        Paragraph::new(breakdown).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Por departamento "),
        ),
        cols[1],
    );

    footer(
        f,
        foot,
        Some(Span::styled(
            format!("{} vehículos", totals.vehicles),
            Style::default().fg(palette.muted),
        )),
        &[("/", "buscar"), ("f", "departamento"), ("F", "estado")],
        palette,
    );
}

fn render_settings(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let tab = state.views.settings.tab;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let selected = SettingsTab::ALL
        .iter()
        .position(|candidate| *candidate == tab)
        .unwrap_or(0);
    let tabs = Tabs::new(SettingsTab::ALL.iter().map(|tab| Line::from(tab.label())))
        .select(selected)
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, rows[0]);

    if tab == SettingsTab::Users {
        let users = SYSTEM_USERS.iter().map(|user| {
            let (status, tone) = if user.active {
                ("Activo", Tone::Success)
            } else {
                ("Inactivo", Tone::Neutral)
            };
            Row::new(vec![
                Cell::from(user.name),
                Cell::from(user.email),
                Cell::from(user.role),
                Cell::from(toned(status, tone, palette)),
                Cell::from(user.last_login),
                Cell::from(user.permissions.join(", ")),
            ])
        });
        f.render_widget(
            Table::new(
                users,
                [
                    Constraint::Min(16),
                    Constraint::Min(22),
                    Constraint::Length(14),
                    Constraint::Length(9),
                    Constraint::Length(17),
                    Constraint::Min(16),
                ],
            )
            .header(header_row(
                &["Nombre", "Email", "Rol", "Estado", "Último acceso", "Permisos"],
                palette,
            )),
            rows[1],
        );
    } else {
        let lines = tab.rows().iter().map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!("{key:<28}"), Style::default().fg(palette.muted)),
                Span::styled(*value, Style::default().fg(palette.text)),
            ])
        });
        f.render_widget(Paragraph::new(lines.collect::<Vec<_>>()), rows[1]);
    }

    footer(f, rows[2], None, &[("Tab", "siguiente pestaña")], palette);
}

fn render_profile(f: &mut Frame, area: Rect, state: &ShellState, palette: UiPalette) {
    let user = &state.user;
    let label = |text: &'static str| Span::styled(format!("{text:<14}"), Style::default().fg(palette.muted));
    let sidebar = if state.nav.sidebar_collapsed {
        "Contraída"
    } else {
        "Expandida"
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", user.initials()),
                Style::default()
                    .fg(palette.panel_bg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                user.name.to_string(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(user.role.to_string(), Style::default().fg(palette.muted))),
        Line::from(""),
        Line::from(vec![label("Email"), Span::raw(user.email.to_string())]),
        Line::from(vec![label("Teléfono"), Span::raw(user.phone.to_string())]),
        Line::from(vec![label("Departamento"), Span::raw(user.department.to_string())]),
        Line::from(""),
        Line::from(Span::styled(
            "Preferencias",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            label("Tema"),
            Span::raw(format!(
                "{} {}",
                state.customization.color_mode.icon(),
                state.customization.color_mode.label()
            )),
        ]),
        Line::from(vec![label("Barra lateral"), Span::raw(sidebar)]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_placeholder(
    f: &mut Frame,
    area: Rect,
    headline: &'static str,
    blurb: &'static str,
    palette: UiPalette,
) {
    let top = area.height.saturating_sub(3) / 2;
    let mut lines = vec![Line::from(""); usize::from(top)];
    lines.push(Line::from(Span::styled(
        headline,
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(blurb, Style::default().fg(palette.muted))));
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
