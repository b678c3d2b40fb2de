//! Fleet records shown by the feature views, with the search, filter and
//! aggregate rules each view applies.
//!
//! All data is static. Views own their query state (see [`crate::views`]) and
//! call into the functions here on every frame.

use chrono::NaiveDate;

pub const VEHICLES_PER_PAGE: usize = 6;
pub const MAINTENANCE_PER_PAGE: usize = 10;
pub const MILEAGE_PER_PAGE: usize = 10;

/// Colour class a renderer maps onto its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

/// A closed set of values a list view can filter on. `None` means "all".
pub trait FilterChoice: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Steps `All -> first -> ... -> last -> All`.
pub fn cycle_filter<T: FilterChoice>(current: Option<T>) -> Option<T> {
    match current {
        None => T::ALL.first().copied(),
        Some(value) => T::ALL
            .iter()
            .position(|candidate| *candidate == value)
            .and_then(|idx| T::ALL.get(idx + 1))
            .copied(),
    }
}

pub fn filter_label<T: FilterChoice>(current: Option<T>) -> &'static str {
    current.map_or("Todos", FilterChoice::label)
}

fn matches_filter<T: FilterChoice>(filter: Option<T>, value: T) -> bool {
    filter.map_or(true, |wanted| wanted == value)
}

/// Case-insensitive substring match over any of `fields`. An empty term
/// matches everything.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Zero-based `page`. Out-of-range pages yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// ISO dates rendered the way the settings' `DD/MM/YYYY` format asks for.
pub fn display_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_string(), |date| date.format("%d/%m/%Y").to_string())
}

macro_rules! filter_choice {
    ($ty:ident { $($variant:ident => $label:literal, $tone:ident;)+ }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ty {
            $($variant,)+
        }

        impl $ty {
            pub fn tone(self) -> Tone {
                match self {
                    $(Self::$variant => Tone::$tone,)+
                }
            }
        }

        impl FilterChoice for $ty {
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }
    };
}

filter_choice!(VehicleStatus {
    Available => "Disponible", Success;
    Maintenance => "Mantenimiento", Warning;
    InRoute => "En Ruta", Info;
    Damaged => "Dañado", Danger;
});

filter_choice!(MaintenanceStatus {
    Completed => "Completado", Success;
    Scheduled => "Programado", Info;
    Overdue => "Vencido", Danger;
});

filter_choice!(Priority {
    Low => "Baja", Neutral;
    Normal => "Normal", Info;
    High => "Alta", Warning;
    Urgent => "Urgente", Danger;
});

filter_choice!(MileageStatus {
    Verified => "Verificado", Success;
    Pending => "Pendiente", Warning;
    Flagged => "Marcado", Danger;
});

filter_choice!(ConsumptionStatus {
    Normal => "Normal", Success;
    Low => "Bajo", Warning;
    Alert => "Alerta", Danger;
});

filter_choice!(Department {
    Logistica => "Logística", Neutral;
    Transporte => "Transporte", Neutral;
    Distribucion => "Distribución", Neutral;
    Reparto => "Reparto", Neutral;
});

filter_choice!(Location {
    Panama => "Panamá", Neutral;
    CostaRica => "Costa Rica", Neutral;
    Ecuador => "Ecuador", Neutral;
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    pub id: u32,
    pub plate: &'static str,
    pub brand: &'static str,
    pub model: &'static str,
    pub year: u16,
    pub kind: &'static str,
    pub status: VehicleStatus,
    pub mileage: u32,
    pub last_maintenance: &'static str,
    pub driver: &'static str,
    pub location: Location,
    pub fuel_level: u8,
}

pub const VEHICLES: &[Vehicle] = &[
    Vehicle {
        id: 1,
        plate: "ABC-123",
        brand: "Volvo",
        model: "FH16",
        year: 2022,
        kind: "Camión",
        status: VehicleStatus::Available,
        mileage: 45_000,
        last_maintenance: "2024-01-15",
        driver: "Carlos Mendoza",
        location: Location::Panama,
        fuel_level: 85,
    },
    Vehicle {
        id: 2,
        plate: "DEF-456",
        brand: "Mercedes",
        model: "Actros",
        year: 2021,
        kind: "Camión",
        status: VehicleStatus::Maintenance,
        mileage: 67_000,
        last_maintenance: "2024-01-10",
        driver: "Ana García",
        location: Location::CostaRica,
        fuel_level: 45,
    },
    Vehicle {
        id: 3,
        plate: "GHI-789",
        brand: "Scania",
        model: "R450",
        year: 2023,
        kind: "Camión",
        status: VehicleStatus::InRoute,
        mileage: 23_000,
        last_maintenance: "2024-01-20",
        driver: "Miguel Torres",
        location: Location::Ecuador,
        fuel_level: 92,
    },
    Vehicle {
        id: 4,
        plate: "JKL-012",
        brand: "Ford",
        model: "Transit",
        year: 2020,
        kind: "Van",
        status: VehicleStatus::Available,
        mileage: 89_000,
        last_maintenance: "2024-01-05",
        driver: "Laura Jiménez",
        location: Location::Panama,
        fuel_level: 67,
    },
    Vehicle {
        id: 5,
        plate: "MNO-345",
        brand: "Isuzu",
        model: "NPR",
        year: 2022,
        kind: "Camión Pequeño",
        status: VehicleStatus::Damaged,
        mileage: 34_000,
        last_maintenance: "2023-12-28",
        driver: "Roberto Silva",
        location: Location::CostaRica,
        fuel_level: 23,
    },
    Vehicle {
        id: 6,
        plate: "PQR-678",
        brand: "Volvo",
        model: "FH12",
        year: 2021,
        kind: "Camión",
        status: VehicleStatus::Available,
        mileage: 56_000,
        last_maintenance: "2024-01-18",
        driver: "Patricia Morales",
        location: Location::Ecuador,
        fuel_level: 78,
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleQuery {
    pub search: String,
    pub status: Option<VehicleStatus>,
}

impl VehicleQuery {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        matches_search(
            &self.search,
            &[vehicle.plate, vehicle.brand, vehicle.model, vehicle.driver],
        ) && matches_filter(self.status, vehicle.status)
    }

    pub fn apply<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        vehicles.iter().filter(|v| self.matches(v)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VehicleStats {
    pub total: usize,
    pub available: usize,
    pub maintenance: usize,
    pub in_route: usize,
    pub damaged: usize,
}

pub fn vehicle_stats(vehicles: &[Vehicle]) -> VehicleStats {
    let count = |status| vehicles.iter().filter(|v| v.status == status).count();
    VehicleStats {
        total: vehicles.len(),
        available: count(VehicleStatus::Available),
        maintenance: count(VehicleStatus::Maintenance),
        in_route: count(VehicleStatus::InRoute),
        damaged: count(VehicleStatus::Damaged),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaintenanceRecord {
    pub id: u32,
    pub vehicle_plate: &'static str,
    pub vehicle_brand: &'static str,
    pub kind: &'static str,
    pub status: MaintenanceStatus,
    pub scheduled_date: &'static str,
    pub completed_date: Option<&'static str>,
    pub next_due: Option<&'static str>,
    pub mileage: u32,
    pub cost: f64,
    pub description: &'static str,
    pub technician: &'static str,
    pub workshop: &'static str,
    pub priority: Priority,
    pub is_future: bool,
}

pub const MAINTENANCE_RECORDS: &[MaintenanceRecord] = &[
    MaintenanceRecord {
        id: 1,
        vehicle_plate: "ABC-123",
        vehicle_brand: "Volvo FH16",
        kind: "Cambio de aceite",
        status: MaintenanceStatus::Completed,
        scheduled_date: "2024-01-15",
        completed_date: Some("2024-01-15"),
        next_due: Some("2024-04-15"),
        mileage: 45_000,
        cost: 150.0,
        description: "Cambio de aceite motor y filtro",
        technician: "Juan Pérez",
        workshop: "Taller Central",
        priority: Priority::Normal,
        is_future: false,
    },
    MaintenanceRecord {
        id: 2,
        vehicle_plate: "DEF-456",
        vehicle_brand: "Mercedes Actros",
        kind: "Revisión general",
        status: MaintenanceStatus::Scheduled,
        scheduled_date: "2024-02-10",
        completed_date: None,
        next_due: None,
        mileage: 52_000,
        cost: 300.0,
        description: "Revisión completa del sistema de frenos y suspensión",
        technician: "Carlos Mendoza",
        workshop: "Taller Norte",
        priority: Priority::High,
        is_future: true,
    },
    MaintenanceRecord {
        id: 3,
        vehicle_plate: "GHI-789",
        vehicle_brand: "Ford Transit",
        kind: "Cambio de llantas",
        status: MaintenanceStatus::Overdue,
        scheduled_date: "2024-01-20",
        completed_date: None,
        next_due: None,
        mileage: 89_000,
        cost: 400.0,
        description: "Cambio de 4 llantas traseras",
        technician: "Ana López",
        workshop: "Taller Sur",
        priority: Priority::Urgent,
        is_future: false,
    },
    MaintenanceRecord {
        id: 4,
        vehicle_plate: "ABC-123",
        vehicle_brand: "Volvo FH16",
        kind: "Mantenimiento preventivo",
        status: MaintenanceStatus::Scheduled,
        scheduled_date: "2024-03-01",
        completed_date: None,
        next_due: None,
        mileage: 47_000,
        cost: 250.0,
        description: "Mantenimiento preventivo programado - Revisión de motor y transmisión",
        technician: "Pedro Ramírez",
        workshop: "Taller Central",
        priority: Priority::Normal,
        is_future: true,
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceQuery {
    pub search: String,
    pub status: Option<MaintenanceStatus>,
    pub priority: Option<Priority>,
    pub future_only: bool,
}

impl MaintenanceQuery {
    pub fn matches(&self, record: &MaintenanceRecord) -> bool {
        matches_search(
            &self.search,
            &[record.vehicle_plate, record.kind, record.vehicle_brand],
        ) && matches_filter(self.status, record.status)
            && matches_filter(self.priority, record.priority)
            && (!self.future_only || record.is_future)
    }

    pub fn apply<'a>(&self, records: &'a [MaintenanceRecord]) -> Vec<&'a MaintenanceRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaintenanceStats {
    pub total: usize,
    pub completed: usize,
    pub scheduled: usize,
    pub overdue: usize,
    pub future: usize,
}

pub fn maintenance_stats(records: &[MaintenanceRecord]) -> MaintenanceStats {
    let count = |status| records.iter().filter(|r| r.status == status).count();
    MaintenanceStats {
        total: records.len(),
        completed: count(MaintenanceStatus::Completed),
        scheduled: count(MaintenanceStatus::Scheduled),
        overdue: count(MaintenanceStatus::Overdue),
        future: records.iter().filter(|r| r.is_future).count(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MileageRecord {
    pub id: u32,
    pub vehicle_plate: &'static str,
    pub vehicle_brand: &'static str,
    pub current_mileage: u32,
    pub previous_mileage: u32,
    pub difference: u32,
    pub record_date: &'static str,
    pub driver: &'static str,
    pub route: &'static str,
    pub fuel_consumed: f64,
    /// km/l
    pub efficiency: f64,
    pub status: MileageStatus,
    pub notes: &'static str,
    pub recorded_by: &'static str,
    pub location: Location,
}

pub const MILEAGE_RECORDS: &[MileageRecord] = &[
    MileageRecord {
        id: 1,
        vehicle_plate: "ABC-123",
        vehicle_brand: "Volvo FH16",
        current_mileage: 45_000,
        previous_mileage: 44_500,
        difference: 500,
        record_date: "2024-01-15",
        driver: "Carlos Mendoza",
        route: "Panamá - Colón",
        fuel_consumed: 85.5,
        efficiency: 5.85,
        status: MileageStatus::Verified,
        notes: "Viaje normal, sin incidencias",
        recorded_by: "Sistema GPS",
        location: Location::Panama,
    },
    MileageRecord {
        id: 2,
        vehicle_plate: "DEF-456",
        vehicle_brand: "Mercedes Actros",
        current_mileage: 52_000,
        previous_mileage: 51_200,
        difference: 800,
        record_date: "2024-01-14",
        driver: "Ana López",
        route: "San José - Cartago",
        fuel_consumed: 120.0,
        efficiency: 6.67,
        status: MileageStatus::Verified,
        notes: "Carga pesada, consumo normal",
        recorded_by: "Conductor",
        location: Location::CostaRica,
    },
    MileageRecord {
        id: 3,
        vehicle_plate: "GHI-789",
        vehicle_brand: "Ford Transit",
        current_mileage: 89_000,
        previous_mileage: 88_750,
        difference: 250,
        record_date: "2024-01-13",
        driver: "Laura Jiménez",
        route: "Quito - Guayaquil",
        fuel_consumed: 45.2,
        efficiency: 5.53,
        status: MileageStatus::Flagged,
        notes: "Consumo elevado, revisar vehículo",
        recorded_by: "Sistema GPS",
        location: Location::Ecuador,
    },
    MileageRecord {
        id: 4,
        vehicle_plate: "JKL-012",
        vehicle_brand: "Isuzu NPR",
        current_mileage: 34_000,
        previous_mileage: 33_850,
        difference: 150,
        record_date: "2024-01-12",
        driver: "Pedro Ramírez",
        route: "David - Santiago",
        fuel_consumed: 25.8,
        efficiency: 5.81,
        status: MileageStatus::Pending,
        notes: "Pendiente de verificación",
        recorded_by: "Conductor",
        location: Location::Panama,
    },
    MileageRecord {
        id: 5,
        vehicle_plate: "MNO-345",
        vehicle_brand: "Volvo FH12",
        current_mileage: 56_000,
        previous_mileage: 55_400,
        difference: 600,
        record_date: "2024-01-11",
        driver: "Patricia Morales",
        route: "Panamá - Chitré",
        fuel_consumed: 95.3,
        efficiency: 6.30,
        status: MileageStatus::Verified,
        notes: "Viaje eficiente, buen rendimiento",
        recorded_by: "Sistema GPS",
        location: Location::Panama,
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MileageQuery {
    pub search: String,
    pub status: Option<MileageStatus>,
    pub location: Option<Location>,
}

impl MileageQuery {
    pub fn matches(&self, record: &MileageRecord) -> bool {
        matches_search(
            &self.search,
            &[record.vehicle_plate, record.driver, record.route],
        ) && matches_filter(self.status, record.status)
            && matches_filter(self.location, record.location)
    }

    pub fn apply<'a>(&self, records: &'a [MileageRecord]) -> Vec<&'a MileageRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MileageStats {
    pub total: usize,
    pub verified: usize,
    pub pending: usize,
    pub flagged: usize,
    pub total_km: u64,
    pub avg_efficiency: f64,
}

pub fn mileage_stats(records: &[MileageRecord]) -> MileageStats {
    let count = |status| records.iter().filter(|r| r.status == status).count();
    let avg_efficiency = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.efficiency).sum::<f64>() / records.len() as f64
    };
    MileageStats {
        total: records.len(),
        verified: count(MileageStatus::Verified),
        pending: count(MileageStatus::Pending),
        flagged: count(MileageStatus::Flagged),
        total_km: records.iter().map(|r| u64::from(r.difference)).sum(),
        avg_efficiency,
    }
}

pub fn mileage_efficiency_tone(efficiency: f64) -> Tone {
    efficiency_tone(efficiency, 6.0, 5.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionRecord {
    pub id: u32,
    pub vehicle_plate: &'static str,
    pub vehicle_brand: &'static str,
    pub fuel_consumed: f64,
    pub distance_traveled: u32,
    pub efficiency: f64,
    pub cost: f64,
    pub fuel_type: &'static str,
    pub department: Department,
    pub driver: &'static str,
    pub period: &'static str,
    pub status: ConsumptionStatus,
}

pub const CONSUMPTION_RECORDS: &[ConsumptionRecord] = &[
    ConsumptionRecord {
        id: 1,
        vehicle_plate: "ABC-123",
        vehicle_brand: "Volvo FH16",
        fuel_consumed: 2450.5,
        distance_traveled: 15_200,
        efficiency: 6.20,
        cost: 2940.60,
        fuel_type: "Diesel",
        department: Department::Logistica,
        driver: "Carlos Mendoza",
        period: "Enero 2024",
        status: ConsumptionStatus::Normal,
    },
    ConsumptionRecord {
        id: 2,
        vehicle_plate: "DEF-456",
        vehicle_brand: "Mercedes Actros",
        fuel_consumed: 2890.2,
        distance_traveled: 18_500,
        efficiency: 6.40,
        cost: 3468.24,
        fuel_type: "Diesel",
        department: Department::Transporte,
        driver: "Ana López",
        period: "Enero 2024",
        status: ConsumptionStatus::Normal,
    },
    ConsumptionRecord {
        id: 3,
        vehicle_plate: "GHI-789",
        vehicle_brand: "Ford Transit",
        fuel_consumed: 1250.8,
        distance_traveled: 6_800,
        efficiency: 5.44,
        cost: 1500.96,
        fuel_type: "Gasolina",
        department: Department::Distribucion,
        driver: "Laura Jiménez",
        period: "Enero 2024",
        status: ConsumptionStatus::Low,
    },
    ConsumptionRecord {
        id: 4,
        vehicle_plate: "JKL-012",
        vehicle_brand: "Isuzu NPR",
        fuel_consumed: 980.3,
        distance_traveled: 5_650,
        efficiency: 5.76,
        cost: 1176.36,
        fuel_type: "Diesel",
        department: Department::Reparto,
        driver: "Pedro Ramírez",
        period: "Enero 2024",
        status: ConsumptionStatus::Normal,
    },
    ConsumptionRecord {
        id: 5,
        vehicle_plate: "MNO-345",
        vehicle_brand: "Volvo FH12",
        fuel_consumed: 3200.7,
        distance_traveled: 16_800,
        efficiency: 5.25,
        cost: 3840.84,
        fuel_type: "Diesel",
        department: Department::Logistica,
        driver: "Patricia Morales",
        period: "Enero 2024",
        status: ConsumptionStatus::Alert,
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumptionQuery {
    pub search: String,
    pub department: Option<Department>,
    pub status: Option<ConsumptionStatus>,
}

impl ConsumptionQuery {
    pub fn matches(&self, record: &ConsumptionRecord) -> bool {
        matches_search(
            &self.search,
            &[record.vehicle_plate, record.driver, record.department.label()],
        ) && matches_filter(self.department, record.department)
            && matches_filter(self.status, record.status)
    }

    pub fn apply<'a>(&self, records: &'a [ConsumptionRecord]) -> Vec<&'a ConsumptionRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConsumptionTotals {
    pub vehicles: usize,
    pub total_fuel: f64,
    pub total_cost: f64,
    pub total_distance: u64,
    pub avg_efficiency: f64,
    pub alert_vehicles: usize,
    pub low_efficiency_vehicles: usize,
}

/// Totals over the records the view currently shows, not the whole data set.
pub fn consumption_totals(records: &[&ConsumptionRecord]) -> ConsumptionTotals {
    let vehicles = records.len();
    let avg_efficiency = if vehicles == 0 {
        0.0
    } else {
        records.iter().map(|r| r.efficiency).sum::<f64>() / vehicles as f64
    };
    ConsumptionTotals {
        vehicles,
        total_fuel: records.iter().map(|r| r.fuel_consumed).sum(),
        total_cost: records.iter().map(|r| r.cost).sum(),
        total_distance: records.iter().map(|r| u64::from(r.distance_traveled)).sum(),
        avg_efficiency,
        alert_vehicles: records
            .iter()
            .filter(|r| r.status == ConsumptionStatus::Alert)
            .count(),
        low_efficiency_vehicles: records
            .iter()
            .filter(|r| r.status == ConsumptionStatus::Low)
            .count(),
    }
}

/// Per-department totals in [`Department::ALL`] order, skipping departments
/// with no records.
pub fn department_breakdown(records: &[&ConsumptionRecord]) -> Vec<(Department, ConsumptionTotals)> {
    Department::ALL
        .iter()
        .filter_map(|department| {
            let subset: Vec<&ConsumptionRecord> = records
                .iter()
                .copied()
                .filter(|r| r.department == *department)
                .collect();
            (!subset.is_empty()).then(|| (*department, consumption_totals(&subset)))
        })
        .collect()
}

pub fn consumption_efficiency_tone(efficiency: f64) -> Tone {
    efficiency_tone(efficiency, 6.0, 5.5)
}

fn efficiency_tone(efficiency: f64, good: f64, fair: f64) -> Tone {
    if efficiency >= good {
        Tone::Success
    } else if efficiency >= fair {
        Tone::Warning
    } else {
        Tone::Danger
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleDocument {
    pub name: &'static str,
    pub status: &'static str,
    pub expiry: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceEntry {
    pub date: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub cost: f64,
    pub status: &'static str,
}

/// Full record behind the details and edit screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleDetail {
    pub vehicle: Vehicle,
    pub next_maintenance: &'static str,
    pub fuel_capacity: u32,
    pub engine: &'static str,
    pub transmission: &'static str,
    pub vin: &'static str,
    pub registration_date: &'static str,
    pub insurance_expiry: &'static str,
    pub technical_inspection: &'static str,
    pub notes: &'static str,
    pub documents: &'static [VehicleDocument],
    pub service_history: &'static [ServiceEntry],
}

impl VehicleDetail {
    pub fn fuel_litres(&self) -> u32 {
        self.fuel_capacity * u32::from(self.vehicle.fuel_level) / 100
    }
}

pub const VEHICLE_DETAIL: VehicleDetail = VehicleDetail {
    vehicle: VEHICLES[0],
    next_maintenance: "2024-04-15",
    fuel_capacity: 400,
    engine: "D16G 750 HP",
    transmission: "I-Shift",
    vin: "YV2RTZ0C8DA123456",
    registration_date: "2022-03-15",
    insurance_expiry: "2024-12-31",
    technical_inspection: "2024-06-30",
    notes: "Vehículo en excelente estado. Mantenimiento al día.",
    documents: &[
        VehicleDocument {
            name: "Registro Vehicular",
            status: "vigente",
            expiry: "2025-03-15",
        },
        VehicleDocument {
            name: "Seguro",
            status: "vigente",
            expiry: "2024-12-31",
        },
        VehicleDocument {
            name: "Revisión Técnica",
            status: "vigente",
            expiry: "2024-06-30",
        },
        VehicleDocument {
            name: "Permiso de Circulación",
            status: "vigente",
            expiry: "2024-12-31",
        },
    ],
    service_history: &[
        ServiceEntry {
            date: "2024-01-15",
            kind: "Mantenimiento Preventivo",
            description: "Cambio de aceite y filtros",
            cost: 450.0,
            status: "completado",
        },
        ServiceEntry {
            date: "2023-10-20",
            kind: "Reparación",
            description: "Cambio de llantas delanteras",
            cost: 800.0,
            status: "completado",
        },
        ServiceEntry {
            date: "2023-08-10",
            kind: "Mantenimiento Preventivo",
            description: "Revisión general del motor",
            cost: 650.0,
            status: "completado",
        },
        ServiceEntry {
            date: "2023-05-15",
            kind: "Reparación",
            description: "Reparación del sistema de frenos",
            cost: 1200.0,
            status: "completado",
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetStats {
    pub total_vehicles: u32,
    pub available_vehicles: u32,
    pub maintenance_vehicles: u32,
    pub damaged_vehicles: u32,
    pub pending_tickets: u32,
    pub critical_alerts: u32,
    pub high_mileage_vehicles: u32,
    pub pending_revisions: u32,
    pub fuel_efficiency: f64,
    pub monthly_growth: f64,
}

pub const FLEET_STATS: FleetStats = FleetStats {
    total_vehicles: 245,
    available_vehicles: 189,
    maintenance_vehicles: 14,
    damaged_vehicles: 7,
    pending_tickets: 23,
    critical_alerts: 5,
    high_mileage_vehicles: 12,
    pending_revisions: 8,
    fuel_efficiency: 85.2,
    monthly_growth: 12.5,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry {
    pub vehicle: &'static str,
    pub action: &'static str,
    pub time: &'static str,
    pub tone: Tone,
}

pub const RECENT_ACTIVITY: &[ActivityEntry] = &[
    ActivityEntry {
        vehicle: "Camión ABC-123",
        action: "Mantenimiento completado",
        time: "hace 2 min",
        tone: Tone::Success,
    },
    ActivityEntry {
        vehicle: "Van DEF-456",
        action: "Reporte de daño",
        time: "hace 15 min",
        tone: Tone::Danger,
    },
    ActivityEntry {
        vehicle: "Camión GHI-789",
        action: "Revisión programada",
        time: "hace 32 min",
        tone: Tone::Warning,
    },
    ActivityEntry {
        vehicle: "Bus JKL-012",
        action: "Kilometraje alto detectado",
        time: "hace 1 h",
        tone: Tone::Info,
    },
    ActivityEntry {
        vehicle: "Pickup MNO-345",
        action: "Ticket de servicio abierto",
        time: "hace 2 h",
        tone: Tone::Warning,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemUser {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub active: bool,
    pub last_login: &'static str,
    pub permissions: &'static [&'static str],
}

pub const SYSTEM_USERS: &[SystemUser] = &[
    SystemUser {
        name: "Admin Principal",
        email: "admin@flotaadmin.com",
        role: "Administrador",
        active: true,
        last_login: "2024-01-15 10:30",
        permissions: &["all"],
    },
    SystemUser {
        name: "Carlos Mendoza",
        email: "carlos@flotaadmin.com",
        role: "Supervisor",
        active: true,
        last_login: "2024-01-14 16:45",
        permissions: &["vehicles", "maintenance", "reports"],
    },
    SystemUser {
        name: "Ana López",
        email: "ana@flotaadmin.com",
        role: "Operador",
        active: true,
        last_login: "2024-01-14 08:20",
        permissions: &["vehicles", "mileage"],
    },
    SystemUser {
        name: "Pedro Ramírez",
        email: "pedro@flotaadmin.com",
        role: "Conductor",
        active: false,
        last_login: "2024-01-10 14:15",
        permissions: &["mileage"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Company,
    System,
    Fuel,
    Maintenance,
    Users,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        Self::Company,
        Self::System,
        Self::Fuel,
        Self::Maintenance,
        Self::Users,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Company => "Empresa",
            Self::System => "Sistema",
            Self::Fuel => "Combustible",
            Self::Maintenance => "Mantenimiento",
            Self::Users => "Usuarios",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Company => Self::System,
            Self::System => Self::Fuel,
            Self::Fuel => Self::Maintenance,
            Self::Maintenance => Self::Users,
            Self::Users => Self::Company,
        }
    }

    /// Key/value rows for the tab. The users tab renders [`SYSTEM_USERS`]
    /// instead and has none.
    pub fn rows(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Company => &[
                ("Nombre", "FlotaAdmin Corp"),
                ("Dirección", "Av. Principal 123, Panamá"),
                ("Teléfono", "+507 1234-5678"),
                ("Email", "admin@flotaadmin.com"),
                ("RUC", "RUC-123456789-1-DV"),
            ],
            Self::System => &[
                ("Respaldo automático", "Sí (diario)"),
                ("Alertas de mantenimiento", "Sí"),
                ("Alertas de combustible", "Sí"),
                ("Alertas de kilometraje", "Sí"),
                ("Notificaciones por email", "Sí"),
                ("Notificaciones SMS", "No"),
                ("Idioma", "es"),
                ("Zona horaria", "America/Panama"),
                ("Moneda", "USD"),
                ("Formato de fecha", "DD/MM/YYYY"),
            ],
            Self::Fuel => &[
                ("Precio diésel", "$1.20 / L"),
                ("Precio gasolina", "$1.35 / L"),
                ("Umbral de combustible bajo", "25 %"),
                ("Umbral de consumo alto", "15 %"),
                ("Meta de eficiencia", "6.0 km/L"),
            ],
            Self::Maintenance => &[
                ("Cambio de aceite", "cada 5,000 km"),
                ("Revisión general", "cada 10,000 km"),
                ("Cambio de llantas", "cada 50,000 km"),
                ("Aviso anticipado", "7 días"),
                ("Días de gracia", "3 días"),
            ],
            Self::Users => &[],
        }
    }
}
