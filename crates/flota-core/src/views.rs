//! Session-only state owned by the feature views. None of it is persisted and
//! none of it survives a restart; the navigation controller never reads it.

use super::fleet::cycle_filter;
use super::fleet::page_count;
use super::fleet::ConsumptionQuery;
use super::fleet::MaintenanceQuery;
use super::fleet::MileageQuery;
use super::fleet::SettingsTab;
use super::fleet::VehicleDetail;
use super::fleet::VehicleQuery;
use super::fleet::MAINTENANCE_PER_PAGE;
use super::fleet::MAINTENANCE_RECORDS;
use super::fleet::MILEAGE_PER_PAGE;
use super::fleet::MILEAGE_RECORDS;
use super::fleet::VEHICLES;
use super::fleet::VEHICLES_PER_PAGE;
use super::fleet::VEHICLE_DETAIL;
use super::state::SectionId;

/// Search, filters and paging shared by the list-style views.
pub trait ListView {
    fn search_mut(&mut self) -> &mut String;
    fn cycle_primary_filter(&mut self);
    fn cycle_secondary_filter(&mut self) {}
    fn toggle_flag(&mut self) {}
    fn page_mut(&mut self) -> Option<&mut usize> {
        None
    }
    fn total_pages(&self) -> usize {
        1
    }

    /// Filters changed, so the current page may no longer exist.
    fn reset_page(&mut self) {
        if let Some(page) = self.page_mut() {
            *page = 0;
        }
    }

    fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        match self.page_mut() {
            Some(page) if *page + 1 < total => {
                *page += 1;
                true
            }
            _ => false,
        }
    }

    fn prev_page(&mut self) -> bool {
        match self.page_mut() {
            Some(page) if *page > 0 => {
                *page -= 1;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleLayout {
    #[default]
    Grid,
    Table,
}

impl VehicleLayout {
    pub fn toggle(self) -> Self {
        match self {
            Self::Grid => Self::Table,
            Self::Table => Self::Grid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Tarjetas",
            Self::Table => "Tabla",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VehiclesView {
    pub query: VehicleQuery,
    pub page: usize,
    pub layout: VehicleLayout,
    /// Row within the current page.
    pub cursor: usize,
}

impl ListView for VehiclesView {
    fn search_mut(&mut self) -> &mut String {
        &mut self.query.search
    }

    fn cycle_primary_filter(&mut self) {
        self.query.status = cycle_filter(self.query.status);
    }

    fn toggle_flag(&mut self) {
        self.layout = self.layout.toggle();
    }

    fn page_mut(&mut self) -> Option<&mut usize> {
        Some(&mut self.page)
    }

    fn total_pages(&self) -> usize {
        page_count(self.query.apply(VEHICLES).len(), VEHICLES_PER_PAGE)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MaintenanceView {
    pub query: MaintenanceQuery,
    pub page: usize,
}

impl ListView for MaintenanceView {
    fn search_mut(&mut self) -> &mut String {
        &mut self.query.search
    }

    fn cycle_primary_filter(&mut self) {
        self.query.status = cycle_filter(self.query.status);
    }

    fn cycle_secondary_filter(&mut self) {
        self.query.priority = cycle_filter(self.query.priority);
    }

    fn toggle_flag(&mut self) {
        self.query.future_only = !self.query.future_only;
        self.page = 0;
    }

    fn page_mut(&mut self) -> Option<&mut usize> {
        Some(&mut self.page)
    }

    fn total_pages(&self) -> usize {
        page_count(
            self.query.apply(MAINTENANCE_RECORDS).len(),
            MAINTENANCE_PER_PAGE,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct MileageView {
    pub query: MileageQuery,
    pub page: usize,
}

impl ListView for MileageView {
    fn search_mut(&mut self) -> &mut String {
        &mut self.query.search
    }

    fn cycle_primary_filter(&mut self) {
        self.query.status = cycle_filter(self.query.status);
    }

    fn cycle_secondary_filter(&mut self) {
        self.query.location = cycle_filter(self.query.location);
    }

    fn page_mut(&mut self) -> Option<&mut usize> {
        Some(&mut self.page)
    }

    fn total_pages(&self) -> usize {
        page_count(self.query.apply(MILEAGE_RECORDS).len(), MILEAGE_PER_PAGE)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsumptionView {
    pub query: ConsumptionQuery,
}

impl ListView for ConsumptionView {
    fn search_mut(&mut self) -> &mut String {
        &mut self.query.search
    }

    fn cycle_primary_filter(&mut self) {
        self.query.department = cycle_filter(self.query.department);
    }

    fn cycle_secondary_filter(&mut self) {
        self.query.status = cycle_filter(self.query.status);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleField {
    Plate,
    Brand,
    Model,
    Year,
    Driver,
    Mileage,
    Engine,
    Transmission,
    Vin,
    Notes,
}

impl VehicleField {
    pub const ALL: [VehicleField; 10] = [
        Self::Plate,
        Self::Brand,
        Self::Model,
        Self::Year,
        Self::Driver,
        Self::Mileage,
        Self::Engine,
        Self::Transmission,
        Self::Vin,
        Self::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Plate => "Placa",
            Self::Brand => "Marca",
            Self::Model => "Modelo",
            Self::Year => "Año",
            Self::Driver => "Conductor",
            Self::Mileage => "Kilometraje",
            Self::Engine => "Motor",
            Self::Transmission => "Transmisión",
            Self::Vin => "VIN",
            Self::Notes => "Notas",
        }
    }

    fn numeric(self) -> bool {
        matches!(self, Self::Year | Self::Mileage)
    }

    fn initial_value(self, detail: &VehicleDetail) -> String {
        match self {
            Self::Plate => detail.vehicle.plate.to_string(),
            Self::Brand => detail.vehicle.brand.to_string(),
            Self::Model => detail.vehicle.model.to_string(),
            Self::Year => detail.vehicle.year.to_string(),
            Self::Driver => detail.vehicle.driver.to_string(),
            Self::Mileage => detail.vehicle.mileage.to_string(),
            Self::Engine => detail.engine.to_string(),
            Self::Transmission => detail.transmission.to_string(),
            Self::Vin => detail.vin.to_string(),
            Self::Notes => detail.notes.to_string(),
        }
    }
}

/// Edit form for the vehicle shown on the details screen. Saving only
/// acknowledges the edit; the fleet data is static.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleEditForm {
    pub values: Vec<String>,
    pub focus: usize,
    pub dirty: bool,
}

impl Default for VehicleEditForm {
    fn default() -> Self {
        Self::for_vehicle(&VEHICLE_DETAIL)
    }
}

impl VehicleEditForm {
    pub fn for_vehicle(detail: &VehicleDetail) -> Self {
        Self {
            values: VehicleField::ALL
                .iter()
                .map(|field| field.initial_value(detail))
                .collect(),
            focus: 0,
            dirty: false,
        }
    }

    pub fn focused_field(&self) -> VehicleField {
        VehicleField::ALL[self.focus % VehicleField::ALL.len()]
    }

    pub fn value(&self, field: VehicleField) -> &str {
        VehicleField::ALL
            .iter()
            .position(|candidate| *candidate == field)
            .and_then(|idx| self.values.get(idx))
            .map_or("", String::as_str)
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % VehicleField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self
            .focus
            .checked_sub(1)
            .unwrap_or(VehicleField::ALL.len() - 1);
    }

    /// Numeric fields only accept digits.
    pub fn input(&mut self, ch: char) -> bool {
        if self.focused_field().numeric() && !ch.is_ascii_digit() {
            return false;
        }
        let Some(value) = self.values.get_mut(self.focus) else {
            return false;
        };
        value.push(ch);
        self.dirty = true;
        true
    }

    pub fn backspace(&mut self) -> bool {
        let Some(value) = self.values.get_mut(self.focus) else {
            return false;
        };
        if value.pop().is_some() {
            self.dirty = true;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsView {
    pub tab: SettingsTab,
}

/// Transient message shown in the content header, e.g. after saving a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default)]
pub struct FeatureViews {
    pub vehicles: VehiclesView,
    pub maintenance: MaintenanceView,
    pub mileage: MileageView,
    pub consumption: ConsumptionView,
    pub settings: SettingsView,
    pub vehicle_edit: VehicleEditForm,
    pub notice: Option<Notice>,
}

impl FeatureViews {
    /// The list view backing `section`, if that section has search and
    /// filters.
    pub fn list_mut(&mut self, section: SectionId) -> Option<&mut dyn ListView> {
        match section {
            SectionId::Vehicles => Some(&mut self.vehicles),
            SectionId::Maintenance => Some(&mut self.maintenance),
            SectionId::Mileage => Some(&mut self.mileage),
            SectionId::Consumption => Some(&mut self.consumption),
            _ => None,
        }
    }

    /// Entering a section starts its view from scratch, as a freshly opened
    /// screen would.
    pub fn reset_section(&mut self, section: SectionId) {
        match section {
            SectionId::Vehicles => self.vehicles = VehiclesView::default(),
            SectionId::Maintenance => self.maintenance = MaintenanceView::default(),
            SectionId::Mileage => self.mileage = MileageView::default(),
            SectionId::Consumption => self.consumption = ConsumptionView::default(),
            SectionId::Settings => self.settings = SettingsView::default(),
            SectionId::VehicleEdit => self.vehicle_edit = VehicleEditForm::default(),
            _ => {}
        }
    }
}
