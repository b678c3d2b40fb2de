use super::fleet::Tone;
use super::state::SectionId;

/// Views with real content. Every other section renders a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureView {
    Dashboard,
    Vehicles,
    VehicleDetails,
    VehicleEdit,
    Maintenance,
    Mileage,
    Consumption,
    Settings,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Feature(FeatureView),
    Placeholder {
        headline: &'static str,
        blurb: &'static str,
    },
}

impl ViewKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Feature(_) => "feature",
            Self::Placeholder { .. } => "placeholder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub section: SectionId,
    pub title: &'static str,
    pub icon: &'static str,
    pub kind: ViewKind,
}

const fn feature(
    section: SectionId,
    title: &'static str,
    icon: &'static str,
    view: FeatureView,
) -> ViewDescriptor {
    ViewDescriptor {
        section,
        title,
        icon,
        kind: ViewKind::Feature(view),
    }
}

const fn placeholder(
    section: SectionId,
    title: &'static str,
    icon: &'static str,
    headline: &'static str,
    blurb: &'static str,
) -> ViewDescriptor {
    ViewDescriptor {
        section,
        title,
        icon,
        kind: ViewKind::Placeholder { headline, blurb },
    }
}

/// One entry per [`SectionId`], in [`SectionId::ALL`] order.
pub const SECTION_REGISTRY: [ViewDescriptor; 15] = [
    feature(
        SectionId::Dashboard,
        "Dashboard",
        "📊",
        FeatureView::Dashboard,
    ),
    feature(
        SectionId::Vehicles,
        "Gestión de Vehículos",
        "🚛",
        FeatureView::Vehicles,
    ),
    feature(
        SectionId::VehicleDetails,
        "Detalle de Vehículo",
        "🚛",
        FeatureView::VehicleDetails,
    ),
    feature(
        SectionId::VehicleEdit,
        "Editar Vehículo",
        "✏️",
        FeatureView::VehicleEdit,
    ),
    feature(
        SectionId::Maintenance,
        "Gestión de Mantenimientos",
        "🔧",
        FeatureView::Maintenance,
    ),
    feature(
        SectionId::Mileage,
        "Gestión de Kilometrajes",
        "📏",
        FeatureView::Mileage,
    ),
    feature(
        SectionId::Consumption,
        "Consumo de Combustible",
        "⛽",
        FeatureView::Consumption,
    ),
    feature(
        SectionId::Settings,
        "Configuración",
        "⚙️",
        FeatureView::Settings,
    ),
    feature(SectionId::Profile, "Mi Perfil", "👤", FeatureView::Profile),
    placeholder(
        SectionId::Damages,
        "Daños",
        "⚠️",
        "Daños de Vehículos",
        "Sección en desarrollo - Aquí se mostrarán los reportes de daños",
    ),
    placeholder(
        SectionId::Tickets,
        "Tickets",
        "🎫",
        "Tickets Pendientes",
        "Sección en desarrollo - Aquí se mostrarán todos los tickets de mantenimiento",
    ),
    placeholder(
        SectionId::Alerts,
        "Alertas",
        "🚨",
        "Centro de Alertas",
        "Sección en desarrollo - Aquí se mostrarán las alertas del sistema",
    ),
    placeholder(
        SectionId::Revisions,
        "Revisiones",
        "🔍",
        "Alertas de Revisión",
        "Sección en desarrollo - Aquí se mostrarán las alertas de revisión programadas",
    ),
    placeholder(
        SectionId::Analytics,
        "Analíticas",
        "📈",
        "Analíticas y Gráficas",
        "Sección en desarrollo - Gráficas de rendimiento y estadísticas",
    ),
    placeholder(
        SectionId::Departments,
        "Departamentos",
        "🏢",
        "Control por Departamentos",
        "Sección en desarrollo - Análisis por área o departamento",
    ),
];

/// Total over [`SectionId`]; the index match is exhaustive so a new section
/// cannot compile without a registry slot.
pub fn resolve(section: SectionId) -> &'static ViewDescriptor {
    let idx = match section {
        SectionId::Dashboard => 0,
        SectionId::Vehicles => 1,
        SectionId::VehicleDetails => 2,
        SectionId::VehicleEdit => 3,
        SectionId::Maintenance => 4,
        SectionId::Mileage => 5,
        SectionId::Consumption => 6,
        SectionId::Settings => 7,
        SectionId::Profile => 8,
        SectionId::Damages => 9,
        SectionId::Tickets => 10,
        SectionId::Alerts => 11,
        SectionId::Revisions => 12,
        SectionId::Analytics => 13,
        SectionId::Departments => 14,
    };
    &SECTION_REGISTRY[idx]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBadge {
    pub text: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub section: SectionId,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub badge: Option<NavBadge>,
}

const fn badge(text: &'static str, tone: Tone) -> Option<NavBadge> {
    Some(NavBadge { text, tone })
}

/// Sidebar entries, top to bottom. Detail, edit and profile screens are
/// reachable from other views and are not listed.
pub const NAV_MENU: [NavEntry; 12] = [
    NavEntry {
        section: SectionId::Dashboard,
        label: "Dashboard",
        icon: "📊",
        description: "Panel principal",
        badge: None,
    },
    NavEntry {
        section: SectionId::Vehicles,
        label: "Vehículos",
        icon: "🚛",
        description: "Inventario de flota",
        badge: badge("245", Tone::Info),
    },
    NavEntry {
        section: SectionId::Maintenance,
        label: "Mantenimientos",
        icon: "🔧",
        description: "Servicios y reparaciones",
        badge: badge("14", Tone::Warning),
    },
    NavEntry {
        section: SectionId::Damages,
        label: "Daños",
        icon: "⚠️",
        description: "Daños de vehículos",
        badge: badge("7", Tone::Danger),
    },
    NavEntry {
        section: SectionId::Tickets,
        label: "Tickets",
        icon: "🎫",
        description: "Tickets pendientes",
        badge: badge("23", Tone::Info),
    },
    NavEntry {
        section: SectionId::Alerts,
        label: "Alertas",
        icon: "🚨",
        description: "Notificaciones críticas",
        badge: badge("5", Tone::Danger),
    },
    NavEntry {
        section: SectionId::Mileage,
        label: "Kilometrajes",
        icon: "📏",
        description: "Control de kilometraje",
        badge: badge("12", Tone::Warning),
    },
    NavEntry {
        section: SectionId::Revisions,
        label: "Revisiones",
        icon: "🔍",
        description: "Alertas de revisión",
        badge: badge("8", Tone::Warning),
    },
    NavEntry {
        section: SectionId::Consumption,
        label: "Consumo",
        icon: "⛽",
        description: "Análisis de combustible",
        badge: None,
    },
    NavEntry {
        section: SectionId::Analytics,
        label: "Analíticas",
        icon: "📈",
        description: "Gráficas y reportes",
        badge: None,
    },
    NavEntry {
        section: SectionId::Departments,
        label: "Departamentos",
        icon: "🏢",
        description: "Control por área",
        badge: None,
    },
    NavEntry {
        section: SectionId::Settings,
        label: "Configuración",
        icon: "⚙️",
        description: "Ajustes del sistema",
        badge: None,
    },
];

pub fn nav_index_of(section: SectionId) -> Option<usize> {
    NAV_MENU.iter().position(|entry| entry.section == section)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_section_resolves_to_its_own_descriptor() {
        for section in SectionId::ALL {
            assert_eq!(resolve(section).section, section);
        }
        let registered: Vec<SectionId> = SECTION_REGISTRY.iter().map(|d| d.section).collect();
        assert_eq!(registered, SectionId::ALL.to_vec());
    }

    #[test]
    fn placeholder_sections_are_exactly_the_unbuilt_ones() {
        let placeholders: Vec<&str> = SectionId::ALL
            .into_iter()
            .filter(|section| matches!(resolve(*section).kind, ViewKind::Placeholder { .. }))
            .map(SectionId::as_str)
            .collect();
        assert_eq!(
            placeholders,
            vec![
                "damages",
                "tickets",
                "alerts",
                "revisions",
                "analytics",
                "departments"
            ]
        );
    }

    #[test]
    fn sidebar_menu_order_and_hidden_sections() {
        let order: Vec<&str> = NAV_MENU.iter().map(|e| e.section.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "dashboard",
                "vehicles",
                "maintenance",
                "damages",
                "tickets",
                "alerts",
                "mileage",
                "revisions",
                "consumption",
                "analytics",
                "departments",
                "settings"
            ]
        );
        for hidden in [
            SectionId::VehicleDetails,
            SectionId::VehicleEdit,
            SectionId::Profile,
        ] {
            assert_eq!(nav_index_of(hidden), None);
        }
    }

    #[test]
    fn badges_mirror_fleet_counters() {
        let badges: Vec<(&str, &str)> = NAV_MENU
            .iter()
            .filter_map(|e| e.badge.map(|b| (e.section.as_str(), b.text)))
            .collect();
        assert_eq!(
            badges,
            vec![
                ("vehicles", "245"),
                ("maintenance", "14"),
                ("damages", "7"),
                ("tickets", "23"),
                ("alerts", "5"),
                ("mileage", "12"),
                ("revisions", "8"),
            ]
        );
    }
}
