//! Path addressing for sections, as used by `--route` and the `route`
//! command.

use super::state::SectionId;

/// Base path the dashboard is served under in production.
pub const BASE_PATH: &str = "/flota-admin";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Login,
    Section(SectionId),
    /// Root or unmatched path; always lands on the dashboard.
    Redirect(SectionId),
}

impl RouteTarget {
    /// The section a shell should show for this target, if any.
    pub fn section(self) -> Option<SectionId> {
        match self {
            Self::Login => None,
            Self::Section(section) | Self::Redirect(section) => Some(section),
        }
    }
}

pub fn resolve_path(path: &str) -> RouteTarget {
    let trimmed = path.trim();
    let without_base = strip_base(trimmed);
    let normalized = without_base.trim_end_matches('/');
    let segment = normalized.strip_prefix('/').unwrap_or(normalized);

    if segment.is_empty() {
        return RouteTarget::Redirect(SectionId::Dashboard);
    }
    if format!("/{segment}") == LOGIN_PATH {
        return RouteTarget::Login;
    }
    match SectionId::parse(segment) {
        Some(section) => RouteTarget::Section(section),
        None => {
            tracing::debug!(path, "unmatched route, redirecting to dashboard");
            RouteTarget::Redirect(SectionId::Dashboard)
        }
    }
}

pub fn path_for(section: SectionId) -> String {
    format!("/{}", section.as_str())
}

fn strip_base(path: &str) -> &str {
    match path.strip_prefix(BASE_PATH) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}
