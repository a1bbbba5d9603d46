//! Screen view-models
//!
//! One struct per screen. Each owns its fetched data, filter state and
//! transient flags, and talks to the backend through `ApiClient`. Failures
//! never escape a screen: they become toasts and the flags are cleared.

pub mod admin;
pub mod bookings;
pub mod dashboard;
pub mod expert;
pub mod org;
pub mod reports;
pub mod requests;

use chrono::{DateTime, Utc};

use crate::domain::NamedRef;

pub use admin::{
    AdminExpertsScreen, AdminOrgDetailScreen, AdminOrganizationsScreen, AdminUserDetailScreen,
    AdminUsersScreen,
};
pub use bookings::{BookingDetailScreen, BookingListScreen, BookingRecord, SortOrder};
pub use dashboard::{load_dashboard, DashboardSummary, Tile};
pub use expert::{BidForm, ExpertRequestDetailScreen, MyBidsScreen};
pub use org::{MembersScreen, SiteForm, SitesScreen};
pub use reports::{FindingDraft, ReportForm};
pub use requests::{CreateRequestScreen, RequestBidsScreen, RequestForm};

/// Placeholder for missing names in tables.
pub const NOT_AVAILABLE: &str = "-";

/// "12 Mar 2026, 10:00 - 13:00", or a date range across days.
pub fn format_schedule(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> String {
    match (start, end) {
        (Some(start), Some(end)) if start.date_naive() == end.date_naive() => format!(
            "{}, {} - {}",
            start.format("%d %b %Y"),
            start.format("%H:%M"),
            end.format("%H:%M")
        ),
        (Some(start), Some(end)) => format!(
            "{} - {}",
            start.format("%d %b %Y %H:%M"),
            end.format("%d %b %Y %H:%M")
        ),
        (Some(start), None) => start.format("%d %b %Y %H:%M").to_string(),
        _ => "Not scheduled".to_string(),
    }
}

fn name_or_placeholder(r: Option<&NamedRef>) -> String {
    r.map(|r| r.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}
