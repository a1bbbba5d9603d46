//! Role landing dashboard: headline counts per role

use crate::api::ApiClient;
use crate::auth::{Role, Session};
use crate::domain::{BidStatus, BookingStatus, VerificationStatus};
use crate::ui::Toaster;

use super::{
    AdminExpertsScreen, AdminOrganizationsScreen, AdminUsersScreen, BookingListScreen,
    MyBidsScreen, SitesScreen,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub label: String,
    pub count: usize,
}

impl Tile {
    fn new(label: &str, count: usize) -> Self {
        Self {
            label: label.to_string(),
            count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub role: Role,
    pub tiles: Vec<Tile>,
    /// False when any underlying list failed to load
    pub complete: bool,
}

impl DashboardSummary {
    pub fn tile(&self, label: &str) -> Option<usize> {
        self.tiles.iter().find(|t| t.label == label).map(|t| t.count)
    }
}

/// Load the screens behind the session's landing page and summarise them.
pub async fn load_dashboard(api: &ApiClient, toaster: &Toaster, session: &Session) -> DashboardSummary {
    match session.role {
        Role::Organization => organization_dashboard(api, toaster, session).await,
        Role::Expert => expert_dashboard(api, toaster).await,
        Role::Admin => admin_dashboard(api, toaster).await,
    }
}

async fn organization_dashboard(api: &ApiClient, toaster: &Toaster, session: &Session) -> DashboardSummary {
    let mut bookings = BookingListScreen::new(api.clone(), toaster.clone());
    let mut complete = bookings.load().await;

    let counts = bookings.status_counts();
    let count = |status: BookingStatus| counts.get(status.as_str()).copied().unwrap_or(0);

    let mut tiles = vec![
        Tile::new("Bookings", bookings.list.len()),
        Tile::new("Scheduled", count(BookingStatus::Scheduled)),
        Tile::new("In progress", count(BookingStatus::InProgress)),
        Tile::new("Reports to review", count(BookingStatus::ReportSubmitted)),
    ];

    match session.require_org_id() {
        Ok(org_id) => {
            let mut sites = SitesScreen::new(api.clone(), toaster.clone(), org_id);
            complete &= sites.load().await;
            tiles.push(Tile::new("Sites", sites.list.len()));
        }
        Err(e) => {
            toaster.client_error(&e);
            complete = false;
        }
    }

    DashboardSummary {
        role: Role::Organization,
        tiles,
        complete,
    }
}

async fn expert_dashboard(api: &ApiClient, toaster: &Toaster) -> DashboardSummary {
    let mut bids = MyBidsScreen::new(api.clone(), toaster.clone());
    let mut bookings = BookingListScreen::new(api.clone(), toaster.clone());
    let complete = bids.load().await & bookings.load().await;

    let bids_with = |status: BidStatus| {
        bids.list
            .items
            .iter()
            .filter(|b| b.status == status)
            .count()
    };
    let counts = bookings.status_counts();
    let upcoming = counts
        .get(BookingStatus::Scheduled.as_str())
        .copied()
        .unwrap_or(0);

    DashboardSummary {
        role: Role::Expert,
        tiles: vec![
            Tile::new("Open bids", bids_with(BidStatus::Submitted)),
            Tile::new("Won bids", bids_with(BidStatus::Awarded)),
            Tile::new("Upcoming audits", upcoming),
        ],
        complete,
    }
}

async fn admin_dashboard(api: &ApiClient, toaster: &Toaster) -> DashboardSummary {
    let mut users = AdminUsersScreen::new(api.clone(), toaster.clone());
    let mut orgs = AdminOrganizationsScreen::new(api.clone(), toaster.clone());
    let mut experts = AdminExpertsScreen::new(api.clone(), toaster.clone());

    let complete = users.load().await & orgs.load().await & experts.load().await;

    let verified = experts
        .list
        .items
        .iter()
        .filter(|e| e.verification_status == VerificationStatus::Verified)
        .count();

    DashboardSummary {
        role: Role::Admin,
        tiles: vec![
            Tile::new("Users", users.list.len()),
            Tile::new("Organizations", orgs.list.len()),
            Tile::new("Verified experts", verified),
            Tile::new("Pending verifications", experts.pending().len()),
        ],
        complete,
    }
}
