use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{NamedRef, SiteRef, TimeWindow};
use super::status::RequestStatus;

/// Service request entity: a published need for an audit at a site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub status: RequestStatus,
    #[serde(default)]
    pub site: Option<SiteRef>,
    #[serde(default)]
    pub organization: Option<NamedRef>,
    #[serde(default)]
    pub preferred_window: Option<TimeWindow>,
    /// Bidding closes at this instant
    #[serde(default)]
    pub bid_close_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub budget: Option<Decimal>,
    #[serde(default)]
    pub bid_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ServiceRequest {
    /// Open for bids: right status and the close deadline not yet reached.
    pub fn is_open_for_bids(&self, now: DateTime<Utc>) -> bool {
        self.status.accepts_bids() && self.bid_close_at.map_or(true, |close| now < close)
    }
}

/// Request DTO for publishing a new service request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub site_id: String,
    pub category: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub preferred_window: TimeWindow,
    pub bid_close_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

/// Request DTO for awarding a bid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardBidRequest {
    pub bid_id: String,
}
