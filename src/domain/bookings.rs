use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{NamedRef, SiteRef};
use super::reports::Report;
use super::status::BookingStatus;

/// Booking entity, created by the backend once a bid is awarded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub request_id: Option<String>,
    pub status: BookingStatus,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub scheduled_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scheduled_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub organization: Option<NamedRef>,
    #[serde(default)]
    pub site: Option<SiteRef>,
    #[serde(default)]
    pub expert: Option<NamedRef>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub report: Option<Report>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request DTO for a booking status transition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
