use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::NamedRef;
use super::status::BidStatus;

/// Expert bid entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertBid {
    pub id: String,
    #[serde(default)]
    pub request_id: Option<String>,
    /// Request summary, present on the expert's own bid list
    #[serde(default)]
    pub request: Option<NamedRef>,
    #[serde(default)]
    pub expert: Option<NamedRef>,
    pub price: Decimal,
    #[serde(default)]
    pub proposed_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub proposed_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deliverables: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: BidStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request DTO for creating a bid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBidRequest {
    pub request_id: String,
    pub price: Decimal,
    pub proposed_start: DateTime<Utc>,
    pub proposed_end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliverables: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
