//! Lifecycle status values as reported by the backend
//!
//! The backend owns every transition. These enums only give the client
//! typed names for the strings it displays and sends back. Unknown values
//! are preserved so a newer backend never breaks deserialization.

use serde::{Deserialize, Serialize};

/// Booking status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Draft,
    Published,
    BiddingOpen,
    Awarded,
    Scheduled,
    InProgress,
    ReportSubmitted,
    Completed,
    Cancelled,
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::BiddingOpen => "BIDDING_OPEN",
            Self::Awarded => "AWARDED",
            Self::Scheduled => "SCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::ReportSubmitted => "REPORT_SUBMITTED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        match normalize(&s).as_str() {
            "DRAFT" => Self::Draft,
            "PUBLISHED" => Self::Published,
            "BIDDING_OPEN" => Self::BiddingOpen,
            "AWARDED" => Self::Awarded,
            "SCHEDULED" => Self::Scheduled,
            "IN_PROGRESS" => Self::InProgress,
            "REPORT_SUBMITTED" => Self::ReportSubmitted,
            "COMPLETED" => Self::Completed,
            "CANCELLED" | "CANCELED" => Self::Cancelled,
            _ => Self::Other(s),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(s: BookingStatus) -> Self {
        s.as_str().to_string()
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Service request status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    Draft,
    Published,
    BiddingOpen,
    Awarded,
    Closed,
    Cancelled,
    Other(String),
}

impl RequestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::BiddingOpen => "BIDDING_OPEN",
            Self::Awarded => "AWARDED",
            Self::Closed => "CLOSED",
            Self::Cancelled => "CANCELLED",
            Self::Other(s) => s.as_str(),
        }
    }

    pub fn accepts_bids(&self) -> bool {
        matches!(self, Self::Published | Self::BiddingOpen)
    }
}

impl From<String> for RequestStatus {
    fn from(s: String) -> Self {
        match normalize(&s).as_str() {
            "DRAFT" => Self::Draft,
            "PUBLISHED" => Self::Published,
            "BIDDING_OPEN" | "OPEN" => Self::BiddingOpen,
            "AWARDED" => Self::Awarded,
            "CLOSED" => Self::Closed,
            "CANCELLED" | "CANCELED" => Self::Cancelled,
            _ => Self::Other(s),
        }
    }
}

impl From<RequestStatus> for String {
    fn from(s: RequestStatus) -> Self {
        s.as_str().to_string()
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expert bid status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum BidStatus {
    Submitted,
    Awarded,
    Rejected,
    Withdrawn,
    Other(String),
}

impl BidStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::Awarded => "AWARDED",
            Self::Rejected => "REJECTED",
            Self::Withdrawn => "WITHDRAWN",
            Self::Other(s) => s.as_str(),
        }
    }

    /// Only bids still under consideration can be withdrawn or awarded.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

impl From<String> for BidStatus {
    fn from(s: String) -> Self {
        match normalize(&s).as_str() {
            "SUBMITTED" | "PENDING" => Self::Submitted,
            "AWARDED" | "ACCEPTED" => Self::Awarded,
            "REJECTED" => Self::Rejected,
            "WITHDRAWN" => Self::Withdrawn,
            _ => Self::Other(s),
        }
    }
}

impl From<BidStatus> for String {
    fn from(s: BidStatus) -> Self {
        s.as_str().to_string()
    }
}

impl std::fmt::Display for BidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expert verification status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
    Other(String),
}

impl VerificationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
            Self::Rejected => "REJECTED",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for VerificationStatus {
    fn from(s: String) -> Self {
        match normalize(&s).as_str() {
            "PENDING" | "UNVERIFIED" => Self::Pending,
            "VERIFIED" => Self::Verified,
            "REJECTED" => Self::Rejected,
            _ => Self::Other(s),
        }
    }
}

impl From<VerificationStatus> for String {
    fn from(s: VerificationStatus) -> Self {
        s.as_str().to_string()
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Upper-case a status string and fold `-` and spaces into `_`.
pub fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
