//! Status badge colours

use crate::domain::status::normalize;

/// Visual variant of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    Gray,
    Indigo,
    Yellow,
    Purple,
    Blue,
    Teal,
    Green,
    Red,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Indigo => "indigo",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Teal => "teal",
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map any backend status string (booking, request, bid, user, verification)
/// to its badge variant. Unknown values are gray.
pub fn status_badge(status: &str) -> BadgeVariant {
    match normalize(status).as_str() {
        "PUBLISHED" | "BIDDING_OPEN" | "OPEN" => BadgeVariant::Indigo,
        "PENDING" | "SUBMITTED" | "UNVERIFIED" => BadgeVariant::Yellow,
        "AWARDED" | "ACCEPTED" => BadgeVariant::Purple,
        "SCHEDULED" => BadgeVariant::Blue,
        "IN_PROGRESS" | "REPORT_SUBMITTED" => BadgeVariant::Teal,
        "COMPLETED" | "APPROVED" | "VERIFIED" | "ACTIVE" => BadgeVariant::Green,
        "CANCELLED" | "CANCELED" | "REJECTED" | "SUSPENDED" | "EXPIRED" => BadgeVariant::Red,
        _ => BadgeVariant::Gray,
    }
}

/// Human label for a status, e.g. `REPORT_SUBMITTED` -> `Report Submitted`.
pub fn status_label(status: &str) -> String {
    normalize(status)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
