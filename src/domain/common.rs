use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Embedded reference to another record (organization, expert, request)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NamedRef {
    pub id: String,
    #[serde(default, alias = "title")]
    pub name: String,
}

/// Embedded site reference, carries the city used for filtering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SiteRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
}

/// Closed time interval, e.g. an organization's preferred audit window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// True when `[start, end]` lies entirely inside this window.
    pub fn contains_slot(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start >= self.start && end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn slot_containment_is_inclusive() {
        let window = TimeWindow::new(at(10, 9), at(12, 18));
        assert!(window.contains_slot(at(10, 9), at(12, 18)));
        assert!(window.contains_slot(at(11, 10), at(11, 14)));
        assert!(!window.contains_slot(at(10, 8), at(11, 14)));
        assert!(!window.contains_slot(at(11, 10), at(12, 19)));
    }

    #[test]
    fn named_ref_accepts_title_alias() {
        let r: NamedRef = serde_json::from_str(r#"{"id":"req-1","title":"Fire audit"}"#).unwrap();
        assert_eq!(r.name, "Fire audit");
    }
}
