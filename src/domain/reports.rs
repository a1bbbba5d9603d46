use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::status::normalize;

/// Finding severity
///
/// Unknown values are kept as `Other` and rank below `Low`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
            Self::Other(s) => s.as_str(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Other(_) => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.as_str().cmp(other.as_str()))
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        match normalize(&s).as_str() {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            "CRITICAL" => Self::Critical,
            _ => Self::Other(s),
        }
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        s.as_str().to_string()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One observation captured during an audit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub title: String,
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Evidence photo/document URLs
    #[serde(default)]
    pub evidence: Vec<String>,
}

/// Report entity attached to a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub recommendations: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Report {
    /// Highest severity across all findings.
    pub fn worst_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| &f.severity).max().cloned()
    }
}

/// Request DTO for submitting a report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
    pub summary: String,
    pub findings: Vec<Finding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: &str) -> serde_json::Value {
        serde_json::json!({ "title": "Exit sign", "severity": severity })
    }

    #[test]
    fn unknown_severity_is_kept() {
        let report: Report = serde_json::from_value(serde_json::json!({
            "summary": "Walkthrough",
            "findings": [finding("INFO"), finding("medium")]
        }))
        .unwrap();

        assert_eq!(report.findings[0].severity, Severity::Other("INFO".to_string()));
        assert_eq!(report.findings[1].severity, Severity::Medium);
        assert_eq!(report.worst_severity(), Some(Severity::Medium));
        assert_eq!(serde_json::to_value(&report.findings[0]).unwrap()["severity"], "INFO");
    }

    #[test]
    fn severities_order_by_rank() {
        let mut all = vec![
            Severity::Critical,
            Severity::Other("INFO".to_string()),
            Severity::Low,
            Severity::High,
        ];
        all.sort();
        assert_eq!(
            all,
            vec![
                Severity::Other("INFO".to_string()),
                Severity::Low,
                Severity::High,
                Severity::Critical
            ]
        );
    }
}
