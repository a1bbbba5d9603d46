//! Audit report editor used while executing a booking

use crate::domain::{Finding, Severity, SubmitReportRequest};
use url::Url;

use crate::ui::FormErrors;

/// Finding being typed in before it is added to the report
#[derive(Debug, Clone)]
pub struct FindingDraft {
    pub title: String,
    pub severity: Severity,
    pub description: String,
    pub location: String,
    pub evidence: Vec<String>,
}

impl Default for FindingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            severity: Severity::Medium,
            description: String::new(),
            location: String::new(),
            evidence: Vec::new(),
        }
    }
}

impl FindingDraft {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.require("title", "Finding title", &self.title);
        errors.require("description", "Description", &self.description);
        for link in &self.evidence {
            if !is_web_link(link) {
                errors.add("evidence", format!("Evidence must be a link, got '{}'", link.trim()));
            }
        }
        errors
    }

    fn to_finding(&self) -> Finding {
        let location = self.location.trim();
        Finding {
            title: self.title.trim().to_string(),
            severity: self.severity.clone(),
            description: self.description.trim().to_string(),
            location: (!location.is_empty()).then(|| location.to_string()),
            evidence: self.evidence.iter().map(|e| e.trim().to_string()).collect(),
        }
    }
}

/// An absolute http(s) URL with a host.
fn is_web_link(raw: &str) -> bool {
    match Url::parse(raw.trim()) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().map_or(false, |host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Report form state
#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    pub summary: String,
    pub recommendations: String,
    pub findings: Vec<Finding>,
    pub draft: FindingDraft,
    pub errors: FormErrors,
}

impl ReportForm {
    /// Move the draft into the findings list. Returns false and keeps the
    /// draft when it is incomplete.
    pub fn add_finding(&mut self) -> bool {
        let errors = self.draft.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }

        self.findings.push(self.draft.to_finding());
        self.draft = FindingDraft::default();
        self.errors.clear();
        true
    }

    pub fn remove_finding(&mut self, index: usize) -> Option<Finding> {
        (index < self.findings.len()).then(|| self.findings.remove(index))
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.require("summary", "Summary", &self.summary);
        if self.findings.is_empty() {
            errors.add("findings", "Add at least one finding");
        }
        errors
    }

    pub fn to_request(&self) -> SubmitReportRequest {
        let recommendations = self.recommendations.trim();
        SubmitReportRequest {
            summary: self.summary.trim().to_string(),
            findings: self.findings.clone(),
            recommendations: (!recommendations.is_empty()).then(|| recommendations.to_string()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
