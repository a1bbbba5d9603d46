//! Booking list and booking detail screens

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{info, warn};

use super::reports::ReportForm;
use super::{format_schedule, name_or_placeholder, NOT_AVAILABLE};
use crate::api::ApiClient;
use crate::domain::{Booking, BookingStatus, Report};
use crate::ui::{status_badge, BadgeVariant, Facet, Filterable, ListState, Toaster};

/// Booking row as displayed in the bookings table
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub id: String,
    pub req_id: String,
    pub customer: String,
    pub site: String,
    pub expert: String,
    pub schedule: String,
    pub scheduled_start: Option<DateTime<Utc>>,
    pub status: BookingStatus,
    pub city: String,
    pub category: String,
}

impl From<&Booking> for BookingRecord {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id.clone(),
            req_id: b.request_id.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            customer: name_or_placeholder(b.organization.as_ref()),
            site: b
                .site
                .as_ref()
                .map(|s| s.name.clone())
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            expert: b
                .expert
                .as_ref()
                .map(|e| e.name.clone())
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "Unassigned".to_string()),
            schedule: format_schedule(b.scheduled_start, b.scheduled_end),
            scheduled_start: b.scheduled_start,
            status: b.status.clone(),
            city: b
                .site
                .as_ref()
                .and_then(|s| s.city.clone())
                .unwrap_or_default(),
            category: b.category.clone().unwrap_or_default(),
        }
    }
}

impl BookingRecord {
    pub fn badge(&self) -> BadgeVariant {
        status_badge(self.status.as_str())
    }
}

impl Filterable for BookingRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.req_id.as_str(),
            self.customer.as_str(),
            self.site.as_str(),
            self.expert.as_str(),
        ]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Status => Some(self.status.as_str()),
            Facet::City => Some(self.city.as_str()),
            Facet::Category => Some(self.category.as_str()),
            _ => None,
        }
    }
}

/// Ordering of the bookings table by schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    SoonestFirst,
    LatestFirst,
}

/// GET /bookings, filtered by search/status/city/category
pub struct BookingListScreen {
    api: ApiClient,
    toaster: Toaster,
    pub list: ListState<BookingRecord>,
    pub sort: SortOrder,
}

impl BookingListScreen {
    pub fn new(api: ApiClient, toaster: Toaster) -> Self {
        Self {
            api,
            toaster,
            list: ListState::new(),
            sort: SortOrder::default(),
        }
    }

    pub async fn load(&mut self) -> bool {
        let api = &self.api;
        let fetch = async {
            api.list_bookings()
                .await
                .map(|rows| rows.iter().map(BookingRecord::from).collect::<Vec<_>>())
        };
        self.list.load(fetch, &self.toaster, "bookings").await
    }

    /// Filtered rows in schedule order. Unscheduled bookings go last.
    pub fn visible(&self) -> Vec<&BookingRecord> {
        let mut rows = self.list.visible();
        rows.sort_by(|a, b| match (a.scheduled_start, b.scheduled_start) {
            (Some(x), Some(y)) => match self.sort {
                SortOrder::SoonestFirst => x.cmp(&y),
                SortOrder::LatestFirst => y.cmp(&x),
            },
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        rows
    }

    /// Bookings per status over the unfiltered list, for dashboard tiles.
    pub fn status_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.list.items {
            *counts.entry(row.status.as_str().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

/// GET /bookings/:id plus status transitions and report submission
pub struct BookingDetailScreen {
    api: ApiClient,
    toaster: Toaster,
    booking_id: String,
    pub booking: Option<Booking>,
    pub load_error: Option<String>,
    pub report_form: ReportForm,
    pub is_loading: bool,
    pub is_submitting: bool,
}

impl BookingDetailScreen {
    pub fn new(api: ApiClient, toaster: Toaster, booking_id: impl Into<String>) -> Self {
        Self {
            api,
            toaster,
            booking_id: booking_id.into(),
            booking: None,
            load_error: None,
            report_form: ReportForm::default(),
            is_loading: false,
            is_submitting: false,
        }
    }

    pub fn booking_id(&self) -> &str {
        &self.booking_id
    }

    pub fn badge(&self) -> Option<BadgeVariant> {
        self.booking
            .as_ref()
            .map(|b| status_badge(b.status.as_str()))
    }

    pub async fn load(&mut self) -> bool {
        self.is_loading = true;

        let loaded = match self.api.get_booking(&self.booking_id).await {
            Ok(booking) => {
                self.booking = Some(booking);
                self.load_error = None;
                true
            }
            Err(e) => {
                warn!(booking_id = %self.booking_id, error = %e, "Failed to load booking");
                self.load_error = Some(e.user_message());
                self.toaster.client_error(&e);
                false
            }
        };

        self.is_loading = false;
        loaded
    }

    /// Ask the backend to move the booking to `status`. On success the local
    /// copy mirrors the new status.
    pub async fn transition(
        &mut self,
        status: BookingStatus,
        note: Option<String>,
        success_message: &str,
    ) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;

        let result = self
            .api
            .update_booking_status(&self.booking_id, status.clone(), note)
            .await;

        let ok = match result {
            Ok(()) => {
                info!(booking_id = %self.booking_id, status = %status, "Booking status updated");
                if let Some(booking) = self.booking.as_mut() {
                    booking.status = status;
                }
                self.toaster.success(success_message);
                true
            }
            Err(e) => {
                warn!(booking_id = %self.booking_id, error = %e, "Booking status update failed");
                self.toaster.client_error(&e);
                false
            }
        };

        self.is_submitting = false;
        ok
    }

    /// Expert arrives on site.
    pub async fn start_audit(&mut self) -> bool {
        self.transition(BookingStatus::InProgress, None, "Audit started")
            .await
    }

    /// Organization accepts the submitted report.
    pub async fn approve_report(&mut self) -> bool {
        self.transition(BookingStatus::Completed, None, "Report approved")
            .await
    }

    pub async fn cancel(&mut self, reason: &str) -> bool {
        let reason = reason.trim();
        let note = (!reason.is_empty()).then(|| reason.to_string());
        self.transition(BookingStatus::Cancelled, note, "Booking cancelled")
            .await
    }

    /// Validate and POST the report form. Validation errors stay on the form
    /// and nothing is sent.
    pub async fn submit_report(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }

        self.report_form.errors = self.report_form.validate();
        if !self.report_form.errors.is_empty() {
            return false;
        }

        self.is_submitting = true;
        let request = self.report_form.to_request();

        let ok = match self.api.submit_report(&self.booking_id, &request).await {
            Ok(()) => {
                info!(
                    booking_id = %self.booking_id,
                    findings = request.findings.len(),
                    "Report submitted"
                );
                if let Some(booking) = self.booking.as_mut() {
                    booking.status = BookingStatus::ReportSubmitted;
                    booking.report = Some(Report {
                        id: None,
                        booking_id: Some(self.booking_id.clone()),
                        summary: request.summary,
                        findings: request.findings,
                        recommendations: request.recommendations,
                        submitted_at: Some(Utc::now()),
                    });
                }
                self.report_form.reset();
                self.toaster.success("Report submitted");
                true
            }
            Err(e) => {
                warn!(booking_id = %self.booking_id, error = %e, "Report submission failed");
                self.toaster.client_error(&e);
                false
            }
        };

        self.is_submitting = false;
        ok
    }
}
