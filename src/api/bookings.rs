//! Booking routes

use tracing::instrument;

use super::ApiClient;
use crate::domain::{
    Booking, BookingStatus, SubmitReportRequest, UpdateBookingStatusRequest,
};
use crate::error::ClientResult;

impl ApiClient {
    /// GET /bookings
    pub async fn list_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.get(&["bookings"]).await
    }

    /// GET /bookings/:id
    pub async fn get_booking(&self, booking_id: &str) -> ClientResult<Booking> {
        self.get(&["bookings", booking_id]).await
    }

    /// POST /bookings/:id/status
    ///
    /// Ask the backend to move a booking to `status`. The backend decides
    /// whether the transition is allowed.
    #[instrument(skip(self, note))]
    pub async fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
        note: Option<String>,
    ) -> ClientResult<()> {
        self.post_unit(
            &["bookings", booking_id, "status"],
            &UpdateBookingStatusRequest { status, note },
        )
        .await
    }

    /// POST /bookings/:id/report
    #[instrument(skip(self, report), fields(findings = report.findings.len()))]
    pub async fn submit_report(
        &self,
        booking_id: &str,
        report: &SubmitReportRequest,
    ) -> ClientResult<()> {
        self.post_unit(&["bookings", booking_id, "report"], report)
            .await
    }
}
