//! Organization-side request screens: publishing a request and reviewing its bids

use chrono::{DateTime, Utc};
use futures::future::join;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::domain::{
    BidStatus, CreateServiceRequest, ExpertBid, RequestStatus, ServiceRequest, Site, TimeWindow,
};
use crate::ui::{FormErrors, ListState, Toaster};

/// Create-request form state
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    pub site_id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub window_start: Option<DateTime<Utc>>,
    pub window_end: Option<DateTime<Utc>>,
    pub bid_close_at: Option<DateTime<Utc>>,
    pub budget: Option<Decimal>,
}

impl RequestForm {
    pub fn validate(&self, now: DateTime<Utc>) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.require("siteId", "Site", &self.site_id);
        errors.require("category", "Audit category", &self.category);
        errors.require("title", "Title", &self.title);
        errors.require_some("windowStart", "Preferred start", &self.window_start);
        errors.require_some("windowEnd", "Preferred end", &self.window_end);
        errors.require_some("bidCloseAt", "Bid close date", &self.bid_close_at);

        if let (Some(start), Some(end)) = (self.window_start, self.window_end) {
            if start >= end {
                errors.add("windowEnd", "Preferred end must be after preferred start");
            }
        }

        if let Some(close) = self.bid_close_at {
            if close <= now {
                errors.add("bidCloseAt", "Bid close date must be in the future");
            }
            if let Some(start) = self.window_start {
                if close > start {
                    errors.add(
                        "bidCloseAt",
                        "Bidding must close before the preferred window starts",
                    );
                }
            }
        }

        if let Some(budget) = self.budget {
            if budget <= Decimal::ZERO {
                errors.add("budget", "Budget must be greater than zero");
            }
        }

        errors
    }

    /// Request body for a validated form.
    pub fn to_request(&self) -> Option<CreateServiceRequest> {
        let description = self.description.trim();
        Some(CreateServiceRequest {
            site_id: self.site_id.trim().to_string(),
            category: self.category.trim().to_string(),
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            preferred_window: TimeWindow::new(self.window_start?, self.window_end?),
            bid_close_at: self.bid_close_at?,
            budget: self.budget,
        })
    }
}

/// POST /requests
pub struct CreateRequestScreen {
    api: ApiClient,
    toaster: Toaster,
    org_id: String,
    /// Sites for the site dropdown
    pub sites: ListState<Site>,
    pub form: RequestForm,
    pub errors: FormErrors,
    pub created: Option<ServiceRequest>,
    pub is_submitting: bool,
}

impl CreateRequestScreen {
    pub fn new(api: ApiClient, toaster: Toaster, org_id: impl Into<String>) -> Self {
        Self {
            api,
            toaster,
            org_id: org_id.into(),
            sites: ListState::new(),
            form: RequestForm::default(),
            errors: FormErrors::new(),
            created: None,
            is_submitting: false,
        }
    }

    pub async fn load_sites(&mut self) -> bool {
        let fetch = self.api.list_sites(&self.org_id);
        self.sites.load(fetch, &self.toaster, "sites").await
    }

    pub async fn submit(&mut self) -> bool {
        self.submit_at(Utc::now()).await
    }

    /// Submit with an explicit clock.
    pub async fn submit_at(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_submitting {
            return false;
        }

        self.errors = self.form.validate(now);
        let request = match self.form.to_request() {
            Some(request) if self.errors.is_empty() => request,
            _ => return false,
        };

        self.is_submitting = true;

        let ok = match self.api.create_request(&request).await {
            Ok(created) => {
                info!(request_id = %created.id, "Service request published");
                self.created = Some(created);
                self.form = RequestForm::default();
                self.toaster.success("Request published");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to publish request");
                self.toaster.client_error(&e);
                false
            }
        };

        self.is_submitting = false;
        ok
    }
}

/// GET /requests/:id with its bids, and POST /requests/:id/award
pub struct RequestBidsScreen {
    api: ApiClient,
    toaster: Toaster,
    request_id: String,
    pub request: Option<ServiceRequest>,
    pub bids: Vec<ExpertBid>,
    pub is_loading: bool,
    pub is_submitting: bool,
}

impl RequestBidsScreen {
    pub fn new(api: ApiClient, toaster: Toaster, request_id: impl Into<String>) -> Self {
        Self {
            api,
            toaster,
            request_id: request_id.into(),
            request: None,
            bids: Vec::new(),
            is_loading: false,
            is_submitting: false,
        }
    }

    /// Fetch the request and its bids concurrently. Each half keeps its
    /// previous value on failure; one error toast is shown at most.
    pub async fn load(&mut self) -> bool {
        self.is_loading = true;

        let (request, bids) = join(
            self.api.get_request(&self.request_id),
            self.api.list_request_bids(&self.request_id),
        )
        .await;

        let mut first_error = None;
        match request {
            Ok(request) => self.request = Some(request),
            Err(e) => first_error = Some(e),
        }
        match bids {
            Ok(bids) => self.bids = bids,
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }

        self.is_loading = false;

        match first_error {
            Some(e) => {
                warn!(request_id = %self.request_id, error = %e, "Failed to load request bids");
                self.toaster.client_error(&e);
                false
            }
            None => true,
        }
    }

    /// Bids ordered by price, then earliest proposed start.
    pub fn bids_by_price(&self) -> Vec<&ExpertBid> {
        let mut bids: Vec<&ExpertBid> = self.bids.iter().collect();
        bids.sort_by(|a, b| {
            a.price
                .cmp(&b.price)
                .then_with(|| a.proposed_start.cmp(&b.proposed_start))
        });
        bids
    }

    /// Cheapest bid still open for award.
    pub fn lowest_open_bid(&self) -> Option<&ExpertBid> {
        self.bids_by_price()
            .into_iter()
            .find(|bid| bid.status.is_open())
    }

    /// Award a bid. On success the awarded bid becomes `AWARDED`, the other
    /// open bids `REJECTED` and the request `AWARDED`.
    pub async fn award(&mut self, bid_id: &str) -> bool {
        if self.is_submitting {
            return false;
        }

        if !self.bids.iter().any(|bid| bid.id == bid_id) {
            self.toaster.error("That bid is no longer available");
            return false;
        }

        self.is_submitting = true;

        let ok = match self.api.award_bid(&self.request_id, bid_id).await {
            Ok(()) => {
                info!(request_id = %self.request_id, bid_id = %bid_id, "Bid awarded");
                for bid in &mut self.bids {
                    if bid.id == bid_id {
                        bid.status = BidStatus::Awarded;
                    } else if bid.status.is_open() {
                        bid.status = BidStatus::Rejected;
                    }
                }
                if let Some(request) = self.request.as_mut() {
                    request.status = RequestStatus::Awarded;
                }
                self.toaster.success("Bid awarded. The booking will be scheduled.");
                true
            }
            Err(e) => {
                warn!(request_id = %self.request_id, bid_id = %bid_id, error = %e, "Award failed");
                self.toaster.client_error(&e);
                false
            }
        };

        self.is_submitting = false;
        ok
    }
}
