//! Expert-side screens: bidding on a request and managing own bids

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::domain::{BidStatus, CreateBidRequest, ExpertBid, ServiceRequest};
use crate::ui::{status_badge, validate_slot, BadgeVariant, Facet, Filterable, FormErrors, ListState, Toaster};

/// Bid form state
#[derive(Debug, Clone, Default)]
pub struct BidForm {
    pub price: Option<Decimal>,
    pub proposed_start: Option<DateTime<Utc>>,
    pub proposed_end: Option<DateTime<Utc>>,
    pub deliverables: String,
    pub notes: String,
}

impl BidForm {
    /// Validate against the request being bid on.
    ///
    /// The slot must sit inside the organization's preferred window and
    /// bidding must still be open at `now`.
    pub fn validate(&self, request: &ServiceRequest, now: DateTime<Utc>) -> FormErrors {
        let mut errors = FormErrors::new();

        if !request.is_open_for_bids(now) {
            errors.add("form", "Bidding is closed for this request");
        }

        match self.price {
            None => errors.add("price", "Price is required"),
            Some(price) if price <= Decimal::ZERO => {
                errors.add("price", "Price must be greater than zero")
            }
            Some(_) => {}
        }

        errors.require_some("proposedStart", "Proposed start", &self.proposed_start);
        errors.require_some("proposedEnd", "Proposed end", &self.proposed_end);

        if let (Some(start), Some(end)) = (self.proposed_start, self.proposed_end) {
            match &request.preferred_window {
                Some(window) => validate_slot(
                    &mut errors,
                    window,
                    start,
                    end,
                    "proposedStart",
                    "proposedEnd",
                ),
                None if start >= end => errors.add("proposedEnd", "End must be after start"),
                None => {}
            }
        }

        errors
    }

    pub fn to_request(&self, request_id: &str) -> Option<CreateBidRequest> {
        let deliverables = self.deliverables.trim();
        let notes = self.notes.trim();
        Some(CreateBidRequest {
            request_id: request_id.to_string(),
            price: self.price?,
            proposed_start: self.proposed_start?,
            proposed_end: self.proposed_end?,
            deliverables: (!deliverables.is_empty()).then(|| deliverables.to_string()),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

/// GET /requests/:id and POST /expert/bid
pub struct ExpertRequestDetailScreen {
    api: ApiClient,
    toaster: Toaster,
    request_id: String,
    pub request: Option<ServiceRequest>,
    pub form: BidForm,
    pub errors: FormErrors,
    pub bid_submitted: bool,
    pub is_loading: bool,
    pub is_submitting: bool,
}

impl ExpertRequestDetailScreen {
    pub fn new(api: ApiClient, toaster: Toaster, request_id: impl Into<String>) -> Self {
        Self {
            api,
            toaster,
            request_id: request_id.into(),
            request: None,
            form: BidForm::default(),
            errors: FormErrors::new(),
            bid_submitted: false,
            is_loading: false,
            is_submitting: false,
        }
    }

    pub async fn load(&mut self) -> bool {
        self.is_loading = true;

        let loaded = match self.api.get_request(&self.request_id).await {
            Ok(request) => {
                self.request = Some(request);
                true
            }
            Err(e) => {
                warn!(request_id = %self.request_id, error = %e, "Failed to load request");
                self.toaster.client_error(&e);
                false
            }
        };

        self.is_loading = false;
        loaded
    }

    pub async fn submit_bid(&mut self) -> bool {
        self.submit_bid_at(Utc::now()).await
    }

    /// Validate and POST the bid. An invalid form never reaches the backend.
    pub async fn submit_bid_at(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_submitting {
            return false;
        }

        let request = match &self.request {
            Some(request) => request,
            None => {
                self.errors = FormErrors::new();
                self.errors.add("form", "Request details are not loaded yet");
                return false;
            }
        };

        self.errors = self.form.validate(request, now);
        let bid = match self.form.to_request(&self.request_id) {
            Some(bid) if self.errors.is_empty() => bid,
            _ => return false,
        };

        self.is_submitting = true;

        let ok = match self.api.submit_bid(&bid).await {
            Ok(()) => {
                info!(request_id = %self.request_id, price = %bid.price, "Bid submitted");
                self.bid_submitted = true;
                self.form = BidForm::default();
                self.toaster.success("Bid submitted");
                true
            }
            Err(e) => {
                warn!(request_id = %self.request_id, error = %e, "Bid submission failed");
                self.toaster.client_error(&e);
                false
            }
        };

        self.is_submitting = false;
        ok
    }
}

impl Filterable for ExpertBid {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str()];
        if let Some(request) = &self.request {
            fields.push(request.name.as_str());
            fields.push(request.id.as_str());
        } else if let Some(request_id) = &self.request_id {
            fields.push(request_id.as_str());
        }
        if let Some(deliverables) = &self.deliverables {
            fields.push(deliverables.as_str());
        }
        fields
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Status => Some(self.status.as_str()),
            _ => None,
        }
    }
}

/// GET /expert/me/bids with withdrawal
pub struct MyBidsScreen {
    api: ApiClient,
    toaster: Toaster,
    pub list: ListState<ExpertBid>,
    pub is_submitting: bool,
}

impl MyBidsScreen {
    pub fn new(api: ApiClient, toaster: Toaster) -> Self {
        Self {
            api,
            toaster,
            list: ListState::new(),
            is_submitting: false,
        }
    }

    pub async fn load(&mut self) -> bool {
        let fetch = self.api.list_my_bids();
        self.list.load(fetch, &self.toaster, "my bids").await
    }

    pub fn badge(bid: &ExpertBid) -> BadgeVariant {
        status_badge(bid.status.as_str())
    }

    /// Withdraw one bid. The backend decides whether the bid can still be
    /// withdrawn; on success only that bid's local status changes.
    pub async fn withdraw(&mut self, bid_id: &str) -> bool {
        if self.is_submitting {
            return false;
        }

        if !self.list.items.iter().any(|bid| bid.id == bid_id) {
            self.toaster.error("Bid not found");
            return false;
        }

        self.is_submitting = true;

        let ok = match self.api.withdraw_bid(bid_id).await {
            Ok(()) => {
                info!(bid_id = %bid_id, "Bid withdrawn");
                if let Some(bid) = self.list.items.iter_mut().find(|bid| bid.id == bid_id) {
                    bid.status = BidStatus::Withdrawn;
                }
                self.toaster.success("Bid withdrawn");
                true
            }
            Err(e) => {
                warn!(bid_id = %bid_id, error = %e, "Bid withdrawal failed");
                self.toaster.client_error(&e);
                false
            }
        };

        self.is_submitting = false;
        ok
    }
}
