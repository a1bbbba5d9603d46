//! Service request routes

use tracing::instrument;

use super::ApiClient;
use crate::domain::{AwardBidRequest, CreateServiceRequest, ExpertBid, ServiceRequest};
use crate::error::ClientResult;

impl ApiClient {
    /// POST /requests
    #[instrument(skip(self, req), fields(site_id = %req.site_id, category = %req.category))]
    pub async fn create_request(&self, req: &CreateServiceRequest) -> ClientResult<ServiceRequest> {
        self.post(&["requests"], req).await
    }

    /// GET /requests/:id
    pub async fn get_request(&self, request_id: &str) -> ClientResult<ServiceRequest> {
        self.get(&["requests", request_id]).await
    }

    /// GET /requests/:id/bids
    pub async fn list_request_bids(&self, request_id: &str) -> ClientResult<Vec<ExpertBid>> {
        self.get(&["requests", request_id, "bids"]).await
    }

    /// POST /requests/:id/award
    #[instrument(skip(self))]
    pub async fn award_bid(&self, request_id: &str, bid_id: &str) -> ClientResult<()> {
        self.post_unit(
            &["requests", request_id, "award"],
            &AwardBidRequest {
                bid_id: bid_id.to_string(),
            },
        )
        .await
    }
}
