//! Expert routes

use serde_json::json;
use tracing::instrument;

use super::ApiClient;
use crate::domain::{CreateBidRequest, ExpertBid};
use crate::error::ClientResult;

impl ApiClient {
    /// GET /expert/me/bids
    pub async fn list_my_bids(&self) -> ClientResult<Vec<ExpertBid>> {
        self.get(&["expert", "me", "bids"]).await
    }

    /// POST /expert/bid
    #[instrument(skip(self, bid), fields(request_id = %bid.request_id, price = %bid.price))]
    pub async fn submit_bid(&self, bid: &CreateBidRequest) -> ClientResult<()> {
        self.post_unit(&["expert", "bid"], bid).await
    }

    /// POST /api/bids/:id/withdraw
    #[instrument(skip(self))]
    pub async fn withdraw_bid(&self, bid_id: &str) -> ClientResult<()> {
        self.post_unit(&["api", "bids", bid_id, "withdraw"], &json!({}))
            .await
    }
}
