//! Admin routes

use serde_json::json;
use tracing::instrument;

use super::ApiClient;
use crate::domain::{AppUser, ExpertProfile, Organization};
use crate::error::ClientResult;

impl ApiClient {
    /// GET /admin/users
    pub async fn list_users(&self) -> ClientResult<Vec<AppUser>> {
        self.get(&["admin", "users"]).await
    }

    /// GET /admin/users/:id
    pub async fn get_user(&self, user_id: &str) -> ClientResult<AppUser> {
        self.get(&["admin", "users", user_id]).await
    }

    /// GET /admin/organizations
    pub async fn list_organizations(&self) -> ClientResult<Vec<Organization>> {
        self.get(&["admin", "organizations"]).await
    }

    /// GET /admin/organizations/:id
    pub async fn get_organization(&self, org_id: &str) -> ClientResult<Organization> {
        self.get(&["admin", "organizations", org_id]).await
    }

    /// GET /admin/experts
    pub async fn list_experts(&self) -> ClientResult<Vec<ExpertProfile>> {
        self.get(&["admin", "experts"]).await
    }

    /// POST /admin/experts/:id/verify
    #[instrument(skip(self))]
    pub async fn verify_expert(&self, expert_id: &str) -> ClientResult<()> {
        self.post_unit(&["admin", "experts", expert_id, "verify"], &json!({}))
            .await
    }
}
