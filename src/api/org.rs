//! Organization routes

use tracing::instrument;

use super::ApiClient;
use crate::domain::{CreateSiteRequest, OrgMember, Site};
use crate::error::ClientResult;

impl ApiClient {
    /// GET /org/:org_id/sites
    pub async fn list_sites(&self, org_id: &str) -> ClientResult<Vec<Site>> {
        self.get(&["org", org_id, "sites"]).await
    }

    /// POST /org/:org_id/sites
    #[instrument(skip(self, site), fields(name = %site.name, city = %site.city))]
    pub async fn create_site(&self, org_id: &str, site: &CreateSiteRequest) -> ClientResult<Site> {
        self.post(&["org", org_id, "sites"], site).await
    }

    /// GET /org/:org_id/members
    pub async fn list_members(&self, org_id: &str) -> ClientResult<Vec<OrgMember>> {
        self.get(&["org", org_id, "members"]).await
    }
}
