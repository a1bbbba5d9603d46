//! Admin screens: users, organizations, expert verification

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::domain::{AppUser, ExpertProfile, Organization, VerificationStatus};
use crate::error::ClientError;
use crate::ui::{Facet, Filterable, ListState, Toaster};

impl Filterable for AppUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.id.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Role => Some(self.role.as_str()),
            Facet::Status => self.status.as_deref(),
            _ => None,
        }
    }
}

impl Filterable for Organization {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.id.as_str()];
        if let Some(email) = &self.contact_email {
            fields.push(email.as_str());
        }
        fields
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::City => self.city.as_deref(),
            Facet::Category => self.category.as_deref(),
            Facet::Status => self.status.as_deref(),
            _ => None,
        }
    }
}

impl Filterable for ExpertProfile {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(email) = &self.email {
            fields.push(email.as_str());
        }
        fields.extend(self.specializations.iter().map(String::as_str));
        fields
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::City => self.city.as_deref(),
            Facet::Verification => Some(self.verification_status.as_str()),
            _ => None,
        }
    }
}

/// GET /admin/users
pub struct AdminUsersScreen {
    api: ApiClient,
    toaster: Toaster,
    pub list: ListState<AppUser>,
}

impl AdminUsersScreen {
    pub fn new(api: ApiClient, toaster: Toaster) -> Self {
        Self {
            api,
            toaster,
            list: ListState::new(),
        }
    }

    pub async fn load(&mut self) -> bool {
        let fetch = self.api.list_users();
        self.list.load(fetch, &self.toaster, "users").await
    }
}

/// GET /admin/organizations
pub struct AdminOrganizationsScreen {
    api: ApiClient,
    toaster: Toaster,
    pub list: ListState<Organization>,
}

impl AdminOrganizationsScreen {
    pub fn new(api: ApiClient, toaster: Toaster) -> Self {
        Self {
            api,
            toaster,
            list: ListState::new(),
        }
    }

    pub async fn load(&mut self) -> bool {
        let fetch = self.api.list_organizations();
        self.list.load(fetch, &self.toaster, "organizations").await
    }
}

/// GET /admin/experts with verification
pub struct AdminExpertsScreen {
    api: ApiClient,
    toaster: Toaster,
    pub list: ListState<ExpertProfile>,
    pub is_submitting: bool,
}

impl AdminExpertsScreen {
    pub fn new(api: ApiClient, toaster: Toaster) -> Self {
        Self {
            api,
            toaster,
            list: ListState::new(),
            is_submitting: false,
        }
    }

    pub async fn load(&mut self) -> bool {
        let fetch = self.api.list_experts();
        self.list.load(fetch, &self.toaster, "experts").await
    }

    /// Experts awaiting verification.
    pub fn pending(&self) -> Vec<&ExpertProfile> {
        self.list
            .items
            .iter()
            .filter(|e| e.verification_status == VerificationStatus::Pending)
            .collect()
    }

    pub async fn verify(&mut self, expert_id: &str) -> bool {
        if self.is_submitting {
            return false;
        }

        let name = match self.list.items.iter().find(|e| e.id == expert_id) {
            Some(expert) => expert.name.clone(),
            None => {
                self.toaster.error("Expert not found");
                return false;
            }
        };

        self.is_submitting = true;

        let ok = match self.api.verify_expert(expert_id).await {
            Ok(()) => {
                info!(expert_id = %expert_id, "Expert verified");
                if let Some(expert) = self.list.items.iter_mut().find(|e| e.id == expert_id) {
                    expert.verification_status = VerificationStatus::Verified;
                }
                self.toaster.success(format!("{} is now verified", name));
                true
            }
            Err(e) => {
                warn!(expert_id = %expert_id, error = %e, "Expert verification failed");
                self.toaster.client_error(&e);
                false
            }
        };

        self.is_submitting = false;
        ok
    }
}

/// GET /admin/organizations/:id
///
/// A failed load leaves `organization` empty and sets `load_error`.
pub struct AdminOrgDetailScreen {
    api: ApiClient,
    toaster: Toaster,
    org_id: String,
    pub organization: Option<Organization>,
    pub load_error: Option<String>,
    pub is_loading: bool,
}

impl AdminOrgDetailScreen {
    pub fn new(api: ApiClient, toaster: Toaster, org_id: impl Into<String>) -> Self {
        Self {
            api,
            toaster,
            org_id: org_id.into(),
            organization: None,
            load_error: None,
            is_loading: false,
        }
    }

    pub async fn load(&mut self) -> bool {
        self.is_loading = true;
        let result = self.api.get_organization(&self.org_id).await;
        let loaded = match result {
            Ok(org) => {
                self.organization = Some(org);
                self.load_error = None;
                true
            }
            Err(e) => {
                self.load_error = Some(detail_error(&self.toaster, "organization", &self.org_id, &e));
                false
            }
        };
        self.is_loading = false;
        loaded
    }
}

/// GET /admin/users/:id
///
/// A failed load leaves `user` empty and sets `load_error`.
pub struct AdminUserDetailScreen {
    api: ApiClient,
    toaster: Toaster,
    user_id: String,
    pub user: Option<AppUser>,
    pub load_error: Option<String>,
    pub is_loading: bool,
}

impl AdminUserDetailScreen {
    pub fn new(api: ApiClient, toaster: Toaster, user_id: impl Into<String>) -> Self {
        Self {
            api,
            toaster,
            user_id: user_id.into(),
            user: None,
            load_error: None,
            is_loading: false,
        }
    }

    pub async fn load(&mut self) -> bool {
        self.is_loading = true;
        let result = self.api.get_user(&self.user_id).await;
        let loaded = match result {
            Ok(user) => {
                self.user = Some(user);
                self.load_error = None;
                true
            }
            Err(e) => {
                self.load_error = Some(detail_error(&self.toaster, "user", &self.user_id, &e));
                false
            }
        };
        self.is_loading = false;
        loaded
    }
}

/// Log and toast a detail-load failure, returning the message for the error state.
fn detail_error(toaster: &Toaster, what: &str, id: &str, e: &ClientError) -> String {
    warn!(what = what, id = %id, error = %e, "Failed to load detail");
    toaster.client_error(e);
    e.user_message()
}
