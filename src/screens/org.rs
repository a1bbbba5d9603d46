//! Organization screens: sites and members

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::domain::{CreateSiteRequest, OrgMember, Site};
use crate::ui::{Facet, Filterable, FormErrors, ListState, Toaster};

impl Filterable for Site {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.address.as_str(), self.city.as_str()];
        if let Some(contact) = &self.contact_name {
            fields.push(contact.as_str());
        }
        fields
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::City => Some(self.city.as_str()),
            Facet::Category => self.category.as_deref(),
            _ => None,
        }
    }
}

impl Filterable for OrgMember {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Role => Some(self.role.as_str()),
            Facet::Status => self.status.as_deref(),
            _ => None,
        }
    }
}

/// Add Site modal form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteForm {
    pub name: String,
    pub address: String,
    pub city: String,
    pub category: String,
    pub contact_name: String,
    pub contact_phone: String,
}

impl SiteForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.require("name", "Site name", &self.name);
        errors.require("address", "Address", &self.address);
        errors.require("city", "City", &self.city);
        errors.require("category", "Category", &self.category);

        let phone = self.contact_phone.trim();
        if !phone.is_empty()
            && !phone
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
        {
            errors.add("contactPhone", "Enter a valid phone number");
        }

        errors
    }

    pub fn to_request(&self) -> CreateSiteRequest {
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        CreateSiteRequest {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            category: self.category.trim().to_string(),
            contact_name: optional(&self.contact_name),
            contact_phone: optional(&self.contact_phone),
        }
    }
}

/// GET/POST /org/:org_id/sites
pub struct SitesScreen {
    api: ApiClient,
    toaster: Toaster,
    org_id: String,
    pub list: ListState<Site>,
    pub add_modal_open: bool,
    pub form: SiteForm,
    pub errors: FormErrors,
    pub is_submitting: bool,
}

impl SitesScreen {
    pub fn new(api: ApiClient, toaster: Toaster, org_id: impl Into<String>) -> Self {
        Self {
            api,
            toaster,
            org_id: org_id.into(),
            list: ListState::new(),
            add_modal_open: false,
            form: SiteForm::default(),
            errors: FormErrors::new(),
            is_submitting: false,
        }
    }

    pub async fn load(&mut self) -> bool {
        let fetch = self.api.list_sites(&self.org_id);
        self.list.load(fetch, &self.toaster, "sites").await
    }

    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
    }

    /// Close the modal and discard the form.
    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
        self.form = SiteForm::default();
        self.errors.clear();
    }

    /// Validate and POST the Add Site form. On success the new site is
    /// appended and the modal closes; on failure the modal stays open.
    pub async fn add_site(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }

        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return false;
        }

        self.is_submitting = true;
        let request = self.form.to_request();

        let ok = match self.api.create_site(&self.org_id, &request).await {
            Ok(site) => {
                info!(org_id = %self.org_id, site_id = %site.id, "Site added");
                self.list.items.push(site);
                self.toaster.success(format!("Site '{}' added", request.name));
                self.close_add_modal();
                true
            }
            Err(e) => {
                warn!(org_id = %self.org_id, error = %e, "Failed to add site");
                self.toaster.client_error(&e);
                false
            }
        };

        self.is_submitting = false;
        ok
    }
}

/// GET /org/:org_id/members
pub struct MembersScreen {
    api: ApiClient,
    toaster: Toaster,
    org_id: String,
    pub list: ListState<OrgMember>,
}

impl MembersScreen {
    pub fn new(api: ApiClient, toaster: Toaster, org_id: impl Into<String>) -> Self {
        Self {
            api,
            toaster,
            org_id: org_id.into(),
            list: ListState::new(),
        }
    }

    pub async fn load(&mut self) -> bool {
        let fetch = self.api.list_members(&self.org_id);
        self.list.load(fetch, &self.toaster, "members").await
    }
}
