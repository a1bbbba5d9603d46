//! Session context decoded from the bearer token
//!
//! The backend verifies signatures. The client only reads the claims to decide
//! which role's screens to show and which organization to scope requests to.

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::Claims;
use crate::error::{ClientError, ClientResult};

/// Platform role of the signed-in user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Organization,
    Expert,
    Admin,
}

impl Role {
    pub fn from_claim(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ORG" | "ORGANIZATION" | "ORG_ADMIN" | "ORG_MEMBER" => Some(Self::Organization),
            "EXPERT" | "AUDITOR" => Some(Self::Expert),
            "ADMIN" | "PLATFORM_ADMIN" | "SUPER_ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Organization => write!(f, "organization"),
            Self::Expert => write!(f, "expert"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// Signed-in user context
#[derive(Debug, Clone)]
pub struct Session {
    /// User ID (from JWT sub claim)
    pub user_id: String,

    pub role: Role,

    /// Organization scope for organization users
    pub org_id: Option<String>,

    pub email: Option<String>,

    pub name: Option<String>,

    pub expires_at: Option<DateTime<Utc>>,

    /// Raw JWT token
    token: String,
}

impl Session {
    /// Decode a session token, rejecting unknown roles and expired tokens.
    pub fn from_token(token: &str, now: DateTime<Utc>) -> ClientResult<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ClientError::Session("Missing session token".to_string()));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| ClientError::Session(format!("Malformed session token: {}", e)))?;

        Self::from_claims(data.claims, token, now)
    }

    fn from_claims(claims: Claims, token: &str, now: DateTime<Utc>) -> ClientResult<Self> {
        let role_claim = claims.role.as_deref().unwrap_or_default();
        let role = Role::from_claim(role_claim).ok_or_else(|| {
            ClientError::Session(format!("Unsupported role in token: '{}'", role_claim))
        })?;

        let expires_at = claims
            .exp
            .and_then(|exp| Utc.timestamp_opt(exp, 0).single());

        if let Some(exp) = expires_at {
            if exp <= now {
                return Err(ClientError::Session(
                    "Your session has expired. Please sign in again.".to_string(),
                ));
            }
        }

        Ok(Self {
            user_id: claims.sub,
            role,
            org_id: claims.org_id,
            email: claims.email,
            name: claims.name,
            expires_at,
            token: token.to_string(),
        })
    }

    /// Get the raw JWT token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Organization id, or an error for sessions without one.
    pub fn require_org_id(&self) -> ClientResult<&str> {
        self.org_id
            .as_deref()
            .ok_or_else(|| ClientError::Session("No organization linked to this account".to_string()))
    }
}
