use serde::{Deserialize, Serialize};

/// JWT claims carried by the marketplace session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Platform role, e.g. `ORG_ADMIN`, `EXPERT`, `ADMIN`
    #[serde(default)]
    pub role: Option<String>,

    /// Organization the user belongs to - optional
    #[serde(default, rename = "orgId", alias = "org_id")]
    pub org_id: Option<String>,

    /// User email - optional
    #[serde(default)]
    pub email: Option<String>,

    /// Display name - optional
    #[serde(default)]
    pub name: Option<String>,

    /// Issued at (Unix timestamp) - optional
    #[serde(default)]
    pub iat: Option<i64>,

    /// Expiration (Unix timestamp) - optional
    #[serde(default)]
    pub exp: Option<i64>,
}
