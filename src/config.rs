use anyhow::{Context, Result};
use std::env;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,

    // Backend API
    pub api_base_url: String,
    pub api_timeout_seconds: u64,

    // Session
    pub api_token: Option<String>,
    pub default_org_id: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));

        // Backend API
        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let api_base_url = normalize_base_url(&api_base_url)?;
        let api_timeout_seconds = env::var("API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        // Session
        let api_token = env::var("API_TOKEN").ok().filter(|s| !s.trim().is_empty());
        let default_org_id = env::var("DEFAULT_ORG_ID")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Settings {
            env,
            api_base_url,
            api_timeout_seconds,
            api_token,
            default_org_id,
        })
    }

    /// Settings pointing at a specific backend, used by embedders and tests.
    pub fn for_base_url(base_url: &str) -> Result<Self> {
        Ok(Settings {
            env: Environment::Dev,
            api_base_url: normalize_base_url(base_url)?,
            api_timeout_seconds: 30,
            api_token: None,
            default_org_id: None,
        })
    }
}

/// Validates the base URL and strips any trailing slash.
fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw.trim()).with_context(|| format!("Invalid API_BASE_URL: {}", raw))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("API_BASE_URL must be http or https, got {}", parsed.scheme());
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
