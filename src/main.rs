use anyhow::{Context, Result};
use chrono::Utc;

use auditbridge_client::{config, logging, screens, ApiClient, Session, Toaster};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        api_base_url = %settings.api_base_url,
        "Starting AuditBridge client"
    );

    let token = settings
        .api_token
        .clone()
        .context("API_TOKEN must be set to open a session")?;
    let mut session = Session::from_token(&token, Utc::now())?;
    if session.org_id.is_none() {
        session.org_id = settings.default_org_id.clone();
    }

    tracing::info!(
        user_id = %session.user_id,
        role = %session.role,
        org_id = ?session.org_id,
        "Session opened"
    );

    let api = ApiClient::new(&settings)?.with_token(session.token());

    if let Err(e) = api.health_check().await {
        tracing::warn!(error = %e, "Backend health check failed - continuing");
    }

    let toaster = Toaster::new();
    let summary = screens::load_dashboard(&api, &toaster, &session).await;

    for tile in &summary.tiles {
        tracing::info!(label = %tile.label, count = tile.count, "Dashboard");
    }

    for toast in toaster.drain() {
        tracing::warn!(kind = ?toast.kind, message = %toast.message, "Notification");
    }

    if !summary.complete {
        anyhow::bail!("Dashboard loaded with errors");
    }

    Ok(())
}
