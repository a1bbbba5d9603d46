use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. The HTTP stack is quieted outside dev.
fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => {
            "auditbridge_client=debug,auditbridge=debug,reqwest=debug,hyper_util=info,hyper=info,info"
        }
        Environment::Staging => {
            "auditbridge_client=debug,auditbridge=info,reqwest=info,hyper_util=warn,hyper=warn,rustls=warn,info"
        }
        Environment::Prod => {
            "auditbridge_client=info,auditbridge=info,reqwest=warn,hyper_util=warn,hyper=warn,h2=warn,rustls=warn,warn"
        }
    }
}

/// Install the global subscriber. Call once, before the first request.
pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    // JSON in production, pretty elsewhere
    if env.is_prod() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .init();
    }

    tracing::info!(env = ?env, "Client logging initialized");
}
