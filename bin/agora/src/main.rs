//! Agora - forum GraphQL API over an in-memory fixture store.
//!
//! # Usage
//!
//! ```bash
//! # Start with the embedded fixtures
//! agora
//!
//! # Start with environment overrides
//! GRAPHQL_PORT=8080 CURRENT_USER_ID=1 agora
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use agora_core::metrics::init_metrics;
use agora_core::ports::{IdentityProvider, StaticIdentity};
use agora_core::services::ForumService;
use agora_graphql::{build_schema, serve_with_shutdown, ServerConfig};
use agora_storage::{Fixtures, MemoryRepositories};

/// Agora CLI - forum GraphQL API.
#[derive(Parser, Debug)]
#[command(name = "agora")]
#[command(about = "Agora - forum GraphQL API over fixture data")]
#[command(version)]
struct Cli {
    /// GraphQL server port.
    #[arg(long, env = "GRAPHQL_PORT", default_value = "5000")]
    graphql_port: u16,

    /// Prometheus metrics port.
    #[arg(long, env = "METRICS_PORT", default_value = "9090")]
    metrics_port: u16,

    /// User id the mocked authentication resolves every request to.
    ///
    /// Stands in for a real authentication layer (JWT, sessions, ...);
    /// pass 'anonymous' to serve unauthenticated requests.
    #[arg(long, env = "CURRENT_USER_ID", default_value = "2")]
    current_user: String,

    /// Path to a fixture JSON file. Defaults to the embedded data set.
    #[arg(long, env = "FIXTURES_PATH")]
    fixtures: Option<PathBuf>,

    /// Disable the GraphiQL playground routes.
    #[arg(long)]
    no_playground: bool,

    /// Enable JSON log output.
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    // Prometheus metrics exporter (optional - failures don't crash the app)
    let metrics_enabled = match format!("0.0.0.0:{}", cli.metrics_port).parse::<std::net::SocketAddr>()
    {
        Ok(metrics_addr) => {
            match PrometheusBuilder::new()
                .with_http_listener(metrics_addr)
                .install()
            {
                Ok(()) => {
                    init_metrics();
                    true
                }
                Err(e) => {
                    warn!(
                        "⚠️  Failed to start metrics exporter: {}. Continuing without metrics.",
                        e
                    );
                    false
                }
            }
        }
        Err(e) => {
            warn!("⚠️  Invalid metrics address: {}. Continuing without metrics.", e);
            false
        }
    };

    info!("🚀 Starting Agora");

    // ─────────────────────────────────────────────────────────────────────────
    // 🗄️ FIXTURE STORE
    // ─────────────────────────────────────────────────────────────────────────
    let fixtures = match &cli.fixtures {
        Some(path) => {
            debug!(path = %path.display(), "Loading fixture file");
            Fixtures::from_path(path).context("Failed to load fixture file")?
        }
        None => Fixtures::embedded().context("Failed to parse embedded fixtures")?,
    };

    info!(
        users = fixtures.users.len(),
        forums = fixtures.forums.len(),
        "🗄️  Fixture store ready"
    );

    let repositories = Arc::new(MemoryRepositories::with_fixtures(fixtures));
    let service = Arc::new(ForumService::new(repositories));

    // ─────────────────────────────────────────────────────────────────────────
    // 🔑 IDENTITY
    // ─────────────────────────────────────────────────────────────────────────
    let identity: Arc<dyn IdentityProvider> = if cli.current_user == "anonymous" {
        warn!("🔑 Serving unauthenticated requests; every gated field resolves to null");
        Arc::new(StaticIdentity::anonymous())
    } else {
        debug!(user = %cli.current_user, "Mocked identity");
        Arc::new(StaticIdentity::new(cli.current_user.clone()))
    };

    // ─────────────────────────────────────────────────────────────────────────
    // ⚡ SERVER START
    // ─────────────────────────────────────────────────────────────────────────
    let schema = build_schema(service);

    let server_config = ServerConfig {
        host: "0.0.0.0".to_string(),
        port: cli.graphql_port,
        enable_playground: !cli.no_playground,
    };

    info!("✅ Agora ready");
    info!("   ⚡ GraphQL:  http://localhost:{}/graphql", cli.graphql_port);
    if metrics_enabled {
        info!("   📊 Metrics:  http://localhost:{}/metrics", cli.metrics_port);
    } else {
        info!("   📊 Metrics:  disabled");
    }
    info!("   Press Ctrl+C to stop");

    serve_with_shutdown(schema, identity, server_config, shutdown_signal())
        .await
        .context("Server error")?;

    info!("🛑 Shutdown complete");
    Ok(())
}

/// Initialize tracing subscriber.
fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutting down...");
}
