//! GraphQL HTTP server.

use std::future::Future;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tracing::{debug, info};

use agora_core::ports::IdentityProvider;

use crate::schema::CurrentUser;
use crate::types::AgoraSchema;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_playground: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            enable_playground: true,
        }
    }
}

#[derive(Clone)]
struct AppState {
    schema: AgoraSchema,
    identity: Arc<dyn IdentityProvider>,
}

/// Start the GraphQL server.
pub async fn serve(
    schema: AgoraSchema,
    identity: Arc<dyn IdentityProvider>,
    config: ServerConfig,
) -> Result<(), std::io::Error> {
    let app = router(schema, identity, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("⚡ GraphQL server listening on http://{}", addr);

    axum::serve(listener, app).await
}

/// Start the GraphQL server with graceful shutdown support.
pub async fn serve_with_shutdown<F>(
    schema: AgoraSchema,
    identity: Arc<dyn IdentityProvider>,
    config: ServerConfig,
    shutdown_signal: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(schema, identity, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    debug!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

fn router(schema: AgoraSchema, identity: Arc<dyn IdentityProvider>, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .route("/health", get(health_check))
        .with_state(AppState { schema, identity });

    if config.enable_playground {
        app = app.route("/", get(graphql_playground));
    }

    app
}

/// GraphQL query handler.
///
/// Resolves the actor identity once per request and injects it into the
/// execution context; resolvers never see the identity mechanism itself.
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req
        .into_inner()
        .data(CurrentUser(state.identity.current_user()));

    state.schema.execute(request).await.into()
}

/// GraphiQL playground UI.
async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
