//! Application startup and lifecycle management.

use crate::config::{DemoConfig, UtilityConfig};
use crate::handlers;
use crate::services::{IpLookup, IpifyClient};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub ip_lookup: Arc<dyn IpLookup>,
    pub demo: DemoConfig,
}

impl AppState {
    pub fn new(ip_lookup: Arc<dyn IpLookup>, demo: DemoConfig) -> Self {
        Self { ip_lookup, demo }
    }

    /// State wired to the configured IP-echo service.
    pub fn from_config(config: &UtilityConfig) -> Result<Self, AppError> {
        let ip_lookup = IpifyClient::new(&config.ip_lookup).map_err(|e| {
            tracing::error!("Failed to build IP lookup client: {}", e);
            AppError::ConfigError(e.into())
        })?;

        if config.ip_lookup.timeout_ms.is_none() {
            tracing::info!(
                endpoint = %config.ip_lookup.endpoint,
                "IP lookup has no timeout configured"
            );
        }

        Ok(Self::new(Arc::new(ip_lookup), config.demo.clone()))
    }
}

/// Route table for the service. Exposed so the handlers can be mounted inside
/// another server.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route("/math", post(handlers::do_math))
        .route("/ip", get(handlers::get_current_ip))
        .route("/env", post(handlers::get_environment_variable))
        .route("/demo", get(handlers::demo_all_functions))
        .merge(SwaggerUi::new("/docs").url("/.well-known/openapi.json", crate::ApiDoc::openapi()))
        .route_layer(from_fn(metrics_middleware))
        .fallback(handlers::not_found)
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost, so the trace span already sees the request id.
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: UtilityConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(&config)?;
        Self::build_with_state(&config, state).await
    }

    /// Build the application around an existing state.
    pub async fn build_with_state(config: &UtilityConfig, state: AppState) -> Result<Self, AppError> {
        // Port 0 binds a random port, used by tests.
        let address = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Utility service: HTTP on {}:{}", config.server.host, port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
