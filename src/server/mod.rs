// Local HTTP API - Axum server the browser front end talks to
// Exposes the application commands as JSON endpoints under /api.

pub mod routes;

use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use rand::thread_rng;
use rand::Rng;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::commands::{AppState, CommandError};

/// Shared state for the API server
pub struct ServerState {
    pub app: AppState,
    /// Bearer token required on /api routes. None disables auth.
    pub token: Option<String>,
}

/// Holds the running server's shutdown mechanism
pub struct RunningServer {
    pub shutdown_tx: oneshot::Sender<()>,
    pub addr: SocketAddr,
    pub handle: JoinHandle<()>,
}

impl RunningServer {
    /// Signal shutdown and wait for in-flight requests to drain.
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.handle.await;
    }
}

/// Generate a cryptographically random 256-bit token (64 hex chars)
pub fn generate_token() -> String {
    let mut rng = thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// JSON error body: `{kind, message, blocking}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
    /// True for rate limits; the client should block until acknowledged.
    pub blocking: bool,
}

/// A command error on its way to the client.
#[derive(Debug)]
pub struct ApiError(pub CommandError);

impl From<CommandError> for ApiError {
    fn from(error: CommandError) -> Self {
        ApiError(error)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CommandError::Generation(e) if e.is_rate_limited() => StatusCode::TOO_MANY_REQUESTS,
            CommandError::Generation(_) => StatusCode::BAD_GATEWAY,
            CommandError::Validation(_) | CommandError::MissingApiKey(_) => StatusCode::BAD_REQUEST,
            CommandError::Busy(_) => StatusCode::CONFLICT,
            CommandError::Database(_)
            | CommandError::Audio(_)
            | CommandError::Io(_)
            | CommandError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.0.kind(), "Request failed: {}", self.0);
        }
        let body = ErrorBody {
            kind: self.0.kind(),
            message: self.0.to_string(),
            blocking: self.0.is_rate_limited(),
        };
        (status, Json(body)).into_response()
    }
}

/// Auth middleware - validates the Bearer token when one is configured.
/// The health check stays public.
async fn auth_middleware(
    State(state): State<Arc<ServerState>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = state.token.as_deref() else {
        return Ok(next.run(request).await);
    };
    if request.uri().path() == "/api/health" {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(provided) if provided == expected => Ok(next.run(request).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

/// Build the full router.
pub fn router(state: Arc<ServerState>) -> Router {
    // CORS for a local browser front end; auth middleware is the access check
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(Any);

    routes::api_routes()
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
        .layer(cors)
}

/// Bind the preferred port, then the next ten, then an OS-assigned one.
async fn bind_listener(host: &str, preferred_port: u16) -> Result<TcpListener, String> {
    let candidates = std::iter::once(preferred_port)
        .chain((1..=10u16).map(|offset| preferred_port.saturating_add(offset)))
        .chain(std::iter::once(0));

    for port in candidates {
        match TcpListener::bind((host, port)).await {
            Ok(listener) => {
                if port != preferred_port {
                    tracing::warn!(preferred_port, port, "Preferred port unavailable");
                }
                return Ok(listener);
            }
            Err(e) => tracing::debug!(port, error = %e, "Bind failed"),
        }
        if preferred_port == 0 {
            break;
        }
    }
    Err(format!("Failed to bind to any port on {}", host))
}

/// Start the API server. Returns the running server handle (for shutdown).
pub async fn start_server(
    state: Arc<ServerState>,
    host: &str,
    port: u16,
) -> Result<RunningServer, String> {
    let app = router(state);
    let listener = bind_listener(host, port).await?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get local addr: {}", e))?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    // Log without the token
    tracing::info!(%addr, "API server starting");

    let handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await;
        if let Err(e) = result {
            tracing::error!(error = %e, "API server error");
        }
        tracing::info!("API server stopped");
    });

    Ok(RunningServer {
        shutdown_tx,
        addr,
        handle,
    })
}
