//! HTTP intake surface
//!
//! Thin axum layer over the ticket store: three JSON routes plus static
//! file serving for the bundled front-end. All responses allow any
//! origin; request handling is logged through the trace layer.

mod handlers;

use crate::error::Result;
use crate::store::TicketRepository;
use axum::Router;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TicketRepository>,
}

impl AppState {
    /// Wrap a store for sharing across handlers
    #[must_use]
    pub fn new(store: Arc<dyn TicketRepository>) -> Self {
        Self { store }
    }

    /// The underlying repository
    #[must_use]
    pub fn store(&self) -> &dyn TicketRepository {
        self.store.as_ref()
    }
}

/// Build the application router
///
/// Routes:
/// - `POST /api/create`: create a ticket from a JSON body
/// - `GET /api/tickets`: all tickets in creation order
/// - `GET /api/ticket/id/:id`: lookup by ticket id
/// - everything else: static files from `static_dir`
#[must_use]
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/create", post(handlers::create_ticket))
        .route("/api/tickets", get(handlers::list_tickets))
        .route("/api/ticket/id/:id", get(handlers::get_ticket))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is interrupted
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(addr: &str, state: AppState, static_dir: &Path) -> Result<()> {
    let app = router(state, static_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
