//! HTTP request handlers
//!
//! Every failure is converted to a JSON `{"error": ...}` envelope with
//! the matching status code; nothing here can take the process down.

use super::AppState;
use crate::core::{TicketDraft, TicketId};
use crate::error::TicketDeskError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

/// JSON body for `POST /api/create`
#[derive(Debug, Deserialize)]
pub(crate) struct CreateTicketRequest {
    name: String,
    description: String,
    category: String,
}

impl CreateTicketRequest {
    fn into_draft(self) -> TicketDraft {
        TicketDraft::new(self.name, self.description, self.category)
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Map a store error to its HTTP representation
fn map_error(err: &TicketDeskError) -> Response {
    match err {
        TicketDeskError::EmptyField { .. }
        | TicketDeskError::InvalidCategory { .. }
        | TicketDeskError::InvalidInput(_) => {
            error_response(StatusCode::BAD_REQUEST, "Invalid input")
        },
        TicketDeskError::NumbersExhausted { .. } => {
            error_response(StatusCode::CONFLICT, &err.user_message())
        },
        TicketDeskError::TicketNotFound { .. } => {
            error_response(StatusCode::NOT_FOUND, "Ticket not found")
        },
        other => {
            error!("internal error handling request: {other}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        },
    }
}

/// `POST /api/create`
pub(crate) async fn create_ticket(
    State(state): State<AppState>,
    payload: Result<Json<CreateTicketRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!("rejected create body: {rejection}");
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON");
        },
    };

    match state.store().create(request.into_draft()) {
        Ok(ticket) => (StatusCode::OK, Json(ticket)).into_response(),
        Err(err) => map_error(&err),
    }
}

/// `GET /api/tickets`
pub(crate) async fn list_tickets(State(state): State<AppState>) -> Response {
    match state.store().all() {
        Ok(tickets) => Json(tickets).into_response(),
        Err(err) => map_error(&err),
    }
}

/// `GET /api/ticket/id/:id`
pub(crate) async fn get_ticket(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => {
            debug!("rejected ticket id: {rejection}");
            return error_response(StatusCode::BAD_REQUEST, "Invalid ticket id");
        },
    };

    match state.store().find_by_id(TicketId::new(id)) {
        Ok(ticket) => (StatusCode::OK, Json(ticket)).into_response(),
        Err(err) => map_error(&err),
    }
}
