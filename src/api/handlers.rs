//! HTTP request handlers for the parking tariff API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::QuoteRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// - `POST /quote` prices a stay under the requested tariff.
/// - `GET /tariffs` returns the tariffs in force.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/tariffs", get(tariffs_handler))
        .with_state(state)
}

/// Handler for POST /quote endpoint.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(&correlation_id, rejection);
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let stay = match request.stay() {
        Ok(stay) => stay,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected stay"
            );
            let api_error: ApiErrorResponse = err.into();
            return json_response(api_error.status, api_error.error);
        }
    };

    let quote = state.calculator().quote(request.tariff, &stay);
    info!(
        correlation_id = %correlation_id,
        quote_id = %quote.quote_id,
        tariff = %quote.tariff,
        units = %quote.units.normalize(),
        cost = %quote.cost,
        duration_us = quote.audit.duration_us,
        "Quote completed successfully"
    );

    json_response(StatusCode::OK, quote)
}

/// Handler for GET /tariffs endpoint.
async fn tariffs_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.calculator().config().clone())
}

/// Maps a JSON extraction failure onto an API error body.
fn rejection_to_error(correlation_id: &Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
