//! HTTP API module for the parking tariff engine.
//!
//! This module provides the REST API endpoints for quoting parking fees
//! under the configured tariffs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
