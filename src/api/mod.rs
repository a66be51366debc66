//! HTTP API module for the compensation modeling engine.
//!
//! This module provides the REST endpoints that marshal plan and survey
//! records to and from the pure calculation layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BlendRequest, CallPayRequest, ForecastRequest, ScenarioRequest};
pub use response::{ApiError, BlendResponse, ForecastResponse};
pub use state::AppState;
