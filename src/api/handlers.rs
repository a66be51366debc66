//! HTTP request handlers for the compensation modeling engine API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler only marshals records to and from the pure calculation layer.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{blend, forecast, impact, percentiles_from_records, recommend_cf, run_scenario};
use crate::models::MarketBenchmarks;

use super::request::{BlendRequest, CallPayRequest, ForecastRequest, ScenarioRequest};
use super::response::{ApiError, ApiErrorResponse, BlendResponse, ForecastResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/scenario", post(scenario_handler))
        .route("/call-pay", post(call_pay_handler))
        .route("/forecast", post(forecast_handler))
        .route("/benchmarks/blend", post(blend_handler))
        .with_state(state)
}

/// Handler for the POST /scenario endpoint.
///
/// Evaluates a conversion factor model for one provider scenario and
/// returns the full scenario result.
async fn scenario_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing scenario request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let benchmarks = match resolve_benchmarks(
        &state,
        request.specialty.as_deref(),
        request.benchmarks,
        correlation_id,
    ) {
        Ok(benchmarks) => benchmarks,
        Err(response) => return response.into_response(),
    };

    match run_scenario(
        request.wrvus,
        request.fte,
        request.base_pay,
        &request.model,
        benchmarks.as_ref(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                scenario_id = %result.scenario_id,
                modeled_tcc = %result.modeled_tcc,
                warnings = result.warnings.len(),
                "Scenario completed"
            );
            json_ok(&result)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Scenario failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /call-pay endpoint.
///
/// Computes the aggregate call-pay impact of the submitted tiers.
async fn call_pay_handler(
    State(_state): State<AppState>,
    payload: Result<Json<CallPayRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing call-pay request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let result = impact(&request.tiers, &request.context, request.tcc_reference);
    info!(
        correlation_id = %correlation_id,
        tiers = result.tier_impacts.len(),
        total_annual_budget = %result.total_annual_budget,
        "Call-pay impact completed"
    );
    json_ok(&result)
}

/// Handler for the POST /forecast endpoint.
///
/// Computes the base-year impact and projects it over the requested
/// horizon.
async fn forecast_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing forecast request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let base_impact = impact(&request.tiers, &request.context, request.tcc_reference);
    let projection = forecast(&request.context, &base_impact, &request.assumptions);
    info!(
        correlation_id = %correlation_id,
        years = projection.forecasts.len(),
        total_projected_spend = %projection.total_projected_spend,
        "Forecast completed"
    );
    json_ok(&ForecastResponse {
        impact: base_impact,
        forecast: projection,
    })
}

/// Handler for the POST /benchmarks/blend endpoint.
///
/// Builds empirical percentiles from the submitted records, blends them
/// with survey benchmarks, and derives a CF recommendation.
async fn blend_handler(
    State(state): State<AppState>,
    payload: Result<Json<BlendRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing blend request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let survey = match resolve_benchmarks(
        &state,
        request.specialty.as_deref(),
        request.benchmarks,
        correlation_id,
    ) {
        Ok(Some(survey)) => survey,
        Ok(None) => {
            warn!(correlation_id = %correlation_id, "Blend request without a survey side");
            return bad_request(ApiError::validation_error(
                "either specialty or benchmarks must be provided",
            ));
        }
        Err(response) => return response.into_response(),
    };

    let internal = percentiles_from_records(&request.records);
    let blended = blend(internal.as_ref(), &survey, request.mode, request.weights);
    let recommendation = recommend_cf(&blended, request.model_year);

    info!(
        correlation_id = %correlation_id,
        sample_size = internal.as_ref().map(|i| i.sample_size).unwrap_or(0),
        recommended = recommendation.is_some(),
        "Blend completed"
    );
    json_ok(&BlendResponse {
        internal,
        blended,
        recommendation,
    })
}

/// Unwraps a JSON payload, mapping extraction failures to API errors.
fn parse_request<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(match rejection {
            JsonRejection::JsonDataError(err) => {
                // The body text carries the detailed error from serde.
                let body_text = err.body_text();
                warn!(
                    correlation_id = %correlation_id,
                    error = %body_text,
                    "JSON data error"
                );
                if body_text.contains("missing field") {
                    ApiError::new("VALIDATION_ERROR", body_text)
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
        }),
    }
}

/// Resolves the benchmark source for a request: inline points win over a
/// named specialty; naming neither yields no benchmarks.
fn resolve_benchmarks(
    state: &AppState,
    specialty: Option<&str>,
    inline: Option<MarketBenchmarks>,
    correlation_id: Uuid,
) -> Result<Option<MarketBenchmarks>, ApiErrorResponse> {
    if inline.is_some() {
        return Ok(inline);
    }

    match specialty {
        Some(code) => match state.surveys().get_benchmarks(code) {
            Ok(benchmarks) => Ok(Some(benchmarks.clone())),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    specialty = %code,
                    "Specialty not found"
                );
                Err(err.into())
            }
        },
        None => Ok(None),
    }
}

fn json_ok<T: serde::Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
