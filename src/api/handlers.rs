//! HTTP request handlers for the activity calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::generation::create_company;
use crate::models::Company;
use crate::sampling::ConfiguredSampler;

use super::request::GenerateRequest;
use super::response::{ApiError, ApiErrorResponse, GenerateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate_handler))
        .with_state(state)
}

/// Handler for POST /generate endpoint.
///
/// Generates one company instance and returns its schedules.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config();
    let seed = request.seed.unwrap_or_else(rand::random);
    let week_start = request
        .week_start
        .unwrap_or(config.config().settings().timing.week_start);

    let start_time = Instant::now();
    match perform_generation(&request, seed, config) {
        Ok(company) => {
            let response = GenerateResponse::from_company(&company, seed, week_start);
            info!(
                correlation_id = %correlation_id,
                instance_id = %response.instance_id,
                seed,
                employees = response.summary.employees,
                meetings_created = response.summary.meetings_created,
                duration_us = start_time.elapsed().as_micros(),
                "Generation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                seed,
                error = %err,
                "Generation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Validates the request and generates a company from a seeded sampler.
fn perform_generation(
    request: &GenerateRequest,
    seed: u64,
    config: &ConfigLoader,
) -> EngineResult<Company> {
    request.validate()?;

    let generator_config = config.config();
    let offices = request
        .offices
        .unwrap_or(generator_config.settings().company.offices);
    let mut sampler = ConfiguredSampler::seeded(generator_config, seed);
    let company = create_company(request.employees, offices, generator_config, &mut sampler)?;

    for employee in &company.employees {
        employee.schedule.validate(employee.id)?;
    }
    Ok(company)
}
