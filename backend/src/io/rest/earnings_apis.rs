//! # REST API for Earnings Calculation
//!
//! `GET /api/calculateEarnings?earnings=<text>` returns the wages/dividends
//! split or a `400` with `{"error": ...}`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::io::rest::mappers::earnings_mapper::EarningsMapper;
use crate::AppState;

// Query parameters for the earnings calculation API
#[derive(Debug, Deserialize)]
pub struct CalculateEarningsQuery {
    pub earnings: Option<String>,
}

/// Calculate final earnings, wages and dividends for a raw earnings figure
pub async fn calculate_earnings(
    State(state): State<AppState>,
    Query(query): Query<CalculateEarningsQuery>,
) -> impl IntoResponse {
    info!("GET /api/calculateEarnings - query: {:?}", query);

    // A missing parameter is treated like an empty one and fails validation
    let input = query.earnings.unwrap_or_default();

    match state.earnings_calculator.calculate_from_input(&input) {
        Ok(breakdown) => {
            let message = state.earnings_calculator.band_message(breakdown.band);
            let response = EarningsMapper::to_dto(breakdown, message);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Rejected earnings input {:?}: {}", input, e);
            (StatusCode::BAD_REQUEST, Json(EarningsMapper::error_to_dto(&e))).into_response()
        }
    }
}
