//! # REST API for Frontend Logging
//!
//! The browser has no access to the server log, so the frontend posts its log
//! lines here and they are re-emitted through `tracing`.

use axum::{extract::State, http::StatusCode, response::Json};
use shared::{LogRequest, LogResponse};
use tracing::{debug, error, info, warn};

use crate::AppState;

pub async fn log_message(
    State(_app_state): State<AppState>,
    Json(request): Json<LogRequest>,
) -> Result<Json<LogResponse>, StatusCode> {
    let component = request.component.as_deref().unwrap_or("frontend");

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(component = %component, "{}", request.message),
        "warn" => warn!(component = %component, "{}", request.message),
        "error" => error!(component = %component, "{}", request.message),
        // Unknown levels are logged as info
        _ => info!(component = %component, "{}", request.message),
    }

    Ok(Json(LogResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EarningsCalculatorService;

    #[tokio::test]
    async fn test_log_message_accepts_any_level() {
        for level in ["debug", "INFO", "warn", "error", "trace-ish"] {
            let state = AppState {
                earnings_calculator: EarningsCalculatorService::new(),
            };
            let request = LogRequest {
                level: level.to_string(),
                message: "Calculate clicked".to_string(),
                component: Some("EarningsForm".to_string()),
            };

            let Json(response) = log_message(State(state), Json(request)).await.unwrap();
            assert!(response.success);
        }
    }
}
