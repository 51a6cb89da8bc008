use serde::{Deserialize, Serialize};

pub mod form;

/// Result of a successful earnings calculation as returned by
/// `GET /api/calculateEarnings`.
///
/// Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsResponse {
    /// Raw earnings after stripping separators and parsing
    pub total_earnings: f64,
    /// Earnings after the flat deduction
    pub final_earnings: f64,
    /// Describes whether the final earnings fall below or above the reporting threshold
    pub message: String,
    /// Fixed wage amount paid before dividends
    pub wages: f64,
    /// Residual amount above wages, capped
    pub dividends: f64,
}

/// Failure payload for any rejected calculation (HTTP 400)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Log line forwarded from the frontend to `POST /api/logs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}
