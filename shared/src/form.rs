//! Earnings form rules shared with the frontend.
//!
//! The UI only renders; input cleanup, the pre-submit checks and the shape
//! of the rendered result are decided here so they can be tested natively.

use crate::EarningsResponse;

/// Final earnings below this level are shown without a wages/dividends breakdown
pub const BREAKDOWN_DISPLAY_FLOOR: f64 = 758.0;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter earnings.";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid earnings value.";
pub const TOO_LOW_MESSAGE: &str = "Earnings after deduction are too low to use this calculator.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
pub const NETWORK_ERROR_MESSAGE: &str = "An error occurred while fetching the data.";

/// Remove thousands separators as the user types
pub fn strip_separators(raw: &str) -> String {
    raw.replace(',', "")
}

/// Check the input before it is sent to the backend.
///
/// Only catches what the user can fix without a round trip: an empty field
/// or text that is not a number. Range checks stay on the server.
pub fn precheck_input(input: &str) -> Result<f64, String> {
    if input.is_empty() {
        return Err(EMPTY_INPUT_MESSAGE.to_string());
    }

    match input.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(INVALID_INPUT_MESSAGE.to_string()),
    }
}

/// Format an amount with two decimals
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub wages: f64,
    pub dividends: f64,
}

/// What the result block renders for a successful response
#[derive(Debug, Clone, PartialEq)]
pub struct EarningsView {
    pub final_earnings: f64,
    pub message: String,
    pub breakdown: Option<Breakdown>,
}

impl EarningsView {
    pub fn from_response(response: &EarningsResponse) -> Self {
        if response.final_earnings < BREAKDOWN_DISPLAY_FLOOR {
            return Self {
                final_earnings: response.final_earnings,
                message: TOO_LOW_MESSAGE.to_string(),
                breakdown: None,
            };
        }

        Self {
            final_earnings: response.final_earnings,
            message: response.message.clone(),
            breakdown: Some(Breakdown {
                wages: response.wages,
                dividends: response.dividends,
            }),
        }
    }

    pub fn final_earnings_label(&self) -> String {
        format!(
            "Final Earnings after 20% deduction: {}",
            format_amount(self.final_earnings)
        )
    }
}

/// State of the earnings form between renders
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EarningsFormState {
    pub earnings_input: String,
    pub is_submitting: bool,
    pub error_message: Option<String>,
    pub view: Option<EarningsView>,
}

impl EarningsFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the edited input with separators removed
    pub fn edit_input(mut self, raw: &str) -> Self {
        self.earnings_input = strip_separators(raw);
        self
    }

    /// Run the pre-submit checks.
    ///
    /// Returns the parsed amount to send when the input passes; otherwise the
    /// state carries the error and no previous result.
    pub fn begin_submit(mut self) -> (Self, Option<f64>) {
        match precheck_input(&self.earnings_input) {
            Ok(total) => {
                self.is_submitting = true;
                self.error_message = None;
                (self, Some(total))
            }
            Err(message) => (self.apply_error(message), None),
        }
    }

    pub fn apply_response(mut self, response: &EarningsResponse) -> Self {
        self.is_submitting = false;
        self.error_message = None;
        self.view = Some(EarningsView::from_response(response));
        self
    }

    pub fn apply_error(mut self, message: String) -> Self {
        self.is_submitting = false;
        self.error_message = Some(message);
        self.reset_results()
    }

    pub fn reset_results(mut self) -> Self {
        self.view = None;
        self
    }
}
