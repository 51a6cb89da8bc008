use gloo::net::http::Request;
use shared::form::{GENERIC_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
use shared::{EarningsResponse, ErrorResponse};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Ask the backend for the wages/dividends split of `total_earnings`.
    ///
    /// The error string is ready to show to the user.
    pub async fn calculate_earnings(&self, total_earnings: f64) -> Result<EarningsResponse, String> {
        let url = format!(
            "{}/api/calculateEarnings?earnings={}",
            self.base_url, total_earnings
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_string())?;

        if response.ok() {
            response
                .json::<EarningsResponse>()
                .await
                .map_err(|_| NETWORK_ERROR_MESSAGE.to_string())
        } else {
            match response.json::<ErrorResponse>().await {
                Ok(body) if !body.error.is_empty() => Err(body.error),
                _ => Err(GENERIC_ERROR_MESSAGE.to_string()),
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
