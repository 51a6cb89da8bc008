//! Mappers for converting earnings domain results into shared DTOs.

use crate::domain::{EarningsBreakdown, EarningsError};
use shared::{EarningsResponse, ErrorResponse};

pub struct EarningsMapper;

impl EarningsMapper {
    pub fn to_dto(domain: EarningsBreakdown, message: String) -> EarningsResponse {
        EarningsResponse {
            total_earnings: domain.total_earnings,
            final_earnings: domain.final_earnings,
            message,
            wages: domain.wages,
            dividends: domain.dividends,
        }
    }

    pub fn error_to_dto(error: &EarningsError) -> ErrorResponse {
        ErrorResponse::new(error.to_string())
    }
}
