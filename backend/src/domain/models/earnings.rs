/// Which side of the dividends cap the final earnings fall on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarningsBand {
    /// Final earnings at or above wages but below the dividends cap
    BelowCap,
    /// Final earnings at or above the dividends cap; dividends are capped
    AboveCap,
}

/// Fixed constants of the earnings split
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Fraction of total earnings removed before the split
    pub deduction_rate: f64,
    /// Wage floor paid before any dividend
    pub wages: f64,
    /// Final earnings at which dividends stop growing
    pub dividends_cap: f64,
    /// Threshold quoted in the band messages
    pub reporting_threshold: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            deduction_rate: 0.20,
            wages: 417.0,
            dividends_cap: 3813.0,
            reporting_threshold: 4000.0,
        }
    }
}

/// Result of a successful calculation
#[derive(Debug, Clone, PartialEq)]
pub struct EarningsBreakdown {
    pub total_earnings: f64,
    pub final_earnings: f64,
    pub band: EarningsBand,
    pub wages: f64,
    pub dividends: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EarningsError {
    #[error("Invalid earnings value")]
    InvalidEarnings,
    #[error("Earnings after deduction are too low to use this calculator.")]
    BelowWageFloor { final_earnings: f64 },
}
