//! Earnings calculation domain logic.
//!
//! Turns a raw earnings figure into the wages/dividends split: a flat
//! deduction is taken first, the remainder must cover the wage floor, and
//! whatever is left above wages becomes dividends up to a cap. The service is
//! pure; HTTP parsing and rendering stay in the IO layer.

use crate::domain::models::earnings::{
    CalculatorConfig, EarningsBand, EarningsBreakdown, EarningsError,
};

#[derive(Clone)]
pub struct EarningsCalculatorService {
    config: CalculatorConfig,
}

impl EarningsCalculatorService {
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Clean and parse an earnings string.
    ///
    /// Thousands separators are removed before parsing. Anything that is not a
    /// finite number greater than zero is rejected.
    pub fn parse_earnings(&self, input: &str) -> Result<f64, EarningsError> {
        let cleaned = input.replace(',', "");
        let cleaned = cleaned.trim();

        if cleaned.is_empty() {
            return Err(EarningsError::InvalidEarnings);
        }

        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
            _ => Err(EarningsError::InvalidEarnings),
        }
    }

    /// Final earnings after the flat deduction
    pub fn subtract_deduction(&self, total_earnings: f64) -> f64 {
        let deduction = total_earnings * self.config.deduction_rate;
        total_earnings - deduction
    }

    /// Split validated total earnings into wages and dividends
    pub fn calculate(&self, total_earnings: f64) -> Result<EarningsBreakdown, EarningsError> {
        let final_earnings = self.subtract_deduction(total_earnings);
        let wages = self.config.wages;
        let dividends_cap = self.config.dividends_cap;

        if final_earnings < wages {
            return Err(EarningsError::BelowWageFloor { final_earnings });
        }

        let (band, dividends) = if final_earnings >= dividends_cap {
            (EarningsBand::AboveCap, dividends_cap - wages)
        } else {
            (EarningsBand::BelowCap, final_earnings - wages)
        };

        Ok(EarningsBreakdown {
            total_earnings,
            final_earnings,
            band,
            wages,
            dividends: dividends.max(0.0),
        })
    }

    /// Parse the raw input and calculate in one step
    pub fn calculate_from_input(&self, input: &str) -> Result<EarningsBreakdown, EarningsError> {
        let total_earnings = self.parse_earnings(input)?;
        self.calculate(total_earnings)
    }

    /// Descriptive message for a band
    pub fn band_message(&self, band: EarningsBand) -> String {
        let side = match band {
            EarningsBand::AboveCap => "above",
            EarningsBand::BelowCap => "below",
        };
        format!(
            "The earnings after deduction are {} {}.",
            side, self.config.reporting_threshold
        )
    }

    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for EarningsCalculatorService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn create_test_service() -> EarningsCalculatorService {
        EarningsCalculatorService::new()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_calculate_below_cap() {
        let service = create_test_service();

        let breakdown = service.calculate_from_input("1000").unwrap();

        assert_eq!(breakdown.total_earnings, 1000.0);
        assert_close(breakdown.final_earnings, 800.0);
        assert_eq!(breakdown.band, EarningsBand::BelowCap);
        assert_eq!(breakdown.wages, 417.0);
        assert_close(breakdown.dividends, 383.0);
    }

    #[test]
    fn test_calculate_above_cap() {
        let service = create_test_service();

        let breakdown = service.calculate_from_input("5000").unwrap();

        assert_close(breakdown.final_earnings, 4000.0);
        assert_eq!(breakdown.band, EarningsBand::AboveCap);
        assert_eq!(breakdown.dividends, 3396.0);
    }

    #[test]
    fn test_calculate_too_low() {
        let service = create_test_service();

        let error = service.calculate_from_input("100").unwrap_err();

        assert!(matches!(error, EarningsError::BelowWageFloor { .. }));
        assert_eq!(
            error.to_string(),
            "Earnings after deduction are too low to use this calculator."
        );
    }

    #[test]
    fn test_parse_earnings() {
        let service = create_test_service();

        assert_eq!(service.parse_earnings("1,234.50").unwrap(), 1234.5);
        assert_eq!(service.parse_earnings(" 5000 ").unwrap(), 5000.0);
        assert_eq!(service.parse_earnings("1,000,000").unwrap(), 1_000_000.0);

        for input in ["abc", "", ",", "-50", "0", "12abc", "inf", "NaN", "1e400"] {
            assert_eq!(
                service.parse_earnings(input),
                Err(EarningsError::InvalidEarnings),
                "input {:?} should be rejected",
                input
            );
        }
        assert_eq!(EarningsError::InvalidEarnings.to_string(), "Invalid earnings value");
    }

    #[test]
    fn test_comma_separated_input() {
        let service = create_test_service();

        let breakdown = service.calculate_from_input("1,234.50").unwrap();

        assert_eq!(breakdown.total_earnings, 1234.5);
        assert_close(breakdown.final_earnings, 987.6);
        assert_close(breakdown.dividends, 570.6);
    }

    #[test]
    fn test_final_earnings_is_eighty_percent() {
        let service = create_test_service();

        for total in [0.01, 1.0, 99.99, 521.25, 1234.5, 5000.0, 123_456.78] {
            let final_earnings = service.subtract_deduction(total);
            assert!((final_earnings - total * 0.8).abs() <= total * 1e-12);
        }
    }

    #[test]
    fn test_wage_floor_is_inclusive() {
        let service = create_test_service();

        // 521.25 * 0.8 is exactly 417.0
        let breakdown = service.calculate(521.25).unwrap();
        assert_eq!(breakdown.final_earnings, 417.0);
        assert_eq!(breakdown.band, EarningsBand::BelowCap);
        assert_eq!(breakdown.dividends, 0.0);

        assert!(matches!(
            service.calculate(521.24),
            Err(EarningsError::BelowWageFloor { .. })
        ));
    }

    #[test]
    fn test_dividends_cap_is_inclusive() {
        let service = create_test_service();

        // 4766.25 * 0.8 is exactly 3813.0
        let breakdown = service.calculate(4766.25).unwrap();
        assert_eq!(breakdown.final_earnings, 3813.0);
        assert_eq!(breakdown.band, EarningsBand::AboveCap);
        assert_eq!(breakdown.dividends, 3396.0);
    }

    #[test]
    fn test_boundaries_without_deduction() {
        let service = EarningsCalculatorService::with_config(CalculatorConfig {
            deduction_rate: 0.0,
            ..CalculatorConfig::default()
        });

        assert_eq!(service.calculate(417.0).unwrap().dividends, 0.0);
        assert!(service.calculate(416.99).is_err());

        let capped = service.calculate(3813.0).unwrap();
        assert_eq!(capped.band, EarningsBand::AboveCap);
        assert_eq!(capped.dividends, 3396.0);

        let uncapped = service.calculate(3812.5).unwrap();
        assert_eq!(uncapped.band, EarningsBand::BelowCap);
        assert_eq!(uncapped.dividends, 3395.5);
    }

    #[test]
    fn test_dividends_never_negative() {
        // A cap below wages would make capped dividends negative
        let service = EarningsCalculatorService::with_config(CalculatorConfig {
            dividends_cap: 100.0,
            ..CalculatorConfig::default()
        });

        let breakdown = service.calculate(1000.0).unwrap();
        assert_eq!(breakdown.band, EarningsBand::AboveCap);
        assert_eq!(breakdown.dividends, 0.0);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let service = create_test_service();

        let first = service.calculate_from_input("2,500");
        let second = service.calculate_from_input("2,500");

        assert_eq!(first, second);
    }

    #[test]
    fn test_band_message() {
        let service = create_test_service();

        assert_eq!(
            service.band_message(EarningsBand::AboveCap),
            "The earnings after deduction are above 4000."
        );
        assert_eq!(
            service.band_message(EarningsBand::BelowCap),
            "The earnings after deduction are below 4000."
        );
    }
}
