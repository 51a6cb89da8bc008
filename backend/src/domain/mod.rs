//! # Domain Module
//!
//! Business rules of the earnings calculator, independent of HTTP and UI.
//!
//! ## Module Organization
//!
//! - **earnings_calculator**: input cleanup, the flat deduction, the wage
//!   floor check and the capped wages/dividends split
//! - **models**: domain value types and errors
//!
//! ## Business Rules
//!
//! - Earnings must be a finite number greater than zero
//! - A flat 20% deduction is taken before anything is split
//! - Final earnings below the wage floor cannot be split
//! - Dividends are whatever exceeds wages, capped at `dividends_cap - wages`

pub mod earnings_calculator;
pub mod models;

pub use earnings_calculator::*;
pub use models::earnings::*;
