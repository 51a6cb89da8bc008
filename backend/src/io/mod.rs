//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain.
//!
//! Translates query strings and JSON bodies into domain calls and domain
//! results back into the DTOs defined in the `shared` crate. Domain errors
//! become `400 Bad Request` with an `ErrorResponse` body.
//!
//! ## Supported Operations
//!
//! - **GET /api/calculateEarnings**: split an earnings figure into wages and dividends
//! - **POST /api/logs**: re-emit frontend log lines through `tracing`

pub mod rest;

pub use rest::*;
