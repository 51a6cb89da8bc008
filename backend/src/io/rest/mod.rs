//! # REST API Interface Layer
//!
//! HTTP endpoints of the earnings calculator. Handlers only translate:
//! parse the request, call the domain service, map the result to a DTO and
//! pick the status code.

pub mod earnings_apis;
pub mod logging_apis;
pub mod mappers;

pub use earnings_apis::*;
pub use logging_apis::*;
