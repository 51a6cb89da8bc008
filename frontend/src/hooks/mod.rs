pub mod use_earnings_form;

pub use use_earnings_form::use_earnings_form;
