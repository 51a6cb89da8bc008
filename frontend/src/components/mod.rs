pub mod earnings_form;
pub mod earnings_summary;

pub use earnings_form::EarningsForm;
pub use earnings_summary::EarningsSummary;
