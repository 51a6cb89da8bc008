pub mod earnings_mapper;
