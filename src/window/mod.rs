pub mod aggregator;
pub mod base_date;
