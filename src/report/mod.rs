pub mod error;
pub mod monthly_cache;
pub mod parser;
pub mod source;

#[cfg(test)]
pub(crate) mod fake;
