pub mod diff;
pub mod filter;
pub mod input_loader;
pub mod query;

#[cfg(test)]
mod query_tests;
