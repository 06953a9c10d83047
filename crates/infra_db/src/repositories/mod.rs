//! Repository implementations
//!
//! Repositories encapsulate SQL and map between database rows and plain row
//! types. Domain conversion happens in the adapters.

pub mod fund;

pub use fund::{FundRepository, FundRow, NewFundRecord};
