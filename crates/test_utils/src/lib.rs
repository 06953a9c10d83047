//! Test Utilities Crate
//!
//! Shared test infrastructure for the fund registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: Canned CSV exports and sample funds
//! - `builders`: Builder for `NewFund` test data
//! - `database`: PostgreSQL test container management
//! - `assertions`: Assertion helpers for listings and import reports
//! - `generators`: Property-based and fake data generators

pub mod assertions;
pub mod builders;
pub mod database;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use database::*;
pub use fixtures::*;
pub use generators::*;
