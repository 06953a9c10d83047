//! Domain Adapters
//!
//! Implementations of domain ports backed by PostgreSQL.

pub mod fund;

pub use fund::PostgresFundAdapter;
