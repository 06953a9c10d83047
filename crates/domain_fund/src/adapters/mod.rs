//! Fund Store Adapters
//!
//! Storage implementations that live alongside the domain. The PostgreSQL
//! adapter is provided by `infra_db`.

pub mod memory;

pub use memory::InMemoryFundStore;
