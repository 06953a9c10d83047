//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for the fund registry using SQLx.
//!
//! # Architecture
//!
//! - `pool`: connection pool configuration and creation
//! - `repositories`: SQL access mapped to row types
//! - `adapters`: implementations of domain ports on top of the repositories
//! - `migrations`: embedded schema migrations
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations, PostgresFundAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/funds")).await?;
//! run_migrations(&pool).await?;
//! let store = PostgresFundAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod migrations;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, create_pool_from_url, DatabaseConfig};
pub use error::DatabaseError;
pub use migrations::run_migrations;
pub use repositories::FundRepository;
pub use adapters::PostgresFundAdapter;
