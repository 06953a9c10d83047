//! Fund Store Port
//!
//! The importer and the listing service reach storage only through the
//! `FundStore` trait, so parsing and aggregation can be exercised against
//! the in-memory adapter while production runs on PostgreSQL.
//!
//! ```rust,ignore
//! use domain_fund::{FundStore, InMemoryFundStore, FundService};
//! use std::sync::Arc;
//!
//! let store: Arc<dyn FundStore> = Arc::new(InMemoryFundStore::new());
//! let service = FundService::new(store);
//! let report = service.import_csv(bytes).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, FundId, HealthCheckable, PortError};

use crate::fund::{Fund, NewFund};

/// Query parameters for listing funds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FundQuery {
    /// Exact strategy label to match
    pub strategy: Option<String>,
}

impl FundQuery {
    /// Matches every fund
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches funds with exactly this strategy label
    pub fn by_strategy(strategy: impl Into<String>) -> Self {
        Self {
            strategy: Some(strategy.into()),
        }
    }

    /// Whether a fund satisfies the query
    pub fn matches(&self, fund: &Fund) -> bool {
        self.strategy
            .as_deref()
            .map_or(true, |strategy| fund.strategy == strategy)
    }
}

/// Port for fund persistence
///
/// Implementations must return listings ordered by name, then id, comparing
/// names bytewise (so `"Zeta"` sorts before `"alpha"`), and must
/// reject records that break the constraints checked by [`NewFund::validate`].
#[async_trait]
pub trait FundStore: DomainPort + HealthCheckable {
    /// Persists a new fund and returns the stored record
    async fn insert(&self, fund: NewFund) -> Result<Fund, PortError>;

    /// Retrieves a fund by id, or `PortError::NotFound`
    async fn get(&self, id: FundId) -> Result<Fund, PortError>;

    /// Lists funds matching the query
    async fn list(&self, query: &FundQuery) -> Result<Vec<Fund>, PortError>;

    /// Distinct strategy labels across all funds, sorted bytewise
    async fn strategies(&self) -> Result<Vec<String>, PortError>;
}
