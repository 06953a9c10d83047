//! Fund listing and creation service
//!
//! Application-level operations used by the HTTP layer. The service owns a
//! handle to the fund store and an importer sharing the same store.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use core_kernel::{FundId, PortError};

use crate::error::{FundError, ImportError};
use crate::fund::{Fund, NewFund};
use crate::import::{FundImporter, ImportOptions, ImportReport};
use crate::ports::{FundQuery, FundStore};

/// A filtered fund listing with summary figures
#[derive(Debug, Clone, Serialize)]
pub struct FundListing {
    /// Funds matching the filter, ordered by name
    pub funds: Vec<Fund>,
    /// Strategy labels across all funds, for building a filter selector
    pub strategies: Vec<String>,
    /// The filter that was applied, if any
    pub selected_strategy: Option<String>,
    pub total_count: usize,
    /// Sum of AUM over the listed funds; funds without AUM count as zero
    pub total_aum: Decimal,
}

/// Sums the AUM of `funds`, treating missing values as zero
pub fn total_aum<'a>(funds: impl IntoIterator<Item = &'a Fund>) -> Decimal {
    funds
        .into_iter()
        .filter_map(|fund| fund.aum)
        .fold(Decimal::ZERO, |acc, aum| acc + aum)
}

/// An empty filter means no filter
pub fn normalize_strategy_filter(strategy: Option<&str>) -> Option<&str> {
    strategy.filter(|s| !s.is_empty())
}

/// Entry point for fund operations
#[derive(Clone)]
pub struct FundService {
    store: Arc<dyn FundStore>,
    importer: FundImporter,
}

impl FundService {
    /// Creates a service over the given store
    pub fn new(store: Arc<dyn FundStore>) -> Self {
        let importer = FundImporter::new(Arc::clone(&store));
        Self { store, importer }
    }

    /// Replaces the CSV parsing options
    pub fn with_import_options(mut self, options: ImportOptions) -> Self {
        self.importer = self.importer.with_options(options);
        self
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn FundStore> {
        &self.store
    }

    /// Lists funds, optionally restricted to one strategy label
    ///
    /// # Errors
    ///
    /// Returns `FundError::Storage` if the store cannot be queried
    #[instrument(skip(self))]
    pub async fn list(&self, strategy: Option<&str>) -> Result<FundListing, FundError> {
        let selected = normalize_strategy_filter(strategy).map(str::to_string);
        let query = FundQuery {
            strategy: selected.clone(),
        };

        let funds = self.store.list(&query).await?;
        let strategies = self.store.strategies().await?;
        let total_aum = total_aum(&funds);
        debug!(count = funds.len(), %total_aum, "Listed funds");

        Ok(FundListing {
            total_count: funds.len(),
            total_aum,
            funds,
            strategies,
            selected_strategy: selected,
        })
    }

    /// Fetches one fund
    ///
    /// # Errors
    ///
    /// Returns `FundError::FundNotFound` when no fund has this id
    pub async fn get(&self, id: FundId) -> Result<Fund, FundError> {
        self.store.get(id).await.map_err(|e| match e {
            PortError::NotFound { .. } => FundError::FundNotFound(id),
            other => FundError::Storage(other),
        })
    }

    /// Validates and stores a single fund
    ///
    /// # Errors
    ///
    /// Returns a validation error before touching the store, or
    /// `FundError::Storage` if the insert fails.
    #[instrument(skip(self, fund), fields(name = %fund.name))]
    pub async fn create(&self, fund: NewFund) -> Result<Fund, FundError> {
        let fund = NewFund::new(&fund.name, &fund.strategy).map(|trimmed| NewFund {
            aum: fund.aum,
            inception_date: fund.inception_date,
            ..trimmed
        })?;
        fund.validate()?;
        Ok(self.store.insert(fund).await?)
    }

    /// Imports a CSV export
    ///
    /// # Errors
    ///
    /// Only file-level problems abort the import; see [`crate::import::parse_csv`].
    pub async fn import_csv(&self, bytes: &[u8]) -> Result<ImportReport, ImportError> {
        self.importer.import(bytes).await
    }
}
