//! In-memory fund store
//!
//! Keeps funds in a `BTreeMap` behind a `tokio::sync::RwLock`. Ids are
//! assigned sequentially from 1, and inserts enforce the same constraints as
//! the `funds` table so imports behave identically on both backends.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{DomainPort, FundId, HealthCheckResult, HealthCheckable, PortError};

use crate::error::FundError;
use crate::fund::{Fund, NewFund};
use crate::ports::{FundQuery, FundStore};

const ADAPTER_ID: &str = "memory-fund-store";

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i64,
    funds: BTreeMap<FundId, Fund>,
}

/// Fund store backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryFundStore {
    state: RwLock<MemoryState>,
}

impl InMemoryFundStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored funds
    pub async fn len(&self) -> usize {
        self.state.read().await.funds.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl DomainPort for InMemoryFundStore {}

#[async_trait]
impl HealthCheckable for InMemoryFundStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy(ADAPTER_ID, 0)
    }
}

#[async_trait]
impl FundStore for InMemoryFundStore {
    async fn insert(&self, fund: NewFund) -> Result<Fund, PortError> {
        fund.validate().map_err(constraint_error)?;

        let mut state = self.state.write().await;
        state.next_id += 1;
        let id = FundId::new(state.next_id);
        let stored = fund.into_fund(id, Utc::now());
        state.funds.insert(id, stored.clone());

        debug!(fund_id = %id, "Stored fund in memory");
        Ok(stored)
    }

    async fn get(&self, id: FundId) -> Result<Fund, PortError> {
        self.state
            .read()
            .await
            .funds
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Fund", id))
    }

    async fn list(&self, query: &FundQuery) -> Result<Vec<Fund>, PortError> {
        let state = self.state.read().await;
        let mut funds: Vec<Fund> = state
            .funds
            .values()
            .filter(|fund| query.matches(fund))
            .cloned()
            .collect();
        funds.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(funds)
    }

    async fn strategies(&self) -> Result<Vec<String>, PortError> {
        let state = self.state.read().await;
        let labels: BTreeSet<&str> = state.funds.values().map(|f| f.strategy.as_str()).collect();
        Ok(labels.into_iter().map(str::to_string).collect())
    }
}

fn constraint_error(err: FundError) -> PortError {
    match err.field() {
        Some(field) => PortError::validation_field(err.to_string(), field),
        None => PortError::validation(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = InMemoryFundStore::new();
        let a = store.insert(NewFund::new("A", "Arbitrage").unwrap()).await.unwrap();
        let b = store.insert(NewFund::new("B", "Arbitrage").unwrap()).await.unwrap();

        assert_eq!(a.id, FundId::new(1));
        assert_eq!(b.id, FundId::new(2));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_insert_rounds_aum() {
        let store = InMemoryFundStore::new();
        let fund = NewFund::new("A", "Arbitrage").unwrap().with_aum(dec!(12.345));
        let stored = store.insert(fund).await.unwrap();
        assert_eq!(stored.aum, Some(dec!(12.35)));
    }

    #[tokio::test]
    async fn test_insert_rejects_long_strategy() {
        let store = InMemoryFundStore::new();
        let fund = NewFund::new("A", &"x".repeat(51)).unwrap();
        let err = store.insert(fund).await.unwrap_err();

        assert!(matches!(err, PortError::Validation { field: Some(ref f), .. } if f == "strategy"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_mixed_case_names_sort_bytewise() {
        let store = InMemoryFundStore::new();
        for (name, strategy) in [("alpha", "macro"), ("Zeta", "Arbitrage"), ("Beta", "Global Macro")] {
            store.insert(NewFund::new(name, strategy).unwrap()).await.unwrap();
        }

        let names: Vec<String> = store
            .list(&FundQuery::all())
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Beta", "Zeta", "alpha"]);
        assert_eq!(store.strategies().await.unwrap(), vec!["Arbitrage", "Global Macro", "macro"]);
    }

    #[tokio::test]
    async fn test_get_missing_fund() {
        let store = InMemoryFundStore::new();
        assert!(store.get(FundId::new(9)).await.unwrap_err().is_not_found());
    }
}
