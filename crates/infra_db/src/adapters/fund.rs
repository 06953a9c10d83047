//! PostgreSQL Fund Adapter
//!
//! Implements the `FundStore` port on top of `FundRepository`, converting
//! rows into domain funds and database errors into port errors.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, FundId, HealthCheckResult, HealthCheckable, PortError};
use domain_fund::{Fund, FundQuery, FundStore, NewFund};

use crate::error::DatabaseError;
use crate::repositories::fund::{FundRepository, FundRow, NewFundRecord};

const ADAPTER_ID: &str = "postgres-fund-adapter";

/// Pings slower than this report the adapter as degraded
const SLOW_PING_MS: u64 = 1_000;

/// PostgreSQL-backed implementation of the `FundStore` port
///
/// Constraint failures reported by the database (name or strategy too long,
/// AUM out of range) surface as `PortError::Validation`.
#[derive(Debug, Clone)]
pub struct PostgresFundAdapter {
    repository: FundRepository,
}

impl PostgresFundAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FundRepository::new(pool),
        }
    }
}

impl DomainPort for PostgresFundAdapter {}

#[async_trait]
impl HealthCheckable for PostgresFundAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let result = self.repository.ping().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) if latency_ms > SLOW_PING_MS => HealthCheckResult::degraded(
                ADAPTER_ID,
                latency_ms,
                format!("Database ping took {}ms", latency_ms),
            ),
            Ok(()) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(ADAPTER_ID, latency_ms, format!("Database error: {}", e)),
        }
    }
}

#[async_trait]
impl FundStore for PostgresFundAdapter {
    #[instrument(skip(self, fund), fields(name = %fund.name))]
    async fn insert(&self, fund: NewFund) -> Result<Fund, PortError> {
        let record = NewFundRecord {
            aum: fund.stored_aum(),
            name: fund.name,
            strategy: fund.strategy,
            inception_date: fund.inception_date,
        };

        let row = self.repository.insert(&record).await?;
        debug!(fund_id = row.id, "Inserted fund");
        Ok(row_to_fund(row))
    }

    #[instrument(skip(self), fields(fund_id = %id))]
    async fn get(&self, id: FundId) -> Result<Fund, PortError> {
        self.repository
            .find_by_id(id.value())
            .await?
            .map(row_to_fund)
            .ok_or_else(|| DatabaseError::not_found("Fund", id).into())
    }

    async fn list(&self, query: &FundQuery) -> Result<Vec<Fund>, PortError> {
        let rows = self.repository.list(query.strategy.as_deref()).await?;
        Ok(rows.into_iter().map(row_to_fund).collect())
    }

    async fn strategies(&self) -> Result<Vec<String>, PortError> {
        Ok(self.repository.distinct_strategies().await?)
    }
}

fn row_to_fund(row: FundRow) -> Fund {
    Fund {
        id: FundId::new(row.id),
        name: row.name,
        strategy: row.strategy,
        aum: row.aum,
        inception_date: row.inception_date,
        created_at: row.created_at,
    }
}
