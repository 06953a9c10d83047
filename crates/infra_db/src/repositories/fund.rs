//! Fund repository implementation
//!
//! SQL access to the `funds` table. Queries are checked at runtime and rows
//! are decoded through `sqlx::FromRow`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use crate::error::DatabaseError;

const FUND_COLUMNS: &str = "id, name, strategy, aum, inception_date, created_at";

/// Repository for fund records
#[derive(Debug, Clone)]
pub struct FundRepository {
    pool: PgPool,
}

impl FundRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a fund and returns the stored row
    ///
    /// # Errors
    ///
    /// Length, range and check violations come back as
    /// `DatabaseError::ConstraintViolation`.
    #[instrument(skip(self, record), fields(name = %record.name))]
    pub async fn insert(&self, record: &NewFundRecord) -> Result<FundRow, DatabaseError> {
        let sql = format!(
            "INSERT INTO funds (name, strategy, aum, inception_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {FUND_COLUMNS}"
        );

        sqlx::query_as::<_, FundRow>(&sql)
            .bind(&record.name)
            .bind(&record.strategy)
            .bind(record.aum)
            .bind(record.inception_date)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))
    }

    /// Retrieves a fund by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<FundRow>, DatabaseError> {
        let sql = format!("SELECT {FUND_COLUMNS} FROM funds WHERE id = $1");

        sqlx::query_as::<_, FundRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))
    }

    /// Lists funds ordered by name, optionally restricted to one strategy
    ///
    /// Names compare bytewise (`COLLATE "C"`), matching the in-memory store.
    pub async fn list(&self, strategy: Option<&str>) -> Result<Vec<FundRow>, DatabaseError> {
        let sql = format!(
            "SELECT {FUND_COLUMNS} FROM funds \
             WHERE ($1::text IS NULL OR strategy = $1) \
             ORDER BY name COLLATE \"C\", id"
        );

        sqlx::query_as::<_, FundRow>(&sql)
            .bind(strategy)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))
    }

    /// Distinct strategy labels, sorted
    pub async fn distinct_strategies(&self) -> Result<Vec<String>, DatabaseError> {
        sqlx::query_scalar::<_, String>(r#"SELECT DISTINCT strategy COLLATE "C" AS strategy FROM funds ORDER BY 1"#)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))
    }

    /// Round-trips a trivial query
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DatabaseError::from(&e))
    }
}

/// Values for a new `funds` row
#[derive(Debug, Clone)]
pub struct NewFundRecord {
    pub name: String,
    pub strategy: String,
    pub aum: Option<Decimal>,
    pub inception_date: Option<NaiveDate>,
}

/// Database row for a fund
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FundRow {
    pub id: i64,
    pub name: String,
    pub strategy: String,
    pub aum: Option<Decimal>,
    pub inception_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
