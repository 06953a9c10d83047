//! Fund DTOs

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::FundId;
use domain_fund::{Fund, FundListing, ImportReport, NewFund};

/// Optional `?strategy=` filter
#[derive(Debug, Default, Deserialize)]
pub struct StrategyFilter {
    pub strategy: Option<String>,
}

/// Flat fund representation used by the JSON API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundResponse {
    pub id: FundId,
    pub name: String,
    pub strategy: String,
    /// AUM as a JSON number
    pub aum: Option<f64>,
    /// ISO-8601 date
    pub inception_date: Option<NaiveDate>,
}

impl From<Fund> for FundResponse {
    fn from(fund: Fund) -> Self {
        Self {
            id: fund.id,
            aum: fund.aum.and_then(|aum| aum.to_f64()),
            name: fund.name,
            strategy: fund.strategy,
            inception_date: fund.inception_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FundListResponse {
    pub funds: Vec<FundResponse>,
}

/// Listing page data: filtered funds plus summary figures
#[derive(Debug, Serialize, Deserialize)]
pub struct FundListingResponse {
    pub funds: Vec<FundResponse>,
    pub strategies: Vec<String>,
    pub selected_strategy: Option<String>,
    pub total_count: usize,
    pub total_aum: Decimal,
}

impl From<FundListing> for FundListingResponse {
    fn from(listing: FundListing) -> Self {
        Self {
            funds: listing.funds.into_iter().map(FundResponse::from).collect(),
            strategies: listing.strategies,
            selected_strategy: listing.selected_strategy,
            total_count: listing.total_count,
            total_aum: listing.total_aum,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFundRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub strategy: String,
    pub aum: Option<Decimal>,
    pub inception_date: Option<NaiveDate>,
}

impl From<CreateFundRequest> for NewFund {
    fn from(request: CreateFundRequest) -> Self {
        NewFund {
            name: request.name,
            strategy: request.strategy,
            aum: request.aum,
            inception_date: request.inception_date,
        }
    }
}

/// Result of a CSV upload
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub imported: usize,
    pub skipped: usize,
    pub failed: usize,
    pub message: String,
    pub warnings: Vec<String>,
}

impl From<ImportReport> for UploadResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            message: report.summary_message(),
            imported: report.created,
            skipped: report.skipped,
            failed: report.failed,
            warnings: report.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}
