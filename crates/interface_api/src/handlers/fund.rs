//! Fund handlers

use axum::{
    extract::{rejection::PathRejection, Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};
use validator::Validate;

use core_kernel::FundId;

use crate::dto::fund::*;
use crate::{error::ApiError, AppState};

/// Multipart field carrying the CSV file
pub const CSV_FIELD: &str = "csv_file";

/// Listing page data, optionally filtered by strategy
pub async fn list_view(
    State(state): State<AppState>,
    Query(filter): Query<StrategyFilter>,
) -> Result<Json<FundListingResponse>, ApiError> {
    let listing = state.service.list(filter.strategy.as_deref()).await?;
    Ok(Json(listing.into()))
}

/// Imports funds from an uploaded CSV file
pub async fn upload_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(CSV_FIELD) {
            let filename = field.file_name().map(str::to_string);
            let bytes = field.bytes().await?;
            info!(filename = ?filename, size = bytes.len(), "Received CSV upload");
            file = Some(bytes);
            break;
        }
    }

    let Some(bytes) = file else {
        warn!("Upload without a {} field", CSV_FIELD);
        return Err(ApiError::BadRequest(format!("Missing file field '{}'", CSV_FIELD)));
    };

    let report = state.service.import_csv(&bytes).await?;
    Ok(Json(report.into()))
}

/// Lists funds as JSON
pub async fn list_funds(
    State(state): State<AppState>,
    Query(filter): Query<StrategyFilter>,
) -> Result<Json<FundListResponse>, ApiError> {
    let listing = state.service.list(filter.strategy.as_deref()).await?;
    Ok(Json(FundListResponse {
        funds: listing.funds.into_iter().map(FundResponse::from).collect(),
    }))
}

/// Gets a single fund
///
/// A non-numeric id cannot name a fund, so it is answered as not found.
pub async fn get_fund(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<FundResponse>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::NotFound(format!("Fund not found: {}", e.body_text())))?;
    let fund = state.service.get(FundId::new(id)).await?;
    Ok(Json(fund.into()))
}

/// Creates a single fund
pub async fn create_fund(
    State(state): State<AppState>,
    Json(request): Json<CreateFundRequest>,
) -> Result<(StatusCode, Json<FundResponse>), ApiError> {
    request.validate()?;
    let fund = state.service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(fund.into())))
}
