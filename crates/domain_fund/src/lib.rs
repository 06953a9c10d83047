//! Fund Registry Domain
//!
//! This crate holds the fund record model and the operations performed on
//! it: bulk import from CSV exports, filtered listings with AUM totals, and
//! single-fund lookup and creation.
//!
//! # Key Concepts
//!
//! - **Fund**: a named investment vehicle with a strategy label, optional
//!   assets under management (AUM) and optional inception date
//! - **FundStore**: the storage port; the importer and service never talk
//!   to a database directly
//! - **Import warnings**: per-row anomalies collected instead of aborting
//!
//! # Import Rules
//!
//! - Rows need a non-blank name and strategy, otherwise they are skipped
//! - AUM accepts thousands separators: `1,234,567.89`
//! - Inception dates try month/day/year, month-day-year, year-month-day,
//!   then day/month/year; the first match wins

pub mod fund;
pub mod columns;
pub mod parsing;
pub mod import;
pub mod ports;
pub mod service;
pub mod adapters;
pub mod error;

pub use fund::{Fund, NewFund, STANDARD_STRATEGIES};
pub use columns::{ColumnMap, FundColumn};
pub use parsing::{DatePattern, DateMatch, DEFAULT_DATE_PATTERNS};
pub use import::{
    FundImporter, ImportOptions, ImportReport, ImportWarning, ParsedCsv, RowOutcome, parse_csv,
};
pub use ports::{FundQuery, FundStore};
pub use service::{FundListing, FundService};
pub use adapters::InMemoryFundStore;
pub use error::{FundError, ImportError};
