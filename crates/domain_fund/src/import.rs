//! CSV fund import
//!
//! Importing happens in two phases. [`parse_csv`] turns raw bytes into one
//! [`RowOutcome`] per data row without touching storage, and
//! [`FundImporter::import`] persists the parsed funds through a
//! [`FundStore`]. Only an undecodable file aborts the batch; every per-row
//! anomaly becomes an [`ImportWarning`] and processing moves on.

use std::sync::Arc;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, instrument, warn};

use core_kernel::FundId;

use crate::columns::{ColumnMap, FundColumn};
use crate::error::ImportError;
use crate::fund::NewFund;
use crate::parsing::{parse_aum, parse_date, DatePattern, DEFAULT_DATE_PATTERNS};
use crate::ports::FundStore;

const UTF8_BOM: char = '\u{feff}';

/// Tunables for CSV parsing
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Inception date layouts, tried in order
    pub date_patterns: Vec<DatePattern>,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            date_patterns: DEFAULT_DATE_PATTERNS.to_vec(),
            delimiter: b',',
        }
    }
}

impl ImportOptions {
    /// Replaces the date pattern order
    pub fn with_date_patterns(mut self, patterns: impl Into<Vec<DatePattern>>) -> Self {
        self.date_patterns = patterns.into();
        self
    }

    /// Sets the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// A non-fatal anomaly found while importing one row
///
/// `row` is the 1-based position of the data row, not counting the header.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportWarning {
    #[error("row {row}: skipped, missing {field}")]
    MissingRequiredField { row: usize, field: FundColumn },

    #[error("row {row}: could not parse AUM value {raw:?}")]
    UnparsedAum { row: usize, raw: String },

    #[error("row {row}: could not parse inception date {raw:?}")]
    UnparsedInceptionDate { row: usize, raw: String },

    #[error("row {row}: inception date {raw:?} read as {chosen} ({pattern}), also valid as {alternative} ({alternative_pattern})")]
    AmbiguousInceptionDate {
        row: usize,
        raw: String,
        chosen: NaiveDate,
        pattern: &'static str,
        alternative: NaiveDate,
        alternative_pattern: &'static str,
    },

    #[error("row {row}: unreadable record: {message}")]
    MalformedRecord { row: usize, message: String },

    #[error("row {row}: could not save fund {name:?}: {message}")]
    PersistenceFailed { row: usize, name: String, message: String },
}

impl ImportWarning {
    /// Data row the warning refers to
    pub fn row(&self) -> usize {
        match self {
            ImportWarning::MissingRequiredField { row, .. }
            | ImportWarning::UnparsedAum { row, .. }
            | ImportWarning::UnparsedInceptionDate { row, .. }
            | ImportWarning::AmbiguousInceptionDate { row, .. }
            | ImportWarning::MalformedRecord { row, .. }
            | ImportWarning::PersistenceFailed { row, .. } => *row,
        }
    }
}

/// Parse result for a single data row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// The row yields a fund; warnings cover optional fields left empty
    Parsed {
        row: usize,
        fund: NewFund,
        warnings: Vec<ImportWarning>,
    },
    /// The row produces no fund
    Skipped { row: usize, reason: ImportWarning },
}

impl RowOutcome {
    pub fn row(&self) -> usize {
        match self {
            RowOutcome::Parsed { row, .. } | RowOutcome::Skipped { row, .. } => *row,
        }
    }

    /// The parsed fund, if the row produced one
    pub fn fund(&self) -> Option<&NewFund> {
        match self {
            RowOutcome::Parsed { fund, .. } => Some(fund),
            RowOutcome::Skipped { .. } => None,
        }
    }
}

/// Every row of a decoded CSV file
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    /// Header row as found in the file, after BOM removal
    pub columns: Vec<String>,
    pub rows: Vec<RowOutcome>,
}

/// Decodes and parses a CSV export into fund rows
///
/// # Errors
///
/// Returns `ImportError::Encoding` if the bytes are not UTF-8 and
/// `ImportError::Header` if the header row cannot be read.
pub fn parse_csv(bytes: &[u8], options: &ImportOptions) -> Result<ParsedCsv, ImportError> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(ImportError::Header)?.clone();
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    debug!(?columns, "CSV columns found");

    let column_map = ColumnMap::from_headers(&headers);
    for column in column_map.missing() {
        if column.is_required() {
            warn!(field = %column, "CSV has no column for a required field");
        } else {
            debug!(field = %column, "CSV has no column for an optional field");
        }
    }

    let rows = reader
        .records()
        .enumerate()
        .map(|(idx, record)| {
            let row = idx + 1;
            match record {
                Ok(record) => parse_row(row, &record, &column_map, options),
                Err(e) => RowOutcome::Skipped {
                    row,
                    reason: ImportWarning::MalformedRecord {
                        row,
                        message: e.to_string(),
                    },
                },
            }
        })
        .collect();

    Ok(ParsedCsv { columns, rows })
}

fn parse_row(
    row: usize,
    record: &StringRecord,
    columns: &ColumnMap,
    options: &ImportOptions,
) -> RowOutcome {
    debug!(row, fields = ?record, "Processing row");

    let name = columns.resolve(FundColumn::Name, record).unwrap_or_default();
    let strategy = columns.resolve(FundColumn::Strategy, record).unwrap_or_default();

    let mut fund = match NewFund::new(name, strategy) {
        Ok(fund) => fund,
        Err(_) => {
            let field = if name.trim().is_empty() {
                FundColumn::Name
            } else {
                FundColumn::Strategy
            };
            return RowOutcome::Skipped {
                row,
                reason: ImportWarning::MissingRequiredField { row, field },
            };
        }
    };

    let mut warnings = Vec::new();

    if let Some(raw) = non_blank(columns.resolve(FundColumn::Aum, record)) {
        match parse_aum(raw) {
            Ok(aum) => fund = fund.with_aum(aum),
            Err(_) => warnings.push(ImportWarning::UnparsedAum {
                row,
                raw: raw.to_string(),
            }),
        }
    }

    if let Some(raw) = non_blank(columns.resolve(FundColumn::InceptionDate, record)) {
        match parse_date(raw, &options.date_patterns) {
            Some(parsed) => {
                if let Some((alt_pattern, alt_date)) = parsed.alternative {
                    warnings.push(ImportWarning::AmbiguousInceptionDate {
                        row,
                        raw: raw.trim().to_string(),
                        chosen: parsed.date,
                        pattern: parsed.pattern.label,
                        alternative: alt_date,
                        alternative_pattern: alt_pattern.label,
                    });
                }
                fund = fund.with_inception_date(parsed.date);
            }
            None => warnings.push(ImportWarning::UnparsedInceptionDate {
                row,
                raw: raw.to_string(),
            }),
        }
    }

    RowOutcome::Parsed {
        row,
        fund,
        warnings,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Summary of a finished import
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Header row as found in the file
    pub columns: Vec<String>,
    /// Rows that resulted in a persisted fund
    pub created: usize,
    /// Rows dropped before persistence (missing fields, unreadable records)
    pub skipped: usize,
    /// Rows whose fund could not be saved
    pub failed: usize,
    /// Ids of the persisted funds, in file order
    pub created_ids: Vec<FundId>,
    /// All anomalies, in file order
    pub warnings: Vec<ImportWarning>,
}

impl ImportReport {
    /// Total data rows seen
    pub fn rows(&self) -> usize {
        self.created + self.skipped + self.failed
    }

    /// User-facing summary line
    pub fn summary_message(&self) -> String {
        format!("Successfully imported {} funds!", self.created)
    }
}

/// Imports CSV exports into a fund store
#[derive(Clone)]
pub struct FundImporter {
    store: Arc<dyn FundStore>,
    options: ImportOptions,
}

impl FundImporter {
    /// Creates an importer with default options
    pub fn new(store: Arc<dyn FundStore>) -> Self {
        Self {
            store,
            options: ImportOptions::default(),
        }
    }

    /// Replaces the parsing options
    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    /// Parses `bytes` and persists every fund it yields
    ///
    /// Rows are saved one at a time in file order. A storage failure is
    /// recorded against its row and the next row is processed.
    ///
    /// # Errors
    ///
    /// Only file-level problems are returned; see [`parse_csv`].
    #[instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    pub async fn import(&self, bytes: &[u8]) -> Result<ImportReport, ImportError> {
        let parsed = parse_csv(bytes, &self.options)?;
        let mut report = ImportReport {
            columns: parsed.columns,
            ..Default::default()
        };

        for outcome in parsed.rows {
            match outcome {
                RowOutcome::Skipped { row, reason } => {
                    warn!(row, %reason, "Skipping row");
                    report.skipped += 1;
                    report.warnings.push(reason);
                }
                RowOutcome::Parsed {
                    row,
                    fund,
                    warnings,
                } => {
                    for warning in &warnings {
                        warn!(row, %warning, "Field left empty");
                    }
                    report.warnings.extend(warnings);

                    let name = fund.name.clone();
                    match self.store.insert(fund).await {
                        Ok(saved) => {
                            debug!(row, fund_id = %saved.id, name = %saved.name, "Created fund");
                            report.created += 1;
                            report.created_ids.push(saved.id);
                        }
                        Err(e) => {
                            warn!(row, name = %name, error = %e, "Error creating fund");
                            report.failed += 1;
                            report.warnings.push(ImportWarning::PersistenceFailed {
                                row,
                                name,
                                message: e.to_string(),
                            });
                        }
                    }
                }
            }
        }

        info!(
            created = report.created,
            skipped = report.skipped,
            failed = report.failed,
            warnings = report.warnings.len(),
            "CSV import finished"
        );
        Ok(report)
    }
}
