//! CSV header normalization
//!
//! Fund exports arrive with several spellings of the same column. Each
//! logical field lists its accepted headers in priority order; for a given
//! row the first alias holding a non-empty value wins.

use std::collections::HashMap;
use std::fmt;

use csv::StringRecord;

/// Logical fund fields read from a CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundColumn {
    Name,
    Strategy,
    Aum,
    InceptionDate,
}

impl FundColumn {
    pub const ALL: [FundColumn; 4] = [
        FundColumn::Name,
        FundColumn::Strategy,
        FundColumn::Aum,
        FundColumn::InceptionDate,
    ];

    /// Accepted header spellings, highest priority first
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            FundColumn::Name => &["Name", "\u{feff}Name", "name", "NAME"],
            FundColumn::Strategy => &["Strategy", "strategy", "STRATEGY"],
            FundColumn::Aum => &["AUM (USD)", "aum", "AUM"],
            FundColumn::InceptionDate => &["Inception Date", "inception_date", "Inception"],
        }
    }

    /// Field name used in diagnostics
    pub fn field_name(&self) -> &'static str {
        match self {
            FundColumn::Name => "name",
            FundColumn::Strategy => "strategy",
            FundColumn::Aum => "aum",
            FundColumn::InceptionDate => "inception_date",
        }
    }

    /// Whether a row without this field is skipped
    pub fn is_required(&self) -> bool {
        matches!(self, FundColumn::Name | FundColumn::Strategy)
    }
}

impl fmt::Display for FundColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Positions of every recognized header, per logical field
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    positions: HashMap<FundColumn, Vec<usize>>,
}

impl ColumnMap {
    /// Builds the map from a header record
    ///
    /// When a header appears twice the later column is used.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut by_header: HashMap<&str, usize> = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            by_header.insert(header, idx);
        }

        let positions = FundColumn::ALL
            .iter()
            .map(|column| {
                let found = column
                    .aliases()
                    .iter()
                    .filter_map(|alias| by_header.get(alias).copied())
                    .collect();
                (*column, found)
            })
            .collect();

        Self { positions }
    }

    /// Whether any accepted header for the field is present
    pub fn has(&self, column: FundColumn) -> bool {
        self.positions.get(&column).is_some_and(|found| !found.is_empty())
    }

    /// Fields with no recognized header at all
    pub fn missing(&self) -> Vec<FundColumn> {
        FundColumn::ALL
            .iter()
            .copied()
            .filter(|column| !self.has(*column))
            .collect()
    }

    /// Raw value of a field in a record, untrimmed
    ///
    /// Returns the first alias whose cell is non-empty. Short records simply
    /// lack the trailing cells.
    pub fn resolve<'r>(&self, column: FundColumn, record: &'r StringRecord) -> Option<&'r str> {
        self.positions
            .get(&column)?
            .iter()
            .filter_map(|idx| record.get(*idx))
            .find(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_resolves_lowercase_variants() {
        let map = ColumnMap::from_headers(&headers(&["name", "strategy", "aum", "inception_date"]));
        let row = StringRecord::from(vec!["Alpha", "Arbitrage", "100", "2020-01-01"]);

        assert_eq!(map.resolve(FundColumn::Name, &row), Some("Alpha"));
        assert_eq!(map.resolve(FundColumn::Aum, &row), Some("100"));
        assert!(map.missing().is_empty());
    }

    #[test]
    fn test_bom_prefixed_name_header() {
        let map = ColumnMap::from_headers(&headers(&["\u{feff}Name", "Strategy"]));
        let row = StringRecord::from(vec!["Alpha", "Arbitrage"]);
        assert_eq!(map.resolve(FundColumn::Name, &row), Some("Alpha"));
    }

    #[test]
    fn test_falls_through_empty_alias() {
        let map = ColumnMap::from_headers(&headers(&["Name", "NAME", "Strategy"]));
        let row = StringRecord::from(vec!["", "Beta", "Global Macro"]);
        assert_eq!(map.resolve(FundColumn::Name, &row), Some("Beta"));
    }

    #[test]
    fn test_short_record_yields_none() {
        let map = ColumnMap::from_headers(&headers(&["Name", "Strategy", "AUM"]));
        let row = StringRecord::from(vec!["Alpha", "Arbitrage"]);
        assert_eq!(map.resolve(FundColumn::Aum, &row), None);
    }

    #[test]
    fn test_duplicate_header_uses_last_column() {
        let map = ColumnMap::from_headers(&headers(&["Name", "Strategy", "Name"]));
        let row = StringRecord::from(vec!["First", "Arbitrage", "Second"]);
        assert_eq!(map.resolve(FundColumn::Name, &row), Some("Second"));
    }

    #[test]
    fn test_missing_columns_reported() {
        let map = ColumnMap::from_headers(&headers(&["Fund", "Strategy"]));
        assert_eq!(
            map.missing(),
            vec![FundColumn::Name, FundColumn::Aum, FundColumn::InceptionDate]
        );
    }
}
