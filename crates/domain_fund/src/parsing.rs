//! Value parsers for imported fund fields
//!
//! Inception dates are tried against an ordered list of patterns and the
//! first one that parses wins. The order is part of the import contract:
//! `01/02/2020` always reads as January 2 because month/day/year is tried
//! before day/month/year. Callers get the competing reading back so the
//! ambiguity can be reported instead of silently resolved.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A named `strftime`-style date layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePattern {
    pub label: &'static str,
    pub format: &'static str,
}

impl DatePattern {
    pub const fn new(label: &'static str, format: &'static str) -> Self {
        Self { label, format }
    }

    /// Parses the whole input with this layout
    ///
    /// The year must be written with exactly four digits; `01/15/20` is
    /// rejected rather than read as the year 20.
    pub fn parse(&self, input: &str) -> Option<NaiveDate> {
        if !self.has_four_digit_year(input) {
            return None;
        }
        NaiveDate::parse_from_str(input, self.format).ok()
    }

    fn has_four_digit_year(&self, input: &str) -> bool {
        let mut parts = input.split(['/', '-']);
        let year = if self.format.starts_with("%Y") {
            parts.next()
        } else {
            parts.last()
        };
        year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
    }
}

pub const MONTH_DAY_YEAR_SLASH: DatePattern = DatePattern::new("month/day/year", "%m/%d/%Y");
pub const MONTH_DAY_YEAR_DASH: DatePattern = DatePattern::new("month-day-year", "%m-%d-%Y");
pub const YEAR_MONTH_DAY_DASH: DatePattern = DatePattern::new("year-month-day", "%Y-%m-%d");
pub const DAY_MONTH_YEAR_SLASH: DatePattern = DatePattern::new("day/month/year", "%d/%m/%Y");

/// Inception date patterns, in the order they are tried
pub const DEFAULT_DATE_PATTERNS: [DatePattern; 4] = [
    MONTH_DAY_YEAR_SLASH,
    MONTH_DAY_YEAR_DASH,
    YEAR_MONTH_DAY_DASH,
    DAY_MONTH_YEAR_SLASH,
];

/// Outcome of a successful date parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMatch {
    /// The accepted date
    pub date: NaiveDate,
    /// Pattern that produced it
    pub pattern: DatePattern,
    /// A later pattern that also parses the input to a different date
    pub alternative: Option<(DatePattern, NaiveDate)>,
}

impl DateMatch {
    pub fn is_ambiguous(&self) -> bool {
        self.alternative.is_some()
    }
}

/// Parses an inception date against `patterns` in order
///
/// Surrounding whitespace is ignored. Returns `None` when no pattern matches.
pub fn parse_date(raw: &str, patterns: &[DatePattern]) -> Option<DateMatch> {
    let input = raw.trim();
    let (idx, pattern, date) = patterns
        .iter()
        .enumerate()
        .find_map(|(idx, pattern)| pattern.parse(input).map(|date| (idx, *pattern, date)))?;

    let alternative = patterns[idx + 1..]
        .iter()
        .find_map(|later| later.parse(input).filter(|other| *other != date).map(|other| (*later, other)));

    Some(DateMatch {
        date,
        pattern,
        alternative,
    })
}

/// Parses an AUM cell such as `1,234,567.89`
///
/// Thousands-separator commas are dropped before parsing. Surrounding
/// whitespace is ignored.
pub fn parse_aum(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned)
}
