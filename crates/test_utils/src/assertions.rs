//! Custom Test Assertions
//!
//! Helpers with failure messages that show the offending funds.

use rust_decimal::Decimal;

use domain_fund::{Fund, FundListing, ImportReport};

/// Asserts funds are ordered by name, then id
pub fn assert_sorted_by_name(funds: &[Fund]) {
    for pair in funds.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            (a.name.as_str(), a.id.value()) <= (b.name.as_str(), b.id.value()),
            "Funds out of order: {:?} ({}) before {:?} ({})",
            a.name,
            a.id,
            b.name,
            b.id
        );
    }
}

/// Asserts every fund has the given strategy
pub fn assert_all_strategy(funds: &[Fund], strategy: &str) {
    if let Some(other) = funds.iter().find(|f| f.strategy != strategy) {
        panic!(
            "Expected only {:?} funds, found {:?} with strategy {:?}",
            strategy, other.name, other.strategy
        );
    }
}

/// Asserts the listing's summary figures agree with its funds
pub fn assert_listing_consistent(listing: &FundListing) {
    assert_eq!(
        listing.total_count,
        listing.funds.len(),
        "total_count does not match the number of funds"
    );
    let expected: Decimal = listing.funds.iter().filter_map(|f| f.aum).sum();
    assert_eq!(listing.total_aum, expected, "total_aum does not match the funds' AUM");
    assert_sorted_by_name(&listing.funds);
    if let Some(strategy) = &listing.selected_strategy {
        assert_all_strategy(&listing.funds, strategy);
    }
}

/// Asserts an import's counts
pub fn assert_import_counts(report: &ImportReport, created: usize, skipped: usize, failed: usize) {
    assert_eq!(
        (report.created, report.skipped, report.failed),
        (created, skipped, failed),
        "Unexpected (created, skipped, failed); warnings: {:#?}",
        report.warnings
    );
}
