//! Pre-built Test Fixtures
//!
//! Canned CSV exports and fund records. Counts and totals are exposed as
//! constants so tests can assert against them without recomputing.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_fund::NewFund;

use crate::builders::NewFundBuilder;

/// Four valid funds across the three standard strategies
pub const SAMPLE_CSV: &str = "\
Name,Strategy,AUM (USD),Inception Date
Zeta Macro,Global Macro,\"2,000,000\",01/15/2020
Alpha Equity,Long/Short Equity,1000000,2019-06-30
Beta Equity,Long/Short Equity,250000.50,
Merger Arb,Arbitrage,,
";

pub const SAMPLE_CSV_FUND_COUNT: usize = 4;

pub const SAMPLE_CSV_TOTAL_AUM: Decimal = dec!(3250000.50);

/// Same headers in a different spelling, plus one row without a strategy
pub const ALIASED_HEADERS_CSV: &str = "\
name,STRATEGY,aum,inception_date
Harbor Credit,Arbitrage,\"12,500.25\",03-04-2021
Orphan Fund,,100,
";

/// Mixed-quality rows: one valid, one ambiguous date, one unparseable AUM,
/// one missing name
pub const MESSY_CSV: &str = "\
Name,Strategy,AUM,Inception
Clean Fund,Global Macro,500,2018-07-09
Ambiguous Fund,Arbitrage,600,01/02/2020
Unknown Size Fund,Arbitrage,N/A,05/05/2020
,Arbitrage,700,
";

/// `SAMPLE_CSV` prefixed with a UTF-8 byte-order mark, as spreadsheet
/// exports often are
pub fn sample_csv_with_bom() -> Vec<u8> {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(SAMPLE_CSV.as_bytes());
    bytes
}

/// Bytes that are not valid UTF-8
pub fn invalid_utf8_csv() -> Vec<u8> {
    b"Name,Strategy\n\xff\xfe,Arbitrage\n".to_vec()
}

/// The funds `SAMPLE_CSV` describes, as creation requests
pub static SAMPLE_FUNDS: Lazy<Vec<NewFund>> = Lazy::new(|| {
    vec![
        NewFundBuilder::new()
            .with_name("Zeta Macro")
            .with_strategy("Global Macro")
            .with_aum(dec!(2000000))
            .with_inception_date(2020, 1, 15)
            .build(),
        NewFundBuilder::new()
            .with_name("Alpha Equity")
            .with_strategy("Long/Short Equity")
            .with_aum(dec!(1000000))
            .with_inception_date(2019, 6, 30)
            .build(),
        NewFundBuilder::new()
            .with_name("Beta Equity")
            .with_strategy("Long/Short Equity")
            .with_aum(dec!(250000.50))
            .without_inception_date()
            .build(),
        NewFundBuilder::new()
            .with_name("Merger Arb")
            .with_strategy("Arbitrage")
            .without_aum()
            .without_inception_date()
            .build(),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_funds_match_constants() {
        assert_eq!(SAMPLE_FUNDS.len(), SAMPLE_CSV_FUND_COUNT);
        let total: Decimal = SAMPLE_FUNDS.iter().filter_map(|f| f.aum).sum();
        assert_eq!(total, SAMPLE_CSV_TOTAL_AUM);
    }

    #[test]
    fn test_bom_prefix() {
        assert!(sample_csv_with_bom().starts_with(&[0xEF, 0xBB, 0xBF]));
        assert!(std::str::from_utf8(&invalid_utf8_csv()).is_err());
    }
}
