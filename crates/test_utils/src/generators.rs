//! Test Data Generators
//!
//! Proptest strategies for fund fields that respect the storage
//! constraints, plus `fake`-backed helpers for realistic-looking records.

use chrono::{Duration, NaiveDate};
use fake::faker::company::en::CompanyName;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_fund::{NewFund, STANDARD_STRATEGIES};

/// Strategy for fund names that fit the 200-character limit
pub fn fund_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9 &.-]{0,60}[A-Za-z0-9]".prop_map(|s| s.trim().to_string())
}

/// Strategy for one of the standard strategy labels
pub fn standard_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(STANDARD_STRATEGIES.to_vec()).prop_map(str::to_string)
}

/// Strategy for AUM values with cent precision, within the storable range
pub fn aum_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for inception dates between 1900 and roughly 2064
pub fn inception_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..60_000i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid epoch") + Duration::days(days)
    })
}

/// Strategy for valid fund creation requests
pub fn new_fund_strategy() -> impl Strategy<Value = NewFund> {
    (
        fund_name_strategy(),
        standard_strategy(),
        proptest::option::of(aum_strategy()),
        proptest::option::of(inception_date_strategy()),
    )
        .prop_map(|(name, strategy, aum, inception_date)| NewFund {
            name,
            strategy,
            aum,
            inception_date,
        })
}

/// A fund with a fake company name and a random standard strategy
pub fn fake_fund() -> NewFund {
    let name: String = CompanyName().fake();
    let strategy = STANDARD_STRATEGIES[(0..STANDARD_STRATEGIES.len()).fake::<usize>()];
    let cents: i64 = (100_000i64..10_000_000_000i64).fake();
    NewFund {
        name: format!("{name} Fund"),
        strategy: strategy.to_string(),
        aum: Some(Decimal::new(cents, 2)),
        inception_date: None,
    }
}

/// Renders funds as a CSV export with the canonical headers
pub fn funds_to_csv(funds: &[NewFund]) -> String {
    let mut out = String::from("Name,Strategy,AUM (USD),Inception Date\n");
    for fund in funds {
        let aum = fund.aum.map(|a| a.to_string()).unwrap_or_default();
        let date = fund
            .inception_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{}\n",
            quote(&fund.name),
            quote(&fund.strategy),
            aum,
            date
        ));
    }
    out
}

fn quote(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
