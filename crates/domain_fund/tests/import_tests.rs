//! Tests for CSV fund import against the in-memory store

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{DomainPort, FundId, HealthCheckResult, HealthCheckable, PortError};
use domain_fund::{
    Fund, FundColumn, FundImporter, FundQuery, FundStore, ImportError, ImportWarning,
    InMemoryFundStore, NewFund,
};

fn importer() -> (Arc<InMemoryFundStore>, FundImporter) {
    let store = Arc::new(InMemoryFundStore::new());
    let importer = FundImporter::new(store.clone());
    (store, importer)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Row handling
// ============================================================================

mod row_handling_tests {
    use super::*;

    #[tokio::test]
    async fn test_three_valid_rows_and_one_missing_strategy() {
        let (store, importer) = importer();
        let csv = "Name,Strategy,AUM (USD),Inception Date\n\
                   Alpha Partners,Long/Short Equity,\"1,000,000\",01/15/2020\n\
                   Beta Capital,Global Macro,2500000.75,2019-06-30\n\
                   Gamma Fund,,300,\n\
                   Delta Arb,Arbitrage,,\n";

        let report = importer.import(csv.as_bytes()).await.unwrap();

        assert_eq!(report.created, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.failed, 0);
        assert_eq!(store.len().await, 3);
        assert_eq!(
            report.warnings,
            vec![ImportWarning::MissingRequiredField { row: 3, field: FundColumn::Strategy }]
        );
    }

    #[tokio::test]
    async fn test_values_are_trimmed() {
        let (store, importer) = importer();
        let report = importer
            .import(b"name,strategy\n  Spaced Out Fund  ,  Global Macro \n")
            .await
            .unwrap();

        let fund = store.get(report.created_ids[0]).await.unwrap();
        assert_eq!(fund.name, "Spaced Out Fund");
        assert_eq!(fund.strategy, "Global Macro");
    }

    #[tokio::test]
    async fn test_unparsed_aum_keeps_row() {
        let (store, importer) = importer();
        let report = importer
            .import(b"Name,Strategy,AUM\nAlpha,Arbitrage,N/A\n")
            .await
            .unwrap();

        assert_eq!(report.created, 1);
        let fund = store.get(report.created_ids[0]).await.unwrap();
        assert_eq!(fund.aum, None);
        assert_eq!(
            report.warnings,
            vec![ImportWarning::UnparsedAum { row: 1, raw: "N/A".to_string() }]
        );
    }

    #[tokio::test]
    async fn test_unparsed_date_keeps_row() {
        let (store, importer) = importer();
        let report = importer
            .import(b"Name,Strategy,Inception\nAlpha,Arbitrage,garbage\n")
            .await
            .unwrap();

        let fund = store.get(report.created_ids[0]).await.unwrap();
        assert_eq!(fund.inception_date, None);
        assert!(matches!(
            report.warnings.as_slice(),
            [ImportWarning::UnparsedInceptionDate { row: 1, .. }]
        ));
    }

    #[tokio::test]
    async fn test_two_digit_year_leaves_date_empty() {
        let (store, importer) = importer();
        let report = importer
            .import(b"Name,Strategy,Inception Date\nAlpha,Arbitrage,01/15/20\n")
            .await
            .unwrap();

        assert_eq!(report.created, 1);
        let fund = store.get(report.created_ids[0]).await.unwrap();
        assert_eq!(fund.inception_date, None);
        assert_eq!(
            report.warnings,
            vec![ImportWarning::UnparsedInceptionDate { row: 1, raw: "01/15/20".to_string() }]
        );
    }

    #[tokio::test]
    async fn test_ambiguous_date_is_flagged() {
        let (store, importer) = importer();
        let report = importer
            .import(b"Name,Strategy,Inception Date\nAlpha,Arbitrage,01/02/2020\n")
            .await
            .unwrap();

        let fund = store.get(report.created_ids[0]).await.unwrap();
        assert_eq!(fund.inception_date, Some(date(2020, 1, 2)));
        match &report.warnings[..] {
            [ImportWarning::AmbiguousInceptionDate { chosen, alternative, .. }] => {
                assert_eq!(*chosen, date(2020, 1, 2));
                assert_eq!(*alternative, date(2020, 2, 1));
            }
            other => panic!("unexpected warnings: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_parses_thousands_separated_aum() {
        let (store, importer) = importer();
        let report = importer
            .import(b"Name,Strategy,AUM (USD)\nAlpha,Arbitrage,\"1,234,567.89\"\n")
            .await
            .unwrap();

        let fund = store.get(report.created_ids[0]).await.unwrap();
        assert_eq!(fund.aum, Some(dec!(1234567.89)));
    }
}

// ============================================================================
// Header handling
// ============================================================================

mod header_tests {
    use super::*;

    #[tokio::test]
    async fn test_bom_header_matches_plain_header() {
        let (store, importer) = importer();
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"Name,Strategy\nAlpha,Arbitrage\n");

        let report = importer.import(&bytes).await.unwrap();

        assert_eq!(report.created, 1);
        assert_eq!(report.columns, vec!["Name".to_string(), "Strategy".to_string()]);
        assert_eq!(store.get(report.created_ids[0]).await.unwrap().name, "Alpha");
    }

    #[tokio::test]
    async fn test_uppercase_headers() {
        let (store, importer) = importer();
        let report = importer
            .import(b"NAME,STRATEGY,AUM,Inception\nAlpha,Arbitrage,10,12-31-2015\n")
            .await
            .unwrap();

        let fund = store.get(report.created_ids[0]).await.unwrap();
        assert_eq!(fund.aum, Some(dec!(10)));
        assert_eq!(fund.inception_date, Some(date(2015, 12, 31)));
    }

    #[tokio::test]
    async fn test_unknown_headers_skip_every_row() {
        let (store, importer) = importer();
        let report = importer
            .import(b"Fund,Style\nAlpha,Arbitrage\nBeta,Global Macro\n")
            .await
            .unwrap();

        assert_eq!(report.created, 0);
        assert_eq!(report.skipped, 2);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_ragged_rows_are_tolerated() {
        let (_store, importer) = importer();
        let report = importer
            .import(b"Name,Strategy,AUM\nAlpha,Arbitrage\nBeta,Global Macro,5,extra\n")
            .await
            .unwrap();

        assert_eq!(report.created, 2);
        assert!(report.warnings.is_empty());
    }
}

// ============================================================================
// Failures
// ============================================================================

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_encoding_aborts_import() {
        let (store, importer) = importer();
        let err = importer.import(b"Name,Strategy\n\xff\xfe,Arbitrage\n").await.unwrap_err();

        assert!(matches!(err, ImportError::Encoding(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_constraint_violation_does_not_stop_batch() {
        let (store, importer) = importer();
        let csv = format!(
            "Name,Strategy\nFirst,Arbitrage\n{},Arbitrage\nThird,Global Macro\n",
            "N".repeat(201)
        );

        let report = importer.import(csv.as_bytes()).await.unwrap();

        assert_eq!(report.created, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(store.len().await, 2);
        assert!(matches!(
            report.warnings.as_slice(),
            [ImportWarning::PersistenceFailed { row: 2, .. }]
        ));
    }

    /// Store that refuses one specific fund name
    struct FlakyStore {
        inner: InMemoryFundStore,
        reject: &'static str,
    }

    impl DomainPort for FlakyStore {}

    #[async_trait]
    impl HealthCheckable for FlakyStore {
        async fn health_check(&self) -> HealthCheckResult {
            self.inner.health_check().await
        }
    }

    #[async_trait]
    impl FundStore for FlakyStore {
        async fn insert(&self, fund: NewFund) -> Result<Fund, PortError> {
            if fund.name == self.reject {
                return Err(PortError::connection("connection reset"));
            }
            self.inner.insert(fund).await
        }

        async fn get(&self, id: FundId) -> Result<Fund, PortError> {
            self.inner.get(id).await
        }

        async fn list(&self, query: &FundQuery) -> Result<Vec<Fund>, PortError> {
            self.inner.list(query).await
        }

        async fn strategies(&self) -> Result<Vec<String>, PortError> {
            self.inner.strategies().await
        }
    }

    #[tokio::test]
    async fn test_store_error_is_reported_per_row() {
        let store = Arc::new(FlakyStore {
            inner: InMemoryFundStore::new(),
            reject: "Beta",
        });
        let importer = FundImporter::new(store.clone());

        let report = importer
            .import(b"Name,Strategy\nAlpha,Arbitrage\nBeta,Arbitrage\nGamma,Arbitrage\n")
            .await
            .unwrap();

        assert_eq!(report.created, 2);
        assert_eq!(report.failed, 1);
        let names: Vec<String> = store
            .list(&FundQuery::all())
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
        match &report.warnings[..] {
            [ImportWarning::PersistenceFailed { name, message, .. }] => {
                assert_eq!(name, "Beta");
                assert!(message.contains("connection reset"));
            }
            other => panic!("unexpected warnings: {other:?}"),
        }
    }
}
