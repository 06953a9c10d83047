//! Tests for the fund listing service

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::FundId;
use domain_fund::{FundError, FundService, InMemoryFundStore, NewFund};

async fn seeded_service() -> FundService {
    let service = FundService::new(Arc::new(InMemoryFundStore::new()));
    let funds = [
        ("Zeta Macro", "Global Macro", Some(dec!(2000000))),
        ("Alpha Equity", "Long/Short Equity", Some(dec!(1000000))),
        ("Merger Arb", "Arbitrage", None),
        ("Beta Equity", "Long/Short Equity", Some(dec!(250000.50))),
    ];
    for (name, strategy, aum) in funds {
        let mut fund = NewFund::new(name, strategy).unwrap();
        fund.aum = aum;
        service.create(fund).await.unwrap();
    }
    service
}

mod listing_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_all_ordered_by_name() {
        let service = seeded_service().await;
        let listing = service.list(None).await.unwrap();

        let names: Vec<&str> = listing.funds.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Equity", "Beta Equity", "Merger Arb", "Zeta Macro"]);
        assert_eq!(listing.total_count, 4);
        assert_eq!(listing.total_aum, dec!(3250000.50));
        assert_eq!(listing.selected_strategy, None);
    }

    #[tokio::test]
    async fn test_filter_by_strategy() {
        let service = seeded_service().await;
        let listing = service.list(Some("Long/Short Equity")).await.unwrap();

        assert_eq!(listing.total_count, 2);
        assert_eq!(listing.total_aum, dec!(1250000.50));
        assert!(listing.funds.iter().all(|f| f.strategy == "Long/Short Equity"));
        assert_eq!(listing.selected_strategy.as_deref(), Some("Long/Short Equity"));
    }

    #[tokio::test]
    async fn test_filter_with_no_matches_sums_to_zero() {
        let service = seeded_service().await;
        let listing = service.list(Some("Distressed Debt")).await.unwrap();

        assert!(listing.funds.is_empty());
        assert_eq!(listing.total_count, 0);
        assert_eq!(listing.total_aum, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_all_null_aum_sums_to_zero() {
        let service = seeded_service().await;
        let listing = service.list(Some("Arbitrage")).await.unwrap();

        assert_eq!(listing.total_count, 1);
        assert_eq!(listing.total_aum, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_strategies_are_distinct_and_sorted() {
        let service = seeded_service().await;
        let listing = service.list(Some("Arbitrage")).await.unwrap();

        assert_eq!(
            listing.strategies,
            vec!["Arbitrage", "Global Macro", "Long/Short Equity"]
        );
    }

    #[tokio::test]
    async fn test_empty_filter_lists_everything() {
        let service = seeded_service().await;
        let listing = service.list(Some("")).await.unwrap();
        assert_eq!(listing.total_count, 4);
        assert_eq!(listing.selected_strategy, None);
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let service = FundService::new(Arc::new(InMemoryFundStore::new()));
        let listing = service.list(None).await.unwrap();

        assert!(listing.funds.is_empty());
        assert!(listing.strategies.is_empty());
        assert_eq!(listing.total_aum, Decimal::ZERO);
    }
}

mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_existing_fund() {
        let service = seeded_service().await;
        let fund = service.get(FundId::new(1)).await.unwrap();
        assert_eq!(fund.name, "Zeta Macro");
    }

    #[tokio::test]
    async fn test_get_missing_fund_is_not_found() {
        let service = seeded_service().await;
        let err = service.get(FundId::new(404)).await.unwrap_err();
        assert!(matches!(err, FundError::FundNotFound(id) if id == FundId::new(404)));
    }
}

mod creation_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_trims_and_stores() {
        let service = FundService::new(Arc::new(InMemoryFundStore::new()));
        let request = NewFund {
            name: "  Harbor Fund ".to_string(),
            strategy: "Arbitrage ".to_string(),
            aum: Some(dec!(10.999)),
            inception_date: NaiveDate::from_ymd_opt(2021, 5, 1),
        };

        let fund = service.create(request).await.unwrap();

        assert_eq!(fund.name, "Harbor Fund");
        assert_eq!(fund.strategy, "Arbitrage");
        assert_eq!(fund.aum, Some(dec!(11.00)));
        assert!(fund.has_standard_strategy());
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let service = FundService::new(Arc::new(InMemoryFundStore::new()));
        let request = NewFund {
            name: "   ".to_string(),
            strategy: "Arbitrage".to_string(),
            aum: None,
            inception_date: None,
        };

        let err = service.create(request).await.unwrap_err();
        assert!(matches!(err, FundError::MissingField("name")));
    }

    #[tokio::test]
    async fn test_create_rejects_oversized_aum() {
        let service = FundService::new(Arc::new(InMemoryFundStore::new()));
        let request = NewFund::new("Whale", "Global Macro").unwrap().with_aum(dec!(10000000000000));

        let err = service.create(request).await.unwrap_err();
        assert_eq!(err.field(), Some("aum"));
    }
}

mod import_through_service_tests {
    use super::*;

    #[tokio::test]
    async fn test_imported_funds_appear_in_listing() {
        let service = FundService::new(Arc::new(InMemoryFundStore::new()));
        let report = service
            .import_csv(b"Name,Strategy,AUM\nOne,Arbitrage,100\nTwo,Arbitrage,200\n")
            .await
            .unwrap();
        assert_eq!(report.created, 2);

        let listing = service.list(Some("Arbitrage")).await.unwrap();
        assert_eq!(listing.total_aum, dec!(300));
    }
}
