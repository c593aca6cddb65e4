// ═══════════════════════════════════════════════════════════════════
// Provider Tests — CoinGecko URLs and response parsing
// ═══════════════════════════════════════════════════════════════════

use std::time::Duration;

use cryptopulse_core::errors::CoreError;
use cryptopulse_core::models::coin::{Coin, RangeDays};
use cryptopulse_core::models::settings::Settings;
use cryptopulse_core::providers::coingecko::{
    parse_market_chart, parse_spot_prices, CoinGeckoProvider,
};
use cryptopulse_core::providers::traits::MarketDataProvider;

const SPOT_BODY: &str = r#"{
    "bitcoin": { "usd": 43123.4, "usd_24h_change": -2.345 },
    "ethereum": { "usd": 2301.77, "usd_24h_change": 0.0 },
    "dogecoin": { "usd": 0.0712, "usd_24h_change": 5.1 }
}"#;

/// Seven days of daily prices plus the latest one, as CoinGecko returns them.
const HISTORY_7D_BODY: &str = r#"{
    "prices": [
        [1736294400000, 95000.1],
        [1736380800000, 94500.2],
        [1736467200000, 92800.0],
        [1736553600000, 94700.5],
        [1736640000000, 94600.0],
        [1736726400000, 94400.9],
        [1736812800000, 96500.3],
        [1736854512345, 97001.0]
    ],
    "market_caps": [],
    "total_volumes": []
}"#;

// ═══════════════════════════════════════════════════════════════════
// CoinGeckoProvider — construction and URLs
// ═══════════════════════════════════════════════════════════════════

mod urls {
    use super::*;

    #[test]
    fn default_uses_public_api() {
        let provider = CoinGeckoProvider::default();
        assert_eq!(provider.base_url(), "https://api.coingecko.com/api/v3");
        assert_eq!(provider.name(), "CoinGecko");
    }

    #[test]
    fn trailing_slash_trimmed() {
        let provider = CoinGeckoProvider::new("http://localhost:1234/api/", Duration::from_secs(1));
        assert_eq!(provider.base_url(), "http://localhost:1234/api");
    }

    #[test]
    fn from_settings_uses_base_url() {
        let settings = Settings {
            api_base_url: "http://127.0.0.1:9999".into(),
            ..Settings::default()
        };
        let provider = CoinGeckoProvider::from_settings(&settings);
        assert_eq!(provider.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn spot_prices_url() {
        let provider = CoinGeckoProvider::default();
        assert_eq!(
            provider.spot_prices_url(&Coin::ALL),
            "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin,ethereum,dogecoin&vs_currencies=usd&include_24hr_change=true"
        );
    }

    #[test]
    fn history_url() {
        let provider = CoinGeckoProvider::default();
        assert_eq!(
            provider.history_url(Coin::Ethereum, RangeDays::Thirty),
            "https://api.coingecko.com/api/v3/coins/ethereum/market_chart?vs_currency=usd&days=30&interval=daily"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// parse_spot_prices
// ═══════════════════════════════════════════════════════════════════

mod spot_prices {
    use super::*;

    #[test]
    fn parses_all_coins() {
        let snapshot = parse_spot_prices(SPOT_BODY, &Coin::ALL).unwrap();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[&Coin::Bitcoin].price, 43123.4);
        assert_eq!(snapshot[&Coin::Bitcoin].change_24h, -2.345);
        assert_eq!(snapshot[&Coin::Ethereum].change_24h, 0.0);
        assert_eq!(snapshot[&Coin::Dogecoin].price, 0.0712);
    }

    #[test]
    fn only_requested_coins_are_kept() {
        let snapshot = parse_spot_prices(SPOT_BODY, &[Coin::Ethereum]).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains_key(&Coin::Ethereum));
    }

    #[test]
    fn integer_prices_accepted() {
        let body = r#"{"bitcoin": {"usd": 43000, "usd_24h_change": 1}}"#;
        let snapshot = parse_spot_prices(body, &[Coin::Bitcoin]).unwrap();
        assert_eq!(snapshot[&Coin::Bitcoin].price, 43000.0);
    }

    #[test]
    fn missing_coin_is_malformed() {
        let body = r#"{"bitcoin": {"usd": 1.0, "usd_24h_change": 1.0}}"#;
        let err = parse_spot_prices(body, &Coin::ALL).unwrap_err();
        match err {
            CoreError::MalformedResponse { provider, message } => {
                assert_eq!(provider, "CoinGecko");
                assert!(message.contains("ethereum"), "{message}");
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn missing_usd_is_malformed() {
        let body = r#"{"bitcoin": {"usd_24h_change": 1.0}}"#;
        assert!(matches!(
            parse_spot_prices(body, &[Coin::Bitcoin]),
            Err(CoreError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn missing_change_is_malformed() {
        let body = r#"{"bitcoin": {"usd": 1.0}}"#;
        let err = parse_spot_prices(body, &[Coin::Bitcoin]).unwrap_err();
        assert!(err.to_string().contains("usd_24h_change"));
    }

    #[test]
    fn null_change_is_malformed() {
        let body = r#"{"bitcoin": {"usd": 1.0, "usd_24h_change": null}}"#;
        assert!(matches!(
            parse_spot_prices(body, &[Coin::Bitcoin]),
            Err(CoreError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn not_json_is_malformed() {
        assert!(matches!(
            parse_spot_prices("<html>rate limited</html>", &Coin::ALL),
            Err(CoreError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        assert!(matches!(
            parse_spot_prices("[1, 2, 3]", &Coin::ALL),
            Err(CoreError::MalformedResponse { .. })
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
// parse_market_chart
// ═══════════════════════════════════════════════════════════════════

mod market_chart {
    use super::*;

    #[test]
    fn seven_day_daily_window() {
        let series = parse_market_chart(HISTORY_7D_BODY, Coin::Bitcoin, RangeDays::Seven).unwrap();
        assert_eq!(series.coin, Coin::Bitcoin);
        assert_eq!(series.range, RangeDays::Seven);
        assert_eq!(series.len(), RangeDays::Seven.expected_daily_points());
        assert!(series.is_strictly_increasing());
    }

    #[test]
    fn timestamps_are_milliseconds() {
        let series = parse_market_chart(HISTORY_7D_BODY, Coin::Bitcoin, RangeDays::Seven).unwrap();
        assert_eq!(series.points[0].timestamp.timestamp_millis(), 1736294400000);
        assert_eq!(series.points[0].price, 95000.1);
        assert_eq!(series.points[7].timestamp.timestamp_millis(), 1736854512345);
    }

    #[test]
    fn unordered_input_is_sorted() {
        let body = r#"{"prices": [[3000, 3.0], [1000, 1.0], [2000, 2.0]]}"#;
        let series = parse_market_chart(body, Coin::Dogecoin, RangeDays::One).unwrap();
        let prices: Vec<f64> = series.points.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_prices_gives_empty_series() {
        let series = parse_market_chart(r#"{"prices": []}"#, Coin::Bitcoin, RangeDays::One).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn missing_prices_is_malformed() {
        let body = r#"{"error": "coin not found"}"#;
        let err = parse_market_chart(body, Coin::Bitcoin, RangeDays::Seven).unwrap_err();
        match err {
            CoreError::MalformedResponse { provider, message } => {
                assert_eq!(provider, "CoinGecko");
                assert!(message.contains("bitcoin"), "{message}");
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn short_pair_is_malformed() {
        let body = r#"{"prices": [[1000]]}"#;
        assert!(matches!(
            parse_market_chart(body, Coin::Bitcoin, RangeDays::Seven),
            Err(CoreError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn out_of_range_timestamp_is_malformed() {
        let body = r#"{"prices": [[1e300, 1.0]]}"#;
        assert!(matches!(
            parse_market_chart(body, Coin::Bitcoin, RangeDays::Seven),
            Err(CoreError::MalformedResponse { .. })
        ));
    }
}
