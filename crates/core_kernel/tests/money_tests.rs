//! Tests for money parsing and arithmetic

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Listing, Money, MoneyError};

// ============================================================================
// Currency Tests
// ============================================================================

mod currency_tests {
    use super::*;

    #[test]
    fn test_currency_parse_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!(" Eur ".parse::<Currency>().unwrap(), Currency::EUR);
    }

    #[test]
    fn test_currency_parse_unknown() {
        let err = "XYZ".parse::<Currency>().unwrap_err();
        assert_eq!(err, MoneyError::UnknownCurrency("XYZ".to_string()));
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }
}

// ============================================================================
// Money Tests
// ============================================================================

mod money_tests {
    use super::*;

    #[test]
    fn test_parse_premium() {
        let premium = Money::parse_non_negative("500.0", Currency::USD).unwrap();
        assert_eq!(premium.amount(), dec!(500));
        assert_eq!(premium.currency(), Currency::USD);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let premium = Money::parse_non_negative("  250.50\n", Currency::USD).unwrap();
        assert_eq!(premium.amount(), dec!(250.50));
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = Money::parse_non_negative("-1", Currency::USD).unwrap_err();
        assert!(matches!(err, MoneyError::InvalidAmount(_)));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(Money::parse_non_negative("", Currency::USD).is_err());
    }

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100), Currency::USD);
        let b = Money::new(dec!(50.25), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.25));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100), Currency::USD);
        let b = Money::new(dec!(100), Currency::EUR);
        assert!(matches!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_multiply() {
        let premium = Money::new(dec!(1000), Currency::USD);
        assert_eq!(premium.multiply(dec!(0.05)).unwrap().amount(), dec!(50));
    }

    #[test]
    fn test_multiply_overflow_is_an_error() {
        let premium = Money::new(dec!(500), Currency::USD);
        assert!(matches!(
            premium.multiply(Decimal::MAX),
            Err(MoneyError::Overflow(_))
        ));
    }

    #[test]
    fn test_checked_add_overflow_is_an_error() {
        let max = Money::new(Decimal::MAX, Currency::USD);
        let one = Money::new(dec!(1), Currency::USD);
        assert!(matches!(max.checked_add(&one), Err(MoneyError::Overflow(_))));
    }

    #[test]
    fn test_zero() {
        let zero = Money::zero(Currency::GBP);
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_serde_round_trip() {
        let money = Money::new(dec!(42.10), Currency::CAD);
        let json = serde_json::to_string(&money).unwrap();
        assert!(json.contains("CAD"));
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
    }
}

// ============================================================================
// Listing Tests
// ============================================================================

mod listing_tests {
    use super::*;

    #[test]
    fn test_from_vec_empty() {
        let listing: Listing<&str> = Listing::from_vec(vec![]);
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
    }

    #[test]
    fn test_into_items() {
        let listing = Listing::from_vec(vec!["P1", "P2"]);
        assert_eq!(listing.into_items(), vec!["P1", "P2"]);
    }

    #[test]
    fn test_listing_serializes_with_outcome_tag() {
        let empty: Listing<u8> = Listing::Empty;
        assert_eq!(
            serde_json::to_string(&empty).unwrap(),
            r#"{"outcome":"empty"}"#
        );
    }
}
