//! Display-currency conversion.
//!
//! Packages are priced in EUR; that total is the bookable amount. The
//! storefront can additionally show an approximate GBP or USD figure using
//! the fixed rates below. These rates are non-authoritative and are never
//! written back to a booking.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::pricing::round_money;

/// Currencies the storefront can display prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayCurrency {
    Eur,
    Gbp,
    Usd,
}

impl DisplayCurrency {
    pub fn code(&self) -> &'static str {
        match self {
            DisplayCurrency::Eur => "EUR",
            DisplayCurrency::Gbp => "GBP",
            DisplayCurrency::Usd => "USD",
        }
    }

    /// Approximate units of this currency per EUR.
    fn rate_from_eur(&self) -> Decimal {
        match self {
            DisplayCurrency::Eur => Decimal::ONE,
            DisplayCurrency::Gbp => dec!(0.86),
            DisplayCurrency::Usd => dec!(1.09),
        }
    }
}

/// Convert an EUR amount for display, rounded to cents.
pub fn convert_from_eur(amount_eur: Decimal, currency: DisplayCurrency) -> Decimal {
    round_money(amount_eur * currency.rate_from_eur(), 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eur_is_identity() {
        assert_eq!(convert_from_eur(dec!(1350), DisplayCurrency::Eur), dec!(1350));
    }

    #[test]
    fn test_gbp_and_usd_scaling() {
        assert_eq!(convert_from_eur(dec!(1000), DisplayCurrency::Gbp), dec!(860));
        assert_eq!(convert_from_eur(dec!(1000), DisplayCurrency::Usd), dec!(1090));
    }

    #[test]
    fn test_conversion_rounds_to_cents() {
        assert_eq!(convert_from_eur(dec!(355), DisplayCurrency::Gbp), dec!(305.30));
    }

    #[test]
    fn test_currency_codes_deserialize() {
        let currency: DisplayCurrency = serde_json::from_str(r#""GBP""#).unwrap();
        assert_eq!(currency, DisplayCurrency::Gbp);
        assert_eq!(currency.code(), "GBP");
    }
}
