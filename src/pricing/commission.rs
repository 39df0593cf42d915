//! Agent commission view over a resolved price.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::calculators::round_money;
use super::models::ResolvedPrice;

/// Commission breakdown shown in the agent portal. Purely derived; the
/// underlying total is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommissionView {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub commission_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub commission_amount: Decimal,
}

/// Commission owed to an agent on a resolved total.
///
/// `rate` is a percentage from the agent record and is expected to be
/// non-negative; agent records are validated where they are loaded, not
/// here.
pub fn commission(resolved: &ResolvedPrice, rate: Decimal) -> CommissionView {
    CommissionView {
        total_price: resolved.total_price,
        commission_rate: rate,
        commission_amount: round_money(resolved.total_price * rate / dec!(100), 2),
    }
}
