//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no state. The resolver builds
//! on these; nothing here touches a pricing document directly.

use std::collections::BTreeMap;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pricing::models::{RoomOccupancy, RoomRates};

/// Surcharge multiplier applied to the double rate when a room is occupied
/// alone and the document carries no authored single supplement.
///
/// The multiplier value is inherited pricing policy, pending business
/// confirmation; change it here and nowhere else.
pub const SINGLE_OCCUPANCY_FACTOR: Decimal = dec!(1.5);

/// Share of the double per-person rate charged for a child when the party
/// arrives as flat traveler counts (agent and land-only flows).
///
/// Same status as [`SINGLE_OCCUPANCY_FACTOR`]: inherited policy, single
/// source of truth.
pub const CHILD_RATE_FACTOR: Decimal = dec!(0.5);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use atlas_tours_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Pick the authored group-size tier for a party.
///
/// The smallest tier that seats the whole party wins; no tier below the
/// authored minimum is synthesized. A party larger than the largest
/// authored tier gets the largest tier's value: sellers stop authoring
/// tiers at their best group discount, so the top tier is a plateau, not a
/// gap. Returns `None` only for an empty tier map.
pub fn select_tier<T>(tiers: &BTreeMap<u32, T>, total_pax: u32) -> Option<&T> {
    tiers
        .range(total_pax..)
        .next()
        .or_else(|| tiers.iter().next_back())
        .map(|(_, value)| value)
}

/// Per-person rate for a room at the given occupancy.
///
/// A missing single rate falls back to the double rate times
/// [`SINGLE_OCCUPANCY_FACTOR`]; a missing triple rate falls back to the
/// double rate unchanged, with no surcharge. The asymmetry is deliberate.
/// `None` means the document cannot price this room at all.
pub fn occupancy_rate(rates: &RoomRates, occupancy: RoomOccupancy) -> Option<Decimal> {
    match occupancy {
        RoomOccupancy::Single => rates
            .single
            .or_else(|| rates.double.map(|d| d * SINGLE_OCCUPANCY_FACTOR)),
        RoomOccupancy::Double => rates.double,
        RoomOccupancy::Triple => rates.triple.or(rates.double),
    }
}

/// Per-person rate for a child priced off the double rate.
pub fn child_rate(double_rate: Decimal) -> Decimal {
    double_rate * CHILD_RATE_FACTOR
}

/// Display per-person price: unrounded total divided by party size, rounded
/// on its own. Guards the empty party; never `NaN`, never infinity.
pub fn per_person_display(unrounded_total: Decimal, total_pax: u32) -> Decimal {
    if total_pax == 0 {
        return Decimal::ZERO;
    }
    round_money(unrounded_total / Decimal::from(total_pax), 2)
}
