//! Price resolution over raw pricing documents.
//!
//! Takes the document as authored on the package record, the schema kind
//! from [`classify`](crate::pricing::schema::classify), a party
//! configuration and a hotel category, and produces a [`PriceQuote`].
//! Resolution never fails and never panics: any gap in the document comes
//! back as an unavailable quote, and a quote is all-or-nothing: no total
//! ever mixes real and missing rates.
//!
//! Documents are probed as `serde_json::Value`; numeric fields tolerate
//! both JSON numbers and numeric strings, since both occur in extracted
//! and hand-entered data.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde_json::Value;

use super::calculators::{child_rate, occupancy_rate, per_person_display, round_money, select_tier};
use super::models::{
    HotelCategory, PartyConfiguration, PriceQuote, ResolvedPrice, RoomOccupancy, RoomRates,
    UnavailableReason,
};
use super::schema::SchemaKind;

/// Resolve a price for one party configuration against one document.
///
/// `kind` must come from `classify` on the same document; callers never
/// re-detect schema themselves. Pure and stateless: identical inputs give
/// identical output.
pub fn resolve(
    doc: &Value,
    kind: SchemaKind,
    party: &PartyConfiguration,
    category: HotelCategory,
) -> PriceQuote {
    let total_pax = party.total_pax();
    if total_pax == 0 {
        return PriceQuote::unavailable(UnavailableReason::EmptyParty);
    }

    match kind {
        SchemaKind::PaxTier => resolve_pax_tier(doc, party, category, total_pax),
        SchemaKind::FlatHotelCategory => {
            let rates = match doc.get(category.as_key()) {
                Some(value) => room_rates(value),
                None => return PriceQuote::unavailable(UnavailableReason::MissingRate),
            };
            price_rooms(rates, party, total_pax)
        }
        SchemaKind::GroupSizeFlat => resolve_group_size_flat(doc, party, total_pax),
        SchemaKind::ShoreExcursionTiered => resolve_shore_excursion(doc, party, total_pax),
        SchemaKind::Unknown => PriceQuote::unavailable(UnavailableReason::UnknownSchema),
    }
}

/// Classify-and-resolve in one step, for callers that do not need the
/// schema kind separately.
pub fn quote(doc: &Value, party: &PartyConfiguration, category: HotelCategory) -> PriceQuote {
    resolve(doc, super::schema::classify(doc), party, category)
}

// ==================== schema-specific resolution ====================

fn resolve_pax_tier(
    doc: &Value,
    party: &PartyConfiguration,
    category: HotelCategory,
    total_pax: u32,
) -> PriceQuote {
    let Some(tier_obj) = doc.get("paxTiers").and_then(Value::as_object) else {
        return PriceQuote::unavailable(UnavailableReason::MissingRate);
    };

    // Tier keys are authored as strings ("2", "4", ...); junk keys are skipped
    let tiers: BTreeMap<u32, &Value> = tier_obj
        .iter()
        .filter_map(|(key, value)| key.trim().parse().ok().map(|size| (size, value)))
        .collect();

    let Some(tier) = select_tier(&tiers, total_pax) else {
        return PriceQuote::unavailable(UnavailableReason::MissingRate);
    };
    let Some(category_rates) = tier.get(category.as_key()) else {
        return PriceQuote::unavailable(UnavailableReason::MissingRate);
    };

    price_rooms(room_rates(category_rates), party, total_pax)
}

fn resolve_group_size_flat(doc: &Value, party: &PartyConfiguration, total_pax: u32) -> PriceQuote {
    let mut tiers: BTreeMap<u32, Decimal> = BTreeMap::new();
    for (key, size) in [("twoAdults", 2), ("fourAdults", 4), ("sixAdults", 6)] {
        if let Some(price) = decimal_field(doc, key) {
            tiers.insert(size, price);
        }
    }
    // A bare-number perPerson is the whole price list for some land tours
    if tiers.is_empty() {
        if let Some(price) = decimal_field(doc, "perPerson") {
            tiers.insert(1, price);
        }
    }

    let Some(adult_rate) = select_tier(&tiers, total_pax).copied() else {
        return PriceQuote::unavailable(UnavailableReason::MissingRate);
    };

    let child_3_to_5 = decimal_field(doc, "children3to5");
    let child_6_to_10 = decimal_field(doc, "children6to10");
    let total = per_person_party_total(adult_rate, child_3_to_5, child_6_to_10, party);
    priced(total, total_pax, 0)
}

fn resolve_shore_excursion(doc: &Value, party: &PartyConfiguration, total_pax: u32) -> PriceQuote {
    let Some(per_person) = doc.get("perPerson").and_then(Value::as_object) else {
        return PriceQuote::unavailable(UnavailableReason::MissingRate);
    };

    let tiers: BTreeMap<u32, Decimal> = per_person
        .iter()
        .filter_map(|(key, value)| parse_pax_key(key).zip(as_decimal(value)))
        .collect();

    let Some(adult_rate) = select_tier(&tiers, total_pax).copied() else {
        return PriceQuote::unavailable(UnavailableReason::MissingRate);
    };

    let children = doc.get("children");
    let child_3_to_5 = children.and_then(|c| bracket_rate(c, &["3to5", "3-5"]));
    let child_6_to_10 = children.and_then(|c| bracket_rate(c, &["6to10", "6-10"]));
    let total = per_person_party_total(adult_rate, child_3_to_5, child_6_to_10, party);
    priced(total, total_pax, 0)
}

// ==================== party pricing ====================

/// Price a room-rated party (pax-tier and flat-hotel-category schemas).
///
/// A room list is priced room by room. Flat counts derive implied rooms:
/// adults pair into doubles, a leftover adult takes a single, children ride
/// along at [`CHILD_RATE_FACTOR`](super::calculators::CHILD_RATE_FACTOR)
/// of the double rate. A bare head count is treated as that many adults.
fn price_rooms(rates: RoomRates, party: &PartyConfiguration, total_pax: u32) -> PriceQuote {
    match party {
        PartyConfiguration::Rooms(rooms) => {
            let mut total = Decimal::ZERO;
            for room in rooms {
                let Some(rate) = occupancy_rate(&rates, *room) else {
                    return PriceQuote::unavailable(UnavailableReason::MissingRate);
                };
                total += rate * Decimal::from(room.travelers());
            }
            priced(total, total_pax, rooms.len() as u32)
        }
        PartyConfiguration::Counts {
            adults,
            children_3_to_5,
            children_6_to_10,
        } => price_counted_rooms(
            rates,
            *adults,
            children_3_to_5.saturating_add(*children_6_to_10),
            total_pax,
        ),
        PartyConfiguration::GroupSize(count) => price_counted_rooms(rates, *count, 0, total_pax),
    }
}

fn price_counted_rooms(rates: RoomRates, adults: u32, children: u32, total_pax: u32) -> PriceQuote {
    let double_rooms = adults / 2;
    let single_rooms = adults % 2;
    let mut total = Decimal::ZERO;

    if double_rooms > 0 || children > 0 {
        let Some(double) = rates.double else {
            return PriceQuote::unavailable(UnavailableReason::MissingRate);
        };
        total += double * Decimal::from(double_rooms * 2);
        total += child_rate(double) * Decimal::from(children);
    }
    if single_rooms > 0 {
        let Some(single) = occupancy_rate(&rates, RoomOccupancy::Single) else {
            return PriceQuote::unavailable(UnavailableReason::MissingRate);
        };
        total += single * Decimal::from(single_rooms);
    }

    priced(total, total_pax, double_rooms + single_rooms)
}

/// Total for per-person schemas: adults at the tier rate, children at their
/// authored bracket when the document has one, else at the adult rate.
fn per_person_party_total(
    adult_rate: Decimal,
    child_3_to_5: Option<Decimal>,
    child_6_to_10: Option<Decimal>,
    party: &PartyConfiguration,
) -> Decimal {
    match party {
        PartyConfiguration::Counts {
            adults,
            children_3_to_5,
            children_6_to_10,
        } => {
            adult_rate * Decimal::from(*adults)
                + child_3_to_5.unwrap_or(adult_rate) * Decimal::from(*children_3_to_5)
                + child_6_to_10.unwrap_or(adult_rate) * Decimal::from(*children_6_to_10)
        }
        other => adult_rate * Decimal::from(other.total_pax()),
    }
}

// ==================== output ====================

/// Seal a computed total into a quote. The authoritative total is rounded
/// to the whole EUR; the display per-person price is derived from the
/// unrounded total. A non-positive total means bad authored data and is
/// reported as unavailable, never as a bookable zero.
fn priced(unrounded_total: Decimal, total_pax: u32, room_count: u32) -> PriceQuote {
    if unrounded_total <= Decimal::ZERO {
        return PriceQuote::unavailable(UnavailableReason::MissingRate);
    }
    PriceQuote::Priced(ResolvedPrice {
        price_per_person: per_person_display(unrounded_total, total_pax),
        total_price: round_money(unrounded_total, 0),
        room_count,
    })
}

// ==================== document probing ====================

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(Decimal::from(int));
            }
            number.as_f64().and_then(|float| Decimal::try_from(float).ok())
        }
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn decimal_field(doc: &Value, key: &str) -> Option<Decimal> {
    doc.get(key).and_then(as_decimal)
}

fn room_rates(value: &Value) -> RoomRates {
    RoomRates {
        double: decimal_field(value, "double"),
        triple: decimal_field(value, "triple"),
        single: decimal_field(value, "singleSupplement")
            .or_else(|| decimal_field(value, "single")),
    }
}

/// Parse `"2pax"`-style keys; bare `"2"` is accepted too.
fn parse_pax_key(key: &str) -> Option<u32> {
    let key = key.trim();
    let digits = key
        .strip_suffix("pax")
        .or_else(|| key.strip_suffix("PAX"))
        .unwrap_or(key)
        .trim();
    digits.parse().ok()
}

/// Child bracket rate under any of the key spellings seen in the wild.
fn bracket_rate(children: &Value, keys: &[&str]) -> Option<Decimal> {
    keys.iter().find_map(|key| decimal_field(children, key))
}
