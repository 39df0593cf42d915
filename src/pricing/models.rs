//! Domain types for the pricing engine.
//!
//! Everything here is ephemeral: created per pricing request, discarded
//! after the response is built. Nothing carries database identity; the
//! booking record that eventually persists a price is built by the booking
//! service from the resolver's output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hotel star categories a package may be priced under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotelCategory {
    ThreeStar,
    FourStar,
    FiveStar,
}

impl HotelCategory {
    /// Key used for this category inside pricing documents.
    pub fn as_key(&self) -> &'static str {
        match self {
            HotelCategory::ThreeStar => "threestar",
            HotelCategory::FourStar => "fourstar",
            HotelCategory::FiveStar => "fivestar",
        }
    }
}

/// How many travelers share one room.
///
/// Authored rates only ever distinguish single, double and triple occupancy,
/// so this is a closed enum rather than a bare count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RoomOccupancy {
    Single,
    Double,
    Triple,
}

impl RoomOccupancy {
    /// Number of travelers in the room.
    pub fn travelers(&self) -> u32 {
        match self {
            RoomOccupancy::Single => 1,
            RoomOccupancy::Double => 2,
            RoomOccupancy::Triple => 3,
        }
    }
}

impl TryFrom<u8> for RoomOccupancy {
    type Error = String;

    fn try_from(occupants: u8) -> Result<Self, Self::Error> {
        match occupants {
            1 => Ok(RoomOccupancy::Single),
            2 => Ok(RoomOccupancy::Double),
            3 => Ok(RoomOccupancy::Triple),
            other => Err(format!("room occupancy must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<RoomOccupancy> for u8 {
    fn from(occupancy: RoomOccupancy) -> u8 {
        occupancy.travelers() as u8
    }
}

/// The traveler configuration a price is being asked for.
///
/// Hotel package pages send a room list, the agent portal and land-only
/// flows send flat traveler counts, and shore excursion pages send just a
/// head count.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyConfiguration {
    /// One entry per room, hotel and land packages.
    Rooms(Vec<RoomOccupancy>),
    /// Flat traveler counts; rooms are derived by the resolver.
    Counts {
        adults: u32,
        #[serde(default)]
        children_3_to_5: u32,
        #[serde(default)]
        children_6_to_10: u32,
    },
    /// Bare head count, shore excursions.
    GroupSize(u32),
}

impl PartyConfiguration {
    /// Total paying travelers. This is the value tier selection keys on;
    /// children always count toward it. Counts come straight off the HTTP
    /// boundary, so the sums saturate rather than overflow.
    pub fn total_pax(&self) -> u32 {
        match self {
            PartyConfiguration::Rooms(rooms) => rooms
                .iter()
                .fold(0u32, |sum, room| sum.saturating_add(room.travelers())),
            PartyConfiguration::Counts {
                adults,
                children_3_to_5,
                children_6_to_10,
            } => adults
                .saturating_add(*children_3_to_5)
                .saturating_add(*children_6_to_10),
            PartyConfiguration::GroupSize(count) => *count,
        }
    }
}

/// Authored per-person rates for one hotel category at one tier.
///
/// Any field may be missing in a hand-authored document; the occupancy
/// fallback rules live in the calculators module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomRates {
    pub double: Option<Decimal>,
    pub triple: Option<Decimal>,
    /// Per-person rate for single occupancy (`singleSupplement` in pax-tier
    /// documents, `single` in legacy flat documents).
    pub single: Option<Decimal>,
}

/// A successfully priced configuration.
///
/// `total_price` is the authoritative bookable EUR amount, rounded to the
/// whole unit. `price_per_person` is a display value derived independently
/// from the unrounded total. `room_count` is 0 for packages priced per
/// person rather than per room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPrice {
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_person: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    pub room_count: u32,
}

/// Why a configuration could not be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The document matched no known pricing schema.
    UnknownSchema,
    /// Zero travelers in the party.
    EmptyParty,
    /// The document is a known schema but lacks a rate needed for this
    /// party and hotel category.
    MissingRate,
}

/// Outcome of a pricing evaluation.
///
/// A quote is either fully priced or unavailable; there is no partial
/// state and no zero-total sentinel. Unpriceable input is an expected
/// condition (documents are hand-authored and frequently incomplete), so
/// this is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PriceQuote {
    Priced(ResolvedPrice),
    Unavailable { reason: UnavailableReason },
}

impl PriceQuote {
    pub fn unavailable(reason: UnavailableReason) -> Self {
        PriceQuote::Unavailable { reason }
    }

    pub fn is_priced(&self) -> bool {
        matches!(self, PriceQuote::Priced(_))
    }

    /// Legacy view: unavailable quotes read as a zero total. Callers that
    /// take this path must render "price unavailable", never a bare zero.
    pub fn total(&self) -> Decimal {
        match self {
            PriceQuote::Priced(resolved) => resolved.total_price,
            PriceQuote::Unavailable { .. } => Decimal::ZERO,
        }
    }
}
