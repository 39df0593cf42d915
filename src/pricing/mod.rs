//! Pricing engine for the travel storefront.
//!
//! Turns a package's hand-authored pricing document plus a traveler
//! configuration into a bookable EUR total. The computation is pure and
//! stateless; every storefront surface calls the same classify/resolve
//! pair through the HTTP routes in this module.

pub mod calculators;
pub mod commission;
pub mod models;
pub mod requests;
pub mod resolver;
pub mod responses;
pub mod routes;
pub mod schema;

// Re-export commonly used items
pub use calculators::{round_money, CHILD_RATE_FACTOR, SINGLE_OCCUPANCY_FACTOR};
pub use commission::{commission, CommissionView};
pub use models::{
    HotelCategory, PartyConfiguration, PriceQuote, ResolvedPrice, RoomOccupancy, UnavailableReason,
};
pub use resolver::{quote, resolve};
pub use routes::router;
pub use schema::{classify, SchemaKind};
