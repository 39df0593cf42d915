//! Price-resolution service for the Atlas Tours website.
//!
//! The pricing core (schema detection, tier selection, room allocation,
//! commission) lives in [`pricing`] and is exposed over a small JSON API so
//! the storefront, the agent portal and the landing pages all price through
//! one implementation. Display-currency conversion lives in [`currency`].

pub mod currency;
pub mod error;
pub mod pricing;

pub use error::{AppError, Result};
