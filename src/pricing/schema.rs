//! Pricing document schema detection.
//!
//! Package pricing documents are hand-authored (admin-entered or extracted
//! from supplier PDFs) and have no single fixed shape. Detection is
//! key-presence based and total: every JSON value, malformed or empty
//! included, classifies to exactly one kind. Every surface that prices a
//! package goes through [`classify`]; nothing else in the codebase probes
//! document shape.

use serde::Serialize;
use serde_json::Value;

/// Hotel category keys recognized in flat and pax-tier documents.
pub(crate) const HOTEL_CATEGORY_KEYS: [&str; 3] = ["threestar", "fourstar", "fivestar"];

/// The pricing schema families found in package documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// `paxTiers` keyed by group size, then hotel category, then room rate.
    /// The current schema for hotel packages.
    PaxTier,
    /// Per-person rates keyed by minimum group size (`twoAdults`,
    /// `fourAdults`, `sixAdults`), used for land-only packages.
    GroupSizeFlat,
    /// Per-person rates keyed by exact party size (`perPerson` as an object
    /// of `"1pax"`, `"2pax"`, ... entries), used for shore excursions and
    /// daily tours.
    ShoreExcursionTiered,
    /// Legacy schema: room rates keyed by hotel category only, no group-size
    /// sensitivity.
    FlatHotelCategory,
    /// Nothing recognizable. Downstream resolution treats this as
    /// "price unavailable", never as an error.
    Unknown,
}

/// Classify a pricing document by which top-level keys are present.
///
/// Detection order is fixed: `paxTiers` wins over everything, then the
/// group-size keys, then an object-valued `perPerson` (a bare-number
/// `perPerson` belongs to the group-size schema), then the hotel category
/// keys. Anything else is [`SchemaKind::Unknown`]. Never fails.
pub fn classify(doc: &Value) -> SchemaKind {
    let Some(map) = doc.as_object() else {
        return SchemaKind::Unknown;
    };

    if map.contains_key("paxTiers") {
        return SchemaKind::PaxTier;
    }

    if ["twoAdults", "fourAdults", "sixAdults"]
        .iter()
        .any(|key| map.contains_key(*key))
    {
        return SchemaKind::GroupSizeFlat;
    }

    match map.get("perPerson") {
        Some(Value::Object(_)) => return SchemaKind::ShoreExcursionTiered,
        Some(value) if value.is_number() => return SchemaKind::GroupSizeFlat,
        _ => {}
    }

    if HOTEL_CATEGORY_KEYS.iter().any(|key| map.contains_key(*key)) {
        return SchemaKind::FlatHotelCategory;
    }

    SchemaKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_pax_tier() {
        let doc = json!({ "paxTiers": { "2": { "fourstar": { "double": 200 } } } });
        assert_eq!(classify(&doc), SchemaKind::PaxTier);
    }

    #[test]
    fn test_classify_pax_tier_wins_over_other_keys() {
        // Mixed documents happen when admins migrate old packages by hand
        let doc = json!({
            "paxTiers": { "2": {} },
            "twoAdults": 415,
            "fourstar": { "double": 100 }
        });
        assert_eq!(classify(&doc), SchemaKind::PaxTier);
    }

    #[test]
    fn test_classify_group_size_flat() {
        let doc = json!({ "twoAdults": 415, "fourAdults": 369, "sixAdults": 355 });
        assert_eq!(classify(&doc), SchemaKind::GroupSizeFlat);

        // A single group-size key is enough
        let doc = json!({ "fourAdults": 369 });
        assert_eq!(classify(&doc), SchemaKind::GroupSizeFlat);
    }

    #[test]
    fn test_classify_per_person_object_is_shore_excursion() {
        let doc = json!({ "perPerson": { "1pax": 120, "2pax": 95 } });
        assert_eq!(classify(&doc), SchemaKind::ShoreExcursionTiered);
    }

    #[test]
    fn test_classify_per_person_number_is_group_size_flat() {
        let doc = json!({ "perPerson": 99 });
        assert_eq!(classify(&doc), SchemaKind::GroupSizeFlat);
    }

    #[test]
    fn test_classify_flat_hotel_category() {
        let doc = json!({ "fourstar": { "double": 80, "single": 110 } });
        assert_eq!(classify(&doc), SchemaKind::FlatHotelCategory);

        let doc = json!({ "threestar": {}, "fivestar": {} });
        assert_eq!(classify(&doc), SchemaKind::FlatHotelCategory);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify(&json!({})), SchemaKind::Unknown);
        assert_eq!(classify(&json!(null)), SchemaKind::Unknown);
        assert_eq!(classify(&json!([1, 2, 3])), SchemaKind::Unknown);
        assert_eq!(classify(&json!("415")), SchemaKind::Unknown);
        assert_eq!(classify(&json!({ "notes": "pricing TBD" })), SchemaKind::Unknown);
    }

    #[test]
    fn test_classify_per_person_string_is_unknown() {
        // Non-numeric, non-object perPerson matches no schema
        let doc = json!({ "perPerson": "on request" });
        assert_eq!(classify(&doc), SchemaKind::Unknown);
    }
}
