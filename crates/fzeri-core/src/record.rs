//! Flattened schedaF record.
//!
//! A record is a set of field groups; each group maps a field code either to a
//! single value or to values keyed by the source repetition index. Indices are
//! whatever the source assigned (1-based, not necessarily contiguous) and are
//! never renumbered.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ============================================================================
// Field groups
// ============================================================================

/// Every schedaF field group the mapping understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldGroup {
    Copyright,
    Notes,
    Supervisor,
    Classification,
    Ownership,
    Codes,
    Cataloguing,
    Updating,
    Object,
    Subject,
    Author,
    Dating,
    Photographer,
    Publishing,
    ShotPlaceAndDate,
    Negative,
    DigitalImage,
    Provenance,
    Location,
    Preservation,
    RelatedObjects,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 21] = [
        FieldGroup::Copyright,
        FieldGroup::Notes,
        FieldGroup::Supervisor,
        FieldGroup::Classification,
        FieldGroup::Ownership,
        FieldGroup::Codes,
        FieldGroup::Cataloguing,
        FieldGroup::Updating,
        FieldGroup::Object,
        FieldGroup::Subject,
        FieldGroup::Author,
        FieldGroup::Dating,
        FieldGroup::Photographer,
        FieldGroup::Publishing,
        FieldGroup::ShotPlaceAndDate,
        FieldGroup::Negative,
        FieldGroup::DigitalImage,
        FieldGroup::Provenance,
        FieldGroup::Location,
        FieldGroup::Preservation,
        FieldGroup::RelatedObjects,
    ];

    /// The `etichetta` label used by the catalogue export.
    pub fn label(self) -> &'static str {
        match self {
            FieldGroup::Copyright => "COPYRIGHT",
            FieldGroup::Notes => "NOTES",
            FieldGroup::Supervisor => "SUPERVISOR",
            FieldGroup::Classification => "CLASSIFICATION",
            FieldGroup::Ownership => "OWNERSHIP",
            FieldGroup::Codes => "CODES",
            FieldGroup::Cataloguing => "CATALOGUING",
            FieldGroup::Updating => "UPDATING",
            FieldGroup::Object => "OBJECT",
            FieldGroup::Subject => "SUBJECT",
            FieldGroup::Author => "AUTHOR",
            FieldGroup::Dating => "DATING",
            FieldGroup::Photographer => "PHOTOGRAPHER",
            FieldGroup::Publishing => "PRODUCTION AND PUBLISHING",
            FieldGroup::ShotPlaceAndDate => "PLACE AND DATE OF THE SHOT",
            FieldGroup::Negative => "RELATIONS WITH OTHER PHOTOGRAPHIC OBJECTS (NEGATIVE)",
            FieldGroup::DigitalImage => "DIGITAL IMAGE",
            FieldGroup::Provenance => "PROVENANCE",
            FieldGroup::Location => "LOCATION",
            FieldGroup::Preservation => "STATE OF PRESERVATION",
            FieldGroup::RelatedObjects => "RELATION TO OTHER OBJECTS",
        }
    }

    /// Case-insensitive, whitespace-collapsing label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalised = label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        Self::ALL.into_iter().find(|g| g.label() == normalised)
    }

    /// Field codes present in the catalogue that are accepted but not mapped.
    pub fn unmapped_fields(self) -> &'static [&'static str] {
        match self {
            FieldGroup::Codes => &["LIR"],
            FieldGroup::Publishing => &["EDIT", "SFIT"],
            FieldGroup::Negative => &["ROFF"],
            FieldGroup::DigitalImage => &["FTAX", "VERSO"],
            FieldGroup::RelatedObjects => &["RVEL"],
            _ => &[],
        }
    }
}

// ============================================================================
// Values
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Single(String),
    Repeated(BTreeMap<u32, String>),
}

/// One flattened field group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatGroup {
    fields: BTreeMap<String, FieldValue>,
}

impl FlatGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins.
    pub fn set_scalar(&mut self, code: &str, value: impl Into<String>) {
        self.fields
            .insert(code.to_string(), FieldValue::Single(value.into()));
    }

    /// Last write wins for the same `(code, index)`.
    pub fn set_repeated(&mut self, code: &str, index: u32, value: impl Into<String>) {
        let slot = self
            .fields
            .entry(code.to_string())
            .or_insert_with(|| FieldValue::Repeated(BTreeMap::new()));
        if matches!(slot, FieldValue::Single(_)) {
            *slot = FieldValue::Repeated(BTreeMap::new());
        }
        if let FieldValue::Repeated(values) = slot {
            values.insert(index, value.into());
        }
    }

    pub fn value(&self, code: &str) -> Option<&FieldValue> {
        self.fields.get(code)
    }

    /// Scalar read. On a repeated field this is the value at the lowest index.
    pub fn get(&self, code: &str) -> Option<&str> {
        match self.fields.get(code)? {
            FieldValue::Single(v) => Some(v.as_str()),
            FieldValue::Repeated(values) => values.values().next().map(String::as_str),
        }
    }

    /// Read at a repetition index. A single value applies to every index.
    pub fn at(&self, code: &str, index: u32) -> Option<&str> {
        match self.fields.get(code)? {
            FieldValue::Single(v) => Some(v.as_str()),
            FieldValue::Repeated(values) => values.get(&index).map(String::as_str),
        }
    }

    pub fn is_repeated(&self) -> bool {
        self.fields
            .values()
            .any(|v| matches!(v, FieldValue::Repeated(_)))
    }

    /// Union of the repetition indices of every repeated field.
    pub fn indices(&self) -> BTreeSet<u32> {
        self.fields
            .values()
            .filter_map(|v| match v {
                FieldValue::Repeated(values) => Some(values.keys().copied()),
                FieldValue::Single(_) => None,
            })
            .flatten()
            .collect()
    }

    /// Repetitions in index order. A non-repeated, non-empty group yields a
    /// single repetition with index 1.
    pub fn repetitions(&self) -> Vec<Repetition<'_>> {
        if self.is_repeated() {
            self.indices()
                .into_iter()
                .map(|index| Repetition { index, group: self })
                .collect()
        } else if self.fields.is_empty() {
            Vec::new()
        } else {
            vec![Repetition {
                index: 1,
                group: self,
            }]
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A view of one repetition of a group.
#[derive(Debug, Clone, Copy)]
pub struct Repetition<'a> {
    pub index: u32,
    group: &'a FlatGroup,
}

impl<'a> Repetition<'a> {
    pub fn get(&self, code: &str) -> Option<&'a str> {
        self.group.at(code, self.index)
    }

    pub fn has(&self, code: &str) -> bool {
        self.get(code).is_some()
    }
}

// ============================================================================
// Record
// ============================================================================

/// A flattened record that carries its natural id (`SERCD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub entry_id: String,
    pub heading: Option<String>,
    groups: BTreeMap<FieldGroup, FlatGroup>,
}

impl FlatRecord {
    pub fn new(
        entry_id: impl Into<String>,
        heading: Option<String>,
        groups: BTreeMap<FieldGroup, FlatGroup>,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            heading,
            groups,
        }
    }

    pub fn group(&self, group: FieldGroup) -> Option<&FlatGroup> {
        self.groups.get(&group)
    }

    pub fn groups(&self) -> impl Iterator<Item = (FieldGroup, &FlatGroup)> {
        self.groups.iter().map(|(g, flat)| (*g, flat))
    }

    /// First scalar value of `code` in any group (group order).
    pub fn find(&self, code: &str) -> Option<&str> {
        self.groups.values().find_map(|g| g.get(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_and_are_normalised() {
        for group in FieldGroup::ALL {
            assert_eq!(FieldGroup::from_label(group.label()), Some(group));
        }
        assert_eq!(
            FieldGroup::from_label("  production   and publishing "),
            Some(FieldGroup::Publishing)
        );
        assert_eq!(FieldGroup::from_label("UNKNOWN GROUP"), None);
    }

    #[test]
    fn mapped_codes_are_not_listed_as_unmapped() {
        assert!(!FieldGroup::Negative.unmapped_fields().contains(&"ROFI"));
        assert!(FieldGroup::Negative.unmapped_fields().contains(&"ROFF"));
        assert!(FieldGroup::Classification.unmapped_fields().is_empty());
    }

    #[test]
    fn repeated_fields_keep_source_indices() {
        let mut group = FlatGroup::new();
        group.set_repeated("AUFN", 3, "Mario Rossi");
        group.set_repeated("AUFN", 7, "Anonimo");
        group.set_repeated("AUFS", 7, "studio");

        let reps = group.repetitions();
        assert_eq!(reps.iter().map(|r| r.index).collect::<Vec<_>>(), vec![3, 7]);
        assert_eq!(reps[0].get("AUFN"), Some("Mario Rossi"));
        assert_eq!(reps[0].get("AUFS"), None);
        assert_eq!(reps[1].get("AUFS"), Some("studio"));
    }

    #[test]
    fn scalar_group_yields_one_repetition() {
        let mut group = FlatGroup::new();
        group.set_scalar("DTSI", "1900");
        group.set_scalar("DTSI", "1901");

        let reps = group.repetitions();
        assert_eq!(reps.len(), 1);
        assert_eq!(reps[0].index, 1);
        assert_eq!(reps[0].get("DTSI"), Some("1901"));
        assert!(FlatGroup::new().repetitions().is_empty());
    }

    #[test]
    fn scalar_read_of_repeated_field_takes_lowest_index() {
        let mut group = FlatGroup::new();
        group.set_repeated("FTAN", 9, "b.jpg");
        group.set_repeated("FTAN", 2, "a.jpg");
        assert_eq!(group.get("FTAN"), Some("a.jpg"));
    }
}
