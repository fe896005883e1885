//! Raw paragraphs to [`FlatRecord`].

use crate::xml::{RawField, RawRecord};
use fzeri_core::{FieldGroup, FlatGroup, FlatRecord};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// Natural id field code.
pub const ENTRY_ID_FIELD: &str = "SERCD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingIdentifier,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingIdentifier => write!(f, "missing identifier ({ENTRY_ID_FIELD})"),
        }
    }
}

/// Flatten one record. Fails only when no `SERCD` value is present.
pub fn flatten_record(raw: &RawRecord) -> Result<FlatRecord, SkipReason> {
    let mut groups: BTreeMap<FieldGroup, FlatGroup> = BTreeMap::new();

    for paragraph in &raw.paragraphs {
        let Some(group) = FieldGroup::from_label(&paragraph.label) else {
            debug!(label = %paragraph.label, "ignoring unknown field group");
            continue;
        };
        let flat = groups.entry(group).or_default();

        for field in &paragraph.fields {
            if let Some(text) = field_text(group, field) {
                flat.set_scalar(&field.code, text);
            }
        }

        for repetition in &paragraph.repetitions {
            let Some(index) = parse_index(repetition.prog.as_deref()) else {
                warn!(
                    group = group.label(),
                    prog = repetition.prog.as_deref().unwrap_or(""),
                    "dropping repetition with invalid index"
                );
                continue;
            };
            for field in &repetition.fields {
                if let Some(text) = field_text(group, field) {
                    flat.set_repeated(&field.code, index, text);
                }
            }
        }
    }

    let entry_id = groups
        .values()
        .find_map(|g| g.get(ENTRY_ID_FIELD))
        .map(str::to_string)
        .ok_or(SkipReason::MissingIdentifier)?;

    Ok(FlatRecord::new(entry_id, raw.heading.clone(), groups))
}

/// The raw text, or `None` when it is blank. Trimming only decides presence.
fn field_text(group: FieldGroup, field: &RawField) -> Option<String> {
    if field.text.trim().is_empty() {
        return None;
    }
    if group.unmapped_fields().contains(&field.code.as_str()) {
        trace!(group = group.label(), code = %field.code, "accepted unmapped field");
    }
    Some(field.text.clone())
}

fn parse_index(prog: Option<&str>) -> Option<u32> {
    prog?.trim().parse::<u32>().ok().filter(|n| *n > 0)
}
