//! Where the photograph is kept: the archival containment chain
//! (collection, series, box, issue) and the current physical location.

use super::{nest_skipping_absent, place, RecordContext};
use fzeri_core::identity::{composite_key, content_key, encode_segment, natural_key};
use fzeri_core::vocab::{base, crm};
use fzeri_core::{Emitter, FlatGroup, NodeId};

pub(super) fn map_classification(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let photo = &ctx.photo;

    if let Some(artwork) = group.get("SERCDOA") {
        out.link(&ctx.entry, crm::P67_REFERS_TO, &natural_key(base::OA_ENTRY, artwork, ""));
    }
    if let Some(inventory) = group.get("INVN") {
        let identifier = ctx
            .entry
            .child("inventory")
            .child(&encode_segment(inventory));
        out.typed(&identifier, crm::E42_IDENTIFIER);
        out.label(&identifier, inventory);
        out.link(photo, crm::P149_IS_IDENTIFIED_BY, &identifier);
    }

    // Innermost first.
    let levels = [
        archive_level(out, base::ISSUE, &[group.get("UBFU"), group.get("UBFF")]),
        archive_level(out, base::BOX, &[group.get("UBFT"), group.get("UBFN")]),
        archive_level(out, base::SERIE, &[group.get("UBFS")]),
        archive_level(out, base::COLLECTION, &[group.get("UBFP")]),
    ];

    for pair in levels.windows(2) {
        if let [Some(inner), Some(outer)] = pair {
            out.link(outer, crm::P59_HAS_SECTION, inner);
        }
    }
    if let Some(innermost) = levels.iter().flatten().next() {
        out.link(photo, crm::P54_HAS_CURRENT_PERMANENT_LOCATION, innermost);
    }

    if let Some(shelfmark) = group.get("UBFC") {
        out.literal(photo, crm::P54_LOCATION_LITERAL, shelfmark);
    }
}

/// One level of the archive. Every defining field must be present; a single
/// field is content-hashed, several are composite-hashed.
fn archive_level(out: &mut Emitter, base: &str, fields: &[Option<&str>]) -> Option<NodeId> {
    let parts: Vec<&str> = fields.iter().copied().collect::<Option<_>>()?;
    let node = match parts.as_slice() {
        [single] => content_key(base, single),
        _ => composite_key(base, &parts),
    };
    out.typed(&node, crm::E53_PLACE);
    for part in &parts {
        out.literal(&node, crm::P87_IS_IDENTIFIED_BY_LITERAL, part);
    }
    Some(node)
}

pub(super) fn map_location(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let location = ctx.photo.child("location");
    out.typed(&location, crm::E53_PLACE);
    out.link(&ctx.photo, crm::P55_HAS_CURRENT_LOCATION, &location);

    let level = |out: &mut Emitter, code: &str, segment: &str| {
        group
            .get(code)
            .map(|text| place(out, location.child(segment), text))
    };
    let repository = level(out, "LDCN", "repository");
    let town = level(out, "PVCC", "town");
    let district = level(out, "PVCP", "district");
    let region = level(out, "PVCR", "region");

    for (code, segment) in [("LDCM", "collection"), ("LDCS", "precise_location")] {
        if let Some(text) = group.get(code) {
            let section = location.child(segment);
            out.typed(&section, crm::E46_SECTION_DEFINITION);
            out.label(&section, text);
            out.link(&location, crm::P87_IS_IDENTIFIED_BY, &section);
        }
    }
    if let Some(text) = group.get("LDCU") {
        let address = place(out, location.child("address"), text);
        out.link(&location, crm::P87_IS_IDENTIFIED_BY, &address);
    }

    nest_skipping_absent(out, &location, &[repository, town, district, region]);
}
