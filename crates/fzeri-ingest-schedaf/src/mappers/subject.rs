//! What the photograph depicts, and who made the depicted artwork.

use super::{labelled, LazyNode, RecordContext};
use fzeri_core::identity::{content_key, natural_key};
use fzeri_core::vocab::{base, crm, dcterms, fentry, Link};
use fzeri_core::{Emitter, FlatGroup};
use tracing::trace;

/// Competing title fields, highest precedence first.
const TITLE_FIELDS: [(&str, Link); 3] = [
    ("SGLT", fentry::HAS_PROPER_TITLE),
    ("SGLL", fentry::HAS_PARALLEL_TITLE),
    ("SGLA", fentry::HAS_ATTRIBUTED_TITLE),
];

/// Subject and title nodes are shared across records, so they carry only
/// their identity. Notes and types from this record go on per-photo
/// assignment nodes below `<photo>/depiction`.
pub(super) fn map_subject(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let subject = match group.get("SGTI") {
        Some(description) => content_key(base::SUBJECT, description),
        None => ctx.photo.child("subject"),
    };
    out.typed(&subject, crm::E1_CRM_ENTITY);
    out.link(&ctx.photo, crm::P62_DEPICTS, &subject);

    if let Some(description) = group.get("SGTI") {
        out.literal(&subject, crm::P1_IS_IDENTIFIED_BY, description);
    }

    let mut depiction = LazyNode::new(ctx.photo.child("depiction"));
    for (code, predicate) in [("FTAT", crm::P3_HAS_NOTE), ("OGTD", crm::P2_HAS_TYPE_LITERAL)] {
        if let Some(text) = group.get(code) {
            let node = depiction.get_or_init(out, |node, out| {
                out.typed(node, crm::E13_ATTRIBUTE_ASSIGNMENT);
                out.link(node, crm::P140_ASSIGNED_ATTRIBUTE_TO, &ctx.photo);
                out.link(node, crm::P141_ASSIGNED, &subject);
            });
            out.literal(node, predicate, text);
        }
    }

    let selected = TITLE_FIELDS
        .iter()
        .find_map(|(code, link)| group.get(code).map(|text| (text, *link)));
    if let Some((text, link)) = selected {
        let title = content_key(base::TITLE, text);
        out.typed(&title, crm::E35_TITLE);
        out.typed(&title, dcterms::TITLE);
        out.label(&title, text);
        out.link(&subject, link, &title);
        if let Some(note) = group.get("SGLS") {
            let usage = ctx.photo.child("depiction").child("title");
            out.typed(&usage, crm::E13_ATTRIBUTE_ASSIGNMENT);
            out.link(&usage, crm::P140_ASSIGNED_ATTRIBUTE_TO, &subject);
            out.link(&usage, crm::P141_ASSIGNED, &title);
            out.literal(&usage, crm::P3_HAS_NOTE, note);
        }
    }
}

/// Appellation field code and the node segment it is stored under.
const AUTHOR_NAMES: [(&str, &str); 3] = [
    ("AUTN", "proper_name"),
    ("AUTP", "pseudonym"),
    ("AUTI", "other_name"),
];

pub(super) fn map_author(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let Some(artwork_id) = ctx.artwork_id() else {
        trace!(entry_id = %ctx.entry_id(), "AUTHOR without SERCDOA, skipped");
        return;
    };
    let artwork = natural_key(base::OA_ENTRY, artwork_id, "");
    let productions = artwork.child("artwork").child("production");

    for rep in group.repetitions() {
        let production = productions.child(&rep.index.to_string());
        out.typed(&production, crm::E12_PRODUCTION);
        out.link(&production, crm::P108_PRODUCED, &artwork);

        let author = production.child("author");
        out.typed(&author, crm::E39_ACTOR);
        out.link(&production, crm::P14_CARRIED_OUT_BY, &author);

        for (code, segment) in AUTHOR_NAMES {
            if let Some(name) = rep.get(code) {
                let appellation = author.child(segment);
                labelled(out, &appellation, crm::E82_ACTOR_APPELLATION, name);
                out.link(&author, crm::P131_IS_IDENTIFIED_BY, &appellation);
            }
        }
        if let Some(school) = rep.get("AUTB") {
            let context = author.child("context");
            labelled(out, &context, crm::E62_STRING, school);
            out.link(&author, fentry::HAS_CULTURAL_CONTEXT, &context);
        }
    }
}
