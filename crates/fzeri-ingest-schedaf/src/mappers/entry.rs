//! The catalogue entry itself and its administrative groups.

use super::{labelled, time_appellation, type_term, RecordContext};
use fzeri_core::identity::term_key;
use fzeri_core::vocab::{base, crm, dcterms, fentry, foaf, pro};
use fzeri_core::{Emitter, FlatGroup, NodeId};

/// Document, title, photo and the shared production node. Runs for every
/// mapped record.
pub(super) fn map_entry(ctx: &RecordContext<'_>, out: &mut Emitter) {
    let entry = &ctx.entry;
    out.typed(entry, crm::E31_DOCUMENT);
    out.typed(entry, fentry::F_ENTRY);
    out.literal(entry, crm::P1_IS_IDENTIFIED_BY, ctx.entry_id());

    if let Some(heading) = ctx.record.heading.as_deref().filter(|h| !h.trim().is_empty()) {
        let title = entry.child("title");
        out.typed(&title, crm::E35_TITLE);
        out.typed(&title, dcterms::TITLE);
        out.label(&title, heading);
        out.link(entry, crm::P102_HAS_TITLE, &title);
    }

    let photo = &ctx.photo;
    out.typed(photo, crm::E22_MAN_MADE_OBJECT);
    out.typed(photo, fentry::PHOTOGRAPH);
    out.literal(photo, crm::P1_IS_IDENTIFIED_BY, ctx.entry_id());
    out.link(entry, crm::P70_DOCUMENTS, photo);
    out.relate(entry, fentry::DESCRIBES, photo);

    out.typed(&ctx.production, crm::E12_PRODUCTION);
    out.link(&ctx.production, crm::P108_PRODUCED, photo);
}

pub(super) fn map_copyright(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let right = ctx.entry.child("copyright");
    out.typed(&right, crm::E30_RIGHT);
    if let Some(note) = group.get("CRPD") {
        out.literal(&right, crm::P3_HAS_NOTE, note);
    }
    out.link(&ctx.entry, crm::P104_IS_SUBJECT_TO, &right);
}

pub(super) fn map_notes(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    if let Some(note) = group.get("OSS") {
        out.literal(&ctx.entry, crm::P3_HAS_NOTE, note);
    }
}

pub(super) fn map_supervisor(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let Some(name) = group.get("FUR") else {
        return;
    };
    let supervisor = ctx.entry.child("supervisor");
    labelled(out, &supervisor, crm::E39_ACTOR, name);
    out.typed(&supervisor, foaf::AGENT);
    out.literal(&supervisor, foaf::NAME, name);

    let cataloguing = cataloguing_node(ctx, out);
    out.link(&cataloguing, crm::P11_HAD_PARTICIPANT, &supervisor);

    out.typed(&ctx.entry, foaf::DOCUMENT);
    role_in_time(out, &supervisor, "supervisor", &ctx.entry);
}

pub(super) fn map_ownership(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let acquisition = ctx.photo.child("ownership");
    out.typed(&acquisition, crm::E8_ACQUISITION);
    out.link(&acquisition, crm::P24_TRANSFERRED_TITLE_OF, &ctx.photo);

    if let Some(owner_name) = group.get("CDGS") {
        let owner = acquisition.child("owner");
        labelled(out, &owner, crm::E39_ACTOR, owner_name);
        out.link(&acquisition, crm::P22_TRANSFERRED_TITLE_TO, &owner);
    }
    if let Some(note) = group.get("CDGG") {
        out.literal(&acquisition, crm::P3_HAS_NOTE, note);
    }
}

pub(super) fn map_codes(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let entry = &ctx.entry;

    if let Some(kind) = group.get("TSK") {
        let term = term_key(base::ENTRY_TYPE, kind);
        type_term(out, &term, kind);
        out.link(entry, crm::P2_HAS_TYPE, &term);
    }

    for (code, kind) in [("NCTN", "id_number"), ("NCTR", "regional_code")] {
        if let Some(value) = group.get(code) {
            let identifier = entry.child(kind);
            labelled(out, &identifier, crm::E42_IDENTIFIER, value);
            let identifier_type = NodeId::from_iri(format!("{}{kind}", base::IDENTIFIER));
            out.link(&identifier, crm::P2_HAS_TYPE, &identifier_type);
            out.link(entry, crm::P48_HAS_PREFERRED_IDENTIFIER, &identifier);
        }
    }

    if let Some(keeper_name) = group.get("ESC") {
        let keeper = entry.child("keeper");
        out.typed(&keeper, crm::E40_LEGAL_BODY);
        out.typed(&keeper, foaf::AGENT);
        out.literal(&keeper, foaf::NAME, keeper_name);
        role_in_time(out, &keeper, "keeper", entry);
        out.link(entry, crm::P50_HAS_CURRENT_KEEPER, &keeper);
    }
}

pub(super) fn map_cataloguing(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let creation = cataloguing_node(ctx, out);

    if let Some(date) = group.get("CMPD") {
        let timespan = creation.child("ts");
        out.typed(&timespan, crm::E52_TIME_SPAN);
        time_appellation(out, &timespan, &creation.child("date"), date);
        out.link(&creation, crm::P4_HAS_TIME_SPAN, &timespan);
    }
    if let Some(name) = group.get("CMPN") {
        let actor = creation.child("actor");
        labelled(out, &actor, crm::E39_ACTOR, name);
        out.link(&creation, crm::P14_CARRIED_OUT_BY, &actor);
    }
}

pub(super) fn map_updating(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let updates = ctx.entry.child("cataloguing").child("update");
    for rep in group.repetitions() {
        let transformation = updates.child(&rep.index.to_string());
        out.typed(&transformation, crm::E81_TRANSFORMATION);

        if let Some(date) = rep.get("AGGD") {
            let timespan = transformation.child("ts");
            out.typed(&timespan, crm::E52_TIME_SPAN);
            out.link(&transformation, crm::P4_HAS_TIME_SPAN, &timespan);
            time_appellation(out, &timespan, &transformation.child("date"), date);
        }
        if let Some(name) = rep.get("AGGN") {
            let actor = transformation.child("actor");
            labelled(out, &actor, crm::E39_ACTOR, name);
            out.link(&transformation, crm::P11_HAD_PARTICIPANT, &actor);
        }
        out.link(&transformation, crm::P124_TRANSFORMED, &ctx.entry);
    }
}

/// The cataloguing creation event; shared by SUPERVISOR and CATALOGUING.
fn cataloguing_node(ctx: &RecordContext<'_>, out: &mut Emitter) -> NodeId {
    let creation = ctx.entry.child("cataloguing");
    out.typed(&creation, crm::E65_CREATION);
    out.link(&creation, crm::P94_CREATED, &ctx.entry);
    creation
}

fn role_in_time(out: &mut Emitter, holder: &NodeId, role_name: &str, document: &NodeId) {
    let role = holder.child("role");
    out.typed(&role, pro::ROLE_IN_TIME);
    out.literal(&role, pro::WITH_ROLE, role_name);
    out.relate(&role, pro::RELATES_TO_DOCUMENT, document);
    out.relate(holder, pro::HOLDS_ROLE_IN_TIME, &role);
}
