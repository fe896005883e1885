//! Production history of the photograph.
//!
//! Dating, photographer, publisher and negative each contribute numbered steps
//! below `<photo>/production`. Numbers come from the record's step counter, so
//! they follow mapping-table order and never the source repetition index.

use super::{
    instant, labelled, place, time_appellation, type_term, Boundary, LazyNode, RecordContext,
};
use fzeri_core::identity::{content_key, term_key};
use fzeri_core::record::Repetition;
use fzeri_core::vocab::{base, crm, foaf, pro, Link};
use fzeri_core::{Emitter, FlatGroup, NodeId};

pub(super) fn map_dating(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    for rep in group.repetitions() {
        let step = ctx.open_step(out);
        let timespan = step.child("date");
        out.typed(&timespan, crm::E52_TIME_SPAN);
        out.link(&step, crm::P4_HAS_TIME_SPAN, &timespan);

        if let Some(century) = rep.get("DTZG") {
            time_appellation(out, &timespan, &timespan.child("century"), century);
        }
        if let Some(begin) = rep.get("DTSI") {
            instant(out, &timespan, Boundary::Begin, begin);
            if let Some(qualifier) = rep.get("DTSV") {
                out.literal(&timespan, crm::P79_BEGINNING_IS_QUALIFIED_BY, qualifier);
            }
        }
        if let Some(end) = rep.get("DTSF") {
            instant(out, &timespan, Boundary::End, end);
            if let Some(qualifier) = rep.get("DTSL") {
                out.literal(&timespan, crm::P80_END_IS_QUALIFIED_BY, qualifier);
            }
        }
        if let Some(motivation) = rep.get("DTMM") {
            let assignment = step.child("assignment");
            assign_attribute(out, &assignment, &timespan, &step);
            out.literal(&assignment, crm::P17_WAS_MOTIVATED_BY, motivation);
        }
        if let Some(note) = rep.get("DTMS") {
            out.literal(&step, crm::P3_HAS_NOTE, note);
        }
    }
}

pub(super) fn map_photographer(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    for rep in group.repetitions() {
        let step = ctx.open_step(out);
        let actor = step.child("photographer");
        out.typed(&actor, crm::E39_ACTOR);
        out.link(&step, crm::P14_CARRIED_OUT_BY, &actor);

        if let Some(name) = rep.get("AUFN") {
            actor_name(out, &actor, name);
        }
        if let Some(address) = rep.get("AUFI") {
            contact_point(out, &actor, address);
        }

        let mut assignment = LazyNode::new(actor.child("assignment"));
        attribution_evidence(out, &mut assignment, &actor, &step, &rep, ("AUFM", "AUFK"));

        if let Some(note) = rep.get("AUFA") {
            out.literal(&actor, crm::P3_HAS_NOTE, note);
        }
        if let Some(kind) = rep.get("AUFS") {
            out.literal(&actor, crm::P2_HAS_TYPE_LITERAL, kind);
        }
        if let Some(role) = rep.get("AUFR") {
            holds_role(out, &actor, role, &ctx.photo);
        }
    }
}

pub(super) fn map_publishing(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    for rep in group.repetitions() {
        let step = ctx.open_step(out);
        let publisher = step.child("publisher");
        out.typed(&publisher, crm::E39_ACTOR);

        let role = rep.get("PDFR");
        let carried_out_by: Link = role
            .and_then(|code| ctx.tables.role_to_ontology_property(code))
            .unwrap_or(crm::P14_CARRIED_OUT_BY);
        out.link(&step, carried_out_by, &publisher);

        if let Some(name) = rep.get("PDFN") {
            actor_name(out, &publisher, name);
        }
        if let Some(name) = rep.get("PDFB") {
            actor_name(out, &publisher, name);
        }
        if let Some(address) = rep.get("PDFI") {
            contact_point(out, &publisher, address);
        }

        let mut assignment = LazyNode::new(publisher.child("assignment"));
        attribution_evidence(out, &mut assignment, &publisher, &step, &rep, ("PDFM", "PDFK"));

        if let Some(role) = role {
            holds_role(out, &publisher, role, &ctx.photo);
        }
        if let Some(city) = rep.get("PDFL") {
            let location = place(out, publisher.child("location"), city);
            out.link(&step, crm::P7_TOOK_PLACE_AT, &location);
        }
        if let Some(year) = rep.get("PDFD") {
            let timespan = step.child("date");
            out.typed(&timespan, crm::E52_TIME_SPAN);
            time_appellation(out, &timespan, &timespan.child("year"), year);
            out.link(&step, crm::P4_HAS_TIME_SPAN, &timespan);
        }
    }
}

pub(super) fn map_negative(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    for rep in group.repetitions() {
        let Some(negative_id) = rep.get("ROFI") else {
            continue;
        };
        let step = ctx.open_step(out);
        let negative = term_key(base::NEGATIVE, negative_id);
        out.typed(&negative, crm::E22_MAN_MADE_OBJECT);
        out.literal(&negative, crm::P1_IS_IDENTIFIED_BY, negative_id);
        out.link(&step, crm::P16_USED_SPECIFIC_OBJECT, &negative);

        if let Some(location) = rep.get("ROFC") {
            let held_at = place(out, negative.child("location"), location);
            out.link(&negative, crm::P55_HAS_CURRENT_LOCATION, &held_at);
        }
        if let Some(kind) = rep.get("ROFO") {
            let negative_type = term_key(base::PHOTO_TYPE, kind);
            type_term(out, &negative_type, kind);
            out.link(&negative, crm::P2_HAS_TYPE, &negative_type);
        }
    }
}

/// PLACE AND DATE OF THE SHOT: the creation of the photograph itself.
pub(super) fn map_shot(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let creation = ctx.photo.child("creation");
    out.typed(&creation, crm::E65_CREATION);
    out.link(&creation, crm::P94_CREATED, &ctx.photo);

    if let Some(year) = group.get("LRD") {
        let timespan = creation.child("date");
        out.typed(&timespan, crm::E52_TIME_SPAN);
        time_appellation(out, &timespan, &timespan.child("year"), year);
        out.link(&creation, crm::P4_HAS_TIME_SPAN, &timespan);
    }

    let country = group
        .get("LRCS")
        .map(|text| place(out, creation.child("country"), text));
    let village = group
        .get("LRCC")
        .or_else(|| group.get("LRA"))
        .map(|text| place(out, creation.child("village"), text));

    if let (Some(village), Some(country)) = (&village, &country) {
        out.link(village, crm::P89_FALLS_WITHIN, country);
    }
    if let Some(site) = village.as_ref().or(country.as_ref()) {
        out.link(&creation, crm::P7_TOOK_PLACE_AT, site);
    }

    if let Some(occasion) = group.get("LRO") {
        let period = creation.child("occasion");
        labelled(out, &period, crm::E4_PERIOD, occasion);
        out.link(&creation, crm::P10_FALLS_WITHIN, &period);
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

/// Proper or corporate name, shared across records by its text.
fn actor_name(out: &mut Emitter, actor: &NodeId, name: &str) {
    let appellation = content_key(base::ACTOR_NAME, name);
    labelled(out, &appellation, crm::E82_ACTOR_APPELLATION, name);
    out.link(actor, crm::P131_IS_IDENTIFIED_BY, &appellation);
}

fn contact_point(out: &mut Emitter, actor: &NodeId, text: &str) {
    let address = actor.child("address");
    labelled(out, &address, crm::E51_CONTACT_POINT, text);
    out.link(actor, crm::P76_HAS_CONTACT_POINT, &address);
}

fn assign_attribute(out: &mut Emitter, assignment: &NodeId, assigned: &NodeId, step: &NodeId) {
    out.typed(assignment, crm::E13_ATTRIBUTE_ASSIGNMENT);
    out.link(assignment, crm::P141_ASSIGNED, assigned);
    out.link(assignment, crm::P140_ASSIGNED_ATTRIBUTE_TO, step);
}

/// Motivation and evidence fields share one attribute assignment per step.
fn attribution_evidence(
    out: &mut Emitter,
    assignment: &mut LazyNode,
    actor: &NodeId,
    step: &NodeId,
    rep: &Repetition<'_>,
    (motivation_code, evidence_code): (&str, &str),
) {
    if let Some(motivation) = rep.get(motivation_code) {
        let node = assignment.get_or_init(out, |node, out| assign_attribute(out, node, actor, step));
        out.literal(node, crm::P17_WAS_MOTIVATED_BY, motivation);
    }
    if let Some(evidence) = rep.get(evidence_code) {
        let node = assignment.get_or_init(out, |node, out| assign_attribute(out, node, actor, step));
        out.literal(node, crm::P16_USED_SPECIFIC_OBJECT_LITERAL, evidence);
    }
}

fn holds_role(out: &mut Emitter, actor: &NodeId, role_name: &str, photo: &NodeId) {
    out.typed(actor, foaf::AGENT);
    out.typed(photo, foaf::DOCUMENT);
    let role = actor.child("role");
    out.typed(&role, pro::ROLE_IN_TIME);
    out.literal(&role, pro::WITH_ROLE, role_name);
    out.relate(&role, pro::RELATES_TO_DOCUMENT, photo);
    out.relate(actor, pro::HOLDS_ROLE_IN_TIME, &role);
}
