use super::{instant, nest_skipping_absent, place, Boundary, RecordContext};
use fzeri_core::vocab::crm;
use fzeri_core::{Emitter, FlatGroup};

/// One former location and the move that brought the photograph there, per
/// repetition.
pub(super) fn map_provenance(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let photo = &ctx.photo;
    let provenances = photo.child("provenance");

    for rep in group.repetitions() {
        let provenance = provenances.child(&rep.index.to_string());
        out.typed(&provenance, crm::E53_PLACE);
        out.link(photo, crm::P53_HAS_FORMER_OR_CURRENT_LOCATION, &provenance);

        let movement = provenance.child("move");
        out.typed(&movement, crm::E9_MOVE);
        let timespan = movement.child("date");
        out.typed(&timespan, crm::E52_TIME_SPAN);
        out.link(&movement, crm::P4_HAS_TIME_SPAN, &timespan);
        out.link(&movement, crm::P26_MOVED_TO, &provenance);
        out.link(&movement, crm::P25_MOVED, photo);

        if let Some(begin) = rep.get("PRDI") {
            instant(out, &timespan, Boundary::Begin, begin);
        }
        if let Some(end) = rep.get("PRDU") {
            instant(out, &timespan, Boundary::End, end);
        }

        if let Some(name) = rep.get("PRCM") {
            let collection = provenance.child("collection");
            out.typed(&collection, crm::E46_SECTION_DEFINITION);
            out.label(&collection, name);
            out.link(&provenance, crm::P87_IS_IDENTIFIED_BY, &collection);
        }

        let repository = rep
            .get("PRCD")
            .map(|text| place(out, provenance.child("repository"), text));
        let town = rep
            .get("PRVC")
            .or_else(|| rep.get("PRL"))
            .map(|text| place(out, provenance.child("town"), text));
        let district = rep
            .get("PRVP")
            .map(|text| place(out, provenance.child("district"), text));
        let country = rep
            .get("PRVS")
            .map(|text| place(out, provenance.child("country"), text));

        nest_skipping_absent(out, &provenance, &[repository, town, district, country]);
    }
}
