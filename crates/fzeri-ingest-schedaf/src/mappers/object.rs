//! The physical photograph: description, dimensions, condition, and the
//! larger object it belongs to.

use super::{labelled, type_term, RecordContext};
use fzeri_core::identity::{content_key, term_key};
use fzeri_core::vocab::{base, crm, dc, xsd};
use fzeri_core::{Emitter, FlatGroup, NodeId};

/// Dimension field code and the dimension kind it measures.
const DIMENSIONS: [(&str, &str); 3] = [("MISA", "height"), ("MISL", "width"), ("MISD", "diameter")];

pub(super) fn map_object(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let photo = &ctx.photo;

    if let Some(kind) = group.get("OGTD") {
        out.literal(photo, crm::P2_HAS_TYPE_LITERAL, kind);
    }
    if let Some(parts) = group.get("QNTN") {
        if parts.parse::<u64>().is_ok() {
            out.typed_literal(photo, crm::P57_HAS_NUMBER_OF_PARTS, parts, xsd::INTEGER);
        } else {
            out.literal(photo, crm::P57_HAS_NUMBER_OF_PARTS, parts);
        }
    }
    if let Some(kind) = group.get("OGTB") {
        out.literal(photo, dc::TYPE, kind);
    }
    if let Some(format) = group.get("OGTS") {
        out.relate(photo, dc::FORMAT, &term_key(base::PHOTO_FORMAT, format));
    }
    if let Some(color) = group.get("MTX") {
        out.relate(photo, dc::FORMAT, &term_key(base::PHOTO_COLOR, color));
    }
    if let Some(material) = group.get("MTC") {
        out.link(photo, crm::P45_CONSISTS_OF, &term_key(base::MATERIAL, material));
    }

    let unit = group
        .get("MISU")
        .and_then(|code| ctx.tables.unit_to_ontology_term(code))
        .map(NodeId::from_iri);
    let qualifier = group.get("MISO").map(|q| term_key(base::DIMENSION, q));

    for (code, kind) in DIMENSIONS {
        let Some(value) = group.get(code) else {
            continue;
        };
        let dimension = photo.child(kind);
        out.typed(&dimension, crm::E54_DIMENSION);
        let dimension_type = NodeId::from_iri(format!("{}{kind}", base::DIMENSION));
        out.link(&dimension, crm::P2_HAS_TYPE, &dimension_type);
        out.literal(&dimension, crm::P90_HAS_VALUE, value);
        if let Some(unit) = &unit {
            out.link(&dimension, crm::P91_HAS_UNIT, unit);
        }
        if let Some(qualifier) = &qualifier {
            out.link(&dimension, crm::P2_HAS_TYPE, qualifier);
        }
        out.link(photo, crm::P43_HAS_DIMENSION, &dimension);
    }
}

pub(super) fn map_preservation(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let condition = ctx.photo.child("condition");
    out.typed(&condition, crm::E3_CONDITION_STATE);
    out.link(&ctx.photo, crm::P44_HAS_CONDITION, &condition);

    if let Some(state) = group.get("STCS") {
        out.label(&condition, state);
    }
    if let Some(grade) = group.get("STCC") {
        let condition_type = term_key(base::CONDITION_TYPE, grade);
        type_term(out, &condition_type, grade);
        out.link(&condition, crm::P2_HAS_TYPE, &condition_type);
    }
}

pub(super) fn map_related_objects(ctx: &mut RecordContext<'_>, group: &FlatGroup, out: &mut Emitter) {
    let Some(description) = group.get("OGTI") else {
        return;
    };
    let whole = content_key(base::COLLECTION, description);
    labelled(out, &whole, crm::E18_PHYSICAL_THING, description);
    out.link(&whole, crm::P46_IS_COMPOSED_OF, &ctx.photo);
}

#[cfg(test)]
mod tests {
    use crate::mappers::SCHEDA_F_V1;
    use fzeri_core::identity::content_key;
    use fzeri_core::vocab::{base, crm, xsd};
    use fzeri_core::{ConversionTables, FieldGroup, FlatGroup, FlatRecord, Graph, NodeId, Object};
    use std::collections::BTreeMap;

    const PHOTO: &str = "http://fe.fondazionezeri.unibo.it/catalogo/schedaF/67680/photo";

    fn map(group: FieldGroup, flat: FlatGroup) -> Graph {
        let mut groups = BTreeMap::new();
        groups.insert(group, flat);
        let record = FlatRecord::new("67680", None, groups);
        SCHEDA_F_V1
            .map_record(&record, &ConversionTables::new())
            .into_statements()
            .into_iter()
            .collect()
    }

    fn photo() -> NodeId {
        NodeId::from_iri(PHOTO)
    }

    #[test]
    fn dimensions_carry_value_type_and_known_unit() {
        let mut object = FlatGroup::new();
        object.set_scalar("MISA", "215");
        object.set_scalar("MISL", "165");
        object.set_scalar("MISU", "mm");
        object.set_scalar("MISO", "supporto primario");
        let graph = map(FieldGroup::Object, object);

        let height = photo().child("height");
        let width = photo().child("width");
        assert_eq!(graph.instances_of(crm::E54_DIMENSION).count(), 2);
        assert!(graph.has_literal(&height, crm::P90_HAS_VALUE, "215"));
        assert!(graph.has_edge(&photo(), crm::P43_HAS_DIMENSION.forward, &width));
        assert!(graph.has_edge(&width, crm::P43_HAS_DIMENSION.inverse, &photo()));
        let millimeter = NodeId::from_iri("http://qudt.org/vocab/unit#Millimeter");
        assert!(graph.has_edge(&height, crm::P91_HAS_UNIT.forward, &millimeter));
        assert!(graph.has_edge(&millimeter, crm::P91_HAS_UNIT.inverse, &height));
        let qualifier = NodeId::from_iri(format!("{}supporto+primario", base::DIMENSION));
        assert!(graph.has_edge(&height, crm::P2_HAS_TYPE.forward, &qualifier));
    }

    #[test]
    fn unknown_unit_emits_no_unit_statement() {
        let mut object = FlatGroup::new();
        object.set_scalar("MISD", "240");
        object.set_scalar("MISU", "pollici");
        let graph = map(FieldGroup::Object, object);

        let diameter = photo().child("diameter");
        assert!(graph.has_literal(&diameter, crm::P90_HAS_VALUE, "240"));
        assert!(graph.objects(&diameter, crm::P91_HAS_UNIT.forward).next().is_none());
    }

    #[test]
    fn missing_dimensions_produce_no_dimension_nodes() {
        let mut object = FlatGroup::new();
        object.set_scalar("OGTD", "positivo");
        object.set_scalar("MISU", "mm");
        let graph = map(FieldGroup::Object, object);

        assert_eq!(graph.instances_of(crm::E54_DIMENSION).count(), 0);
        assert!(graph.has_literal(&photo(), crm::P2_HAS_TYPE_LITERAL, "positivo"));
    }

    #[test]
    fn numeric_part_count_is_typed() {
        let mut object = FlatGroup::new();
        object.set_scalar("QNTN", "3");
        let graph = map(FieldGroup::Object, object);
        let subject = photo();
        let parts: Vec<_> = graph
            .objects(&subject, crm::P57_HAS_NUMBER_OF_PARTS)
            .filter_map(Object::as_literal)
            .collect();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].lexical, "3");
        assert_eq!(parts[0].datatype.as_deref(), Some(xsd::INTEGER));
    }

    #[test]
    fn related_object_is_shared_by_description() {
        let mut related = FlatGroup::new();
        related.set_scalar("OGTI", "Collage di fotografie");
        related.set_scalar("RVEL", "2");
        let graph = map(FieldGroup::RelatedObjects, related);

        let whole = content_key(base::COLLECTION, "Collage di fotografie");
        assert!(graph.has_edge(&whole, crm::P46_IS_COMPOSED_OF.forward, &photo()));
        assert!(graph.has_edge(&photo(), crm::P46_IS_COMPOSED_OF.inverse, &whole));
    }
}
