//! Namespaces and ontology terms used by the schedaF mapping.
//!
//! The `fe.fondazionezeri.unibo.it` base paths are part of the identifier
//! contract: every derived node id starts with one of them, so changing a base
//! path orphans every graph emitted before the change.
//!
//! CIDOC-CRM object properties are exposed as [`Link`]s (forward + inverse)
//! so that mappers cannot emit one direction and forget the other.

use crate::graph::{Emitter, NodeId};

macro_rules! crm {
    ($local:literal) => {
        concat!("http://www.cidoc-crm.org/cidoc-crm/", $local)
    };
}

macro_rules! fzeri {
    ($path:literal) => {
        concat!("http://fe.fondazionezeri.unibo.it/", $path)
    };
}

/// A property together with its declared inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub forward: &'static str,
    pub inverse: &'static str,
}

impl Link {
    pub const fn new(forward: &'static str, inverse: &'static str) -> Self {
        Self { forward, inverse }
    }
}

// ============================================================================
// Namespaces
// ============================================================================

pub mod ns {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const CRM: &str = "http://www.cidoc-crm.org/cidoc-crm/";
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    pub const PRO: &str = "http://purl.org/spar/pro/";
    pub const TIME: &str = "http://www.w3.org/2006/time#";
    pub const FABIO: &str = "http://purl.org/spar/fabio/";
    pub const FRBR: &str = "http://purl.org/vocab/frbr/core#";
    pub const FENTRY: &str = "http://www.essepuntato.it/2014/03/fentry/";
    pub const QUDT: &str = "http://qudt.org/vocab/unit#";
    pub const FZERI_THESAURI: &str = fzeri!("thesauri/");

    /// Prefix bindings offered to serializers that support them.
    pub const PREFIXES: &[(&str, &str)] = &[
        ("rdf", RDF),
        ("rdfs", RDFS),
        ("xsd", XSD),
        ("crm", CRM),
        ("dc", DC),
        ("dcterms", DCTERMS),
        ("foaf", FOAF),
        ("pro", PRO),
        ("time", TIME),
        ("fabio", FABIO),
        ("frbr", FRBR),
        ("fentry", FENTRY),
        ("qudt", QUDT),
        ("fzeriThes", FZERI_THESAURI),
    ];
}

/// Stable base paths for derived identifiers.
pub mod base {
    pub const ENTRY: &str = fzeri!("catalogo/schedaF/");
    pub const OA_ENTRY: &str = fzeri!("catalogo/schedaOA/");
    pub const NEGATIVE: &str = fzeri!("catalogo/negative/");
    pub const DIGITAL_IMAGE: &str = fzeri!("foto/");
    pub const COLLECTION: &str = fzeri!("collection/");

    pub const DIMENSION: &str = fzeri!("thesauri/dimension/");
    pub const SERIE: &str = fzeri!("thesauri/serie/");
    pub const BOX: &str = fzeri!("thesauri/box/");
    pub const ISSUE: &str = fzeri!("thesauri/issue/");
    pub const MATERIAL: &str = fzeri!("thesauri/material/");
    pub const ENTRY_TYPE: &str = fzeri!("thesauri/entry_type/");
    pub const IDENTIFIER: &str = fzeri!("thesauri/identifier/");
    pub const PHOTO_FORMAT: &str = fzeri!("thesauri/photo_format/");
    pub const PHOTO_COLOR: &str = fzeri!("thesauri/photo_color/");
    pub const PHOTO_TYPE: &str = fzeri!("thesauri/photo_type/");
    pub const CONDITION_TYPE: &str = fzeri!("thesauri/condition_type/");
    pub const SUBJECT: &str = fzeri!("thesauri/subject/");
    pub const TITLE: &str = fzeri!("thesauri/title/");
    pub const ACTOR_NAME: &str = fzeri!("thesauri/actor_name/");
}

// ============================================================================
// Terms
// ============================================================================

pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
}

pub mod rdfs {
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    pub const LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";
}

pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

pub mod dc {
    pub const TYPE: &str = "http://purl.org/dc/elements/1.1/type";
    pub const FORMAT: &str = "http://purl.org/dc/elements/1.1/format";
}

pub mod dcterms {
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
}

pub mod foaf {
    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
    pub const DOCUMENT: &str = "http://xmlns.com/foaf/0.1/Document";
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
}

pub mod pro {
    pub const ROLE_IN_TIME: &str = "http://purl.org/spar/pro/roleInTime";
    pub const WITH_ROLE: &str = "http://purl.org/spar/pro/withRole";
    pub const RELATES_TO_DOCUMENT: &str = "http://purl.org/spar/pro/relatesToDocument";
    pub const HOLDS_ROLE_IN_TIME: &str = "http://purl.org/spar/pro/holdsRoleInTime";
}

pub mod time {
    pub const INSTANT: &str = "http://www.w3.org/2006/time#Instant";
    pub const TEMPORAL_ENTITY: &str = "http://www.w3.org/2006/time#TemporalEntity";
    pub const IN_XSD_DATE_TIME: &str = "http://www.w3.org/2006/time#inXSDDateTime";
    pub const HAS_BEGINNING: &str = "http://www.w3.org/2006/time#hasBeginning";
    pub const HAS_END: &str = "http://www.w3.org/2006/time#hasEnd";
}

pub mod fabio {
    pub const DIGITAL_MANIFESTATION: &str = "http://purl.org/spar/fabio/DigitalManifestation";
    pub const COMPUTER_FILE: &str = "http://purl.org/spar/fabio/ComputerFile";
    pub const HAS_MANIFESTATION: &str = "http://purl.org/spar/fabio/hasManifestation";
}

pub mod frbr {
    pub const EXEMPLAR: &str = "http://purl.org/vocab/frbr/core#exemplar";
}

pub mod fentry {
    use super::Link;

    pub const F_ENTRY: &str = "http://www.essepuntato.it/2014/03/fentry/FEntry";
    pub const PHOTOGRAPH: &str = "http://www.essepuntato.it/2014/03/fentry/Photograph";
    pub const DESCRIBES: &str = "http://www.essepuntato.it/2014/03/fentry/describes";

    pub const HAS_PROPER_TITLE: Link = Link::new(
        "http://www.essepuntato.it/2014/03/fentry/hasProperTitle",
        "http://www.essepuntato.it/2014/03/fentry/isProperTitleOf",
    );
    pub const HAS_PARALLEL_TITLE: Link = Link::new(
        "http://www.essepuntato.it/2014/03/fentry/hasParallelTitle",
        "http://www.essepuntato.it/2014/03/fentry/isParallelTitleOf",
    );
    pub const HAS_ATTRIBUTED_TITLE: Link = Link::new(
        "http://www.essepuntato.it/2014/03/fentry/hasAttributedTitle",
        "http://www.essepuntato.it/2014/03/fentry/isAttributedTitleOf",
    );
    pub const HAS_CULTURAL_CONTEXT: Link = Link::new(
        "http://www.essepuntato.it/2014/03/fentry/hasCulturalContext",
        "http://www.essepuntato.it/2014/03/fentry/isCulturalContextOf",
    );
}

pub mod crm {
    use super::Link;

    // Classes
    pub const E1_CRM_ENTITY: &str = crm!("E1_CRM_Entity");
    pub const E3_CONDITION_STATE: &str = crm!("E3_Condition_State");
    pub const E4_PERIOD: &str = crm!("E4_Period");
    pub const E8_ACQUISITION: &str = crm!("E8_Acquisition");
    pub const E9_MOVE: &str = crm!("E9_Move");
    pub const E12_PRODUCTION: &str = crm!("E12_Production");
    pub const E13_ATTRIBUTE_ASSIGNMENT: &str = crm!("E13_Attribute_Assignment");
    pub const E18_PHYSICAL_THING: &str = crm!("E18_Physical_Thing");
    pub const E22_MAN_MADE_OBJECT: &str = crm!("E22_Man-Made_Object");
    pub const E30_RIGHT: &str = crm!("E30_Right");
    pub const E31_DOCUMENT: &str = crm!("E31_Document");
    pub const E35_TITLE: &str = crm!("E35_Title");
    pub const E38_IMAGE: &str = crm!("E38_Image");
    pub const E39_ACTOR: &str = crm!("E39_Actor");
    pub const E40_LEGAL_BODY: &str = crm!("E40_Legal_Body");
    pub const E42_IDENTIFIER: &str = crm!("E42_Identifier");
    pub const E46_SECTION_DEFINITION: &str = crm!("E46_Section_Definition");
    pub const E49_TIME_APPELLATION: &str = crm!("E49_Time_Appellation");
    pub const E51_CONTACT_POINT: &str = crm!("E51_Contact_Point");
    pub const E52_TIME_SPAN: &str = crm!("E52_Time-Span");
    pub const E53_PLACE: &str = crm!("E53_Place");
    pub const E54_DIMENSION: &str = crm!("E54_Dimension");
    pub const E55_TYPE: &str = crm!("E55_Type");
    pub const E62_STRING: &str = crm!("E62_String");
    pub const E65_CREATION: &str = crm!("E65_Creation");
    pub const E71_MAN_MADE_THING: &str = crm!("E71_Man-Made_Thing");
    pub const E81_TRANSFORMATION: &str = crm!("E81_Transformation");
    pub const E82_ACTOR_APPELLATION: &str = crm!("E82_Actor_Appellation");

    // Properties with literal objects
    pub const P1_IS_IDENTIFIED_BY: &str = crm!("P1_is_identified_by");
    pub const P2_HAS_TYPE_LITERAL: &str = crm!("P2_has_type");
    pub const P3_HAS_NOTE: &str = crm!("P3_has_note");
    pub const P16_USED_SPECIFIC_OBJECT_LITERAL: &str = crm!("P16_used_specific_object");
    pub const P17_WAS_MOTIVATED_BY: &str = crm!("P17_was_motivated_by");
    pub const P54_LOCATION_LITERAL: &str = crm!("P54_has_current_permanent_location");
    pub const P57_HAS_NUMBER_OF_PARTS: &str = crm!("P57_has_number_of_parts");
    pub const P79_BEGINNING_IS_QUALIFIED_BY: &str = crm!("P79_beginning_is_qualified_by");
    pub const P80_END_IS_QUALIFIED_BY: &str = crm!("P80_end_is_qualified_by");
    pub const P87_IS_IDENTIFIED_BY_LITERAL: &str = crm!("P87_is_identified_by");
    pub const P90_HAS_VALUE: &str = crm!("P90_has_value");

    // Sub-properties declared by the ontology preamble
    pub const P3_1_CULTURAL_CONTEXT: &str = crm!("P3_1_cultural_context");
    pub const P82_AT_SOME_TIME_WITHIN: &str = crm!("P82_at_some_time_within");
    pub const P82A_BEGIN_OF_THE_BEGIN: &str = crm!("P82a_begin_of_the_begin");
    pub const P82B_END_OF_THE_END: &str = crm!("P82b_end_of_the_end");
    pub const P102_1_TITLE_TYPE: &str = crm!("P102_1_title_type");

    // Properties with declared inverses
    pub const P2_HAS_TYPE: Link = Link::new(crm!("P2_has_type"), crm!("P2i_is_type_of"));
    pub const P4_HAS_TIME_SPAN: Link =
        Link::new(crm!("P4_has_time-span"), crm!("P4i_is_time-span_of"));
    pub const P7_TOOK_PLACE_AT: Link = Link::new(crm!("P7_took_place_at"), crm!("P7i_witnessed"));
    pub const P9_CONSISTS_OF: Link = Link::new(crm!("P9_consists_of"), crm!("P9i_forms_part_of"));
    pub const P10_FALLS_WITHIN: Link = Link::new(crm!("P10_falls_within"), crm!("P10i_contains"));
    pub const P11_HAD_PARTICIPANT: Link =
        Link::new(crm!("P11_had_participant"), crm!("P11i_participated_in"));
    pub const P14_CARRIED_OUT_BY: Link =
        Link::new(crm!("P14_carried_out_by"), crm!("P14i_performed"));
    pub const P14A_CARRIED_OUT_AS_PUBLISHER_BY: Link =
        Link::new(crm!("P14a_carried_out_as_publisher_by"), crm!("P14i_performed"));
    pub const P14B_CARRIED_OUT_AS_CUSTOMER_BY: Link =
        Link::new(crm!("P14b_carried_out_as_customer_by"), crm!("P14i_performed"));
    pub const P14C_CARRIED_OUT_AS_DISTRIBUTOR_BY: Link =
        Link::new(crm!("P14c_carried_out_as_distributor_by"), crm!("P14i_performed"));
    pub const P16_USED_SPECIFIC_OBJECT: Link =
        Link::new(crm!("P16_used_specific_object"), crm!("P16i_was_used_for"));
    pub const P22_TRANSFERRED_TITLE_TO: Link =
        Link::new(crm!("P22_transferred_title_to"), crm!("P22i_acquired_title_through"));
    pub const P24_TRANSFERRED_TITLE_OF: Link = Link::new(
        crm!("P24_transferred_title_of"),
        crm!("P24i_changed_ownership_through"),
    );
    pub const P25_MOVED: Link = Link::new(crm!("P25_moved"), crm!("P25i_moved_by"));
    pub const P26_MOVED_TO: Link =
        Link::new(crm!("P26_moved_to"), crm!("P26i_was_destination_of"));
    pub const P43_HAS_DIMENSION: Link =
        Link::new(crm!("P43_has_dimension"), crm!("P43i_is_dimension_of"));
    pub const P44_HAS_CONDITION: Link =
        Link::new(crm!("P44_has_condition"), crm!("P44i_is_condition_of"));
    pub const P45_CONSISTS_OF: Link =
        Link::new(crm!("P45_consists_of"), crm!("P45i_is_incorporated_in"));
    pub const P46_IS_COMPOSED_OF: Link =
        Link::new(crm!("P46_is_composed_of"), crm!("P46i_forms_part_of"));
    pub const P48_HAS_PREFERRED_IDENTIFIER: Link = Link::new(
        crm!("P48_has_preferred_identifier"),
        crm!("P48i_is_preferred_identifier_of"),
    );
    pub const P50_HAS_CURRENT_KEEPER: Link =
        Link::new(crm!("P50_has_current_keeper"), crm!("P50i_is_current_keeper_of"));
    pub const P53_HAS_FORMER_OR_CURRENT_LOCATION: Link = Link::new(
        crm!("P53_has_former_or_current_location"),
        crm!("P53i_is_former_or_current_location_of"),
    );
    pub const P54_HAS_CURRENT_PERMANENT_LOCATION: Link = Link::new(
        crm!("P54_has_current_permanent_location"),
        crm!("P54i_is_current_permanent_location_of"),
    );
    pub const P55_HAS_CURRENT_LOCATION: Link = Link::new(
        crm!("P55_has_current_location"),
        crm!("P55i_is_current_location_of"),
    );
    pub const P59_HAS_SECTION: Link =
        Link::new(crm!("P59_has_section"), crm!("P59i_is_located_on_or_within"));
    pub const P62_DEPICTS: Link = Link::new(crm!("P62_depicts"), crm!("P62i_is_depicted_by"));
    pub const P67_REFERS_TO: Link =
        Link::new(crm!("P67_refers_to"), crm!("P67i_is_referred_to_by"));
    pub const P70_DOCUMENTS: Link =
        Link::new(crm!("P70_documents"), crm!("P70i_is_documented_in"));
    pub const P76_HAS_CONTACT_POINT: Link =
        Link::new(crm!("P76_has_contact_point"), crm!("P76i_provides_access_to"));
    pub const P78_IS_IDENTIFIED_BY: Link =
        Link::new(crm!("P78_is_identified_by"), crm!("P78i_identifies"));
    pub const P87_IS_IDENTIFIED_BY: Link =
        Link::new(crm!("P87_is_identified_by"), crm!("P87i_identifies"));
    pub const P89_FALLS_WITHIN: Link = Link::new(crm!("P89_falls_within"), crm!("P89i_contains"));
    pub const P91_HAS_UNIT: Link = Link::new(crm!("P91_has_unit"), crm!("P91i_is_unit_of"));
    pub const P94_CREATED: Link = Link::new(crm!("P94_created"), crm!("P94i_was_created_by"));
    pub const P102_HAS_TITLE: Link = Link::new(crm!("P102_has_title"), crm!("P102i_is_title_of"));
    pub const P104_IS_SUBJECT_TO: Link =
        Link::new(crm!("P104_is_subject_to"), crm!("P104i_applies_to"));
    pub const P108_PRODUCED: Link =
        Link::new(crm!("P108_produced"), crm!("P108i_was_produced_by"));
    pub const P124_TRANSFORMED: Link =
        Link::new(crm!("P124_transformed"), crm!("P124i_was_transformed_by"));
    pub const P131_IS_IDENTIFIED_BY: Link =
        Link::new(crm!("P131_is_identified_by"), crm!("P131i_identifies"));
    pub const P138_REPRESENTS: Link =
        Link::new(crm!("P138_represents"), crm!("P138i_has_representation"));
    pub const P140_ASSIGNED_ATTRIBUTE_TO: Link = Link::new(
        crm!("P140_assigned_attribute_to"),
        crm!("P140i_was_attributed_by"),
    );
    pub const P141_ASSIGNED: Link = Link::new(crm!("P141_assigned"), crm!("P141i_was_assigned_by"));
    pub const P149_IS_IDENTIFIED_BY: Link =
        Link::new(crm!("P149_is_identified_by"), crm!("P149i_identifies"));
}

// ============================================================================
// Ontology preamble
// ============================================================================

/// Property declarations for the CRM sub-properties the mapping relies on
/// that are not part of the published CRM schema.
pub fn ontology_preamble(out: &mut Emitter) {
    let declarations: [(&str, &str, &str, &str); 4] = [
        (
            crm::P102_1_TITLE_TYPE,
            crm::E71_MAN_MADE_THING,
            crm::E35_TITLE,
            crm::P102_HAS_TITLE.forward,
        ),
        (
            crm::P3_1_CULTURAL_CONTEXT,
            crm::E1_CRM_ENTITY,
            rdfs::LITERAL,
            crm::P3_HAS_NOTE,
        ),
        (
            crm::P82A_BEGIN_OF_THE_BEGIN,
            crm::E52_TIME_SPAN,
            xsd::DATE_TIME,
            crm::P82_AT_SOME_TIME_WITHIN,
        ),
        (
            crm::P82B_END_OF_THE_END,
            crm::E52_TIME_SPAN,
            xsd::DATE_TIME,
            crm::P82_AT_SOME_TIME_WITHIN,
        ),
    ];

    for (property, domain, range, parent) in declarations {
        let property = NodeId::from_iri(property);
        out.typed(&property, rdf::PROPERTY);
        out.relate(&property, rdfs::DOMAIN, &NodeId::from_iri(domain));
        out.relate(&property, rdfs::RANGE, &NodeId::from_iri(range));
        out.relate(&property, rdfs::SUB_PROPERTY_OF, &NodeId::from_iri(parent));
    }
}
