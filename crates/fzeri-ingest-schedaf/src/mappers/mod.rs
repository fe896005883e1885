//! Entity mappers and the versioned mapping table.
//!
//! Each field group is handled by exactly one [`GroupMapper`]. The table, not
//! the source document, decides the order in which groups are mapped; this
//! matters for production steps, which share one per-record counter.

mod entry;
mod image;
mod location;
mod object;
mod production;
mod provenance;
mod subject;

use fzeri_core::identity::natural_key;
use fzeri_core::vocab::{base, crm, time};
use fzeri_core::{ConversionTables, Emitter, FieldGroup, FlatGroup, FlatRecord, NodeId};

pub type GroupMapper = fn(&mut RecordContext<'_>, &FlatGroup, &mut Emitter);

/// Field group to mapper, in execution order.
#[derive(Debug, Clone, Copy)]
pub struct MappingTable {
    pub version: &'static str,
    pub entries: &'static [(FieldGroup, GroupMapper)],
}

const SCHEDA_F_V1_ENTRIES: [(FieldGroup, GroupMapper); 21] = [
    (FieldGroup::Copyright, entry::map_copyright),
    (FieldGroup::Notes, entry::map_notes),
    (FieldGroup::Supervisor, entry::map_supervisor),
    (FieldGroup::Classification, location::map_classification),
    (FieldGroup::Ownership, entry::map_ownership),
    (FieldGroup::Codes, entry::map_codes),
    (FieldGroup::Cataloguing, entry::map_cataloguing),
    (FieldGroup::Updating, entry::map_updating),
    (FieldGroup::Object, object::map_object),
    (FieldGroup::Subject, subject::map_subject),
    (FieldGroup::Author, subject::map_author),
    // Production steps: dating, photographer, publisher, negative.
    (FieldGroup::Dating, production::map_dating),
    (FieldGroup::Photographer, production::map_photographer),
    (FieldGroup::Publishing, production::map_publishing),
    (FieldGroup::Negative, production::map_negative),
    (FieldGroup::ShotPlaceAndDate, production::map_shot),
    (FieldGroup::DigitalImage, image::map_digital_image),
    (FieldGroup::Provenance, provenance::map_provenance),
    (FieldGroup::Location, location::map_location),
    (FieldGroup::Preservation, object::map_preservation),
    (FieldGroup::RelatedObjects, object::map_related_objects),
];

pub const SCHEDA_F_V1: MappingTable = MappingTable {
    version: "schedaF-v1",
    entries: &SCHEDA_F_V1_ENTRIES,
};

impl Default for MappingTable {
    fn default() -> Self {
        SCHEDA_F_V1
    }
}

impl MappingTable {
    pub fn mapper_for(&self, group: FieldGroup) -> Option<GroupMapper> {
        self.entries
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, mapper)| *mapper)
    }

    /// Map one flattened record. The entry skeleton (document, title, photo,
    /// production) is always emitted; group mappers run only for groups the
    /// record carries.
    pub fn map_record(&self, record: &FlatRecord, tables: &ConversionTables) -> Emitter {
        let mut ctx = RecordContext::new(record, tables);
        let mut out = Emitter::new();
        entry::map_entry(&ctx, &mut out);
        for (group, mapper) in self.entries {
            if let Some(flat) = record.group(*group) {
                mapper(&mut ctx, flat, &mut out);
            }
        }
        out
    }
}

// ============================================================================
// Per-record context
// ============================================================================

/// Production step numbering for one record. Starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    next: u32,
}

impl Default for StepCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl StepCounter {
    pub fn advance(&mut self) -> u32 {
        let step = self.next;
        self.next += 1;
        step
    }

    /// Steps handed out so far.
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

/// State owned by one record-mapping call and dropped with it.
#[derive(Debug)]
pub struct RecordContext<'a> {
    pub record: &'a FlatRecord,
    pub tables: &'a ConversionTables,
    pub entry: NodeId,
    pub photo: NodeId,
    pub production: NodeId,
    steps: StepCounter,
}

impl<'a> RecordContext<'a> {
    pub fn new(record: &'a FlatRecord, tables: &'a ConversionTables) -> Self {
        let entry = natural_key(base::ENTRY, &record.entry_id, "");
        let photo = entry.child("photo");
        let production = photo.child("production");
        Self {
            record,
            tables,
            entry,
            photo,
            production,
            steps: StepCounter::default(),
        }
    }

    pub fn entry_id(&self) -> &str {
        &self.record.entry_id
    }

    /// The schedaOA entry this photo documents, if any.
    pub fn artwork_id(&self) -> Option<&'a str> {
        self.record.find("SERCDOA")
    }

    /// Open the next production step below the shared production node.
    pub fn open_step(&mut self, out: &mut Emitter) -> NodeId {
        let step = self.production.child(&self.steps.advance().to_string());
        out.typed(&step, crm::E12_PRODUCTION);
        out.link(&self.production, crm::P9_CONSISTS_OF, &step);
        step
    }

    pub fn steps_issued(&self) -> u32 {
        self.steps.issued()
    }
}

/// A node created on first use and reused for the rest of its scope.
#[derive(Debug)]
pub struct LazyNode {
    id: NodeId,
    created: bool,
}

impl LazyNode {
    pub fn new(id: NodeId) -> Self {
        Self { id, created: false }
    }

    pub fn get_or_init(
        &mut self,
        out: &mut Emitter,
        init: impl FnOnce(&NodeId, &mut Emitter),
    ) -> &NodeId {
        if !self.created {
            init(&self.id, out);
            self.created = true;
        }
        &self.id
    }

    pub fn is_created(&self) -> bool {
        self.created
    }
}

// ============================================================================
// Shared emission helpers
// ============================================================================

pub(crate) fn labelled(out: &mut Emitter, node: &NodeId, class: &str, text: &str) {
    out.typed(node, class);
    out.label(node, text);
}

/// A thesaurus term typed `E55_Type` and labelled with its source text.
pub(crate) fn type_term(out: &mut Emitter, term: &NodeId, text: &str) {
    labelled(out, term, crm::E55_TYPE, text);
}

/// `E49_Time_Appellation` identifying `timespan`.
pub(crate) fn time_appellation(out: &mut Emitter, timespan: &NodeId, node: &NodeId, text: &str) {
    labelled(out, node, crm::E49_TIME_APPELLATION, text);
    out.link(timespan, crm::P78_IS_IDENTIFIED_BY, node);
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Boundary {
    Begin,
    End,
}

/// A `time:Instant` bounding `timespan`.
pub(crate) fn instant(out: &mut Emitter, timespan: &NodeId, boundary: Boundary, text: &str) {
    let (segment, predicate) = match boundary {
        Boundary::Begin => ("begin", time::HAS_BEGINNING),
        Boundary::End => ("end", time::HAS_END),
    };
    let node = timespan.child(segment);
    out.typed(&node, time::INSTANT);
    out.literal(&node, time::IN_XSD_DATE_TIME, text);
    out.typed(timespan, time::TEMPORAL_ENTITY);
    out.relate(timespan, predicate, &node);
}

/// Nest `innermost` into each present container in turn, skipping absent
/// levels.
pub(crate) fn nest_skipping_absent(out: &mut Emitter, innermost: &NodeId, containers: &[Option<NodeId>]) {
    let mut contained = innermost;
    for container in containers.iter().flatten() {
        out.link(container, crm::P59_HAS_SECTION, contained);
        contained = container;
    }
}

/// Place labelled with `text`, typed `E53_Place`.
pub(crate) fn place(out: &mut Emitter, node: NodeId, text: &str) -> NodeId {
    labelled(out, &node, crm::E53_PLACE, text);
    node
}
