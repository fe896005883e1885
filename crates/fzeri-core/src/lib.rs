//! Core model for converting schedaF catalogue records into CIDOC-CRM graphs.
//!
//! This crate is format-agnostic: it knows nothing about XML or RDF syntaxes.
//! It provides
//!
//! - the flattened record model and the field-group catalogue (`record`),
//! - deterministic identifier derivation (`identity`),
//! - vocabulary lookup tables (`tables`),
//! - namespaces, ontology terms and inverse-property pairs (`vocab`),
//! - the statement/graph model and the inverse-aware emitter (`graph`).

pub mod graph;
pub mod identity;
pub mod record;
pub mod tables;
pub mod vocab;

pub use graph::{Emitter, Graph, Literal, NodeId, Object, Statement};
pub use record::{FieldGroup, FieldValue, FlatGroup, FlatRecord, Repetition};
pub use tables::ConversionTables;
pub use vocab::Link;
