//! RDF serialization for assembled schedaF graphs.
//!
//! The mapping engine produces an [`fzeri_core::Graph`]; this crate loads it
//! into a sophia in-memory graph and hands it to sophia's serializers. Output
//! order follows the graph's sorted statement order, so the same graph always
//! serializes to the same bytes.

pub mod format;
pub mod output;

pub use format::RdfFormat;
pub use output::{per_record_path, write_combined, write_per_record};

use fzeri_core::vocab::{ns, xsd};
use fzeri_core::{Graph, Object, Statement};
use sophia::api::graph::MutableGraph;
use sophia::api::prefix::Prefix;
use sophia::api::serializer::TripleSerializer;
use sophia::api::term::SimpleTerm;
use sophia::inmem::graph::LightGraph;
use sophia::iri::{Iri, IriRef};
use sophia::turtle::serializer::nt::NtSerializer;
use sophia::turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};
use sophia::xml::serializer::RdfXmlSerializer;
use std::io::Write;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RdfWriteError {
    #[error("unknown RDF format `{0}` (expected nt, ttl or rdf)")]
    UnknownFormat(String),
    #[error("failed to load statement into RDF graph: {0}")]
    Load(String),
    #[error("failed to serialize {format}: {message}")]
    Serialize { format: RdfFormat, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Graph conversion
// ============================================================================

fn iri_term(iri: &str) -> SimpleTerm<'_> {
    SimpleTerm::Iri(IriRef::new_unchecked(iri.into()))
}

fn object_term(object: &Object) -> SimpleTerm<'_> {
    match object {
        Object::Node(node) => iri_term(node.as_str()),
        Object::Literal(lit) => {
            let datatype = lit.datatype.as_deref().unwrap_or(xsd::STRING);
            SimpleTerm::LiteralDatatype(
                lit.lexical.as_str().into(),
                IriRef::new_unchecked(datatype.into()),
            )
        }
    }
}

fn load_statement(target: &mut LightGraph, statement: &Statement) -> Result<(), RdfWriteError> {
    target
        .insert(
            iri_term(statement.subject.as_str()),
            iri_term(&statement.predicate),
            object_term(&statement.object),
        )
        .map_err(|e| RdfWriteError::Load(e.to_string()))?;
    Ok(())
}

/// Copy every statement into a sophia [`LightGraph`].
pub fn to_sophia_graph(graph: &Graph) -> Result<LightGraph, RdfWriteError> {
    let mut target = LightGraph::new();
    for statement in graph {
        load_statement(&mut target, statement)?;
    }
    Ok(target)
}

fn turtle_prefixes() -> Vec<(Prefix<Box<str>>, Iri<Box<str>>)> {
    ns::PREFIXES
        .iter()
        .map(|(prefix, iri)| {
            (
                Prefix::new_unchecked(Box::from(*prefix)),
                Iri::new_unchecked(Box::from(*iri)),
            )
        })
        .collect()
}

// ============================================================================
// Serialization
// ============================================================================

/// Serialize `graph` in `format` into `out`.
pub fn write_graph<W: Write>(graph: &Graph, format: RdfFormat, mut out: W) -> Result<(), RdfWriteError> {
    let source = to_sophia_graph(graph)?;
    let failed = |e: &dyn std::fmt::Display| RdfWriteError::Serialize {
        format,
        message: e.to_string(),
    };

    match format {
        RdfFormat::NTriples => {
            let mut serializer = NtSerializer::new(&mut out);
            serializer.serialize_graph(&source).map_err(|e| failed(&e))?;
        }
        RdfFormat::Turtle => {
            let config = TurtleConfig::new()
                .with_pretty(true)
                .with_own_prefix_map(turtle_prefixes());
            let mut serializer = TurtleSerializer::new_with_config(&mut out, config);
            serializer.serialize_graph(&source).map_err(|e| failed(&e))?;
        }
        RdfFormat::RdfXml => {
            let mut serializer = RdfXmlSerializer::new(&mut out);
            serializer.serialize_graph(&source).map_err(|e| failed(&e))?;
        }
    }
    out.flush()?;
    debug!(%format, statements = graph.len(), "graph serialized");
    Ok(())
}

/// Serialize into an in-memory string.
pub fn graph_to_string(graph: &Graph, format: RdfFormat) -> Result<String, RdfWriteError> {
    let mut buf = Vec::new();
    write_graph(graph, format, &mut buf)?;
    String::from_utf8(buf).map_err(|e| RdfWriteError::Serialize {
        format,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fzeri_core::vocab::{crm, rdfs};
    use fzeri_core::{Emitter, NodeId};

    fn sample() -> Graph {
        let place = NodeId::from_iri("http://fe.fondazionezeri.unibo.it/collection/abc");
        let entry = NodeId::from_iri("http://fe.fondazionezeri.unibo.it/catalogo/schedaF/67680");
        let mut out = Emitter::new();
        out.typed(&place, crm::E53_PLACE);
        out.label(&place, "Fototeca \"Zeri\"");
        out.typed_literal(&entry, crm::P3_HAS_NOTE, "2", xsd::INTEGER);
        out.into_statements().into_iter().collect()
    }

    #[test]
    fn ntriples_lines_match_statement_count() {
        let text = graph_to_string(&sample(), RdfFormat::NTriples).expect("serialize");
        let lines: Vec<_> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines.len(), 3);
        assert!(text.contains(&format!("<{}>", rdfs::LABEL)));
        assert!(text.contains(r#""Fototeca \"Zeri\"""#));
        assert!(text.contains(&format!("\"2\"^^<{}>", xsd::INTEGER)));
    }

    #[test]
    fn turtle_uses_registered_prefixes() {
        let text = graph_to_string(&sample(), RdfFormat::Turtle).expect("serialize");
        assert!(text.contains("@prefix crm:"));
        assert!(text.contains("crm:E53_Place"));
    }

    #[test]
    fn rdfxml_is_well_formed_enough_to_parse_back() {
        let text = graph_to_string(&sample(), RdfFormat::RdfXml).expect("serialize");
        assert!(text.contains("rdf:RDF"));
        let mut count = 0;
        let mut parser = sophia::xml::parser::parse_bufread(text.as_bytes());
        use sophia::api::source::TripleSource;
        parser
            .try_for_each_triple(|_| -> Result<(), std::convert::Infallible> {
                count += 1;
                Ok(())
            })
            .expect("parse back");
        assert_eq!(count, 3);
    }

    #[test]
    fn serialization_is_deterministic() {
        for format in RdfFormat::ALL {
            let a = graph_to_string(&sample(), format).expect("a");
            let b = graph_to_string(&sample(), format).expect("b");
            assert_eq!(a, b, "{format}");
        }
    }
}
