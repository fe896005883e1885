//! Integration tests for the complete schedaF → CIDOC-CRM pipeline
//!
//! These tests verify end-to-end functionality across crates:
//! - XML reading → flattening → mapping → graph assembly
//! - identifier stability across records and across runs
//! - RDF serialization of the assembled graph (combined and per record)
//!
//! Run with: cargo test --test integration_tests

use fzeri_core::identity::{composite_key, content_key, natural_key};
use fzeri_core::vocab::{base, crm, rdfs};
use fzeri_core::{Graph, Link, NodeId, Object};
use fzeri_ingest_schedaf::{
    convert_records, convert_str, read_batch, read_records_from_str, ConvertSettings,
    GraphAssembler,
};
use fzeri_rdf::{graph_to_string, write_per_record, RdfFormat};
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/schedaF_sample.xml")
}

fn fixture_text() -> String {
    std::fs::read_to_string(fixture()).expect("read fixture")
}

fn no_preamble() -> ConvertSettings {
    ConvertSettings {
        include_preamble: false,
        ..ConvertSettings::default()
    }
}

const SCENARIO: &str = r#"<SCHEDE>
  <SCHEDA intestazione="scenario">
    <PARAGRAFO etichetta="CLASSIFICATION">
      <SERCD>67680</SERCD>
      <UBFP>Fototeca Zeri</UBFP>
      <UBFS>Pittura italiana</UBFS>
      <UBFT>5</UBFT>
      <UBFN>42</UBFN>
    </PARAGRAFO>
    <PARAGRAFO etichetta="PHOTOGRAPHER">
      <RIPETIZIONE prog="1"><AUFN>Mario Rossi</AUFN></RIPETIZIONE>
    </PARAGRAFO>
  </SCHEDA>
</SCHEDE>"#;

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_scenario_produces_document_object_chain_and_photographer() {
    let conversion = convert_str(SCENARIO, no_preamble()).expect("convert");
    let graph = &conversion.graph;

    let entry = natural_key(base::ENTRY, "67680", "");
    let photo = entry.child("photo");
    assert_eq!(graph.instances_of(crm::E31_DOCUMENT).collect::<Vec<_>>(), vec![&entry]);
    assert_eq!(graph.instances_of(crm::E22_MAN_MADE_OBJECT).collect::<Vec<_>>(), vec![&photo]);

    let collection = content_key(base::COLLECTION, "Fototeca Zeri");
    let serie = content_key(base::SERIE, "Pittura italiana");
    let boxed = composite_key(base::BOX, &["5", "42"]);
    assert!(graph.has_edge(&collection, crm::P59_HAS_SECTION.forward, &serie));
    assert!(graph.has_edge(&serie, crm::P59_HAS_SECTION.forward, &boxed));
    assert!(graph.has_edge(&photo, crm::P54_HAS_CURRENT_PERMANENT_LOCATION.forward, &boxed));

    let step = photo.child("production").child("1");
    let actor = step.child("photographer");
    assert!(graph.has_edge(&step, crm::P14_CARRIED_OUT_BY.forward, &actor));
    let name = content_key(base::ACTOR_NAME, "Mario Rossi");
    assert!(graph.has_edge(&actor, crm::P131_IS_IDENTIFIED_BY.forward, &name));
    assert!(graph.has_literal(&name, rdfs::LABEL, "Mario Rossi"));

    // Re-running regenerates the same identifiers.
    let again = convert_str(SCENARIO, no_preamble()).expect("convert again");
    for node in [&entry, &photo, &collection, &serie, &boxed, &actor] {
        assert!(again.graph.subjects().contains(node), "{node} missing on re-run");
    }
    assert_eq!(conversion.graph, again.graph);
}

#[test]
fn test_padded_collection_name_gets_its_own_identifier() {
    let padded = SCENARIO.replace("<UBFP>Fototeca Zeri</UBFP>", "<UBFP> Fototeca Zeri</UBFP>");
    let plain = convert_str(SCENARIO, no_preamble()).expect("convert");
    let spaced = convert_str(&padded, no_preamble()).expect("convert padded");

    let collection = content_key(base::COLLECTION, "Fototeca Zeri");
    let padded_collection = content_key(base::COLLECTION, " Fototeca Zeri");
    assert_ne!(collection, padded_collection);
    assert!(plain.graph.subjects().contains(&collection));
    assert!(!plain.graph.subjects().contains(&padded_collection));
    assert!(spaced.graph.subjects().contains(&padded_collection));
    assert!(!spaced.graph.subjects().contains(&collection));
    assert!(spaced.graph.has_literal(
        &padded_collection,
        crm::P87_IS_IDENTIFIED_BY_LITERAL,
        " Fototeca Zeri"
    ));
}

// ============================================================================
// Batch behaviour over the sample file
// ============================================================================

#[test]
fn test_sample_batch_skips_record_without_catalogue_number() {
    let records = read_batch(&[fixture()]).expect("read fixture");
    assert_eq!(records.len(), 3);

    let conversion = convert_records(&records, ConvertSettings::default());
    assert_eq!(conversion.report.records_mapped, 2);
    assert_eq!(conversion.report.records_skipped, 1);
    assert_eq!(conversion.report.statements, conversion.graph.len());
    let ids: Vec<_> = conversion.records.iter().map(|r| r.entry_id.as_str()).collect();
    assert_eq!(ids, vec!["67680", "67681"]);
}

#[test]
fn test_shared_collection_and_actor_name_collapse_across_records() {
    let conversion = convert_str(&fixture_text(), no_preamble()).expect("convert");
    let graph = &conversion.graph;

    let collection = content_key(base::COLLECTION, "Fototeca Zeri");
    let sections = graph
        .objects(&collection, crm::P59_HAS_SECTION.forward)
        .count();
    // Both records name the same series, so the collection has one section.
    assert_eq!(sections, 1);

    let name = content_key(base::ACTOR_NAME, "Mario Rossi");
    let named: Vec<_> = graph
        .objects(&name, crm::P131_IS_IDENTIFIED_BY.inverse)
        .filter_map(Object::as_node)
        .collect();
    assert_eq!(named.len(), 2);
}

#[test]
fn test_step_numbers_follow_mapping_order_within_a_record() {
    let conversion = convert_str(&fixture_text(), no_preamble()).expect("convert");
    let graph = &conversion.graph;
    let production = natural_key(base::ENTRY, "67680", "").child("photo").child("production");

    // Dating, then photographer, then publisher.
    let dating = production.child("1");
    assert!(graph.has_edge(&dating, crm::P4_HAS_TIME_SPAN.forward, &dating.child("date")));
    assert!(graph.has_edge(
        &production.child("2"),
        crm::P14_CARRIED_OUT_BY.forward,
        &production.child("2").child("photographer"),
    ));
    assert!(graph.has_edge(
        &production.child("3"),
        crm::P14A_CARRIED_OUT_AS_PUBLISHER_BY.forward,
        &production.child("3").child("publisher"),
    ));
    let steps = graph
        .objects(&production, crm::P9_CONSISTS_OF.forward)
        .count();
    assert_eq!(steps, 3);

    // The second record only has a photographer, which is therefore step 1.
    let other = natural_key(base::ENTRY, "67681", "").child("photo").child("production");
    assert!(graph.has_edge(
        &other.child("1"),
        crm::P14_CARRIED_OUT_BY.forward,
        &other.child("1").child("photographer"),
    ));
}

#[test]
fn test_missing_dimensions_emit_no_dimension_nodes() {
    let xml = r#"<SCHEDE><SCHEDA>
        <PARAGRAFO etichetta="CLASSIFICATION"><SERCD>9</SERCD></PARAGRAFO>
        <PARAGRAFO etichetta="OBJECT"><OGTD>positivo</OGTD><MISU>mm</MISU></PARAGRAFO>
    </SCHEDA></SCHEDE>"#;
    let conversion = convert_str(xml, no_preamble()).expect("convert");
    assert_eq!(conversion.graph.instances_of(crm::E54_DIMENSION).count(), 0);
}

const CHECKED_LINKS: &[Link] = &[
    crm::P2_HAS_TYPE,
    crm::P4_HAS_TIME_SPAN,
    crm::P9_CONSISTS_OF,
    crm::P14_CARRIED_OUT_BY,
    crm::P43_HAS_DIMENSION,
    crm::P45_CONSISTS_OF,
    crm::P54_HAS_CURRENT_PERMANENT_LOCATION,
    crm::P59_HAS_SECTION,
    crm::P67_REFERS_TO,
    crm::P70_DOCUMENTS,
    crm::P76_HAS_CONTACT_POINT,
    crm::P102_HAS_TITLE,
    crm::P108_PRODUCED,
    crm::P131_IS_IDENTIFIED_BY,
    crm::P138_REPRESENTS,
    crm::P149_IS_IDENTIFIED_BY,
];

fn assert_inverse_symmetry(graph: &Graph) {
    for statement in graph {
        let Some(link) = CHECKED_LINKS
            .iter()
            .find(|l| l.forward == statement.predicate)
        else {
            continue;
        };
        // Some CRM properties also carry plain literals (P2, P54).
        let Object::Node(object) = &statement.object else {
            continue;
        };
        assert!(
            graph.has_edge(object, link.inverse, &statement.subject),
            "missing {} from {object} to {}",
            link.inverse,
            statement.subject
        );
    }
}

#[test]
fn test_every_forward_link_has_its_inverse() {
    let conversion = convert_str(&fixture_text(), no_preamble()).expect("convert");
    assert_inverse_symmetry(&conversion.graph);
}

// ============================================================================
// Determinism and serialization
// ============================================================================

#[test]
fn test_parallel_and_sequential_runs_serialize_identically() {
    let records = read_records_from_str(&fixture_text()).expect("xml");
    let sequential = convert_records(&records, ConvertSettings::default());
    let parallel = convert_records(
        &records,
        ConvertSettings {
            parallel: true,
            ..ConvertSettings::default()
        },
    );
    for format in RdfFormat::ALL {
        assert_eq!(
            graph_to_string(&sequential.graph, format).expect("sequential"),
            graph_to_string(&parallel.graph, format).expect("parallel"),
        );
    }
}

#[test]
fn test_preamble_only_in_combined_output() {
    let (preamble, _) = GraphAssembler::with_preamble().finish();
    let with = convert_str(&fixture_text(), ConvertSettings::default()).expect("convert");
    let without = convert_str(&fixture_text(), no_preamble()).expect("convert");
    assert_eq!(with.graph.len(), without.graph.len() + preamble.len());

    for record in &with.records {
        let graph = record.to_graph();
        assert!(preamble.iter().all(|s| !graph.iter().any(|r| r == s)));
    }
}

#[test]
fn test_per_record_output_writes_one_file_per_entry() {
    let conversion = convert_str(&fixture_text(), no_preamble()).expect("convert");
    let dir = tempdir().expect("tempdir");
    let written = write_per_record(
        dir.path(),
        RdfFormat::NTriples,
        conversion
            .records
            .iter()
            .map(|r| (r.entry_id.clone(), r.to_graph())),
    )
    .expect("write");

    assert_eq!(
        written,
        vec![dir.path().join("67680.nt"), dir.path().join("67681.nt")]
    );
    let text = std::fs::read_to_string(&written[1]).expect("read");
    let entry = NodeId::from_iri(format!("{}67681", base::ENTRY));
    assert!(text.contains(&format!("<{entry}>")));
    assert!(!text.contains("schedaF/67680"));
}
