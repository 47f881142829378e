//! Full runs over the bundled transcript and inline fixtures.

use std::path::PathBuf;

use amp_cidoc::serializer::{self, ntriples, TRIG_FILE, TURTLE_FILE};
use amp_cidoc::vocab::{self, amp};
use amp_cidoc::{build_graph, MapError, TeiDocument, Term, Variant};

fn transcript() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("dh2023-xml-amp-transcript__0004.xml")
}

#[test]
fn bundled_transcript_maps_every_event() {
    let doc = TeiDocument::from_path(&transcript()).unwrap();
    let (graph, summary) = build_graph(&doc, Variant::SubEvent).unwrap();

    // 3 top-level + 2 nested events, each visited by the selector.
    assert_eq!(summary.events, 5);
    assert_eq!(summary.sub_events, 2);
    assert_eq!(summary.nano_publications, 2);
    assert_eq!(summary.fallbacks, 0);

    for id in ["amp-event-0001", "amp-event-0002", "amp-event-0003"] {
        let subject = amp(id);
        assert!(graph.contains(&subject, vocab::RDF_TYPE, &Term::iri(vocab::ASSERTIVE)));
        assert!(graph.contains(&subject, vocab::RDF_TYPE, &Term::iri(vocab::E5_EVENT)));
        assert!(!graph.contains(&subject, vocab::RDF_TYPE, &Term::iri(vocab::NON_ASSERTIVE)));
    }

    let label: Vec<_> = graph
        .objects(&amp("amp-event-0001"), vocab::RDFS_LABEL)
        .collect();
    assert_eq!(
        label,
        vec![&Term::literal("Brief von  Arthur Schnitzler  an  Hermann Bahr")]
    );
    assert!(graph.contains(
        &amp("amp-event-0003"),
        vocab::RDFS_COMMENT,
        &Term::literal("")
    ));
    assert!(graph.contains(
        &amp("amp-event-0001"),
        vocab::P123_RESULTED_IN,
        &Term::iri(amp("10.5281/zenodo.7916543"))
    ));
}

#[test]
fn every_event_has_exactly_one_vocabulary_type() {
    let doc = TeiDocument::from_path(&transcript()).unwrap();
    let (graph, _) = build_graph(&doc, Variant::SubEvent).unwrap();

    for el in doc.events() {
        let subject = amp(el.xml_id().unwrap());
        let kinds = graph
            .objects(&subject, vocab::RDF_TYPE)
            .filter(|t| {
                *t == &Term::iri(vocab::ASSERTIVE) || *t == &Term::iri(vocab::NON_ASSERTIVE)
            })
            .count();
        assert_eq!(kinds, 1, "{subject} has {kinds} vocabulary types");
        assert_eq!(graph.objects(&subject, vocab::RDFS_LABEL).count(), 1);
        assert_eq!(graph.objects(&subject, vocab::RDFS_COMMENT).count(), 1);
    }
}

#[test]
fn flat_scenario_writes_both_artifacts() {
    let xml = r##"<TEI xmlns="http://www.tei-c.org/ns/1.0"><text><body><listEvent>
        <event xml:id="ev1" type="assertive" notBefore="2020-01-01" notAfter="2020-12-31" corresp="#doc5"><label>Test</label></event>
    </listEvent></body></text></TEI>"##;
    let doc = TeiDocument::parse(xml).unwrap();
    let (graph, _) = build_graph(&doc, Variant::Flat).unwrap();
    // 3 vocabulary + 2 types + label + comment + 2 dates + resulted-in.
    assert_eq!(graph.len(), 10);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("rdf");
    serializer::write_artifacts(&graph, &out, false).unwrap();

    let ttl = std::fs::read_to_string(out.join(TURTLE_FILE)).unwrap();
    let trig = std::fs::read_to_string(out.join(TRIG_FILE)).unwrap();
    for content in [&ttl, &trig] {
        assert!(content.contains("amp:ev1\n"));
        assert!(content.contains("crm:P82a_begin_of_the_begin \"2020-01-01\""));
        assert!(content.contains("crm:P82b_end_of_the_end \"2020-12-31\""));
        assert!(content.contains("crm:P123_resulted_in amp:doc5"));
        assert!(content.contains("rdfs:label \"Test\""));
    }
    assert!(trig.contains("<https://amp.acdh.oeaw.ac.at/> {"));
    assert_eq!(ntriples::to_ntriples(&graph).lines().count(), graph.len());
}

#[test]
fn missing_attribute_aborts_before_writing() {
    let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><event xml:id="ev9" type="non-assertive" cert="low"/></TEI>"#;
    let doc = TeiDocument::parse(xml).unwrap();
    let err = build_graph(&doc, Variant::Flat).unwrap_err();
    assert!(matches!(err, MapError::MissingAttribute { .. }));
    assert_eq!(err.to_string(), "missing attribute `resp` on element `ev9`");
}

#[test]
fn missing_transcript_is_an_io_error() {
    let err = TeiDocument::from_path(&PathBuf::from("does/not/exist.xml")).unwrap_err();
    assert!(matches!(err, MapError::Io { .. }));
}
