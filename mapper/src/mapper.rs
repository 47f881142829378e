//! Event-to-triple mapping.
//!
//! Two historical markup layouts are supported behind one [`Mapper`],
//! selected by [`Variant`]:
//!
//! - [`Variant::SubEvent`]: an assertive `event` may nest a non-assertive
//!   `event` carrying `resp`, `cert`, `from`, `to` and an `idno` DOI.
//! - [`Variant::Flat`]: every `event` carries its own dating and provenance
//!   attributes, which depend on its `type`.
//!
//! Date boundaries are plain literals. `from` feeds both
//! `P82a_begin_of_the_begin` and `P81a_end_of_the_begin`; `to` feeds both
//! `P82b_end_of_the_end` and `P81b_begin_of_the_end`.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::MapError;
use crate::model::{Graph, Term};
use crate::tei::{Element, TeiDocument};
use crate::vocab::{self, amp, doi_suffix, encode_iri, fragment_suffix};

/// Markup layout of the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Non-assertive readings nested inside assertive events, DOI in `idno`.
    #[default]
    SubEvent,
    /// Flat events with type-conditional attributes, DOI in `@source`.
    Flat,
}

impl Variant {
    /// Class the vocabulary terms are typed as.
    #[must_use]
    pub fn vocabulary_class(self) -> &'static str {
        match self {
            Variant::SubEvent => vocab::P2_HAS_TYPE,
            Variant::Flat => vocab::E55_TYPE,
        }
    }

    /// Short name accepted by [`Variant::from_str`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::SubEvent => "a",
            Variant::Flat => "b",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "sub-event" | "nested" => Ok(Variant::SubEvent),
            "b" | "flat" => Ok(Variant::Flat),
            other => Err(format!(
                "unknown variant `{other}` (expected `a`/`sub-event` or `b`/`flat`)"
            )),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of an event's `type` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// `type="assertive"`.
    Assertive,
    /// `type="non-assertive"`.
    NonAssertive,
    /// Any other value. Typed as assertive, with a warning.
    Unrecognized(String),
}

impl EventKind {
    /// Classifies a `type` attribute value. Matching is exact.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "assertive" => EventKind::Assertive,
            "non-assertive" => EventKind::NonAssertive,
            other => EventKind::Unrecognized(other.to_owned()),
        }
    }

    /// The vocabulary type IRI assigned to events of this kind.
    #[must_use]
    pub fn type_iri(&self) -> &'static str {
        match self {
            EventKind::NonAssertive => vocab::NON_ASSERTIVE,
            EventKind::Assertive | EventKind::Unrecognized(_) => vocab::ASSERTIVE,
        }
    }
}

/// The attributes every event contributes regardless of layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// `xml:id`.
    pub id: String,
    /// Parsed `type`.
    pub kind: EventKind,
    /// Text of the `label` children.
    pub label: String,
    /// Text of the `desc` children.
    pub description: String,
}

impl EventRecord {
    /// Reads an event element.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MissingAttribute`] if `xml:id` or `type` is absent.
    pub fn read(el: &Element) -> Result<Self, MapError> {
        let id = required(el, "xml:id")?.to_owned();
        let kind = EventKind::parse(required(el, "type")?);
        Ok(Self {
            id,
            kind,
            label: el.joined_child_text("label"),
            description: el.joined_child_text("desc"),
        })
    }

    /// Subject IRI: base domain + `xml:id`.
    #[must_use]
    pub fn subject(&self) -> String {
        amp(&self.id)
    }
}

/// Counters reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapSummary {
    /// Event elements visited by the selector.
    pub events: usize,
    /// Nested events mapped inline (sub-event layout only).
    pub sub_events: usize,
    /// Events whose `type` was unrecognized and fell back to assertive.
    /// Counted on the selector visit only, so a nested event counts once.
    pub fallbacks: usize,
    /// Nano-publication entities minted.
    pub nano_publications: usize,
}

/// Maps TEI events into a [`Graph`] for one markup [`Variant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Mapper {
    variant: Variant,
}

impl Mapper {
    /// Creates a mapper for `variant`.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    /// The layout this mapper reads.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Declares the assertive, non-assertive and nano-publication terms.
    /// Adds exactly three triples.
    pub fn declare_vocabulary(&self, graph: &mut Graph) {
        let class = self.variant.vocabulary_class();
        for term in [vocab::ASSERTIVE, vocab::NON_ASSERTIVE, vocab::NANO_PUBLICATION] {
            graph.add(term, vocab::RDF_TYPE, Term::iri(class));
        }
    }

    /// Maps every event of `doc` in document order.
    ///
    /// # Errors
    ///
    /// Stops at the first event missing a required attribute or child.
    pub fn map_document(&self, doc: &TeiDocument, graph: &mut Graph) -> Result<MapSummary, MapError> {
        let mut summary = MapSummary::default();
        for el in doc.events() {
            self.map_event(el, graph, &mut summary)?;
        }
        Ok(summary)
    }

    /// Maps one event element, including its nested event in the sub-event layout.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MissingAttribute`] or [`MapError::MissingChildElement`].
    pub fn map_event(
        &self,
        el: &Element,
        graph: &mut Graph,
        summary: &mut MapSummary,
    ) -> Result<(), MapError> {
        let record = EventRecord::read(el)?;
        let subject = record.subject();
        debug!(id = %record.id, kind = ?record.kind, "mapping event");
        summary.events += 1;

        if let EventKind::Unrecognized(value) = &record.kind {
            warn!(
                id = %record.id,
                value = %value,
                "unrecognized event type, falling back to assertive"
            );
            summary.fallbacks += 1;
        }
        add_common(&record, &subject, graph);

        match self.variant {
            Variant::SubEvent => {
                graph.add(&subject, vocab::P1_IS_IDENTIFIED_BY, Term::literal(vocab::CREATOR));
                if let Some(inner) = el.children_named("event").next() {
                    map_sub_event(&subject, inner, graph, summary)?;
                }
            }
            Variant::Flat => map_flat_fields(&record, &subject, el, graph, summary)?,
        }
        Ok(())
    }
}

/// Type, `E5_Event`, label and comment. Unrecognized types are typed assertive.
fn add_common(record: &EventRecord, subject: &str, graph: &mut Graph) {
    graph.add(subject, vocab::RDF_TYPE, Term::iri(record.kind.type_iri()));
    graph.add(subject, vocab::RDF_TYPE, Term::iri(vocab::E5_EVENT));
    graph.add(subject, vocab::RDFS_LABEL, Term::literal(record.label.as_str()));
    graph.add(subject, vocab::RDFS_COMMENT, Term::literal(record.description.as_str()));
}

fn map_sub_event(
    parent: &str,
    el: &Element,
    graph: &mut Graph,
    summary: &mut MapSummary,
) -> Result<(), MapError> {
    let record = EventRecord::read(el)?;
    let subject = record.subject();
    summary.sub_events += 1;

    let resp = required(el, "resp")?;
    // Read to enforce presence; the sub-event layout emits no certainty triple.
    let _cert = required(el, "cert")?;
    let from = required(el, "from")?;
    let to = required(el, "to")?;

    add_common(&record, &subject, graph);
    graph.add(&subject, vocab::P1_IS_IDENTIFIED_BY, Term::literal(vocab::CREATOR));
    graph.add(&subject, vocab::P14_CARRIED_OUT_BY, Term::literal(resp));
    add_interval(&subject, from, to, graph);

    let doi = el
        .children_named("idno")
        .flat_map(Element::descendant_texts)
        .map(str::trim)
        .find(|text| !text.is_empty())
        .ok_or_else(|| MapError::MissingChildElement {
            child: "idno".to_owned(),
            element: record.id.clone(),
        })?;
    let publication = add_nano_publication(doi, graph, summary);
    graph.add(&subject, vocab::P9_CONSISTS_OF, Term::iri(publication.as_str()));
    graph.add(&publication, vocab::P123_RESULTED_FROM, Term::iri(parent));
    graph.add(parent, vocab::P123_RESULTED_IN, Term::iri(publication));
    Ok(())
}

fn map_flat_fields(
    record: &EventRecord,
    subject: &str,
    el: &Element,
    graph: &mut Graph,
    summary: &mut MapSummary,
) -> Result<(), MapError> {
    match record.kind {
        EventKind::Assertive => {
            let not_before = required(el, "notBefore")?;
            let not_after = required(el, "notAfter")?;
            let corresp = required(el, "corresp")?;
            graph.add(subject, vocab::P82A_BEGIN_OF_THE_BEGIN, Term::literal(not_before));
            graph.add(subject, vocab::P82B_END_OF_THE_END, Term::literal(not_after));
            graph.add(
                subject,
                vocab::P123_RESULTED_IN,
                Term::iri(amp(fragment_suffix(corresp))),
            );
        }
        EventKind::NonAssertive => {
            let resp = required(el, "resp")?;
            let cert = required(el, "cert")?;
            let from = required(el, "from")?;
            let to = required(el, "to")?;
            let source = required(el, "source")?;
            let corresp = required(el, "corresp")?;

            graph.add(subject, vocab::P3_HAS_NOTE, Term::literal(cert));
            graph.add(subject, vocab::P1_IS_IDENTIFIED_BY, Term::literal(resp));
            add_interval(subject, from, to, graph);

            let publication = add_nano_publication(source, graph, summary);
            graph.add(&publication, vocab::P123_RESULTED_FROM, Term::iri(subject));
            graph.add(subject, vocab::P123_RESULTED_IN, Term::iri(publication));
            graph.add(
                subject,
                vocab::P123_RESULTED_FROM,
                Term::iri(amp(fragment_suffix(corresp))),
            );
        }
        EventKind::Unrecognized(_) => {}
    }
    Ok(())
}

fn add_interval(subject: &str, from: &str, to: &str, graph: &mut Graph) {
    graph.add(subject, vocab::P82A_BEGIN_OF_THE_BEGIN, Term::literal(from));
    graph.add(subject, vocab::P82B_END_OF_THE_END, Term::literal(to));
    graph.add(subject, vocab::P81A_END_OF_THE_BEGIN, Term::literal(from));
    graph.add(subject, vocab::P81B_BEGIN_OF_THE_END, Term::literal(to));
}

/// Mints `amp:{doi-suffix}`, types it as a nano-publication and links it
/// to the DOI. Surrounding whitespace is dropped and both IRIs are
/// percent-encoded where the DOI holds IRI-excluded characters.
/// Returns the minted IRI.
fn add_nano_publication(doi: &str, graph: &mut Graph, summary: &mut MapSummary) -> String {
    let doi = doi.trim();
    let publication = amp(doi_suffix(doi));
    if graph.add(&publication, vocab::RDF_TYPE, Term::iri(vocab::NANO_PUBLICATION)) {
        summary.nano_publications += 1;
    }
    graph.add(
        &publication,
        vocab::P70_IS_DOCUMENTED_IN,
        Term::iri(encode_iri(doi).into_owned()),
    );
    publication
}

fn required<'a>(el: &'a Element, attribute: &str) -> Result<&'a str, MapError> {
    el.attr(attribute).ok_or_else(|| MapError::MissingAttribute {
        attribute: attribute.to_owned(),
        element: el.display_id(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::*;

    fn map(xml: &str, variant: Variant) -> Result<(Graph, MapSummary), MapError> {
        let doc = TeiDocument::parse(xml)?;
        let mut graph = new_graph();
        let mapper = Mapper::new(variant);
        mapper.declare_vocabulary(&mut graph);
        let summary = mapper.map_document(&doc, &mut graph)?;
        Ok((graph, summary))
    }

    fn wrap(events: &str) -> String {
        format!(
            r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><text><body><listEvent>{events}</listEvent></body></text></TEI>"#
        )
    }

    fn types(graph: &Graph, subject: &str) -> Vec<String> {
        graph
            .objects(subject, RDF_TYPE)
            .filter_map(|t| t.as_iri().map(str::to_owned))
            .collect()
    }

    #[test]
    fn vocabulary_declares_three_terms_per_variant() {
        for (variant, class) in [(Variant::SubEvent, P2_HAS_TYPE), (Variant::Flat, E55_TYPE)] {
            let mut graph = Graph::new();
            Mapper::new(variant).declare_vocabulary(&mut graph);
            assert_eq!(graph.len(), 3);
            for term in [ASSERTIVE, NON_ASSERTIVE, NANO_PUBLICATION] {
                assert!(graph.contains(term, RDF_TYPE, &Term::iri(class)));
            }
        }
    }

    #[test]
    fn flat_assertive_scenario() {
        let xml = wrap(
            r##"<event xml:id="ev1" type="assertive" notBefore="2020-01-01" notAfter="2020-12-31" corresp="#doc5"><label>Test</label></event>"##,
        );
        let (g, summary) = map(&xml, Variant::Flat).unwrap();
        let ev1 = amp("ev1");
        assert!(g.contains(&ev1, RDF_TYPE, &Term::iri(ASSERTIVE)));
        assert!(g.contains(&ev1, RDF_TYPE, &Term::iri(E5_EVENT)));
        assert!(g.contains(&ev1, P82A_BEGIN_OF_THE_BEGIN, &Term::literal("2020-01-01")));
        assert!(g.contains(&ev1, P82B_END_OF_THE_END, &Term::literal("2020-12-31")));
        assert!(g.contains(&ev1, P123_RESULTED_IN, &Term::iri(amp("doc5"))));
        assert!(g.contains(&ev1, RDFS_LABEL, &Term::literal("Test")));
        assert!(g.contains(&ev1, RDFS_COMMENT, &Term::literal("")));
        assert!(!g.contains(&ev1, RDF_TYPE, &Term::iri(NON_ASSERTIVE)));
        assert_eq!(summary.events, 1);
    }

    #[test]
    fn flat_non_assertive_carries_certainty_and_resp() {
        let xml = wrap(
            r##"<event xml:id="ev2" type="non-assertive" resp="#DG" cert="medium" from="1890" to="1891" source="https://doi.org/10.1234/x" corresp="#ev1"><desc>Reading</desc></event>"##,
        );
        let (g, summary) = map(&xml, Variant::Flat).unwrap();
        let ev2 = amp("ev2");
        let publication = "https://amp.acdh.oeaw.ac.at/10.1234/x";
        assert_eq!(types(&g, &ev2), vec![NON_ASSERTIVE.to_owned(), E5_EVENT.to_owned()]);
        assert!(g.contains(&ev2, P3_HAS_NOTE, &Term::literal("medium")));
        assert!(g.contains(&ev2, P1_IS_IDENTIFIED_BY, &Term::literal("#DG")));
        assert!(g.contains(&ev2, P81A_END_OF_THE_BEGIN, &Term::literal("1890")));
        assert!(g.contains(&ev2, P81B_BEGIN_OF_THE_END, &Term::literal("1891")));
        assert!(g.contains(publication, RDF_TYPE, &Term::iri(NANO_PUBLICATION)));
        assert!(g.contains(publication, P70_IS_DOCUMENTED_IN, &Term::iri("https://doi.org/10.1234/x")));
        assert!(g.contains(publication, P123_RESULTED_FROM, &Term::iri(ev2.as_str())));
        assert!(g.contains(&ev2, P123_RESULTED_IN, &Term::iri(publication)));
        assert!(g.contains(&ev2, P123_RESULTED_FROM, &Term::iri(amp("ev1"))));
        assert!(g.contains(&ev2, RDFS_COMMENT, &Term::literal("Reading")));
        assert_eq!(summary.nano_publications, 1);
    }

    #[test]
    fn flat_assertive_has_no_attribution() {
        let xml = wrap(
            r##"<event xml:id="ev1" type="assertive" notBefore="a" notAfter="b" corresp="#c"/>"##,
        );
        let (g, _) = map(&xml, Variant::Flat).unwrap();
        assert_eq!(g.objects(&amp("ev1"), P1_IS_IDENTIFIED_BY).count(), 0);
    }

    #[test]
    fn unrecognized_type_falls_back_to_assertive() {
        for variant in [Variant::SubEvent, Variant::Flat] {
            let xml = wrap(r#"<event xml:id="ev3" type="maybe"><label>Odd</label></event>"#);
            let (g, summary) = map(&xml, variant).unwrap();
            let ev3 = amp("ev3");
            assert_eq!(types(&g, &ev3), vec![ASSERTIVE.to_owned(), E5_EVENT.to_owned()]);
            assert!(!g.contains(&ev3, RDF_TYPE, &Term::iri(NON_ASSERTIVE)));
            assert!(g.contains(&ev3, RDFS_LABEL, &Term::literal("Odd")));
            assert_eq!(summary.fallbacks, 1);
        }
    }

    #[test]
    fn type_matching_is_exact() {
        assert_eq!(EventKind::parse("Assertive"), EventKind::Unrecognized("Assertive".to_owned()));
        assert_eq!(EventKind::parse("non-assertive"), EventKind::NonAssertive);
    }

    #[test]
    fn missing_flat_date_attribute_is_fatal() {
        let xml = wrap(r##"<event xml:id="ev1" type="assertive" notAfter="b" corresp="#c"/>"##);
        match map(&xml, Variant::Flat) {
            Err(MapError::MissingAttribute { attribute, element }) => {
                assert_eq!(attribute, "notBefore");
                assert_eq!(element, "ev1");
            }
            other => panic!("expected MissingAttribute, got {other:?}"),
        }
    }

    #[test]
    fn missing_xml_id_is_fatal() {
        let xml = wrap(r#"<event type="assertive"/>"#);
        assert!(matches!(
            map(&xml, Variant::SubEvent),
            Err(MapError::MissingAttribute { ref attribute, .. }) if attribute == "xml:id"
        ));
    }

    const SUB_EVENT: &str = r##"<event xml:id="e1" type="assertive">
      <label>Outer</label><desc>Outer desc</desc>
      <event xml:id="e1n" type="non-assertive" resp="#DG" cert="high" from="1891-05-01" to="1891-05-31">
        <label>Inner</label>
        <idno type="DOI">https://doi.org/10.5281/zenodo.42</idno>
      </event>
    </event>"##;

    #[test]
    fn sub_event_layout_links_nano_publication() {
        let (g, summary) = map(&wrap(SUB_EVENT), Variant::SubEvent).unwrap();
        let outer = amp("e1");
        let inner = amp("e1n");
        let publication = amp("10.5281/zenodo.42");

        assert!(g.contains(&outer, P1_IS_IDENTIFIED_BY, &Term::literal(CREATOR)));
        assert!(g.contains(&inner, P1_IS_IDENTIFIED_BY, &Term::literal(CREATOR)));
        assert!(g.contains(&inner, P14_CARRIED_OUT_BY, &Term::literal("#DG")));
        assert!(g.contains(&inner, P82A_BEGIN_OF_THE_BEGIN, &Term::literal("1891-05-01")));
        assert!(g.contains(&inner, P81A_END_OF_THE_BEGIN, &Term::literal("1891-05-01")));
        assert!(g.contains(&inner, P82B_END_OF_THE_END, &Term::literal("1891-05-31")));
        assert!(g.contains(&inner, P81B_BEGIN_OF_THE_END, &Term::literal("1891-05-31")));
        assert!(g.contains(&publication, RDF_TYPE, &Term::iri(NANO_PUBLICATION)));
        assert!(g.contains(
            &publication,
            P70_IS_DOCUMENTED_IN,
            &Term::iri("https://doi.org/10.5281/zenodo.42")
        ));
        assert!(g.contains(&inner, P9_CONSISTS_OF, &Term::iri(publication.as_str())));
        assert!(g.contains(&publication, P123_RESULTED_FROM, &Term::iri(outer.as_str())));
        assert!(g.contains(&outer, P123_RESULTED_IN, &Term::iri(publication.as_str())));

        // Selector visits both events; the nested one is also mapped inline.
        assert_eq!(summary.events, 2);
        assert_eq!(summary.sub_events, 1);
        assert_eq!(types(&g, &inner), vec![NON_ASSERTIVE.to_owned(), E5_EVENT.to_owned()]);
    }

    #[test]
    fn sici_doi_is_percent_encoded() {
        let xml = wrap(
            r##"<event xml:id="e1" type="assertive"><event xml:id="e1n" type="non-assertive" resp="r" cert="c" from="f" to="t"><idno>https://doi.org/10.1002/(SICI)1097-4571(199806)49:8&lt;693::AID-ASI4&gt;3.0.CO;2-O</idno></event></event>"##,
        );
        let (g, summary) = map(&xml, Variant::SubEvent).unwrap();
        let publication =
            "https://amp.acdh.oeaw.ac.at/10.1002/(SICI)1097-4571(199806)49:8%3C693::AID-ASI4%3E3.0.CO;2-O";
        assert!(g.contains(publication, RDF_TYPE, &Term::iri(NANO_PUBLICATION)));
        assert!(g.contains(
            publication,
            P70_IS_DOCUMENTED_IN,
            &Term::iri("https://doi.org/10.1002/(SICI)1097-4571(199806)49:8%3C693::AID-ASI4%3E3.0.CO;2-O")
        ));
        assert_eq!(summary.nano_publications, 1);
        for t in g.triples() {
            assert!(!t.subject.contains(['<', '>']), "{}", t.subject);
        }
    }

    #[test]
    fn padded_idno_is_trimmed() {
        let xml = wrap(
            "<event xml:id=\"e1\" type=\"assertive\"><event xml:id=\"e1n\" type=\"non-assertive\" resp=\"r\" cert=\"c\" from=\"f\" to=\"t\"><idno>\n  https://doi.org/10.5281/zenodo.1\n</idno></event></event>",
        );
        let (g, _) = map(&xml, Variant::SubEvent).unwrap();
        let publication = amp("10.5281/zenodo.1");
        assert!(g.contains(&publication, RDF_TYPE, &Term::iri(NANO_PUBLICATION)));
        assert!(g.contains(
            &publication,
            P70_IS_DOCUMENTED_IN,
            &Term::iri("https://doi.org/10.5281/zenodo.1")
        ));
    }

    #[test]
    fn blank_idno_is_fatal() {
        let xml = wrap(
            r##"<event xml:id="e1" type="assertive"><event xml:id="e1n" type="non-assertive" resp="r" cert="c" from="f" to="t"><idno>   </idno></event></event>"##,
        );
        assert!(matches!(
            map(&xml, Variant::SubEvent),
            Err(MapError::MissingChildElement { ref child, .. }) if child == "idno"
        ));
    }

    #[test]
    fn nested_fallback_is_counted_once() {
        let xml = wrap(
            r##"<event xml:id="e1" type="assertive"><event xml:id="e1n" type="maybe" resp="r" cert="c" from="f" to="t"><idno>10.1/x</idno></event></event>"##,
        );
        let (g, summary) = map(&xml, Variant::SubEvent).unwrap();
        assert_eq!(summary.events, 2);
        assert_eq!(summary.sub_events, 1);
        assert_eq!(summary.fallbacks, 1);
        assert_eq!(types(&g, &amp("e1n")), vec![ASSERTIVE.to_owned(), E5_EVENT.to_owned()]);
    }

    #[test]
    fn sub_event_without_idno_is_fatal() {
        let xml = wrap(
            r##"<event xml:id="e1" type="assertive"><event xml:id="e1n" type="non-assertive" resp="r" cert="c" from="f" to="t"/></event>"##,
        );
        match map(&xml, Variant::SubEvent) {
            Err(MapError::MissingChildElement { child, element }) => {
                assert_eq!(child, "idno");
                assert_eq!(element, "e1n");
            }
            other => panic!("expected MissingChildElement, got {other:?}"),
        }
    }

    #[test]
    fn sub_event_requires_cert() {
        let xml = wrap(
            r##"<event xml:id="e1" type="assertive"><event xml:id="e1n" type="non-assertive" resp="r" from="f" to="t"><idno>x</idno></event></event>"##,
        );
        assert!(matches!(
            map(&xml, Variant::SubEvent),
            Err(MapError::MissingAttribute { ref attribute, .. }) if attribute == "cert"
        ));
    }

    #[test]
    fn variant_parses_from_cli_names() {
        assert_eq!("a".parse::<Variant>(), Ok(Variant::SubEvent));
        assert_eq!("FLAT".parse::<Variant>(), Ok(Variant::Flat));
        assert!("c".parse::<Variant>().is_err());
    }
}
