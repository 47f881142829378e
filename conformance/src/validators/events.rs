//! Mapping invariant validator.
//!
//! Operates on the live graph rebuilt from the transcript (no file I/O):
//! - the three vocabulary terms are declared with the layout's class
//! - every event has exactly one of assertive/non-assertive, plus `E5_Event`
//! - the vocabulary type agrees with the declared `type` (fallbacks warn)
//! - every event has exactly one label and one comment
//! - flat non-assertive events carry certainty and responsibility
//! - nano-publication IRIs never contain the DOI prefix

use amp_cidoc::vocab::{self, amp};
use amp_cidoc::{EventKind, Graph, TeiDocument, Term, Variant};

use crate::report::{CheckResult, ConformanceReport, Finding};

const VALIDATOR: &str = "events";

/// Runs all invariant checks for `graph`, built from `doc` with `variant`.
pub fn validate(doc: &TeiDocument, graph: &Graph, variant: Variant) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    check_vocabulary(graph, variant, &mut report);
    check_events(doc, graph, variant, &mut report);
    check_nano_publications(graph, &mut report);
    report
}

fn check_vocabulary(graph: &Graph, variant: Variant, report: &mut ConformanceReport) {
    let class = Term::iri(variant.vocabulary_class());
    let missing: Vec<Finding> = [vocab::ASSERTIVE, vocab::NON_ASSERTIVE, vocab::NANO_PUBLICATION]
        .into_iter()
        .filter(|term| !graph.contains(term, vocab::RDF_TYPE, &class))
        .map(|term| Finding::new(term, format!("not typed <{}>", variant.vocabulary_class())))
        .collect();
    if missing.is_empty() {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!("vocabulary declared as <{}>", variant.vocabulary_class()),
        ));
    } else {
        report.push(CheckResult::fail(VALIDATOR, "vocabulary terms not declared", missing));
    }
}

fn check_events(doc: &TeiDocument, graph: &Graph, variant: Variant, report: &mut ConformanceReport) {
    let mut issues = Vec::new();
    let mut fallbacks = Vec::new();
    let events = doc.events();

    for el in &events {
        let Some(id) = el.xml_id() else {
            issues.push(Finding::new(el.display_id(), "no xml:id"));
            continue;
        };
        let subject = amp(id);
        let kind = EventKind::parse(el.attr("type").unwrap_or_default());
        if let EventKind::Unrecognized(value) = &kind {
            fallbacks.push(Finding::new(id, format!("type=\"{value}\"")));
        }

        let types: Vec<&str> = graph
            .objects(&subject, vocab::RDF_TYPE)
            .filter_map(Term::as_iri)
            .collect();
        let vocab_types: Vec<&str> = types
            .iter()
            .copied()
            .filter(|t| *t == vocab::ASSERTIVE || *t == vocab::NON_ASSERTIVE)
            .collect();
        if vocab_types != [kind.type_iri()] {
            issues.push(Finding::new(id, format!("vocabulary types {vocab_types:?}")));
        }
        if !types.contains(&vocab::E5_EVENT) {
            issues.push(Finding::new(id, "not typed crm:E5_Event"));
        }
        for (predicate, name) in [(vocab::RDFS_LABEL, "label"), (vocab::RDFS_COMMENT, "comment")] {
            let n = graph.objects(&subject, predicate).count();
            if n != 1 {
                issues.push(Finding::new(id, format!("{n} {name} literals")));
            }
        }
        if variant == Variant::Flat && kind == EventKind::NonAssertive {
            for (predicate, name) in [
                (vocab::P3_HAS_NOTE, "certainty"),
                (vocab::P1_IS_IDENTIFIED_BY, "responsibility"),
            ] {
                if graph.objects(&subject, predicate).next().is_none() {
                    issues.push(Finding::new(id, format!("no {name} literal")));
                }
            }
        }
    }

    if issues.is_empty() {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!("{} events typed, labelled and described", events.len()),
        ));
    } else {
        report.push(CheckResult::fail(
            VALIDATOR,
            format!("{} event invariant violation(s)", issues.len()),
            issues,
        ));
    }

    if !fallbacks.is_empty() {
        report.push(CheckResult::warn(
            VALIDATOR,
            format!("{} event(s) with unrecognized type typed as assertive", fallbacks.len()),
            fallbacks,
        ));
    }
}

fn check_nano_publications(graph: &Graph, report: &mut ConformanceReport) {
    let nano = Term::iri(vocab::NANO_PUBLICATION);
    let publications: Vec<&str> = graph
        .triples()
        .iter()
        .filter(|t| t.predicate == vocab::RDF_TYPE && t.object == nano)
        .map(|t| t.subject.as_str())
        .collect();

    let mut bad = Vec::new();
    for iri in &publications {
        if iri.contains(vocab::DOI_PREFIX) {
            bad.push(Finding::new(*iri, "DOI prefix left in minted IRI"));
        }
        if graph.objects(iri, vocab::P70_IS_DOCUMENTED_IN).next().is_none() {
            bad.push(Finding::new(*iri, "no crm:P70_is_documented_in"));
        }
    }

    if bad.is_empty() {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!("{} nano-publication(s) minted from DOI suffixes", publications.len()),
        ));
    } else {
        report.push(CheckResult::fail(
            VALIDATOR,
            "nano-publications with malformed IRI or no documentation link",
            bad,
        ));
    }
}
