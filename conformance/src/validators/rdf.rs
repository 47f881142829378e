//! RDF 1.1 Turtle / TriG validator.
//!
//! Validates that the written artifacts are well-formed and equivalent:
//! - `events.ttl` parses as Turtle
//! - `events.trig` parses as TriG (graph names are dropped for comparison)
//! - both hold the same triples, and as many as the live graph
//! - `events.nt`, when present, parses and matches too

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use sophia_api::graph::Graph as _;
use sophia_api::source::{QuadSource, TripleSource};
use sophia_api::triple::Triple as _;
use sophia_inmem::graph::LightGraph;
use sophia_turtle::parser::{nt, trig, turtle};

use amp_cidoc::serializer::{NTRIPLES_FILE, TRIG_FILE, TURTLE_FILE};
use amp_cidoc::Graph;

use crate::report::{CheckResult, ConformanceReport, Finding};

const VALIDATOR: &str = "rdf";

/// Validates the artifacts in `artifacts` against the live `graph`.
///
/// # Errors
///
/// Returns an error if an artifact exists but cannot be read.
pub fn validate(artifacts: &Path, graph: &Graph) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let turtle = load(artifacts, TURTLE_FILE, parse_turtle, &mut report)?;
    let trig = load(artifacts, TRIG_FILE, parse_trig, &mut report)?;

    if let Some(parsed) = &turtle {
        check_count(TURTLE_FILE, parsed, graph, &mut report);
    }
    if let (Some(turtle), Some(trig)) = (&turtle, &trig) {
        check_same(TURTLE_FILE, turtle, TRIG_FILE, trig, &mut report)?;
    }

    if artifacts.join(NTRIPLES_FILE).exists() {
        let ntriples = load(artifacts, NTRIPLES_FILE, parse_ntriples, &mut report)?;
        if let (Some(turtle), Some(ntriples)) = (&turtle, &ntriples) {
            check_same(TURTLE_FILE, turtle, NTRIPLES_FILE, ntriples, &mut report)?;
        }
    }

    Ok(report)
}

/// Parses a Turtle document.
///
/// # Errors
///
/// Returns the parser's message on malformed input.
pub fn parse_turtle(content: &str) -> Result<LightGraph> {
    turtle::parse_str(content)
        .collect_triples()
        .map_err(|e| anyhow!("{e}"))
}

/// Parses a TriG document, merging all graphs into one triple set.
///
/// # Errors
///
/// Returns the parser's message on malformed input.
pub fn parse_trig(content: &str) -> Result<LightGraph> {
    trig::parse_str(content)
        .to_triples()
        .collect_triples()
        .map_err(|e| anyhow!("{e}"))
}

/// Parses an N-Triples document.
///
/// # Errors
///
/// Returns the parser's message on malformed input.
pub fn parse_ntriples(content: &str) -> Result<LightGraph> {
    nt::parse_str(content)
        .collect_triples()
        .map_err(|e| anyhow!("{e}"))
}

/// Number of triples of `from` absent from `into`.
///
/// # Errors
///
/// Returns an error if either graph fails to iterate.
pub fn missing_triples(from: &LightGraph, into: &LightGraph) -> Result<usize> {
    let mut missing = 0;
    for t in from.triples() {
        let t = t.map_err(|e| anyhow!("{e}"))?;
        if !into
            .contains(t.s(), t.p(), t.o())
            .map_err(|e| anyhow!("{e}"))?
        {
            missing += 1;
        }
    }
    Ok(missing)
}

fn load(
    artifacts: &Path,
    file: &str,
    parse: fn(&str) -> Result<LightGraph>,
    report: &mut ConformanceReport,
) -> Result<Option<LightGraph>> {
    let path = artifacts.join(file);
    if !path.exists() {
        report.push(CheckResult::fail(
            VALIDATOR,
            format!("{file} not found in artifacts directory"),
            vec![Finding::new(path.display().to_string(), "missing")],
        ));
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    match parse(&content) {
        Ok(parsed) => {
            report.push(CheckResult::pass(
                VALIDATOR,
                format!(
                    "{file} parses ({} triples, {} bytes)",
                    parsed.triples().count(),
                    content.len()
                ),
            ));
            Ok(Some(parsed))
        }
        Err(e) => {
            report.push(CheckResult::fail(
                VALIDATOR,
                format!("{file} does not parse"),
                vec![Finding::new(file, e.to_string())],
            ));
            Ok(None)
        }
    }
}

fn check_count(file: &str, parsed: &LightGraph, graph: &Graph, report: &mut ConformanceReport) {
    let count = parsed.triples().count();
    if count == graph.len() {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!("{file} holds all {count} mapped triples"),
        ));
    } else {
        report.push(CheckResult::fail(
            VALIDATOR,
            format!("{file} holds {count} triples, mapping produced {}", graph.len()),
            vec![Finding::new(file, format!("{count} of {} triples", graph.len()))],
        ));
    }
}

fn check_same(
    left_name: &str,
    left: &LightGraph,
    right_name: &str,
    right: &LightGraph,
    report: &mut ConformanceReport,
) -> Result<()> {
    let only_left = missing_triples(left, right)?;
    let only_right = missing_triples(right, left)?;
    if only_left == 0 && only_right == 0 {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!("{left_name} and {right_name} hold the same triples"),
        ));
    } else {
        report.push(CheckResult::fail(
            VALIDATOR,
            format!("{left_name} and {right_name} differ"),
            vec![
                Finding::new(left_name, format!("{only_left} triple(s) not in {right_name}")),
                Finding::new(right_name, format!("{only_right} triple(s) not in {left_name}")),
            ],
        ));
    }
    Ok(())
}
