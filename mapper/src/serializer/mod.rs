//! Serializers for the event graph.
//!
//! Three formats are supported:
//! - **Turtle** ([`turtle`]) — written to `<out>/events.ttl`
//! - **TriG** ([`trig`]) — written to `<out>/events.trig`, the same triples
//!   inside the graph named after the base domain
//! - **N-Triples** ([`ntriples`]) — optional `<out>/events.nt`

pub mod ntriples;
pub mod trig;
pub mod turtle;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::MapError;
use crate::model::{Graph, Term};
use crate::vocab::{encode_iri, RDF_TYPE};

/// File name of the Turtle artifact.
pub const TURTLE_FILE: &str = "events.ttl";
/// File name of the TriG artifact.
pub const TRIG_FILE: &str = "events.trig";
/// File name of the optional N-Triples artifact.
pub const NTRIPLES_FILE: &str = "events.nt";

/// Writes the Turtle and TriG artifacts (and N-Triples if `ntriples` is set)
/// into `out`, creating the directory if needed.
///
/// Returns the written paths in order.
///
/// # Errors
///
/// Returns [`MapError::Io`] if the directory cannot be created or a file
/// cannot be written.
pub fn write_artifacts(graph: &Graph, out: &Path, ntriples: bool) -> Result<Vec<PathBuf>, MapError> {
    fs::create_dir_all(out).map_err(|e| MapError::io(out, e))?;

    let mut outputs = vec![
        (out.join(TURTLE_FILE), turtle::to_turtle(graph)),
        (out.join(TRIG_FILE), trig::to_trig(graph)),
    ];
    if ntriples {
        outputs.push((out.join(NTRIPLES_FILE), ntriples::to_ntriples(graph)));
    }

    let mut written = Vec::with_capacity(outputs.len());
    for (path, content) in outputs {
        fs::write(&path, content).map_err(|e| MapError::io(&path, e))?;
        info!(path = %path.display(), triples = graph.len(), "written");
        written.push(path);
    }
    Ok(written)
}

/// `@prefix` lines for every bound prefix.
pub(crate) fn prefix_block(graph: &Graph) -> String {
    graph
        .prefixes()
        .iter()
        .map(|(prefix, iri)| format!("@prefix {prefix}: <{iri}> .\n"))
        .collect()
}

type PredicateObjects<'g> = Vec<(&'g str, Vec<&'g Term>)>;

/// Triples grouped by subject, then predicate, both in first-appearance order.
fn group_by_subject(graph: &Graph) -> Vec<(&str, PredicateObjects<'_>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut blocks: Vec<(&str, PredicateObjects<'_>)> = Vec::new();
    for t in graph.triples() {
        let i = *index.entry(t.subject.as_str()).or_insert_with(|| {
            blocks.push((t.subject.as_str(), Vec::new()));
            blocks.len() - 1
        });
        let predicates = &mut blocks[i].1;
        match predicates.iter_mut().find(|(p, _)| *p == t.predicate) {
            Some((_, objects)) => objects.push(&t.object),
            None => predicates.push((t.predicate.as_str(), vec![&t.object])),
        }
    }
    blocks
}

/// Subject blocks, one per subject in first-appearance order, each line
/// indented by `indent`. Objects sharing a predicate are comma-joined.
pub(crate) fn subject_blocks(graph: &Graph, indent: &str) -> String {
    let mut out = String::new();
    for (subject, predicates) in group_by_subject(graph) {
        out.push_str(indent);
        out.push_str(&iri_term(graph, subject));
        let last = predicates.len().saturating_sub(1);
        for (i, (predicate, objects)) in predicates.iter().enumerate() {
            let predicate = if *predicate == RDF_TYPE {
                "a".to_owned()
            } else {
                iri_term(graph, predicate)
            };
            let objects: Vec<String> = objects.iter().map(|o| object_term(graph, o)).collect();
            out.push_str(&format!(
                "\n{indent}    {predicate} {}{}",
                objects.join(", "),
                if i == last { " ." } else { " ;" }
            ));
        }
        out.push_str("\n\n");
    }
    out
}

/// Prefixed name when the local part is safe to write unescaped, else `<iri>`.
pub(crate) fn iri_term(graph: &Graph, iri: &str) -> String {
    for (prefix, namespace) in graph.prefixes() {
        if let Some(local) = iri.strip_prefix(namespace.as_str()) {
            if is_plain_local(local) {
                return format!("{prefix}:{local}");
            }
        }
    }
    iriref(iri)
}

/// `<iri>`, with IRIREF-excluded code points percent-encoded.
pub(crate) fn iriref(iri: &str) -> String {
    format!("<{}>", encode_iri(iri))
}

fn object_term(graph: &Graph, term: &Term) -> String {
    match term {
        Term::Iri(iri) => iri_term(graph, iri),
        Term::Literal(value) => quoted(value),
    }
}

// Conservative subset of PN_LOCAL: no dots, slashes, or escapes needed.
fn is_plain_local(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Double-quoted string literal with Turtle/N-Triples escapes.
pub(crate) fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
