//! N-Triples serializer for the event graph.
//!
//! One triple per line, absolute IRIs, plain string literals. Suitable for
//! bulk loading and line-based diffing.

use crate::model::{Graph, Term};

use super::{iriref, quoted};

/// Serializes `graph` to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(128 * graph.len());
    for t in graph.triples() {
        out.push_str(&iriref(&t.subject));
        out.push(' ');
        out.push_str(&iriref(&t.predicate));
        out.push(' ');
        match &t.object {
            Term::Iri(iri) => out.push_str(&iriref(iri)),
            Term::Literal(value) => out.push_str(&quoted(value)),
        }
        out.push_str(" .\n");
    }
    out
}
