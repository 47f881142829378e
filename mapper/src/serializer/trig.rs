//! TriG serializer for the event graph.
//!
//! Same statements as the Turtle output, wrapped in the graph's name
//! (`<https://amp.acdh.oeaw.ac.at/> { ... }`), or in the default graph
//! block when the graph is unnamed.

use crate::model::Graph;

use super::{iriref, prefix_block, subject_blocks};

/// Serializes `graph` to a TriG string.
#[must_use]
pub fn to_trig(graph: &Graph) -> String {
    let prefixes = prefix_block(graph);
    if graph.is_empty() {
        return prefixes;
    }
    let mut out = String::with_capacity(64 * graph.len());
    out.push_str(&prefixes);
    out.push('\n');
    match graph.name() {
        Some(name) => out.push_str(&format!("{} {{\n", iriref(name))),
        None => out.push_str("{\n"),
    }
    out.push_str(subject_blocks(graph, "    ").trim_end());
    out.push_str("\n}\n");
    out
}
