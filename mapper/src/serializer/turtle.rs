//! Turtle 1.1 serializer for the event graph.
//!
//! Produces the bound `@prefix` declarations followed by one block per
//! subject, in the order subjects first appeared in the graph.

use crate::model::Graph;

use super::{prefix_block, subject_blocks};

/// Serializes `graph` to a Turtle string.
///
/// Returns an empty string for an empty graph with no prefixes bound.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let prefixes = prefix_block(graph);
    if graph.is_empty() {
        return prefixes;
    }
    let mut out = String::with_capacity(64 * graph.len());
    out.push_str(&prefixes);
    out.push('\n');
    out.push_str(&subject_blocks(graph, ""));
    out
}
