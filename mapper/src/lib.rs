//! AMP event transcript mapped to CIDOC-CRM RDF.
//!
//! The `amp-cidoc` crate reads a TEI/XML transcript, walks every `tei:event`
//! element in document order and populates a single in-memory [`Graph`]
//! with CIDOC-CRM typed triples. The graph is then serialized to Turtle,
//! TriG, and (optionally) N-Triples.
//!
//! # Entry Point
//!
//! ```
//! use amp_cidoc::{build_graph, TeiDocument, Variant};
//!
//! let xml = r##"<TEI xmlns="http://www.tei-c.org/ns/1.0"><text><body>
//!   <event xml:id="ev1" type="assertive" notBefore="2020-01-01"
//!          notAfter="2020-12-31" corresp="#doc5"><label>Test</label></event>
//! </body></text></TEI>"##;
//! let doc = TeiDocument::parse(xml).unwrap();
//! let (graph, summary) = build_graph(&doc, Variant::Flat).unwrap();
//! assert_eq!(summary.events, 1);
//! assert!(!graph.is_empty());
//! ```
//!
//! # Serialization
//!
//! ```
//! # use amp_cidoc::{Graph, serializer};
//! let graph = Graph::new();
//! let turtle = serializer::turtle::to_turtle(&graph);
//! let trig = serializer::trig::to_trig(&graph);
//! # assert!(turtle.is_empty() && trig.is_empty());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod mapper;
pub mod model;
pub mod serializer;
pub mod tei;
pub mod vocab;

pub use error::MapError;
pub use mapper::{EventKind, EventRecord, MapSummary, Mapper, Variant};
pub use model::{Graph, Term, Triple};
pub use tei::{Element, Node, TeiDocument};

/// Builds the complete event graph for a parsed transcript.
///
/// Creates the graph, binds the `amp`, `crm`, `rdf` and `rdfs` prefixes,
/// declares the three vocabulary terms and maps every event.
///
/// # Errors
///
/// Returns [`MapError::MissingAttribute`] or [`MapError::MissingChildElement`]
/// if an event lacks markup its variant requires.
pub fn build_graph(doc: &TeiDocument, variant: Variant) -> Result<(Graph, MapSummary), MapError> {
    let mut graph = vocab::new_graph();
    let mapper = Mapper::new(variant);
    mapper.declare_vocabulary(&mut graph);
    let summary = mapper.map_document(doc, &mut graph)?;
    Ok((graph, summary))
}
