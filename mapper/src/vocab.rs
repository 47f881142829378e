//! Namespaces and term IRIs.
//!
//! CIDOC-CRM class and property names are reproduced character-for-character;
//! downstream consumers match on them.

use std::borrow::Cow;

use crate::model::Graph;

/// Project base domain. Every minted identifier starts with it.
pub const AMP: &str = "https://amp.acdh.oeaw.ac.at/";
/// CIDOC-CRM namespace.
pub const CRM: &str = "http://www.cidoc-crm.org/cidoc-crm/";
/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// TEI P5 XML namespace.
pub const TEI: &str = "http://www.tei-c.org/ns/1.0";

/// Prefix DOI references carry; stripped when minting nano-publication IRIs.
pub const DOI_PREFIX: &str = "https://doi.org/";

/// Fixed attribution attached by the sub-event layout.
pub const CREATOR: &str = "Grigoriou, Dimitra";

/// `rdf:type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdfs:label`
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:comment`
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

/// `crm:E5_Event`
pub const E5_EVENT: &str = "http://www.cidoc-crm.org/cidoc-crm/E5_Event";
/// `crm:E55_Type`
pub const E55_TYPE: &str = "http://www.cidoc-crm.org/cidoc-crm/E55_Type";
/// `crm:P1_is_identified_by`
pub const P1_IS_IDENTIFIED_BY: &str = "http://www.cidoc-crm.org/cidoc-crm/P1_is_identified_by";
/// `crm:P2_has_type`
pub const P2_HAS_TYPE: &str = "http://www.cidoc-crm.org/cidoc-crm/P2_has_type";
/// `crm:P3_has_note`
pub const P3_HAS_NOTE: &str = "http://www.cidoc-crm.org/cidoc-crm/P3_has_note";
/// `crm:P9_consists_of`
pub const P9_CONSISTS_OF: &str = "http://www.cidoc-crm.org/cidoc-crm/P9_consists_of";
/// `crm:P14_carried_out_by`
pub const P14_CARRIED_OUT_BY: &str = "http://www.cidoc-crm.org/cidoc-crm/P14_carried_out_by";
/// `crm:P70_is_documented_in`
pub const P70_IS_DOCUMENTED_IN: &str = "http://www.cidoc-crm.org/cidoc-crm/P70_is_documented_in";
/// `crm:P81a_end_of_the_begin`
pub const P81A_END_OF_THE_BEGIN: &str = "http://www.cidoc-crm.org/cidoc-crm/P81a_end_of_the_begin";
/// `crm:P81b_begin_of_the_end`
pub const P81B_BEGIN_OF_THE_END: &str = "http://www.cidoc-crm.org/cidoc-crm/P81b_begin_of_the_end";
/// `crm:P82a_begin_of_the_begin`
pub const P82A_BEGIN_OF_THE_BEGIN: &str =
    "http://www.cidoc-crm.org/cidoc-crm/P82a_begin_of_the_begin";
/// `crm:P82b_end_of_the_end`
pub const P82B_END_OF_THE_END: &str = "http://www.cidoc-crm.org/cidoc-crm/P82b_end_of_the_end";
/// `crm:P123_resulted_from`
pub const P123_RESULTED_FROM: &str = "http://www.cidoc-crm.org/cidoc-crm/P123_resulted_from";
/// `crm:P123_resulted_in`
pub const P123_RESULTED_IN: &str = "http://www.cidoc-crm.org/cidoc-crm/P123_resulted_in";

/// `amp:event/types/assertive`
pub const ASSERTIVE: &str = "https://amp.acdh.oeaw.ac.at/event/types/assertive";
/// `amp:event/types/non-assertive`
pub const NON_ASSERTIVE: &str = "https://amp.acdh.oeaw.ac.at/event/types/non-assertive";
/// `amp:event/nano-publication`
pub const NANO_PUBLICATION: &str = "https://amp.acdh.oeaw.ac.at/event/nano-publication";

/// Mints `amp:{local}`, percent-encoding what an IRI reference may not hold.
#[must_use]
pub fn amp(local: &str) -> String {
    format!("{AMP}{}", encode_iri(local))
}

/// Percent-encodes the code points excluded from a Turtle `IRIREF`:
/// controls, space, `<>"{}|^` backtick and backslash. Existing `%XX`
/// escapes pass through, so encoding twice is a no-op.
#[must_use]
pub fn encode_iri(text: &str) -> Cow<'_, str> {
    let forbidden =
        |c: char| c <= ' ' || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\');
    if !text.contains(forbidden) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if forbidden(c) {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{byte:02X}"));
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Local part of a `corresp`-style reference: everything after the last `#`.
#[must_use]
pub fn fragment_suffix(reference: &str) -> &str {
    reference.rsplit('#').next().unwrap_or(reference)
}

/// Local part of a DOI reference: everything after the last `https://doi.org/`.
#[must_use]
pub fn doi_suffix(doi: &str) -> &str {
    doi.rsplit(DOI_PREFIX).next().unwrap_or(doi)
}

/// Creates the run's graph, named after the base domain, with the
/// `amp`, `crm`, `rdf` and `rdfs` prefixes bound.
#[must_use]
pub fn new_graph() -> Graph {
    let mut graph = Graph::named(AMP);
    graph.bind("amp", AMP);
    graph.bind("crm", CRM);
    graph.bind("rdf", RDF);
    graph.bind("rdfs", RDFS);
    graph
}
