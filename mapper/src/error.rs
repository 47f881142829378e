//! Error taxonomy for a mapping run.
//!
//! Every variant is fatal: the run stops and the message names the element
//! (by `xml:id`) or the path that caused it.

use std::path::PathBuf;

/// Errors raised while reading TEI input, mapping events, or writing RDF.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A required XML attribute is absent on an element being mapped.
    #[error("missing attribute `{attribute}` on element `{element}`")]
    MissingAttribute {
        /// Qualified attribute name (e.g. `xml:id`, `notBefore`).
        attribute: String,
        /// `xml:id` of the element, or its tag name when it has none.
        element: String,
    },

    /// An expected single-valued child element (e.g. `idno`) is absent or empty.
    #[error("missing child element `{child}` in element `{element}`")]
    MissingChildElement {
        /// Local name of the expected child.
        child: String,
        /// `xml:id` of the parent element.
        element: String,
    },

    /// The input is not well-formed XML.
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        /// Byte offset where the reader stopped.
        position: u64,
        /// Underlying reader error.
        #[source]
        source: quick_xml::Error,
    },

    /// The document contains no root element.
    #[error("document has no root element")]
    EmptyDocument,

    /// Reading the input or writing an artifact failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl MapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
