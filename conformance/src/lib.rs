//! AMP event graph conformance suite.
//!
//! Checks a finished run from two sides:
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | [`validators::rdf`] | `events.ttl` and `events.trig` parse (RDF 1.1 Turtle / TriG) and hold the same triple set as the live graph |
//! | [`validators::events`] | every mapped event carries exactly one vocabulary type, `E5_Event`, a label and a comment; nano-publication IRIs are minted without the DOI prefix |
//!
//! # Entry Point
//!
//! ```no_run
//! use amp_conformance::{run_all, RunPaths};
//! use amp_cidoc::Variant;
//! use std::path::PathBuf;
//!
//! let paths = RunPaths {
//!     input: PathBuf::from("data/dh2023-xml-amp-transcript__0004.xml"),
//!     artifacts: PathBuf::from("rdf"),
//!     variant: Variant::SubEvent,
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::PathBuf;

use anyhow::Context;

pub use report::{CheckResult, ConformanceReport, Finding, Severity};

/// Paths and layout of the run being checked.
pub struct RunPaths {
    /// TEI transcript the artifacts were built from.
    pub input: PathBuf,
    /// Directory holding `events.ttl` and `events.trig`.
    pub artifacts: PathBuf,
    /// Markup layout the run used.
    pub variant: amp_cidoc::Variant,
}

/// Rebuilds the graph from the transcript, then runs all validators.
///
/// Validators are run in this order:
/// 1. Mapping invariants on the rebuilt graph
/// 2. RDF artifacts against the rebuilt graph
///
/// # Errors
///
/// Returns an error if the transcript cannot be read or mapped, or if an
/// artifact exists but cannot be read.
pub fn run_all(paths: &RunPaths) -> anyhow::Result<ConformanceReport> {
    let doc = amp_cidoc::TeiDocument::from_path(&paths.input)
        .with_context(|| format!("Failed to read {}", paths.input.display()))?;
    let (graph, _) = amp_cidoc::build_graph(&doc, paths.variant)
        .with_context(|| format!("Failed to map {}", paths.input.display()))?;

    let mut report = ConformanceReport::new();
    report.extend(validators::events::validate(&doc, &graph, paths.variant));
    report.extend(validators::rdf::validate(&paths.artifacts, &graph)?);
    Ok(report)
}
