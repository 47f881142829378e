//! `amp-build` — Maps the AMP TEI transcript to CIDOC-CRM and writes the
//! RDF artifacts to the output directory.
//!
//! **Outputs:**
//! - `<out>/events.ttl` — Turtle 1.1
//! - `<out>/events.trig` — TriG, graph `<https://amp.acdh.oeaw.ac.at/>`
//! - `<out>/events.nt` — N-Triples (only with `--ntriples`)
//!
//! **Usage:**
//! ```
//! amp-build [--input <path>] [--out <path>] [--variant a|b] [--ntriples]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use amp_cidoc::{build_graph, serializer, TeiDocument, Variant};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Build the AMP event graph artifacts.
#[derive(Parser)]
#[command(name = "amp-build", about = "Map TEI event markup to CIDOC-CRM Turtle and TriG")]
struct Args {
    /// TEI/XML transcript to read.
    #[arg(long, default_value = "data/dh2023-xml-amp-transcript__0004.xml")]
    input: PathBuf,

    /// Output directory for generated artifacts.
    #[arg(long, default_value = "rdf")]
    out: PathBuf,

    /// Markup layout: `a` (nested sub-events) or `b` (flat attributes).
    #[arg(long, default_value = "a")]
    variant: Variant,

    /// Also write `events.nt`.
    #[arg(long)]
    ntriples: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let doc = TeiDocument::from_path(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let (graph, summary) = build_graph(&doc, args.variant)
        .with_context(|| format!("Failed to map {}", args.input.display()))?;

    // Print summary
    println!(
        "AMP events (variant {}): {} events, {} sub-events, {} nano-publications, {} fallbacks, {} triples",
        args.variant,
        summary.events,
        summary.sub_events,
        summary.nano_publications,
        summary.fallbacks,
        graph.len()
    );

    let written = serializer::write_artifacts(&graph, &args.out, args.ntriples)
        .with_context(|| format!("Failed to write artifacts to {}", args.out.display()))?;
    for path in &written {
        println!("  Written: {}", path.display());
    }

    println!("Build complete.");
    Ok(())
}
