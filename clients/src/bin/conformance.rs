//! `amp-conformance` — Validates the AMP event graph and its written artifacts.
//!
//! Rebuilds the graph from the transcript, checks the mapping invariants,
//! then re-parses `events.ttl` and `events.trig` (and `events.nt` if present)
//! and compares them with the rebuilt graph.
//!
//! **Usage:**
//! ```
//! amp-conformance [--input <path>] [--artifacts <path>] [--variant a|b]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use amp_cidoc::Variant;
use amp_conformance::{run_all, RunPaths, Severity};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the AMP event graph conformance suite.
#[derive(Parser)]
#[command(
    name = "amp-conformance",
    about = "Validate AMP event graph artifacts against the mapping invariants"
)]
struct Args {
    /// TEI/XML transcript the artifacts were built from.
    #[arg(long, default_value = "data/dh2023-xml-amp-transcript__0004.xml")]
    input: PathBuf,

    /// Path to the built artifacts directory (default: rdf/).
    #[arg(long, default_value = "rdf")]
    artifacts: PathBuf,

    /// Markup layout the artifacts were built with.
    #[arg(long, default_value = "a")]
    variant: Variant,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();

    let report = run_all(&RunPaths {
        input: args.input,
        artifacts: args.artifacts,
        variant: args.variant,
    })?;

    // Print results
    println!("AMP Event Graph Conformance Report");
    println!("==================================");
    println!();

    for result in &report.results {
        println!("[{}] {} — {}", result.severity.tag(), result.validator, result.message);
        for finding in &result.findings {
            println!("       {}", finding);
        }
    }

    let failed = report.count(Severity::Failure);
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
