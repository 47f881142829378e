//! Check results and their aggregation.
//!
//! Each validator emits one [`CheckResult`] per check. A result that does
//! not pass lists its [`Finding`]s: the event id, IRI or artifact file it
//! concerns and what is wrong with it.

use std::fmt;

/// Outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Passed.
    Pass,
    /// Reported but does not fail the run (e.g. type fallbacks).
    Warning,
    /// Fails the run.
    Failure,
}

impl Severity {
    /// Status tag printed by the conformance client.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// One offending item behind a warning or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Event `xml:id`, IRI, or artifact file name.
    pub subject: String,
    /// What is wrong with it.
    pub note: String,
}

impl Finding {
    /// Creates a finding about `subject`.
    pub fn new(subject: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            note: note.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.note)
    }
}

/// Result of one check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Validator that ran the check (`events`, `rdf`).
    pub validator: &'static str,
    /// Summary line.
    pub message: String,
    /// Outcome.
    pub severity: Severity,
    /// Offending items; empty for passes.
    pub findings: Vec<Finding>,
}

impl CheckResult {
    /// A passing check.
    pub fn pass(validator: &'static str, message: impl Into<String>) -> Self {
        Self {
            validator,
            message: message.into(),
            severity: Severity::Pass,
            findings: Vec::new(),
        }
    }

    /// A failed check with its findings.
    pub fn fail(validator: &'static str, message: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            validator,
            message: message.into(),
            severity: Severity::Failure,
            findings,
        }
    }

    /// A non-blocking check with its findings.
    pub fn warn(validator: &'static str, message: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            validator,
            message: message.into(),
            severity: Severity::Warning,
            findings,
        }
    }
}

/// All results of a conformance run, in check order.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Results across all validators.
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of results with `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Failed results.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.severity == Severity::Failure)
    }

    /// True when nothing failed. Warnings do not count.
    pub fn all_passed(&self) -> bool {
        self.failures().next().is_none()
    }
}
