use graphkit_core::{Iri, Term};

use crate::shape::Severity;

/// A single constraint violation (or warning/info) found during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub focus_node: Term,
    pub result_path: Option<Iri>,
    pub value: Option<Term>,
    pub source_constraint_component: String,
    pub source_shape: Iri,
    pub message: Option<String>,
    pub severity: Severity,
}

impl ValidationResult {
    pub fn is_violation(&self) -> bool {
        matches!(self.severity, Severity::Violation)
    }
}

/// The outcome of validating a store against a shapes graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    /// True iff no result carries [`Severity::Violation`]. Warnings and
    /// info results never affect conformance.
    pub fn conforms(&self) -> bool {
        !self.results.iter().any(ValidationResult::is_violation)
    }

    pub fn violation_count(&self) -> usize {
        self.results.iter().filter(|r| r.severity == Severity::Violation).count()
    }

    pub fn warning_count(&self) -> usize {
        self.results.iter().filter(|r| r.severity == Severity::Warning).count()
    }

    pub fn info_count(&self) -> usize {
        self.results.iter().filter(|r| r.severity == Severity::Info).count()
    }

    pub fn to_simple_string(&self) -> String {
        if self.conforms() {
            return "conforms: true".to_string();
        }
        let mut out = format!(
            "conforms: false ({} violation(s), {} warning(s), {} info)\n",
            self.violation_count(),
            self.warning_count(),
            self.info_count()
        );
        for result in &self.results {
            out.push_str(&format!(
                "  [{:?}] {} on {}{}: {}\n",
                result.severity,
                result.source_constraint_component,
                result.focus_node,
                result
                    .result_path
                    .as_ref()
                    .map(|p| format!(" via {}", p))
                    .unwrap_or_default(),
                result.message.as_deref().unwrap_or("violates constraint"),
            ));
        }
        out
    }
}
