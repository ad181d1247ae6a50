use crate::graph::{ActivityKind, WorkflowGraph};
use itertools::Itertools;
use std::fmt;

/// How severe a structural issue is.
///
/// Only `Error` blocks execution; a graph carrying errors remains freely
/// editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// A single structural finding about a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    pub affected_activity_ids: Vec<String>,
}

impl ValidationIssue {
    fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            affected_activity_ids: Vec::new(),
        }
    }

    fn warning(message: impl Into<String>, affected: Vec<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            affected_activity_ids: affected,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            affected_activity_ids: Vec::new(),
        }
    }
}

/// Runs every structural check against a graph snapshot and returns the
/// findings in rule order.
///
/// The checks are independent; none of them short-circuits the others. A
/// graph that passes all of them yields a single all-clear `Info` issue,
/// so the result is never empty.
///
/// Start/end detection is a degree heuristic: a graph where every
/// activity has an incoming connection has no possible starting point,
/// which is reported as an error and usually indicates a cycle. The
/// heuristic does not trace actual cycle membership.
pub fn validate(graph: &WorkflowGraph) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if graph.is_empty() {
        issues.push(ValidationIssue::info(
            "The workflow has no activities yet. Add activities to get started.",
        ));
        return issues;
    }

    let unconfigured: Vec<String> = graph
        .activities()
        .iter()
        .filter(|a| !a.configured)
        .map(|a| a.id.clone())
        .collect();
    if !unconfigured.is_empty() {
        issues.push(ValidationIssue::warning(
            format!(
                "{} {} not been configured yet: {}",
                unconfigured.len(),
                if unconfigured.len() == 1 {
                    "activity has"
                } else {
                    "activities have"
                },
                unconfigured.iter().join(", ")
            ),
            unconfigured,
        ));
    }

    if graph.activity_count() > 1 {
        let isolated: Vec<String> = graph
            .activities()
            .iter()
            .filter(|a| !graph.is_connected(&a.id))
            .map(|a| a.id.clone())
            .collect();
        if !isolated.is_empty() {
            issues.push(ValidationIssue::warning(
                format!(
                    "{} {} not connected to the rest of the workflow: {}",
                    isolated.len(),
                    if isolated.len() == 1 {
                        "activity is"
                    } else {
                        "activities are"
                    },
                    isolated.iter().join(", ")
                ),
                isolated,
            ));
        }
    }

    if !graph.contains_kind(ActivityKind::Goal) {
        issues.push(ValidationIssue::warning(
            "The workflow has no goal activity. Define what the research should achieve.",
            Vec::new(),
        ));
    }

    if graph.activity_count() > 2
        && !graph.contains_kind(ActivityKind::Analysis)
        && !graph.contains_kind(ActivityKind::Insights)
    {
        issues.push(ValidationIssue::info(
            "Consider adding an analysis or insights activity to make sense of the collected data.",
        ));
    }

    if graph.activity_count() > 1 {
        if graph.activities_with_no_incoming().is_empty() {
            issues.push(ValidationIssue::error(
                "The workflow has no starting point: every activity has an incoming connection. This usually indicates a cycle.",
            ));
        }
        if graph.activities_with_no_outgoing().is_empty() {
            issues.push(ValidationIssue::error(
                "The workflow has no ending point: every activity has an outgoing connection. This usually indicates a cycle.",
            ));
        }
    }

    if issues.is_empty() {
        issues.push(ValidationIssue::info("The workflow is valid."));
    }

    issues
}

/// Whether any issue is severe enough to block an execution run.
pub fn has_blocking_issues(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

/// The subset of issues that block execution.
pub fn blocking_issues(issues: &[ValidationIssue]) -> Vec<ValidationIssue> {
    issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .cloned()
        .collect()
}
