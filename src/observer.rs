use crate::graph::{ExecutionStatus, WorkflowGraph};
use crate::layout::Layering;
use crate::schedule::RunReport;
use crate::validate::ValidationIssue;

/// Callbacks the engine raises toward the embedding application.
///
/// The presentation layer implements this to mirror engine state into
/// its own views; every method has a no-op default so implementors pick
/// only the events they care about. The scheduler raises the validation,
/// status, and finish events;
/// [`LayoutEngine::arrange_observed`](crate::layout::LayoutEngine::arrange_observed)
/// raises the layout event.
pub trait WorkflowObserver {
    /// A fresh validation pass produced this issue list.
    fn validation_issues_changed(&self, _issues: &[ValidationIssue]) {}

    /// The layout engine wrote new positions into the graph.
    fn layout_computed(&self, _layering: &Layering, _graph: &WorkflowGraph) {}

    /// An activity's execution status changed; `progress_percent` is the
    /// aggregate progress of the active run at that moment.
    fn execution_status_changed(
        &self,
        _activity_id: &str,
        _status: ExecutionStatus,
        _progress_percent: f64,
    ) {
    }

    /// The active run reached a terminal state (completed, cancelled, or
    /// rejected).
    fn run_finished(&self, _report: &RunReport) {}
}

/// An observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl WorkflowObserver for NoopObserver {}
