use crate::graph::{ExecutionStatus, WorkflowGraph};
use crate::layout::Layering;
use crate::observer::WorkflowObserver;
use crate::validate::{blocking_issues, validate};
use chrono::Utc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

mod run;

pub use run::{ExecutionRun, RunOutcome, RunReport, RunState, StepRecord};

/// Pacing knobs for the simulated execution.
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Simulated milliseconds of delay per estimated minute of effort.
    pub millis_per_estimated_minute: u64,
    /// Delay for activities without an effort estimate.
    pub default_step_delay: Duration,
    /// Upper bound on any single step's delay, so a generous estimate
    /// cannot stall the simulation.
    pub max_step_delay: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            millis_per_estimated_minute: 10,
            default_step_delay: Duration::from_millis(40),
            max_step_delay: Duration::from_millis(250),
        }
    }
}

/// Drives one simulated execution of a workflow graph.
///
/// The run order is the same breadth-first visit order the layout engine
/// layers by, and execution is strictly sequential: one activity at a
/// time, suspending between steps so the host stays responsive and the
/// cancellation token can be observed. An in-flight step always finishes
/// before cancellation takes effect.
///
/// The scheduler takes the graph by exclusive borrow for the whole run,
/// so a second run on the same graph cannot start while one is active.
/// Rejection and cancellation are ordinary outcomes reported through the
/// [`RunReport`], not errors; the graph is never left in a partially
/// executed state, because any run that does not complete resets every
/// activity's status before reporting.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Validates the graph and, when no blocking error is present,
    /// simulates executing every reachable activity in order.
    ///
    /// Status transitions and aggregate progress are written back into
    /// the graph and mirrored to the observer as they happen; the
    /// returned report carries the final [`ExecutionRun`] snapshot.
    pub async fn run(
        &self,
        graph: &mut WorkflowGraph,
        observer: &dyn WorkflowObserver,
        cancel: &CancellationToken,
    ) -> RunReport {
        let mut run = ExecutionRun::idle();
        run.transition(RunState::Validating);

        let issues = validate(graph);
        observer.validation_issues_changed(&issues);

        let blocking = blocking_issues(&issues);
        if !blocking.is_empty() {
            run.transition(RunState::Rejected);
            info!(
                blocking = blocking.len(),
                "Refusing to execute a workflow with blocking validation errors"
            );
            let report = RunReport {
                outcome: RunOutcome::Rejected,
                executed: 0,
                blocking_issues: blocking,
                run,
            };
            observer.run_finished(&report);
            return report;
        }

        let order = Layering::compute(graph).visit_order();
        run.order = order.clone();
        run.steps = order
            .iter()
            .map(|id| StepRecord {
                activity_id: id.clone(),
                duration_estimate: self.step_delay(graph, id),
                started_at: None,
                completed_at: None,
            })
            .collect();

        graph.reset_execution_status();
        run.transition(RunState::Running);
        info!(activities = order.len(), "Starting workflow execution run");

        let total = order.len();
        for (index, activity_id) in order.iter().enumerate() {
            if cancel.is_cancelled() {
                return self.finish_cancelled(graph, observer, run);
            }

            run.current_index = index;
            run.steps[index].started_at = Some(Utc::now());
            run.touch();
            self.record_status(
                graph,
                observer,
                activity_id,
                ExecutionStatus::Running,
                run.progress_percent,
            );

            let delay = run.steps[index].duration_estimate;
            debug!(activity = %activity_id, ?delay, "Simulating activity execution");
            tokio::time::sleep(delay).await;

            run.steps[index].completed_at = Some(Utc::now());
            run.progress_percent = (index + 1) as f64 / total as f64 * 100.0;
            run.touch();
            self.record_status(
                graph,
                observer,
                activity_id,
                ExecutionStatus::Completed,
                run.progress_percent,
            );
        }

        if cancel.is_cancelled() {
            return self.finish_cancelled(graph, observer, run);
        }

        run.current_index = total;
        run.transition(RunState::Completed);
        info!(executed = total, "Workflow execution run completed");
        let report = RunReport {
            outcome: RunOutcome::Completed,
            executed: total,
            blocking_issues: Vec::new(),
            run,
        };
        observer.run_finished(&report);
        report
    }

    /// The simulated delay for one activity: scaled from its estimated
    /// effort when present, defaulted otherwise, and always capped.
    fn step_delay(&self, graph: &WorkflowGraph, activity_id: &str) -> Duration {
        let estimated = graph
            .activity(activity_id)
            .and_then(|a| a.estimated_minutes)
            .map(|minutes| {
                Duration::from_millis(u64::from(minutes) * self.config.millis_per_estimated_minute)
            })
            .unwrap_or(self.config.default_step_delay);
        estimated.min(self.config.max_step_delay)
    }

    fn record_status(
        &self,
        graph: &mut WorkflowGraph,
        observer: &dyn WorkflowObserver,
        activity_id: &str,
        status: ExecutionStatus,
        progress_percent: f64,
    ) {
        // The id came from a traversal of this same graph.
        let _ = graph.set_execution_status(activity_id, status);
        observer.execution_status_changed(activity_id, status, progress_percent);
    }

    fn finish_cancelled(
        &self,
        graph: &mut WorkflowGraph,
        observer: &dyn WorkflowObserver,
        mut run: ExecutionRun,
    ) -> RunReport {
        let executed = run.executed_count();
        graph.reset_execution_status();
        run.cancelled = true;
        run.transition(RunState::Cancelled);
        info!(executed, "Workflow execution run cancelled");
        let report = RunReport {
            outcome: RunOutcome::Cancelled,
            executed,
            blocking_issues: Vec::new(),
            run,
        };
        observer.run_finished(&report);
        report
    }
}
