use crate::validate::ValidationIssue;
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// Lifecycle of one execution run.
///
/// `Idle → Validating → (Rejected | Running) → (Completed | Cancelled)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Validating,
    Rejected,
    Running,
    Completed,
    Cancelled,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Validating => "validating",
            RunState::Rejected => "rejected",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Cancelled => "cancelled",
        };
        write!(f, "{}", name)
    }
}

/// Timing record for one scheduled step, aligned with the run order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub activity_id: String,
    /// The simulated execution delay derived from the activity's
    /// estimated-effort hint, after capping.
    pub duration_estimate: Duration,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// The state of one attempt to run a graph to completion.
///
/// An explicit value object rather than scattered node fields: every
/// mutation bumps `version`, so consumers holding a snapshot can tell
/// staleness apart without diffing. Ephemeral: runs are never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionRun {
    pub state: RunState,
    /// Activity ids in scheduled order (the breadth-first visit order).
    pub order: Vec<String>,
    /// Index of the step currently executing, or one past the end after
    /// normal completion.
    pub current_index: usize,
    /// Aggregate progress, 0.0 to 100.0.
    pub progress_percent: f64,
    pub cancelled: bool,
    /// One record per entry of `order`, same indexing.
    pub steps: Vec<StepRecord>,
    /// Bumped on every mutation of this run.
    pub version: u64,
}

impl ExecutionRun {
    pub(super) fn idle() -> Self {
        Self {
            state: RunState::Idle,
            order: Vec::new(),
            current_index: 0,
            progress_percent: 0.0,
            cancelled: false,
            steps: Vec::new(),
            version: 0,
        }
    }

    pub(super) fn touch(&mut self) {
        self.version += 1;
    }

    pub(super) fn transition(&mut self, state: RunState) {
        self.state = state;
        self.touch();
    }

    /// Number of steps that finished executing.
    pub fn executed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed_at.is_some()).count()
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Blocking validation errors were present; nothing was executed.
    Rejected,
    /// Every scheduled activity ran to completion.
    Completed,
    /// The run was cancelled between steps; all statuses were reset.
    Cancelled,
}

/// Terminal summary of an execution run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// How many activities finished executing before the run ended.
    pub executed: usize,
    /// The blocking issues, non-empty exactly when `outcome` is
    /// `Rejected`.
    pub blocking_issues: Vec<ValidationIssue>,
    /// Final snapshot of the run's state.
    pub run: ExecutionRun,
}
