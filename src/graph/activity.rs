use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of research-process step types an activity can take.
///
/// The engine treats these as opaque identities: the only kinds it ever
/// inspects are the markers relevant to structural validation (`Goal`,
/// `Analysis`, `Insights`). Everything a kind *means*, such as how many
/// personas to generate or which survey to send, lives in the activity's
/// `configuration` payload and is owned by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    StartMarker,
    Goal,
    GeneratePersonas,
    Survey,
    FocusGroup,
    Analysis,
    Insights,
    Decision,
    Delay,
    Notification,
    EndMarker,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityKind::StartMarker => "start-marker",
            ActivityKind::Goal => "goal",
            ActivityKind::GeneratePersonas => "generate-personas",
            ActivityKind::Survey => "survey",
            ActivityKind::FocusGroup => "focus-group",
            ActivityKind::Analysis => "analysis",
            ActivityKind::Insights => "insights",
            ActivityKind::Decision => "decision",
            ActivityKind::Delay => "delay",
            ActivityKind::Notification => "notification",
            ActivityKind::EndMarker => "end-marker",
        };
        write!(f, "{}", name)
    }
}

/// Execution state of a single activity, written only by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    #[default]
    None,
    Pending,
    Running,
    Completed,
    Failed,
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionStatus::None => "none",
            ExecutionStatus::Pending => "pending",
            ExecutionStatus::Running => "running",
            ExecutionStatus::Completed => "completed",
            ExecutionStatus::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// A 2-D canvas coordinate, written by the layout engine or by direct
/// user placement in the embedding editor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single step of a research process.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub label: String,
    pub description: Option<String>,
    /// Kind-specific configuration payload. Stored verbatim, never
    /// inspected by the engine; validated by the embedding application.
    pub configuration: serde_json::Value,
    /// True once a human has saved configuration for this activity.
    pub configured: bool,
    /// Free-text grouping tag (e.g. "Planning"), display only.
    pub phase_group: Option<String>,
    /// Estimated wall-clock effort in minutes. External metadata; the
    /// scheduler derives its simulated step delay from it.
    pub estimated_minutes: Option<u32>,
    pub execution_status: ExecutionStatus,
    pub position: Position,
}

impl Activity {
    /// Creates an activity with the given id, kind, and label, with all
    /// optional fields empty and execution state cleared.
    pub fn new(id: impl Into<String>, kind: ActivityKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            description: None,
            configuration: serde_json::Value::Null,
            configured: false,
            phase_group: None,
            estimated_minutes: None,
            execution_status: ExecutionStatus::None,
            position: Position::default(),
        }
    }

    pub fn with_configuration(mut self, configuration: serde_json::Value) -> Self {
        self.configuration = configuration;
        self.configured = true;
        self
    }

    pub fn with_phase_group(mut self, phase_group: impl Into<String>) -> Self {
        self.phase_group = Some(phase_group.into());
        self
    }

    pub fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }
}
