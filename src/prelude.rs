//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the nagare crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use nagare::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/workflow.json")?;
//! let document = GraphDocument::from_json(&json)?;
//! let mut graph = document.into_graph()?;
//!
//! let issues = validate(&graph);
//! for issue in &issues {
//!     println!("[{}] {}", issue.severity, issue.message);
//! }
//!
//! let layering = LayoutEngine::default().arrange(&mut graph);
//! println!("{} layers", layering.layers.len());
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{
    Activity, ActivityKind, Connection, ExecutionStatus, Position, WorkflowGraph,
};

// Validation
pub use crate::validate::{Severity, ValidationIssue, has_blocking_issues, validate};

// Layout
pub use crate::layout::{Layering, LayoutConfig, LayoutEngine};

// Execution
pub use crate::observer::{NoopObserver, WorkflowObserver};
pub use crate::schedule::{
    ExecutionRun, RunOutcome, RunReport, RunState, Scheduler, SchedulerConfig,
};

// Documents
pub use crate::document::{GraphDocument, IntoWorkflowGraph};

// Error types
pub use crate::error::{DocumentError, GraphError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
