//! # Nagare - Workflow Graph Engine
//!
//! **Nagare** is the graph engine behind a visual research-workflow builder: a
//! directed graph of research activities (persona generation, surveys, focus
//! groups, analysis) connected by dependencies, together with a structural
//! validator, a deterministic auto-layout algorithm, and a topological
//! execution scheduler that simulates running the graph end-to-end with live
//! per-activity status and cancellation.
//!
//! The engine owns structure, not meaning: what an activity *does* is an
//! opaque configuration payload owned by the embedding application, and the
//! engine never performs real research work. What it guarantees is ordering.
//! The same breadth-first layering drives both the canvas layout and the
//! execution order, so what you see is what runs.
//!
//! ## Core Workflow
//!
//! 1.  **Load or build a graph**: Parse a [`GraphDocument`](document::GraphDocument)
//!     from JSON (or implement [`IntoWorkflowGraph`](document::IntoWorkflowGraph)
//!     for your own storage format) and convert it into a
//!     [`WorkflowGraph`](graph::WorkflowGraph), or assemble one activity by
//!     activity.
//! 2.  **Validate**: [`validate`](validate::validate) produces the ordered
//!     issue list; only `Error`-severity issues block execution.
//! 3.  **Arrange**: [`LayoutEngine`](layout::LayoutEngine) layers the graph
//!     breadth-first from its roots and writes canvas positions back.
//! 4.  **Run**: [`Scheduler`](schedule::Scheduler) simulates executing every
//!     reachable activity sequentially, reporting status through a
//!     [`WorkflowObserver`](observer::WorkflowObserver) and honoring
//!     cooperative cancellation between steps.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nagare::prelude::*;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let mut graph = WorkflowGraph::new();
//!     graph.add_activity(
//!         Activity::new("goal", ActivityKind::Goal, "Understand churn")
//!             .with_configuration(serde_json::json!({ "metric": "retention" })),
//!     )?;
//!     graph.add_activity(
//!         Activity::new("survey", ActivityKind::Survey, "Exit survey")
//!             .with_configuration(serde_json::json!({ "sampleSize": 200 }))
//!             .with_estimated_minutes(30),
//!     )?;
//!     graph.add_activity(
//!         Activity::new("analysis", ActivityKind::Analysis, "Cluster responses")
//!             .with_configuration(serde_json::json!({ "method": "k-means" })),
//!     )?;
//!     graph.add_connection(Connection::new("c1", "goal", "survey"))?;
//!     graph.add_connection(Connection::new("c2", "survey", "analysis"))?;
//!
//!     // Validate: a fully wired, configured graph reports a single info issue.
//!     let issues = validate(&graph);
//!     assert!(!has_blocking_issues(&issues));
//!
//!     // Arrange: positions are derived from the breadth-first layering.
//!     let layering = LayoutEngine::default().arrange(&mut graph);
//!     assert_eq!(layering.layers.len(), 3);
//!
//!     // Run: sequential simulated execution with live status write-back.
//!     let scheduler = Scheduler::default();
//!     let report = scheduler
//!         .run(&mut graph, &NoopObserver, &CancellationToken::new())
//!         .await;
//!     assert_eq!(report.outcome, RunOutcome::Completed);
//!     assert_eq!(report.executed, 3);
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod graph;
pub mod layout;
pub mod observer;
pub mod prelude;
pub mod schedule;
pub mod validate;
