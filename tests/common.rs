//! Common test utilities for building workflow graphs.
use nagare::prelude::*;

/// Creates a configured activity, the way the editor leaves one after a
/// human saves its settings dialog.
#[allow(dead_code)]
pub fn configured(id: &str, kind: ActivityKind, label: &str) -> Activity {
    Activity::new(id, kind, label).with_configuration(serde_json::json!({ "saved": true }))
}

/// A fully wired five-step research flow:
/// goal -> personas -> survey -> analysis -> end, all configured.
#[allow(dead_code)]
pub fn research_flow() -> WorkflowGraph {
    let mut graph = WorkflowGraph::new();
    graph
        .add_activity(configured("goal", ActivityKind::Goal, "Understand churn"))
        .unwrap();
    graph
        .add_activity(configured(
            "personas",
            ActivityKind::GeneratePersonas,
            "Churned customers",
        ))
        .unwrap();
    graph
        .add_activity(configured("survey", ActivityKind::Survey, "Exit survey"))
        .unwrap();
    graph
        .add_activity(configured(
            "analysis",
            ActivityKind::Analysis,
            "Cluster responses",
        ))
        .unwrap();
    graph
        .add_activity(configured("end", ActivityKind::EndMarker, "Done"))
        .unwrap();
    graph
        .add_connection(Connection::new("c1", "goal", "personas"))
        .unwrap();
    graph
        .add_connection(Connection::new("c2", "personas", "survey"))
        .unwrap();
    graph
        .add_connection(Connection::new("c3", "survey", "analysis"))
        .unwrap();
    graph
        .add_connection(Connection::new("c4", "analysis", "end"))
        .unwrap();
    graph
}

/// Two chains diverging from a single root: r -> a, r -> b.
#[allow(dead_code)]
pub fn diverging() -> WorkflowGraph {
    let mut graph = WorkflowGraph::new();
    graph
        .add_activity(configured("r", ActivityKind::Goal, "Root"))
        .unwrap();
    graph
        .add_activity(configured("a", ActivityKind::Survey, "Branch A"))
        .unwrap();
    graph
        .add_activity(configured("b", ActivityKind::FocusGroup, "Branch B"))
        .unwrap();
    graph.add_connection(Connection::new("c1", "r", "a")).unwrap();
    graph.add_connection(Connection::new("c2", "r", "b")).unwrap();
    graph
}

/// A two-activity cycle: a -> b -> a. No possible start or end.
#[allow(dead_code)]
pub fn two_cycle() -> WorkflowGraph {
    let mut graph = WorkflowGraph::new();
    graph
        .add_activity(configured("a", ActivityKind::Survey, "First"))
        .unwrap();
    graph
        .add_activity(configured("b", ActivityKind::Analysis, "Second"))
        .unwrap();
    graph.add_connection(Connection::new("c1", "a", "b")).unwrap();
    graph.add_connection(Connection::new("c2", "b", "a")).unwrap();
    graph
}

/// A reachable main flow plus a cyclic fragment no root can reach:
/// x -> y alongside loop1 <-> loop2.
#[allow(dead_code)]
pub fn with_unreachable_fragment() -> WorkflowGraph {
    let mut graph = WorkflowGraph::new();
    graph
        .add_activity(configured("x", ActivityKind::Goal, "Kickoff"))
        .unwrap();
    graph
        .add_activity(configured("y", ActivityKind::Insights, "Wrap up"))
        .unwrap();
    graph
        .add_activity(configured("loop1", ActivityKind::Survey, "Loop one"))
        .unwrap();
    graph
        .add_activity(configured("loop2", ActivityKind::Decision, "Loop two"))
        .unwrap();
    graph.add_connection(Connection::new("m1", "x", "y")).unwrap();
    graph
        .add_connection(Connection::new("f1", "loop1", "loop2"))
        .unwrap();
    graph
        .add_connection(Connection::new("f2", "loop2", "loop1"))
        .unwrap();
    graph
}
