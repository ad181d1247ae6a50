//! Integration tests for nagare
//!
//! End-to-end tests that verify documents, validation, layout, and
//! execution work together.
mod common;
use common::*;
use nagare::document::{ActivityRecord, ConnectionRecord};
use nagare::prelude::*;
use tokio_util::sync::CancellationToken;

const SAVED_WORKFLOW_JSON: &str = r#"{
    "name": "Churn deep-dive",
    "description": "Why are trial users leaving?",
    "activities": [
        {
            "id": "goal",
            "type": "goal",
            "label": "Understand churn",
            "configuration": { "metric": "retention" },
            "configured": true,
            "phaseGroup": "Planning"
        },
        {
            "id": "personas",
            "type": "generate-personas",
            "label": "Churned customers",
            "configuration": { "count": 5 },
            "configured": true,
            "estimatedMinutes": 15
        },
        {
            "id": "survey",
            "type": "survey",
            "label": "Exit survey",
            "configuration": { "sampleSize": 200 },
            "configured": true,
            "estimatedMinutes": 30
        },
        {
            "id": "analysis",
            "type": "analysis",
            "label": "Cluster responses",
            "configuration": { "method": "k-means" },
            "configured": true
        },
        {
            "id": "end",
            "type": "end-marker",
            "label": "Done",
            "configuration": {},
            "configured": true
        }
    ],
    "connections": [
        { "id": "c1", "sourceActivityId": "goal", "targetActivityId": "personas" },
        { "id": "c2", "sourceActivityId": "personas", "targetActivityId": "survey" },
        { "id": "c3", "sourceActivityId": "survey", "targetActivityId": "analysis" },
        { "id": "c4", "sourceActivityId": "analysis", "targetActivityId": "end" }
    ]
}"#;

#[tokio::test]
async fn test_saved_workflow_end_to_end() {
    let document = GraphDocument::from_json(SAVED_WORKFLOW_JSON).expect("Failed to parse document");
    assert_eq!(document.name.as_deref(), Some("Churn deep-dive"));

    let mut graph = document.into_graph().expect("Failed to build graph");
    assert_eq!(graph.activity_count(), 5);

    // A fully wired, configured flow validates clean.
    let issues = validate(&graph);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("valid"));

    // Layout places one activity per layer, top to bottom.
    let layering = LayoutEngine::default().arrange(&mut graph);
    assert_eq!(layering.layers.len(), 5);
    assert!(layering.overflow.is_empty());

    // The simulation runs every activity to completion.
    let report = Scheduler::default()
        .run(&mut graph, &NoopObserver, &CancellationToken::new())
        .await;
    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(report.executed, 5);
    assert_eq!(report.run.progress_percent, 100.0);
    for activity in graph.activities() {
        assert_eq!(activity.execution_status, ExecutionStatus::Completed);
    }
}

#[test]
fn test_document_round_trip_preserves_structure() {
    let mut original = research_flow();
    original
        .add_connection(
            Connection::new("c5", "analysis", "survey").with_condition("needs follow-up"),
        )
        .unwrap();

    let exported = GraphDocument::from_graph(
        &original,
        Some("Round trip".to_string()),
        Some("A test".to_string()),
    );
    assert!(exported.exported_at.is_some());

    let json = exported.to_json().expect("Failed to serialize");
    let reloaded = GraphDocument::from_json(&json)
        .expect("Failed to parse")
        .into_graph()
        .expect("Failed to rebuild graph");

    assert_eq!(reloaded.activity_count(), original.activity_count());
    assert_eq!(reloaded.connections().len(), original.connections().len());
    for activity in original.activities() {
        let restored = reloaded.activity(&activity.id).expect("activity lost");
        assert_eq!(restored.kind, activity.kind);
        assert_eq!(restored.label, activity.label);
        assert_eq!(restored.configuration, activity.configuration);
        assert_eq!(restored.configured, activity.configured);
    }
    let condition = reloaded.connection("c5").expect("connection lost");
    assert_eq!(condition.condition.as_deref(), Some("needs follow-up"));
}

#[test]
fn test_export_omits_execution_state() {
    let mut graph = research_flow();
    graph
        .set_execution_status("goal", ExecutionStatus::Running)
        .unwrap();

    let exported = GraphDocument::from_graph(&graph, None, None);
    let reloaded = exported.into_graph().expect("Failed to rebuild graph");

    // A saved document never carries a half-finished run.
    assert_eq!(
        reloaded.activity("goal").unwrap().execution_status,
        ExecutionStatus::None
    );
}

#[test]
fn test_document_with_dangling_connection_is_rejected() {
    let json = r#"{
        "activities": [
            { "id": "a", "type": "survey", "label": "Survey" }
        ],
        "connections": [
            { "id": "c1", "sourceActivityId": "a", "targetActivityId": "ghost" }
        ]
    }"#;

    let result = GraphDocument::from_json(json).expect("parse succeeds").into_graph();
    match result {
        Err(DocumentError::MalformedDocument(GraphError::EndpointNotFound {
            missing_activity_id,
            ..
        })) => assert_eq!(missing_activity_id, "ghost"),
        other => panic!("expected an endpoint error, got {:?}", other),
    }
}

#[test]
fn test_malformed_json_is_reported() {
    let result = GraphDocument::from_json("{ not json }");
    assert!(matches!(result, Err(DocumentError::JsonParseError(_))));
}

#[test]
fn test_custom_format_conversion() {
    // A minimal legacy format: a list of (id, kind, follows) triples.
    struct LegacyPlan {
        steps: Vec<(String, ActivityKind, Option<String>)>,
    }

    impl IntoWorkflowGraph for LegacyPlan {
        fn into_workflow_graph(self) -> std::result::Result<WorkflowGraph, DocumentError> {
            let mut graph = WorkflowGraph::new();
            for (id, kind, _) in &self.steps {
                graph.add_activity(Activity::new(id.clone(), *kind, id.clone()))?;
            }
            for (id, _, follows) in &self.steps {
                if let Some(predecessor) = follows {
                    let connection_id = format!("{}-{}", predecessor, id);
                    graph.add_connection(Connection::new(
                        connection_id,
                        predecessor.clone(),
                        id.clone(),
                    ))?;
                }
            }
            Ok(graph)
        }
    }

    let plan = LegacyPlan {
        steps: vec![
            ("kickoff".to_string(), ActivityKind::Goal, None),
            (
                "interviews".to_string(),
                ActivityKind::FocusGroup,
                Some("kickoff".to_string()),
            ),
            (
                "readout".to_string(),
                ActivityKind::Insights,
                Some("interviews".to_string()),
            ),
        ],
    };

    let graph = plan.into_workflow_graph().expect("conversion failed");
    assert_eq!(graph.activity_count(), 3);
    assert_eq!(
        Layering::compute(&graph).visit_order(),
        vec!["kickoff", "interviews", "readout"]
    );
}

#[test]
fn test_document_records_expose_expected_json_names() {
    // The interchange format is camelCase with kebab-case activity types.
    let record = ActivityRecord {
        id: "a".to_string(),
        kind: ActivityKind::FocusGroup,
        label: "Focus group".to_string(),
        description: None,
        configuration: serde_json::Value::Null,
        configured: false,
        phase_group: Some("Fieldwork".to_string()),
        estimated_minutes: Some(60),
        position: Some(Position::new(10.0, 20.0)),
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["type"], "focus-group");
    assert_eq!(json["phaseGroup"], "Fieldwork");
    assert_eq!(json["estimatedMinutes"], 60);
    assert_eq!(json["position"]["x"], 10.0);

    let connection = ConnectionRecord {
        id: "c".to_string(),
        source_activity_id: "a".to_string(),
        target_activity_id: "b".to_string(),
        condition: None,
    };
    let json = serde_json::to_value(&connection).unwrap();
    assert_eq!(json["sourceActivityId"], "a");
    assert_eq!(json["targetActivityId"], "b");
}

#[test]
fn test_prelude_import_completeness() {
    // Verify that the prelude exports work correctly
    let _graph: Option<WorkflowGraph> = None;
    let _scheduler: Option<Scheduler> = None;
    let _engine: Option<LayoutEngine> = None;
    let _document: Option<GraphDocument> = None;
    let _issue: Option<ValidationIssue> = None;
    let _run: Option<ExecutionRun> = None;

    // Test Result alias
    let _result: Result<String> = Ok("test".to_string());
}
