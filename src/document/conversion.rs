use super::definition::{ActivityRecord, ConnectionRecord, GraphDocument};
use crate::error::DocumentError;
use crate::graph::{Activity, Connection, WorkflowGraph};
use chrono::Utc;

/// A trait for custom persistence formats that can be converted into a
/// [`WorkflowGraph`].
///
/// This is the extension point for embedding applications whose stores
/// predate the [`GraphDocument`] format: implement it on your own
/// records to hand the engine an in-memory graph without going through
/// JSON.
pub trait IntoWorkflowGraph {
    /// Consumes the object and builds the graph it describes.
    fn into_workflow_graph(self) -> Result<WorkflowGraph, DocumentError>;
}

impl IntoWorkflowGraph for GraphDocument {
    fn into_workflow_graph(self) -> Result<WorkflowGraph, DocumentError> {
        self.into_graph()
    }
}

impl GraphDocument {
    /// Parses a document from its JSON interchange form.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))
    }

    /// Serializes the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::JsonParseError(e.to_string()))
    }

    /// Builds the in-memory graph this document describes.
    ///
    /// Uniqueness of ids and existence of connection endpoints are
    /// enforced by the graph's own mutation ops, so a document that
    /// loads successfully always yields a well-formed graph.
    pub fn into_graph(self) -> Result<WorkflowGraph, DocumentError> {
        let mut graph = WorkflowGraph::new();

        for record in self.activities {
            let mut activity = Activity::new(record.id, record.kind, record.label);
            activity.description = record.description;
            activity.configuration = record.configuration;
            activity.configured = record.configured;
            activity.phase_group = record.phase_group;
            activity.estimated_minutes = record.estimated_minutes;
            activity.position = record.position.unwrap_or_default();
            graph.add_activity(activity)?;
        }

        for record in self.connections {
            let mut connection = Connection::new(
                record.id,
                record.source_activity_id,
                record.target_activity_id,
            );
            connection.condition = record.condition;
            graph.add_connection(connection)?;
        }

        Ok(graph)
    }

    /// Exports a graph snapshot as a document, stamped with the export
    /// time. Execution status is not part of the format: a saved document
    /// never carries a half-finished run.
    pub fn from_graph(
        graph: &WorkflowGraph,
        name: Option<String>,
        description: Option<String>,
    ) -> Self {
        let activities = graph
            .activities()
            .iter()
            .map(|activity| ActivityRecord {
                id: activity.id.clone(),
                kind: activity.kind,
                label: activity.label.clone(),
                description: activity.description.clone(),
                configuration: activity.configuration.clone(),
                configured: activity.configured,
                phase_group: activity.phase_group.clone(),
                estimated_minutes: activity.estimated_minutes,
                position: Some(activity.position),
            })
            .collect();

        let connections = graph
            .connections()
            .iter()
            .map(|connection| ConnectionRecord {
                id: connection.id.clone(),
                source_activity_id: connection.source_activity_id.clone(),
                target_activity_id: connection.target_activity_id.clone(),
                condition: connection.condition.clone(),
            })
            .collect();

        Self {
            name,
            description,
            activities,
            connections,
            created_at: None,
            updated_at: None,
            exported_at: Some(Utc::now()),
        }
    }
}
