use crate::error::GraphError;

mod activity;
mod connection;

pub use activity::{Activity, ActivityKind, ExecutionStatus, Position};
pub use connection::Connection;

/// The full set of activities and connections being edited.
///
/// Collections keep insertion order, which makes every downstream
/// traversal (validation output, layering, execution order) deterministic
/// for a given editing history. Ids are unique within the graph and every
/// connection references activities present in it; mutation methods
/// enforce both, so the structural queries below never fail.
///
/// The graph itself imposes no acyclicity or connectivity constraint:
/// a cyclic, disconnected, or empty graph is freely representable and
/// freely editable. Whether such a graph is *runnable* is the
/// validator's concern, not the model's.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    activities: Vec<Activity>,
    connections: Vec<Connection>,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutation ---

    /// Adds an activity. Fails if an activity with the same id exists.
    pub fn add_activity(&mut self, activity: Activity) -> Result<(), GraphError> {
        if self.activity(&activity.id).is_some() {
            return Err(GraphError::DuplicateActivity(activity.id.clone()));
        }
        self.activities.push(activity);
        Ok(())
    }

    /// Removes an activity and every connection referencing it, so the
    /// edges-reference-existing-nodes invariant survives the removal.
    pub fn remove_activity(&mut self, activity_id: &str) -> Result<Activity, GraphError> {
        let index = self
            .activities
            .iter()
            .position(|a| a.id == activity_id)
            .ok_or_else(|| GraphError::ActivityNotFound(activity_id.to_string()))?;
        self.connections
            .retain(|c| c.source_activity_id != activity_id && c.target_activity_id != activity_id);
        Ok(self.activities.remove(index))
    }

    /// Adds a connection. Fails if the id is taken or either endpoint is
    /// not present in the graph.
    pub fn add_connection(&mut self, connection: Connection) -> Result<(), GraphError> {
        if self.connection(&connection.id).is_some() {
            return Err(GraphError::DuplicateConnection(connection.id.clone()));
        }
        for endpoint in [
            &connection.source_activity_id,
            &connection.target_activity_id,
        ] {
            if self.activity(endpoint).is_none() {
                return Err(GraphError::EndpointNotFound {
                    connection_id: connection.id.clone(),
                    missing_activity_id: endpoint.clone(),
                });
            }
        }
        self.connections.push(connection);
        Ok(())
    }

    pub fn remove_connection(&mut self, connection_id: &str) -> Result<Connection, GraphError> {
        let index = self
            .connections
            .iter()
            .position(|c| c.id == connection_id)
            .ok_or_else(|| GraphError::ConnectionNotFound(connection_id.to_string()))?;
        Ok(self.connections.remove(index))
    }

    /// Writes back an execution status. Used by the scheduler only.
    pub fn set_execution_status(
        &mut self,
        activity_id: &str,
        status: ExecutionStatus,
    ) -> Result<(), GraphError> {
        let activity = self.activity_mut(activity_id)?;
        activity.execution_status = status;
        Ok(())
    }

    /// Writes back a canvas position. Used by the layout engine and by
    /// direct user placement.
    pub fn set_position(&mut self, activity_id: &str, position: Position) -> Result<(), GraphError> {
        let activity = self.activity_mut(activity_id)?;
        activity.position = position;
        Ok(())
    }

    pub(crate) fn activities_mut(&mut self) -> impl Iterator<Item = &mut Activity> {
        self.activities.iter_mut()
    }

    /// Clears the execution status of every activity back to `None`.
    pub fn reset_execution_status(&mut self) {
        for activity in &mut self.activities {
            activity.execution_status = ExecutionStatus::None;
        }
    }

    // --- Queries ---

    pub fn activity(&self, activity_id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == activity_id)
    }

    fn activity_mut(&mut self, activity_id: &str) -> Result<&mut Activity, GraphError> {
        self.activities
            .iter_mut()
            .find(|a| a.id == activity_id)
            .ok_or_else(|| GraphError::ActivityNotFound(activity_id.to_string()))
    }

    pub fn connection(&self, connection_id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == connection_id)
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Connections whose target is the given activity, in insertion order.
    pub fn incoming_connections(&self, activity_id: &str) -> Vec<&Connection> {
        self.connections
            .iter()
            .filter(|c| c.target_activity_id == activity_id)
            .collect()
    }

    /// Connections whose source is the given activity, in insertion order.
    pub fn outgoing_connections(&self, activity_id: &str) -> Vec<&Connection> {
        self.connections
            .iter()
            .filter(|c| c.source_activity_id == activity_id)
            .collect()
    }

    /// Activities with no incoming connection, in insertion order. These
    /// are the roots the layering and the execution order start from.
    pub fn activities_with_no_incoming(&self) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|a| self.incoming_connections(&a.id).is_empty())
            .collect()
    }

    /// Activities with no outgoing connection, in insertion order.
    pub fn activities_with_no_outgoing(&self) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|a| self.outgoing_connections(&a.id).is_empty())
            .collect()
    }

    /// Whether the activity has at least one incoming or outgoing
    /// connection.
    pub fn is_connected(&self, activity_id: &str) -> bool {
        self.connections
            .iter()
            .any(|c| c.source_activity_id == activity_id || c.target_activity_id == activity_id)
    }

    /// Whether any activity of the given kind is present.
    pub fn contains_kind(&self, kind: ActivityKind) -> bool {
        self.activities.iter().any(|a| a.kind == kind)
    }
}
