use crate::graph::WorkflowGraph;
use ahash::AHashSet;

/// Breadth-first grouping of activities into ordered tiers.
///
/// Layer 0 holds the roots (activities with no incoming connection);
/// layer k+1 holds the not-yet-visited targets of connections leaving
/// layer k. Each activity is assigned to the first layer it is reached
/// in; reconvergent edges do not re-layer an already-visited activity.
///
/// Activities the traversal never reaches (members of back-edge-only
/// fragments) end up in `overflow` instead of a layer. The flattened
/// first-visit sequence doubles as the execution order, so layout and
/// scheduling always agree on what "topological" means for a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layering {
    /// Activity ids per layer, in first-visit order within each layer.
    pub layers: Vec<Vec<String>>,
    /// Activity ids unreachable from any root, in insertion order.
    pub overflow: Vec<String>,
}

impl Layering {
    /// Computes the layering for a graph snapshot.
    ///
    /// Deterministic: layer membership and in-layer order depend only on
    /// the graph's activity and connection insertion order.
    pub fn compute(graph: &WorkflowGraph) -> Self {
        let mut visited: AHashSet<String> = AHashSet::new();
        let mut layers: Vec<Vec<String>> = Vec::new();

        let mut frontier: Vec<String> = graph
            .activities_with_no_incoming()
            .iter()
            .map(|a| a.id.clone())
            .collect();
        for id in &frontier {
            visited.insert(id.clone());
        }

        while !frontier.is_empty() {
            let mut next: Vec<String> = Vec::new();
            for id in &frontier {
                for connection in graph.outgoing_connections(id) {
                    let target = &connection.target_activity_id;
                    if visited.insert(target.clone()) {
                        next.push(target.clone());
                    }
                }
            }
            layers.push(std::mem::take(&mut frontier));
            frontier = next;
        }

        let overflow: Vec<String> = graph
            .activities()
            .iter()
            .filter(|a| !visited.contains(&a.id))
            .map(|a| a.id.clone())
            .collect();

        Self { layers, overflow }
    }

    /// The layer index of an activity, if it was reached.
    pub fn layer_of(&self, activity_id: &str) -> Option<usize> {
        self.layers
            .iter()
            .position(|layer| layer.iter().any(|id| id == activity_id))
    }

    /// The flattened first-visit sequence across all layers. Overflow
    /// activities are excluded: the traversal never reached them, so no
    /// execution order contains them either.
    pub fn visit_order(&self) -> Vec<String> {
        self.layers.iter().flatten().cloned().collect()
    }

    /// Number of activities that were reached and layered.
    pub fn visited_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }
}
