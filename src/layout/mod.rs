use crate::graph::{Position, WorkflowGraph};
use crate::observer::WorkflowObserver;
use ahash::AHashMap;
use tracing::debug;

mod layering;

pub use layering::Layering;

/// Spacing constants for the auto-arranged canvas.
///
/// All values are canvas units. The defaults produce a top-down process
/// diagram dense enough for a laptop viewport; hosts with larger node
/// cards should widen `column_spacing`.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Horizontal axis the activities of each layer are centered around.
    pub center_x: f64,
    /// Vertical position of layer 0.
    pub origin_y: f64,
    /// Horizontal distance between neighboring activities in a layer.
    pub column_spacing: f64,
    /// Vertical distance between consecutive layers.
    pub layer_spacing: f64,
    /// Horizontal position of the overflow column for activities the
    /// traversal never reaches.
    pub overflow_x: f64,
    /// Vertical distance between consecutive overflow activities.
    pub overflow_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 400.0,
            origin_y: 80.0,
            column_spacing: 220.0,
            layer_spacing: 160.0,
            overflow_x: 920.0,
            overflow_spacing: 120.0,
        }
    }
}

/// Computes 2-D canvas positions from a graph's connection topology.
///
/// The engine is deterministic: arranging the same graph twice produces
/// identical layer assignments and identical positions. It tolerates
/// disconnected and cyclic fragments by moving whatever the breadth-first
/// traversal cannot reach into a fixed overflow column instead of
/// failing.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Assigns every activity a position and returns the layering the
    /// positions were derived from.
    ///
    /// Layers are stacked top-to-bottom at a fixed vertical spacing; the
    /// activities of a layer are spaced evenly and centered as a group
    /// around `center_x`. Unreached activities are stacked in the
    /// overflow column at increasing vertical offsets.
    pub fn arrange(&self, graph: &mut WorkflowGraph) -> Layering {
        let layering = Layering::compute(graph);
        let positions = self.positions_for(&layering);

        for activity in graph.activities_mut() {
            if let Some(position) = positions.get(activity.id.as_str()) {
                activity.position = *position;
            }
        }

        debug!(
            layers = layering.layers.len(),
            placed = layering.visited_count(),
            overflow = layering.overflow.len(),
            "Auto-arranged workflow graph"
        );
        layering
    }

    /// Like [`arrange`](Self::arrange), additionally notifying an
    /// observer that new positions were computed.
    pub fn arrange_observed(
        &self,
        graph: &mut WorkflowGraph,
        observer: &dyn WorkflowObserver,
    ) -> Layering {
        let layering = self.arrange(graph);
        observer.layout_computed(&layering, graph);
        layering
    }

    fn positions_for(&self, layering: &Layering) -> AHashMap<String, Position> {
        let mut positions = AHashMap::new();

        for (layer_index, layer) in layering.layers.iter().enumerate() {
            let y = self.config.origin_y + layer_index as f64 * self.config.layer_spacing;
            let group_width = (layer.len().saturating_sub(1)) as f64 * self.config.column_spacing;
            let leftmost = self.config.center_x - group_width / 2.0;
            for (slot, id) in layer.iter().enumerate() {
                let x = leftmost + slot as f64 * self.config.column_spacing;
                positions.insert(id.clone(), Position::new(x, y));
            }
        }

        for (slot, id) in layering.overflow.iter().enumerate() {
            let y = self.config.origin_y + slot as f64 * self.config.overflow_spacing;
            positions.insert(id.clone(), Position::new(self.config.overflow_x, y));
        }

        positions
    }
}
