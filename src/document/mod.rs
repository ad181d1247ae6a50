//! The graph document interchange format and its conversion seams.

mod conversion;
mod definition;

pub use conversion::IntoWorkflowGraph;
pub use definition::{ActivityRecord, ConnectionRecord, GraphDocument};
