use thiserror::Error;

/// Errors that can occur while mutating a `WorkflowGraph`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("An activity with id '{0}' already exists in the graph")]
    DuplicateActivity(String),

    #[error("A connection with id '{0}' already exists in the graph")]
    DuplicateConnection(String),

    #[error(
        "Activity '{missing_activity_id}' not found, which is required by connection '{connection_id}'"
    )]
    EndpointNotFound {
        connection_id: String,
        missing_activity_id: String,
    },

    #[error("Activity '{0}' not found in the graph")]
    ActivityNotFound(String),

    #[error("Connection '{0}' not found in the graph")]
    ConnectionNotFound(String),
}

/// Errors that can occur when loading or converting a graph document.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse graph document JSON: {0}")]
    JsonParseError(String),

    #[error("Graph document is not well-formed: {0}")]
    MalformedDocument(#[from] GraphError),

    #[error("Invalid custom document data: {0}")]
    ConversionError(String),
}
