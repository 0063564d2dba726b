//! Error types for the landview-engine crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Graph error: {0}")]
    Graph(#[from] landview_graph::GraphError),

    /// No entity matched any candidate identifier form. Only the detail
    /// path reports this; the graph path answers a miss with an empty graph.
    #[error("Parcel not found: {identifier}")]
    NotFound { identifier: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ViewError>;
