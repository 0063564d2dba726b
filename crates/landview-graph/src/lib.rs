//! landview-graph — Neo4j read client for the land-records graph.
//!
//! All store access flows through this crate: connection management, the
//! single-round-trip resolution + expansion query, and coercion of
//! Bolt-native values (temporal, spatial, collections) into JSON-portable
//! form. The crate is strictly read-only; nothing here mutates the graph.

pub mod client;
pub mod queries;
pub mod values;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use queries::{EntityRecord, Neighborhood};
