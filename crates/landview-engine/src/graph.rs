//! Graph projection: generic node/link lists for force-directed
//! visualization of a parcel's neighborhood.

use std::collections::HashSet;

use serde::Serialize;

use landview_core::schema::{self, RELATIONSHIPS};
use landview_graph::Neighborhood;

/// A visualization node: derived id, type tag, display label.
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub group: String,
    pub label: String,
}

/// A directed, typed edge. The id is informational only; consumers key on
/// (source, target, type).
#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge {
    pub id: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    pub source: String,
    pub target: String,
}

/// Node/link representation of one parcel's neighborhood.
#[derive(Debug, Clone, Serialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphView {
    /// The miss result: a graph query for an unknown identifier renders
    /// as "nothing", not as an error.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// Project a neighborhood into the graph view. Pure; no I/O.
///
/// The root is always node 0. Neighbor ids come from the per-tag priority
/// table; a neighbor with no derivable id contributes neither node nor edge.
/// Nodes are unique by id — first occurrence wins when the same entity is
/// reached through several relationship types.
pub fn project(neighborhood: &Neighborhood) -> GraphView {
    let root = &neighborhood.root;
    let root_id = schema::canonical_parcel_id(&root.properties)
        .unwrap_or_else(|| root.node_id.to_string());

    let mut nodes = vec![GraphNode {
        id: root_id.clone(),
        group: root.label.clone(),
        label: format!("{} {}", root.label, root_id),
    }];
    let mut seen: HashSet<String> = HashSet::from([root_id.clone()]);
    let mut edges: Vec<GraphEdge> = Vec::new();

    for (spec, entities) in RELATIONSHIPS.iter().zip(&neighborhood.neighbors) {
        for entity in entities {
            let Some(id) = schema::node_display_id(spec, &entity.properties) else {
                continue;
            };
            if seen.insert(id.clone()) {
                nodes.push(GraphNode {
                    id: id.clone(),
                    group: spec.target_label.to_string(),
                    label: format!("{} {}", spec.target_label, id),
                });
            }
            edges.push(GraphEdge {
                id: format!("e{}", edges.len()),
                edge_type: spec.rel_type.to_string(),
                source: root_id.clone(),
                target: id,
            });
        }
    }

    GraphView { nodes, edges }
}
