//! Read operations: parcel resolution, one-hop expansion, identifier listing.
//!
//! Resolution and expansion run as a single Cypher round trip. The statement
//! is built from the declared schema table in landview-core, so the set of
//! identifier properties and relationship types lives in exactly one place.

use std::collections::HashSet;

use neo4rs::query;
use serde_json::{Map, Value};

use landview_core::schema::{PARCEL_ID_PROPS, PARCEL_LABEL, RELATIONSHIPS};
use landview_core::IdCandidates;

use crate::client::{GraphClient, GraphError};
use crate::values;

/// A graph entity decoded from a row: store identity, first label, and the
/// coerced property map.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EntityRecord {
    pub node_id: i64,
    pub label: String,
    pub properties: Map<String, Value>,
}

/// One parcel and its one-hop neighbors.
///
/// `neighbors[i]` holds the distinct entities reached via
/// `schema::RELATIONSHIPS[i]`; a relationship with no edges contributes an
/// empty list, never an error. Built fresh per request, never cached.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Neighborhood {
    pub root: EntityRecord,
    pub neighbors: Vec<Vec<EntityRecord>>,
}

impl GraphClient {
    /// Resolve a parcel by any candidate identifier form and expand its
    /// one-hop neighborhood in a single round trip.
    ///
    /// A stored identifier matches when it equals either candidate verbatim
    /// or, with internal dashes removed, equals the digits-only candidate.
    /// When duplicate records match (a known data-quality defect in
    /// historical loads) an implementation-defined single parcel is
    /// returned; callers must not rely on which one.
    pub async fn find_neighborhood(
        &self,
        candidates: &IdCandidates,
    ) -> Result<Option<Neighborhood>, GraphError> {
        let q = query(&neighborhood_cypher())
            .param("verbatim", candidates.verbatim.as_str())
            .param("digits", candidates.digits.as_str());

        let Some(row) = self.query_one(q).await? else {
            return Ok(None);
        };

        let root_node: neo4rs::Node = row.get("p").map_err(|e| {
            GraphError::Serialization(format!("failed to decode parcel node: {e}"))
        })?;
        let root = node_to_entity(&root_node);

        let mut neighbors = Vec::with_capacity(RELATIONSHIPS.len());
        for spec in &RELATIONSHIPS {
            let nodes: Vec<neo4rs::Node> = row.get(spec.field).map_err(|e| {
                GraphError::Serialization(format!("failed to decode {} list: {e}", spec.field))
            })?;
            neighbors.push(dedup_by_identity(nodes.iter().map(node_to_entity)));
        }

        Ok(Some(Neighborhood { root, neighbors }))
    }

    /// List canonical parcel identifiers in ascending order.
    ///
    /// `term` filters by substring when present; paging is plain
    /// SKIP/LIMIT.
    pub async fn list_parcel_ids(
        &self,
        term: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<String>, GraphError> {
        let q = query(&list_cypher())
            .param("term", term.unwrap_or(""))
            .param("limit", limit as i64)
            .param("offset", offset as i64);

        let rows = self.query_rows(q).await?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            // Historical loads stored some identifiers as integers.
            if let Ok(pid) = row.get::<String>("pid") {
                ids.push(pid);
            } else if let Ok(pid) = row.get::<i64>("pid") {
                ids.push(pid.to_string());
            }
        }
        Ok(ids)
    }
}

/// The combined resolution + expansion statement.
fn neighborhood_cypher() -> String {
    let mut cypher = format!(
        "MATCH (p:{PARCEL_LABEL})\nWHERE {}\nWITH p LIMIT 1\n",
        identifier_clause("p")
    );
    for (i, spec) in RELATIONSHIPS.iter().enumerate() {
        cypher.push_str(&format!(
            "OPTIONAL MATCH (p)-[:{}]->(n{i}:{})\n",
            spec.rel_type, spec.target_label
        ));
    }
    cypher.push_str("RETURN p");
    for (i, spec) in RELATIONSHIPS.iter().enumerate() {
        cypher.push_str(&format!(",\n       collect(DISTINCT n{i}) AS {}", spec.field));
    }
    cypher
}

/// Match clause over every known identifier property: verbatim, digits-only,
/// and dash-normalized comparison against the stored value.
fn identifier_clause(var: &str) -> String {
    PARCEL_ID_PROPS
        .iter()
        .map(|prop| {
            format!(
                "{var}.{prop} = $verbatim OR {var}.{prop} = $digits \
                 OR replace({var}.{prop}, '-', '') = $digits"
            )
        })
        .collect::<Vec<_>>()
        .join("\n   OR ")
}

fn list_cypher() -> String {
    let coalesce = PARCEL_ID_PROPS
        .iter()
        .map(|prop| format!("p.{prop}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "MATCH (p:{PARCEL_LABEL})\n\
         WITH coalesce({coalesce}) AS pid\n\
         WHERE pid IS NOT NULL AND pid <> '' AND ($term = '' OR pid CONTAINS $term)\n\
         RETURN pid\n\
         ORDER BY pid\n\
         SKIP $offset LIMIT $limit"
    )
}

fn node_to_entity(node: &neo4rs::Node) -> EntityRecord {
    EntityRecord {
        node_id: node.id(),
        label: node
            .labels()
            .first()
            .map(|label| label.to_string())
            .unwrap_or_default(),
        properties: values::node_properties(node),
    }
}

/// Distinctness is by store node identity, not property equality.
fn dedup_by_identity<I: IntoIterator<Item = EntityRecord>>(records: I) -> Vec<EntityRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.node_id))
        .collect()
}
