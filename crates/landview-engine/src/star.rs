//! Star projection: a flat denormalized record of a parcel and its
//! one-hop neighbors, organized by relationship type.

use serde::Serialize;
use serde_json::{Map, Value};

use landview_core::schema::{self, RELATIONSHIPS};
use landview_graph::Neighborhood;

/// Denormalized business view of one parcel.
///
/// Per-relationship arrays and the first-of convenience fields live in
/// `sections`, keyed by the schema table's field names. Arrays are always
/// present (empty when a relationship has no neighbors); convenience fields
/// serialize as explicit `null` when their source array is empty. The
/// conveniences are just that — `parcel_id` is the canonical identity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarView {
    /// First non-empty identifier property on the root, in declared order.
    pub parcel_id: Option<String>,
    /// Root properties, verbatim.
    pub parcel: Map<String, Value>,
    #[serde(flatten)]
    pub sections: Map<String, Value>,
}

/// Project a neighborhood into the star view. Pure; no I/O.
pub fn project(neighborhood: &Neighborhood) -> StarView {
    let mut sections = Map::new();
    for (spec, entities) in RELATIONSHIPS.iter().zip(&neighborhood.neighbors) {
        let maps: Vec<Value> = entities
            .iter()
            .map(|entity| Value::Object(entity.properties.clone()))
            .collect();
        if let Some(first_field) = spec.first_field {
            sections.insert(
                first_field.to_string(),
                maps.first().cloned().unwrap_or(Value::Null),
            );
        }
        sections.insert(spec.field.to_string(), Value::Array(maps));
    }

    StarView {
        parcel_id: schema::canonical_parcel_id(&neighborhood.root.properties),
        parcel: neighborhood.root.properties.clone(),
        sections,
    }
}
