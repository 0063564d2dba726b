//! The declared shape of the land-records graph.
//!
//! Exactly one table describes the fixed set of one-hop relationships
//! expanded from a parcel. The query builder, the star projector, and the
//! graph projector all consume this table; nothing re-lists relationship
//! types anywhere else.

use serde_json::{Map, Value};

/// Root node label for resolution.
pub const PARCEL_LABEL: &str = "Parcel";

/// Identifier properties tried on a `Parcel`, in canonical priority order.
///
/// Historical loads disagree on the property name; the first non-empty value
/// in this order is the canonical identifier reported in projections.
pub const PARCEL_ID_PROPS: [&str; 3] = ["parcelId", "pid", "parcelNumber"];

/// Generic tail of the node-id priority list, tried after the tag-specific
/// identifier property when deriving a graph-view node id.
pub const GENERIC_ID_PROPS: [&str; 3] = ["number", "name", "value"];

/// One declared relationship from the parcel root.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipSpec {
    /// Array field name in the star view.
    pub field: &'static str,
    /// First-of convenience field carried by the star view, if any.
    pub first_field: Option<&'static str>,
    /// Cypher relationship type, directed root -> neighbor.
    pub rel_type: &'static str,
    /// Target node label.
    pub target_label: &'static str,
    /// Tag-specific identifier property, tried before [`GENERIC_ID_PROPS`].
    pub id_prop: &'static str,
}

/// The fixed one-hop expansion set. Order here is the order of traversal,
/// aggregation, and projection everywhere downstream.
pub const RELATIONSHIPS: [RelationshipSpec; 6] = [
    RelationshipSpec {
        field: "titles",
        first_field: Some("title"),
        rel_type: "HAS_TITLE",
        target_label: "Title",
        id_prop: "titleNumber",
    },
    RelationshipSpec {
        field: "owners",
        first_field: None,
        rel_type: "OWNED_BY",
        target_label: "Owner",
        id_prop: "ownerKey",
    },
    RelationshipSpec {
        field: "encumbrances",
        first_field: None,
        rel_type: "ENCUMBERED_BY",
        target_label: "RRR",
        id_prop: "rrrId",
    },
    RelationshipSpec {
        field: "zonings",
        first_field: None,
        rel_type: "ZONED_AS",
        target_label: "Zoning",
        id_prop: "code",
    },
    RelationshipSpec {
        field: "surveyPlans",
        first_field: Some("surveyPlan"),
        rel_type: "AFFECTED_BY",
        target_label: "SurveyPlan",
        id_prop: "planNo",
    },
    RelationshipSpec {
        field: "assessments",
        first_field: Some("assessment"),
        rel_type: "HAS_ASSESSMENT",
        target_label: "Assessment",
        id_prop: "assessmentId",
    },
];

/// First non-empty parcel identifier property, in declared priority order.
pub fn canonical_parcel_id(props: &Map<String, Value>) -> Option<String> {
    PARCEL_ID_PROPS
        .iter()
        .find_map(|prop| props.get(*prop).and_then(value_as_id))
}

/// Derive a graph-view node id for a neighbor reached via `spec`.
///
/// Tries the tag-specific identifier property, then the generic tail.
/// `None` means the neighbor carries nothing usable as an id and is
/// omitted from the graph view entirely.
pub fn node_display_id(spec: &RelationshipSpec, props: &Map<String, Value>) -> Option<String> {
    std::iter::once(spec.id_prop)
        .chain(GENERIC_ID_PROPS)
        .find_map(|prop| props.get(prop).and_then(value_as_id))
}

fn value_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
