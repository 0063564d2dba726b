//! Coercion of Bolt-native property values into JSON-portable form.
//!
//! Neo4j property values are not all JSON: temporal values, durations, and
//! spatial points arrive as Bolt structures. Every property crossing the
//! view boundary goes through the ladder here. The ladder is total — a
//! value nothing recognizes degrades to `null` instead of failing.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use neo4rs::{Node, Point2D, Point3D};
use serde_json::{json, Map, Value};

/// Coerce every property of a node into a JSON object map.
pub fn node_properties(node: &Node) -> Map<String, Value> {
    node.keys()
        .into_iter()
        .map(|key| (key.to_string(), coerce_property(node, key)))
        .collect()
}

/// Coerce a single property by trying typed extractions in priority order.
///
/// Plain scalars first, then temporal types (ISO-8601 strings), durations,
/// spatial points, lists of dates, and finally a generic JSON fallback for
/// native lists and maps of plain scalars.
fn coerce_property(node: &Node, key: &str) -> Value {
    if let Ok(v) = node.get::<bool>(key) {
        return Value::Bool(v);
    }
    if let Ok(v) = node.get::<i64>(key) {
        return json!(v);
    }
    if let Ok(v) = node.get::<f64>(key) {
        return json!(v);
    }
    if let Ok(v) = node.get::<String>(key) {
        return Value::String(v);
    }
    if let Ok(v) = node.get::<NaiveDate>(key) {
        return Value::String(format_date(v));
    }
    if let Ok(v) = node.get::<DateTime<FixedOffset>>(key) {
        return Value::String(v.to_rfc3339());
    }
    if let Ok(v) = node.get::<NaiveDateTime>(key) {
        return Value::String(format_local_datetime(v));
    }
    if let Ok(v) = node.get::<NaiveTime>(key) {
        return Value::String(format_local_time(v));
    }
    if let Ok(v) = node.get::<std::time::Duration>(key) {
        return Value::String(format_duration(v.as_secs(), v.subsec_nanos()));
    }
    if let Ok(p) = node.get::<Point2D>(key) {
        return point2d_value(p.sr_id().into(), p.x(), p.y());
    }
    if let Ok(p) = node.get::<Point3D>(key) {
        return point3d_value(p.sr_id().into(), p.x(), p.y(), p.z());
    }
    if let Ok(v) = node.get::<Vec<NaiveDate>>(key) {
        return Value::Array(v.into_iter().map(|d| Value::String(format_date(d))).collect());
    }
    if let Ok(v) = node.get::<Value>(key) {
        return coerce_json(v);
    }
    Value::Null
}

/// Recursively normalize an already-JSON value: identity on scalars,
/// element-wise rebuild of lists and maps. Idempotent.
pub fn coerce_json(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(coerce_json).collect()),
        Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, coerce_json(v))).collect())
        }
        other => other,
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_local_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

pub fn format_local_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S%.f").to_string()
}

/// Stable string form for durations: `PT{secs}S`, fractional when sub-second
/// precision is present.
pub fn format_duration(secs: u64, nanos: u32) -> String {
    if nanos == 0 {
        format!("PT{secs}S")
    } else {
        format!("PT{secs}.{nanos:09}S")
    }
}

pub fn point2d_value(srid: i64, x: f64, y: f64) -> Value {
    json!({ "srid": srid, "x": x, "y": y })
}

pub fn point3d_value(srid: i64, x: f64, y: f64, z: f64) -> Value {
    json!({ "srid": srid, "x": x, "y": y, "z": z })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2019, 3, 7).unwrap();
        assert_eq!(format_date(d), "2019-03-07");
    }

    #[test]
    fn test_format_local_datetime_truncates_zero_fraction() {
        let dt = NaiveDate::from_ymd_opt(2021, 12, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(format_local_datetime(dt), "2021-12-01T08:30:00");
    }

    #[test]
    fn test_format_duration_whole_seconds() {
        assert_eq!(format_duration(90, 0), "PT90S");
    }

    #[test]
    fn test_format_duration_fractional() {
        assert_eq!(format_duration(1, 500_000_000), "PT1.500000000S");
    }

    #[test]
    fn test_point_shapes() {
        assert_eq!(
            point2d_value(4326, -123.1, 49.2),
            serde_json::json!({"srid": 4326, "x": -123.1, "y": 49.2})
        );
        assert_eq!(
            point3d_value(4979, -123.1, 49.2, 70.0),
            serde_json::json!({"srid": 4979, "x": -123.1, "y": 49.2, "z": 70.0})
        );
    }

    #[test]
    fn test_coerce_json_is_idempotent() {
        let v = serde_json::json!({
            "a": [1, "two", null, {"nested": [true, 3.5]}],
            "b": {"c": "2019-03-07"}
        });
        let once = coerce_json(v.clone());
        let twice = coerce_json(once.clone());
        assert_eq!(once, v);
        assert_eq!(twice, once);
    }
}
