//! Value coercion
//!
//! Type-directed transforms applied to attribute values and embedded-object
//! subtrees before they are written into a resource's `attributes` map. The
//! coercion rules are a total function of `(value, declared kind)`; a value
//! that does not match its declared kind passes through unchanged rather
//! than failing.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::meta::{EmbedDef, FieldKind};
use crate::model::{Embedded, FieldValue};

/// Coerce an attribute value according to its declared kind.
pub fn coerce_attribute(value: FieldValue, kind: FieldKind) -> Value {
	match kind {
		FieldKind::Temporal => match value {
			FieldValue::DateTime(instant) => Value::String(format_timestamp(&instant)),
			// Not a temporal instant; pass through unchanged.
			other => other.into_value(),
		},
		FieldKind::Array => match value.into_value() {
			// Absent or null array attributes normalize to an empty
			// sequence, never null.
			Value::Null => Value::Array(Vec::new()),
			other => other,
		},
		// Opaque objects reach the boundary already flattened to a plain
		// JSON map; identity and behavior were stripped by the model layer.
		FieldKind::Object => value.into_value(),
		FieldKind::Plain => value.into_value(),
	}
}

/// Format a temporal instant as `YYYY-MM-DDTHH:mm:ss.mmmZ` in UTC.
///
/// Milliseconds are rounded to the nearest thousandth of a second, carrying
/// into the seconds column when rounding reaches a full second.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use jsonapi_serializers::coercion::format_timestamp;
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
///     + chrono::Duration::milliseconds(500);
/// assert_eq!(format_timestamp(&instant), "2024-01-01T00:00:00.500Z");
/// ```
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
	let mut seconds = instant.timestamp();
	let mut millis = (instant.timestamp_subsec_nanos() + 500_000) / 1_000_000;
	if millis >= 1000 {
		seconds += i64::from(millis / 1000);
		millis %= 1000;
	}
	match DateTime::<Utc>::from_timestamp(seconds, 0) {
		Some(whole) => format!("{}.{:03}Z", whole.format("%Y-%m-%dT%H:%M:%S"), millis),
		// Rounding carried past chrono's representable range.
		None => instant.to_rfc3339(),
	}
}

/// Project an embedded value according to its definition.
///
/// A singular embed projects to an object of its coerced attributes and
/// nested embeds, or `null` when the value is absent or the projection is
/// empty. A plural embed projects to an ordered sequence of singular
/// projections; an empty or absent plural embed yields `[]`, not `null`.
///
/// Embeds never carry links or relationships and never consult the depth
/// context: lacking identity, they are always fully expanded.
pub fn project_embed(def: &EmbedDef, value: FieldValue) -> Value {
	if def.many {
		match value {
			FieldValue::EmbedMany(items) => Value::Array(
				items
					.iter()
					.map(|item| project_embed_single(def, item.as_ref()))
					.collect(),
			),
			_ => Value::Array(Vec::new()),
		}
	} else {
		match value {
			FieldValue::Embed(item) => project_embed_single(def, item.as_ref()),
			_ => Value::Null,
		}
	}
}

fn project_embed_single(def: &EmbedDef, item: &dyn Embedded) -> Value {
	let mut map = Map::new();
	for attr in &def.attributes {
		map.insert(
			attr.key.clone(),
			coerce_attribute(item.get(&attr.key), attr.kind),
		);
	}
	for nested in &def.embeds {
		map.insert(nested.key.clone(), project_embed(nested, item.get(&nested.key)));
	}
	if map.is_empty() {
		Value::Null
	} else {
		Value::Object(map)
	}
}
