//! Model and embedded-object boundary
//!
//! The serializer consumes already-loaded domain models through the narrow
//! [`Model`] trait; it never creates, mutates, or persists them. Property
//! values cross the boundary as [`FieldValue`], relationship values as the
//! three-case [`RelationValue`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::meta::ModelMeta;

/// A property value fetched from a model or embedded object.
#[derive(Clone)]
pub enum FieldValue {
	/// The property has no value.
	Absent,
	/// A plain JSON value (scalar, array, or object).
	Value(Value),
	/// A temporal instant.
	DateTime(DateTime<Utc>),
	/// A singular embedded value object.
	Embed(Arc<dyn Embedded>),
	/// An ordered sequence of embedded value objects.
	EmbedMany(Vec<Arc<dyn Embedded>>),
}

impl FieldValue {
	/// Convert into a plain JSON value without kind-specific coercion.
	///
	/// Temporal instants fall back to RFC 3339; embeds have no plain
	/// rendering and collapse to `null` (they are projected through their
	/// definitions instead, see [`crate::coercion`]).
	pub(crate) fn into_value(self) -> Value {
		match self {
			FieldValue::Absent => Value::Null,
			FieldValue::Value(value) => value,
			FieldValue::DateTime(instant) => Value::String(instant.to_rfc3339()),
			FieldValue::Embed(_) | FieldValue::EmbedMany(_) => Value::Null,
		}
	}
}

impl From<Value> for FieldValue {
	fn from(value: Value) -> Self {
		FieldValue::Value(value)
	}
}

impl From<DateTime<Utc>> for FieldValue {
	fn from(instant: DateTime<Utc>) -> Self {
		FieldValue::DateTime(instant)
	}
}

/// A relationship value fetched from a model.
///
/// Exactly three cases: one related model, an ordered sequence of related
/// models, or nothing. The arity check in relationship projection is a
/// variant match against the declared arity.
#[derive(Clone)]
pub enum RelationValue {
	/// No related model(s).
	Absent,
	/// A single related model.
	One(Arc<dyn Model>),
	/// An ordered sequence of related models.
	Many(Vec<Arc<dyn Model>>),
}

/// An embedded value object: attribute access only, no identity.
pub trait Embedded: Send + Sync {
	/// Fetch a property value by key. Unknown keys yield [`FieldValue::Absent`].
	fn get(&self, key: &str) -> FieldValue;
}

/// A typed domain object to be serialized.
///
/// Implementations are expected to be cheap in-memory reads; the serializer
/// performs no I/O of its own and suppresses collection auto-initialization
/// for the duration of relationship traversal so that serialization can
/// never trigger implicit data fetches.
pub trait Model: Send + Sync {
	/// Resource type identifier.
	fn model_type(&self) -> &str;

	/// Resource identifier.
	fn id(&self) -> String;

	/// Metadata describing this model's type.
	fn meta(&self) -> &ModelMeta;

	/// Fetch an attribute or embed value by key.
	/// Unknown keys yield [`FieldValue::Absent`].
	fn get(&self, key: &str) -> FieldValue;

	/// Fetch a relationship value by key.
	/// Unknown keys yield [`RelationValue::Absent`].
	fn relation(&self, key: &str) -> RelationValue;

	/// Whether relationship collections auto-initialize on access.
	fn collection_auto_init(&self) -> bool;

	/// Enable or disable relationship collection auto-initialization.
	fn set_collection_auto_init(&self, enabled: bool);
}

/// Scoped suppression of collection auto-initialization.
///
/// Snapshots the model's flag on construction, disables it, and restores the
/// snapshot on drop. Restoration runs on every exit path, including early
/// returns and panics mid-relationship.
pub(crate) struct AutoInitGuard<'a> {
	model: &'a dyn Model,
	prior: bool,
}

impl<'a> AutoInitGuard<'a> {
	pub(crate) fn new(model: &'a dyn Model) -> Self {
		let prior = model.collection_auto_init();
		model.set_collection_auto_init(false);
		Self { model, prior }
	}
}

impl Drop for AutoInitGuard<'_> {
	fn drop(&mut self) {
		self.model.set_collection_auto_init(self.prior);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicBool, Ordering};

	use super::*;

	struct FlagModel {
		meta: ModelMeta,
		auto_init: AtomicBool,
	}

	impl Model for FlagModel {
		fn model_type(&self) -> &str {
			"flag"
		}
		fn id(&self) -> String {
			"1".to_string()
		}
		fn meta(&self) -> &ModelMeta {
			&self.meta
		}
		fn get(&self, _key: &str) -> FieldValue {
			FieldValue::Absent
		}
		fn relation(&self, _key: &str) -> RelationValue {
			RelationValue::Absent
		}
		fn collection_auto_init(&self) -> bool {
			self.auto_init.load(Ordering::Relaxed)
		}
		fn set_collection_auto_init(&self, enabled: bool) {
			self.auto_init.store(enabled, Ordering::Relaxed);
		}
	}

	#[test]
	fn test_guard_disables_and_restores() {
		let model = FlagModel {
			meta: ModelMeta::new("flag"),
			auto_init: AtomicBool::new(true),
		};

		{
			let _guard = AutoInitGuard::new(&model);
			assert!(!model.collection_auto_init());
		}
		assert!(model.collection_auto_init());
	}

	#[test]
	fn test_guard_restores_prior_disabled_state() {
		let model = FlagModel {
			meta: ModelMeta::new("flag"),
			auto_init: AtomicBool::new(false),
		};

		{
			let _guard = AutoInitGuard::new(&model);
			assert!(!model.collection_auto_init());
		}
		// Was disabled before the guard; stays disabled after.
		assert!(!model.collection_auto_init());
	}

	#[test]
	fn test_field_value_plain_conversions() {
		let value = FieldValue::from(serde_json::json!({"a": 1}));
		assert_eq!(value.into_value(), serde_json::json!({"a": 1}));
		assert_eq!(FieldValue::Absent.into_value(), Value::Null);
	}
}
