//! Model metadata definitions
//!
//! The serializer never inspects model values blindly; it walks the ordered
//! attribute, embed, and relationship definitions declared for the model
//! type and fetches exactly those properties. Definition order is
//! serialization order.

use serde::{Deserialize, Serialize};

/// Declared data kind of an attribute.
///
/// A closed set so that value coercion is an exhaustive `match` rather than
/// open-ended runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
	/// Scalar value, passed through unchanged (including `null`).
	Plain,
	/// Temporal instant, formatted as a UTC millisecond timestamp string.
	Temporal,
	/// Array value; absent or empty values normalize to `[]`.
	Array,
	/// Opaque object value, flattened to a plain key/value mapping.
	Object,
}

/// Definition of a single attribute on a model type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDef {
	/// Property key, used both to fetch the value and as the output member name.
	pub key: String,
	/// Declared kind, driving value coercion.
	pub kind: FieldKind,
}

impl AttributeDef {
	pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			key: key.into(),
			kind,
		}
	}
}

/// Definition of an embedded value object on a model type.
///
/// Embeds have no identity of their own: they carry their own attribute and
/// nested-embed definitions but never links or relationships, and they are
/// always fully expanded regardless of serialization depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedDef {
	/// Property key, used both to fetch the value and as the output member name.
	pub key: String,
	/// Whether the embed holds an ordered sequence of value objects.
	pub many: bool,
	/// Ordered attribute definitions of the embedded object.
	pub attributes: Vec<AttributeDef>,
	/// Ordered nested embed definitions of the embedded object.
	pub embeds: Vec<EmbedDef>,
}

impl EmbedDef {
	pub fn new(key: impl Into<String>, many: bool) -> Self {
		Self {
			key: key.into(),
			many,
			attributes: Vec::new(),
			embeds: Vec::new(),
		}
	}

	/// Add an attribute definition, preserving declaration order.
	pub fn attribute(mut self, key: impl Into<String>, kind: FieldKind) -> Self {
		self.attributes.push(AttributeDef::new(key, kind));
		self
	}

	/// Add a nested embed definition, preserving declaration order.
	pub fn embed(mut self, def: EmbedDef) -> Self {
		self.embeds.push(def);
		self
	}
}

/// Definition of a relationship to another model type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDef {
	/// Property key, used both to fetch the value and as the output member name.
	pub key: String,
	/// Declared arity: `true` for to-many, `false` for to-one.
	pub many: bool,
}

impl RelationDef {
	pub fn new(key: impl Into<String>, many: bool) -> Self {
		Self {
			key: key.into(),
			many,
		}
	}
}

/// Complete metadata for one model type.
///
/// # Examples
///
/// ```
/// use jsonapi_serializers::{FieldKind, ModelMeta};
///
/// let meta = ModelMeta::new("article")
///     .attribute("title", FieldKind::Plain)
///     .attribute("published_at", FieldKind::Temporal)
///     .relation("author", false)
///     .relation("comments", true);
///
/// assert_eq!(meta.model_type, "article");
/// assert_eq!(meta.attributes.len(), 2);
/// assert_eq!(meta.relations.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMeta {
	/// Resource type identifier emitted as the `type` member.
	pub model_type: String,
	/// Ordered attribute definitions.
	pub attributes: Vec<AttributeDef>,
	/// Ordered embed definitions.
	pub embeds: Vec<EmbedDef>,
	/// Ordered relationship definitions.
	pub relations: Vec<RelationDef>,
}

impl ModelMeta {
	pub fn new(model_type: impl Into<String>) -> Self {
		Self {
			model_type: model_type.into(),
			attributes: Vec::new(),
			embeds: Vec::new(),
			relations: Vec::new(),
		}
	}

	/// Add an attribute definition, preserving declaration order.
	pub fn attribute(mut self, key: impl Into<String>, kind: FieldKind) -> Self {
		self.attributes.push(AttributeDef::new(key, kind));
		self
	}

	/// Add an embed definition, preserving declaration order.
	pub fn embed(mut self, def: EmbedDef) -> Self {
		self.embeds.push(def);
		self
	}

	/// Add a relationship definition, preserving declaration order.
	pub fn relation(mut self, key: impl Into<String>, many: bool) -> Self {
		self.relations.push(RelationDef::new(key, many));
		self
	}
}
