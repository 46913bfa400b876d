//! # jsonapi-serializers
//!
//! Resource-oriented JSON document serialization for domain models.
//!
//! Turns an in-memory model graph (attributes, embedded value objects, and
//! relationships to other models) into a `{ "data": ... }` document, and
//! error conditions into a matching `{ "errors": [...] }` document. Models
//! are consumed read-only through the [`Model`] trait; URL construction is
//! delegated to a [`ResourceUrlBuilder`] collaborator.
//!
//! Relationship expansion is capped at exactly one hop: a related model is
//! emitted as a full resource's relationship linkage, but its own
//! attributes and relationships are omitted (`{type, id}` stub), so cyclic
//! model graphs serialize in bounded time.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jsonapi_serializers::{DocumentSerializer, PathUrlBuilder};
//!
//! let serializer = DocumentSerializer::new(Arc::new(PathUrlBuilder::new("/api")));
//! let json = serializer.serialize_to_json(Some(&article))?;
//! ```

pub mod coercion;
pub mod depth;
pub mod document;
pub mod error;
pub mod meta;
pub mod model;
pub mod serializer;
pub mod urls;

pub use depth::Depth;
pub use document::{
	Document, ErrorObject, Linkage, RelationshipLinks, RelationshipObject, Resource, ResourceLinks,
};
pub use error::SerializerError;
pub use meta::{AttributeDef, EmbedDef, FieldKind, ModelMeta, RelationDef};
pub use model::{Embedded, FieldValue, Model, RelationValue};
pub use serializer::DocumentSerializer;
pub use urls::{PathUrlBuilder, ResourceUrlBuilder};
