//! Document serializer
//!
//! Top-level entry points for turning loaded models into wire documents:
//! a single model, a homogeneous list of models, or an error condition.
//! Projection recurses one relationship hop deep; anything further away is
//! emitted as a `{type, id}` stub.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Map;
use tracing::{debug, trace};

use crate::coercion::{coerce_attribute, project_embed};
use crate::depth::Depth;
use crate::document::{
	Document, ErrorObject, Linkage, RelationshipLinks, RelationshipObject, Resource, ResourceLinks,
};
use crate::error::SerializerError;
use crate::meta::RelationDef;
use crate::model::{AutoInitGuard, Model, RelationValue};
use crate::urls::ResourceUrlBuilder;

/// Serializes domain models into resource-oriented JSON documents.
///
/// The serializer holds no per-call state: every entry point starts a fresh
/// [`Depth`] context, so instances can be shared across requests.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use jsonapi_serializers::{DocumentSerializer, PathUrlBuilder};
///
/// let serializer = DocumentSerializer::new(Arc::new(PathUrlBuilder::new("/api")));
/// let doc = serializer.serialize(None).unwrap();
/// assert_eq!(doc.to_json().unwrap(), r#"{"data":null}"#);
/// ```
pub struct DocumentSerializer {
	urls: Arc<dyn ResourceUrlBuilder>,
}

impl DocumentSerializer {
	pub fn new(urls: Arc<dyn ResourceUrlBuilder>) -> Self {
		Self { urls }
	}

	/// Serialize a single model (or its absence) into a `{ data: ... }`
	/// document.
	pub fn serialize(&self, model: Option<&dyn Model>) -> Result<Document, SerializerError> {
		let data = match model {
			None => None,
			Some(model) => {
				trace!(
					model_type = model.model_type(),
					id = %model.id(),
					"serializing model"
				);
				Some(self.project_model(model, Depth::root())?)
			}
		};
		Ok(Document::Single { data })
	}

	/// Serialize an ordered list of models into a `{ data: [...] }`
	/// document, preserving input order. An empty slice yields
	/// `{ data: [] }`.
	pub fn serialize_list(&self, models: &[Arc<dyn Model>]) -> Result<Document, SerializerError> {
		trace!(count = models.len(), "serializing model list");
		let mut data = Vec::with_capacity(models.len());
		for model in models {
			data.push(self.project_model(model.as_ref(), Depth::root())?);
		}
		Ok(Document::Collection { data })
	}

	/// Build a one-element error document.
	///
	/// The canonical sink for turning any upstream failure into a
	/// user-visible error document; always exactly one error entry, with the
	/// status code stringified. Cannot fail.
	pub fn error_document(title: &str, detail: &str, status: u16) -> Document {
		Document::Errors {
			errors: vec![ErrorObject {
				status: status.to_string(),
				title: title.to_string(),
				detail: detail.to_string(),
			}],
		}
	}

	/// Serialize a single model and encode the document to JSON.
	pub fn serialize_to_json(&self, model: Option<&dyn Model>) -> Result<String, SerializerError> {
		Ok(self.serialize(model)?.to_json()?)
	}

	/// Serialize a list of models and encode the document to JSON.
	pub fn serialize_list_to_json(
		&self,
		models: &[Arc<dyn Model>],
	) -> Result<String, SerializerError> {
		Ok(self.serialize_list(models)?.to_json()?)
	}

	/// Build a one-element error document and encode it to JSON.
	pub fn serialize_error(
		title: &str,
		detail: &str,
		status: u16,
	) -> Result<String, SerializerError> {
		Ok(Self::error_document(title, detail, status).to_json()?)
	}

	/// Project one model into its resource representation.
	///
	/// At depth 0 the resource is full; past the root it short-circuits to a
	/// `{type, id}` stub without computing attributes, links, or
	/// relationships.
	fn project_model(&self, model: &dyn Model, depth: Depth) -> Result<Resource, SerializerError> {
		let mut resource = Resource::stub(model.model_type(), model.id());
		if !depth.is_root() {
			return Ok(resource);
		}

		let meta = model.meta();
		let id = model.id();

		let mut attributes = Map::new();
		for def in &meta.attributes {
			attributes.insert(def.key.clone(), coerce_attribute(model.get(&def.key), def.kind));
		}
		for def in &meta.embeds {
			attributes.insert(def.key.clone(), project_embed(def, model.get(&def.key)));
		}
		resource.attributes = Some(attributes);
		resource.links = Some(ResourceLinks {
			self_url: self.urls.resource_url(meta, &id),
		});

		if !meta.relations.is_empty() {
			// Traversal must not trigger implicit fetches; suppress
			// collection auto-initialization until every relationship of
			// this model has been projected. The guard restores the prior
			// flag on every exit path.
			let _guard = AutoInitGuard::new(model);
			let child = depth.child();
			let mut relationships = IndexMap::with_capacity(meta.relations.len());
			for def in &meta.relations {
				debug!(
					model_type = model.model_type(),
					relation = def.key.as_str(),
					"projecting relationship"
				);
				let value = model.relation(&def.key);
				relationships.insert(
					def.key.clone(),
					self.project_relation(model, def, value, child)?,
				);
			}
			resource.relationships = Some(relationships);
		}

		Ok(resource)
	}

	/// Project one relationship value into linkage plus navigation links.
	///
	/// The runtime value must match the declared arity; a mismatch in either
	/// direction raises [`SerializerError::InvalidRelationValue`]. An empty
	/// or absent to-many relationship collapses to `data: null`, the same
	/// shape as an absent to-one.
	fn project_relation(
		&self,
		owner: &dyn Model,
		def: &RelationDef,
		value: RelationValue,
		depth: Depth,
	) -> Result<RelationshipObject, SerializerError> {
		let data = if def.many {
			match value {
				RelationValue::One(_) => {
					return Err(Self::arity_error(
						owner,
						def,
						"expected a collection of related models, found a single model",
					));
				}
				RelationValue::Absent => Linkage::One(None),
				RelationValue::Many(models) if models.is_empty() => Linkage::One(None),
				RelationValue::Many(models) => {
					let mut stubs = Vec::with_capacity(models.len());
					for model in &models {
						stubs.push(self.project_model(model.as_ref(), depth)?);
					}
					Linkage::Many(stubs)
				}
			}
		} else {
			match value {
				RelationValue::Many(_) => {
					return Err(Self::arity_error(
						owner,
						def,
						"expected a single related model, found a collection",
					));
				}
				RelationValue::Absent => Linkage::One(None),
				RelationValue::One(model) => {
					Linkage::One(Some(Box::new(self.project_model(model.as_ref(), depth)?)))
				}
			}
		};

		let owner_id = owner.id();
		let links = RelationshipLinks {
			self_url: self
				.urls
				.relation_url(owner.meta(), &owner_id, &def.key, false),
			related: self
				.urls
				.relation_url(owner.meta(), &owner_id, &def.key, true),
		};

		Ok(RelationshipObject { data, links })
	}

	fn arity_error(owner: &dyn Model, def: &RelationDef, message: &str) -> SerializerError {
		SerializerError::InvalidRelationValue {
			model_type: owner.model_type().to_string(),
			id: owner.id(),
			relation: def.key.clone(),
			message: message.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::urls::PathUrlBuilder;

	fn serializer() -> DocumentSerializer {
		DocumentSerializer::new(Arc::new(PathUrlBuilder::new("/api")))
	}

	#[test]
	fn test_serialize_none_is_null_data() {
		let doc = serializer().serialize(None).unwrap();
		assert_eq!(doc.to_json().unwrap(), r#"{"data":null}"#);
	}

	#[test]
	fn test_serialize_empty_list() {
		let doc = serializer().serialize_list(&[]).unwrap();
		assert_eq!(doc.to_json().unwrap(), r#"{"data":[]}"#);
	}

	#[test]
	fn test_error_document_shape() {
		let json = DocumentSerializer::serialize_error("Not Found", "no such id", 404).unwrap();
		assert_eq!(
			serde_json::from_str::<serde_json::Value>(&json).unwrap(),
			json!({"errors": [{"status": "404", "title": "Not Found", "detail": "no such id"}]})
		);
	}

	#[test]
	fn test_error_document_stringifies_status() {
		let doc = DocumentSerializer::error_document("Server Error", "boom", 500);
		let value = serde_json::to_value(&doc).unwrap();
		assert_eq!(value["errors"][0]["status"], json!("500"));
	}
}
