//! Wire-format document types
//!
//! The output envelope and its members, shaped exactly as they appear on the
//! wire. Only the outermost document of a serialize call is ever encoded;
//! every nested structure is passed around as these typed values.
//!
//! ```text
//! Success, single:     { "data": null | Resource }
//! Success, collection: { "data": [Resource, ...] }
//! Error:               { "errors": [{ "status", "title", "detail" }] }
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// A complete top-level document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
	/// `{ "data": null | Resource }`
	Single {
		data: Option<Resource>,
	},
	/// `{ "data": [Resource, ...] }`
	Collection {
		data: Vec<Resource>,
	},
	/// `{ "errors": [...] }`
	Errors {
		errors: Vec<ErrorObject>,
	},
}

impl Document {
	/// Encode to the wire format (UTF-8 JSON).
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}
}

/// A single resource within a document.
///
/// At the root of a document a resource is full: attributes, links, and
/// relationships are all present. A resource reached through a relationship
/// hop is a stub carrying only `type` and `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
	#[serde(rename = "type")]
	pub resource_type: String,
	pub id: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub attributes: Option<Map<String, Value>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<ResourceLinks>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub relationships: Option<IndexMap<String, RelationshipObject>>,
}

impl Resource {
	/// A `{type, id}` stub with no attributes, links, or relationships.
	pub fn stub(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
		Self {
			resource_type: resource_type.into(),
			id: id.into(),
			attributes: None,
			links: None,
			relationships: None,
		}
	}
}

/// `links` member of a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceLinks {
	#[serde(rename = "self")]
	pub self_url: String,
}

/// A relationship member of a resource: linkage plus navigation links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipObject {
	pub data: Linkage,
	pub links: RelationshipLinks,
}

/// Linkage payload of a relationship object.
///
/// `One(None)` covers both "no related item" and "no related items": an
/// empty or absent to-many relationship collapses to `"data": null`, the
/// same wire shape as an absent to-one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Linkage {
	One(Option<Box<Resource>>),
	Many(Vec<Resource>),
}

/// `links` member of a relationship object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipLinks {
	#[serde(rename = "self")]
	pub self_url: String,
	pub related: String,
}

/// A single member of the `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorObject {
	/// HTTP status code as a string.
	pub status: String,
	/// Short, human-readable summary.
	pub title: String,
	/// Detailed, occurrence-specific message.
	pub detail: String,
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_stub_serializes_to_type_and_id_only() {
		let stub = Resource::stub("article", "9");
		let value = serde_json::to_value(&stub).unwrap();
		assert_eq!(value, json!({"type": "article", "id": "9"}));
	}

	#[test]
	fn test_single_document_with_null_data() {
		let doc = Document::Single { data: None };
		assert_eq!(doc.to_json().unwrap(), r#"{"data":null}"#);
	}

	#[test]
	fn test_empty_collection_document() {
		let doc = Document::Collection { data: vec![] };
		assert_eq!(doc.to_json().unwrap(), r#"{"data":[]}"#);
	}

	#[test]
	fn test_error_document_shape() {
		let doc = Document::Errors {
			errors: vec![ErrorObject {
				status: "404".to_string(),
				title: "Not Found".to_string(),
				detail: "no such id".to_string(),
			}],
		};
		assert_eq!(
			serde_json::to_value(&doc).unwrap(),
			json!({"errors": [{"status": "404", "title": "Not Found", "detail": "no such id"}]})
		);
	}

	#[test]
	fn test_absent_linkage_serializes_as_null() {
		let rel = RelationshipObject {
			data: Linkage::One(None),
			links: RelationshipLinks {
				self_url: "/a/1/relationships/b".to_string(),
				related: "/a/1/b".to_string(),
			},
		};
		let value = serde_json::to_value(&rel).unwrap();
		assert_eq!(value["data"], Value::Null);
		assert_eq!(value["links"]["self"], "/a/1/relationships/b");
		assert_eq!(value["links"]["related"], "/a/1/b");
	}

	#[test]
	fn test_many_linkage_serializes_as_array_of_stubs() {
		let rel = Linkage::Many(vec![Resource::stub("tag", "1"), Resource::stub("tag", "2")]);
		assert_eq!(
			serde_json::to_value(&rel).unwrap(),
			json!([{"type": "tag", "id": "1"}, {"type": "tag", "id": "2"}])
		);
	}
}
