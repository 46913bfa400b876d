//! Resource URL building
//!
//! The serializer does not know how the surrounding application routes its
//! resources; it asks a [`ResourceUrlBuilder`] collaborator for every link it
//! emits and places the returned string verbatim into the document.

use crate::meta::ModelMeta;

/// Builds URLs for resources and their relationships.
///
/// Implement this trait to integrate the serializer with the application's
/// router. The serializer imposes no contract on the returned strings beyond
/// placing them verbatim into `links` entries.
pub trait ResourceUrlBuilder: Send + Sync {
	/// URL of a resource's own detail view (`links.self`).
	fn resource_url(&self, meta: &ModelMeta, id: &str) -> String;

	/// URL of a relationship on a resource.
	///
	/// With `related == false`, the relationship linkage URL
	/// (`links.self` of the relationship object); with `related == true`,
	/// the related-resource URL (`links.related`).
	fn relation_url(&self, meta: &ModelMeta, id: &str, relation: &str, related: bool) -> String;
}

/// Path-based URL builder.
///
/// Fallback implementation for applications without a URL reverser:
/// generates conventional paths from the resource type and id.
///
/// # Examples
///
/// ```
/// use jsonapi_serializers::{ModelMeta, PathUrlBuilder, ResourceUrlBuilder};
///
/// let urls = PathUrlBuilder::new("/api/v1");
/// let meta = ModelMeta::new("article");
///
/// assert_eq!(urls.resource_url(&meta, "7"), "/api/v1/article/7");
/// assert_eq!(
///     urls.relation_url(&meta, "7", "author", false),
///     "/api/v1/article/7/relationships/author"
/// );
/// assert_eq!(
///     urls.relation_url(&meta, "7", "author", true),
///     "/api/v1/article/7/author"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathUrlBuilder {
	prefix: String,
}

impl PathUrlBuilder {
	/// Create a builder with the given path prefix (no trailing slash).
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
		}
	}
}

impl ResourceUrlBuilder for PathUrlBuilder {
	fn resource_url(&self, meta: &ModelMeta, id: &str) -> String {
		format!("{}/{}/{}", self.prefix, meta.model_type, id)
	}

	fn relation_url(&self, meta: &ModelMeta, id: &str, relation: &str, related: bool) -> String {
		if related {
			format!("{}/{}/{}/{}", self.prefix, meta.model_type, id, relation)
		} else {
			format!(
				"{}/{}/{}/relationships/{}",
				self.prefix, meta.model_type, id, relation
			)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_path_builder_resource_url() {
		let urls = PathUrlBuilder::new("/api");
		let meta = ModelMeta::new("user");
		assert_eq!(urls.resource_url(&meta, "42"), "/api/user/42");
	}

	#[test]
	fn test_path_builder_relation_urls() {
		let urls = PathUrlBuilder::new("/api");
		let meta = ModelMeta::new("user");
		assert_eq!(
			urls.relation_url(&meta, "42", "posts", false),
			"/api/user/42/relationships/posts"
		);
		assert_eq!(urls.relation_url(&meta, "42", "posts", true), "/api/user/42/posts");
	}

	#[test]
	fn test_empty_prefix() {
		let urls = PathUrlBuilder::default();
		let meta = ModelMeta::new("user");
		assert_eq!(urls.resource_url(&meta, "1"), "/user/1");
	}
}
