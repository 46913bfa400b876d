//! Error types for document serialization.

use thiserror::Error;

/// Errors that can occur while serializing documents.
#[derive(Debug, Error)]
pub enum SerializerError {
	/// A relationship's runtime arity contradicts its declared arity.
	///
	/// Raised both when a to-one relationship holds a collection and when a
	/// to-many relationship holds a single model; the message names the
	/// direction. Not recovered locally: callers at the API boundary are
	/// expected to translate it into an error document.
	#[error("invalid relationship value for '{relation}' on {model_type}:{id}: {message}")]
	InvalidRelationValue {
		/// Type of the model owning the relationship.
		model_type: String,
		/// Id of the model owning the relationship.
		id: String,
		/// Relationship key as declared in metadata.
		relation: String,
		/// Direction of the mismatch.
		message: String,
	},

	/// Encoding a finished document to JSON failed.
	#[error("encode error: {0}")]
	Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_relation_value_display() {
		let err = SerializerError::InvalidRelationValue {
			model_type: "article".to_string(),
			id: "1".to_string(),
			relation: "author".to_string(),
			message: "expected a single related model, found a collection".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"invalid relationship value for 'author' on article:1: \
			 expected a single related model, found a collection"
		);
	}
}
