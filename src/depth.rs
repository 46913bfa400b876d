//! Serialization depth tracking
//!
//! Depth is passed explicitly down the projection call chain instead of
//! living in shared mutable state. Every public entry point starts from
//! [`Depth::root`], so no depth leaks between independent serialize calls.

/// Explicit depth of the current projection.
///
/// Depth 0 is the outermost call: resources are projected in full. Any model
/// reached by following a relationship hop is projected at depth > 0 and
/// short-circuits to a `{type, id}` stub, which caps expansion at exactly
/// one hop regardless of graph depth or cycles.
///
/// # Examples
///
/// ```
/// use jsonapi_serializers::Depth;
///
/// let root = Depth::root();
/// assert!(root.is_root());
/// assert!(!root.child().is_root());
/// assert_eq!(root.child().child().level(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth(usize);

impl Depth {
	/// Depth of a top-level serialize call.
	pub fn root() -> Self {
		Depth(0)
	}

	/// Depth one relationship hop below `self`.
	pub fn child(self) -> Self {
		Depth(self.0 + 1)
	}

	/// Whether this is the outermost call.
	pub fn is_root(self) -> bool {
		self.0 == 0
	}

	/// Current depth level (0 = root).
	pub fn level(self) -> usize {
		self.0
	}
}

impl Default for Depth {
	fn default() -> Self {
		Self::root()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_root_is_level_zero() {
		assert_eq!(Depth::root().level(), 0);
		assert!(Depth::root().is_root());
	}

	#[test]
	fn test_child_increments_level() {
		let child = Depth::root().child();
		assert_eq!(child.level(), 1);
		assert!(!child.is_root());
	}

	#[test]
	fn test_depth_is_copy() {
		let depth = Depth::root();
		let child = depth.child();
		// The parent value is unaffected by descending.
		assert!(depth.is_root());
		assert_eq!(child.level(), 1);
	}
}
