// self
use crate::{
	_prelude::*,
	id::StrategyName,
	strategy::{StrategyDescriptor, StrategyOptions},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StrategyDescriptorError {
	/// The assertion key cannot be blank.
	#[error("Assertion key cannot be empty.")]
	EmptyAssertionKey,
	/// The body limit must allow at least one byte.
	#[error("The max_body_bytes option must be positive.")]
	ZeroBodyLimit,
}

/// Builder for [`StrategyDescriptor`] values.
///
/// Deserializing a descriptor goes through this builder, so configuration documents only need
/// to spell out the fields they override.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StrategyDescriptorBuilder {
	/// Name the strategy is registered under.
	pub name: StrategyName,
	/// Parsing options.
	pub options: StrategyOptions,
}
impl StrategyDescriptorBuilder {
	/// Creates a new builder seeded with the provided name and default options.
	pub fn new(name: StrategyName) -> Self {
		Self { name, options: StrategyOptions::default() }
	}

	/// Overrides the document key holding the assertion.
	pub fn assertion_key(mut self, key: impl Into<String>) -> Self {
		self.options.assertion_key = key.into();

		self
	}

	/// Overrides the body size limit.
	pub fn max_body_bytes(mut self, limit: usize) -> Self {
		self.options.max_body_bytes = limit;

		self
	}

	/// Replaces every option at once.
	pub fn options(mut self, options: StrategyOptions) -> Self {
		self.options = options;

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<StrategyDescriptor, StrategyDescriptorError> {
		let descriptor = StrategyDescriptor { name: self.name, options: self.options };

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl StrategyDescriptor {
	/// Validates invariants for the descriptor.
	fn validate(&self) -> Result<(), StrategyDescriptorError> {
		if self.options.assertion_key.trim().is_empty() {
			return Err(StrategyDescriptorError::EmptyAssertionKey);
		}
		if self.options.max_body_bytes == 0 {
			return Err(StrategyDescriptorError::ZeroBodyLimit);
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::strategy::{DEFAULT_ASSERTION_KEY, DEFAULT_MAX_BODY_BYTES};

	#[test]
	fn builder_rejects_blank_key_and_zero_limit() {
		let err = StrategyDescriptor::builder(StrategyName::default())
			.assertion_key("  ")
			.build()
			.expect_err("Blank assertion key should be rejected.");

		assert_eq!(err, StrategyDescriptorError::EmptyAssertionKey);

		let err = StrategyDescriptor::builder(StrategyName::default())
			.max_body_bytes(0)
			.build()
			.expect_err("Zero body limit should be rejected.");

		assert_eq!(err, StrategyDescriptorError::ZeroBodyLimit);
	}

	#[test]
	fn deserialization_fills_defaults_and_validates() {
		let descriptor: StrategyDescriptor =
			serde_json::from_str("{}").expect("Empty config should yield the default descriptor.");

		assert_eq!(descriptor, StrategyDescriptor::immutable_passport());
		assert_eq!(descriptor.options.assertion_key, DEFAULT_ASSERTION_KEY);
		assert_eq!(descriptor.options.max_body_bytes, DEFAULT_MAX_BODY_BYTES);

		let descriptor: StrategyDescriptor =
			serde_json::from_str(r#"{"name":"passport_staging","options":{"max_body_bytes":512}}"#)
				.expect("Partial config should deserialize.");

		assert_eq!(&*descriptor.name, "passport_staging");
		assert_eq!(descriptor.options.max_body_bytes, 512);
		assert_eq!(descriptor.options.assertion_key, DEFAULT_ASSERTION_KEY);
		assert!(
			serde_json::from_str::<StrategyDescriptor>(r#"{"options":{"assertion_key":""}}"#)
				.is_err()
		);
		assert!(serde_json::from_str::<StrategyDescriptor>(r#"{"name":"two words"}"#).is_err());
	}

	#[test]
	fn serialized_descriptor_reads_back() {
		let descriptor = StrategyDescriptor::builder(StrategyName::default())
			.assertion_key("passport")
			.build()
			.expect("Descriptor should build.");
		let json = serde_json::to_string(&descriptor).expect("Descriptor should serialize.");
		let back: StrategyDescriptor =
			serde_json::from_str(&json).expect("Serialized descriptor should deserialize.");

		assert_eq!(back, descriptor);
	}
}
