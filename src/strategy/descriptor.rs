//! Strategy descriptor data structures declared to the host catalog.
//!
//! A descriptor carries the name the strategy is registered under plus the options that shape
//! how the callback body is read. Descriptors are validated on construction, whether they come
//! from the builder or from a deserialized configuration document.

/// Builder API for assembling strategy descriptors.
pub mod builder;
/// Tunable options carried by a descriptor.
pub mod options;

pub use builder::*;
pub use options::*;

// self
use crate::{_prelude::*, id::StrategyName};

/// Immutable strategy declaration consumed by hosts and the callback phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StrategyDescriptorBuilder")]
pub struct StrategyDescriptor {
	/// Name the strategy is registered under.
	pub name: StrategyName,
	/// Options that control assertion parsing.
	pub options: StrategyOptions,
}
impl StrategyDescriptor {
	/// Creates a new builder for the provided name.
	pub fn builder(name: StrategyName) -> StrategyDescriptorBuilder {
		StrategyDescriptorBuilder::new(name)
	}

	/// Returns the fixed `immutable_passport` declaration with default options.
	pub fn immutable_passport() -> Self {
		Self { name: StrategyName::immutable_passport(), options: StrategyOptions::default() }
	}
}
impl Default for StrategyDescriptor {
	fn default() -> Self {
		Self::immutable_passport()
	}
}
impl TryFrom<StrategyDescriptorBuilder> for StrategyDescriptor {
	type Error = StrategyDescriptorError;

	fn try_from(builder: StrategyDescriptorBuilder) -> Result<Self, Self::Error> {
		builder.build()
	}
}
