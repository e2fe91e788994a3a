//! The `immutable_passport` strategy.

// self
use crate::{
	_prelude::*,
	assertion::RawAssertion,
	id::Uid,
	profile::{self, ProfileInfo},
	strategy::{Strategy, StrategyDescriptor},
};

/// Strategy that reads an Immutable Passport assertion embedded in the callback body.
///
/// There is no request phase: the client posts the assertion it already holds, so the
/// strategy neither redirects nor contacts a token endpoint.
#[derive(Clone, Debug, Default)]
pub struct ImmutablePassport {
	descriptor: StrategyDescriptor,
}
impl ImmutablePassport {
	/// Creates the strategy with the default `immutable_passport` declaration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates the strategy with a custom declaration (renamed or re-keyed deployments).
	pub fn with_descriptor(descriptor: StrategyDescriptor) -> Self {
		Self { descriptor }
	}
}
impl Display for ImmutablePassport {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.descriptor.name, f)
	}
}
impl Strategy for ImmutablePassport {
	fn descriptor(&self) -> &StrategyDescriptor {
		&self.descriptor
	}

	fn identify(&self, assertion: &RawAssertion) -> Result<Uid> {
		profile::identify(assertion)
	}

	fn profile(&self, assertion: &RawAssertion) -> ProfileInfo {
		ProfileInfo::from_assertion(assertion)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{id::IMMUTABLE_PASSPORT, strategy::Phase};

	#[test]
	fn declares_fixed_name_and_callback_only() {
		let strategy = ImmutablePassport::new();

		assert_eq!(&*strategy.descriptor().name, IMMUTABLE_PASSPORT);
		assert_eq!(strategy.to_string(), IMMUTABLE_PASSPORT);
		assert!(strategy.handles(Phase::Callback));
		assert!(!strategy.handles(Phase::Request));
		assert_eq!(strategy.parser().key(), "omniauth");
	}

	#[test]
	fn hooks_share_one_assertion() {
		let strategy = ImmutablePassport::new();
		let assertion = strategy
			.parser()
			.parse(r#"{"omniauth":{"uid":"u2","info":{"name":"Ann","nickname":"annie"}}}"#.as_bytes())
			.expect("Assertion should parse.");
		let uid = strategy.identify(&assertion).expect("Uid should be present.");
		let info = strategy.profile(&assertion);
		let extra = strategy.extra(&assertion);

		assert_eq!(&*uid, "u2");
		assert_eq!(info.name, "Ann");
		assert_eq!(info.nickname.as_deref(), Some("annie"));
		assert_eq!(&extra.raw_info, assertion.raw());
	}
}
