//! Lifecycle hooks a strategy implements to interoperate with a host pipeline.

// self
use crate::{
	_prelude::*,
	assertion::{AssertionParser, RawAssertion},
	id::Uid,
	profile::{ExtraPayload, ProfileInfo},
	strategy::StrategyDescriptor,
};

/// Host-visible contract for a single identity strategy.
///
/// Hosts hold `Arc<dyn Strategy>` values and drive them explicitly. Every hook receives the
/// request-scoped [`RawAssertion`] decoded at the start of the callback phase, so hooks never
/// touch the body stream themselves. Only [`Strategy::descriptor`], [`Strategy::identify`],
/// and [`Strategy::profile`] are required.
pub trait Strategy: Send + Sync {
	/// Declaration the strategy is registered under.
	fn descriptor(&self) -> &StrategyDescriptor;

	/// Returns the provider-assigned identifier (`uid`).
	fn identify(&self, assertion: &RawAssertion) -> Result<Uid>;

	/// Returns the contact and display fields (`info`).
	fn profile(&self, assertion: &RawAssertion) -> ProfileInfo;

	/// Returns provider-specific data (`extra`).
	///
	/// The default echoes the whole assertion under `raw_info`.
	fn extra(&self, assertion: &RawAssertion) -> ExtraPayload {
		ExtraPayload::from(assertion)
	}

	/// Reports whether the strategy acts during the given phase.
	///
	/// The default only handles callbacks; strategies with a redirect-to-provider step
	/// override it.
	fn handles(&self, phase: Phase) -> bool {
		matches!(phase, Phase::Callback)
	}

	/// Parser configured from the descriptor's options.
	fn parser(&self) -> AssertionParser {
		AssertionParser::new(self.descriptor())
	}
}

/// Host lifecycle phases a strategy may participate in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
	/// Redirect toward the identity provider.
	Request,
	/// Processing of the returning assertion.
	Callback,
}
impl Phase {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Phase::Request => "request",
			Phase::Callback => "callback",
		}
	}
}
impl Display for Phase {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
