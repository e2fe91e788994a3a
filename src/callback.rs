//! Callback phase orchestration.
//!
//! The body is decoded eagerly when the phase starts, and the resulting [`RawAssertion`] is
//! owned by the [`CallbackPhase`] for the rest of the request. Hosts then pull `uid`, `info`,
//! and `extra` through the strategy hooks, or ask for the assembled [`AuthHash`] directly.

// self
use crate::{
	_prelude::*,
	assertion::RawAssertion,
	id::{StrategyName, Uid},
	obs::{self, CallbackOutcome, CallbackSpan},
	profile::{CanonicalProfile, ExtraPayload, ProfileInfo},
	strategy::Strategy,
};

/// Record a host stores after a successful callback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthHash {
	/// Name of the strategy that produced the record.
	pub provider: StrategyName,
	/// Provider-assigned identifier.
	pub uid: Uid,
	/// Contact and display fields.
	pub info: ProfileInfo,
	/// Verbatim provider payload.
	pub extra: ExtraPayload,
}
impl AuthHash {
	/// Returns the canonical profile view of the record.
	pub fn profile(&self) -> CanonicalProfile {
		CanonicalProfile { uid: self.uid.clone(), info: self.info.clone() }
	}
}

/// Request-scoped callback state binding a strategy to the assertion it decoded.
pub struct CallbackPhase<'s, S>
where
	S: ?Sized + Strategy,
{
	strategy: &'s S,
	assertion: RawAssertion,
}
impl<'s, S> CallbackPhase<'s, S>
where
	S: ?Sized + Strategy,
{
	/// Starts the phase by draining and decoding the request body.
	///
	/// The body is consumed here and never touched again; decode failures are terminal.
	pub fn from_body<R>(strategy: &'s S, body: R) -> Result<Self>
	where
		R: Read,
	{
		let name = &strategy.descriptor().name;
		let _guard = CallbackSpan::new(name, "parse_body").entered();

		obs::record_callback_outcome(name, CallbackOutcome::Attempt);

		match strategy.parser().parse(body) {
			Ok(assertion) => Ok(Self { strategy, assertion }),
			Err(e) => {
				let outcome = CallbackOutcome::from_error(&e);

				obs::trace_callback_outcome(outcome, Some(&e));
				obs::record_callback_outcome(name, outcome);

				Err(e)
			},
		}
	}

	/// Starts the phase from an assertion the host already decoded.
	pub fn from_assertion(strategy: &'s S, assertion: RawAssertion) -> Self {
		obs::record_callback_outcome(&strategy.descriptor().name, CallbackOutcome::Attempt);

		Self { strategy, assertion }
	}

	/// Strategy driving this phase.
	pub fn strategy(&self) -> &'s S {
		self.strategy
	}

	/// Request-scoped assertion shared by every hook.
	pub fn assertion(&self) -> &RawAssertion {
		&self.assertion
	}

	/// Runs the `uid` hook.
	pub fn uid(&self) -> Result<Uid> {
		self.strategy.identify(&self.assertion)
	}

	/// Runs the `info` hook.
	pub fn info(&self) -> ProfileInfo {
		self.strategy.profile(&self.assertion)
	}

	/// Runs the `extra` hook.
	pub fn extra(&self) -> ExtraPayload {
		self.strategy.extra(&self.assertion)
	}

	/// Runs all three hooks and assembles the host record.
	///
	/// A missing identifier fails the callback instead of yielding an anonymous record.
	pub fn auth_hash(&self) -> Result<AuthHash> {
		let name = &self.strategy.descriptor().name;
		let _guard = CallbackSpan::new(name, "auth_hash").entered();
		let uid = match self.uid() {
			Ok(uid) => uid,
			Err(e) => {
				let outcome = CallbackOutcome::from_error(&e);

				obs::trace_callback_outcome(outcome, Some(&e));
				obs::record_callback_outcome(name, outcome);

				return Err(e);
			},
		};
		let auth = AuthHash { provider: name.clone(), uid, info: self.info(), extra: self.extra() };

		obs::trace_callback_outcome(CallbackOutcome::Success, None);
		obs::record_callback_outcome(name, CallbackOutcome::Success);

		Ok(auth)
	}

	/// Ends the phase and hands the assertion back.
	pub fn into_assertion(self) -> RawAssertion {
		self.assertion
	}
}
impl<S> Debug for CallbackPhase<'_, S>
where
	S: ?Sized + Strategy,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CallbackPhase")
			.field("strategy", &self.strategy.descriptor().name)
			.field("assertion", &self.assertion)
			.finish()
	}
}

/// Runs a complete callback: decode the body once, then assemble the auth hash.
pub fn run_callback<S, R>(strategy: &S, body: R) -> Result<AuthHash>
where
	S: ?Sized + Strategy,
	R: Read,
{
	CallbackPhase::from_body(strategy, body)?.auth_hash()
}
