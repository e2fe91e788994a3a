//! Optional observability helpers for the callback phase.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `immutable_passport.callback` with the
//!   `strategy` (registered name) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `immutable_passport_callback_total` counter for every
//!   attempt/success/failure, labeled by `strategy` + `outcome`. Failures are split into `io`,
//!   `body_too_large`, `malformed_assertion`, and `missing_identity`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallbackOutcome {
	/// Entry to the callback phase.
	Attempt,
	/// Auth hash assembled.
	Success,
	/// Body stream failed while it was being read.
	Io,
	/// Body exceeded the configured size limit.
	BodyTooLarge,
	/// Body was read but could not be decoded into an assertion.
	MalformedAssertion,
	/// Assertion decoded but carried no identifier.
	MissingIdentity,
}
impl CallbackOutcome {
	/// Classifies a callback error.
	pub fn from_error(err: &Error) -> Self {
		match err {
			Error::Io(_) => Self::Io,
			Error::BodyTooLarge { .. } => Self::BodyTooLarge,
			Error::MalformedAssertion { .. } | Error::InvalidAssertion { .. } =>
				Self::MalformedAssertion,
			Error::MissingIdentity => Self::MissingIdentity,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallbackOutcome::Attempt => "attempt",
			CallbackOutcome::Success => "success",
			CallbackOutcome::Io => "io",
			CallbackOutcome::BodyTooLarge => "body_too_large",
			CallbackOutcome::MalformedAssertion => "malformed_assertion",
			CallbackOutcome::MissingIdentity => "missing_identity",
		}
	}
}
impl Display for CallbackOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
