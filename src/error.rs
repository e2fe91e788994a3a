//! Strategy-level error types shared by the parser, the profile mapper, and the callback phase.

// self
use crate::_prelude::*;

/// Strategy-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical strategy error surfaced to the host's callback-failure path.
///
/// Every variant is terminal for the request that produced it; the strategy never retries.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Body stream could not be read.
	#[error("Failed to read the callback request body.")]
	Io(#[from] std::io::Error),
	/// Body exceeded the configured read limit.
	#[error("Callback request body exceeds {limit} bytes.")]
	BodyTooLarge {
		/// Configured limit in bytes.
		limit: usize,
	},
	/// Body is not a well-formed JSON document.
	#[error("Callback request body is not a valid assertion document at `{path}`.")]
	MalformedAssertion {
		/// JSON path where decoding stopped.
		path: String,
		/// Underlying decoder failure.
		#[source]
		source: serde_json::Error,
	},
	/// Document decoded but the assertion node has the wrong shape.
	#[error("Assertion field `{path}` has an unexpected shape.")]
	InvalidAssertion {
		/// JSON path of the offending node, rooted at the assertion key.
		path: String,
		/// Underlying type mismatch.
		#[source]
		source: serde_json::Error,
	},

	/// Assertion carries no usable unique identifier.
	#[error("Assertion does not carry a user identifier.")]
	MissingIdentity,
}
impl Error {
	pub(crate) fn malformed(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = err.path().to_string();

		Self::MalformedAssertion { path, source: err.into_inner() }
	}

	/// Returns true when the failure stems from the wire document rather than the identity.
	pub fn is_decode_failure(&self) -> bool {
		matches!(
			self,
			Self::Io(_)
				| Self::BodyTooLarge { .. }
				| Self::MalformedAssertion { .. }
				| Self::InvalidAssertion { .. }
		)
	}
}
