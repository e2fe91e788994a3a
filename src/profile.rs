//! Canonical profile projection and the verbatim `raw_info` payload.
//!
//! Mapping is a pure function of the decoded assertion. Empty strings count as absent, and the
//! display name falls back from `name` to `nickname` to `email`, first non-empty wins.

// self
use crate::{_prelude::*, assertion::RawAssertion, id::Uid};

/// Contact and display fields handed to the host's `info` hook.
///
/// `email` and `name` always serialize (possibly `null`/empty); `nickname` only when present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
	/// Email address, when the provider supplied one.
	pub email: Option<String>,
	/// Display name after the fallback chain; empty only when every source is empty.
	#[serde(default)]
	pub name: String,
	/// Handle, when the provider supplied a non-empty one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nickname: Option<String>,
}
impl ProfileInfo {
	/// Projects the info fields of an assertion.
	pub fn from_assertion(assertion: &RawAssertion) -> Self {
		let info = &assertion.info;
		let email = non_empty(info.email.as_deref());
		let nickname = non_empty(info.nickname.as_deref());
		let name = non_empty(info.name.as_deref()).or(nickname).or(email).unwrap_or_default();

		Self {
			email: email.map(ToOwned::to_owned),
			name: name.to_owned(),
			nickname: nickname.map(ToOwned::to_owned),
		}
	}
}

/// Normalized user record: identity plus info fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalProfile {
	/// Provider-assigned stable identifier.
	pub uid: Uid,
	/// Contact and display fields.
	#[serde(flatten)]
	pub info: ProfileInfo,
}
impl CanonicalProfile {
	/// Maps an assertion into a profile, failing when no identifier is present.
	pub fn from_assertion(assertion: &RawAssertion) -> Result<Self> {
		Ok(Self { uid: identify(assertion)?, info: ProfileInfo::from_assertion(assertion) })
	}
}

/// Provider payload surfaced verbatim under `raw_info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtraPayload {
	/// Entire decoded assertion node.
	pub raw_info: Value,
}
impl From<&RawAssertion> for ExtraPayload {
	fn from(assertion: &RawAssertion) -> Self {
		Self { raw_info: assertion.raw().clone() }
	}
}

/// Extracts the required identifier from an assertion.
pub fn identify(assertion: &RawAssertion) -> Result<Uid> {
	let uid = non_empty(assertion.uid.as_deref()).ok_or(Error::MissingIdentity)?;

	Uid::new(uid).map_err(|_| Error::MissingIdentity)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.is_empty())
}
