// self
use crate::_prelude::*;

/// Document key the identity assertion is nested under.
pub const DEFAULT_ASSERTION_KEY: &str = "omniauth";
/// Default upper bound on callback body size.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Options that influence how the callback body is read and decoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyOptions {
	/// Top-level document key holding the assertion node.
	pub assertion_key: String,
	/// Maximum number of body bytes read before the request is rejected.
	pub max_body_bytes: usize,
}
impl Default for StrategyOptions {
	fn default() -> Self {
		Self {
			assertion_key: DEFAULT_ASSERTION_KEY.to_owned(),
			max_body_bytes: DEFAULT_MAX_BODY_BYTES,
		}
	}
}
