//! Strongly typed identifiers shared by the strategy contract and the host catalog.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal, $validate:ident) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				$validate($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				$validate($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

/// Symbolic name the strategy is declared under.
pub const IMMUTABLE_PASSPORT: &str = "immutable_passport";

const STRATEGY_NAME_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (strategy, user).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (strategy, user).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (strategy, user).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! {
	StrategyName,
	"Name a strategy is registered under in the host catalog.",
	"Strategy",
	validate_strategy_name
}
def_id! { Uid, "Provider-assigned stable user identifier.", "Uid", validate_uid }
impl StrategyName {
	/// Returns the fixed `immutable_passport` name.
	pub fn immutable_passport() -> Self {
		Self(IMMUTABLE_PASSPORT.to_owned())
	}
}
impl Default for StrategyName {
	fn default() -> Self {
		Self::immutable_passport()
	}
}

fn validate_strategy_name(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.len() > STRATEGY_NAME_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: STRATEGY_NAME_MAX_LEN });
	}

	Ok(())
}

// Provider uids are opaque; only emptiness is rejected.
fn validate_uid(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() { Err(IdentifierError::Empty { kind }) } else { Ok(()) }
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	#[test]
	fn strategy_names_validate() {
		assert!(StrategyName::new(" passport").is_err(), "Leading whitespace must be rejected.");
		assert!(StrategyName::new("").is_err());
		assert!(StrategyName::new("a".repeat(STRATEGY_NAME_MAX_LEN + 1)).is_err());

		let name = StrategyName::new(IMMUTABLE_PASSPORT)
			.expect("Built-in strategy name should be considered valid.");

		assert_eq!(name, StrategyName::default());
		assert_eq!(format!("{name:?}"), "Strategy(immutable_passport)");
	}

	#[test]
	fn uids_are_opaque_but_non_empty() {
		assert!(matches!(Uid::new(""), Err(IdentifierError::Empty { kind: "Uid" })));

		let uid = Uid::new("email|0x12 ab").expect("Opaque uid with spaces should be accepted.");

		assert_eq!(uid.as_ref(), "email|0x12 ab");
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let uid: Uid = serde_json::from_str("\"u1\"").expect("Uid should deserialize successfully.");

		assert_eq!(&*uid, "u1");
		assert!(serde_json::from_str::<Uid>("\"\"").is_err());
		assert!(serde_json::from_str::<StrategyName>("\"with space\"").is_err());
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<StrategyName, u8> = HashMap::from_iter([(StrategyName::default(), 7_u8)]);

		assert_eq!(map.get(IMMUTABLE_PASSPORT), Some(&7));
	}
}
