//! Callback body decoding into a typed, loosely-validated identity assertion.
//!
//! The body is read exactly once, decoded as JSON, and the node under the configured key
//! (`omniauth` by default) is projected onto [`RawAssertion`]. Known fields are typed; every
//! other key lands in a side-map, and the verbatim node is kept for `raw_info` consumers.
//! A missing or `null` node yields an empty assertion instead of an error so the mapper can
//! degrade gracefully and leave the identity decision to the `uid` hook.

// crates.io
use serde::{Deserializer, de::Error as _};
// self
use crate::{_prelude::*, strategy::StrategyDescriptor};

/// Decoded identity assertion owned by a single callback.
#[derive(Clone, Debug, PartialEq)]
pub struct RawAssertion {
	/// Provider-assigned identifier, if present.
	pub uid: Option<String>,
	/// Contact and display fields.
	pub info: AssertionInfo,
	/// Top-level keys outside the canonical set.
	pub other: Map<String, Value>,
	raw: Value,
}
impl RawAssertion {
	/// Projects an already-decoded assertion node.
	///
	/// `Null` is treated as an absent node. Any other non-object value is rejected.
	pub fn from_node(node: Value) -> Result<Self> {
		Self::from_node_at(node, "")
	}

	fn from_node_at(node: Value, root: &str) -> Result<Self> {
		let node = match node {
			Value::Null => Value::Object(Map::new()),
			node => node,
		};

		ensure_object(&node, root)?;

		if let Some(info) = node.get("info").filter(|info| !info.is_null()) {
			ensure_object(info, &join_path(root, "info"))?;
		}

		let fields: AssertionFields = serde_path_to_error::deserialize(&node).map_err(|e| {
			let path = join_path(root, &e.path().to_string());

			Error::InvalidAssertion { path, source: e.into_inner() }
		})?;

		let mut info = fields.info.unwrap_or_default();

		info.other = side_map(node.get("info"), AssertionInfo::KNOWN_KEYS);

		let other = side_map(Some(&node), AssertionFields::KNOWN_KEYS);

		Ok(Self { uid: fields.uid, info, other, raw: node })
	}

	/// Verbatim decoded node, exactly as received.
	pub fn raw(&self) -> &Value {
		&self.raw
	}

	/// Consumes the assertion and returns the verbatim node.
	pub fn into_raw(self) -> Value {
		self.raw
	}

	/// Looks up a provider-specific top-level field.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.raw.get(key)
	}

	/// Returns true when the node carried no fields at all.
	pub fn is_empty(&self) -> bool {
		self.raw.as_object().is_none_or(Map::is_empty)
	}
}
impl Default for RawAssertion {
	fn default() -> Self {
		Self {
			uid: None,
			info: AssertionInfo::default(),
			other: Map::new(),
			raw: Value::Object(Map::new()),
		}
	}
}
impl Serialize for RawAssertion {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		self.raw.serialize(serializer)
	}
}

/// Contact and display fields nested under `info`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AssertionInfo {
	/// Email address.
	#[serde(default)]
	pub email: Option<String>,
	/// Display name.
	#[serde(default)]
	pub name: Option<String>,
	/// Handle or short name.
	#[serde(default)]
	pub nickname: Option<String>,
	/// Info keys outside the canonical set.
	#[serde(skip)]
	pub other: Map<String, Value>,
}
impl AssertionInfo {
	const KNOWN_KEYS: &'static [&'static str] = &["email", "name", "nickname"];
}

/// Reads callback bodies according to a descriptor's options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssertionParser {
	key: String,
	max_body_bytes: usize,
}
impl AssertionParser {
	/// Creates a parser bound to the descriptor's assertion key and body limit.
	pub fn new(descriptor: &StrategyDescriptor) -> Self {
		Self {
			key: descriptor.options.assertion_key.clone(),
			max_body_bytes: descriptor.options.max_body_bytes,
		}
	}

	/// Document key the assertion is read from.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Drains the body stream once and decodes it.
	///
	/// Reading stops one byte past the configured limit so oversized bodies are rejected
	/// without buffering them whole.
	pub fn parse<R>(&self, body: R) -> Result<RawAssertion>
	where
		R: Read,
	{
		let mut buf = Vec::new();
		let limit = u64::try_from(self.max_body_bytes).unwrap_or(u64::MAX).saturating_add(1);

		body.take(limit).read_to_end(&mut buf)?;

		if buf.len() > self.max_body_bytes {
			return Err(Error::BodyTooLarge { limit: self.max_body_bytes });
		}

		self.parse_slice(&buf)
	}

	/// Decodes an in-memory body.
	pub fn parse_slice(&self, body: &[u8]) -> Result<RawAssertion> {
		let mut de = serde_json::Deserializer::from_slice(body);
		let document: Map<String, Value> =
			serde_path_to_error::deserialize(&mut de).map_err(Error::malformed)?;

		de.end().map_err(|source| Error::MalformedAssertion { path: ".".into(), source })?;

		self.extract(document)
	}

	fn extract(&self, mut document: Map<String, Value>) -> Result<RawAssertion> {
		let node = document.remove(&self.key).unwrap_or(Value::Null);

		RawAssertion::from_node_at(node, &self.key)
	}
}
impl Default for AssertionParser {
	fn default() -> Self {
		Self::new(&StrategyDescriptor::default())
	}
}

#[derive(Deserialize)]
struct AssertionFields {
	#[serde(default, deserialize_with = "deserialize_uid")]
	uid: Option<String>,
	#[serde(default)]
	info: Option<AssertionInfo>,
}
impl AssertionFields {
	const KNOWN_KEYS: &'static [&'static str] = &["uid", "info"];
}

// Derived structs also accept sequences, so object shape is checked up front.
fn ensure_object(node: &Value, path: &str) -> Result<()> {
	if node.is_object() {
		return Ok(());
	}

	let source =
		serde_json::Error::custom(format!("expected an object, found {}", kind_of(node)));

	let path = if path.is_empty() { ".".to_owned() } else { path.to_owned() };

	Err(Error::InvalidAssertion { path, source })
}

fn side_map(node: Option<&Value>, known: &[&str]) -> Map<String, Value> {
	node.and_then(Value::as_object)
		.map(|fields| {
			fields
				.iter()
				.filter(|(key, _)| !known.contains(&key.as_str()))
				.map(|(key, value)| (key.clone(), value.clone()))
				.collect()
		})
		.unwrap_or_default()
}

// Integer uids are rendered in decimal. Floats and integers outside 64 bits would lose
// digits through `f64`, so they are rejected rather than rewritten.
fn deserialize_uid<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	match Option::<Value>::deserialize(deserializer)? {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(uid)) => Ok(Some(uid)),
		Some(Value::Number(uid)) => match (uid.as_u64(), uid.as_i64()) {
			(Some(uid), _) => Ok(Some(uid.to_string())),
			(None, Some(uid)) => Ok(Some(uid.to_string())),
			(None, None) => Err(D::Error::custom(
				"numeric uid must be a 64-bit integer; send larger or fractional ids as strings",
			)),
		},
		Some(other) => Err(D::Error::custom(format!(
			"expected a string or number uid, found {}",
			kind_of(&other)
		))),
	}
}

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

fn join_path(root: &str, path: &str) -> String {
	match (root.is_empty(), path == ".") {
		(true, _) => path.to_owned(),
		(false, true) => root.to_owned(),
		(false, false) => format!("{root}.{path}"),
	}
}
