//! Immutable Passport login strategy for pluggable authentication pipelines—parse the identity
//! assertion embedded in a callback request, normalize it into a canonical profile, and hand the
//! raw provider payload back to the host untouched.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod assertion;
pub mod callback;
pub mod catalog;
pub mod error;
pub mod id;
pub mod obs;
pub mod profile;
pub mod strategy;

#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Body-stream fixtures shared by unit and integration tests.
	//!
	//! Enable the `test` feature to reach these from outside the crate.

	// std
	use std::{
		cell::Cell,
		io::{Cursor, Error as IoError, ErrorKind, Read, Result as IoResult},
		rc::Rc,
	};

	/// Reader that counts how many times the body stream is pulled.
	#[derive(Debug)]
	pub struct CountingReader {
		inner: Cursor<Vec<u8>>,
		reads: Rc<Cell<usize>>,
	}
	impl CountingReader {
		/// Wraps the provided body and returns the shared read counter.
		pub fn new(body: impl Into<Vec<u8>>) -> (Self, Rc<Cell<usize>>) {
			let reads = Rc::new(Cell::new(0));

			(Self { inner: Cursor::new(body.into()), reads: reads.clone() }, reads)
		}
	}
	impl Read for CountingReader {
		fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
			self.reads.set(self.reads.get() + 1);

			self.inner.read(buf)
		}
	}

	/// Reader that yields a body prefix and then fails as if the peer dropped the connection.
	#[derive(Debug)]
	pub struct FailingReader {
		prefix: Cursor<Vec<u8>>,
		kind: ErrorKind,
	}
	impl FailingReader {
		/// Fails with [`ErrorKind::ConnectionReset`] once `prefix` is exhausted.
		pub fn new(prefix: impl Into<Vec<u8>>) -> Self {
			Self::with_kind(prefix, ErrorKind::ConnectionReset)
		}

		/// Fails with `kind` once `prefix` is exhausted.
		pub fn with_kind(prefix: impl Into<Vec<u8>>, kind: ErrorKind) -> Self {
			Self { prefix: Cursor::new(prefix.into()), kind }
		}
	}
	impl Read for FailingReader {
		fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
			match self.prefix.read(buf)? {
				0 => Err(IoError::from(self.kind)),
				n => Ok(n),
			}
		}
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		io::Read,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

pub use assertion::{AssertionParser, RawAssertion};
pub use callback::{AuthHash, CallbackPhase, run_callback};
pub use profile::{CanonicalProfile, ExtraPayload, ProfileInfo};
pub use strategy::{ImmutablePassport, Strategy, StrategyDescriptor};
#[cfg(test)] use color_eyre as _;
