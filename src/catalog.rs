//! Host-side catalog holding strategies by the name they declare.

// std
use std::collections::btree_map::Entry;
// self
use crate::{
	_prelude::*,
	id::StrategyName,
	strategy::{Phase, Strategy},
};

type StrategyMap = BTreeMap<StrategyName, Arc<dyn Strategy>>;

/// Errors raised while registering strategies.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CatalogError {
	/// Another strategy already claimed the name.
	#[error("Strategy `{name}` is already registered.")]
	Collision {
		/// Contested strategy name.
		name: StrategyName,
	},
}

/// Thread-safe collection of strategies keyed by their declared name.
#[derive(Clone, Default)]
pub struct StrategyCatalog(Arc<RwLock<StrategyMap>>);
impl StrategyCatalog {
	/// Registers a strategy under its descriptor's name.
	pub fn register(&self, strategy: Arc<dyn Strategy>) -> Result<(), CatalogError> {
		let name = strategy.descriptor().name.clone();

		match self.0.write().entry(name) {
			Entry::Occupied(entry) => Err(CatalogError::Collision { name: entry.key().clone() }),
			Entry::Vacant(entry) => {
				entry.insert(strategy);

				Ok(())
			},
		}
	}

	/// Looks up a strategy by name.
	pub fn get(&self, name: &str) -> Option<Arc<dyn Strategy>> {
		self.0.read().get(name).cloned()
	}

	/// Removes a strategy, returning it when it was registered.
	pub fn remove(&self, name: &str) -> Option<Arc<dyn Strategy>> {
		self.0.write().remove(name)
	}

	/// Registered names in sorted order.
	pub fn names(&self) -> Vec<StrategyName> {
		self.0.read().keys().cloned().collect()
	}

	/// Strategies that act during the given phase, in name order.
	pub fn handling(&self, phase: Phase) -> Vec<Arc<dyn Strategy>> {
		self.0.read().values().filter(|strategy| strategy.handles(phase)).cloned().collect()
	}
}
impl Debug for StrategyCatalog {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("StrategyCatalog").field(&self.names()).finish()
	}
}
