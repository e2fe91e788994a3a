// self
use crate::{id::StrategyName, obs::CallbackOutcome};

/// Records a callback outcome via the global metrics recorder (when enabled).
pub fn record_callback_outcome(strategy: &StrategyName, outcome: CallbackOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"immutable_passport_callback_total",
			"strategy" => strategy.to_string(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (strategy, outcome);
	}
}

/// Recorder that keeps every counter registration so tests can assert on labels.
#[cfg(all(test, feature = "metrics"))]
#[derive(Default)]
pub(crate) struct CapturingRecorder(std::sync::Mutex<Vec<metrics::Key>>);
#[cfg(all(test, feature = "metrics"))]
impl CapturingRecorder {
	/// `key=value` labels of each `immutable_passport_callback_total` registration, in call order.
	pub(crate) fn counters(&self) -> Vec<Vec<String>> {
		self.0
			.lock()
			.expect("Recorder lock should not be poisoned.")
			.iter()
			.filter(|key| key.name() == "immutable_passport_callback_total")
			.map(|key| {
				key.labels().map(|label| format!("{}={}", label.key(), label.value())).collect()
			})
			.collect()
	}
}
#[cfg(all(test, feature = "metrics"))]
impl metrics::Recorder for CapturingRecorder {
	fn describe_counter(
		&self,
		_: metrics::KeyName,
		_: Option<metrics::Unit>,
		_: metrics::SharedString,
	) {
	}

	fn describe_gauge(
		&self,
		_: metrics::KeyName,
		_: Option<metrics::Unit>,
		_: metrics::SharedString,
	) {
	}

	fn describe_histogram(
		&self,
		_: metrics::KeyName,
		_: Option<metrics::Unit>,
		_: metrics::SharedString,
	) {
	}

	fn register_counter(&self, key: &metrics::Key, _: &metrics::Metadata<'_>) -> metrics::Counter {
		self.0.lock().expect("Recorder lock should not be poisoned.").push(key.clone());

		metrics::Counter::noop()
	}

	fn register_gauge(&self, _: &metrics::Key, _: &metrics::Metadata<'_>) -> metrics::Gauge {
		metrics::Gauge::noop()
	}

	fn register_histogram(
		&self,
		_: &metrics::Key,
		_: &metrics::Metadata<'_>,
	) -> metrics::Histogram {
		metrics::Histogram::noop()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[cfg(not(feature = "metrics"))]
	#[test]
	fn record_callback_outcome_noop_without_metrics() {
		record_callback_outcome(&StrategyName::default(), CallbackOutcome::MalformedAssertion);
	}

	#[cfg(feature = "metrics")]
	#[test]
	fn record_callback_outcome_labels_the_counter() {
		let recorder = CapturingRecorder::default();

		metrics::with_local_recorder(&recorder, || {
			record_callback_outcome(&StrategyName::default(), CallbackOutcome::Attempt);
			record_callback_outcome(&StrategyName::default(), CallbackOutcome::BodyTooLarge);
		});

		assert_eq!(
			recorder.counters(),
			[
				["strategy=immutable_passport", "outcome=attempt"],
				["strategy=immutable_passport", "outcome=body_too_large"],
			]
		);
	}
}
