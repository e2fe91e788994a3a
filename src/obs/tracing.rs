// self
use crate::{_prelude::*, id::StrategyName, obs::CallbackOutcome};

/// A span builder used by the callback phase.
#[derive(Clone, Debug)]
pub struct CallbackSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallbackSpan {
	/// Creates a new span tagged with the strategy name + stage.
	pub fn new(strategy: &StrategyName, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"immutable_passport.callback",
				strategy = strategy.as_ref(),
				stage
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (strategy, stage);

			Self {}
		}
	}

	/// Enters the span for the synchronous callback section.
	pub fn entered(self) -> CallbackSpanGuard {
		#[cfg(feature = "tracing")]
		{
			CallbackSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			CallbackSpanGuard {}
		}
	}
}

/// RAII guard returned by [`CallbackSpan::entered`].
pub struct CallbackSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for CallbackSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("CallbackSpanGuard(..)")
	}
}

/// Emits a structured event describing how a callback ended.
pub fn trace_callback_outcome(outcome: CallbackOutcome, err: Option<&Error>) {
	#[cfg(feature = "tracing")]
	{
		match err {
			Some(err) => tracing::warn!(outcome = outcome.as_str(), error = %err, "callback failed"),
			None => tracing::debug!(outcome = outcome.as_str(), "callback completed"),
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (outcome, err);
	}
}
