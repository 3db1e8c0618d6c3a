//! Request counters exported through the `metrics` facade.
//!
//! One counter, [`REQUEST_COUNTER`], labeled by `kind` (`token_fetch`, `primary`, `fallback`)
//! and `outcome` (`attempt`, `success`, `failure`). A fallback `success` therefore marks a
//! request served without the x-mas token.

// self
use crate::obs::{RequestKind, RequestOutcome};

/// Name of the per-attempt request counter.
pub const REQUEST_COUNTER: &str = "fotmob_client_request_total";

/// Bumps [`REQUEST_COUNTER`] for one executor attempt. Compiles to nothing without `metrics`.
pub fn record_request_outcome(kind: RequestKind, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(REQUEST_COUNTER, "kind" => kind.as_str(), "outcome" => outcome.as_str())
			.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
