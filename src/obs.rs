//! Optional observability helpers for executor requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit structured spans named `fotmob_client.request` with the
//!   `kind` (token fetch, primary, fallback) and `stage` (call site) fields, plus events for
//!   token refreshes and degraded-mode decisions.
//! - Enable `metrics` to increment the `fotmob_client_request_total` counter for every
//!   attempt/success/failure, labeled by `kind` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Request kinds observed by the executor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
	/// Call to the token proxy.
	TokenFetch,
	/// First provider attempt, carrying the token when one is available.
	Primary,
	/// Single unauthenticated retry after a failed authenticated attempt.
	Fallback,
}
impl RequestKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestKind::TokenFetch => "token_fetch",
			RequestKind::Primary => "primary",
			RequestKind::Fallback => "fallback",
		}
	}
}
impl Display for RequestKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to an executor operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure (propagated, or swallowed for token fetches).
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Flattens an error and its sources into `outer: inner: root`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
	let mut rendered = err.to_string();
	let mut source = err.source();

	while let Some(cause) = source {
		rendered.push_str(": ");
		rendered.push_str(&cause.to_string());

		source = cause.source();
	}

	rendered
}
