// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for executor activity.
#[derive(Debug, Default)]
pub struct ExecutorMetrics {
	token_fetches: AtomicU64,
	token_failures: AtomicU64,
	requests: AtomicU64,
	fallbacks: AtomicU64,
	failures: AtomicU64,
}
impl ExecutorMetrics {
	/// Returns the number of proxy round trips (successful or not).
	pub fn token_fetches(&self) -> u64 {
		self.token_fetches.load(Ordering::Relaxed)
	}

	/// Returns the number of proxy round trips that produced no token.
	pub fn token_failures(&self) -> u64 {
		self.token_failures.load(Ordering::Relaxed)
	}

	/// Returns the number of `get` calls that reached the network.
	pub fn requests(&self) -> u64 {
		self.requests.load(Ordering::Relaxed)
	}

	/// Returns the number of unauthenticated retries issued.
	pub fn fallbacks(&self) -> u64 {
		self.fallbacks.load(Ordering::Relaxed)
	}

	/// Returns the number of `get` calls that surfaced an error.
	pub fn failures(&self) -> u64 {
		self.failures.load(Ordering::Relaxed)
	}

	pub(crate) fn record_token_fetch(&self) {
		self.token_fetches.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_token_failure(&self) {
		self.token_failures.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_request(&self) {
		self.requests.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_fallback(&self) {
		self.fallbacks.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.failures.fetch_add(1, Ordering::Relaxed);
	}
}
