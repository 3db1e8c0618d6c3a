//! Endpoint facade: one thin method per provider endpoint on top of [`Executor::get`].
//!
//! [`FotMob`] owns (or shares) a long-lived [`Executor`] and a [`Region`] supplying the locale
//! parameters the provider expects. Methods return the provider's JSON untouched unless they
//! document a reshaping step; reshaping reads fields through explicit optional accessors with
//! documented defaults instead of trusting the upstream shape.

pub mod images;
pub mod search;

mod league;
mod matches;
mod player;
mod team;

pub use images::*;
pub use league::current_season;
pub use matches::*;
pub use player::CURRENT_SEASON_ID;
pub use search::*;

// self
use crate::{_prelude::*, config::Region, executor::Executor};

/// Typed entry point for the provider's JSON API.
#[derive(Clone, Debug)]
pub struct FotMob {
	executor: Arc<Executor>,
	region: Region,
}
impl FotMob {
	/// Creates a facade over a default-configured executor.
	pub fn new() -> Result<Self> {
		Ok(Self::with_executor(Arc::new(Executor::with_defaults()?)))
	}

	/// Creates a facade over a caller-owned executor (shared session and token cache).
	pub fn with_executor(executor: Arc<Executor>) -> Self {
		Self { executor, region: Region::default() }
	}

	/// Overrides the locale parameters forwarded to the provider.
	pub fn with_region(mut self, region: Region) -> Self {
		self.region = region;

		self
	}

	/// Underlying executor, for raw `get` calls against endpoints without a wrapper.
	pub fn executor(&self) -> &Arc<Executor> {
		&self.executor
	}

	/// Locale parameters in use.
	pub fn region(&self) -> &Region {
		&self.region
	}

	/// Opens the transport session eagerly.
	pub fn open(&self) -> Result<()> {
		self.executor.open()
	}

	/// Closes the transport session. Safe to call repeatedly.
	pub fn close(&self) {
		self.executor.close();
	}

	/// Every league the provider knows about, grouped by country.
	pub async fn all_leagues(&self) -> Result<Value> {
		self.executor.get("/data/allLeagues", &[]).await
	}
}

/// Renders a boolean the way the provider's query strings expect it.
pub(crate) fn flag(value: bool) -> &'static str {
	if value { "true" } else { "false" }
}
