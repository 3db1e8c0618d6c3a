//! Player profile and statistics endpoints.

// self
use crate::{
	_prelude::*,
	api::{FotMob, flag},
};

/// Season selector the provider uses for "current season, all competitions".
pub const CURRENT_SEASON_ID: &str = "0-1";

impl FotMob {
	/// Player profile and career summary.
	pub async fn player(&self, player_id: u64) -> Result<Value> {
		let id = player_id.to_string();

		self.executor.get("/data/playerData", &[("id", id.as_str())]).await
	}

	/// Player statistics for a season id such as [`CURRENT_SEASON_ID`].
	pub async fn player_stats(
		&self,
		player_id: u64,
		season_id: &str,
		is_first_season: bool,
	) -> Result<Value> {
		let id = player_id.to_string();

		self.executor
			.get(
				"/data/playerStats",
				&[
					("id", id.as_str()),
					("seasonId", season_id),
					("isFirstSeason", flag(is_first_season)),
				],
			)
			.await
	}
}
