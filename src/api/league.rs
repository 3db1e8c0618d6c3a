//! League, table, and team-of-the-week endpoints.

// self
use crate::{
	_prelude::*,
	api::{FotMob, images},
};

/// First entry of `allAvailableSeasons` in a league payload, the season the provider treats as
/// current. `None` when the list is missing, empty, or not an array.
pub fn current_season(league: &Value) -> Option<&Value> {
	league.get("allAvailableSeasons")?.as_array()?.first()
}

impl FotMob {
	/// League overview: fixtures, stats, transfers, and season metadata.
	pub async fn league(&self, league_id: u64) -> Result<Value> {
		let id = league_id.to_string();

		self.executor
			.get("/data/leagues", &[("id", id.as_str()), ("ccode3", self.region.ccode3.as_str())])
			.await
	}

	/// Season the provider lists first for a league, usually a label such as `"2024/2025"`.
	pub async fn league_current_season(&self, league_id: u64) -> Result<Option<Value>> {
		let league = self.league(league_id).await?;

		Ok(current_season(&league).cloned())
	}

	/// Current league table.
	pub async fn standings(&self, league_id: u64) -> Result<Value> {
		let id = league_id.to_string();

		self.executor.get("/data/tltable", &[("leagueId", id.as_str())]).await
	}

	/// League news, paged by `start_index`.
	pub async fn league_news(&self, league_id: u64, start_index: u32) -> Result<Value> {
		self.news(league_id, "league", start_index).await
	}

	/// Fixtures for one season (for example `"2024/2025"`).
	pub async fn league_fixtures(&self, league_id: u64, season: &str) -> Result<Value> {
		let id = league_id.to_string();

		self.executor.get("/data/fixtures", &[("id", id.as_str()), ("season", season)]).await
	}

	/// Team-of-the-week rounds available for a season.
	pub async fn totw_rounds(&self, league_id: u64, season: &str) -> Result<Value> {
		let id = league_id.to_string();

		self.executor
			.get("/data/team-of-the-week/rounds", &[("leagueId", id.as_str()), ("season", season)])
			.await
	}

	/// Team of the week for one round.
	pub async fn totw(&self, league_id: u64, season: &str, round_id: u32) -> Result<Value> {
		let id = league_id.to_string();
		let round = round_id.to_string();

		self.executor
			.get(
				"/data/team-of-the-week/team",
				&[("leagueId", id.as_str()), ("roundId", round.as_str()), ("season", season)],
			)
			.await
	}

	/// League logo to show beside a team of the week, or `None` when the round has no data.
	///
	/// Null, empty objects, and empty arrays count as no data.
	pub async fn totw_logo_url(
		&self,
		league_id: u64,
		season: &str,
		round_id: u32,
	) -> Result<Option<String>> {
		let team = self.totw(league_id, season, round_id).await?;
		let empty = match &team {
			Value::Null => true,
			Value::Object(fields) => fields.is_empty(),
			Value::Array(items) => items.is_empty(),
			_ => false,
		};

		Ok((!empty).then(|| images::totw_logo(league_id)))
	}

	/// Fixture difficulty ratings for every team in a league.
	pub async fn fixture_difficulty(&self, league_id: u64) -> Result<Value> {
		let id = league_id.to_string();

		self.executor.get("/data/fixtureDifficulty", &[("id", id.as_str())]).await
	}

	pub(crate) async fn news(&self, id: u64, kind: &str, start_index: u32) -> Result<Value> {
		let id = id.to_string();
		let start_index = start_index.to_string();

		self.executor
			.get(
				"/data/tlnews",
				&[
					("id", id.as_str()),
					("type", kind),
					("language", self.region.language.as_str()),
					("startIndex", start_index.as_str()),
				],
			)
			.await
	}
}
