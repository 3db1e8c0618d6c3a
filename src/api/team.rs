//! Team endpoints.

// self
use crate::{
	_prelude::*,
	api::{FotMob, flag},
};

impl FotMob {
	/// Team overview: squad, fixtures, table position, and history.
	pub async fn team(&self, team_id: u64) -> Result<Value> {
		let id = team_id.to_string();

		self.executor
			.get("/data/teams", &[("id", id.as_str()), ("ccode3", self.region.ccode3.as_str())])
			.await
	}

	/// Team news, paged by `start_index`.
	pub async fn team_news(&self, team_id: u64, start_index: u32) -> Result<Value> {
		self.news(team_id, "team", start_index).await
	}

	/// Pageable fixture list; pass the cursor from a previous page as `before`.
	pub async fn team_fixtures(&self, team_id: u64, before: Option<u64>) -> Result<Value> {
		let id = team_id.to_string();
		let before = before.map(|cursor| cursor.to_string());
		let mut params = vec![("teamId", id.as_str())];

		if let Some(cursor) = before.as_deref() {
			params.push(("before", cursor));
		}

		self.executor.get("/data/pageableFixtures", &params).await
	}

	/// Season statistics for a team within one tournament.
	pub async fn team_stats(
		&self,
		team_id: u64,
		tournament_id: u64,
		is_team_sub_tab: bool,
	) -> Result<Value> {
		let team = team_id.to_string();
		let tournament = tournament_id.to_string();

		self.executor
			.get(
				"/data/teamseasonstats",
				&[
					("teamId", team.as_str()),
					("tournamentId", tournament.as_str()),
					("isTeamSubTab", flag(is_team_sub_tab)),
				],
			)
			.await
	}

	/// Historical league table; `table_link` comes from the team overview payload.
	pub async fn historical_table(&self, team_id: u64, table_link: &str) -> Result<Value> {
		let id = team_id.to_string();

		self.executor
			.get("/data/historicaltable", &[("teamId", id.as_str()), ("tableLink", table_link)])
			.await
	}
}
