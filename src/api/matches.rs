//! Match listings, live filtering, and per-match endpoints.

// crates.io
use time::Date;
// self
use crate::{_prelude::*, api::FotMob};

/// Status key the provider uses for completed matches.
pub const FINISHED_STATUS: &str = "finished";

/// Formats a date the way the matches endpoint expects it: `YYYYMMDD`.
pub fn format_match_date(date: Date) -> String {
	format!("{:04}{:02}{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Returns `true` when `status.reason.longKey` reads `"finished"`.
///
/// A missing or non-string path counts as not finished.
pub fn is_finished(game: &Value) -> bool {
	game.pointer("/status/reason/longKey").and_then(Value::as_str) == Some(FINISHED_STATUS)
}

/// Flattens `leagues[].matches[]` and keeps the matches that are not finished.
///
/// Leagues without a `matches` array and payloads without `leagues` contribute nothing.
pub fn live_matches(data: Value) -> Vec<Value> {
	let Value::Object(mut root) = data else {
		return Vec::new();
	};
	let Some(Value::Array(leagues)) = root.remove("leagues") else {
		return Vec::new();
	};

	leagues
		.into_iter()
		.filter_map(|league| match league {
			Value::Object(mut league) => match league.remove("matches") {
				Some(Value::Array(games)) => Some(games),
				_ => None,
			},
			_ => None,
		})
		.flatten()
		.filter(|game| !is_finished(game))
		.collect()
}

impl FotMob {
	/// Every match on `date`, grouped by league; `None` means today (UTC).
	pub async fn matches_by_date(&self, date: Option<Date>) -> Result<Value> {
		let date = format_match_date(date.unwrap_or_else(|| OffsetDateTime::now_utc().date()));

		self.executor
			.get(
				"/data/matches",
				&[
					("date", date.as_str()),
					("timezone", self.region.timezone.as_str()),
					("ccode3", self.region.ccode3.as_str()),
				],
			)
			.await
	}

	/// Today's matches (UTC date), grouped by league.
	pub async fn todays_games(&self) -> Result<Value> {
		self.matches_by_date(None).await
	}

	/// Today's matches that have not finished, flattened across leagues.
	pub async fn live_games(&self) -> Result<Vec<Value>> {
		Ok(live_matches(self.todays_games().await?))
	}

	/// Matches the provider highlights for the configured locale.
	pub async fn notable_matches(&self) -> Result<Value> {
		self.executor
			.get(
				"/data/notableMatches",
				&[
					("lang", self.region.language.as_str()),
					("country", self.region.ccode3.as_str()),
				],
			)
			.await
	}

	/// Full match payload: header, lineups, events, and stats.
	pub async fn match_details(&self, match_id: u64) -> Result<Value> {
		let id = match_id.to_string();

		self.executor.get("/data/match", &[("id", id.as_str())]).await
	}

	/// Betting odds for one match.
	pub async fn match_odds(&self, match_id: u64) -> Result<Value> {
		let id = match_id.to_string();

		self.executor
			.get(
				"/data/matchOdds",
				&[("matchId", id.as_str()), ("ccode3", self.region.ccode3.as_str())],
			)
			.await
	}

	/// TV listings for one match in the configured country.
	pub async fn tv_listings(&self, match_id: u64) -> Result<Value> {
		let id = match_id.to_string();

		self.executor
			.get(
				"/data/tvlistings",
				&[("countryCode", self.region.country_code.as_str()), ("ids", id.as_str())],
			)
			.await
	}
}
