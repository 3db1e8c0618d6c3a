//! Search suggestions and the per-kind filters built on them.

// self
use crate::{_prelude::*, api::FotMob};

/// Languages the suggestion index is queried in.
pub const SEARCH_LANGUAGES: &str = "en,de,pl,da";
/// Hit count used by callers that have no preference.
pub const DEFAULT_SEARCH_HITS: u32 = 50;

/// Entity kind of a suggestion, read from its `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
	/// A club or national team.
	Team,
	/// A league or cup.
	League,
	/// A player.
	Player,
	/// A match.
	Match,
	/// Missing `type`, a non-string `type`, or a kind this crate does not know.
	Other,
}
impl SuggestionKind {
	/// Maps the provider's `type` label; unknown labels become [`SuggestionKind::Other`].
	pub fn from_label(label: &str) -> Self {
		match label {
			"team" => Self::Team,
			"league" => Self::League,
			"player" => Self::Player,
			"match" => Self::Match,
			_ => Self::Other,
		}
	}
}

/// One search hit, kept as raw JSON with typed accessors for the fields filters rely on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestion(pub Value);
impl Suggestion {
	/// Entity kind; [`SuggestionKind::Other`] when `type` is missing or unrecognized.
	pub fn kind(&self) -> SuggestionKind {
		self.0
			.get("type")
			.and_then(Value::as_str)
			.map_or(SuggestionKind::Other, SuggestionKind::from_label)
	}

	/// Provider identifier; numeric ids are rendered as strings. `None` when absent.
	pub fn id(&self) -> Option<String> {
		match self.0.get("id")? {
			Value::String(id) => Some(id.clone()),
			Value::Number(id) => Some(id.to_string()),
			_ => None,
		}
	}

	/// Display name; `None` when absent or not a string.
	pub fn name(&self) -> Option<&str> {
		self.0.get("name").and_then(Value::as_str)
	}

	/// Borrows the raw JSON.
	pub fn as_value(&self) -> &Value {
		&self.0
	}

	/// Returns the raw JSON.
	pub fn into_value(self) -> Value {
		self.0
	}
}

/// Pulls `[0].suggestions` out of a suggest response.
///
/// Anything else (not an array, empty array, missing or non-array `suggestions`) yields an
/// empty list.
pub fn extract_suggestions(data: Value) -> Vec<Suggestion> {
	let Value::Array(groups) = data else {
		return Vec::new();
	};

	match groups.into_iter().next() {
		Some(Value::Object(mut group)) => match group.remove("suggestions") {
			Some(Value::Array(items)) => items.into_iter().map(Suggestion).collect(),
			_ => Vec::new(),
		},
		_ => Vec::new(),
	}
}

impl FotMob {
	/// Searches teams, players, leagues, and matches.
	pub async fn search(&self, term: &str, hits: u32) -> Result<Vec<Suggestion>> {
		let hits = hits.to_string();
		let data = self
			.executor
			.get(
				"/data/search/suggest",
				&[("hits", hits.as_str()), ("lang", SEARCH_LANGUAGES), ("term", term)],
			)
			.await?;

		Ok(extract_suggestions(data))
	}

	/// Searches and keeps only suggestions of the given kind.
	pub async fn search_kind(
		&self,
		term: &str,
		hits: u32,
		kind: SuggestionKind,
	) -> Result<Vec<Suggestion>> {
		let mut suggestions = self.search(term, hits).await?;

		suggestions.retain(|suggestion| suggestion.kind() == kind);

		Ok(suggestions)
	}

	/// Team suggestions only.
	pub async fn search_team(&self, term: &str, hits: u32) -> Result<Vec<Suggestion>> {
		self.search_kind(term, hits, SuggestionKind::Team).await
	}

	/// League suggestions only.
	pub async fn search_league(&self, term: &str, hits: u32) -> Result<Vec<Suggestion>> {
		self.search_kind(term, hits, SuggestionKind::League).await
	}

	/// Player suggestions only.
	pub async fn search_player(&self, term: &str, hits: u32) -> Result<Vec<Suggestion>> {
		self.search_kind(term, hits, SuggestionKind::Player).await
	}
}
