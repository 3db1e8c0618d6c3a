//! Image URL builders. Pure string formatting; no request is made.

/// Root of the provider's image CDN.
pub const IMAGE_BASE_URL: &str = "https://images.fotmob.com/image_resources";

/// Team crest.
pub fn team_logo(team_id: u64) -> String {
	format!("{IMAGE_BASE_URL}/logo/teamlogo/{team_id}.png")
}

/// League logo (dark variant).
pub fn league_logo(league_id: u64) -> String {
	format!("{IMAGE_BASE_URL}/logo/leaguelogo/dark/{league_id}.png")
}

/// League logo (light variant) used for team-of-the-week graphics.
pub fn totw_logo(league_id: u64) -> String {
	format!("{IMAGE_BASE_URL}/logo/leaguelogo/{league_id}.png")
}

/// National flag/crest; the provider keys these by lowercase country code.
pub fn nation_logo(nation_code: &str) -> String {
	format!("{IMAGE_BASE_URL}/logo/teamlogo/{}.png", nation_code.to_ascii_lowercase())
}

/// Player headshot.
pub fn player_image(player_id: u64) -> String {
	format!("{IMAGE_BASE_URL}/logo/playerimages/{player_id}.png")
}
