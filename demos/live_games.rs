//! Lists today's unfinished matches through a token-gated executor pointed at a local mock of
//! the provider and its token proxy.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use fotmob_client::{
	api::{FotMob, team_logo},
	config::ExecutorConfig,
	executor::Executor,
	serde_json::json,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let proxy_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({ "x-mas": "demo-token" }));
		})
		.await;
	let matches_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/matches").header("x-mas", "demo-token");
			then.status(200).json_body(json!({ "leagues": [{
				"name": "Premier League",
				"matches": [
					{
						"id": 4193490,
						"home": { "id": 9825, "name": "Arsenal" },
						"away": { "id": 8650, "name": "Liverpool" },
						"status": { "reason": { "longKey": "finished" } }
					},
					{
						"id": 4193491,
						"home": { "id": 8456, "name": "Manchester City" },
						"away": { "id": 10260, "name": "Manchester United" },
						"status": { "started": true }
					}
				]
			}] }));
		})
		.await;
	let config = ExecutorConfig::builder()
		.base_url(Url::parse(&server.url("/api"))?)
		.proxy_url(Url::parse(&server.url("/proxy"))?)
		.build()?;
	let executor = Arc::new(Executor::new(config));
	let client = FotMob::with_executor(executor.clone());

	for game in client.live_games().await? {
		let home = game.pointer("/home/name").and_then(|name| name.as_str()).unwrap_or("?");
		let away = game.pointer("/away/name").and_then(|name| name.as_str()).unwrap_or("?");
		let logo = game.pointer("/home/id").and_then(|id| id.as_u64()).map(team_logo);

		println!("{home} vs {away} (home crest: {})", logo.as_deref().unwrap_or("n/a"));
	}

	client.close();

	println!(
		"Token fetches: {}, requests: {}, fallbacks: {}.",
		executor.metrics().token_fetches(),
		executor.metrics().requests(),
		executor.metrics().fallbacks()
	);

	proxy_mock.assert_calls_async(1).await;
	matches_mock.assert_calls_async(1).await;

	Ok(())
}
