// crates.io
use httpmock::prelude::*;
// self
use fotmob_client::{_preludet::*, serde_json::json};

#[tokio::test]
async fn close_is_idempotent_and_safe_before_open() {
	let server = MockServer::start_async().await;
	let executor = build_test_executor(&server.base_url());

	executor.close();
	executor.close();

	assert!(!executor.is_open());

	executor.open().expect("Open should succeed.");
	executor.open().expect("Second open should be a no-op.");

	assert!(executor.is_open());

	executor.close();
	executor.close();

	assert!(!executor.is_open());
}

#[tokio::test]
async fn requests_reopen_a_closed_session() {
	let server = MockServer::start_async().await;
	let proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({ "x-mas": "abc123" }));
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/allLeagues").header("x-mas", "abc123");
			then.status(200).json_body(json!({}));
		})
		.await;
	let (client, executor) = build_test_client(&server.base_url());

	client.all_leagues().await.expect("Lazy open should succeed.");

	assert!(executor.is_open());

	client.close();

	assert!(!executor.is_open());

	client.all_leagues().await.expect("Request after close should reopen the session.");

	assert!(executor.is_open());

	proxy.assert_calls_async(1).await;
	endpoint.assert_calls_async(2).await;
}
