// crates.io
use httpmock::prelude::*;
// self
use fotmob_client::{_preludet::*, error::TransportError, executor::Executor, serde_json::json};

#[tokio::test]
async fn proxy_without_token_sends_unauthenticated() {
	let server = MockServer::start_async().await;
	let proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({}));
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/allLeagues").header_missing("x-mas");
			then.status(200).json_body(json!({ "international": [] }));
		})
		.await;
	let executor = build_test_executor(&server.base_url());
	let value = executor.get("/data/allLeagues", &[]).await.expect("Tokenless request should succeed.");

	assert_eq!(value, json!({ "international": [] }));

	proxy.assert_calls_async(1).await;
	endpoint.assert_calls_async(1).await;
	assert!(executor.cached_token().await.is_none());
	assert_eq!(executor.metrics().token_failures(), 1);
}

#[tokio::test]
async fn proxy_failure_is_retried_on_the_next_call() {
	let server = MockServer::start_async().await;
	let proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(500).body("proxy down");
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/teams").header_missing("x-mas");
			then.status(200).json_body(json!({ "details": { "id": 8650 } }));
		})
		.await;
	let executor = build_test_executor(&server.base_url());

	executor.get("/data/teams", &[("id", "8650")]).await.expect("First request should succeed.");
	executor.get("/data/teams", &[("id", "8650")]).await.expect("Second request should succeed.");

	proxy.assert_calls_async(2).await;
	endpoint.assert_calls_async(2).await;
	assert_eq!(executor.metrics().fallbacks(), 0);
}

#[tokio::test]
async fn rejected_token_falls_back_once_without_header() {
	let server = MockServer::start_async().await;
	let _proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({ "x-mas": "stale" }));
		})
		.await;
	let authenticated = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/x").header("x-mas", "stale");
			then.status(401);
		})
		.await;
	let anonymous = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/x").header_missing("x-mas");
			then.status(200).json_body(json!({ "ok": true }));
		})
		.await;
	let executor = build_test_executor(&server.base_url());
	let value = executor.get("/data/x", &[]).await.expect("Fallback should succeed.");

	assert_eq!(value, json!({ "ok": true }));

	authenticated.assert_calls_async(1).await;
	anonymous.assert_calls_async(1).await;
	assert_eq!(executor.metrics().fallbacks(), 1);
	assert!(executor.cached_token().await.is_some());
}

#[tokio::test]
async fn both_attempts_failing_surfaces_request_error() {
	let server = MockServer::start_async().await;
	let _proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({ "x-mas": "abc123" }));
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/matchOdds");
			then.status(503);
		})
		.await;
	let executor = build_test_executor(&server.base_url());
	let err = executor
		.get("/data/matchOdds", &[("matchId", "1")])
		.await
		.expect_err("Both attempts should fail.");

	endpoint.assert_calls_async(2).await;

	match &err {
		Error::Request { url, fallback_attempted, .. } => {
			assert!(url.contains("/api/data/matchOdds"));
			assert!(*fallback_attempted);
		},
		other => panic!("Unexpected error: {other:?}."),
	}

	assert_eq!(err.status(), Some(503));
	assert!(err.to_string().contains("/api/data/matchOdds"));
	assert_eq!(executor.metrics().failures(), 1);
}

#[tokio::test]
async fn tokenless_failure_is_not_retried() {
	let server = MockServer::start_async().await;
	let _proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({ "x-mas": "" }));
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/tvlistings");
			then.status(500);
		})
		.await;
	let executor = build_test_executor(&server.base_url());
	let err = executor.get("/data/tvlistings", &[]).await.expect_err("Request should fail.");

	endpoint.assert_calls_async(1).await;
	assert!(matches!(err, Error::Request { fallback_attempted: false, .. }));
	assert_eq!(executor.metrics().fallbacks(), 0);
}

#[tokio::test]
async fn undecodable_success_does_not_fall_back() {
	let server = MockServer::start_async().await;
	let _proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({ "x-mas": "abc123" }));
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/leagues");
			then.status(200).body("<html>maintenance</html>");
		})
		.await;
	let executor = build_test_executor(&server.base_url());
	let err = executor.get("/data/leagues", &[("id", "47")]).await.expect_err("HTML should not decode.");

	endpoint.assert_calls_async(1).await;
	assert!(matches!(err, Error::Decode(_)));
	assert_eq!(executor.metrics().fallbacks(), 0);
}

#[tokio::test]
async fn absolute_targets_bypass_the_base_url() {
	let server = MockServer::start_async().await;
	let _proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({ "x-mas": "abc123" }));
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/elsewhere/feed").query_param("page", "2").header("x-mas", "abc123");
			then.status(200).json_body(json!([1, 2]));
		})
		.await;
	let executor = build_test_executor(&server.base_url());
	let value = executor
		.get(&server.url("/elsewhere/feed"), &[("page", "2")])
		.await
		.expect("Absolute target should succeed.");

	assert_eq!(value, json!([1, 2]));

	endpoint.assert_calls_async(1).await;
}

#[tokio::test]
async fn unreachable_provider_reports_network_failure() {
	let server = MockServer::start_async().await;
	let _proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({ "x-mas": "abc123" }));
		})
		.await;
	let config = test_config_builder(&server.base_url())
		.base_url(Url::parse("http://127.0.0.1:9/api").expect("Closed port URL should parse."))
		.build()
		.expect("Configuration should build.");
	let executor = Executor::new(config);
	let err = executor.get("/data/x", &[]).await.expect_err("Closed port should fail.");

	assert!(matches!(err, Error::Request { fallback_attempted: true, .. }));
	assert_eq!(err.status(), None);
}

#[tokio::test]
async fn queued_callers_share_a_failed_token_fetch() {
	let server = MockServer::start_async().await;
	let proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(500).delay(StdDuration::from_millis(300));
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/matches").header_missing("x-mas");
			then.status(200).json_body(json!({ "leagues": [] }));
		})
		.await;
	let executor = build_test_executor(&server.base_url());
	let (a, b, c, d) = tokio::join!(
		executor.get("/data/matches", &[]),
		executor.get("/data/matches", &[]),
		executor.get("/data/matches", &[]),
		executor.get("/data/matches", &[]),
	);

	for result in [a, b, c, d] {
		result.expect("Queued request should proceed without a token.");
	}

	proxy.assert_calls_async(1).await;
	endpoint.assert_calls_async(4).await;
	assert_eq!(executor.metrics().token_fetches(), 1);

	executor.get("/data/matches", &[]).await.expect("Later request should succeed.");

	proxy.assert_calls_async(2).await;
}

#[tokio::test]
async fn unreachable_proxy_degrades_to_unauthenticated() {
	let server = MockServer::start_async().await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/allLeagues").header_missing("x-mas");
			then.status(200).json_body(json!({ "popular": [] }));
		})
		.await;
	let config = test_config_builder(&server.base_url())
		.proxy_url(Url::parse("http://127.0.0.1:9/proxy").expect("Closed port URL should parse."))
		.build()
		.expect("Configuration should build.");
	let executor = Executor::new(config);
	let value = executor
		.get("/data/allLeagues", &[])
		.await
		.expect("Request should succeed without a token.");

	assert_eq!(value, json!({ "popular": [] }));

	endpoint.assert_calls_async(1).await;
	assert_eq!(executor.metrics().token_failures(), 1);
	assert!(executor.cached_token().await.is_none());
}

#[tokio::test]
async fn slow_provider_hits_the_request_timeout() {
	let server = MockServer::start_async().await;
	let _proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({}));
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/match");
			then.status(200).delay(StdDuration::from_millis(1_500)).json_body(json!({}));
		})
		.await;
	let config = test_config_builder(&server.base_url())
		.timeout(StdDuration::from_millis(200))
		.build()
		.expect("Configuration should build.");
	let executor = Executor::new(config);
	let err = executor.get("/data/match", &[("id", "1")]).await.expect_err("Request should time out.");

	endpoint.assert_calls_async(1).await;

	match &err {
		Error::Request { source: TransportError::Network { .. }, fallback_attempted, .. } => {
			assert!(!*fallback_attempted);
		},
		other => panic!("Unexpected error: {other:?}."),
	}

	assert_eq!(err.status(), None);
}

#[tokio::test]
async fn array_proxy_body_yields_no_token() {
	let server = MockServer::start_async().await;
	let _proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!(["abc123"]));
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/x").header_missing("x-mas");
			then.status(200).json_body(json!({ "ok": true }));
		})
		.await;
	let executor = build_test_executor(&server.base_url());

	executor.get("/data/x", &[]).await.expect("Request should proceed without a token.");

	endpoint.assert_calls_async(1).await;
	assert!(executor.cached_token().await.is_none());
}

#[tokio::test]
async fn trailing_garbage_after_json_is_a_decode_error() {
	let server = MockServer::start_async().await;
	let _proxy = server
		.mock_async(|when, then| {
			when.method(GET).path("/proxy");
			then.status(200).json_body(json!({ "x-mas": "abc123" }));
		})
		.await;
	let endpoint = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/data/x");
			then.status(200).body("{\"id\":1} <html>garbage");
		})
		.await;
	let executor = build_test_executor(&server.base_url());
	let err = executor.get("/data/x", &[]).await.expect_err("Trailing bytes should not decode.");

	endpoint.assert_calls_async(1).await;
	assert!(matches!(err, Error::Decode(_)));
}
