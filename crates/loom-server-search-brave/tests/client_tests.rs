// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use loom_server_search_brave::{
	BraveClient, BraveConfig, BraveError, Endpoint, LocalPoisParams, ParamMap, RequestHeaders,
	WebSearchParams,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "abc123SECRET";

fn client_for(server: &MockServer) -> BraveClient {
	let config = BraveConfig::new(API_KEY)
		.with_base_url(&server.uri())
		.unwrap()
		.with_product("loom-brave-test", "1.2.3");
	BraveClient::new(config).unwrap()
}

async fn received_pairs(server: &MockServer) -> Vec<(String, String)> {
	let requests = server.received_requests().await.unwrap();
	assert_eq!(requests.len(), 1);
	requests[0]
		.url
		.query_pairs()
		.map(|(k, v)| (k.into_owned(), v.into_owned()))
		.collect()
}

#[tokio::test]
async fn web_search_returns_body_unmodified() {
	let server = MockServer::start().await;
	let body = json!({
		"type": "search",
		"web": { "results": [{ "title": "Rust", "url": "https://www.rust-lang.org" }] }
	});

	Mock::given(method("GET"))
		.and(path("/res/v1/web/search"))
		.and(query_param("q", "rust lang"))
		.and(query_param("count", "5"))
		.and(header("x-subscription-token", API_KEY))
		.and(header("accept", "application/json"))
		.and(header("accept-encoding", "gzip"))
		.and(header("user-agent", "loom-brave-test/1.2.3"))
		.and(header("dnt", "1"))
		.respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
		.expect(1)
		.mount(&server)
		.await;

	let params = WebSearchParams {
		count: Some(5),
		..WebSearchParams::new("rust lang")
	};
	let result = client_for(&server).web_search(&params).await.unwrap();

	assert_eq!(result, body);
}

#[tokio::test]
async fn api_key_travels_under_configured_header() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/res/v1/web/search"))
		.and(header("x-api-key", API_KEY))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
		.expect(1)
		.mount(&server)
		.await;

	let config = BraveConfig::new(API_KEY)
		.with_base_url(&server.uri())
		.unwrap()
		.with_api_key_header("X-API-Key")
		.unwrap();
	let client = BraveClient::new(config).unwrap();
	client
		.web_search(&WebSearchParams::new("rust"))
		.await
		.unwrap();

	let requests = server.received_requests().await.unwrap();
	assert!(requests[0].headers.get("x-subscription-token").is_none());
}

#[tokio::test]
async fn every_endpoint_hits_its_path() {
	for endpoint in Endpoint::ALL {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path(endpoint.path()))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": endpoint.as_str() })))
			.expect(1)
			.mount(&server)
			.await;

		let result = client_for(&server)
			.issue(endpoint, &ParamMap::new(), None)
			.await
			.unwrap();
		assert_eq!(result["ok"], endpoint.as_str());
	}
}

#[tokio::test]
async fn local_pois_sends_each_id_separately() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/res/v1/local/pois"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
		.mount(&server)
		.await;

	let params = LocalPoisParams::new(["a", "b", "c"]);
	client_for(&server).local_pois(&params, None).await.unwrap();

	let ids: Vec<String> = received_pairs(&server)
		.await
		.into_iter()
		.filter(|(k, _)| k == "ids")
		.map(|(_, v)| v)
		.collect();
	assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn summary_forces_result_filter_on_the_wire() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/res/v1/web/search"))
		.and(query_param("result_filter", "summarizer"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summarizer": { "key": "k" } })))
		.expect(1)
		.mount(&server)
		.await;

	let params = WebSearchParams {
		summary: Some(true),
		result_filter: Some(vec!["web".to_string(), "news".to_string()]),
		..WebSearchParams::new("rust")
	};
	client_for(&server).web_search(&params).await.unwrap();

	let filters: Vec<_> = received_pairs(&server)
		.await
		.into_iter()
		.filter(|(k, _)| k == "result_filter")
		.collect();
	assert_eq!(filters.len(), 1);
}

#[tokio::test]
async fn invalid_goggles_never_reach_the_api() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
		.mount(&server)
		.await;

	let params = ParamMap::new().with("query", "rust").with(
		"goggles",
		vec!["https://ok.example/g", "http://bad.example/g", "not a url"],
	);
	client_for(&server)
		.issue(Endpoint::Web, &params, None)
		.await
		.unwrap();

	let goggles: Vec<String> = received_pairs(&server)
		.await
		.into_iter()
		.filter(|(k, _)| k == "goggles")
		.map(|(_, v)| v)
		.collect();
	assert_eq!(goggles, vec!["https://ok.example/g"]);
}

#[tokio::test]
async fn per_call_headers_override_defaults() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(header("accept", "application/x-brave-test"))
		.and(header("x-loc-city", "Lisbon"))
		.and(header("x-subscription-token", API_KEY))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
		.expect(1)
		.mount(&server)
		.await;

	let overrides = RequestHeaders::new()
		.with("Accept", "application/x-brave-test")
		.unwrap()
		.with("X-Loc-City", "Lisbon")
		.unwrap();
	client_for(&server)
		.issue(Endpoint::LocalDescriptions, &ParamMap::new().with("ids", "x"), Some(&overrides))
		.await
		.unwrap();
}

#[tokio::test]
async fn error_json_body_is_pretty_printed_and_key_redacted() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(
			ResponseTemplate::new(401).set_body_json(json!({ "message": "bad key abc123SECRET" })),
		)
		.mount(&server)
		.await;

	let err = client_for(&server)
		.issue(Endpoint::Web, &ParamMap::new().with("query", "rust"), None)
		.await
		.unwrap_err();

	assert_eq!(err.status(), Some(401));
	let BraveError::RequestFailure { message, .. } = &err else {
		panic!("expected RequestFailure, got {err:?}");
	};
	assert!(message.starts_with("401 Unauthorized\n"), "message: {message}");
	assert!(message.contains("\"message\": \"bad key [REDACTED-API-KEY]\""));
	assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn error_text_body_falls_back_to_raw_text() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.issue(Endpoint::News, &ParamMap::new().with("query", "rust"), None)
		.await
		.unwrap_err();

	assert_eq!(
		err.to_string(),
		"Request failed: 503 Service Unavailable\nupstream unavailable"
	);
}

#[tokio::test]
async fn error_body_urls_have_search_terms_redacted() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(422).set_body_json(json!({
			"error": "invalid request https://api.search.brave.com/res/v1/web/search?q=secret+plans&count=5"
		})))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.issue(Endpoint::Web, &ParamMap::new().with("query", "secret plans"), None)
		.await
		.unwrap_err();

	let message = err.to_string();
	assert!(message.contains("https://api.search.brave.com/res/v1/web/search?q=[REDACTED]&count=5"));
	assert!(!message.contains("secret"));
}

#[tokio::test]
async fn non_json_success_body_is_invalid_response() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.issue(Endpoint::Images, &ParamMap::new().with("query", "cats"), None)
		.await
		.unwrap_err();

	assert!(matches!(err, BraveError::InvalidResponse(_)));
}

#[tokio::test]
async fn transport_failures_are_sanitized() {
	let config = BraveConfig::new(API_KEY)
		.with_base_url("http://127.0.0.1:1")
		.unwrap();
	let client = BraveClient::new(config).unwrap();

	let err = client
		.issue(Endpoint::Web, &ParamMap::new().with("query", "topsecretterm"), None)
		.await
		.unwrap_err();

	assert!(matches!(err, BraveError::Transport { .. }), "got {err:?}");
	assert!(!err.to_string().contains("topsecretterm"));
	assert!(!err.to_string().contains(API_KEY));
	assert!(!format!("{err:?}").contains("topsecretterm"));
}

#[tokio::test]
async fn unknown_endpoint_name_fails_before_any_request() {
	let server = MockServer::start().await;
	let err = client_for(&server)
		.issue_named("maps", &ParamMap::new(), None)
		.await
		.unwrap_err();

	assert!(matches!(err, BraveError::UnknownEndpoint(ref name) if name == "maps"));
	assert!(server.received_requests().await.unwrap().is_empty());
}
