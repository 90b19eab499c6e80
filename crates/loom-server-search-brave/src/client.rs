// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Brave Search API client implementation.

use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, error, instrument, trace};

use crate::config::BraveConfig;
use crate::endpoint::Endpoint;
use crate::error::{BraveError, ConfigError};
use crate::headers::{default_headers, merge_headers, RequestHeaders};
use crate::params::ParamMap;
use crate::query::build_query;
use crate::sanitize::sanitize_message;
use crate::types::{
	EndpointParams, ImageSearchParams, LocalDescriptionsParams, LocalPoisParams, NewsSearchParams,
	SummarizerParams, VideoSearchParams, WebSearchParams,
};

/// A fully built request that has not been sent yet.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
	pub endpoint: Endpoint,
	pub url: String,
	pub headers: HeaderMap,
}

/// Client for the Brave Search API.
///
/// Each call builds its own URL and header set; the client holds no
/// per-request state and can be shared freely.
#[derive(Debug, Clone)]
pub struct BraveClient {
	http_client: Client,
	config: BraveConfig,
	default_headers: HeaderMap,
}

impl BraveClient {
	pub fn new(config: BraveConfig) -> Result<Self, BraveError> {
		let mut builder =
			loom_common_http::builder_for(&config.product_name, &config.product_version);
		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}
		let http_client = builder
			.build()
			.map_err(|e| ConfigError::HttpClient(e.without_url().to_string()))?;

		let default_headers = default_headers(&config)?;

		Ok(Self {
			http_client,
			config,
			default_headers,
		})
	}

	pub fn config(&self) -> &BraveConfig {
		&self.config
	}

	/// Builds the URL and merged headers for a request without sending it.
	pub fn build_request(
		&self,
		endpoint: Endpoint,
		params: &ParamMap,
		extra_headers: Option<&RequestHeaders>,
	) -> PreparedRequest {
		let query = build_query(endpoint, params);
		trace!(params = params.len(), pairs = query.len(), "Built query string");

		let url = format!("{}?{}", self.config.endpoint_url(endpoint), query.encode());
		let headers = merge_headers(&self.default_headers, extra_headers);

		PreparedRequest {
			endpoint,
			url,
			headers,
		}
	}

	/// Issues a GET against `endpoint` and returns the JSON body unmodified.
	#[instrument(skip_all, fields(endpoint = %endpoint))]
	pub async fn issue(
		&self,
		endpoint: Endpoint,
		params: &ParamMap,
		extra_headers: Option<&RequestHeaders>,
	) -> Result<Value, BraveError> {
		let request = self.build_request(endpoint, params, extra_headers);
		debug!(path = endpoint.path(), "Sending request to Brave");

		let response = self
			.http_client
			.get(&request.url)
			.headers(request.headers)
			.send()
			.await
			.map_err(|e| self.transport_error(e))?;

		let status = response.status();
		debug!(status = %status, "Received response from Brave");

		if !status.is_success() {
			return Err(self.request_failure(status, response).await);
		}

		let body = response.text().await.map_err(|e| self.transport_error(e))?;

		serde_json::from_str(&body).map_err(|e| {
			let message = self.sanitize(&format!("JSON parse error: {e}"));
			error!(error = %message, "Failed to parse Brave response");
			BraveError::InvalidResponse(message)
		})
	}

	/// Like [`BraveClient::issue`], with the endpoint given by its identifier.
	pub async fn issue_named(
		&self,
		endpoint: &str,
		params: &ParamMap,
		extra_headers: Option<&RequestHeaders>,
	) -> Result<Value, BraveError> {
		let endpoint = endpoint.parse::<Endpoint>()?;
		self.issue(endpoint, params, extra_headers).await
	}

	/// Issues a request for typed parameters, routed by their endpoint.
	pub async fn search<P: EndpointParams>(
		&self,
		params: &P,
		extra_headers: Option<&RequestHeaders>,
	) -> Result<Value, BraveError> {
		let params = params.to_param_map()?;
		self.issue(P::ENDPOINT, &params, extra_headers).await
	}

	pub async fn web_search(&self, params: &WebSearchParams) -> Result<Value, BraveError> {
		self.search(params, None).await
	}

	pub async fn image_search(&self, params: &ImageSearchParams) -> Result<Value, BraveError> {
		self.search(params, None).await
	}

	pub async fn video_search(&self, params: &VideoSearchParams) -> Result<Value, BraveError> {
		self.search(params, None).await
	}

	pub async fn news_search(&self, params: &NewsSearchParams) -> Result<Value, BraveError> {
		self.search(params, None).await
	}

	pub async fn local_pois(
		&self,
		params: &LocalPoisParams,
		extra_headers: Option<&RequestHeaders>,
	) -> Result<Value, BraveError> {
		self.search(params, extra_headers).await
	}

	pub async fn local_descriptions(
		&self,
		params: &LocalDescriptionsParams,
	) -> Result<Value, BraveError> {
		self.search(params, None).await
	}

	pub async fn summarize(&self, params: &SummarizerParams) -> Result<Value, BraveError> {
		self.search(params, None).await
	}

	/// Scrubs the API key and search terms from `message`.
	pub fn sanitize(&self, message: &str) -> String {
		sanitize_message(message, self.config.api_key.expose())
	}

	fn transport_error(&self, e: reqwest::Error) -> BraveError {
		let message = self.sanitize(&e.to_string());
		if e.is_timeout() {
			error!(error = %message, "Request timed out");
		} else {
			error!(error = %message, "Network error during Brave request");
		}
		BraveError::Transport {
			message,
			source: e.without_url(),
		}
	}

	/// An unreadable error body becomes an empty dump.
	fn error_body(&self, body: reqwest::Result<String>) -> String {
		match body {
			Ok(body) => body,
			Err(e) => {
				debug!(error = %self.sanitize(&e.without_url().to_string()), "Failed to read error response body");
				String::new()
			}
		}
	}

		async fn request_failure(&self, status: StatusCode, response: Response) -> BraveError {
		let mut message = match status.canonical_reason() {
			Some(reason) => format!("{} {reason}", status.as_u16()),
			None => status.as_u16().to_string(),
		};

		let body = self.error_body(response.text().await);
		let dump = match serde_json::from_str::<Value>(&body) {
			Ok(json) => serde_json::to_string_pretty(&json).unwrap_or(body),
			Err(_) => body,
		};
		message.push('\n');
		message.push_str(&dump);

		let message = self.sanitize(&message);
		error!(status = status.as_u16(), error = %message, "Brave API error");

		BraveError::RequestFailure {
			status: status.as_u16(),
			message,
		}
	}
}
