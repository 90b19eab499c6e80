// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Default and per-call request headers.

use reqwest::header::{
	HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, CACHE_CONTROL, DNT, USER_AGENT,
};

use crate::config::BraveConfig;
use crate::error::BraveError;

/// Default header carrying the API key; see [`BraveConfig::with_api_key_header`].
pub const API_KEY_HEADER: &str = "x-subscription-token";
pub const API_VERSION_HEADER: &str = "api-version";

/// Builds the headers sent with every request.
pub fn default_headers(config: &BraveConfig) -> Result<HeaderMap, BraveError> {
	let mut headers = HeaderMap::new();

	let key_header = config.api_key_header();
	let mut key = HeaderValue::from_str(config.api_key.expose())
		.map_err(|_| BraveError::InvalidHeader(format!("{key_header}: value is not a valid header")))?;
	key.set_sensitive(true);
	headers.insert(key_header.clone(), key);

	headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
	headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
	headers.insert(USER_AGENT, header_value("user-agent", &config.product_identifier())?);
	headers.insert(DNT, HeaderValue::from_static("1"));

	Ok(headers)
}

/// Returns `defaults` with every header named in `overrides` replaced.
pub fn merge_headers(defaults: &HeaderMap, overrides: Option<&RequestHeaders>) -> HeaderMap {
	let mut merged = defaults.clone();
	if let Some(overrides) = overrides {
		merged.extend(overrides.as_header_map().clone());
	}
	merged
}

/// Approximate location of the user, used by the local and web endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
	pub lat: Option<f64>,
	pub long: Option<f64>,
	pub timezone: Option<String>,
	pub city: Option<String>,
	pub state: Option<String>,
	pub state_name: Option<String>,
	pub country: Option<String>,
	pub postal_code: Option<String>,
}

/// Per-call header overrides.
#[derive(Debug, Clone, Default)]
pub struct RequestHeaders {
	headers: HeaderMap,
}

impl RequestHeaders {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `name` to `value`, replacing any earlier value.
	pub fn insert(&mut self, name: &str, value: &str) -> Result<&mut Self, BraveError> {
		let header_name = HeaderName::from_bytes(name.as_bytes())
			.map_err(|_| BraveError::InvalidHeader(format!("{name}: not a valid header name")))?;
		self.headers.insert(header_name, header_value(name, value)?);
		Ok(self)
	}

	pub fn with(mut self, name: &str, value: &str) -> Result<Self, BraveError> {
		self.insert(name, value)?;
		Ok(self)
	}

	pub fn with_location(mut self, location: &Location) -> Result<Self, BraveError> {
		let numeric = [("x-loc-lat", location.lat), ("x-loc-long", location.long)];
		for (name, value) in numeric {
			if let Some(value) = value {
				self.insert(name, &value.to_string())?;
			}
		}

		let textual = [
			("x-loc-timezone", &location.timezone),
			("x-loc-city", &location.city),
			("x-loc-state", &location.state),
			("x-loc-state-name", &location.state_name),
			("x-loc-country", &location.country),
			("x-loc-postal-code", &location.postal_code),
		];
		for (name, value) in textual {
			if let Some(value) = value {
				self.insert(name, value)?;
			}
		}

		Ok(self)
	}

	pub fn with_api_version(self, version: &str) -> Result<Self, BraveError> {
		self.with(API_VERSION_HEADER, version)
	}

	pub fn with_cache_control(self, directive: &str) -> Result<Self, BraveError> {
		self.with(CACHE_CONTROL.as_str(), directive)
	}

	pub fn with_user_agent(self, user_agent: &str) -> Result<Self, BraveError> {
		self.with(USER_AGENT.as_str(), user_agent)
	}

	pub fn is_empty(&self) -> bool {
		self.headers.is_empty()
	}

	pub fn as_header_map(&self) -> &HeaderMap {
		&self.headers
	}
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, BraveError> {
	HeaderValue::from_str(value)
		.map_err(|_| BraveError::InvalidHeader(format!("{name}: value is not a valid header")))
}
