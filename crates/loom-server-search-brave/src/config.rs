// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client configuration.
//!
//! The API key and the product identification are process-wide settings in
//! most deployments. They live in a [`BraveConfig`] value handed to
//! [`crate::BraveClient::new`] rather than in globals.

use std::path::PathBuf;
use std::time::Duration;
use std::{env, fs};

use reqwest::header::HeaderName;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::ConfigError;
use crate::headers::API_KEY_HEADER;
use crate::secret::ApiKey;

pub const DEFAULT_BASE_URL: &str = "https://api.search.brave.com";
pub const API_KEY_ENV: &str = "BRAVE_API_KEY";
pub const BASE_URL_ENV: &str = "BRAVE_API_BASE_URL";
pub const API_KEY_HEADER_ENV: &str = "BRAVE_API_KEY_HEADER";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`crate::BraveClient`].
#[derive(Debug, Clone)]
pub struct BraveConfig {
	pub api_key: ApiKey,
	api_key_header: HeaderName,
	base_url: String,
	pub product_name: String,
	pub product_version: String,
	pub timeout: Option<Duration>,
}

impl BraveConfig {
	pub fn new(api_key: impl Into<ApiKey>) -> Self {
		Self {
			api_key: api_key.into(),
			api_key_header: HeaderName::from_static(API_KEY_HEADER),
			base_url: DEFAULT_BASE_URL.to_string(),
			product_name: env!("CARGO_PKG_NAME").to_string(),
			product_version: env!("CARGO_PKG_VERSION").to_string(),
			timeout: Some(DEFAULT_TIMEOUT),
		}
	}

	/// Points the client at a different API origin (useful for testing).
	pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
		let parsed = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
			url: base_url.to_string(),
			source,
		})?;
		self.base_url = parsed.as_str().trim_end_matches('/').to_string();
		Ok(self)
	}

	/// Sends the API key under `name` instead of [`API_KEY_HEADER`].
	pub fn with_api_key_header(mut self, name: &str) -> Result<Self, ConfigError> {
		self.api_key_header = HeaderName::from_bytes(name.as_bytes())
			.map_err(|_| ConfigError::InvalidHeaderName(name.to_string()))?;
		Ok(self)
	}

	/// Sets the product name and version sent in the `User-Agent` header.
	pub fn with_product(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
		self.product_name = name.into();
		self.product_version = version.into();
		self
	}

	/// Sets the per-request timeout; `None` disables it.
	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn api_key_header(&self) -> &HeaderName {
		&self.api_key_header
	}

	/// `{name}/{version}` as sent in the `User-Agent` header.
	pub fn product_identifier(&self) -> String {
		loom_common_http::product_identifier(&self.product_name, &self.product_version)
	}

	/// Absolute URL of `endpoint`, without a query string.
	pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
		format!("{}{}", self.base_url, endpoint.path())
	}

	/// Loads configuration from `BRAVE_API_KEY` (or `BRAVE_API_KEY_FILE`) and
	/// the optional `BRAVE_API_BASE_URL` and `BRAVE_API_KEY_HEADER`.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_env_vars(API_KEY_ENV, BASE_URL_ENV, API_KEY_HEADER_ENV)
	}

	pub(crate) fn from_env_vars(
		key_var: &str,
		base_url_var: &str,
		header_var: &str,
	) -> Result<Self, ConfigError> {
		let api_key = require_secret_env(key_var)?;
		let mut config = Self::new(api_key);

		if let Some(base_url) = non_empty_env(base_url_var) {
			config = config.with_base_url(&base_url)?;
		}
		if let Some(header) = non_empty_env(header_var) {
			config = config.with_api_key_header(&header)?;
		}
		Ok(config)
	}
}

fn non_empty_env(var: &str) -> Option<String> {
	env::var(var).ok().filter(|value| !value.is_empty())
}

/// Load a secret from the environment using the `VAR` / `VAR_FILE` convention.
///
/// `{var}_FILE` takes precedence over `{var}`. When reading from a file a
/// single trailing newline is stripped.
pub fn load_secret_env(var: &str) -> Result<Option<ApiKey>, ConfigError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(ConfigError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
			path: path.clone(),
			source,
		})?;

		let secret = content.strip_suffix('\n').unwrap_or(&content);
		return Ok(Some(ApiKey::new(secret)));
	}

	match env::var(var) {
		Ok(value) if !value.is_empty() => Ok(Some(ApiKey::new(value))),
		_ => Ok(None),
	}
}

/// Like [`load_secret_env`], but a missing secret is an error.
pub fn require_secret_env(var: &str) -> Result<ApiKey, ConfigError> {
	load_secret_env(var)?.ok_or_else(|| ConfigError::MissingApiKey {
		var: var.to_string(),
		file_var: format!("{var}_FILE"),
	})
}
