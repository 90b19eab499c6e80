// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Brave Search API client.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when interacting with the Brave Search API.
///
/// Every message carried by these variants has already been sanitized:
/// the API key and `q` search terms never appear in them.
#[derive(Debug, Error)]
pub enum BraveError {
	/// The endpoint identifier is not one of the known endpoints.
	#[error("Unknown endpoint: {0}")]
	UnknownEndpoint(String),

	/// Network-level error during HTTP communication.
	#[error("Network error: {message}")]
	Transport {
		message: String,
		#[source]
		source: reqwest::Error,
	},

	/// The API answered with a non-2xx status.
	#[error("Request failed: {message}")]
	RequestFailure { status: u16, message: String },

	/// A 2xx response whose body is not valid JSON.
	#[error("Invalid response from Brave: {0}")]
	InvalidResponse(String),

	/// Parameters could not be turned into a [`crate::ParamMap`].
	#[error("Invalid parameters: {0}")]
	InvalidParams(String),

	/// A header name or value could not be encoded.
	#[error("Invalid header: {0}")]
	InvalidHeader(String),

	#[error(transparent)]
	Config(#[from] ConfigError),
}

impl BraveError {
	/// Returns the HTTP status code associated with the error, if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			BraveError::RequestFailure { status, .. } => Some(*status),
			BraveError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
			_ => None,
		}
	}
}

/// Errors raised while assembling a [`crate::BraveConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("required secret not found: set either {var} or {file_var}")]
	MissingApiKey { var: String, file_var: String },

	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },

	#[error("invalid base URL {url}: {source}")]
	InvalidBaseUrl {
		url: String,
		#[source]
		source: url::ParseError,
	},

	#[error("invalid credential header name: {0}")]
	InvalidHeaderName(String),

	#[error("failed to build HTTP client: {0}")]
	HttpClient(String),
}
