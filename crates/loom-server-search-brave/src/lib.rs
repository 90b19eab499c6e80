// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Brave Search API client for Loom.
//!
//! This crate provides a typed Rust client for the Brave Search API: web,
//! image, video, news, local POI, local description and summarizer
//! endpoints. It builds the query string (including the API's repeated
//! `ids`, `result_filter`/`summary` and `goggles` conventions), attaches
//! the default headers, performs the GET and returns the JSON body as-is.
//! Error messages never contain the API key or the user's search terms.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod headers;
pub mod params;
pub mod query;
pub mod sanitize;
pub mod secret;
pub mod types;

pub use client::{BraveClient, PreparedRequest};
pub use config::{load_secret_env, require_secret_env, BraveConfig};
pub use endpoint::Endpoint;
pub use error::{BraveError, ConfigError};
pub use headers::{Location, RequestHeaders};
pub use params::{ParamMap, ParamValue};
pub use query::{build_query, is_valid_goggle_url, QueryString};
pub use sanitize::sanitize_message;
pub use secret::ApiKey;
pub use types::{
	EndpointParams, ImageSearchParams, LocalDescriptionsParams, LocalPoisParams, NewsSearchParams,
	SafeSearch, SummarizerParams, Units, VideoSearchParams, WebSearchParams,
};
