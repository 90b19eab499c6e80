// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Typed request parameters, one struct per endpoint.

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::error::BraveError;
use crate::params::ParamMap;

/// Parameters bound to a specific endpoint.
pub trait EndpointParams: Serialize {
	const ENDPOINT: Endpoint;

	/// Lowers the typed parameters into an untyped [`ParamMap`].
	fn to_param_map(&self) -> Result<ParamMap, BraveError> {
		let value =
			serde_json::to_value(self).map_err(|e| BraveError::InvalidParams(e.to_string()))?;
		ParamMap::try_from(value)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
	Off,
	Moderate,
	Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
	Metric,
	Imperial,
}

/// Parameters for [`Endpoint::Web`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebSearchParams {
	pub query: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search_lang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ui_lang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub count: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub offset: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub safesearch: Option<SafeSearch>,
	/// `pd`, `pw`, `pm`, `py`, or `YYYY-MM-DDtoYYYY-MM-DD`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub freshness: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub text_decorations: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub spellcheck: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result_filter: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub goggles: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub units: Option<Units>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extra_snippets: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub summary: Option<bool>,
}

impl WebSearchParams {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Default::default()
		}
	}
}

impl EndpointParams for WebSearchParams {
	const ENDPOINT: Endpoint = Endpoint::Web;
}

/// Parameters for [`Endpoint::Images`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSearchParams {
	pub query: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search_lang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub count: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub safesearch: Option<SafeSearch>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub spellcheck: Option<bool>,
}

impl ImageSearchParams {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Default::default()
		}
	}
}

impl EndpointParams for ImageSearchParams {
	const ENDPOINT: Endpoint = Endpoint::Images;
}

/// Parameters for [`Endpoint::Videos`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoSearchParams {
	pub query: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search_lang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ui_lang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub count: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub offset: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub spellcheck: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub safesearch: Option<SafeSearch>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub freshness: Option<String>,
}

impl VideoSearchParams {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Default::default()
		}
	}
}

impl EndpointParams for VideoSearchParams {
	const ENDPOINT: Endpoint = Endpoint::Videos;
}

/// Parameters for [`Endpoint::News`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsSearchParams {
	pub query: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search_lang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ui_lang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub count: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub offset: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub spellcheck: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub safesearch: Option<SafeSearch>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub freshness: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extra_snippets: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub goggles: Option<Vec<String>>,
}

impl NewsSearchParams {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Default::default()
		}
	}
}

impl EndpointParams for NewsSearchParams {
	const ENDPOINT: Endpoint = Endpoint::News;
}

/// Parameters for [`Endpoint::LocalPois`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalPoisParams {
	/// Location ids taken from a web search's `locations` results.
	pub ids: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search_lang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ui_lang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub units: Option<Units>,
}

impl LocalPoisParams {
	pub fn new<I, S>(ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			ids: ids.into_iter().map(Into::into).collect(),
			..Default::default()
		}
	}
}

impl EndpointParams for LocalPoisParams {
	const ENDPOINT: Endpoint = Endpoint::LocalPois;
}

/// Parameters for [`Endpoint::LocalDescriptions`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalDescriptionsParams {
	pub ids: Vec<String>,
}

impl LocalDescriptionsParams {
	pub fn new<I, S>(ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			ids: ids.into_iter().map(Into::into).collect(),
		}
	}
}

impl EndpointParams for LocalDescriptionsParams {
	const ENDPOINT: Endpoint = Endpoint::LocalDescriptions;
}

/// Parameters for [`Endpoint::Summarizer`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizerParams {
	/// The `summarizer.key` returned by a web search with `summary=true`.
	pub key: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub entity_info: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub inline_references: Option<bool>,
}

impl SummarizerParams {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			..Default::default()
		}
	}
}

impl EndpointParams for SummarizerParams {
	const ENDPOINT: Endpoint = Endpoint::Summarizer;
}
