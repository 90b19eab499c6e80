// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The closed set of Brave Search API endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BraveError;

/// A Brave Search API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Endpoint {
	Web,
	Images,
	Videos,
	News,
	LocalPois,
	LocalDescriptions,
	Summarizer,
}

impl Endpoint {
	pub const ALL: [Endpoint; 7] = [
		Endpoint::Web,
		Endpoint::Images,
		Endpoint::Videos,
		Endpoint::News,
		Endpoint::LocalPois,
		Endpoint::LocalDescriptions,
		Endpoint::Summarizer,
	];

	/// URL path of the endpoint, relative to the API origin.
	pub const fn path(self) -> &'static str {
		match self {
			Endpoint::Images => "/res/v1/images/search",
			Endpoint::LocalPois => "/res/v1/local/pois",
			Endpoint::LocalDescriptions => "/res/v1/local/descriptions",
			Endpoint::News => "/res/v1/news/search",
			Endpoint::Videos => "/res/v1/videos/search",
			Endpoint::Web => "/res/v1/web/search",
			Endpoint::Summarizer => "/res/v1/summarizer/search",
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Endpoint::Web => "web",
			Endpoint::Images => "images",
			Endpoint::Videos => "videos",
			Endpoint::News => "news",
			Endpoint::LocalPois => "localPois",
			Endpoint::LocalDescriptions => "localDescriptions",
			Endpoint::Summarizer => "summarizer",
		}
	}

	/// Whether `ids` is sent as a repeated query key on this endpoint.
	pub const fn uses_multi_ids(self) -> bool {
		matches!(self, Endpoint::LocalPois | Endpoint::LocalDescriptions)
	}
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Endpoint {
	type Err = BraveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"web" => Ok(Endpoint::Web),
			"images" => Ok(Endpoint::Images),
			"videos" => Ok(Endpoint::Videos),
			"news" => Ok(Endpoint::News),
			"localPois" | "local-pois" | "local_pois" => Ok(Endpoint::LocalPois),
			"localDescriptions" | "local-descriptions" | "local_descriptions" => {
				Ok(Endpoint::LocalDescriptions)
			}
			"summarizer" => Ok(Endpoint::Summarizer),
			other => Err(BraveError::UnknownEndpoint(other.to_string())),
		}
	}
}
