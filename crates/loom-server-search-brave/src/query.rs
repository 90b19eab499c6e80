// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query string construction.
//!
//! Each parameter is offered to [`RULES`] in order. The first rule that
//! claims the parameter encodes it; parameters no rule claims are written
//! as a single `key=value` pair using the value's string form.

use url::form_urlencoded;
use url::Url;

use crate::endpoint::Endpoint;
use crate::params::{ParamMap, ParamValue};

/// Value `result_filter` is forced to when a summary is requested.
pub const SUMMARIZER_FILTER: &str = "summarizer";

/// Ordered query pairs with `URLSearchParams`-style `set`/`append`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
	pairs: Vec<(String, String)>,
}

impl QueryString {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the first pair named `key` and drops any later ones, or
	/// appends a new pair when `key` is not present yet.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		match self.pairs.iter().position(|(k, _)| *k == key) {
			Some(first) => {
				self.pairs[first].1 = value;
				let mut idx = 0;
				self.pairs.retain(|(k, _)| {
					let keep = idx <= first || *k != key;
					idx += 1;
					keep
				});
			}
			None => self.pairs.push((key, value)),
		}
	}

	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((key.into(), value.into()));
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn get_all(&self, key: &str) -> Vec<&str> {
		self.pairs
			.iter()
			.filter(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
			.collect()
	}

	pub fn pairs(&self) -> &[(String, String)] {
		&self.pairs
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Encodes the pairs as `application/x-www-form-urlencoded`.
	pub fn encode(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.pairs.iter())
			.finish()
	}
}

/// Whether a rule consumed the parameter it was offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
	Handled,
	Pass,
}

/// A parameter-specific encoding, evaluated before the generic scalar path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingRule {
	/// `ids` on the local endpoints, one query pair per id.
	LocalIds,
	/// `result_filter`, overridden by `summary=true`.
	ResultFilter,
	/// `goggles`, with list entries filtered to HTTPS URLs.
	Goggles,
}

/// Rules in evaluation order.
pub const RULES: [EncodingRule; 3] = [
	EncodingRule::LocalIds,
	EncodingRule::ResultFilter,
	EncodingRule::Goggles,
];

impl EncodingRule {
	pub const fn key(self) -> &'static str {
		match self {
			EncodingRule::LocalIds => "ids",
			EncodingRule::ResultFilter => "result_filter",
			EncodingRule::Goggles => "goggles",
		}
	}

	pub fn apply(
		self,
		endpoint: Endpoint,
		params: &ParamMap,
		key: &str,
		value: &ParamValue,
		query: &mut QueryString,
	) -> RuleOutcome {
		if key != self.key() {
			return RuleOutcome::Pass;
		}

		match self {
			EncodingRule::LocalIds => {
				if !endpoint.uses_multi_ids() {
					return RuleOutcome::Pass;
				}
				match value {
					ParamValue::List(ids) => {
						for id in ids {
							query.append(key, id.to_string());
						}
					}
					scalar => query.set(key, scalar.to_string()),
				}
			}
			EncodingRule::ResultFilter => {
				if params.is_summary_requested() {
					query.set(key, SUMMARIZER_FILTER);
				} else if let Some(filters) = value.as_list().filter(|f| !f.is_empty()) {
					query.set(key, ParamValue::List(filters.to_vec()).to_string());
				}
			}
			EncodingRule::Goggles => match value {
				ParamValue::String(goggle) => query.set(key, goggle.as_str()),
				ParamValue::List(goggles) => {
					for goggle in goggles.iter().map(ParamValue::to_string) {
						if is_valid_goggle_url(&goggle) {
							query.append(key, goggle);
						} else {
							tracing::debug!("Dropping goggle that is not an HTTPS URL");
						}
					}
				}
				_ => {}
			},
		}

		RuleOutcome::Handled
	}
}

/// A goggle must be an absolute URL with the `https` scheme.
pub fn is_valid_goggle_url(candidate: &str) -> bool {
	Url::parse(candidate)
		.map(|url| url.scheme() == "https")
		.unwrap_or(false)
}

/// Maps a semantic parameter name to the name sent on the wire.
pub fn wire_key(key: &str) -> &str {
	match key {
		"query" => "q",
		other => other,
	}
}

/// Builds the query string for `endpoint` from `params`.
pub fn build_query(endpoint: Endpoint, params: &ParamMap) -> QueryString {
	let mut query = QueryString::new();

	'params: for (key, value) in params {
		for rule in RULES {
			if rule.apply(endpoint, params, key, value, &mut query) == RuleOutcome::Handled {
				continue 'params;
			}
		}
		query.set(wire_key(key), value.to_string());
	}

	query
}
