// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use clap::Parser;
use loom_server_search_brave::{Endpoint, ParamMap, ParamValue, RequestHeaders};

/// Query the Brave Search API and print the raw JSON response.
#[derive(Parser, Debug)]
#[command(name = "loom-brave", version)]
pub struct Args {
	/// Endpoint: web, images, videos, news, localPois, localDescriptions, summarizer
	pub endpoint: Endpoint,

	/// Parameters as KEY=VALUE; repeat a key to send a list
	#[arg(value_name = "KEY=VALUE")]
	pub params: Vec<String>,

	/// Extra request header as NAME=VALUE (overrides defaults)
	#[arg(long = "header", short = 'H', value_name = "NAME=VALUE")]
	pub headers: Vec<String>,

	/// API key (or set BRAVE_API_KEY / BRAVE_API_KEY_FILE)
	#[arg(long, env = "BRAVE_API_KEY", hide_env_values = true)]
	pub api_key: Option<String>,

	/// Header that carries the API key (default X-Subscription-Token)
	#[arg(long, env = "BRAVE_API_KEY_HEADER", value_name = "NAME")]
	pub api_key_header: Option<String>,

	/// API origin override
	#[arg(long, env = "BRAVE_API_BASE_URL")]
	pub base_url: Option<String>,

	/// Print compact JSON instead of pretty JSON
	#[arg(long)]
	pub compact: bool,
}

fn split_pair(raw: &str) -> anyhow::Result<(&str, &str)> {
	raw.split_once('=')
		.filter(|(key, _)| !key.is_empty())
		.ok_or_else(|| anyhow::anyhow!("expected KEY=VALUE, got `{raw}`"))
}

/// Interprets a command-line value: booleans and integers are typed, all
/// else is a string.
pub fn parse_value(raw: &str) -> ParamValue {
	match raw {
		"true" => ParamValue::Bool(true),
		"false" => ParamValue::Bool(false),
		_ => raw
			.parse::<i64>()
			.map(ParamValue::Integer)
			.unwrap_or_else(|_| ParamValue::String(raw.to_string())),
	}
}

/// Builds a [`ParamMap`]; a key given more than once becomes a list.
pub fn parse_params(raw: &[String]) -> anyhow::Result<ParamMap> {
	let mut params = ParamMap::new();
	for pair in raw {
		let (key, value) = split_pair(pair)?;
		let value = parse_value(value);
		let merged = match params.remove(key) {
			None => value,
			Some(ParamValue::List(mut items)) => {
				items.push(value);
				ParamValue::List(items)
			}
			Some(previous) => ParamValue::List(vec![previous, value]),
		};
		params.insert(key, merged);
	}
	Ok(params)
}

pub fn parse_headers(raw: &[String]) -> anyhow::Result<Option<RequestHeaders>> {
	if raw.is_empty() {
		return Ok(None);
	}
	let mut headers = RequestHeaders::new();
	for pair in raw {
		let (name, value) = split_pair(pair)?;
		headers.insert(name.trim(), value.trim())?;
	}
	Ok(Some(headers))
}
