// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

mod args;

use anyhow::Context;
use clap::Parser;
use loom_server_search_brave::{BraveClient, BraveConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::{parse_headers, parse_params, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// stdout carries the JSON response, so logs go to stderr
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();

	let config = match &args.api_key {
		Some(key) if !key.is_empty() => BraveConfig::new(key.as_str()),
		_ => BraveConfig::from_env().context("no Brave API key configured")?,
	};
	let config = match &args.base_url {
		Some(url) if !url.is_empty() => config.with_base_url(url)?,
		_ => config,
	};
	let config = match &args.api_key_header {
		Some(name) if !name.is_empty() => config.with_api_key_header(name)?,
		_ => config,
	};

	let params = parse_params(&args.params)?;
	let headers = parse_headers(&args.headers)?;
	let client = BraveClient::new(config)?;

	info!(endpoint = %args.endpoint, params = params.len(), "Issuing Brave request");
	let body = client.issue(args.endpoint, &params, headers.as_ref()).await?;

	let rendered = if args.compact {
		serde_json::to_string(&body)?
	} else {
		serde_json::to_string_pretty(&body)?
	};
	println!("{rendered}");

	Ok(())
}
