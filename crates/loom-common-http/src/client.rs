// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent product identification.

use reqwest::{Client, ClientBuilder};

/// Formats a product identification string.
///
/// Format: `{name}/{version}`
/// Example: `loom-server-search-brave/0.1.0`
pub fn product_identifier(name: &str, version: &str) -> String {
	let name = name.trim();
	let version = version.trim();
	if version.is_empty() {
		return name.to_string();
	}
	format!("{name}/{version}")
}

/// Creates a new HTTP client builder identifying as the given product, with
/// gzip response decoding enabled.
///
/// # Example
/// ```ignore
/// let client = loom_common_http::builder_for("loom-server-search-brave", "0.1.0")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder_for(name: &str, version: &str) -> ClientBuilder {
	let ua = product_identifier(name, version);
	tracing::debug!(user_agent = %ua, "Creating HTTP client builder");
	Client::builder().user_agent(ua).gzip(true)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn product_identifier_without_version_is_bare_name() {
		assert_eq!(product_identifier("brave-client", ""), "brave-client");
	}

	#[test]
	fn product_identifier_trims_whitespace() {
		assert_eq!(product_identifier(" loom ", " 1.0.0\n"), "loom/1.0.0");
	}

	#[test]
	fn builder_for_custom_product_builds() {
		let client = builder_for("my-product", "1.2.3").build();
		assert!(client.is_ok());
	}

	proptest! {
		/// The identifier always embeds both the name and the version.
		#[test]
		fn product_identifier_embeds_name_and_version(
			name in "[a-z][a-z0-9-]{0,20}",
			version in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
		) {
			let id = product_identifier(&name, &version);
			prop_assert_eq!(id, format!("{name}/{version}"));
		}
	}
}
