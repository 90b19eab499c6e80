// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Scrubbing of error messages before they leave the client.
//!
//! Two things are removed: the active API key, and the value of the `q`
//! parameter of every embedded URL (the user's search terms). URLs are
//! rewritten in place, so the surrounding text (a pretty-printed JSON dump,
//! say) keeps its shape.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::{form_urlencoded, Url};

pub const REDACTED_API_KEY: &str = "[REDACTED-API-KEY]";
pub const REDACTED_QUERY: &str = "[REDACTED]";
pub const INVALID_URL: &str = "[INVALID-URL]";

/// Scheme is matched case-insensitively. A backslash escape (`\"` inside a
/// JSON string) is taken as part of the URL, an unescaped quote ends it.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r#"(?i)https?://(?:\\\S|[^\s"'<>`\\])+"#).expect("URL pattern is valid")
});

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

/// Redacts `api_key` and every URL's `q` value from `message`.
///
/// An empty `api_key` is ignored. A URL that cannot be parsed is replaced
/// by [`INVALID_URL`] as a whole.
pub fn sanitize_message(message: &str, api_key: &str) -> String {
	let without_key = redact_api_key(message, api_key);
	URL_PATTERN
		.replace_all(&without_key, |caps: &Captures| {
			let matched = &caps[0];
			let url = matched.trim_end_matches(TRAILING_PUNCTUATION);
			let trailing = &matched[url.len()..];
			format!("{}{trailing}", sanitize_url(url))
		})
		.into_owned()
}

fn redact_api_key(message: &str, api_key: &str) -> String {
	if api_key.is_empty() {
		return message.to_string();
	}
	message.replace(api_key, REDACTED_API_KEY)
}

/// Replaces the value of each `q` pair in `raw`'s query string.
///
/// Each value runs to the next `&` or `#`. Everything else in `raw` is kept
/// as written.
pub fn sanitize_url(raw: &str) -> String {
	if Url::parse(raw).is_err() {
		return INVALID_URL.to_string();
	}

	let Some((base, rest)) = raw.split_once('?') else {
		return raw.to_string();
	};
	let (query, fragment) = match rest.split_once('#') {
		Some((query, fragment)) => (query, Some(fragment)),
		None => (rest, None),
	};

	if !query.split('&').any(is_search_term_pair) {
		return raw.to_string();
	}

	let rewritten = query
		.split('&')
		.map(|pair| {
			if is_search_term_pair(pair) {
				format!("q={REDACTED_QUERY}")
			} else {
				pair.to_string()
			}
		})
		.collect::<Vec<_>>()
		.join("&");

	match fragment {
		Some(fragment) => format!("{base}?{rewritten}#{fragment}"),
		None => format!("{base}?{rewritten}"),
	}
}

fn is_search_term_pair(pair: &str) -> bool {
	form_urlencoded::parse(pair.as_bytes())
		.next()
		.is_some_and(|(key, _)| key == "q")
}
