// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The Brave API key, wrapped so it cannot leak through formatting.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Placeholder printed wherever the key would otherwise appear.
pub const REDACTED: &str = "[REDACTED]";

/// A Brave Search API key.
///
/// `Debug`, `Display` and `Serialize` never show the key, and the memory is
/// zeroed on drop. Use [`ApiKey::expose`] at the one place the real value is
/// needed (the credential header).
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	pub fn expose(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<String> for ApiKey {
	fn from(key: String) -> Self {
		Self(key)
	}
}

impl From<&str> for ApiKey {
	fn from(key: &str) -> Self {
		Self(key.to_string())
	}
}

impl fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ApiKey").field(&REDACTED).finish()
	}
}

impl fmt::Display for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl Serialize for ApiKey {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}

impl<'de> Deserialize<'de> for ApiKey {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer).map(ApiKey)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_and_display_are_redacted() {
		let key = ApiKey::new("BSA-live-key");
		assert_eq!(format!("{key:?}"), "ApiKey(\"[REDACTED]\")");
		assert_eq!(format!("{key}"), REDACTED);
		assert_eq!(key.expose(), "BSA-live-key");
	}

	#[test]
	fn serialize_is_redacted_and_deserialize_populates() {
		let key = ApiKey::new("BSA-live-key");
		assert_eq!(serde_json::to_string(&key).unwrap(), "\"[REDACTED]\"");

		let parsed: ApiKey = serde_json::from_str("\"BSA-other\"").unwrap();
		assert_eq!(parsed.expose(), "BSA-other");
	}

	proptest! {
		#[test]
		fn formatting_never_contains_key(inner in "[a-zA-Z0-9_-]{6,40}") {
			prop_assume!(!REDACTED.contains(&inner) && !"ApiKey".contains(&inner));

			let key = ApiKey::new(inner.clone());
			let debug_out = format!("{:?}", key);
			let display_out = format!("{}", key);
			prop_assert!(!debug_out.contains(&inner));
			prop_assert!(!display_out.contains(&inner));
		}
	}
}
