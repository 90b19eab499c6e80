// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Untyped request parameters.
//!
//! A [`ParamMap`] is what the query builder consumes. Typed per-endpoint
//! parameter structs in [`crate::types`] lower into one through `serde`.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde_json::Value;

use crate::error::BraveError;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
	String(String),
	Integer(i64),
	Float(f64),
	Bool(bool),
	List(Vec<ParamValue>),
}

impl ParamValue {
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			ParamValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			ParamValue::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[ParamValue]> {
		match self {
			ParamValue::List(items) => Some(items),
			_ => None,
		}
	}

	/// Converts a JSON value. `null` has no parameter form and yields `None`.
	pub fn from_json(value: Value) -> Option<Self> {
		match value {
			Value::Null => None,
			Value::Bool(b) => Some(ParamValue::Bool(b)),
			Value::Number(n) => Some(match (n.as_i64(), n.as_f64()) {
				(Some(i), _) => ParamValue::Integer(i),
				(None, Some(f)) if n.is_f64() => ParamValue::Float(f),
				_ => ParamValue::String(n.to_string()),
			}),
			Value::String(s) => Some(ParamValue::String(s)),
			Value::Array(items) => Some(ParamValue::List(
				items.into_iter().filter_map(ParamValue::from_json).collect(),
			)),
			obj @ Value::Object(_) => Some(ParamValue::String(obj.to_string())),
		}
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParamValue::String(s) => f.write_str(s),
			ParamValue::Integer(i) => write!(f, "{i}"),
			ParamValue::Float(x) => write!(f, "{x}"),
			ParamValue::Bool(b) => write!(f, "{b}"),
			ParamValue::List(items) => {
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(",")?;
					}
					write!(f, "{item}")?;
				}
				Ok(())
			}
		}
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		ParamValue::String(value)
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		ParamValue::String(value.to_string())
	}
}

impl From<bool> for ParamValue {
	fn from(value: bool) -> Self {
		ParamValue::Bool(value)
	}
}

impl From<f64> for ParamValue {
	fn from(value: f64) -> Self {
		ParamValue::Float(value)
	}
}

macro_rules! impl_from_integer {
	($($t:ty),*) => {
		$(
			impl From<$t> for ParamValue {
				fn from(value: $t) -> Self {
					ParamValue::Integer(i64::from(value))
				}
			}
		)*
	};
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
	fn from(values: Vec<T>) -> Self {
		ParamValue::List(values.into_iter().map(Into::into).collect())
	}
}

/// Parameters for one request, keyed by their semantic name.
///
/// Absent values are not representable; a key is either present with a
/// value or missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamMap {
	entries: BTreeMap<String, ParamValue>,
}

impl ParamMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
		self.entries.insert(key.into(), value.into())
	}

	/// Inserts `value` when it is `Some`; `None` leaves the map untouched.
	pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
		if let Some(value) = value {
			self.insert(key, value);
		}
	}

	/// Builder-style [`ParamMap::insert`].
	pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn get(&self, key: &str) -> Option<&ParamValue> {
		self.entries.get(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
		self.entries.remove(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
		self.entries.iter()
	}

	/// True when `summary` is present and exactly `true`.
	pub fn is_summary_requested(&self) -> bool {
		self.get("summary").and_then(ParamValue::as_bool) == Some(true)
	}
}

impl<'a> IntoIterator for &'a ParamMap {
	type Item = (&'a String, &'a ParamValue);
	type IntoIter = btree_map::Iter<'a, String, ParamValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParamMap {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = ParamMap::new();
		for (k, v) in iter {
			map.insert(k, v);
		}
		map
	}
}

impl TryFrom<Value> for ParamMap {
	type Error = BraveError;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		let Value::Object(obj) = value else {
			return Err(BraveError::InvalidParams(format!(
				"expected a JSON object, got {}",
				json_kind(&value)
			)));
		};

		let entries = obj
			.into_iter()
			.filter_map(|(k, v)| ParamValue::from_json(v).map(|v| (k, v)))
			.collect();
		Ok(Self { entries })
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
