// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Visibility conditions attached to schema fields.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::{CoreError, Result};
use crate::types::{Logical, Operator};

/// A single comparison: `key <operator> value`.
///
/// `key` is a dotted path naming another field; it is not checked against the
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionTerm {
	pub key: String,
	pub operator: Operator,
	#[serde(default, deserialize_with = "scalar_as_string")]
	pub value: String,
}

impl ConditionTerm {
	pub fn new(key: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			operator,
			value: value.into(),
		}
	}
}

/// A logical combinator over an ordered list of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
	#[serde(default, deserialize_with = "null_as_default")]
	pub logical: Logical,
	#[serde(default, deserialize_with = "null_as_default")]
	pub conditions: Vec<ConditionTerm>,
}

impl Condition {
	pub fn new(logical: Logical) -> Self {
		Self {
			logical,
			conditions: Vec::new(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.conditions.is_empty()
	}

	pub fn len(&self) -> usize {
		self.conditions.len()
	}

	pub fn push(&mut self, term: ConditionTerm) {
		self.conditions.push(term);
	}

	pub fn remove(&mut self, index: usize) -> Result<ConditionTerm> {
		if index >= self.conditions.len() {
			return Err(CoreError::IndexOutOfRange {
				index,
				len: self.conditions.len(),
			});
		}
		Ok(self.conditions.remove(index))
	}
}

/// Reads an optional condition, treating anything that is not a well-formed
/// condition object as absent.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> std::result::Result<Option<Condition>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<serde_json::Value>::deserialize(deserializer)?;
	match value {
		None | Some(serde_json::Value::Null) => Ok(None),
		Some(raw) => match serde_json::from_value::<Condition>(raw) {
			Ok(condition) => Ok(Some(condition)),
			Err(e) => {
				warn!(error = %e, "discarding malformed condition");
				Ok(None)
			}
		},
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn scalar_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	use serde_json::Value;
	match Value::deserialize(deserializer)? {
		Value::Null => Ok(String::new()),
		Value::String(s) => Ok(s),
		Value::Bool(b) => Ok(b.to_string()),
		Value::Number(n) => Ok(n.to_string()),
		other => Err(serde::de::Error::custom(format!(
			"condition value must be a scalar, got {other}"
		))),
	}
}
