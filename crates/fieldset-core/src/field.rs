// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The recursive schema field record.

use serde::{Deserialize, Deserializer, Serialize};

use crate::condition::{self, Condition, ConditionTerm};
use crate::error::{CoreError, Result};
use crate::types::{FieldType, Logical};

/// One node of a schema document.
///
/// Attribute order here is the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
	pub key: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub description: String,
	#[serde(default)]
	pub field_type: Option<FieldType>,
	#[serde(default)]
	pub item_type: Option<FieldType>,
	#[serde(default)]
	pub regex: Option<String>,
	#[serde(default)]
	pub regex_enabled: bool,
	#[serde(default)]
	pub required: bool,
	#[serde(default, deserialize_with = "condition::deserialize_lenient")]
	pub condition: Option<Condition>,
	#[serde(default)]
	pub children: Vec<Field>,
}

/// Partial update of a field's scalar attributes. `key`, `children` and
/// `condition` are never touched by a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPatch {
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub field_type: Option<FieldType>,
	#[serde(default)]
	pub item_type: Option<FieldType>,
	#[serde(default)]
	pub regex: Option<String>,
	#[serde(default)]
	pub regex_enabled: Option<bool>,
	#[serde(default)]
	pub required: Option<bool>,
}

impl Field {
	pub fn new(key: impl Into<String>, field_type: FieldType) -> Self {
		Self {
			key: key.into(),
			description: String::new(),
			field_type: Some(field_type),
			item_type: None,
			regex: None,
			regex_enabled: false,
			required: false,
			condition: None,
			children: Vec::new(),
		}
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn with_item_type(mut self, item_type: FieldType) -> Self {
		self.item_type = Some(item_type);
		self
	}

	pub fn with_required(mut self, required: bool) -> Self {
		self.required = required;
		if required {
			self.condition = None;
		}
		self
	}

	pub fn with_child(mut self, child: Field) -> Self {
		self.children.push(child);
		self
	}

	pub fn with_condition(mut self, condition: Condition) -> Self {
		self.condition = Some(condition);
		self
	}

	/// An `object`, or a `list` of objects.
	pub fn is_container(&self) -> bool {
		match self.field_type {
			Some(FieldType::Object) => true,
			Some(FieldType::List) => self.item_type == Some(FieldType::Object),
			_ => false,
		}
	}

	/// Whether path resolution may pass through this field. Legacy records
	/// that already own children stay traversable whatever their type.
	pub fn can_descend(&self) -> bool {
		self.is_container() || !self.children.is_empty()
	}

	/// Applies the set attributes of `patch`. Becoming required drops the condition.
	pub fn apply(&mut self, patch: FieldPatch) {
		if let Some(description) = patch.description {
			self.description = description;
		}
		if let Some(field_type) = patch.field_type {
			self.field_type = Some(field_type);
		}
		if let Some(item_type) = patch.item_type {
			self.item_type = Some(item_type);
		}
		if let Some(regex) = patch.regex {
			self.regex = Some(regex);
		}
		if let Some(regex_enabled) = patch.regex_enabled {
			self.regex_enabled = regex_enabled;
		}
		if let Some(required) = patch.required {
			self.required = required;
		}
		if self.required {
			self.condition = None;
		}
	}

	/// Gives a non-required field an empty `and` condition if it has none.
	pub fn ensure_condition(&mut self) -> Option<&mut Condition> {
		if self.required {
			return None;
		}
		Some(
			self.condition
				.get_or_insert_with(|| Condition::new(Logical::And)),
		)
	}

	pub fn add_condition_term(&mut self, term: ConditionTerm) -> Result<()> {
		let key = self.key.clone();
		let condition = self
			.ensure_condition()
			.ok_or(CoreError::RequiredFieldCondition(key))?;
		condition.push(term);
		Ok(())
	}

	/// Removes the term at `index`. An emptied condition is dropped entirely.
	pub fn remove_condition_term(&mut self, index: usize) -> Result<ConditionTerm> {
		let Some(condition) = self.condition.as_mut() else {
			return Err(CoreError::IndexOutOfRange { index, len: 0 });
		};
		let removed = condition.remove(index)?;
		if condition.is_empty() {
			self.condition = None;
		}
		Ok(removed)
	}

	pub fn set_condition_logical(&mut self, logical: Logical) -> Result<()> {
		let key = self.key.clone();
		let condition = self
			.ensure_condition()
			.ok_or(CoreError::RequiredFieldCondition(key))?;
		condition.logical = logical;
		Ok(())
	}

	/// Checks every key in this subtree and sibling uniqueness at each level.
	pub fn validate(&self) -> Result<()> {
		validate_key(&self.key)?;
		validate_level(&self.children, &self.key)
	}

	/// Clears conditions on required fields throughout the subtree.
	pub fn normalize(&mut self) {
		if self.required {
			self.condition = None;
		}
		for child in &mut self.children {
			child.normalize();
		}
	}
}

/// A key is a non-empty name that cannot be confused with a path separator.
pub fn validate_key(key: &str) -> Result<()> {
	if key.is_empty() || key.contains('.') {
		return Err(CoreError::InvalidKey(key.to_string()));
	}
	Ok(())
}

pub fn key_exists(level: &[Field], key: &str) -> bool {
	level.iter().any(|f| f.key == key)
}

fn validate_level(level: &[Field], owner: &str) -> Result<()> {
	for (i, field) in level.iter().enumerate() {
		if key_exists(&level[..i], &field.key) {
			return Err(CoreError::DuplicateKey {
				key: field.key.clone(),
				level: format!("'{owner}'"),
			});
		}
		field.validate()?;
	}
	Ok(())
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
