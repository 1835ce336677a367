// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static registries: field types, condition operators and logical combinators.
//!
//! Everything here is a fixed lookup table. The operator set per field type is
//! part of the stored-document contract and must not drift:
//!
//! | Type | Operators |
//! |---|---|
//! | bool | eq, ne |
//! | string | eq, ne, not_empty, empty |
//! | number, email, ip | eq, ne, gt, lt |
//! | object, list | none |

use serde::{Deserialize, Serialize};

/// A `{ value, label }` pair as rendered by editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
	pub value: &'static str,
	pub label: &'static str,
}

/// The type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
	String,
	Number,
	List,
	Email,
	Bool,
	Ip,
	Object,
}

impl FieldType {
	/// All field types in display order.
	pub const ALL: [FieldType; 7] = [
		FieldType::String,
		FieldType::Number,
		FieldType::List,
		FieldType::Email,
		FieldType::Bool,
		FieldType::Ip,
		FieldType::Object,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			FieldType::String => "string",
			FieldType::Number => "number",
			FieldType::List => "list",
			FieldType::Email => "email",
			FieldType::Bool => "bool",
			FieldType::Ip => "ip",
			FieldType::Object => "object",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			FieldType::String => "String",
			FieldType::Number => "Number",
			FieldType::List => "List",
			FieldType::Email => "Email",
			FieldType::Bool => "Boolean",
			FieldType::Ip => "IP",
			FieldType::Object => "Object",
		}
	}

	/// `list` and `object` may own children or an item type.
	pub fn is_container(&self) -> bool {
		matches!(self, FieldType::List | FieldType::Object)
	}

	/// Operators a condition may apply to a field of this type.
	pub fn operators(&self) -> &'static [Operator] {
		use Operator::*;
		match self {
			FieldType::Bool => &[Eq, Ne],
			FieldType::String => &[Eq, Ne, NotEmpty, Empty],
			FieldType::Number | FieldType::Email | FieldType::Ip => &[Eq, Ne, Gt, Lt],
			FieldType::List | FieldType::Object => &[],
		}
	}

	pub fn entry(&self) -> RegistryEntry {
		RegistryEntry {
			value: self.as_str(),
			label: self.label(),
		}
	}
}

impl std::fmt::Display for FieldType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for FieldType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FieldType::ALL
			.into_iter()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| format!("unknown field type '{s}'"))
	}
}

/// Comparison operator of a condition term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
	Eq,
	Ne,
	Gt,
	Lt,
	NotEmpty,
	Empty,
}

impl Operator {
	pub const ALL: [Operator; 6] = [
		Operator::Eq,
		Operator::Ne,
		Operator::Gt,
		Operator::Lt,
		Operator::NotEmpty,
		Operator::Empty,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Operator::Eq => "eq",
			Operator::Ne => "ne",
			Operator::Gt => "gt",
			Operator::Lt => "lt",
			Operator::NotEmpty => "not_empty",
			Operator::Empty => "empty",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Operator::Eq => "==",
			Operator::Ne => "!=",
			Operator::Gt => ">",
			Operator::Lt => "<",
			Operator::NotEmpty => "Not None",
			Operator::Empty => "Is None",
		}
	}

	pub fn entry(&self) -> RegistryEntry {
		RegistryEntry {
			value: self.as_str(),
			label: self.label(),
		}
	}
}

impl std::fmt::Display for Operator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Logical combinator of a condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logical {
	#[default]
	#[serde(alias = "AND")]
	And,
	#[serde(alias = "OR")]
	Or,
}

impl Logical {
	pub const ALL: [Logical; 2] = [Logical::And, Logical::Or];

	pub fn as_str(&self) -> &'static str {
		match self {
			Logical::And => "and",
			Logical::Or => "or",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Logical::And => "AND",
			Logical::Or => "OR",
		}
	}

	pub fn entry(&self) -> RegistryEntry {
		RegistryEntry {
			value: self.as_str(),
			label: self.label(),
		}
	}
}

impl std::fmt::Display for Logical {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Legal operators for a field type; empty for containers.
pub fn operators_for(field_type: FieldType) -> &'static [Operator] {
	field_type.operators()
}

pub fn is_valid_field_type(value: &str) -> bool {
	value.parse::<FieldType>().is_ok()
}

pub fn is_valid_logical(value: &str) -> bool {
	Logical::ALL.iter().any(|l| l.as_str() == value)
}

/// Types usable as a list's item type. Excludes `list` and `bool`.
pub fn item_type_candidates() -> Vec<FieldType> {
	FieldType::ALL
		.into_iter()
		.filter(|t| !matches!(t, FieldType::List | FieldType::Bool))
		.collect()
}

/// Filterable field types mapped to their operators, in display order.
pub fn type_operators() -> Vec<(FieldType, &'static [Operator])> {
	FieldType::ALL
		.into_iter()
		.filter(|t| !t.operators().is_empty())
		.map(|t| (t, t.operators()))
		.collect()
}
