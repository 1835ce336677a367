// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flattened views of a document used by editors to populate pickers.

use serde::Serialize;

use crate::field::Field;
use crate::types::{FieldType, Operator};

/// A field addressed by its full dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSummary {
	pub path: String,
	pub field_type: Option<FieldType>,
	pub item_type: Option<FieldType>,
}

/// A field a condition term may reference, with the operators it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionTarget {
	pub path: String,
	pub field_type: FieldType,
	pub operators: Vec<Operator>,
}

/// Depth-first listing of every field in document order.
pub fn flatten(fields: &[Field]) -> Vec<FieldSummary> {
	let mut out = Vec::new();
	walk(fields, "", &mut out);
	out
}

fn walk(fields: &[Field], prefix: &str, out: &mut Vec<FieldSummary>) {
	for field in fields {
		let path = if prefix.is_empty() {
			field.key.clone()
		} else {
			format!("{prefix}.{}", field.key)
		};
		out.push(FieldSummary {
			path: path.clone(),
			field_type: field.field_type,
			item_type: match field.field_type {
				Some(FieldType::List) => field.item_type,
				_ => None,
			},
		});
		walk(&field.children, &path, out);
	}
}

/// Fields that may receive children: objects and lists of objects.
pub fn parent_candidates(fields: &[Field]) -> Vec<FieldSummary> {
	flatten(fields)
		.into_iter()
		.filter(|s| match s.field_type {
			Some(FieldType::Object) => true,
			Some(FieldType::List) => s.item_type == Some(FieldType::Object),
			_ => false,
		})
		.collect()
}

/// Scalar fields, each with the operators legal for its type.
pub fn condition_targets(fields: &[Field]) -> Vec<ConditionTarget> {
	flatten(fields)
		.into_iter()
		.filter_map(|s| {
			let field_type = s.field_type.filter(|t| !t.is_container())?;
			Some(ConditionTarget {
				path: s.path,
				field_type,
				operators: field_type.operators().to_vec(),
			})
		})
		.collect()
}
