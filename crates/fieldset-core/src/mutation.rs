// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory edits on a document's top-level field list.
//!
//! Each function either applies its whole change or returns an error and
//! leaves the tree as it was, except for the empty condition [`resolve`] may
//! put on the field it lands on.

use tracing::debug;

use crate::condition::ConditionTerm;
use crate::error::{CoreError, Result};
use crate::field::{key_exists, Field, FieldPatch};
use crate::path::{resolve, resolve_field, FieldPath, Resolved};
use crate::types::Logical;

/// Inserts `field` as the last child of `parent` (or at the top level) and
/// returns the stored copy.
pub fn add_field<'a>(
	fields: &'a mut Vec<Field>,
	parent: &FieldPath,
	mut field: Field,
) -> Result<&'a mut Field> {
	field.validate()?;
	field.normalize();

	let level = match resolve(fields, parent)? {
		Resolved::Root(level) => level,
		Resolved::Field(owner) => {
			if !owner.is_container() {
				return Err(CoreError::NotContainer {
					path: parent.to_string(),
					segment: owner.key.clone(),
				});
			}
			&mut owner.children
		}
	};

	if key_exists(level, &field.key) {
		return Err(CoreError::DuplicateKey {
			key: field.key,
			level: level_name(parent),
		});
	}

	debug!(parent = %parent, key = %field.key, "adding field");
	let index = level.len();
	level.push(field);
	Ok(&mut level[index])
}

/// Removes the field at `path`. Returns `None` when the key is absent.
pub fn delete_field(fields: &mut Vec<Field>, path: &FieldPath) -> Result<Option<Field>> {
	let (Some(parent), Some(key)) = (path.parent(), path.key()) else {
		return Err(CoreError::InvalidPath(path.to_string()));
	};

	let level = match resolve(fields, &parent)? {
		Resolved::Root(level) => level,
		Resolved::Field(owner) => &mut owner.children,
	};

	let Some(index) = level.iter().position(|f| f.key == key) else {
		debug!(path = %path, "delete of absent field ignored");
		return Ok(None);
	};
	debug!(path = %path, "deleting field");
	Ok(Some(level.remove(index)))
}

pub fn update_field<'a>(
	fields: &'a mut Vec<Field>,
	path: &FieldPath,
	patch: FieldPatch,
) -> Result<&'a mut Field> {
	let field = resolve_field(fields, path)?;
	field.apply(patch);
	Ok(field)
}

pub fn add_condition_term<'a>(
	fields: &'a mut Vec<Field>,
	path: &FieldPath,
	term: ConditionTerm,
) -> Result<&'a mut Field> {
	let field = resolve_field(fields, path)?;
	field.add_condition_term(term)?;
	Ok(field)
}

pub fn remove_condition_term<'a>(
	fields: &'a mut Vec<Field>,
	path: &FieldPath,
	index: usize,
) -> Result<&'a mut Field> {
	let field = resolve_field(fields, path)?;
	field.remove_condition_term(index)?;
	Ok(field)
}

pub fn set_condition_logical<'a>(
	fields: &'a mut Vec<Field>,
	path: &FieldPath,
	logical: Logical,
) -> Result<&'a mut Field> {
	let field = resolve_field(fields, path)?;
	field.set_condition_logical(logical)?;
	Ok(field)
}

fn level_name(parent: &FieldPath) -> String {
	if parent.is_root() {
		"the document root".to_string()
	} else {
		format!("'{parent}'")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::path::find;
	use crate::types::{FieldType, Operator};

	fn p(raw: &str) -> FieldPath {
		FieldPath::parse(raw).unwrap()
	}

	fn doc() -> Vec<Field> {
		vec![
			Field::new("name", FieldType::String),
			Field::new("address", FieldType::Object)
				.with_child(Field::new("city", FieldType::String)),
			Field::new("items", FieldType::List)
				.with_item_type(FieldType::Object)
				.with_child(Field::new("sku", FieldType::String)),
		]
	}

	#[test]
	fn test_add_top_level_and_nested() {
		let mut fields = doc();
		add_field(&mut fields, &FieldPath::root(), Field::new("age", FieldType::Number)).unwrap();
		assert_eq!(fields.last().unwrap().key, "age");

		add_field(&mut fields, &p("address"), Field::new("zip", FieldType::Number)).unwrap();
		add_field(&mut fields, &p("items"), Field::new("qty", FieldType::Number)).unwrap();
		assert!(find(&fields, &p("address.zip")).is_some());
		assert!(find(&fields, &p("items.qty")).is_some());
	}

	#[test]
	fn test_add_duplicate_key() {
		let mut fields = doc();
		let err = add_field(&mut fields, &p("address"), Field::new("city", FieldType::String))
			.unwrap_err();
		assert!(matches!(err, CoreError::DuplicateKey { key, .. } if key == "city"));
		assert_eq!(fields[1].children.len(), 1);
	}

	#[test]
	fn test_add_under_scalar_is_rejected() {
		let mut fields = doc();
		let err =
			add_field(&mut fields, &p("name"), Field::new("x", FieldType::String)).unwrap_err();
		assert!(matches!(err, CoreError::NotContainer { .. }));
	}

	#[test]
	fn test_add_clears_condition_of_required_subtree() {
		let mut fields = Vec::new();
		let mut incoming = Field::new("f", FieldType::String);
		incoming.required = true;
		incoming.condition = Some(Default::default());
		add_field(&mut fields, &FieldPath::root(), incoming).unwrap();
		assert!(fields[0].condition.is_none());
	}

	#[test]
	fn test_add_rejects_bad_key() {
		let mut fields = Vec::new();
		let err = add_field(&mut fields, &FieldPath::root(), Field::new("a.b", FieldType::String))
			.unwrap_err();
		assert_eq!(err, CoreError::InvalidKey("a.b".to_string()));
		assert!(fields.is_empty());
	}

	#[test]
	fn test_delete() {
		let mut fields = doc();
		let removed = delete_field(&mut fields, &p("address.city")).unwrap();
		assert_eq!(removed.unwrap().key, "city");
		assert!(fields[1].children.is_empty());

		assert!(delete_field(&mut fields, &p("address.nope")).unwrap().is_none());
		assert!(delete_field(&mut fields, &p("name")).unwrap().is_some());
		assert_eq!(fields.len(), 2);
		assert!(delete_field(&mut fields, &FieldPath::root()).is_err());
	}

	#[test]
	fn test_delete_under_missing_parent() {
		let mut fields = doc();
		assert!(matches!(
			delete_field(&mut fields, &p("ghost.x")),
			Err(CoreError::PathNotFound { .. })
		));
	}

	#[test]
	fn test_update_preserves_identity() {
		let mut fields = doc();
		let f = update_field(
			&mut fields,
			&p("items"),
			FieldPatch {
				description: Some("line items".to_string()),
				..Default::default()
			},
		)
		.unwrap();
		assert_eq!(f.key, "items");
		assert_eq!(f.children.len(), 1);
		assert_eq!(f.description, "line items");
	}

	#[test]
	fn test_condition_lifecycle() {
		let mut fields = doc();
		let path = p("address.city");
		add_condition_term(
			&mut fields,
			&path,
			ConditionTerm::new("name", Operator::NotEmpty, ""),
		)
		.unwrap();
		set_condition_logical(&mut fields, &path, Logical::Or).unwrap();
		let f = find(&fields, &path).unwrap();
		let c = f.condition.as_ref().unwrap();
		assert_eq!(c.logical, Logical::Or);
		assert_eq!(c.len(), 1);

		remove_condition_term(&mut fields, &path, 0).unwrap();
		assert!(find(&fields, &path).unwrap().condition.is_none());
	}

	#[test]
	fn test_remove_condition_out_of_range() {
		let mut fields = doc();
		let err = remove_condition_term(&mut fields, &p("name"), 3).unwrap_err();
		assert_eq!(err, CoreError::IndexOutOfRange { index: 3, len: 0 });
	}
}
