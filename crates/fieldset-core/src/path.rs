// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dot-separated field paths and their resolution against a field tree.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::field::Field;

/// A dot-separated sequence of keys. The empty path names the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
	segments: Vec<String>,
}

impl FieldPath {
	pub fn root() -> Self {
		Self::default()
	}

	pub fn parse(raw: &str) -> Result<Self> {
		if raw.is_empty() {
			return Ok(Self::root());
		}
		let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
		if segments.iter().any(String::is_empty) {
			return Err(CoreError::InvalidPath(raw.to_string()));
		}
		Ok(Self { segments })
	}

	pub fn is_root(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// The final key, if any.
	pub fn key(&self) -> Option<&str> {
		self.segments.last().map(String::as_str)
	}

	pub fn parent(&self) -> Option<FieldPath> {
		let (_, init) = self.segments.split_last()?;
		Some(Self {
			segments: init.to_vec(),
		})
	}

	pub fn child(&self, key: &str) -> FieldPath {
		let mut segments = self.segments.clone();
		segments.push(key.to_string());
		Self { segments }
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("."))
	}
}

impl FromStr for FieldPath {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

/// Where a path landed: the top-level list, or a specific field.
#[derive(Debug)]
pub enum Resolved<'a> {
	Root(&'a mut Vec<Field>),
	Field(&'a mut Field),
}

/// Walks `path` through `fields`.
///
/// Every segment but the last must name a field that [`Field::can_descend`].
/// The field the path lands on is given an empty `and` condition when it has
/// none and is not required; callers decide whether that change is persisted.
pub fn resolve<'a>(fields: &'a mut Vec<Field>, path: &FieldPath) -> Result<Resolved<'a>> {
	let Some((last, init)) = path.segments.split_last() else {
		return Ok(Resolved::Root(fields));
	};

	let mut level = fields;
	for segment in init {
		let field = level
			.iter_mut()
			.find(|f| &f.key == segment)
			.ok_or_else(|| CoreError::PathNotFound {
				path: path.to_string(),
				segment: segment.clone(),
			})?;
		if !field.can_descend() {
			return Err(CoreError::NotContainer {
				path: path.to_string(),
				segment: segment.clone(),
			});
		}
		level = &mut field.children;
	}

	let field = level
		.iter_mut()
		.find(|f| &f.key == last)
		.ok_or_else(|| CoreError::PathNotFound {
			path: path.to_string(),
			segment: last.clone(),
		})?;
	field.ensure_condition();
	Ok(Resolved::Field(field))
}

/// Resolves a path that must name a field rather than the root.
pub fn resolve_field<'a>(fields: &'a mut Vec<Field>, path: &FieldPath) -> Result<&'a mut Field> {
	match resolve(fields, path)? {
		Resolved::Field(field) => Ok(field),
		Resolved::Root(_) => Err(CoreError::InvalidPath(String::new())),
	}
}

/// Read-only lookup with no side effects.
pub fn find<'a>(fields: &'a [Field], path: &FieldPath) -> Option<&'a Field> {
	let (first, rest) = path.segments.split_first()?;
	let mut field = fields.iter().find(|f| &f.key == first)?;
	for segment in rest {
		field = field.children.iter().find(|f| &f.key == segment)?;
	}
	Some(field)
}
