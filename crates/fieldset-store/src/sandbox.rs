// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Containment of user-supplied relative paths beneath the assets root.

use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::error::{Result, StoreError};

pub const DOCUMENT_EXTENSION: &str = "json";

/// What a resolved path is expected to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
	/// A `.json` schema document.
	Document,
	Directory,
	Any,
}

#[derive(Debug, Clone)]
pub struct Sandbox {
	root: PathBuf,
}

impl Sandbox {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Resolves `relative` to an absolute path under the root.
	///
	/// Checks run in order: containment, existence (when `must_exist`), then
	/// the shape required by `target`. A leading `/` is read as the root.
	pub fn resolve(&self, relative: &str, target: Target, must_exist: bool) -> Result<PathBuf> {
		let path = self.contain(relative)?;
		let exists = path.exists();

		if exists {
			self.check_canonical(&path, relative)?;
		} else if must_exist {
			return Err(StoreError::NotFound(display_relative(relative)));
		}

		match target {
			Target::Document => {
				if exists && path.is_dir() {
					return Err(StoreError::InvalidExtension(format!(
						"{} is a folder, not a document",
						display_relative(relative)
					)));
				}
				if !has_document_extension(&path) {
					return Err(StoreError::InvalidExtension(format!(
						"{} is not a .{DOCUMENT_EXTENSION} file",
						display_relative(relative)
					)));
				}
			}
			Target::Directory => {
				if exists && !path.is_dir() {
					return Err(StoreError::NotFound(format!(
						"{} is not a folder",
						display_relative(relative)
					)));
				}
			}
			Target::Any => {}
		}

		Ok(path)
	}

	/// Resolves a new entry `name` inside the existing folder `parent`.
	pub fn resolve_child(&self, parent: &str, name: &str) -> Result<PathBuf> {
		let dir = self.resolve(parent, Target::Directory, true)?;
		validate_entry_name(name)?;
		Ok(dir.join(name))
	}

	fn contain(&self, relative: &str) -> Result<PathBuf> {
		if relative.contains('\0') {
			return Err(StoreError::AccessDenied("path contains a null byte".to_string()));
		}

		let mut parts: Vec<&std::ffi::OsStr> = Vec::new();
		for component in Path::new(relative.trim_start_matches('/')).components() {
			match component {
				Component::Normal(part) => parts.push(part),
				Component::CurDir => {}
				Component::ParentDir => {
					if parts.pop().is_none() {
						warn!(path = %relative, "path escapes assets root");
						return Err(StoreError::AccessDenied(display_relative(relative)));
					}
				}
				Component::RootDir | Component::Prefix(_) => {
					warn!(path = %relative, "absolute path rejected");
					return Err(StoreError::AccessDenied(display_relative(relative)));
				}
			}
		}

		let mut path = self.root.clone();
		path.extend(parts);
		Ok(path)
	}

	/// Rejects existing paths that leave the root through a symlink.
	fn check_canonical(&self, path: &Path, relative: &str) -> Result<()> {
		let canonical = path.canonicalize()?;
		let root_canonical = self.root.canonicalize()?;
		if !canonical.starts_with(&root_canonical) {
			warn!(
				path = %relative,
				resolved = %canonical.display(),
				"path resolves outside assets root"
			);
			return Err(StoreError::AccessDenied(display_relative(relative)));
		}
		Ok(())
	}
}

pub fn has_document_extension(path: &Path) -> bool {
	path.extension()
		.and_then(|e| e.to_str())
		.is_some_and(|e| e.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
}

/// A single path component: no separators, no `.`/`..`, not empty.
pub fn validate_entry_name(name: &str) -> Result<()> {
	let trimmed = name.trim();
	if trimmed.is_empty()
		|| trimmed == "."
		|| trimmed == ".."
		|| name.contains(&['/', '\\', '\0'][..])
	{
		return Err(StoreError::InvalidName(name.to_string()));
	}
	Ok(())
}

fn display_relative(relative: &str) -> String {
	let trimmed = relative.trim_matches('/');
	if trimmed.is_empty() {
		"/".to_string()
	} else {
		trimmed.to_string()
	}
}
