// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fieldset_core::Field;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Whole-document persistence for schema trees.
#[async_trait]
pub trait SchemaStore: Send + Sync {
	/// Loads the document at `path`. An absent document is empty.
	async fn load(&self, path: &Path) -> Result<Vec<Field>>;

	/// Replaces the document at `path` with `fields`.
	async fn save(&self, path: &Path, fields: &[Field]) -> Result<()>;
}

/// Stores each document as a pretty-printed JSON array.
#[derive(Debug, Clone, Default)]
pub struct JsonSchemaStore;

impl JsonSchemaStore {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl SchemaStore for JsonSchemaStore {
	async fn load(&self, path: &Path) -> Result<Vec<Field>> {
		if !path.exists() {
			debug!(path = %path.display(), "document not found, loading empty");
			return Ok(Vec::new());
		}

		let contents = tokio::fs::read_to_string(path).await?;
		if contents.trim().is_empty() {
			return Ok(Vec::new());
		}

		let fields: Vec<Field> =
			serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
				path: path.to_path_buf(),
				source,
			})?;

		debug!(
				path = %path.display(),
				fields = fields.len(),
				"loaded document from disk"
		);

		Ok(fields)
	}

	async fn save(&self, path: &Path, fields: &[Field]) -> Result<()> {
		let tmp_path = tmp_path(path)?;
		let json = to_pretty_json(fields)?;

		tokio::fs::write(&tmp_path, &json).await?;
		tokio::fs::rename(&tmp_path, path).await?;

		debug!(
				path = %path.display(),
				fields = fields.len(),
				"saved document to disk"
		);

		Ok(())
	}
}

/// Four-space indented JSON, matching documents written by earlier tooling.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
	let mut buf = Vec::new();
	let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
	let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
	value.serialize(&mut serializer)?;
	Ok(buf)
}

fn tmp_path(path: &Path) -> Result<PathBuf> {
	let name = path
		.file_name()
		.ok_or_else(|| StoreError::InvalidName(path.display().to_string()))?;
	let mut tmp_name = name.to_os_string();
	tmp_name.push(".tmp");
	Ok(path.with_file_name(tmp_name))
}
