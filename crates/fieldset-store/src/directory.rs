// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Browsing and managing the folders and documents under the assets root.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::document::to_pretty_json;
use crate::error::{Result, StoreError};
use crate::sandbox::{has_document_extension, DOCUMENT_EXTENSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
	File,
	Folder,
}

impl EntryKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			EntryKind::File => "file",
			EntryKind::Folder => "folder",
		}
	}
}

/// Listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowType {
	#[default]
	All,
	File,
	Folder,
}

impl ShowType {
	fn admits(&self, kind: EntryKind) -> bool {
		match self {
			ShowType::All => true,
			ShowType::File => kind == EntryKind::File,
			ShowType::Folder => kind == EntryKind::Folder,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
	pub name: String,
	pub file_type: EntryKind,
}

/// Lists the immediate entries of `dir`: folders first, then by
/// case-insensitive name.
pub async fn list_entries(dir: &Path, show: ShowType) -> Result<Vec<Entry>> {
	if !dir.exists() {
		return Ok(Vec::new());
	}

	let mut entries = tokio::fs::read_dir(dir).await?;
	let mut out = Vec::new();

	while let Some(entry) = entries.next_entry().await? {
		let name = entry.file_name().to_string_lossy().into_owned();
		if name.ends_with(".tmp") {
			continue;
		}

		let metadata = match tokio::fs::metadata(entry.path()).await {
			Ok(metadata) => metadata,
			Err(e) => {
				debug!(name = %name, error = %e, "skipping unreadable entry");
				continue;
			}
		};
		let kind = if metadata.is_dir() {
			EntryKind::Folder
		} else if metadata.is_file() {
			EntryKind::File
		} else {
			continue;
		};

		if show.admits(kind) {
			out.push(Entry {
				name,
				file_type: kind,
			});
		}
	}

	out.sort_by(|a, b| {
		(a.file_type != EntryKind::Folder, a.name.to_lowercase())
			.cmp(&(b.file_type != EntryKind::Folder, b.name.to_lowercase()))
	});

	debug!(dir = %dir.display(), count = out.len(), "listed entries");

	Ok(out)
}

/// On-disk name for a new entry. Documents get the `.json` suffix unless
/// already present.
pub fn entry_file_name(name: &str, kind: EntryKind) -> String {
	match kind {
		EntryKind::File if !has_document_extension(Path::new(name)) => {
			format!("{name}.{DOCUMENT_EXTENSION}")
		}
		_ => name.to_string(),
	}
}

/// Creates an empty document or folder at `path`.
pub async fn create_entry(path: &Path, kind: EntryKind) -> Result<()> {
	let already_exists = || StoreError::AlreadyExists {
		kind: kind.as_str(),
		name: path
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_default(),
	};

	if path.exists() {
		return Err(already_exists());
	}

	match kind {
		EntryKind::File => {
			let mut file = match tokio::fs::OpenOptions::new()
				.write(true)
				.create_new(true)
				.open(path)
				.await
			{
				Ok(file) => file,
				Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(already_exists()),
				Err(e) => return Err(e.into()),
			};
			file.write_all(&to_pretty_json(&[] as &[()])?).await?;
			file.flush().await?;
		}
		EntryKind::Folder => match tokio::fs::create_dir(path).await {
			Ok(()) => {}
			Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(already_exists()),
			Err(e) => return Err(e.into()),
		},
	}

	info!(path = %path.display(), kind = kind.as_str(), "created entry");
	Ok(())
}

/// Removes a document, or a folder with everything in it.
pub async fn delete_entry(path: &Path) -> Result<EntryKind> {
	let metadata = match tokio::fs::metadata(path).await {
		Ok(metadata) => metadata,
		Err(e) if e.kind() == ErrorKind::NotFound => {
			return Err(StoreError::NotFound(path.display().to_string()));
		}
		Err(e) => return Err(e.into()),
	};

	let kind = if metadata.is_dir() {
		tokio::fs::remove_dir_all(path).await?;
		EntryKind::Folder
	} else {
		tokio::fs::remove_file(path).await?;
		EntryKind::File
	};

	info!(path = %path.display(), kind = kind.as_str(), "deleted entry");
	Ok(kind)
}
