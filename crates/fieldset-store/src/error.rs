// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use fieldset_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("access denied: {0}")]
	AccessDenied(String),

	#[error("not found: {0}")]
	NotFound(String),

	#[error("invalid extension: {0}")]
	InvalidExtension(String),

	#[error("invalid name: {0:?}")]
	InvalidName(String),

	#[error("{kind} ({name}) already exists")]
	AlreadyExists { kind: &'static str, name: String },

	#[error("failed to parse {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error(transparent)]
	Core(#[from] CoreError),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}
