// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

pub mod conditions;
pub mod fields;
pub mod files;
pub mod health;
pub mod registry;

use std::path::PathBuf;

use fieldset_core::FieldPath;
use fieldset_store::Target;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::ServerError;

/// Addresses a schema document.
#[derive(Debug, Deserialize)]
pub struct DocumentQuery {
	pub path: String,
}

/// Addresses a field within a document.
#[derive(Debug, Deserialize)]
pub struct FieldQuery {
	pub path: String,
	#[serde(default)]
	pub field_path: String,
}

/// Addresses a level (root or container field) within a document.
#[derive(Debug, Deserialize)]
pub struct ParentQuery {
	pub path: String,
	#[serde(default)]
	pub parent_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
	pub message: String,
}

impl MessageResponse {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

/// Resolves a document for reading; an absent document reads as empty.
pub(crate) fn readable_document(state: &AppState, path: &str) -> Result<PathBuf, ServerError> {
	Ok(state.sandbox.resolve(path, Target::Document, false)?)
}

/// Resolves a document that must already exist.
pub(crate) fn existing_document(state: &AppState, path: &str) -> Result<PathBuf, ServerError> {
	Ok(state.sandbox.resolve(path, Target::Document, true)?)
}

pub(crate) fn field_path(raw: &str) -> Result<FieldPath, ServerError> {
	Ok(FieldPath::parse(raw)?)
}
