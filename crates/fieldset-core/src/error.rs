// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for schema tree operations.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while resolving or mutating a field tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
	/// A path segment has no matching key at its level.
	#[error("cannot find path '{path}': '{segment}' does not exist")]
	PathNotFound { path: String, segment: String },

	/// A non-last path segment names a field that cannot own children.
	#[error("cannot find path '{path}': '{segment}' has no children")]
	NotContainer { path: String, segment: String },

	#[error("'{key}' already exists in {level}")]
	DuplicateKey { key: String, level: String },

	#[error("condition index {index} out of range (len {len})")]
	IndexOutOfRange { index: usize, len: usize },

	#[error("invalid field key: {0:?}")]
	InvalidKey(String),

	#[error("invalid field path: {0:?}")]
	InvalidPath(String),

	/// Required fields are never conditionally visible.
	#[error("field '{0}' is required and cannot carry a condition")]
	RequiredFieldCondition(String),
}
