// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core data model for fieldset schema documents.
//!
//! A document is an ordered list of [`Field`]s. Fields form a tree through
//! `children` and are addressed by dot-separated [`FieldPath`]s. This crate
//! holds the pure, storage-agnostic part: the type and operator registries,
//! path resolution, tree edits and the flattened catalog views.

pub mod catalog;
pub mod condition;
pub mod error;
pub mod field;
pub mod mutation;
pub mod path;
pub mod types;

pub use catalog::{condition_targets, flatten, parent_candidates, ConditionTarget, FieldSummary};
pub use condition::{Condition, ConditionTerm};
pub use error::{CoreError, Result};
pub use field::{key_exists, validate_key, Field, FieldPatch};
pub use mutation::{
	add_condition_term, add_field, delete_field, remove_condition_term, set_condition_logical,
	update_field,
};
pub use path::{find, resolve, resolve_field, FieldPath, Resolved};
pub use types::{
	is_valid_field_type, is_valid_logical, item_type_candidates, operators_for, type_operators,
	FieldType, Logical, Operator, RegistryEntry,
};
