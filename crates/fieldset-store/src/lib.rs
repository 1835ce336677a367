// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Storage for fieldset schema documents.
//!
//! Documents live as `.json` files beneath an assets root. [`Sandbox`] maps
//! user-supplied relative paths to that tree and refuses anything that leaves
//! it; [`SchemaStore`] loads and atomically rewrites whole documents; and
//! [`SchemaEditor`] runs each field edit as a locked load-mutate-save cycle.

pub mod directory;
pub mod document;
pub mod editor;
pub mod error;
pub mod sandbox;

pub use directory::{
	create_entry, delete_entry, entry_file_name, list_entries, Entry, EntryKind, ShowType,
};
pub use document::{to_pretty_json, JsonSchemaStore, SchemaStore};
pub use editor::SchemaEditor;
pub use error::{Result, StoreError};
pub use sandbox::{Sandbox, Target};
