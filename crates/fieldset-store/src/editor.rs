// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Serialized read-modify-write editing of schema documents.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fieldset_core::{
	catalog, mutation, path::resolve_field, validate_key, ConditionTarget, ConditionTerm, Field,
	FieldPatch, FieldPath, FieldSummary, Logical,
};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info};

use crate::document::{JsonSchemaStore, SchemaStore};
use crate::error::Result;

/// Applies field edits to documents, one writer per document at a time.
///
/// Every edit loads the whole document, mutates it in memory and saves the
/// whole document back. Edits to the same path are serialized so none is lost;
/// edits to different documents run concurrently.
pub struct SchemaEditor<S = JsonSchemaStore> {
	store: S,
	locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl Default for SchemaEditor<JsonSchemaStore> {
	fn default() -> Self {
		Self::new(JsonSchemaStore::new())
	}
}

impl<S: SchemaStore> SchemaEditor<S> {
	pub fn new(store: S) -> Self {
		Self {
			store,
			locks: Mutex::new(HashMap::new()),
		}
	}

	pub async fn load_document(&self, doc: &Path) -> Result<Vec<Field>> {
		self.store.load(doc).await
	}

	/// Appends `field` under `parent` and returns it as stored.
	pub async fn add_field(&self, doc: &Path, parent: &FieldPath, field: Field) -> Result<Field> {
		let key = field.key.clone();
		let added = self
			.edit(doc, |fields| {
				Ok(mutation::add_field(fields, parent, field)?.clone())
			})
			.await?;
		info!(doc = %doc.display(), parent = %parent, key = %key, "field added");
		Ok(added)
	}

	/// Removes the field at `path`. Absent keys are not an error.
	pub async fn delete_field(&self, doc: &Path, path: &FieldPath) -> Result<Option<Field>> {
		let removed = self
			.edit(doc, |fields| mutation::delete_field(fields, path))
			.await?;
		if removed.is_some() {
			info!(doc = %doc.display(), path = %path, "field deleted");
		}
		Ok(removed)
	}

	pub async fn delete_field_in(
		&self,
		doc: &Path,
		parent: &FieldPath,
		key: &str,
	) -> Result<Option<Field>> {
		validate_key(key)?;
		self.delete_field(doc, &parent.child(key)).await
	}

	/// The field at `path` as an editor would see it, with an empty condition
	/// filled in. Nothing is written.
	pub async fn get_field(&self, doc: &Path, path: &FieldPath) -> Result<Field> {
		let mut fields = self.store.load(doc).await?;
		let field = resolve_field(&mut fields, path)?;
		Ok(field.clone())
	}

	pub async fn update_field(&self, doc: &Path, path: &FieldPath, patch: FieldPatch) -> Result<Field> {
		let updated = self
			.edit(doc, |fields| {
				Ok(mutation::update_field(fields, path, patch)?.clone())
			})
			.await?;
		info!(doc = %doc.display(), path = %path, "field updated");
		Ok(updated)
	}

	pub async fn add_condition_term(
		&self,
		doc: &Path,
		path: &FieldPath,
		term: ConditionTerm,
	) -> Result<Field> {
		self.edit(doc, |fields| {
			Ok(mutation::add_condition_term(fields, path, term)?.clone())
		})
		.await
	}

	pub async fn remove_condition_term(
		&self,
		doc: &Path,
		path: &FieldPath,
		index: usize,
	) -> Result<Field> {
		self.edit(doc, |fields| {
			Ok(mutation::remove_condition_term(fields, path, index)?.clone())
		})
		.await
	}

	pub async fn set_condition_logical(
		&self,
		doc: &Path,
		path: &FieldPath,
		logical: Logical,
	) -> Result<Field> {
		self.edit(doc, |fields| {
			Ok(mutation::set_condition_logical(fields, path, logical)?.clone())
		})
		.await
	}

	pub async fn flatten(&self, doc: &Path) -> Result<Vec<FieldSummary>> {
		Ok(catalog::flatten(&self.store.load(doc).await?))
	}

	pub async fn parent_candidates(&self, doc: &Path) -> Result<Vec<FieldSummary>> {
		Ok(catalog::parent_candidates(&self.store.load(doc).await?))
	}

	pub async fn condition_targets(&self, doc: &Path) -> Result<Vec<ConditionTarget>> {
		Ok(catalog::condition_targets(&self.store.load(doc).await?))
	}

	async fn edit<T, F>(&self, doc: &Path, op: F) -> Result<T>
	where
		F: FnOnce(&mut Vec<Field>) -> fieldset_core::Result<T> + Send,
		T: Send,
	{
		let _guard = self.lock(doc).await;
		let mut fields = self.store.load(doc).await?;
		let out = op(&mut fields)?;
		self.store.save(doc, &fields).await?;
		Ok(out)
	}

	async fn lock(&self, doc: &Path) -> OwnedMutexGuard<()> {
		let lock = {
			let mut locks = self.locks.lock().await;
			// Entries nobody holds or waits on.
			locks.retain(|_, l| Arc::strong_count(l) > 1);
			locks.entry(doc.to_path_buf()).or_default().clone()
		};
		debug!(doc = %doc.display(), "waiting for document lock");
		lock.lock_owned().await
	}
}
