// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Folder and document management under the assets root.

use axum::{
	extract::{Query, State},
	http::StatusCode,
	Json,
};
use fieldset_store::{
	create_entry, delete_entry, entry_file_name, list_entries, Entry,
	EntryKind, ShowType, StoreError, Target,
};
use serde::Deserialize;

use super::MessageResponse;
use crate::api::AppState;
use crate::error::ServerError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
	#[serde(default)]
	pub path: String,
	pub show_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
	#[serde(default)]
	pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
	pub name: String,
	pub file_type: EntryKind,
}

/// Unrecognized filters list everything.
fn parse_show_type(raw: Option<&str>) -> ShowType {
	match raw {
		Some("file") => ShowType::File,
		Some("folder") => ShowType::Folder,
		_ => ShowType::All,
	}
}

/// GET /api/files
pub async fn list_files(
	State(state): State<AppState>,
	Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Entry>>, ServerError> {
	let dir = state.sandbox.resolve(&query.path, Target::Directory, true)?;
	let entries = list_entries(&dir, parse_show_type(query.show_type.as_deref())).await?;
	Ok(Json(entries))
}

/// POST /api/file
pub async fn create_file(
	State(state): State<AppState>,
	Query(query): Query<LocationQuery>,
	Json(request): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ServerError> {
	let path = state
		.sandbox
		.resolve_child(&query.path, &request.name)?
		.with_file_name(entry_file_name(&request.name, request.file_type));

	create_entry(&path, request.file_type).await?;

	Ok((StatusCode::CREATED, Json(MessageResponse::new("Created"))))
}

/// DELETE /api/file
pub async fn delete_file(
	State(state): State<AppState>,
	Query(query): Query<LocationQuery>,
) -> Result<Json<MessageResponse>, ServerError> {
	let path = state.sandbox.resolve(&query.path, Target::Any, true)?;
	if path == state.sandbox.root() {
		return Err(StoreError::AccessDenied("the assets root cannot be deleted".to_string()).into());
	}

	delete_entry(&path).await?;

	Ok(Json(MessageResponse::new("Deleted successfully")))
}
