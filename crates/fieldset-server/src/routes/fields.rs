// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Field tree HTTP handlers.

use axum::{
	extract::{Query, State},
	http::StatusCode,
	Json,
};
use fieldset_core::{ConditionTarget, Field, FieldPatch, FieldSummary};
use serde::Deserialize;

use super::{
	existing_document, field_path, readable_document, DocumentQuery, FieldQuery, MessageResponse,
	ParentQuery,
};
use crate::api::AppState;
use crate::error::ServerError;

#[derive(Debug, Deserialize)]
pub struct DeleteFieldRequest {
	pub key: String,
}

/// GET /api/fields - the whole document tree.
pub async fn get_fields(
	State(state): State<AppState>,
	Query(query): Query<DocumentQuery>,
) -> Result<Json<Vec<Field>>, ServerError> {
	let doc = readable_document(&state, &query.path)?;
	Ok(Json(state.editor.load_document(&doc).await?))
}

/// GET /api/fields/flat
pub async fn get_flat_fields(
	State(state): State<AppState>,
	Query(query): Query<DocumentQuery>,
) -> Result<Json<Vec<FieldSummary>>, ServerError> {
	let doc = readable_document(&state, &query.path)?;
	Ok(Json(state.editor.flatten(&doc).await?))
}

/// GET /api/fields/parents
pub async fn get_parent_candidates(
	State(state): State<AppState>,
	Query(query): Query<DocumentQuery>,
) -> Result<Json<Vec<FieldSummary>>, ServerError> {
	let doc = readable_document(&state, &query.path)?;
	Ok(Json(state.editor.parent_candidates(&doc).await?))
}

/// GET /api/fields/targets
pub async fn get_condition_targets(
	State(state): State<AppState>,
	Query(query): Query<DocumentQuery>,
) -> Result<Json<Vec<ConditionTarget>>, ServerError> {
	let doc = readable_document(&state, &query.path)?;
	Ok(Json(state.editor.condition_targets(&doc).await?))
}

/// GET /api/field
pub async fn get_field(
	State(state): State<AppState>,
	Query(query): Query<FieldQuery>,
) -> Result<Json<Field>, ServerError> {
	let doc = readable_document(&state, &query.path)?;
	let path = field_path(&query.field_path)?;
	Ok(Json(state.editor.get_field(&doc, &path).await?))
}

/// POST /api/field
pub async fn add_field(
	State(state): State<AppState>,
	Query(query): Query<ParentQuery>,
	Json(field): Json<Field>,
) -> Result<(StatusCode, Json<Field>), ServerError> {
	let doc = existing_document(&state, &query.path)?;
	let parent = field_path(&query.parent_path)?;
	let added = state.editor.add_field(&doc, &parent, field).await?;
	Ok((StatusCode::CREATED, Json(added)))
}

/// DELETE /api/field
pub async fn delete_field(
	State(state): State<AppState>,
	Query(query): Query<ParentQuery>,
	Json(request): Json<DeleteFieldRequest>,
) -> Result<Json<MessageResponse>, ServerError> {
	let doc = existing_document(&state, &query.path)?;
	let parent = field_path(&query.parent_path)?;
	state
		.editor
		.delete_field_in(&doc, &parent, &request.key)
		.await?;
	Ok(Json(MessageResponse::new("Deleted successfully")))
}

/// PATCH /api/field
pub async fn update_field(
	State(state): State<AppState>,
	Query(query): Query<FieldQuery>,
	Json(patch): Json<FieldPatch>,
) -> Result<Json<Field>, ServerError> {
	let doc = existing_document(&state, &query.path)?;
	let path = field_path(&query.field_path)?;
	Ok(Json(state.editor.update_field(&doc, &path, patch).await?))
}
