// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Condition editing HTTP handlers. Each returns the field as stored afterwards.

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	Json,
};
use fieldset_core::{ConditionTerm, Field, Logical};
use serde::Deserialize;

use super::{existing_document, field_path, FieldQuery};
use crate::api::AppState;
use crate::error::ServerError;

#[derive(Debug, Deserialize)]
pub struct SetLogicalRequest {
	pub logical: Logical,
}

/// POST /api/field/condition
pub async fn add_condition(
	State(state): State<AppState>,
	Query(query): Query<FieldQuery>,
	Json(term): Json<ConditionTerm>,
) -> Result<(StatusCode, Json<Field>), ServerError> {
	let doc = existing_document(&state, &query.path)?;
	let path = field_path(&query.field_path)?;
	let field = state.editor.add_condition_term(&doc, &path, term).await?;
	Ok((StatusCode::CREATED, Json(field)))
}

/// DELETE /api/field/condition/{index}
pub async fn remove_condition(
	State(state): State<AppState>,
	Path(index): Path<usize>,
	Query(query): Query<FieldQuery>,
) -> Result<Json<Field>, ServerError> {
	let doc = existing_document(&state, &query.path)?;
	let path = field_path(&query.field_path)?;
	Ok(Json(
		state.editor.remove_condition_term(&doc, &path, index).await?,
	))
}

/// PUT /api/field/condition/logical
pub async fn set_logical(
	State(state): State<AppState>,
	Query(query): Query<FieldQuery>,
	Json(request): Json<SetLogicalRequest>,
) -> Result<Json<Field>, ServerError> {
	let doc = existing_document(&state, &query.path)?;
	let path = field_path(&query.field_path)?;
	Ok(Json(
		state
			.editor
			.set_condition_logical(&doc, &path, request.logical)
			.await?,
	))
}
