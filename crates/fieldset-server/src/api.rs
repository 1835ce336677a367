// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Router construction and shared handler state.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
	routing::{delete, get, post, put},
	Router,
};
use fieldset_store::{Sandbox, SchemaEditor};

use crate::routes;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
	pub editor: Arc<SchemaEditor>,
	pub sandbox: Sandbox,
}

impl AppState {
	pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
		Self {
			editor: Arc::new(SchemaEditor::default()),
			sandbox: Sandbox::new(assets_dir),
		}
	}
}

/// Builds the API router. Static UI serving, tracing and CORS layers are added
/// by the binary.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/types", get(routes::registry::get_types))
		.route("/api/files", get(routes::files::list_files))
		.route(
			"/api/file",
			post(routes::files::create_file).delete(routes::files::delete_file),
		)
		.route("/api/fields", get(routes::fields::get_fields))
		.route("/api/fields/flat", get(routes::fields::get_flat_fields))
		.route("/api/fields/parents", get(routes::fields::get_parent_candidates))
		.route("/api/fields/targets", get(routes::fields::get_condition_targets))
		.route(
			"/api/field",
			get(routes::fields::get_field)
				.post(routes::fields::add_field)
				.patch(routes::fields::update_field)
				.delete(routes::fields::delete_field),
		)
		.route("/api/field/condition", post(routes::conditions::add_condition))
		.route(
			"/api/field/condition/logical",
			put(routes::conditions::set_logical),
		)
		.route(
			"/api/field/condition/{index}",
			delete(routes::conditions::remove_condition),
		)
		.with_state(state)
}
