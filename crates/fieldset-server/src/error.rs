// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use fieldset_core::CoreError;
use fieldset_store::StoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error(transparent)]
	Store(#[from] StoreError),
}

impl From<CoreError> for ServerError {
	fn from(e: CoreError) -> Self {
		ServerError::Store(StoreError::Core(e))
	}
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl ServerError {
	pub fn status_code(&self) -> StatusCode {
		self.classify().0
	}

	fn classify(&self) -> (StatusCode, &'static str) {
		match self {
			ServerError::Store(e) => match e {
				StoreError::AccessDenied(_) => (StatusCode::FORBIDDEN, "access_denied"),
				StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
				StoreError::InvalidExtension(_) => (StatusCode::BAD_REQUEST, "invalid_extension"),
				StoreError::InvalidName(_) => (StatusCode::BAD_REQUEST, "bad_request"),
				StoreError::AlreadyExists { .. } => (StatusCode::CONFLICT, "conflict"),
				StoreError::Parse { .. } => (StatusCode::BAD_REQUEST, "parse_error"),
				StoreError::Core(core) => match core {
					CoreError::PathNotFound { .. } => (StatusCode::NOT_FOUND, "path_not_found"),
					CoreError::NotContainer { .. } => (StatusCode::NOT_FOUND, "not_container"),
					CoreError::IndexOutOfRange { .. } => {
						(StatusCode::NOT_FOUND, "condition_not_found")
					}
					CoreError::DuplicateKey { .. } => (StatusCode::CONFLICT, "duplicate_key"),
					CoreError::InvalidKey(_) | CoreError::InvalidPath(_) => {
						(StatusCode::BAD_REQUEST, "bad_request")
					}
					CoreError::RequiredFieldCondition(_) => (StatusCode::CONFLICT, "required_field"),
				},
				StoreError::Io(_) | StoreError::Serialization(_) => {
					(StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
				}
			},
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error) = self.classify();

		let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
			tracing::error!(error = %self, "internal error");
			"An internal error occurred".to_string()
		} else {
			if status == StatusCode::FORBIDDEN {
				tracing::warn!(error = %self, "request denied");
			} else {
				tracing::debug!(error = %self, status = status.as_u16(), "request failed");
			}
			self.to_string()
		};

		(
			status,
			Json(ErrorResponse {
				error: error.to_string(),
				message,
			}),
		)
			.into_response()
	}
}
