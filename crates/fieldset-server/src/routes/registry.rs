// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Static lookup tables for editors.

use axum::Json;
use fieldset_core::{item_type_candidates, type_operators, FieldType, Logical, Operator, RegistryEntry};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TypeOperators {
	pub field_type: FieldType,
	pub operators: Vec<RegistryEntry>,
}

#[derive(Debug, Serialize)]
pub struct TypesResponse {
	pub field_types: Vec<RegistryEntry>,
	pub item_types: Vec<RegistryEntry>,
	pub logicals: Vec<RegistryEntry>,
	pub operators: Vec<RegistryEntry>,
	pub type_operators: Vec<TypeOperators>,
}

/// GET /api/types
pub async fn get_types() -> Json<TypesResponse> {
	Json(TypesResponse {
		field_types: FieldType::ALL.iter().map(FieldType::entry).collect(),
		item_types: item_type_candidates().iter().map(FieldType::entry).collect(),
		logicals: Logical::ALL.iter().map(Logical::entry).collect(),
		operators: Operator::ALL.iter().map(Operator::entry).collect(),
		type_operators: type_operators()
			.into_iter()
			.map(|(field_type, ops)| TypeOperators {
				field_type,
				operators: ops.iter().map(Operator::entry).collect(),
			})
			.collect(),
	})
}
