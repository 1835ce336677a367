// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration as read from a single source.

use serde::{Deserialize, Serialize};

use crate::sections::{HttpConfigLayer, LoggingConfigLayer, PathsConfigLayer};

/// One source's view of the configuration. Unset sections and fields are `None`
/// and leave lower-precedence values in place when merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerConfigLayer {
	pub http: Option<HttpConfigLayer>,
	pub paths: Option<PathsConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Overlays `other` on top of `self`.
	pub fn merge(&mut self, other: Self) {
		merge_option(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_option(&mut self.paths, other.paths, PathsConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T>(base: &mut Option<T>, other: Option<T>, merge: impl FnOnce(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(b), Some(o)) => merge(b, o),
		(None, Some(o)) => *base = Some(o),
		(_, None) => {}
	}
}
