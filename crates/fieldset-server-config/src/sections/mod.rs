// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod http;
mod logging;
mod paths;

pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use paths::{PathsConfig, PathsConfigLayer};
