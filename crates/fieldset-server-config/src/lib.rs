// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the fieldset server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Consistent environment variable naming (`FIELDSET_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use fieldset_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub paths: PathsConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`FIELDSET_SERVER_*`)
/// 2. Config file (`/etc/fieldset/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path in place of the system one.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let paths = layer.paths.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&paths)?;

	info!(
		host = %http.host,
		port = http.port,
		assets_dir = %paths.assets_dir.display(),
		web_ui = paths.web_dir.is_some(),
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		paths,
		logging,
	})
}

fn validate_config(paths: &PathsConfig) -> Result<(), ConfigError> {
	if paths.assets_dir.as_os_str().is_empty() {
		return Err(ConfigError::Validation(
			"FIELDSET_SERVER_ASSETS_DIR must not be empty".to_string(),
		));
	}
	Ok(())
}
