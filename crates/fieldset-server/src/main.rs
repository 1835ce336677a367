// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! fieldset schema editor server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fieldset_server::{create_router, version, AppState};
use tower_http::{
	cors::{Any, CorsLayer},
	services::ServeDir,
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// fieldset server - HTTP API for editing schema documents.
#[derive(Parser, Debug)]
#[command(name = "fieldset-server", about = "fieldset schema editor server", version)]
struct Args {
	/// Path to a TOML config file (replaces /etc/fieldset/server.toml)
	#[arg(long, env = "FIELDSET_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => fieldset_server_config::load_config_with_file(path)?,
		None => fieldset_server_config::load_config()?,
	};

	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| config.logging.level.clone().into());
	if config.logging.json {
		tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer().json())
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer())
			.init();
	}

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		assets_dir = %config.paths.assets_dir.display(),
		"starting fieldset-server"
	);

	tokio::fs::create_dir_all(&config.paths.assets_dir).await?;

	let state = AppState::new(config.paths.assets_dir.clone());
	let mut app = create_router(state);

	if let Some(web_dir) = &config.paths.web_dir {
		tracing::info!(web_dir = %web_dir.display(), "serving static editor");
		app = app.fallback_service(ServeDir::new(web_dir));
	}

	let app = app.layer(TraceLayer::new_for_http()).layer(
		CorsLayer::new()
			.allow_origin(Any)
			.allow_methods(Any)
			.allow_headers(Any),
	);

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
