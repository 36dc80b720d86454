//! Green Claims Check server
//!
//! Exposes the green claims scanner over HTTP:
//!
//! - Text scanning (severity-grouped and legacy per-term shapes)
//! - HTML highlighting of findings
//! - Term corpus listing
//!
//! ## Architecture
//!
//! Handlers are thin wrappers around `green-claims-engine`; the server owns
//! request validation (input type and length), rate limiting via
//! tower-governor and CORS for the browser front end.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_health, handle_highlight, handle_list_terms, handle_scan, handle_scan_legacy};

/// Command-line arguments for the green claims server
#[derive(Parser, Debug)]
#[command(name = "green-claims-server")]
#[command(about = "Scans marketing copy for claims at risk under EU Directive 2024/825")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "GREEN_CLAIMS_PORT")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "GREEN_CLAIMS_HOST")]
    host: String,

    /// Maximum accepted text length in characters
    #[arg(long, default_value = "10000", env = "GREEN_CLAIMS_MAX_TEXT_LENGTH")]
    max_text_length: usize,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10", env = "GREEN_CLAIMS_RATE_LIMIT")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long, env = "GREEN_CLAIMS_VERBOSE")]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Longest accepted `text`, in characters
    pub max_text_length: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            max_text_length: api::DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

/// Routes without the per-IP limiter, which needs a real peer address
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/scan", post(handle_scan))
        .route("/api/scan/legacy", post(handle_scan_legacy))
        .route("/api/highlight", post(handle_highlight))
        .route("/api/terms", get(handle_list_terms))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting green claims server on {}:{}",
        args.host, args.port
    );

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit.saturating_mul(2))
            .finish()
            .ok_or_else(|| anyhow!("invalid rate limit: {}", args.rate_limit))?,
    );

    let state = AppState {
        max_text_length: args.max_text_length,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state)
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Max text length: {} chars", args.max_text_length);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
