//! # aeiban-api Entry Point
//!
//! Parses flags, initializes tracing, builds the bank registry once, and
//! serves the router. A dataset that cannot be read aborts startup; it is
//! an operational fault, never a caller error.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tower_http::trace::TraceLayer;

use aeiban_api::{routes, AppState};
use aeiban_core::BankRegistry;

/// AE IBAN validation service.
///
/// Validates UAE IBANs against structure, check digits, and the bank-code
/// registry, and serves lookup/search over that registry.
#[derive(Parser, Debug)]
#[command(name = "aeiban-api", version, about)]
struct Args {
    /// Socket address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: SocketAddr,

    /// Path to a bank-code CSV dataset; uses the embedded dataset when
    /// omitted.
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Restrict validity checks and search results to Live banks.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    live_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let registry = match &args.dataset {
        Some(path) => BankRegistry::from_path(path, args.live_only)?,
        None => BankRegistry::embedded(args.live_only),
    };
    tracing::info!(
        banks = registry.size(),
        live_only = registry.live_only(),
        "bank registry loaded"
    );

    let state = AppState::new(Arc::new(registry));
    let app = routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    tracing::info!(addr = %args.listen, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
