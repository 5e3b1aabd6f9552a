mod admission;
mod handlers;

use crate::config::{Overrides, PipelineOptions, ServiceConfig};
use crate::gate::AdmissionGate;
use crate::prelude::{eprintln, *};
use crate::random::RandomIndexSource;
use axum::{middleware, routing::get, Router};
use labs_core::Blacklist;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on (default: 3000)
    #[arg(short, long, env = "LABS_PORT")]
    pub port: Option<u16>,

    /// Host to bind to (default: 127.0.0.1)
    #[arg(long, env = "LABS_HOST")]
    pub host: Option<String>,

    /// Maximum number of requests processed at the same time (default: 5)
    #[arg(short, long, env = "LABS_CAPACITY")]
    pub capacity: Option<usize>,

    #[command(flatten)]
    pub pipeline: PipelineOptions,
}

impl ServeOptions {
    fn overrides(&self) -> Overrides {
        Overrides {
            capacity: self.capacity,
            host: self.host.clone(),
            port: self.port,
            ..Overrides::from(&self.pipeline)
        }
    }
}

/// Shared by every request handler.
#[derive(Debug)]
pub struct AppState {
    pub blacklist: Blacklist,
    pub random: RandomIndexSource,
    pub gate: Arc<AdmissionGate>,
}

impl AppState {
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            blacklist: Blacklist::new(&config.blacklist),
            random: RandomIndexSource::new(config.random_api_url.clone(), config.random_timeout)?,
            gate: Arc::new(AdmissionGate::new(config.capacity)),
        })
    }
}

/// Build the service router.
///
/// `/labs` runs behind the admission gate; `/health` does not, so it keeps
/// answering while the gate is full.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let gated = Router::new()
        .route("/labs", get(handlers::labs))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.gate),
            admission::admit,
        ));

    Router::new()
        .merge(gated)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

/// Module entry point
pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let config = ServiceConfig::load(options.pipeline.config.as_deref(), options.overrides())?;
    let addr = config.addr();
    let state = Arc::new(AppState::from_config(&config)?);

    log::info!(
        "Starting labs on {addr} (capacity: {}, random source: {}, blacklist: {} words)",
        config.capacity,
        config.random_api_url.as_deref().unwrap_or("local"),
        state.blacklist.len()
    );

    if global.verbose {
        eprintln!("labs listening on http://{addr}");
        eprintln!("Process endpoint: http://{addr}/labs?input=abcd&isQuickSort=true");
        eprintln!("Health endpoint: http://{addr}/health");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
