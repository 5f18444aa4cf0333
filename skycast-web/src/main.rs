//! HTTP shell for the skycast weather lookup.
//!
//! Serves the single-page frontend at `/` and the lookup endpoint at
//! `/weather?city=<name>`.

mod handlers;
mod routes;
mod state;

use std::{env, net::SocketAddr};

use skycast_core::{Config, OpenMeteo};
use tracing_subscriber::EnvFilter;

use crate::routes::app_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::load()?;
    let weather = OpenMeteo::new(&config)?;
    let state = AppState { weather };

    let listen = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let addr: SocketAddr = listen.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app_router(state)).await?;

    Ok(())
}
