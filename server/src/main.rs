//! SSR host for the job portal.
//!
//! Renders the Leptos app on the server, serves the hydration bundle from
//! `/pkg`, and answers `/healthz`. It exposes no `/api/*` endpoints; the
//! client runs in demo mode or talks to a separately deployed API.

mod config;
mod error;
mod routes;

use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine; real deployments set the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "jobportal listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
