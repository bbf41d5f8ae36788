use std::time::Duration;

use anyhow::{Context, Result};
use axum::{debug_handler, middleware, routing::get, Router};
use error_responder::{
    cli::Opt, filter::timeout::render_timeout, register, shutdown_signal::shutdown_signal,
};
use structopt::StructOpt;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[debug_handler]
async fn handle_ping() -> &'static str {
    "pong"
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "error_responder=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opt = Opt::from_args();

    let app = register(Router::new().route("/ping", get(handle_ping))).layer((
        TraceLayer::new_for_http(),
        middleware::map_response(render_timeout),
        TimeoutLayer::new(Duration::from_secs(opt.timeout_secs)),
    ));

    let address = opt.server_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
