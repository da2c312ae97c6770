use std::sync::Arc;

use clap::Parser;
use larder_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let default_level = if log.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone())?;
    let app = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Recipe Generator API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
