mod app;
mod config;
mod routes;
mod services;
mod types;
mod utils;
mod view;

use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use validator::Validate;

use crate::{
    config::Config, services::maps_sdk::geolocation::StaticGeolocator,
    view::map_widget::run_map_initializer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    config.validate()?;

    info!("Starting places explorer...");
    if config.places_fixture_fallback {
        info!("Fixture fallback enabled: failed searches answer with bundled places");
    }

    let state = app::gen_state(&config);

    let cancel = CancellationToken::new();
    let initializer = tokio::spawn(run_map_initializer(
        state.map_loader.clone(),
        Arc::new(StaticGeolocator::new(config.current_location)),
        config.map_settings(),
        state.view.clone(),
        cancel.clone(),
    ));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app::gen_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cancel.cancel();
    initializer.await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
