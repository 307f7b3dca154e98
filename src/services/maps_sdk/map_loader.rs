use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};
use urlencoding::encode;

use super::types::map_loader_error::MapLoaderError;

pub const DEFAULT_SCRIPT_HOST: &str = "https://maps.googleapis.com";
pub const READY_CALLBACK_NAME: &str = "googleMapsAPIReady";

#[derive(Clone)]
pub struct MapLoaderConfig {
    pub api_key: String,
    pub script_host: String,
}

/// Tracks whether the maps SDK has announced itself through its ready callback.
///
/// The `NotReady -> Ready` transition happens once. Waiters are woken by the
/// transition instead of re-checking on a timer.
#[derive(Clone)]
pub struct MapLoader {
    config: MapLoaderConfig,
    ready: Arc<watch::Sender<bool>>,
}

impl MapLoader {
    pub fn new(config: MapLoaderConfig) -> Self {
        let (ready, _) = watch::channel(false);

        Self {
            config,
            ready: Arc::new(ready),
        }
    }

    /// URL of the script tag the client injects to load the SDK.
    pub fn script_url(&self) -> String {
        format!(
            "{}/maps/api/js?key={}&v=3&callback={}",
            self.config.script_host.trim_end_matches('/'),
            encode(&self.config.api_key),
            encode(READY_CALLBACK_NAME)
        )
    }

    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    /// Returns `true` only for the call that performed the transition.
    pub fn mark_ready(&self) -> bool {
        let transitioned = self.ready.send_if_modified(|ready| {
            if *ready {
                return false;
            }

            *ready = true;
            true
        });

        if transitioned {
            info!("Maps SDK is ready");
        } else {
            debug!("Maps SDK ready callback repeated, ignoring");
        }

        transitioned
    }

    pub async fn wait_ready(&self) -> Result<(), MapLoaderError> {
        let mut rx = self.ready.subscribe();

        rx.wait_for(|ready| *ready)
            .await
            .map(|_| ())
            .map_err(|_| MapLoaderError::LoaderClosed)
    }
}
