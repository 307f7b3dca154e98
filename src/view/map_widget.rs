use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::explorer_view::ExplorerView;
use crate::{
    services::maps_sdk::{geolocation::Geolocator, map_loader::MapLoader},
    types::lat_long_location::LatLngLiteral,
};

#[derive(Debug, Clone, Copy)]
pub struct MapSettings {
    pub default_center: LatLngLiteral,
    pub is_current_location: bool,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapWidget {
    pub center: LatLngLiteral,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl MapWidget {
    pub fn new(center: LatLngLiteral, settings: &MapSettings) -> Self {
        Self {
            center,
            zoom: settings.zoom,
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
        }
    }
}

/// Waits for the maps SDK, resolves the centre and builds the map once.
pub async fn run_map_initializer(
    loader: MapLoader,
    geolocator: Arc<dyn Geolocator>,
    settings: MapSettings,
    view: Arc<Mutex<ExplorerView>>,
    cancel: CancellationToken,
) {
    tokio::select! {
        _ = cancel.cancelled() => {
            info!("Map initialisation cancelled before the SDK was ready");
            return;
        }
        ready = loader.wait_ready() => {
            if let Err(e) = ready {
                error!("Map initialisation aborted: {}", e);
                return;
            }
        }
    }

    let center = if settings.is_current_location {
        tokio::select! {
            _ = cancel.cancelled() => return,
            position = geolocator.current_position() => match position {
                Ok(position) => position,
                Err(e) => {
                    warn!("Falling back to the default map centre: {}", e);
                    settings.default_center
                }
            },
        }
    } else {
        settings.default_center
    };

    if view.lock().await.initialize_map(MapWidget::new(center, &settings)) {
        info!("Map initialised at {},{}", center.lat, center.lng);
    }
}
