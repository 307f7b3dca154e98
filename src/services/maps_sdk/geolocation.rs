use async_trait::async_trait;

use super::types::map_loader_error::MapLoaderError;
use crate::types::lat_long_location::LatLngLiteral;

/// Single-shot source of the user's current position.
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<LatLngLiteral, MapLoaderError>;
}

/// Position fixed at startup, e.g. from configuration. `None` behaves like a
/// denied permission.
pub struct StaticGeolocator {
    position: Option<LatLngLiteral>,
}

impl StaticGeolocator {
    pub fn new(position: Option<LatLngLiteral>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocator for StaticGeolocator {
    async fn current_position(&self) -> Result<LatLngLiteral, MapLoaderError> {
        self.position
            .ok_or_else(|| MapLoaderError::Geolocation("no position configured".to_string()))
    }
}
