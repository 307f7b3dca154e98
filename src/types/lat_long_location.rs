use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::services::places_client::types::place::Location;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatLngLiteral {
    pub lat: f64,
    pub lng: f64,
}

impl From<Location> for LatLngLiteral {
    fn from(location: Location) -> Self {
        LatLngLiteral {
            lat: location.latitude,
            lng: location.longitude,
        }
    }
}

/// Parses `"<lat>,<lng>"`.
impl FromStr for LatLngLiteral {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected \"lat,lng\", got \"{}\"", s))?;

        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid latitude: {}", e))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid longitude: {}", e))?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(format!("coordinates out of range: {},{}", lat, lng));
        }

        Ok(LatLngLiteral { lat, lng })
    }
}
