use clap::Parser;
use validator::{Validate, ValidationError};

use crate::{
    services::maps_sdk::map_loader::DEFAULT_SCRIPT_HOST,
    types::lat_long_location::LatLngLiteral,
    view::{map_widget::MapSettings, marker::HoursStyle},
};

/// Static settings, read once from the environment (or `.env`) at startup.
#[derive(Parser, Validate, Clone, Debug)]
#[command(version, about)]
#[validate(schema(function = "validate_map_settings"))]
pub struct Config {
    /// Origin of the backend that proxies the places API.
    #[clap(env, long, default_value = "http://localhost:5000")]
    #[validate(url)]
    pub internal_api_url: String,

    #[clap(env = "GOOGLE_MAPS_API_KEY", long, default_value = "")]
    pub google_maps_api_key: String,

    #[clap(env, long, default_value = DEFAULT_SCRIPT_HOST)]
    #[validate(url)]
    pub maps_script_host: String,

    /// Centre the map on the current location instead of the default one.
    #[clap(env, long)]
    pub is_current_location: bool,

    /// Current location as `lat,lng`; stands in for a device position reading.
    #[clap(env, long)]
    pub current_location: Option<LatLngLiteral>,

    #[clap(env, long, default_value_t = 45.46427, allow_negative_numbers = true)]
    pub default_latitude: f64,

    #[clap(env, long, default_value_t = 9.18951, allow_negative_numbers = true)]
    pub default_longitude: f64,

    /// Initial search radius in metres.
    #[clap(env, long, default_value_t = 1000.0)]
    #[validate(range(min = 1.0, max = 50000.0))]
    pub radius: f64,

    #[clap(env, long, default_value_t = 12)]
    pub zoom: u8,

    #[clap(env, long, default_value_t = 1)]
    pub min_zoom: u8,

    #[clap(env, long, default_value_t = 20)]
    pub max_zoom: u8,

    /// Answer failed searches with the bundled places. Demo/debug only.
    #[clap(env, long)]
    pub places_fixture_fallback: bool,

    #[clap(env, long, value_enum, default_value_t = HoursStyle::Literal)]
    pub hours_style: HoursStyle,

    #[clap(env, long, default_value = "0.0.0.0:3000")]
    pub listen_addr: String,
}

impl Config {
    pub fn map_settings(&self) -> MapSettings {
        MapSettings {
            default_center: LatLngLiteral {
                lat: self.default_latitude,
                lng: self.default_longitude,
            },
            is_current_location: self.is_current_location,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

fn validate_map_settings(config: &Config) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&config.default_latitude)
        || !(-180.0..=180.0).contains(&config.default_longitude)
    {
        return Err(ValidationError::new("default_centre_out_of_range"));
    }

    if config.min_zoom > config.max_zoom
        || config.zoom < config.min_zoom
        || config.zoom > config.max_zoom
    {
        return Err(ValidationError::new("zoom_out_of_bounds"));
    }

    Ok(())
}
