use serde::Serialize;
use tracing::{info, warn};

use super::{
    internal_http_client::InternalHttpClient,
    types::{error_info::ErrorInfo, filter_request_data::FilterRequestData, place::Place},
};

const BASE_PLACES_API_URL: &str = "/api/places";
const GET_PLACES_NEARBY_API_URL: &str = "/places-nearby";

const MOCKED_PLACES: &str = include_str!("../../../assets/mocked_places.json");

#[derive(Clone)]
pub struct PlacesServiceConfig {
    pub internal_api_url: String,
    /// Serve the bundled places when the backend call fails. Demo/debug only.
    pub fixture_fallback: bool,
}

#[derive(Clone)]
pub struct PlacesService {
    config: PlacesServiceConfig,
    client: InternalHttpClient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacesSource {
    Live,
    Fixture,
}

pub struct PlacesNearbyOutput {
    pub places: Vec<Place>,
    pub source: PlacesSource,
}

impl PlacesService {
    pub fn new(config: PlacesServiceConfig) -> Self {
        Self {
            config,
            client: InternalHttpClient::new(),
        }
    }

    pub fn places_nearby_url(&self) -> String {
        format!(
            "{}{}{}",
            self.config.internal_api_url.trim_end_matches('/'),
            BASE_PLACES_API_URL,
            GET_PLACES_NEARBY_API_URL
        )
    }

    pub async fn get_all_places_nearby(
        &self,
        data: &FilterRequestData,
    ) -> Result<PlacesNearbyOutput, ErrorInfo> {
        match self
            .client
            .post_request::<_, Vec<Place>>(&self.places_nearby_url(), data)
            .await
        {
            Ok(places) => {
                info!("Fetched {} places nearby", places.len());
                Ok(PlacesNearbyOutput {
                    places,
                    source: PlacesSource::Live,
                })
            }
            Err(e) if self.config.fixture_fallback => {
                warn!("Places request failed, serving bundled places: {}", e);
                Ok(PlacesNearbyOutput {
                    places: mocked_places()?,
                    source: PlacesSource::Fixture,
                })
            }
            Err(e) => Err(e),
        }
    }
}

pub fn mocked_places() -> Result<Vec<Place>, ErrorInfo> {
    serde_json::from_str(MOCKED_PLACES).map_err(ErrorInfo::from_raw)
}
