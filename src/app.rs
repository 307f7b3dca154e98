use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use crate::{
    config::Config,
    routes::apply_routes,
    services::{
        maps_sdk::map_loader::{MapLoader, MapLoaderConfig},
        places_client::places_service::{PlacesService, PlacesServiceConfig},
    },
    types::app_state::AppState,
    view::explorer_view::ExplorerView,
};

pub fn gen_state(config: &Config) -> AppState {
    AppState {
        places_service: PlacesService::new(PlacesServiceConfig {
            internal_api_url: config.internal_api_url.clone(),
            fixture_fallback: config.places_fixture_fallback,
        }),
        map_loader: MapLoader::new(MapLoaderConfig {
            api_key: config.google_maps_api_key.clone(),
            script_host: config.maps_script_host.clone(),
        }),
        view: Arc::new(Mutex::new(ExplorerView::new(
            config.map_settings().default_center,
            config.radius,
            config.hours_style,
        ))),
    }
}

pub fn gen_app(state: AppState) -> Router {
    let cors_middleware = CorsLayer::new();

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

async fn root() -> &'static str {
    "Hello, World!"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub state: AppState,
    pub places_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    gen_mock_app_with_fallback(false).await
}

#[cfg(test)]
pub async fn gen_mock_app_with_fallback(fixture_fallback: bool) -> MockApp {
    use crate::{
        services::maps_sdk::map_loader::DEFAULT_SCRIPT_HOST,
        types::lat_long_location::LatLngLiteral, view::marker::HoursStyle,
    };

    let places_server = mockito::Server::new_async().await;

    let state = AppState {
        places_service: PlacesService::new(PlacesServiceConfig {
            internal_api_url: places_server.url(),
            fixture_fallback,
        }),
        map_loader: MapLoader::new(MapLoaderConfig {
            api_key: "key".to_string(),
            script_host: DEFAULT_SCRIPT_HOST.to_string(),
        }),
        view: Arc::new(Mutex::new(ExplorerView::new(
            LatLngLiteral {
                lat: 45.46427,
                lng: 9.18951,
            },
            1000.0,
            HoursStyle::Literal,
        ))),
    };

    MockApp {
        app: gen_app(state.clone()),
        state,
        places_server,
    }
}
