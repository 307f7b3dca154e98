use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    services::{maps_sdk::map_loader::MapLoader, places_client::places_service::PlacesService},
    view::explorer_view::ExplorerView,
};

#[derive(Clone)]
pub struct AppState {
    pub places_service: PlacesService,
    pub map_loader: MapLoader,
    pub view: Arc<Mutex<ExplorerView>>,
}
