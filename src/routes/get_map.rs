use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    types::{app_state::AppState, lat_long_location::LatLngLiteral},
    view::map_widget::MapWidget,
};

#[derive(Serialize)]
pub struct GetMapResponseData {
    pub ready: bool,
    pub center: LatLngLiteral,
    pub radius: f64,
    pub map: Option<MapWidget>,
}

#[derive(Serialize)]
pub struct GetMapResponse {
    pub data: GetMapResponseData,
}

pub async fn get_map(State(state): State<AppState>) -> Json<GetMapResponse> {
    let view = state.view.lock().await;

    Json(GetMapResponse {
        data: GetMapResponseData {
            ready: state.map_loader.is_ready(),
            center: view.center(),
            radius: view.radius(),
            map: view.map().copied(),
        },
    })
}
