use axum::{extract::State, Json};
use serde::Serialize;

use crate::{types::app_state::AppState, view::marker::Marker};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMarkersResponseData {
    pub markers: Vec<Marker>,
    pub open_info_window: Option<usize>,
}

#[derive(Serialize)]
pub struct GetMarkersResponse {
    pub data: GetMarkersResponseData,
}

pub async fn get_markers(State(state): State<AppState>) -> Json<GetMarkersResponse> {
    let view = state.view.lock().await;

    Json(GetMarkersResponse {
        data: GetMarkersResponseData {
            markers: view.markers().markers().to_vec(),
            open_info_window: view.markers().open_info_window(),
        },
    })
}
