use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::types::app_state::AppState;

#[derive(Serialize, Deserialize)]
pub struct PostMapReadyResponseData {
    pub transitioned: bool,
}

#[derive(Serialize, Deserialize)]
pub struct PostMapReadyResponse {
    pub data: PostMapReadyResponseData,
}

/// Called by the client once the maps SDK script has invoked its ready callback.
pub async fn post_map_ready(State(state): State<AppState>) -> Json<PostMapReadyResponse> {
    Json(PostMapReadyResponse {
        data: PostMapReadyResponseData {
            transitioned: state.map_loader.mark_ready(),
        },
    })
}
