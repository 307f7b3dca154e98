use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::types::app_state::AppState;

#[derive(Serialize, Deserialize)]
pub struct GetMapScriptResponseData {
    pub url: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetMapScriptResponse {
    pub data: GetMapScriptResponseData,
}

pub async fn get_map_script(State(state): State<AppState>) -> Json<GetMapScriptResponse> {
    Json(GetMapScriptResponse {
        data: GetMapScriptResponseData {
            url: state.map_loader.script_url(),
        },
    })
}
