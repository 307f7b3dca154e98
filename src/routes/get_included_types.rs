use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    types::app_state::AppState,
    view::{included_type::IncludedType, marker::normalize_category},
};

#[derive(Serialize, Deserialize)]
pub struct GetIncludedTypesResponseDataType {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Serialize, Deserialize)]
pub struct GetIncludedTypesResponseData {
    pub types: Vec<GetIncludedTypesResponseDataType>,
}

#[derive(Serialize, Deserialize)]
pub struct GetIncludedTypesResponse {
    pub data: GetIncludedTypesResponseData,
}

pub async fn get_included_types(State(state): State<AppState>) -> Json<GetIncludedTypesResponse> {
    let view = state.view.lock().await;

    Json(GetIncludedTypesResponse {
        data: GetIncludedTypesResponseData {
            types: IncludedType::ALL
                .into_iter()
                .map(|t| GetIncludedTypesResponseDataType {
                    id: t.to_string(),
                    label: normalize_category(&t.to_string()),
                    selected: view.is_selected(t),
                })
                .collect(),
        },
    })
}
