use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    types::app_state::AppState, utils::app_error::AppError, view::included_type::IncludedType,
};

#[derive(Serialize, Deserialize)]
pub struct PostToggleIncludedTypeResponseData {
    pub id: String,
    pub selected: bool,
}

#[derive(Serialize, Deserialize)]
pub struct PostToggleIncludedTypeResponse {
    pub data: PostToggleIncludedTypeResponseData,
}

pub async fn post_toggle_included_type(
    State(state): State<AppState>,
    Path(included_type): Path<String>,
) -> Result<Json<PostToggleIncludedTypeResponse>, AppError> {
    let included_type = included_type
        .parse::<IncludedType>()
        .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, &e))?;

    let selected = state.view.lock().await.toggle_type(included_type);
    debug!("Toggled {} to {}", included_type, selected);

    Ok(Json(PostToggleIncludedTypeResponse {
        data: PostToggleIncludedTypeResponseData {
            id: included_type.to_string(),
            selected,
        },
    }))
}
