use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::{
    types::app_state::AppState,
    utils::app_error::AppError,
    view::{marker::MarkerDetails, marker_layer::InfoWindowChange},
};

#[derive(Serialize)]
pub struct PostMarkerClickResponseData {
    #[serde(flatten)]
    pub change: InfoWindowChange,
    pub details: MarkerDetails,
}

#[derive(Serialize)]
pub struct PostMarkerClickResponse {
    pub data: PostMarkerClickResponseData,
}

pub async fn post_marker_click(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<PostMarkerClickResponse>, AppError> {
    let mut view = state.view.lock().await;

    let change = view
        .click_marker(index)
        .ok_or_else(|| AppError::new(StatusCode::NOT_FOUND, "No marker at this index"))?;

    let details = view.markers().markers()[change.opened].details.clone();

    Ok(Json(PostMarkerClickResponse {
        data: PostMarkerClickResponseData { change, details },
    }))
}
