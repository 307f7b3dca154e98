use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, validated_json::ValidatedJson},
};

#[derive(Validate, Deserialize)]
pub struct PutRadiusPayload {
    #[validate(range(min = 1.0, max = 50000.0, message = "Must be between 1 and 50000 metres"))]
    pub radius: f64,
}

#[derive(Serialize, Deserialize)]
pub struct PutRadiusResponseData {
    pub radius: f64,
}

#[derive(Serialize, Deserialize)]
pub struct PutRadiusResponse {
    pub data: PutRadiusResponseData,
}

pub async fn put_radius(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PutRadiusPayload>,
) -> Result<Json<PutRadiusResponse>, AppError> {
    state.view.lock().await.set_radius(payload.radius);

    Ok(Json(PutRadiusResponse {
        data: PutRadiusResponseData {
            radius: payload.radius,
        },
    }))
}
