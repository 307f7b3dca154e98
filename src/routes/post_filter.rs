use axum::{extract::State, http::StatusCode, Json};
#[cfg(test)]
use axum_macros::debug_handler;
use chrono::{Datelike, Local};
use serde::Serialize;
use tracing::error;

use crate::{
    services::places_client::places_service::PlacesSource,
    types::app_state::AppState,
    utils::app_error::AppError,
    view::{explorer_view::SearchOutcome, marker::Marker},
};

#[derive(Serialize)]
pub struct PostFilterResponseData {
    pub source: PlacesSource,
    /// Markers drawn by this search; 0 when it found nothing.
    pub rendered: usize,
    pub markers: Vec<Marker>,
}

#[derive(Serialize)]
pub struct PostFilterResponse {
    pub data: PostFilterResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_filter(
    State(state): State<AppState>,
) -> Result<Json<PostFilterResponse>, AppError> {
    let (ticket, request) = state.view.lock().await.begin_search();

    let output = state
        .places_service
        .get_all_places_nearby(&request)
        .await
        .map_err(|e| {
            error!("Failed to fetch places nearby: {}", e);
            AppError::from(e)
        })?;

    let today = Local::now().weekday();
    let mut view = state.view.lock().await;

    let rendered = match view.apply_results(ticket, &output.places, today) {
        SearchOutcome::Rendered(count) => count,
        SearchOutcome::Empty => 0,
        SearchOutcome::Superseded => {
            return Err(AppError::new(
                StatusCode::CONFLICT,
                "Superseded by a newer search",
            ))
        }
    };

    Ok(Json(PostFilterResponse {
        data: PostFilterResponseData {
            source: output.source,
            rendered,
            markers: view.markers().markers().to_vec(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        Router,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        app::{gen_mock_app, gen_mock_app_with_fallback},
        services::places_client::types::error_info::ErrorInfo,
        view::included_type::IncludedType,
    };

    #[derive(Deserialize)]
    struct PostFilterResponseBody {
        data: PostFilterResponseBodyData,
    }

    #[derive(Deserialize)]
    struct PostFilterResponseBodyData {
        source: String,
        rendered: usize,
        markers: Vec<serde_json::Value>,
    }

    const PLACES: &str = r#"[
        {
            "id": "1",
            "types": ["fine_dining_restaurant", "restaurant"],
            "location": { "latitude": 45.1, "longitude": 9.1 },
            "displayName": { "text": "Fancy" },
            "rating": 4.8,
            "userRatingCount": 90
        },
        {
            "id": "2",
            "types": ["bar"],
            "location": { "latitude": 45.2, "longitude": 9.2 },
            "displayName": { "text": "Pub" },
            "rating": 3.9,
            "userRatingCount": 12
        }
    ]"#;

    async fn filter(app: &Router) -> (StatusCode, axum::body::Bytes) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/filter")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        (status, to_bytes(response.into_body(), usize::MAX).await.unwrap())
    }

    #[tokio::test]
    async fn renders_markers_from_backend() {
        let mut mock_app = gen_mock_app().await;
        mock_app
            .state
            .view
            .lock()
            .await
            .toggle_type(IncludedType::Restaurant);

        let mock_server = mock_app
            .places_server
            .mock("POST", "/api/places/places-nearby")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "includedTypes": ["restaurant"],
                "latitude": 45.46427,
                "longitude": 9.18951,
                "radius": 1000.0
            })))
            .with_header("content-type", "application/json")
            .with_body(PLACES)
            .create_async()
            .await;

        let (status, body) = filter(&mock_app.app).await;

        mock_server.assert_async().await;
        assert_eq!(status, StatusCode::OK);

        let body: PostFilterResponseBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.data.source, "live");
        assert_eq!(body.data.rendered, 2);
        assert_eq!(body.data.markers.len(), 2);
        assert_eq!(
            body.data.markers[0]["details"]["category"],
            "Fine Dining Restaurant"
        );
        assert_eq!(body.data.markers[0]["details"]["ratingCount"], 90);
        assert_eq!(body.data.markers[1]["position"]["lat"], 45.2);
        assert!(body.data.markers[1]["details"].get("workingHours").is_none());

        assert_eq!(mock_app.state.view.lock().await.markers().markers().len(), 2);
    }

    #[tokio::test]
    async fn empty_result_keeps_markers() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .places_server
            .mock("POST", "/api/places/places-nearby")
            .with_body(PLACES)
            .create_async()
            .await;
        filter(&mock_app.app).await;

        mock_app.places_server.reset();
        mock_app
            .places_server
            .mock("POST", "/api/places/places-nearby")
            .with_body("[]")
            .create_async()
            .await;

        let (status, body) = filter(&mock_app.app).await;
        let body: PostFilterResponseBody = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.rendered, 0);
        assert_eq!(body.data.markers.len(), 2);
    }

    #[tokio::test]
    async fn surfaces_backend_failure() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .places_server
            .mock("POST", "/api/places/places-nearby")
            .with_status(500)
            .create_async()
            .await;

        let (status, body) = filter(&mock_app.app).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let body: ErrorInfo = serde_json::from_slice(&body).unwrap();
        assert!(!body.message.is_empty());
        assert!(!body.message.starts_with("Error: "));
        assert!(mock_app.state.view.lock().await.markers().markers().is_empty());
    }

    #[tokio::test]
    async fn falls_back_to_bundled_places() {
        let mut mock_app = gen_mock_app_with_fallback(true).await;

        mock_app
            .places_server
            .mock("POST", "/api/places/places-nearby")
            .with_status(500)
            .create_async()
            .await;

        let (status, body) = filter(&mock_app.app).await;

        assert_eq!(status, StatusCode::OK);

        let body: PostFilterResponseBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.data.source, "fixture");
        assert_eq!(body.data.markers.len(), 3);
        assert_eq!(
            body.data.markers[0]["details"]["title"],
            "Trattoria del Duomo"
        );
    }

    #[tokio::test]
    async fn renders_places_with_null_fields() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .places_server
            .mock("POST", "/api/places/places-nearby")
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {
                        "id": "1",
                        "types": ["bar"],
                        "displayName": { "text": "Nullable" },
                        "rating": null,
                        "regularOpeningHours": { "openNow": false, "periods": null }
                    },
                    { "id": "2", "types": ["cafe"], "displayName": { "text": "Plain" } }
                ]"#,
            )
            .create_async()
            .await;

        let (status, body) = filter(&mock_app.app).await;

        assert_eq!(status, StatusCode::OK);

        let body: PostFilterResponseBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.data.source, "live");
        assert_eq!(body.data.rendered, 2);
        assert_eq!(body.data.markers[0]["details"]["rating"], 0.0);
        assert!(body.data.markers[0]["details"].get("workingHours").is_none());
    }
}
