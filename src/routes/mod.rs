use axum::{
    routing::{get, post, put},
    Router,
};

use crate::types::app_state::AppState;

mod get_included_types;
mod get_map;
mod get_map_script;
mod get_markers;
mod post_filter;
mod post_map_ready;
mod post_marker_click;
mod post_toggle_included_type;
mod put_radius;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/included-types",
        get(get_included_types::get_included_types),
    )
    .route(
        "/included-types/:included_type/toggle",
        post(post_toggle_included_type::post_toggle_included_type),
    )
    .route("/radius", put(put_radius::put_radius))
    .route("/filter", post(post_filter::post_filter))
    .route("/markers", get(get_markers::get_markers))
    .route(
        "/markers/:index/click",
        post(post_marker_click::post_marker_click),
    )
    .route("/map", get(get_map::get_map))
    .route("/map/script", get(get_map_script::get_map_script))
    .route("/map/ready", post(post_map_ready::post_map_ready))
}
