pub mod day;
pub mod explorer_view;
pub mod included_type;
pub mod map_widget;
pub mod marker;
pub mod marker_layer;
