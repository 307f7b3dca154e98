pub mod app_state;
pub mod lat_long_location;
